// Adapters layer: concrete implementations for external systems (http, csv).

pub mod anymailfinder;
pub mod csv_sink;
pub mod input;
