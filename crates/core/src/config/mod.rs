pub mod control;
pub mod settings;
pub mod tuning;
