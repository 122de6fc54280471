mod commands;
mod logger;
mod render;
pub mod setup;

pub use commands::run;
