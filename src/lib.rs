pub mod analysis;
pub mod columns;
pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod output;
pub mod pipeline;
