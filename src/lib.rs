pub mod classify;
pub mod cli;
pub mod config;
pub mod counts;
pub mod ctx;
pub mod io;
pub mod metrics;
pub mod pipeline;
pub mod reconcile;
pub mod report;
pub mod schema;
pub mod sheets;
