pub mod api;
pub mod app;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod models;
pub mod report;

#[cfg(test)]
mod test;
