//! GBFS station and trip-log loading for the bikeflow traffic overlay, plus the
//! `bikeflow` command line tool that aggregates traffic and writes map layers.
pub mod app;
pub mod config;
pub mod export;
pub mod pipeline;
pub mod source;
