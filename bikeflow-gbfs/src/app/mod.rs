mod app_error;
mod bikeflow_cli;
mod data_args;
mod run;

pub use app_error::AppError;
pub use bikeflow_cli::{BikeflowCliArguments, BikeflowOperation};
pub use data_args::DataArgs;
