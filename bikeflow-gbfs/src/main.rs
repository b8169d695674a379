use bikeflow_gbfs::app::BikeflowCliArguments;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = BikeflowCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running bikeflow: {e}");
            std::process::exit(1);
        }
    }
}
