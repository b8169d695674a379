use std::{
    fs::File,
    io::{BufWriter, ErrorKind, Write},
    path::Path,
    sync::Arc,
};

use bikeflow_core::traffic::TrafficSummary;
use itertools::Itertools;

use super::{AppError, DataArgs};
use crate::{
    config::BikeflowConfig,
    export::{
        map_style_document, station_feature_collection, write_ranked_station_csv,
        write_station_csv, ExportError, OutputFormat,
    },
    pipeline::{TrafficPipeline, TrafficSnapshot},
    source::LocationSource,
};

/// loads stations and trips, aggregates traffic, and writes one row or
/// feature per station.
pub fn run_traffic(
    data: &DataArgs,
    output_file: &Path,
    format: OutputFormat,
    overwrite: bool,
) -> Result<(), AppError> {
    let conf = data.load_config()?;
    let snapshot = load_snapshot(&conf)?;
    let out = create_output(output_file, overwrite)?;
    match format {
        OutputFormat::Csv => write_station_csv(out, &snapshot.stations, &snapshot.scale)?,
        OutputFormat::GeoJson => {
            let fc = station_feature_collection(&snapshot.stations, &snapshot.scale)?;
            write_json(out, &fc, output_file)?;
        }
    }
    log::info!(
        "wrote {} stations as {format} to {output_file:?}",
        snapshot.stations.len()
    );
    Ok(())
}

/// loads stations and trips and writes the overlay's map style document.
pub fn run_style(data: &DataArgs, output_file: &Path, overwrite: bool) -> Result<(), AppError> {
    let conf = data.load_config()?;
    let snapshot = load_snapshot(&conf)?;
    let layer = snapshot.circle_layer(conf.map.circles.clone());
    log::debug!(
        "circle layer with {} circles, radius domain [0, {}]",
        layer.circles().len(),
        layer.scale().max_traffic()
    );
    let doc = map_style_document(&conf.map, &layer)?;
    let out = create_output(output_file, overwrite)?;
    write_json(out, &doc, output_file)?;
    log::info!("wrote map style to {output_file:?}");
    Ok(())
}

/// prints the load summary and the busiest stations.
pub fn run_summary(data: &DataArgs, top_n: usize) -> Result<(), AppError> {
    let conf = data.load_config()?;
    let snapshot = load_snapshot(&conf)?;
    println!("{}", TrafficSummary::CSV_HEADER);
    println!("{}", snapshot.summary);
    println!();
    let busiest = snapshot.busiest(top_n);
    write_ranked_station_csv(std::io::stdout(), &busiest, &snapshot.scale)?;
    let idle = snapshot
        .stations
        .iter()
        .filter(|s| s.total_traffic() == 0)
        .map(|s| s.id())
        .join(" ");
    if !idle.is_empty() {
        log::info!("stations without traffic: {idle}");
    }
    Ok(())
}

fn load_snapshot(conf: &BikeflowConfig) -> Result<Arc<TrafficSnapshot>, AppError> {
    let source = LocationSource::try_from(&conf.data)?;
    let pipeline = TrafficPipeline::new(source, conf.scale.max_radius);
    let snapshot = pipeline.load_blocking()?;
    Ok(snapshot)
}

fn create_output(path: &Path, overwrite: bool) -> Result<BufWriter<File>, ExportError> {
    let file = if overwrite {
        File::create(path)
    } else {
        File::create_new(path)
    };
    let file = file.map_err(|e| {
        let path_str = path.display().to_string();
        if e.kind() == ErrorKind::AlreadyExists {
            ExportError::OutputExists(path_str)
        } else {
            ExportError::FileWriteError {
                path: path_str,
                source: e,
            }
        }
    })?;
    Ok(BufWriter::new(file))
}

fn write_json<W: Write, T: serde::Serialize>(
    mut out: W,
    value: &T,
    path: &Path,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut out, value)?;
    out.flush().map_err(|e| ExportError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}
