use std::sync::Arc;

use bikeflow_core::traffic::{aggregate, make_radius_scale_with_range, summarize};
use tokio::sync::RwLock;

use super::{LoadCoordinator, LoadTicket, PipelineError, TrafficSnapshot};
use crate::source::DataSource;

/// fetch -> aggregate pipeline over a [`DataSource`].
///
/// each call to [`TrafficPipeline::load`] fetches the station list and trip
/// log concurrently, then aggregates. if another load begins before this one
/// finishes, this one's result is discarded with [`PipelineError::StaleLoad`]
/// and the latest snapshot is left as is.
pub struct TrafficPipeline<S> {
    source: S,
    max_radius: f64,
    coordinator: LoadCoordinator,
    latest: RwLock<Option<Arc<TrafficSnapshot>>>,
}

impl<S: DataSource> TrafficPipeline<S> {
    pub fn new(source: S, max_radius: f64) -> Self {
        Self {
            source,
            max_radius,
            coordinator: LoadCoordinator::new(),
            latest: RwLock::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// the most recently committed snapshot, if any load has completed.
    pub async fn latest(&self) -> Option<Arc<TrafficSnapshot>> {
        self.latest.read().await.clone()
    }

    pub async fn load(&self) -> Result<Arc<TrafficSnapshot>, PipelineError> {
        let ticket = self.coordinator.begin();
        log::debug!("load {} started", ticket.generation());

        let (stations, trips) =
            futures::try_join!(self.source.fetch_stations(), self.source.fetch_trips())?;
        check_current(&ticket)?;

        let enriched = aggregate(&stations, &trips);
        let scale = make_radius_scale_with_range(&enriched, self.max_radius);
        let summary = summarize(&stations, &trips, &enriched);
        log::info!(
            "load {}: {} stations, {} trips, {} unmatched departures, {} unmatched arrivals, max traffic {}",
            ticket.generation(),
            summary.stations,
            summary.trips,
            summary.unmatched_departures,
            summary.unmatched_arrivals,
            summary.max_traffic
        );
        let snapshot = Arc::new(TrafficSnapshot {
            generation: ticket.generation(),
            stations: enriched,
            scale,
            summary,
        });

        let mut latest = self.latest.write().await;
        check_current(&ticket)?;
        *latest = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// runs [`TrafficPipeline::load`] to completion on a single-threaded runtime.
    pub fn load_blocking(&self) -> Result<Arc<TrafficSnapshot>, PipelineError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                PipelineError::TokioError(format!(
                    "failure creating async rust tokio runtime: {e}"
                ))
            })?;
        runtime.block_on(self.load())
    }
}

fn check_current(ticket: &LoadTicket) -> Result<(), PipelineError> {
    if ticket.is_current() {
        Ok(())
    } else {
        let current = ticket.current_generation();
        log::info!(
            "discarding load {}, superseded by load {current}",
            ticket.generation()
        );
        Err(PipelineError::StaleLoad {
            generation: ticket.generation(),
            current,
        })
    }
}
