use crate::config::{ErrorPolicy, PacingPolicy};
use crate::core::DayFetcher;
use crate::domain::model::{DayFailure, DayOutcome, DaySlot, FetchBatch};
use crate::utils::error::Result;

/// Requests one day at a time and sleeps between blocks of requests so the
/// provider is not flooded.
pub struct Fetcher<'a, F: DayFetcher + ?Sized> {
    source: &'a F,
    pacing: PacingPolicy,
    on_error: ErrorPolicy,
}

impl<'a, F: DayFetcher + ?Sized> Fetcher<'a, F> {
    pub fn new(source: &'a F, pacing: PacingPolicy, on_error: ErrorPolicy) -> Self {
        Self {
            source,
            pacing,
            on_error,
        }
    }

    pub async fn fetch_all(&self, station: &str, slots: &[DaySlot]) -> Result<FetchBatch> {
        let total = slots.len();
        let mut batch = FetchBatch {
            outcomes: Vec::with_capacity(total),
            pauses: 0,
        };

        for (index, slot) in slots.iter().enumerate() {
            let issued = index + 1;

            match self.source.fetch_day(station, slot).await {
                Ok(response) => batch.outcomes.push(DayOutcome::Fetched(response)),
                Err(e) => match self.on_error {
                    ErrorPolicy::Abort => {
                        tracing::error!("Failed to fetch {} for station {}: {}", slot, station, e);
                        return Err(e);
                    }
                    ErrorPolicy::Continue => {
                        tracing::error!(
                            "Failed to fetch {} for station {}, skipping: {}",
                            slot,
                            station,
                            e
                        );
                        batch.outcomes.push(DayOutcome::Failed(DayFailure {
                            date: slot.date(),
                            reason: e.to_string(),
                        }));
                    }
                },
            }

            tracing::info!(
                "{} downloaded out of {} days of data for station: {}. Sleep for {} sec every {} days.",
                issued,
                total,
                station,
                self.pacing.sleep_seconds,
                self.pacing.sleep_interval
            );

            if self.pacing.pause_after(issued) {
                batch.pauses += 1;
                tracing::debug!("Pausing for {:?}", self.pacing.pause_duration());
                tokio::time::sleep(self.pacing.pause_duration()).await;
            }
        }

        Ok(batch)
    }
}
