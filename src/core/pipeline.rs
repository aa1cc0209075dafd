use crate::config::RunConfig;
use crate::core::fetcher::Fetcher;
use crate::core::{expander, normalizer, writer};
use crate::core::{DayFetcher, Pipeline, Storage};
use crate::domain::model::{DayOutcome, FetchBatch, ResponseHeader, TransformResult};
use crate::domain::stations;
use crate::utils::error::Result;

pub struct WaterLevelPipeline<S: Storage, F: DayFetcher> {
    storage: S,
    fetcher: F,
    config: RunConfig,
}

impl<S: Storage, F: DayFetcher> WaterLevelPipeline<S, F> {
    pub fn new(storage: S, fetcher: F, config: RunConfig) -> Self {
        Self {
            storage,
            fetcher,
            config,
        }
    }

    fn check_header(&self, header: &ResponseHeader) {
        if let Some(number) = &header.station_number {
            if number != &self.config.station {
                tracing::warn!(
                    "Response header names station {} but {} was requested: {}",
                    number,
                    self.config.station,
                    header.raw
                );
            }
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, F: DayFetcher> Pipeline for WaterLevelPipeline<S, F> {
    async fn extract(&self) -> Result<FetchBatch> {
        let slots = expander::expand(&self.config.range);

        tracing::info!(
            "Requesting {} days for station {}",
            slots.len(),
            stations::station_label(&self.config.station)
        );
        if stations::find_station(&self.config.station).is_none() {
            tracing::info!(
                "Station {} is not in the station table; requesting it anyway",
                self.config.station
            );
        }

        let fetcher = Fetcher::new(&self.fetcher, self.config.pacing, self.config.on_error);
        fetcher.fetch_all(&self.config.station, &slots).await
    }

    async fn transform(&self, batch: FetchBatch) -> Result<TransformResult> {
        let days_requested = batch.outcomes.len();
        let mut days = Vec::with_capacity(days_requested);
        let mut failures = Vec::new();
        let mut anomalies = Vec::new();
        let mut station_name = None;

        for outcome in batch.outcomes {
            match outcome {
                DayOutcome::Fetched(response) => {
                    let mut day = normalizer::normalize(&response);

                    if let Some(header) = &day.header {
                        if station_name.is_none() {
                            station_name = header.station_name.clone();
                            self.check_header(header);
                        }
                    }

                    if day.lines.is_empty() {
                        tracing::debug!("No measurements for {}", day.slot);
                    }
                    for anomaly in &day.anomalies {
                        tracing::warn!(
                            "{} line {}: {} {:?}",
                            anomaly.date,
                            anomaly.line_number,
                            anomaly.kind,
                            anomaly.text
                        );
                    }

                    anomalies.append(&mut day.anomalies);
                    days.push(day);
                }
                DayOutcome::Failed(failure) => failures.push(failure),
            }
        }

        let station_name = station_name.or_else(|| {
            stations::find_station(&self.config.station).map(|s| s.name.to_string())
        });
        let days_fetched = days.len();
        let output = writer::flatten(days);

        tracing::debug!(
            "Normalized {} lines from {} days ({} anomalies)",
            output.len(),
            days_fetched,
            anomalies.len()
        );

        Ok(TransformResult {
            station: self.config.station.clone(),
            station_name,
            days_requested,
            days_fetched,
            pauses: batch.pauses,
            output,
            anomalies,
            failures,
        })
    }

    async fn load(&self, result: &TransformResult) -> Result<String> {
        let file_name = writer::output_file_name(&result.station);
        let content = writer::render(&result.output);

        tracing::debug!(
            "Writing {} lines ({} bytes) to {}",
            result.output.len(),
            content.len(),
            file_name
        );
        self.storage.write_file(&file_name, content.as_bytes()).await?;

        Ok(self.storage.location(&file_name))
    }
}
