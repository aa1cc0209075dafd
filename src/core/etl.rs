use crate::core::Pipeline;
use crate::domain::model::RunReport;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Starting water level download...");

        // Extract
        let batch = self.pipeline.extract().await?;
        tracing::info!("Fetched {} days", batch.outcomes.len());

        // Transform
        let result = self.pipeline.transform(batch).await?;
        tracing::info!(
            "Normalized {} observations from {} days",
            result.output.len(),
            result.days_fetched
        );

        // Load
        let output_path = self.pipeline.load(&result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(RunReport::new(&result, output_path))
    }
}
