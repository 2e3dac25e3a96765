use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load; returns where the output went.
    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting payroll extraction");

        let employees = self.pipeline.extract().await?;
        tracing::info!("Extracted {} employees", employees.len());

        let transformed = self.pipeline.transform(employees).await?;
        tracing::debug!("Transformed {} employees", transformed.employees.len());

        let output_path = self.pipeline.load(transformed).await?;
        tracing::info!("Output saved to {} in {:?}", output_path, started.elapsed());

        Ok(output_path)
    }
}
