use crate::core::{DetectionReport, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// What a finished run hands back to the front end.
#[derive(Debug, Clone)]
pub struct ScanOutput {
    pub output_path: String,
    pub report: DetectionReport,
}

pub struct ScanEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> ScanEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    pub fn run(&self) -> Result<ScanOutput> {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);
        tracing::info!("Starting discontinuity scan");

        let samples = self.pipeline.sample()?;
        if samples.is_empty() {
            tracing::warn!("Sampling produced no points, detection will be skipped");
        }
        tracing::info!(
            "Sampled {} points ({} non-finite)",
            samples.len(),
            samples.non_finite_count()
        );
        monitor.log_phase("sample");

        let report = self.pipeline.detect(samples)?;
        tracing::info!(
            "Detected {} discontinuities in {} ({:?})",
            report.discontinuities.len(),
            report.function,
            report.status
        );
        tracing::debug!("Locations: {:?}", report.locations());
        monitor.log_phase("detect");

        let output_path = self.pipeline.load(&report)?;
        tracing::info!("Output saved to: {}", output_path);
        monitor.log_phase("load");
        monitor.log_final();

        Ok(ScanOutput {
            output_path,
            report,
        })
    }
}
