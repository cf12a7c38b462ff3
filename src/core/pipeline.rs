use crate::core::catalog::RealFunction;
use crate::core::{detector, sampling};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{DetectionReport, DetectionStatus, DiscontinuityPoint, SampledFunction};
use crate::utils::error::{Result, ScanError};
use std::io::Write;
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};

pub const SAMPLES_CSV: &str = "samples.csv";
pub const DISCONTINUITIES_CSV: &str = "discontinuities.csv";
pub const REPORT_JSON: &str = "report.json";

/// Samples the configured function, runs the detector and writes the
/// selected outputs through `storage`.
pub struct ScanPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ScanPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn wants(&self, format: &str) -> bool {
        self.config.output_formats().iter().any(|f| f == format)
    }

    fn render_outputs(&self, report: &DetectionReport) -> Result<Vec<(&'static str, Vec<u8>)>> {
        let mut files = Vec::new();

        if self.wants("csv") {
            files.push((SAMPLES_CSV, points_to_csv(report.samples.points())?));
            files.push((
                DISCONTINUITIES_CSV,
                points_to_csv(report.discontinuities.iter().map(|p| (p.x, p.y)))?,
            ));
        }

        if self.wants("json") {
            files.push((REPORT_JSON, serde_json::to_vec_pretty(report)?));
        }

        Ok(files)
    }
}

fn points_to_csv(points: impl Iterator<Item = (f64, f64)>) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(["x", "y"])?;
    for point in points {
        writer.serialize(point)?;
    }
    writer
        .into_inner()
        .map_err(|e| ScanError::IoError(e.into_error()))
}

fn bundle(files: &[(&str, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, data) in files {
        zip.start_file::<_, ()>(*name, FileOptions::default())?;
        zip.write_all(data)?;
    }
    Ok(zip.finish()?.into_inner())
}

impl<S: Storage, C: ConfigProvider> Pipeline for ScanPipeline<S, C> {
    fn sample(&self) -> Result<SampledFunction> {
        let function = self.config.function()?;
        tracing::debug!(
            "Sampling {} on [{}, {}] with {} points",
            function.identifier(),
            self.config.x_min(),
            self.config.x_max(),
            self.config.num_points()
        );

        sampling::sample(
            &function,
            self.config.x_min(),
            self.config.x_max(),
            self.config.num_points(),
        )
    }

    fn detect(&self, samples: SampledFunction) -> Result<DetectionReport> {
        let function = self.config.function()?;
        let non_finite_samples = samples.non_finite_count();
        if non_finite_samples > 0 {
            tracing::debug!("{} samples evaluated to NaN or infinity", non_finite_samples);
        }

        let locations = detector::detect_checked(&samples, &function);
        let status = if samples.len() < 2 {
            DetectionStatus::Skipped
        } else if locations.is_empty() {
            DetectionStatus::NoneDetected
        } else {
            DetectionStatus::Detected
        };

        let discontinuities = locations
            .into_iter()
            .map(|x| DiscontinuityPoint {
                x,
                y: function.eval(x),
            })
            .collect();

        Ok(DetectionReport {
            function: function.identifier().to_string(),
            x_min: self.config.x_min(),
            x_max: self.config.x_max(),
            num_points: samples.len(),
            heaviside_at_zero: function.heaviside_at_zero(),
            non_finite_samples,
            status,
            discontinuities,
            generated_at: chrono::Utc::now().to_rfc3339(),
            samples,
        })
    }

    fn load(&self, report: &DetectionReport) -> Result<String> {
        let files = self.render_outputs(report)?;
        let base = Path::new(self.config.output_path());

        match self.config.archive_name() {
            Some(archive) => {
                tracing::debug!("Creating ZIP archive with {} files", files.len());
                let data = bundle(&files)?;
                tracing::debug!("Writing ZIP archive ({} bytes) to storage", data.len());
                self.storage.write_file(archive, &data)?;
                Ok(base.join(archive).display().to_string())
            }
            None => {
                for (name, data) in &files {
                    tracing::debug!("Writing {} ({} bytes)", name, data.len());
                    self.storage.write_file(name, data)?;
                }
                Ok(base.display().to_string())
            }
        }
    }
}
