use crate::core::catalog::BuiltinFunction;
use crate::domain::model::{DetectionReport, SampledFunction};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn function(&self) -> Result<BuiltinFunction>;
    fn x_min(&self) -> f64;
    fn x_max(&self) -> f64;
    fn num_points(&self) -> usize;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    /// Archive name when outputs are bundled, `None` to write loose files.
    fn archive_name(&self) -> Option<&str>;
}

pub trait Pipeline {
    fn sample(&self) -> Result<SampledFunction>;
    fn detect(&self, samples: SampledFunction) -> Result<DetectionReport>;
    fn load(&self, report: &DetectionReport) -> Result<String>;
}
