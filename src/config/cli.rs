use crate::core::catalog::{BuiltinFunction, FunctionKind, DEFAULT_HEAVISIDE_AT_ZERO};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "discontinuity-scan")]
#[command(about = "Sample a built-in function and flag where it jumps")]
pub struct CliConfig {
    /// Function identifier, see --list-functions
    #[arg(short, long, default_value = "sign(x)")]
    pub function: String,

    #[arg(long, default_value_t = -5.0, allow_negative_numbers = true)]
    pub x_min: f64,

    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub x_max: f64,

    #[arg(short = 'n', long, default_value_t = 500)]
    pub num_points: usize,

    /// Value Heaviside(x) takes at x = 0
    #[arg(long, default_value_t = DEFAULT_HEAVISIDE_AT_ZERO, allow_negative_numbers = true)]
    pub heaviside_at_zero: f64,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "csv,json")]
    pub formats: Vec<String>,

    /// Bundle all outputs into one ZIP archive
    #[arg(long)]
    pub zip: bool,

    #[arg(long, default_value = "scan_output.zip")]
    pub archive_name: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Print the available function identifiers and exit")]
    pub list_functions: bool,
}

impl ConfigProvider for CliConfig {
    fn function(&self) -> Result<BuiltinFunction> {
        let kind: FunctionKind = self.function.parse()?;
        Ok(BuiltinFunction::new(kind).with_heaviside_at_zero(self.heaviside_at_zero))
    }

    fn x_min(&self) -> f64 {
        self.x_min
    }

    fn x_max(&self) -> f64 {
        self.x_max
    }

    fn num_points(&self) -> usize {
        self.num_points
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn archive_name(&self) -> Option<&str> {
        self.zip.then_some(self.archive_name.as_str())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.function()?;
        validation::validate_x_range(self.x_min, self.x_max)?;
        validation::validate_num_points("num_points", self.num_points)?;
        validation::validate_finite("heaviside_at_zero", self.heaviside_at_zero)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("formats", &self.formats)?;
        if self.zip {
            validation::validate_non_empty_string("archive_name", &self.archive_name)?;
        }
        Ok(())
    }
}
