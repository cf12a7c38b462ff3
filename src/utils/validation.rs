use crate::utils::error::{Result, ScanError};
use std::collections::HashSet;

pub const SUPPORTED_FORMATS: [&str; 2] = ["csv", "json"];
pub const MIN_SAMPLE_POINTS: usize = 100;
pub const MAX_SAMPLE_POINTS: usize = 2000;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ScanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_x_range(x_min: f64, x_max: f64) -> Result<()> {
    validate_finite("x_min", x_min)?;
    validate_finite("x_max", x_max)?;
    if x_min >= x_max {
        return Err(ScanError::ConfigValidationError {
            field: "x_max".to_string(),
            message: format!("x_max ({}) must be greater than x_min ({})", x_max, x_min),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ScanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_num_points(field_name: &str, value: usize) -> Result<()> {
    validate_range(field_name, value, MIN_SAMPLE_POINTS, MAX_SAMPLE_POINTS)
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(ScanError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let allowed: HashSet<&str> = SUPPORTED_FORMATS.iter().copied().collect();
    for format in formats {
        if !allowed.contains(format.as_str()) {
            return Err(ScanError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_FORMATS.join(", ")
                ),
            });
        }
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_x_range() {
        assert!(validate_x_range(-5.0, 5.0).is_ok());
        assert!(validate_x_range(1.0, 1.0).is_err());
        assert!(validate_x_range(2.0, -2.0).is_err());
        assert!(validate_x_range(f64::NAN, 1.0).is_err());
        assert!(validate_x_range(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_num_points() {
        assert!(validate_num_points("num_points", 500).is_ok());
        assert!(validate_num_points("num_points", 100).is_ok());
        assert!(validate_num_points("num_points", 2000).is_ok());
        assert!(validate_num_points("num_points", 99).is_err());
        assert!(validate_num_points("num_points", 2001).is_err());
    }

    #[test]
    fn test_validate_output_formats() {
        let formats = vec!["csv".to_string(), "json".to_string()];
        assert!(validate_output_formats("formats", &formats).is_ok());

        let invalid = vec!["png".to_string()];
        assert!(validate_output_formats("formats", &invalid).is_err());
        assert!(validate_output_formats("formats", &[]).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "out\0put").is_err());
    }
}
