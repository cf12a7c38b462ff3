use crate::utils::error::{Result, ScanError};
use serde::Serialize;

/// Ordered x samples paired with `f(x)` at each point.
///
/// `y` may hold NaN or infinities; those are how the catalog reports points
/// outside a function's natural domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledFunction {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SampledFunction {
    /// Checked constructor: equal lengths, finite x, x strictly ascending.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(ScanError::InvalidInput {
                message: format!(
                    "domain has {} samples but range has {}",
                    x.len(),
                    y.len()
                ),
            });
        }

        if let Some(i) = x.iter().position(|v| !v.is_finite()) {
            return Err(ScanError::InvalidInput {
                message: format!("domain sample {} is not finite ({})", i, x[i]),
            });
        }

        if let Some(i) = x.windows(2).position(|w| w[0] >= w[1]) {
            return Err(ScanError::InvalidInput {
                message: format!(
                    "domain is not strictly ascending at index {} ({} >= {})",
                    i + 1,
                    x[i],
                    x[i + 1]
                ),
            });
        }

        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn non_finite_count(&self) -> usize {
        self.y.iter().filter(|v| !v.is_finite()).count()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// A flagged location and the function value drawn at it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscontinuityPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionStatus {
    Detected,
    NoneDetected,
    /// Fewer than two samples, so there was no pair to scan.
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetectionReport {
    pub function: String,
    pub x_min: f64,
    pub x_max: f64,
    pub num_points: usize,
    pub heaviside_at_zero: f64,
    pub non_finite_samples: usize,
    pub status: DetectionStatus,
    pub discontinuities: Vec<DiscontinuityPoint>,
    pub generated_at: String,
    #[serde(skip)]
    pub samples: SampledFunction,
}

impl DetectionReport {
    pub fn locations(&self) -> Vec<f64> {
        self.discontinuities.iter().map(|p| p.x).collect()
    }

    pub fn summary(&self) -> String {
        match self.status {
            DetectionStatus::Detected => {
                format!("Discontinuity x coordinates: {:?}", self.locations())
            }
            DetectionStatus::NoneDetected => "No discontinuities were detected.".to_string(),
            DetectionStatus::Skipped => {
                "Detection skipped: at least two samples are required.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampled_function_rejects_mismatched_lengths() {
        let err = SampledFunction::new(vec![0.0, 1.0], vec![0.0]).unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput { .. }));
    }

    #[test]
    fn test_sampled_function_rejects_unsorted_domain() {
        assert!(SampledFunction::new(vec![0.0, 2.0, 1.0], vec![0.0; 3]).is_err());
        assert!(SampledFunction::new(vec![0.0, 0.0], vec![0.0; 2]).is_err());
        assert!(SampledFunction::new(vec![0.0, f64::NAN], vec![0.0; 2]).is_err());
    }

    #[test]
    fn test_sampled_function_allows_sentinel_range_values() {
        let sampled =
            SampledFunction::new(vec![-1.0, 0.0, 1.0], vec![-1.0, f64::INFINITY, f64::NAN])
                .unwrap();
        assert_eq!(sampled.len(), 3);
        assert!(!sampled.is_empty());
        assert_eq!(sampled.non_finite_count(), 2);
        assert!(SampledFunction::new(vec![], vec![]).unwrap().is_empty());
    }
}
