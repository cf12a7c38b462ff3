use crate::core::catalog::RealFunction;
use crate::domain::model::SampledFunction;
use crate::utils::error::Result;

/// `n` evenly spaced points from `start` to `stop`, both ends included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut xs: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // Pin the endpoint so accumulated rounding cannot move it.
            xs[n - 1] = stop;
            xs
        }
    }
}

/// Evaluates `f` on a linspace grid. Sentinel values are kept as they come.
pub fn sample<F: RealFunction + ?Sized>(
    f: &F,
    x_min: f64,
    x_max: f64,
    num_points: usize,
) -> Result<SampledFunction> {
    let x = linspace(x_min, x_max, num_points);
    let y = x.iter().map(|&v| f.eval(v)).collect();
    SampledFunction::new(x, y)
}
