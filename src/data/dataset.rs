//! Seeded synthetic sample: evenly spaced x, noisy linear y.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::RegressionError;

/// Parameters of the generated dataset.
///
/// Defaults reproduce the classroom setup: 50 points on `[0, 10]` around
/// `y = 3x + 5` with Gaussian noise of standard deviation 2, seed 42.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSpec {
    /// Number of points (at least 2).
    pub n: usize,
    pub x_min: f64,
    pub x_max: f64,
    /// Ground-truth slope the noise is added around.
    pub true_slope: f64,
    /// Ground-truth intercept the noise is added around.
    pub true_intercept: f64,
    /// Standard deviation of the additive Gaussian noise.
    pub noise_std: f64,
    pub seed: u64,
}

impl Default for DatasetSpec {
    fn default() -> Self {
        Self {
            n: 50,
            x_min: 0.0,
            x_max: 10.0,
            true_slope: 3.0,
            true_intercept: 5.0,
            noise_std: 2.0,
            seed: 42,
        }
    }
}

/// Immutable `(x, y)` sample with strictly increasing x.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Sample {
    /// Build a sample from explicit coordinates.
    ///
    /// Rejects fewer than two points, length mismatches, non-finite values and
    /// x values that are not strictly increasing (which also rules out a
    /// zero-width domain).
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, RegressionError> {
        if xs.len() != ys.len() {
            return Err(RegressionError::invalid(format!(
                "sample has {} x values but {} y values",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(RegressionError::invalid(
                "sample needs at least two points to span a domain",
            ));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(RegressionError::invalid("sample contains non-finite values"));
        }
        if let Some(i) = xs.windows(2).position(|w| w[1] <= w[0]) {
            return Err(RegressionError::invalid(format!(
                "x values must be strictly increasing (x[{}] = {}, x[{}] = {})",
                i,
                xs[i],
                i + 1,
                xs[i + 1]
            )));
        }
        Ok(Self { xs, ys })
    }

    /// Generate the seeded sample described by `spec`.
    pub fn generate(spec: &DatasetSpec) -> Result<Self, RegressionError> {
        if spec.n < 2 {
            return Err(RegressionError::invalid(format!(
                "dataset needs at least two points, got n = {}",
                spec.n
            )));
        }
        if !(spec.x_min.is_finite() && spec.x_max.is_finite()) || spec.x_max <= spec.x_min {
            return Err(RegressionError::invalid(format!(
                "dataset domain [{}, {}] has no width",
                spec.x_min, spec.x_max
            )));
        }
        let noise = Normal::new(0.0, spec.noise_std).map_err(|e| {
            RegressionError::invalid(format!("noise std {}: {e}", spec.noise_std))
        })?;
        let mut rng = StdRng::seed_from_u64(spec.seed);

        let xs = linspace(spec.x_min, spec.x_max, spec.n);
        let ys = xs
            .iter()
            .map(|&x| spec.true_slope * x + spec.true_intercept + noise.sample(&mut rng))
            .collect();
        let sample = Self::new(xs, ys)?;
        log::debug!(
            "generated {} points on [{}, {}] with seed {}",
            sample.len(),
            spec.x_min,
            spec.x_max,
            spec.seed
        );
        Ok(sample)
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always `false`: construction requires two points.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn x_min(&self) -> f64 {
        self.xs[0]
    }

    pub fn x_max(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    /// Smallest and largest y value.
    pub fn y_range(&self) -> (f64, f64) {
        self.ys
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| {
                (lo.min(y), hi.max(y))
            })
    }

    /// Points as `[x, y]` pairs for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.xs.iter().zip(&self.ys).map(|(&x, &y)| [x, y]).collect()
    }
}

// Last value pinned to `hi` so the domain end is exact.
fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / (n - 1) as f64;
    (0..n)
        .map(|i| if i + 1 == n { hi } else { lo + step * i as f64 })
        .collect()
}
