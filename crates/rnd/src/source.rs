//! Injectable source of random draws.

use rand_distr::{Distribution, StandardNormal};

/// Supplies independent standard-normal and unit-uniform draws.
///
/// Samplers take the source as an explicit `&mut` argument, so there is no
/// hidden generator state: reproducibility comes from seeding the source and
/// thread safety from giving each caller its own.
///
/// Every [`rand::Rng`] is a `RandomSource`.
pub trait RandomSource {
    /// Draws from `N(0, 1)`.
    fn standard_normal(&mut self) -> f64;

    /// Draws uniformly from `[0, 1)`.
    fn unit_uniform(&mut self) -> f64;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn standard_normal(&mut self) -> f64 {
        <StandardNormal as Distribution<f64>>::sample(&StandardNormal, self)
    }

    fn unit_uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}
