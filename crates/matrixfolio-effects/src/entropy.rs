//! Randomness source for the rain, swappable in tests.

/// Uniform random numbers.
pub trait Entropy {
    /// A value in `[0, 1)`.
    fn unit(&mut self) -> f32;
    /// An index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
}

impl Entropy for fastrand::Rng {
    fn unit(&mut self) -> f32 {
        self.f32()
    }

    fn index(&mut self, len: usize) -> usize {
        self.usize(..len)
    }
}
