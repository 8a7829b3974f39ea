use super::*;

//
// Uniform source
//

/// Uniformly distributed draws over closed intervals.
///
/// Every [`rand::Rng`] is a source. Seeding and thread affinity belong to the
/// implementor.
pub trait UniformSource {
    /// Draws from `lo..=hi`. Requires `lo <= hi`.
    fn uniform_i32(&mut self, lo: i32, hi: i32) -> i32;

    /// Draws from `lo..=hi`. Requires `lo <= hi`.
    fn uniform_f32(&mut self, lo: f32, hi: f32) -> f32;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform_i32(&mut self, lo: i32, hi: i32) -> i32 {
        self.gen_range(lo..=hi)
    }

    fn uniform_f32(&mut self, lo: f32, hi: f32) -> f32 {
        if (hi - lo).is_finite() {
            self.gen_range(lo..=hi)
        } else {
            // Width overflows f32, which `rand` rejects. Place a unit draw instead.
            let t: f32 = self.gen_range(0.0..=1.0);
            clamp_ordered(lerp_scalar(lo, hi, t), lo, hi)
        }
    }
}

//
// Seeded sampler
//

/// Deterministic source backed by a seeded PCG generator.
pub struct UniformSampler {
    state: rand_pcg::Pcg64Mcg,
}

impl UniformSampler {
    pub fn new() -> Self {
        Self::new_with_seed(0)
    }

    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            state: rand_pcg::Pcg64Mcg::seed_from_u64(seed),
        }
    }
}

impl Default for UniformSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for UniformSampler {
    fn next_u32(&mut self) -> u32 {
        self.state.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.state.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.state.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.state.try_fill_bytes(dest)
    }
}

//
// Tests
//
