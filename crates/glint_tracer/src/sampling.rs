//! Random sampling helpers.
//!
//! All routines draw from a caller-supplied generator so renders can be
//! seeded per pixel and replayed exactly.

use glint_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Uniform double in `[0, 1)`.
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Sample a random point in the unit disk (z = 0) by rejection.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = 2.0 * Vec3::new(gen_f64(rng), gen_f64(rng), 0.0) - Vec3::new(1.0, 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Sample a random point inside the unit ball by rejection.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = 2.0 * Vec3::new(gen_f64(rng), gen_f64(rng), gen_f64(rng)) - Vec3::ONE;
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Generator for a single pixel.
///
/// Depends only on `(seed, pixel_index)`, so a pixel's samples do not
/// change with thread count or scheduling order.
pub fn pixel_rng(seed: u64, pixel_index: u64) -> StdRng {
    StdRng::seed_from_u64(seed ^ pixel_index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Generator whose every `f64` draw is exactly 0.5.
///
/// 0.5 maps to the origin in both rejection samplers, so this is the
/// "no jitter" stream used by deterministic tests.
#[cfg(test)]
pub(crate) fn constant_half_rng() -> rand::rngs::mock::StepRng {
    rand::rngs::mock::StepRng::new(1 << 63, 0)
}
