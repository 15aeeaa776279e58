//! Double-precision math types for glint.
//!
//! `Vec3` doubles as a position, a direction and an RGB color.

pub use glam::{dvec3, DVec3};

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// 3-component double vector.
pub type Vec3 = DVec3;

/// Linear RGB color (typically 0-1 per channel).
pub type Color = Vec3;

/// Scale `v` to unit length (`v / |v|`).
///
/// `v` must be non-zero; a zero vector produces NaN components.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    v / v.length()
}
