//! Hittable trait and HitRecord for ray-object intersection.

use crate::MaterialId;
use glint_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Produced fresh by every intersection query and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Ray parameter of the intersection
    pub t: f64,
    /// World-space intersection point
    pub point: Vec3,
    /// Unit surface normal, `(point - center) / radius` for spheres.
    ///
    /// Points away from the center for a positive radius and towards it
    /// for a negative one. It is not flipped to face the incoming ray.
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: MaterialId,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with `t` strictly inside `ray_t`, if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}
