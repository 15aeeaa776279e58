//! glint tracer - CPU path tracing over analytic spheres.
//!
//! A Monte Carlo path tracer: a thin-lens camera generates rays, the scene
//! finds the nearest sphere hit, the hit material scatters the ray and the
//! integrator recurses until the ray escapes to the sky or the bounce
//! budget runs out.
//!
//! Randomness is never ambient: every sampling routine takes an explicit
//! `&mut dyn RngCore`, and whole-image renders seed one generator per pixel.

mod sampling;
mod hittable;
mod material;
mod sphere;
mod scene;
mod camera;
mod renderer;
mod bucket;

pub use sampling::{gen_f64, pixel_rng, random_in_unit_disk, random_in_unit_sphere};
pub use hittable::{HitRecord, Hittable};
pub use material::{reflect, refract, schlick, Material, MaterialId, Scatter};
pub use sphere::Sphere;
pub use scene::{Scene, Surface};
pub use camera::Camera;
pub use renderer::{
    color_to_rgb8, linear_to_gamma, ray_color, render, render_pixel, ImageBuffer, RenderConfig,
    Sky, MAX_DEPTH, T_MIN,
};
pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};

/// Re-export the math types from glint_math
pub use glint_math::{unit_vector, Color, Interval, Ray, Vec3};
