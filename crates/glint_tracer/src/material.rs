//! Surface materials and their scattering rules.

use crate::sampling::{gen_f64, random_in_unit_sphere};
use crate::HitRecord;
use glint_math::{unit_vector, Color, Ray, Vec3};
use rand::RngCore;

/// Handle to a material stored in a [`Scene`](crate::Scene).
///
/// Only meaningful for the scene that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(usize);

impl MaterialId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the material in the owning scene.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Outcome of a successful scatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    /// Per-channel factor applied to the light carried back along `scattered`
    pub attenuation: Color,
    /// Outgoing ray, starting at the hit point
    pub scattered: Ray,
}

/// How light interacts with a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Matte surface, scatters around the normal.
    Lambertian { albedo: Color },
    /// Mirror-like reflection, blurred by `fuzz` in `[0, 1]`.
    Metal { albedo: Color, fuzz: f64 },
    /// Clear refractive medium (glass, water, ...).
    Dielectric { refractive_index: f64 },
}

impl Material {
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    /// Create a metal. `fuzz` is clamped to `[0, 1]`; 0 is a perfect mirror.
    pub fn metal(albedo: Color, fuzz: f64) -> Self {
        Material::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Create a dielectric with the given index of refraction
    /// (1.0 = air, 1.5 = glass, 2.4 = diamond).
    pub fn dielectric(refractive_index: f64) -> Self {
        Material::Dielectric { refractive_index }
    }

    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    pub fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<Scatter> {
        match *self {
            Material::Lambertian { albedo } => scatter_lambertian(albedo, rec, rng),
            Material::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, ray_in, rec, rng),
            Material::Dielectric { refractive_index } => {
                scatter_dielectric(refractive_index, ray_in, rec, rng)
            }
        }
    }
}

fn scatter_lambertian(albedo: Color, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<Scatter> {
    let mut direction = rec.normal + random_in_unit_sphere(rng);

    // Catch degenerate scatter direction
    if direction.length_squared() < 1e-8 {
        direction = rec.normal;
    }

    Some(Scatter {
        attenuation: albedo,
        scattered: Ray::new(rec.point, direction),
    })
}

fn scatter_metal(
    albedo: Color,
    fuzz: f64,
    ray_in: &Ray,
    rec: &HitRecord,
    rng: &mut dyn RngCore,
) -> Option<Scatter> {
    let mut reflected = reflect(unit_vector(ray_in.direction()), rec.normal);
    if fuzz > 0.0 {
        reflected += fuzz * random_in_unit_sphere(rng);
    }

    // Reflections into the surface are absorbed
    if reflected.dot(rec.normal) > 0.0 {
        Some(Scatter {
            attenuation: albedo,
            scattered: Ray::new(rec.point, reflected),
        })
    } else {
        None
    }
}

fn scatter_dielectric(
    refractive_index: f64,
    ray_in: &Ray,
    rec: &HitRecord,
    rng: &mut dyn RngCore,
) -> Option<Scatter> {
    let direction = ray_in.direction();
    let d_dot_n = direction.dot(rec.normal);

    // Travelling along the normal means leaving the medium
    let (outward_normal, ni_over_nt, cosine) = if d_dot_n > 0.0 {
        (
            -rec.normal,
            refractive_index,
            refractive_index * d_dot_n / direction.length(),
        )
    } else {
        (
            rec.normal,
            1.0 / refractive_index,
            -d_dot_n / direction.length(),
        )
    };

    // One draw per event, even when total internal reflection decides
    let xi = gen_f64(rng);
    let scattered_direction = match refract(direction, outward_normal, ni_over_nt) {
        Some(refracted) if xi >= schlick(cosine, refractive_index) => refracted,
        _ => reflect(direction, rec.normal),
    };

    Some(Scatter {
        attenuation: Color::ONE,
        scattered: Ray::new(rec.point, scattered_direction),
    })
}

/// Reflect `v` about the normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract `v` through a surface with normal `n` (facing the incoming side).
///
/// Returns `None` on total internal reflection.
#[inline]
pub fn refract(v: Vec3, n: Vec3, ni_over_nt: f64) -> Option<Vec3> {
    let uv = unit_vector(v);
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Schlick's approximation for reflectance.
#[inline]
pub fn schlick(cosine: f64, refractive_index: f64) -> f64 {
    let r0 = ((1.0 - refractive_index) / (1.0 + refractive_index)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
