//! Scene container: surfaces plus the materials they share.
//!
//! Materials live in an arena owned by the scene and are referenced from
//! surfaces by [`MaterialId`], so any number of spheres can share one
//! material without reference counting.

use crate::{HitRecord, Hittable, Material, MaterialId, Sphere};
use glint_math::{Interval, Ray, Vec3};

/// Any renderable surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    Sphere(Sphere),
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::Sphere(sphere)
    }
}

impl Surface {
    pub fn material(&self) -> MaterialId {
        match self {
            Surface::Sphere(sphere) => sphere.material(),
        }
    }
}

impl Hittable for Surface {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Surface::Sphere(sphere) => sphere.hit(ray, ray_t),
        }
    }
}

/// An ordered list of surfaces and the material arena they index into.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    surfaces: Vec<Surface>,
    materials: Vec<Material>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a material and return its handle.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId::new(self.materials.len() - 1)
    }

    /// Add a surface to the scene.
    ///
    /// The surface's material must come from this scene's `add_material`.
    pub fn add(&mut self, surface: impl Into<Surface>) {
        let surface = surface.into();
        debug_assert!(
            surface.material().index() < self.materials.len(),
            "material {:?} does not belong to this scene",
            surface.material()
        );
        self.surfaces.push(surface);
    }

    /// Add a sphere. A negative radius gives a hollow (inside-out) shell.
    pub fn add_sphere(&mut self, center: Vec3, radius: f64, material: MaterialId) {
        self.add(Sphere::new(center, radius, material));
    }

    /// Look up a material by handle.
    ///
    /// Panics if the handle was issued by a different scene with more
    /// materials than this one.
    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.index()]
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Check if the scene has no surfaces.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Remove all surfaces and materials.
    pub fn clear(&mut self) {
        self.surfaces.clear();
        self.materials.clear();
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        // Narrowing t_max keeps only hits nearer than the best so far
        for surface in &self.surfaces {
            if let Some(rec) = surface.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}
