//! Fixed demo scenes.

use crate::cli::SceneKind;
use glint_tracer::{Camera, Color, Material, Scene, Vec3};

/// Build the scene and a camera matching the output aspect ratio.
pub fn build(kind: SceneKind, aspect_ratio: f64) -> (Scene, Camera) {
    let scene = match kind {
        SceneKind::Basic => basic(),
        SceneKind::Metal => metal(),
        SceneKind::Glass => glass(),
        SceneKind::HollowGlass | SceneKind::DepthOfField => hollow_glass(),
    };

    let camera = match kind {
        SceneKind::DepthOfField => {
            let look_from = Vec3::new(3.0, 3.0, 2.0);
            let look_at = Vec3::new(0.0, 0.0, -1.0);
            Camera::new()
                .with_position(look_from, look_at, Vec3::Y)
                .with_lens(20.0, 2.0, (look_from - look_at).length())
        }
        _ => Camera::new(),
    };

    (scene, camera.with_aspect_ratio(aspect_ratio))
}

fn with_ground(center: Material) -> Scene {
    let mut scene = Scene::new();
    let center = scene.add_material(center);
    let ground = scene.add_material(Material::lambertian(Color::new(0.8, 0.8, 0.0)));
    scene.add_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, center);
    scene.add_sphere(Vec3::new(0.0, -100.5, -1.0), 100.0, ground);
    scene
}

fn basic() -> Scene {
    with_ground(Material::lambertian(Color::new(0.8, 0.3, 0.3)))
}

fn metal() -> Scene {
    let mut scene = basic();
    let rough = scene.add_material(Material::metal(Color::new(0.8, 0.6, 0.2), 1.0));
    let polished = scene.add_material(Material::metal(Color::new(0.8, 0.8, 0.8), 0.3));
    scene.add_sphere(Vec3::new(1.0, 0.0, -1.0), 0.5, rough);
    scene.add_sphere(Vec3::new(-1.0, 0.0, -1.0), 0.5, polished);
    scene
}

fn glass() -> Scene {
    let mut scene = with_ground(Material::lambertian(Color::new(0.1, 0.2, 0.5)));
    let gold = scene.add_material(Material::metal(Color::new(0.8, 0.6, 0.2), 0.0));
    let glass = scene.add_material(Material::dielectric(1.5));
    scene.add_sphere(Vec3::new(1.0, 0.0, -1.0), 0.5, gold);
    scene.add_sphere(Vec3::new(-1.0, 0.0, -1.0), 0.5, glass);
    scene
}

fn hollow_glass() -> Scene {
    let mut scene = glass();
    let glass = scene.surfaces()[3].material();
    // Negative radius flips the normals inward
    scene.add_sphere(Vec3::new(-1.0, 0.0, -1.0), -0.45, glass);
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_tracer::{render, RenderConfig, Surface};

    const ALL: [SceneKind; 5] = [
        SceneKind::Basic,
        SceneKind::Metal,
        SceneKind::Glass,
        SceneKind::HollowGlass,
        SceneKind::DepthOfField,
    ];

    #[test]
    fn test_scene_sizes() {
        let sizes: Vec<usize> = ALL.iter().map(|&kind| build(kind, 2.0).0.len()).collect();
        assert_eq!(sizes, vec![2, 4, 4, 5, 5]);
    }

    #[test]
    fn test_hollow_glass_bubble() {
        let (scene, _) = build(SceneKind::HollowGlass, 2.0);
        let Surface::Sphere(outer) = scene.surfaces()[3];
        let Surface::Sphere(inner) = scene.surfaces()[4];

        assert_eq!(outer.center(), inner.center());
        assert_eq!(inner.radius(), -0.45);
        assert_eq!(outer.material(), inner.material());
        assert_eq!(*scene.material(inner.material()), Material::dielectric(1.5));
    }

    #[test]
    fn test_depth_of_field_camera() {
        let (_, camera) = build(SceneKind::DepthOfField, 2.0);
        assert_eq!(camera.origin(), Vec3::new(3.0, 3.0, 2.0));
        assert_eq!(camera.lens_radius(), 1.0);

        let (_, pinhole) = build(SceneKind::Glass, 1.5);
        assert_eq!(pinhole.lens_radius(), 0.0);
        assert_eq!(pinhole.aspect_ratio(), 1.5);
    }

    #[test]
    fn test_all_scenes_render() {
        let config = RenderConfig {
            width: 8,
            height: 4,
            samples_per_pixel: 2,
            ..Default::default()
        };
        for kind in ALL {
            let (scene, camera) = build(kind, 2.0);
            let image = render(&camera, &scene, &config);
            assert!(image.pixels.iter().all(|c| c.is_finite()), "{kind:?}");
        }
    }
}
