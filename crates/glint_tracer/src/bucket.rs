//! Bucket-based tile rendering.
//!
//! Splits the image into tiles that render independently on the rayon
//! pool. Each pixel seeds its own generator from the render seed and its
//! index, so the result does not depend on bucket size or thread count.

use crate::renderer::render_pixel;
use crate::sampling::pixel_rng;
use crate::{Camera, Color, ImageBuffer, RenderConfig, Scene};
use rayon::prelude::*;
use std::time::Instant;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Column of the top-left pixel
    pub x: u32,
    /// Row of the top-left pixel
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket edge length in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Cover a `width` x `height` image with buckets, center first.
///
/// Edge buckets are clipped to the image. A `bucket_size` of 0 is
/// treated as 1.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);
    let mut buckets = Vec::new();

    for y in (0..height).step_by(size as usize) {
        for x in (0..width).step_by(size as usize) {
            let bw = size.min(width - x);
            let bh = size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
        }
    }

    sort_center_out(&mut buckets, width, height);

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Stable sort by squared distance between bucket and image centers.
fn sort_center_out(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;

    let distance = |b: &Bucket| {
        let dx = b.x as f64 + b.width as f64 / 2.0 - center_x;
        let dy = b.y as f64 + b.height as f64 / 2.0 - center_y;
        dx * dx + dy * dy
    };

    buckets.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    /// Linear pixel colors, row-major within the bucket
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}

/// Render every pixel of one bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let x = bucket.x + local_x;
            let y = bucket.y + local_y;
            let mut rng = pixel_rng(config.seed, (y * config.width + x) as u64);
            pixels.push(render_pixel(camera, scene, x, y, config, &mut rng));
        }
    }

    BucketResult::new(*bucket, pixels)
}

/// Render the scene across the current rayon pool.
///
/// Produces the same image as [`render`](crate::render) for any bucket
/// size and thread count.
pub fn render_parallel(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    bucket_size: u32,
) -> ImageBuffer {
    let buckets = generate_buckets(config.width, config.height, bucket_size);
    log::info!(
        "Rendering {}x{} @ {} spp in {} buckets on {} threads",
        config.width,
        config.height,
        config.samples_per_pixel,
        buckets.len(),
        rayon::current_num_threads()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let result = render_bucket(bucket, camera, scene, config);
            log::debug!("Bucket {} at ({}, {}) done", bucket.index, bucket.x, bucket.y);
            result
        })
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let x = bucket.x + i as u32 % bucket.width;
            let y = bucket.y + i as u32 / bucket.width;
            image.set(x, y, *color);
        }
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, Material, Vec3};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn test_scene() -> Scene {
        let mut scene = Scene::new();
        let diffuse = scene.add_material(Material::lambertian(Color::new(0.1, 0.2, 0.5)));
        let ground = scene.add_material(Material::lambertian(Color::new(0.8, 0.8, 0.0)));
        let metal = scene.add_material(Material::metal(Color::new(0.8, 0.6, 0.2), 0.3));
        let glass = scene.add_material(Material::dielectric(1.5));
        scene.add_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, diffuse);
        scene.add_sphere(Vec3::new(0.0, -100.5, -1.0), 100.0, ground);
        scene.add_sphere(Vec3::new(1.0, 0.0, -1.0), 0.5, metal);
        scene.add_sphere(Vec3::new(-1.0, 0.0, -1.0), 0.5, glass);
        scene.add_sphere(Vec3::new(-1.0, 0.0, -1.0), -0.45, glass);
        scene
    }

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 70, 64);
        assert_eq!(buckets.len(), 4);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 70);
        assert!(buckets.iter().all(|b| b.x + b.width <= 100 && b.y + b.height <= 70));
    }

    #[test]
    fn test_center_out_order() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9);

        let first = &buckets[0];
        assert_eq!((first.x, first.y), (64, 64));
        assert!(buckets.iter().enumerate().all(|(i, b)| b.index == i));
    }

    #[test]
    fn test_zero_bucket_size() {
        let buckets = generate_buckets(3, 2, 0);
        assert_eq!(buckets.len(), 6);
    }

    #[test]
    fn test_render_bucket_matches_pixels() {
        let scene = test_scene();
        let camera = Camera::new();
        let config = RenderConfig {
            width: 16,
            height: 8,
            samples_per_pixel: 2,
            ..Default::default()
        };
        let bucket = Bucket::new(4, 2, 3, 2, 0);

        let result = render_bucket(&bucket, &camera, &scene, &config);
        assert_eq!(result.pixels.len(), 6);

        let mut rng = pixel_rng(config.seed, (3 * config.width + 6) as u64);
        let expected = render_pixel(&camera, &scene, 6, 3, &config, &mut rng);
        assert_eq!(result.pixels[5], expected);
    }

    #[test]
    fn test_parallel_matches_serial() {
        init_logger();
        let scene = test_scene();
        let camera = Camera::new();
        let config = RenderConfig {
            width: 24,
            height: 12,
            samples_per_pixel: 3,
            seed: 42,
            ..Default::default()
        };

        let serial = render(&camera, &scene, &config);
        for bucket_size in [1, 5, DEFAULT_BUCKET_SIZE] {
            let parallel = render_parallel(&camera, &scene, &config, bucket_size);
            assert_eq!(parallel, serial, "bucket size {bucket_size}");
        }
    }

    #[test]
    fn test_parallel_independent_of_thread_count() {
        init_logger();
        let scene = test_scene();
        let camera = Camera::new();
        let config = RenderConfig {
            width: 16,
            height: 8,
            samples_per_pixel: 2,
            seed: 7,
            ..Default::default()
        };

        let render_with = |threads: usize| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap()
                .install(|| render_parallel(&camera, &scene, &config, 4))
        };
        assert_eq!(render_with(1), render_with(4));
    }
}
