//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive radiance estimation bounded by a maximum depth
//! - Sky gradient for escaped rays
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma-2 encoding on output

use crate::sampling::{gen_f64, pixel_rng};
use crate::{Camera, Color, Hittable, Ray, Scene};
use glint_math::{unit_vector, Interval};
use rand::RngCore;
use std::time::Instant;

/// Default bounce budget.
pub const MAX_DEPTH: u32 = 50;

/// Minimum hit distance for every intersection query, suppresses shadow acne.
pub const T_MIN: f64 = 0.001;

/// Vertical gradient returned for rays that escape the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sky {
    /// Color looking straight down
    pub horizon: Color,
    /// Color looking straight up
    pub zenith: Color,
}

impl Sky {
    /// Radiance arriving along `ray` from the sky.
    pub fn radiance(&self, ray: &Ray) -> Color {
        let unit_direction = unit_vector(ray.direction());
        let t = 0.5 * (unit_direction.y + 1.0);
        (1.0 - t) * self.horizon + t * self.zenith
    }
}

impl Default for Sky {
    fn default() -> Self {
        Self {
            horizon: Color::new(1.0, 1.0, 1.0),
            zenith: Color::new(0.5, 0.7, 1.0),
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image width in pixels
    pub width: u32,
    /// Output image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Background for rays that hit nothing
    pub sky: Sky,
    /// Base seed for the per-pixel generators
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 100,
            samples_per_pixel: 100,
            max_depth: MAX_DEPTH,
            sky: Sky::default(),
            seed: 0,
        }
    }
}

/// Compute the color seen by a ray.
///
/// `depth` counts bounces taken so far, starting at 0 for camera rays.
/// A hit at `depth >= config.max_depth` or an absorbed scatter returns
/// black; a miss returns the sky at any depth.
pub fn ray_color(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(rec) = scene.hit(ray, Interval::new(T_MIN, f64::INFINITY)) else {
        return config.sky.radiance(ray);
    };

    if depth >= config.max_depth {
        return Color::ZERO;
    }

    match scene.material(rec.material).scatter(ray, &rec, rng) {
        Some(scatter) => {
            scatter.attenuation * ray_color(&scatter.scattered, scene, depth + 1, config, rng)
        }
        None => Color::ZERO,
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Gamma-encode a linear color and quantize it to 8 bits per channel.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let encode = |c: f64| (255.99 * linear_to_gamma(c).clamp(0.0, 1.0)) as u8;
    [encode(color.x), encode(color.y), encode(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// Row 0 is the top of the image; each sample is jittered uniformly
/// inside the pixel. Returns the linear mean of the samples.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let samples = config.samples_per_pixel.max(1);
    let row_from_bottom = (config.height - 1 - y) as f64;
    let mut pixel_color = Color::ZERO;

    for _ in 0..samples {
        let s = (x as f64 + gen_f64(rng)) / config.width as f64;
        let t = (row_from_bottom + gen_f64(rng)) / config.height as f64;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += ray_color(&ray, scene, 0, config, rng);
    }

    // Average the samples
    pixel_color / samples as f64
}

/// Linear radiance per pixel, row-major from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Gamma-encoded RGB bytes, 3 per pixel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer on the calling thread.
///
/// Every pixel draws from its own generator, so the output matches
/// [`render_parallel`](crate::render_parallel) exactly.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_depth
    );
    let start = Instant::now();
    let mut image = ImageBuffer::new(config.width, config.height);

    for y in 0..config.height {
        for x in 0..config.width {
            let mut rng = pixel_rng(config.seed, (y * config.width + x) as u64);
            let color = render_pixel(camera, scene, x, y, config, &mut rng);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    image
}
