use clap::{Parser, ValueEnum};
use glint_tracer::{RenderConfig, DEFAULT_BUCKET_SIZE};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Diffuse sphere on a diffuse ground
    Basic,
    /// Diffuse sphere flanked by a rough and a polished metal sphere
    Metal,
    /// Diffuse, metal and solid glass spheres
    Glass,
    /// Like `glass`, with a hollow glass bubble
    HollowGlass,
    /// Hollow glass scene through a wide-aperture lens
    DepthOfField,
}

#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "A CPU path tracer for spheres")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 200)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 100)]
    pub height: u32,

    /// Samples per pixel
    #[arg(long, short = 's', default_value_t = 100)]
    pub samples: u32,

    /// Maximum bounce depth
    #[arg(long, default_value_t = glint_tracer::MAX_DEPTH)]
    pub max_depth: u32,

    /// Seed for the per-pixel random generators
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    #[arg(long, value_enum, default_value_t = SceneKind::Basic)]
    pub scene: SceneKind,

    /// Worker threads (defaults to one per core)
    #[arg(long, short = 'j')]
    pub threads: Option<usize>,

    /// Bucket edge length in pixels
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Output file (.ppm or .png)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            samples_per_pixel: self.samples,
            max_depth: self.max_depth,
            seed: self.seed,
            ..Default::default()
        }
    }
}
