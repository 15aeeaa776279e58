use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

mod cli;
mod output;
mod scenes;

use cli::Args;
use glint_tracer::render_parallel;

fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    ensure!(
        args.width > 0 && args.height > 0,
        "image dimensions must be positive, got {}x{}",
        args.width,
        args.height
    );

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the thread pool")?;
    }

    // Fail on a bad extension before spending time rendering
    output::OutputFormat::from_path(&args.output)?;

    let (scene, camera) = scenes::build(args.scene, args.width as f64 / args.height as f64);
    info!("Scene {:?}: {} spheres", args.scene, scene.len());

    let config = args.render_config();
    let image = render_parallel(&camera, &scene, &config, args.bucket_size);

    output::save(&image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!("Saved {}", args.output.display());

    Ok(())
}
