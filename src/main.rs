//! Writes the game's sound effects into `sounds/`.
//!
//! Run with: `cargo run --bin create-sounds`
//!
//! Set `RUST_LOG=info` (or `debug`) to see each file as it is rendered.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dirge::{presets, render, wav};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let out_dir = Path::new(presets::OUTPUT_DIR);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    for effect in presets::ALL {
        let path = effect.path_in(out_dir);
        let buffer = render(&effect.request);
        info!(effect = effect.name, samples = buffer.len(), "rendered");
        wav::write(&path, &buffer).with_context(|| format!("failed to save {}", effect.name))?;
    }

    println!("Created sounds/death.wav and sounds/gameover.wav");
    Ok(())
}
