// Print the normalized theme as JSON.
//
//     theme-shades-tools [CONFIG]
//
// CONFIG is an Hjson (or JSON) file with the fields `remFactor`,
// `colors` and `spacing`.  Without it, the built-in theme is used.
// Set RUST_LOG=debug to see which colors are dropped.

use std::{env,
          fs,
          io::{self, Write}};
use anyhow::{Context, Result};
use theme_shades::{theme, ThemeConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

fn read_config(path: &str) -> Result<ThemeConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("theme-shades-tools: cannot read “{path}”"))?;
    config::parse_config(&text)
        .with_context(|| format!("theme-shades-tools: “{path}”"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match env::args().nth(1) {
        Some(path) => read_config(&path)?,
        None => {
            info!("no config given, using the built-in theme");
            ThemeConfig::default()
        }
    };
    let theme = theme::run(&config)?;

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &theme)?;
    writeln!(out)?;
    Ok(())
}
