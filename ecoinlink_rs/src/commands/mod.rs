//! Command handlers.

mod build;
mod catalogue;
mod render;
mod routes;
mod simulate;

use crate::cli::Command;
use anyhow::{Context, Result};
use ecoinlink_site::config::{CONFIG_FILE, SiteConfig};
use std::path::Path;
use tracing::debug;

/// Load the site config. An explicit `--config` must exist and parse; the
/// implicit `./ecoinlink.toml` falls back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<SiteConfig> {
    let config = match explicit {
        Some(path) => SiteConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SiteConfig::load_or_default(Path::new(CONFIG_FILE)),
    };
    debug!(base_path = %config.base_path, "config loaded");
    Ok(config)
}

/// Run one subcommand.
pub fn dispatch(command: Command, config: SiteConfig) -> Result<()> {
    match command {
        Command::Build { out, base_path } => {
            build::run(&out, apply_base_path(config, base_path.as_deref()))
        }
        Command::Render {
            path,
            scroll_y,
            menu_open,
            content_only,
            base_path,
        } => render::run(
            &path,
            render::Options {
                scroll_y,
                menu_open,
                content_only,
            },
            &apply_base_path(config, base_path.as_deref()),
        ),
        Command::Routes { json } => routes::run(json),
        Command::Catalogue { json } => catalogue::run(json),
        Command::Simulate {
            script,
            start,
            html,
        } => simulate::run(script.as_deref(), &start, html, &config),
    }
}

fn apply_base_path(config: SiteConfig, base_path: Option<&str>) -> SiteConfig {
    match base_path {
        Some(base_path) => config.with_base_path(base_path),
        None => config,
    }
}
