//! `ecoinlink build`: static output for hosting.

use crate::progress;
use anyhow::{Context, Result};
use ecoinlink_site::config::SiteConfig;
use ecoinlink_site::model::Route;
use ecoinlink_site::shell::ShellState;
use ecoinlink_site::{render_not_found, render_page};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

pub fn run(out: &Path, config: SiteConfig) -> Result<()> {
    let started = Instant::now();
    fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;

    let pages = [
        ("index.html", render_page(Route::Home, &ShellState::new(), &config)),
        ("404.html", render_not_found(&config)),
    ];

    let mut total = 0;
    for (name, html) in &pages {
        let path = out.join(name);
        fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), bytes = html.len(), "page written");
        total += html.len();
    }

    progress::success(&format!(
        "Built {} pages ({}) into {} with base path {} in {}",
        pages.len(),
        progress::format_size(total),
        out.display(),
        config.base_path,
        progress::format_duration(started.elapsed()),
    ));
    Ok(())
}
