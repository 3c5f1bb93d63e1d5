//! `ecoinlink render`: print the HTML for one location.

use anyhow::Result;
use ecoinlink_site::config::SiteConfig;
use ecoinlink_site::router::Resolution;
use ecoinlink_site::shell::ShellState;
use ecoinlink_site::{render_content, render_path};
use tracing::info;

pub struct Options {
    pub scroll_y: f64,
    pub menu_open: bool,
    pub content_only: bool,
}

pub fn run(path: &str, options: Options, config: &SiteConfig) -> Result<()> {
    let shell = ShellState::new()
        .with_scroll(options.scroll_y)
        .with_menu_open(options.menu_open);
    let rendered = render_path(path, &shell, config);

    if let Resolution::Redirect { from, to } = &rendered.resolution {
        info!("{from} is not a route, redirected to {to}");
    }

    if options.content_only {
        println!("{}", render_content(rendered.resolution.route(), config));
    } else {
        println!("{}", rendered.html);
    }
    Ok(())
}
