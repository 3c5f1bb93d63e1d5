//! # ecoinlink-site
//!
//! Leptos SSR renderer for the ECOinLink marketing site.
//!
//! The site presents three verticals (MediLink, CarLink, EXLink) on a single
//! landing page behind a hash router. Everything is static: the catalogue is
//! compiled in and every route renders the same landing content inside the
//! page shell.
//!
//! ## Quick Start
//!
//! ```rust
//! use ecoinlink_site::{config::SiteConfig, model::Route, render_page, shell::ShellState};
//!
//! let config = SiteConfig::default();
//! let html = render_page(Route::Home, &ShellState::new(), &config);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`model`] - platform, feature, statistic and route types
//! - [`catalogue`] - the static content
//! - [`components`] - Leptos UI components (cards, layout, document)
//! - [`pages`] - the landing page
//! - [`shell`] - header and menu flags with their transitions
//! - [`router`] - location normalisation and catch-all redirect
//! - [`session`] - event loop applying scroll, menu and navigation events
//! - [`config`] - `ecoinlink.toml` loading
//! - [`bootstrap`] - inert provider configuration
//! - [`styles`] - CSS constants
//!
//! Rendering is a pure function of `(Route, ShellState, SiteConfig)`. State
//! changes go through [`session::Session`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assets;
pub mod bootstrap;
pub mod catalogue;
pub mod classes;
pub mod components;
pub mod config;
pub mod model;
pub mod pages;
pub mod router;
pub mod session;
pub mod shell;
pub mod styles;

use components::SiteDocument;
use config::SiteConfig;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use model::Route;
use pages::LandingPage;
use router::{Resolution, resolve};
use serde::Serialize;
use shell::ShellState;

/// Render the complete HTML document for a route.
///
/// # Example
///
/// ```rust
/// use ecoinlink_site::{config::SiteConfig, model::Route, render_page, shell::ShellState};
///
/// let html = render_page(Route::Carlink, &ShellState::new(), &SiteConfig::default());
/// assert!(html.contains("aria-current=\"page\""));
/// ```
pub fn render_page(route: Route, shell: &ShellState, config: &SiteConfig) -> String {
    let doc = view! {
        <SiteDocument route=route shell=*shell config=config.clone() />
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Render only the page content for a route (what goes into `<main>`).
pub fn render_content(route: Route, config: &SiteConfig) -> String {
    match route.page() {
        model::Page::Landing => view! { <LandingPage base_path=config.base_path.clone() /> }.to_html(),
    }
}

/// A rendered location together with how it was resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Rendered {
    /// Route match or redirect
    pub resolution: Resolution,
    /// HTML of the route that was finally displayed
    pub html: String,
}

/// Resolve a raw location and render the resulting page. Unmatched
/// locations render home.
pub fn render_path(location: &str, shell: &ShellState, config: &SiteConfig) -> Rendered {
    let resolution = resolve(location);
    let html = render_page(resolution.route(), shell, config);
    Rendered { resolution, html }
}

/// Static-hosting fallback page: sends any unknown server path back to the
/// site root, where the hash router takes over.
pub fn render_not_found(config: &SiteConfig) -> String {
    let target = config.base_path.clone();
    let refresh = format!("0; url={target}");
    let doc = view! {
        <html lang=config.lang.clone()>
            <head>
                <meta charset="UTF-8" />
                <meta http-equiv="refresh" content=refresh />
                <title>{config.title.clone()}</title>
            </head>
            <body>
                <a href=target>{config.title.clone()}</a>
            </body>
        </html>
    };

    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::default().with_base_path("/")
    }

    #[test]
    fn renders_full_document() {
        let html = render_page(Route::Home, &ShellState::new(), &config());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("ECOinLink"));
        assert!(html.contains("data-route=\"/\""));
    }

    #[test]
    fn every_route_renders_landing_content() {
        let home = render_content(Route::Home, &config());
        for route in Route::ALL {
            assert_eq!(render_content(route, &config()), home, "{route}");
        }
    }

    #[test]
    fn render_path_follows_redirect() {
        let rendered = render_path("/unknown", &ShellState::new(), &config());
        assert!(rendered.resolution.is_redirect());
        assert_eq!(rendered.resolution.route(), Route::Home);
        assert!(rendered.html.contains("data-route=\"/\""));
    }

    #[test]
    fn not_found_redirects_to_base_path() {
        let html = render_not_found(&SiteConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("url=/ecoinlink-platform/"));
    }
}
