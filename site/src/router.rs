//! Client-side route resolution.
//!
//! Locations are matched against the route table after normalisation:
//! a leading `#` (hash router) is dropped, query string and fragment are
//! cut, trailing slashes are ignored and matching is ASCII
//! case-insensitive. Anything that does not match is redirected to home
//! with history replacement.

use crate::model::Route;
use serde::Serialize;
use tracing::debug;

/// Outcome of resolving a location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// The location is a route table entry
    Matched {
        /// Matched route
        route: Route,
    },
    /// Catch-all: replace the location with `to`
    Redirect {
        /// Normalised location that did not match
        from: String,
        /// Redirect target (always home)
        to: Route,
    },
}

impl Resolution {
    /// The route that ends up rendered.
    pub fn route(&self) -> Route {
        match self {
            Resolution::Matched { route } => *route,
            Resolution::Redirect { to, .. } => *to,
        }
    }

    /// Whether the location was redirected.
    pub fn is_redirect(&self) -> bool {
        matches!(self, Resolution::Redirect { .. })
    }
}

/// Normalise a raw location into a comparable path.
///
/// ```rust
/// use ecoinlink_site::router::normalize;
///
/// assert_eq!(normalize("#/CarLink/?utm=1"), "/carlink");
/// assert_eq!(normalize(""), "/");
/// ```
pub fn normalize(location: &str) -> String {
    let trimmed = location.trim();
    let without_hash = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let path = without_hash
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');

    let mut normalized = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(&path.to_ascii_lowercase());
    normalized
}

/// Resolve a location against the route table.
pub fn resolve(location: &str) -> Resolution {
    let path = normalize(location);
    match Route::from_path(&path) {
        Some(route) => Resolution::Matched { route },
        None => {
            debug!(location, path = %path, "unmatched location, redirecting home");
            Resolution::Redirect {
                from: path,
                to: Route::Home,
            }
        }
    }
}
