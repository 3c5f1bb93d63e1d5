//! Domain model for the site: the three entity shapes and the route table.
//!
//! Everything here is plain data. Entities are built once as `static`
//! values in [`crate::catalogue`] and only ever read afterwards, so string
//! fields borrow `'static` text instead of owning it.
//!
//! # Example
//!
//! ```rust
//! use ecoinlink_site::model::{PlatformId, Route};
//!
//! assert_eq!(PlatformId::Carlink.route(), Route::Carlink);
//! assert_eq!(Route::Carlink.path(), "/carlink");
//! assert_eq!(Route::from_path("/exlink"), Some(Route::Exlink));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one of the three verticals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    /// Healthcare vertical
    Medilink,
    /// Automotive vertical
    Carlink,
    /// Logistics vertical
    Exlink,
}

impl PlatformId {
    /// All platform ids in display order.
    pub const ALL: [PlatformId; 3] = [PlatformId::Medilink, PlatformId::Carlink, PlatformId::Exlink];

    /// Stable string key (`medilink`, `carlink`, `exlink`).
    pub const fn key(self) -> &'static str {
        match self {
            PlatformId::Medilink => "medilink",
            PlatformId::Carlink => "carlink",
            PlatformId::Exlink => "exlink",
        }
    }

    /// Route a platform card links to.
    pub const fn route(self) -> Route {
        match self {
            PlatformId::Medilink => Route::Medilink,
            PlatformId::Carlink => Route::Carlink,
            PlatformId::Exlink => Route::Exlink,
        }
    }

    /// CSS custom property holding the platform accent color.
    pub const fn accent_var(self) -> &'static str {
        match self {
            PlatformId::Medilink => "var(--chart-1)",
            PlatformId::Carlink => "var(--chart-2)",
            PlatformId::Exlink => "var(--chart-3)",
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which vertical a feature belongs to, or `Common` for cross-cutting ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeaturePlatform {
    /// Healthcare feature
    Medilink,
    /// Automotive feature
    Carlink,
    /// Logistics feature
    Exlink,
    /// Not tied to a single platform. Unknown keys deserialize here too.
    #[default]
    #[serde(other)]
    Common,
}

impl FeaturePlatform {
    /// The platform this feature belongs to, `None` for common features.
    pub const fn platform(self) -> Option<PlatformId> {
        match self {
            FeaturePlatform::Medilink => Some(PlatformId::Medilink),
            FeaturePlatform::Carlink => Some(PlatformId::Carlink),
            FeaturePlatform::Exlink => Some(PlatformId::Exlink),
            FeaturePlatform::Common => None,
        }
    }

    /// Stable string key, `common` for cross-cutting features.
    pub const fn key(self) -> &'static str {
        match self {
            FeaturePlatform::Medilink => "medilink",
            FeaturePlatform::Carlink => "carlink",
            FeaturePlatform::Exlink => "exlink",
            FeaturePlatform::Common => "common",
        }
    }
}

impl From<PlatformId> for FeaturePlatform {
    fn from(id: PlatformId) -> Self {
        match id {
            PlatformId::Medilink => FeaturePlatform::Medilink,
            PlatformId::Carlink => FeaturePlatform::Carlink,
            PlatformId::Exlink => FeaturePlatform::Exlink,
        }
    }
}

/// One of the three advertised verticals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Platform {
    /// Vertical identifier
    pub id: PlatformId,
    /// Display name, e.g. "ECOin MediLink"
    pub name: &'static str,
    /// Tagline
    pub title: &'static str,
    /// Short description
    pub description: &'static str,
    /// Slogan shown under the name
    pub slogan: &'static str,
    /// Foreground color token
    pub color_class: &'static str,
    /// Background color token
    pub bg_class: &'static str,
    /// Icon key, resolved through [`crate::components::IconName::lookup`]
    pub icon_name: &'static str,
    /// Feature labels in display order
    pub features: &'static [&'static str],
}

/// A marketed capability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Unique id
    pub id: &'static str,
    /// Card title
    pub title: &'static str,
    /// Card body text
    pub description: &'static str,
    /// Icon key
    pub icon_name: &'static str,
    /// Owning vertical
    pub platform: FeaturePlatform,
    /// Shows the "ENCRYPTED" badge when `Some(true)`
    pub is_secure: Option<bool>,
    /// Audience tags in display order
    pub target_audience: Option<&'static [&'static str]>,
}

impl Feature {
    /// Whether the secure badge should be rendered.
    pub fn is_secure(&self) -> bool {
        self.is_secure.unwrap_or(false)
    }
}

/// A hard-coded KPI display value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Statistic {
    /// Unique id
    pub id: &'static str,
    /// Caption under the value
    pub label: &'static str,
    /// Display string, not a parsed number ("2,500", "1.2")
    pub value: &'static str,
    /// Unit suffix ("+", "PB", "명")
    pub suffix: &'static str,
    /// Icon key
    pub icon_name: &'static str,
    /// Color token for icon and suffix
    pub color_class: &'static str,
}

/// Logical route names and their URL paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Route {
    /// `/`
    Home,
    /// `/medilink`
    Medilink,
    /// `/carlink`
    Carlink,
    /// `/exlink`
    Exlink,
}

impl Route {
    /// The whole route table, home first.
    pub const ALL: [Route; 4] = [Route::Home, Route::Medilink, Route::Carlink, Route::Exlink];

    /// URL path of the route.
    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Medilink => "/medilink",
            Route::Carlink => "/carlink",
            Route::Exlink => "/exlink",
        }
    }

    /// Logical name (`HOME`, `MEDILINK`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Route::Home => "HOME",
            Route::Medilink => "MEDILINK",
            Route::Carlink => "CARLINK",
            Route::Exlink => "EXLINK",
        }
    }

    /// Exact lookup of a path in the table. Use [`crate::router::resolve`]
    /// for user-supplied locations.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Hash-router href for links (`#/carlink`).
    pub fn href(self) -> String {
        format!("#{}", self.path())
    }

    /// Page rendered for this route. Every route currently maps to the
    /// landing page; the vertical routes are aliases.
    pub const fn page(self) -> Page {
        Page::Landing
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Pages that exist in the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Page {
    /// The composed landing page
    Landing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_table_paths() {
        let paths: Vec<_> = Route::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths, vec!["/", "/medilink", "/carlink", "/exlink"]);
    }

    #[test]
    fn every_platform_has_a_route() {
        for id in PlatformId::ALL {
            let route = id.route();
            assert_eq!(route.path(), format!("/{}", id.key()));
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn from_path_is_exact() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/carlink/"), None);
        assert_eq!(Route::from_path("/unknown"), None);
    }

    #[test]
    fn feature_platform_defaults_to_common() {
        assert_eq!(FeaturePlatform::default(), FeaturePlatform::Common);
        assert_eq!(FeaturePlatform::Common.platform(), None);
        assert_eq!(
            FeaturePlatform::from(PlatformId::Exlink).platform(),
            Some(PlatformId::Exlink)
        );
    }

    #[test]
    fn unknown_feature_platform_key_deserializes_as_common() {
        let parsed: FeaturePlatform = serde_json::from_str("\"aerolink\"").unwrap();
        assert_eq!(parsed, FeaturePlatform::Common);
        let parsed: FeaturePlatform = serde_json::from_str("\"carlink\"").unwrap();
        assert_eq!(parsed, FeaturePlatform::Carlink);
    }

    #[test]
    fn hrefs_use_hash_routing() {
        assert_eq!(Route::Home.href(), "#/");
        assert_eq!(Route::Medilink.href(), "#/medilink");
    }
}
