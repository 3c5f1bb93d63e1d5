//! SVG icon components using Lucide Icons.
//!
//! Icons are a closed set ([`IconName`]). Catalogue entries still refer to
//! icons by string key, so [`IconName::lookup`] resolves a key and
//! [`HasIcon::icon`] applies the per-entity fallback when the key is unknown.
//! All shapes are from [Lucide](https://lucide.dev/) (24px grid, 2px stroke),
//! with circles, rects and ellipses flattened into path data.

use crate::model::{Feature, Platform, Statistic};
use leptos::prelude::*;
use serde::Serialize;

/// Every icon the site can draw. Variants are named after the Lucide icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum IconName {
    Stethoscope,
    Car,
    Truck,
    Database,
    Lock,
    Cpu,
    Globe,
    Share2,
    BarChart3,
    Handshake,
    Zap,
    MapPin,
    Users,
    ShieldCheck,
    ArrowRight,
    ChevronRight,
    Menu,
    X,
    Activity,
}

/// Icons addressable by catalogue entries, keyed by their Lucide name.
const LOOKUP: [IconName; 14] = [
    IconName::Stethoscope,
    IconName::Car,
    IconName::Truck,
    IconName::Database,
    IconName::Lock,
    IconName::Cpu,
    IconName::Globe,
    IconName::Share2,
    IconName::BarChart3,
    IconName::Handshake,
    IconName::Zap,
    IconName::MapPin,
    IconName::Users,
    IconName::ShieldCheck,
];

impl IconName {
    /// Resolve a catalogue icon key. Layout-only icons (arrows, menu) are
    /// not addressable from entity data.
    pub fn lookup(key: &str) -> Option<IconName> {
        LOOKUP.into_iter().find(|icon| icon.key() == key)
    }

    /// Lucide component name, the key used by catalogue entries.
    pub const fn key(self) -> &'static str {
        match self {
            IconName::Stethoscope => "Stethoscope",
            IconName::Car => "Car",
            IconName::Truck => "Truck",
            IconName::Database => "Database",
            IconName::Lock => "Lock",
            IconName::Cpu => "Cpu",
            IconName::Globe => "Globe",
            IconName::Share2 => "Share2",
            IconName::BarChart3 => "BarChart3",
            IconName::Handshake => "Handshake",
            IconName::Zap => "Zap",
            IconName::MapPin => "MapPin",
            IconName::Users => "Users",
            IconName::ShieldCheck => "ShieldCheck",
            IconName::ArrowRight => "ArrowRight",
            IconName::ChevronRight => "ChevronRight",
            IconName::Menu => "Menu",
            IconName::X => "X",
            IconName::Activity => "Activity",
        }
    }

    /// Kebab-case slug, rendered as `data-icon` on the `<svg>`.
    pub const fn slug(self) -> &'static str {
        match self {
            IconName::Stethoscope => "stethoscope",
            IconName::Car => "car",
            IconName::Truck => "truck",
            IconName::Database => "database",
            IconName::Lock => "lock",
            IconName::Cpu => "cpu",
            IconName::Globe => "globe",
            IconName::Share2 => "share-2",
            IconName::BarChart3 => "bar-chart-3",
            IconName::Handshake => "handshake",
            IconName::Zap => "zap",
            IconName::MapPin => "map-pin",
            IconName::Users => "users",
            IconName::ShieldCheck => "shield-check",
            IconName::ArrowRight => "arrow-right",
            IconName::ChevronRight => "chevron-right",
            IconName::Menu => "menu",
            IconName::X => "x",
            IconName::Activity => "activity",
        }
    }

    /// Path data (`d` attributes) making up the icon.
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            IconName::Stethoscope => &[
                "M4.8 2.3A.3.3 0 1 0 5 2H4a2 2 0 0 0-2 2v5a6 6 0 0 0 6 6a6 6 0 0 0 6-6V4a2 2 0 0 0-2-2h-1a.2.2 0 1 0 .3.3",
                "M8 15v1a6 6 0 0 0 6 6a6 6 0 0 0 6-6v-4",
                "M18 10a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            IconName::Car => &[
                "M19 17h2c.6 0 1-.4 1-1v-3c0-.9-.7-1.7-1.5-1.9C18.7 10.6 16 10 16 10s-1.3-1.4-2.2-2.3c-.5-.4-1.1-.7-1.8-.7H5c-.6 0-1.1.4-1.4.9l-1.4 2.9A3.7 3.7 0 0 0 2 12v4c0 .6.4 1 1 1h2",
                "M5 17a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
                "M9 17h6",
                "M15 17a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            IconName::Truck => &[
                "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
                "M15 18H9",
                "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14",
                "M15 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
                "M5 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            IconName::Database => &[
                "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0",
                "M3 5V19A9 3 0 0 0 21 19V5",
                "M3 12A9 3 0 0 0 21 12",
            ],
            IconName::Lock => &[
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
                "M7 11V7a5 5 0 0 1 10 0v4",
            ],
            IconName::Cpu => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M9 9h6v6H9z",
                "M15 2v2",
                "M15 20v2",
                "M2 15h2",
                "M2 9h2",
                "M20 15h2",
                "M20 9h2",
                "M9 2v2",
                "M9 20v2",
            ],
            IconName::Globe => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M12 2a14.5 14.5 0 0 0 0 20a14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            IconName::Share2 => &[
                "M15 5a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M3 12a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M15 19a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M8.59 13.51l6.83 3.98",
                "M15.41 6.51l-6.82 3.98",
            ],
            IconName::BarChart3 => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            IconName::Handshake => &[
                "m11 17 2 2a1 1 0 1 0 3-3",
                "m14 14 2.5 2.5a1 1 0 1 0 3-3l-3.88-3.88a3 3 0 0 0-4.24 0l-.88.88a1 1 0 1 1-3-3l2.81-2.81a5.79 5.79 0 0 1 7.06-.87l.47.28a2 2 0 0 0 1.42.25L21 4",
                "m21 3 1 11h-2",
                "M3 3 2 14l6.5 6.5a1 1 0 1 0 3-3",
                "M3 4h8",
            ],
            IconName::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            IconName::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            IconName::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconName::ShieldCheck => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
                "m9 12 2 2 4-4",
            ],
            IconName::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconName::ChevronRight => &["m9 18 6-6-6-6"],
            IconName::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            IconName::X => &["M18 6 6 18", "m6 6 12 12"],
            IconName::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
        }
    }
}

/// An entity that names its icon by string key.
///
/// `FALLBACK_ICON` is what the entity kind draws when the key is not in the
/// lookup table; resolution never fails.
pub trait HasIcon {
    /// Icon drawn for unknown keys
    const FALLBACK_ICON: IconName;

    /// The raw icon key stored on the entity
    fn icon_key(&self) -> &str;

    /// Resolved icon, falling back to [`Self::FALLBACK_ICON`].
    fn icon(&self) -> IconName {
        IconName::lookup(self.icon_key()).unwrap_or(Self::FALLBACK_ICON)
    }
}

impl HasIcon for Platform {
    const FALLBACK_ICON: IconName = IconName::Globe;

    fn icon_key(&self) -> &str {
        self.icon_name
    }
}

impl HasIcon for Feature {
    const FALLBACK_ICON: IconName = IconName::Share2;

    fn icon_key(&self) -> &str {
        self.icon_name
    }
}

impl HasIcon for Statistic {
    const FALLBACK_ICON: IconName = IconName::BarChart3;

    fn icon_key(&self) -> &str {
        self.icon_name
    }
}

/// Renders an inline Lucide icon.
///
/// # Props
///
/// * `name` - Which icon to draw
/// * `size` - Icon size in pixels (default: "24")
/// * `class` - Additional CSS classes (default: "icon")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon name=IconName::Globe size="20" /> }
/// ```
#[component]
pub fn Icon(
    /// Icon to draw
    name: IconName,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// CSS class names
    #[prop(into, default = String::from("icon"))]
    class: String,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            data-icon=name.slug()
            aria-hidden="true"
        >
            {name.paths().iter().copied().map(|d| view! { <path d=d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FeaturePlatform, PlatformId};

    fn platform_with_icon(icon_name: &'static str) -> Platform {
        Platform {
            id: PlatformId::Carlink,
            name: "n",
            title: "t",
            description: "d",
            slogan: "s",
            color_class: "text-chart-2",
            bg_class: "bg-chart-2",
            icon_name,
            features: &[],
        }
    }

    #[test]
    fn lookup_known_keys() {
        assert_eq!(IconName::lookup("Truck"), Some(IconName::Truck));
        assert_eq!(IconName::lookup("BarChart3"), Some(IconName::BarChart3));
        assert_eq!(IconName::lookup("ShieldCheck"), Some(IconName::ShieldCheck));
    }

    #[test]
    fn lookup_is_case_sensitive_and_closed() {
        assert_eq!(IconName::lookup("truck"), None);
        assert_eq!(IconName::lookup(""), None);
        // layout icons are not addressable from catalogue data
        assert_eq!(IconName::lookup("Menu"), None);
        assert_eq!(IconName::lookup("ArrowRight"), None);
    }

    #[test]
    fn fallback_per_entity_kind() {
        assert_eq!(platform_with_icon("Rocket").icon(), IconName::Globe);

        let feature = Feature {
            id: "f",
            title: "t",
            description: "d",
            icon_name: "Rocket",
            platform: FeaturePlatform::Common,
            is_secure: None,
            target_audience: None,
        };
        assert_eq!(feature.icon(), IconName::Share2);

        let stat = Statistic {
            id: "s",
            label: "l",
            value: "1",
            suffix: "",
            icon_name: "Rocket",
            color_class: "text-primary",
        };
        assert_eq!(stat.icon(), IconName::BarChart3);
    }

    #[test]
    fn known_key_wins_over_fallback() {
        assert_eq!(platform_with_icon("Car").icon(), IconName::Car);
    }

    #[test]
    fn every_icon_has_paths() {
        for icon in LOOKUP {
            assert!(!icon.paths().is_empty(), "{}", icon.key());
            assert_eq!(IconName::lookup(icon.key()), Some(icon));
        }
    }
}
