//! Leptos components for the ECOinLink pages.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── Layout
//! │   ├── Header (logo, desktop nav, menu toggle)
//! │   ├── MobileMenu
//! │   ├── <main> LandingPage
//! │   │   ├── PlatformCard (per platform)
//! │   │   ├── FeatureCard (per feature)
//! │   │   └── StatCard (per statistic)
//! │   └── Footer
//! └── ProviderMounts (toaster, sonner, bootstrap JSON)
//! ```

mod cards;
mod document;
mod icons;
mod layout;

pub use cards::{FeatureCard, PlatformCard, StatCard, feature_tone};
pub use document::SiteDocument;
pub use icons::{HasIcon, Icon, IconName};
pub use layout::{Layout, NAV_ITEMS, NavItem};
