//! Application providers mounted around the router.
//!
//! The site performs no requests, so none of this is exercised at runtime.
//! It is kept as configuration and emitted into the page as inert mount
//! points plus a JSON blob, ready for a future backend integration.

use serde::{Deserialize, Serialize};

/// Query-cache client defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryClientConfig {
    /// Seconds a cached query stays fresh
    pub stale_time_secs: u64,
    /// Retries for a failed query
    pub retry: u32,
}

impl Default for QueryClientConfig {
    fn default() -> Self {
        Self {
            stale_time_secs: 5 * 60,
            retry: 1,
        }
    }
}

/// Screen corner for the rich toast surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    /// Attribute value (`top-right`).
    pub const fn as_str(self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "top-left",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::TopRight => "top-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::BottomCenter => "bottom-center",
            ToastPosition::BottomRight => "bottom-right",
        }
    }
}

/// Plain toast surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToasterConfig {
    /// Mount the surface
    pub enabled: bool,
}

impl Default for ToasterConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Rich toast surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SonnerConfig {
    /// Mount the surface
    pub enabled: bool,
    /// Corner to stack toasts in
    pub position: ToastPosition,
    /// Expand stacked toasts by default
    pub expand: bool,
    /// Colored variants for success/error toasts
    pub rich_colors: bool,
}

impl Default for SonnerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            position: ToastPosition::TopRight,
            expand: false,
            rich_colors: true,
        }
    }
}

/// Everything mounted around the router.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Providers {
    /// Query cache client
    pub query: QueryClientConfig,
    /// Plain toasts
    pub toaster: ToasterConfig,
    /// Rich toasts
    pub sonner: SonnerConfig,
}

impl Providers {
    /// JSON blob embedded in the page.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_bootstrap() {
        let providers = Providers::default();
        assert_eq!(providers.query.stale_time_secs, 300);
        assert_eq!(providers.query.retry, 1);
        assert!(providers.toaster.enabled);
        assert_eq!(providers.sonner.position, ToastPosition::TopRight);
        assert!(!providers.sonner.expand);
        assert!(providers.sonner.rich_colors);
    }

    #[test]
    fn json_blob_uses_kebab_case_positions() {
        let json = Providers::default().to_json();
        assert!(json.contains("\"position\":\"top-right\""));
        assert!(json.contains("\"stale_time_secs\":300"));
    }
}
