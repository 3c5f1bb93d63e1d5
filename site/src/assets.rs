//! Named image assets and their public URLs.

use serde::Serialize;

/// Images referenced by the layout and landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Image {
    /// Brand logo (header and footer)
    Logo,
    /// Hero background
    HeroLogistics,
    /// Highlight panel photo
    MedicalTech,
    /// Statistics band pattern
    GlobalNetwork,
    /// Vision panel photo
    AutomotiveTech,
}

impl Image {
    /// File name under `images/`.
    pub const fn file_name(self) -> &'static str {
        match self {
            Image::Logo => "image_48.png",
            Image::HeroLogistics => "hero_logistics_2.jpg",
            Image::MedicalTech => "medical_tech_6.jpg",
            Image::GlobalNetwork => "global_network_1.jpg",
            Image::AutomotiveTech => "automotive_tech_7.jpg",
        }
    }

    /// Public URL under a normalised base path (`/x/` form).
    pub fn url(self, base_path: &str) -> String {
        format!("{}images/{}", base_path, self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_prefixed_with_base_path() {
        assert_eq!(Image::Logo.url("/"), "/images/image_48.png");
        assert_eq!(
            Image::HeroLogistics.url("/ecoinlink-platform/"),
            "/ecoinlink-platform/images/hero_logistics_2.jpg"
        );
    }
}
