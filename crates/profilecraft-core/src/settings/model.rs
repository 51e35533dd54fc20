//! Site settings model.

use serde::{Deserialize, Serialize};

/// Publication and appearance settings for the public portfolio site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub username: String,
    /// Public domain the portfolio is served from.
    pub domain: String,
    pub theme: String,
    pub display_contact_form: bool,
    pub display_social_icons: bool,
    pub is_public: bool,
    pub allow_indexing: bool,
    /// Hex color token (e.g., "#3B82F6").
    pub primary_color: String,
    pub accent_color: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            username: String::new(),
            domain: String::new(),
            theme: "blue".to_string(),
            display_contact_form: true,
            display_social_icons: true,
            is_public: true,
            allow_indexing: true,
            primary_color: "#3B82F6".to_string(),
            accent_color: "#0D9488".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_public() {
        let settings = SiteSettings::default();
        assert!(settings.is_public);
        assert!(settings.allow_indexing);
        assert_eq!(settings.theme, "blue");
    }
}
