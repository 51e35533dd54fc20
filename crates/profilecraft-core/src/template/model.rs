//! Template identifiers and style lookup.
//!
//! The public page resolves its template from the first dash-delimited token
//! of the username path segment; unrecognized tokens fall back to `Modern`.
//! The style bundle is purely presentational and has no behavioral effect.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Portfolio template identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Template {
    #[default]
    Modern,
    Creative,
    Professional,
    Minimalist,
}

/// Fixed presentational tokens selected by template identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStyles {
    pub background: &'static str,
    pub bar_background: &'static str,
    pub bar_fill: &'static str,
    pub title_color: &'static str,
    pub divider: &'static str,
}

impl Template {
    /// Resolves the template from a username path segment.
    ///
    /// The first dash-delimited token names the template; anything
    /// unrecognized (including an empty segment) resolves to `Modern`.
    pub fn from_username(username: &str) -> Self {
        let token = username.split('-').next().unwrap_or_default();
        token.parse().unwrap_or_default()
    }

    /// The presentational style bundle for this template.
    pub fn styles(self) -> TemplateStyles {
        match self {
            Template::Modern => TemplateStyles {
                background: "bg-gray-50",
                bar_background: "bg-gray-200",
                bar_fill: "bg-blue-600",
                title_color: "text-gray-900",
                divider: "bg-blue-600",
            },
            Template::Creative => TemplateStyles {
                background: "bg-gradient-to-r from-purple-50 to-blue-50",
                bar_background: "bg-gray-200",
                bar_fill: "bg-purple-600",
                title_color: "text-purple-800",
                divider: "bg-purple-600",
            },
            Template::Professional => TemplateStyles {
                background: "bg-slate-50",
                bar_background: "bg-gray-200",
                bar_fill: "bg-slate-600",
                title_color: "text-slate-800",
                divider: "bg-slate-600",
            },
            Template::Minimalist => TemplateStyles {
                background: "bg-white",
                bar_background: "bg-gray-100",
                bar_fill: "bg-gray-800",
                title_color: "text-gray-900",
                divider: "bg-black",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_username_takes_first_dash_token() {
        assert_eq!(Template::from_username("creative-alex"), Template::Creative);
        assert_eq!(
            Template::from_username("professional-jane-doe"),
            Template::Professional
        );
        assert_eq!(Template::from_username("minimalist"), Template::Minimalist);
    }

    #[test]
    fn test_from_username_defaults_to_modern() {
        assert_eq!(Template::from_username("alexmorgan"), Template::Modern);
        assert_eq!(Template::from_username(""), Template::Modern);
        assert_eq!(Template::from_username("-creative"), Template::Modern);
    }

    #[test]
    fn test_every_template_has_distinct_fill() {
        let fills: Vec<&str> = Template::iter().map(|t| t.styles().bar_fill).collect();
        assert_eq!(fills.len(), 4);
        for (i, fill) in fills.iter().enumerate() {
            assert!(!fills[i + 1..].contains(fill));
        }
    }

    #[test]
    fn test_display_round_trip() {
        for template in Template::iter() {
            let name = template.to_string();
            assert_eq!(name.parse::<Template>().unwrap(), template);
        }
    }
}
