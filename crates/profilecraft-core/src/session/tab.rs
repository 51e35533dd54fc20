//! Dashboard tab identifiers and route mapping.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Base path the dashboard routes hang off.
pub const DASHBOARD_BASE: &str = "/dashboard";

/// The five dashboard sections, each reachable by a distinct path suffix.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Profile,
    Skills,
    Resume,
    Projects,
    Settings,
}

impl DashboardTab {
    /// Resolves the active tab from a route path by suffix match.
    ///
    /// Anything that is not a known section suffix (including the bare
    /// dashboard path) is the profile tab.
    pub fn from_path(path: &str) -> Self {
        if path.ends_with("/skills") {
            Self::Skills
        } else if path.ends_with("/resume") {
            Self::Resume
        } else if path.ends_with("/projects") {
            Self::Projects
        } else if path.ends_with("/settings") {
            Self::Settings
        } else {
            Self::Profile
        }
    }

    /// The route path for this tab. Profile maps to the bare base path.
    pub fn path(self) -> String {
        match self {
            Self::Profile => format!("{DASHBOARD_BASE}/"),
            other => format!("{DASHBOARD_BASE}/{other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_path_matches_suffix() {
        assert_eq!(DashboardTab::from_path("/dashboard/skills"), DashboardTab::Skills);
        assert_eq!(DashboardTab::from_path("/dashboard/resume"), DashboardTab::Resume);
        assert_eq!(
            DashboardTab::from_path("/dashboard/projects"),
            DashboardTab::Projects
        );
        assert_eq!(
            DashboardTab::from_path("/dashboard/settings"),
            DashboardTab::Settings
        );
    }

    #[test]
    fn test_unknown_path_is_profile() {
        assert_eq!(DashboardTab::from_path("/dashboard/"), DashboardTab::Profile);
        assert_eq!(DashboardTab::from_path("/dashboard"), DashboardTab::Profile);
        assert_eq!(DashboardTab::from_path("/elsewhere"), DashboardTab::Profile);
    }

    #[test]
    fn test_path_round_trips_for_every_tab() {
        for tab in DashboardTab::iter() {
            assert_eq!(DashboardTab::from_path(&tab.path()), tab);
        }
    }
}
