//! Derived views over the project collection for the public gallery.
//!
//! Pure functions of their inputs, recomputed on every read. The dataset is
//! small enough that caching would only add staleness risk.

use crate::collection::Collection;

use super::Project;

/// Distinct tags across all projects, in first-seen order.
pub fn available_tags(projects: &Collection<Project>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for project in projects {
        for tag in &project.tags {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Projects visible under an optional tag filter.
///
/// With no filter the full collection is returned in order; with a filter,
/// the stable-order subsequence of projects whose tags contain the filter
/// string exactly.
pub fn visible_projects<'a>(
    projects: &'a Collection<Project>,
    filter: Option<&str>,
) -> Vec<&'a Project> {
    match filter {
        None => projects.iter().collect(),
        Some(tag) => projects
            .iter()
            .filter(|p| p.tags.iter().any(|t| t == tag))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Record;

    fn gallery() -> Collection<Project> {
        Collection::from_records(vec![
            Project::new("1", "Shop", "", vec!["React".to_string()], "", ""),
            Project::new("2", "Board", "", vec!["Vue".to_string()], "", ""),
            Project::new(
                "3",
                "Charts",
                "",
                vec!["React".to_string(), "D3".to_string()],
                "",
                "",
            ),
        ])
    }

    #[test]
    fn test_available_tags_first_seen_order_without_duplicates() {
        let projects = gallery();
        assert_eq!(available_tags(&projects), vec!["React", "Vue", "D3"]);
    }

    #[test]
    fn test_visible_projects_without_filter_returns_all_in_order() {
        let projects = gallery();
        let visible = visible_projects(&projects, None);
        let titles: Vec<&str> = visible.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Shop", "Board", "Charts"]);
    }

    #[test]
    fn test_visible_projects_filter_is_ordered_subsequence() {
        let projects = gallery();
        let visible = visible_projects(&projects, Some("React"));
        let titles: Vec<&str> = visible.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Shop", "Charts"]);
        assert!(visible.iter().all(|p| p.tags.iter().any(|t| t == "React")));
    }

    #[test]
    fn test_visible_projects_single_tag_match() {
        let projects = gallery();
        let visible = visible_projects(&projects, Some("Vue"));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id().as_str(), "2");
    }

    #[test]
    fn test_duplicate_tags_collapse_in_available_tags() {
        let mut projects = gallery();
        let id = crate::collection::RecordId::from("1");
        projects.update(&id, |p| {
            p.add_tag("React");
        });
        assert_eq!(available_tags(&projects), vec!["React", "Vue", "D3"]);
    }
}
