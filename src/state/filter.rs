//! Single-predicate filtering over catalog records.

use super::data::{Experience, ExperienceField, Project, ProjectCategory};

/// Records that belong to exactly one value of a closed category set.
pub trait Categorized {
    type Category: Copy + Eq;

    fn category(&self) -> Self::Category;
}

impl Categorized for Project {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.category
    }
}

impl Categorized for Experience {
    type Category = ExperienceField;

    fn category(&self) -> ExperienceField {
        self.field
    }
}

/// The active filter: the wildcard or one concrete category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: Copy + Eq> Filter<C> {
    pub fn matches(self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Records passing this filter, in catalog order.
    pub fn apply<'a, T>(self, records: &'a [T]) -> Vec<&'a T>
    where
        T: Categorized<Category = C>,
    {
        records
            .iter()
            .filter(|record| self.matches(record.category()))
            .collect()
    }

    pub fn is_all(self) -> bool {
        matches!(self, Self::All)
    }
}

impl Filter<ProjectCategory> {
    /// Filter bar entries for the portfolio page.
    pub fn project_choices() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(ProjectCategory::ALL.into_iter().map(Self::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(category) => category.filter_label(),
        }
    }
}

impl Filter<ExperienceField> {
    /// Filter bar entries for the experience page.
    pub fn experience_choices() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(ExperienceField::ALL.into_iter().map(Self::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Experience",
            Self::Only(field) => field.label(),
        }
    }
}

/// Split already-filtered projects into per-category sections.
///
/// Sections follow [`ProjectCategory::ALL`]; categories with no projects
/// are left out rather than returned empty.
pub fn group_by_category<'a>(
    projects: &[&'a Project],
) -> Vec<(ProjectCategory, Vec<&'a Project>)> {
    ProjectCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let members: Vec<&Project> = projects
                .iter()
                .copied()
                .filter(|p| p.category == category)
                .collect();
            (!members.is_empty()).then_some((category, members))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::ProjectId;

    fn project(id: &str, category: ProjectCategory) -> Project {
        Project {
            id: ProjectId::from(id),
            title: format!("Project {id}"),
            description: String::new(),
            category,
            thumbnail: String::new(),
            images: None,
            video_url: None,
            client: None,
            year: "2024".to_string(),
            tags: Vec::new(),
            featured: false,
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("1", ProjectCategory::Photo),
            project("2", ProjectCategory::Video),
            project("3", ProjectCategory::Photo),
            project("4", ProjectCategory::Campaign),
            project("5", ProjectCategory::Video),
        ]
    }

    fn ids(records: &[&Project]) -> Vec<String> {
        records.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_all_returns_catalog_unchanged() {
        let catalog = sample();
        let filtered = Filter::All.apply(&catalog);
        assert_eq!(filtered.len(), catalog.len());
        assert_eq!(ids(&filtered), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_concrete_filter_preserves_relative_order() {
        let catalog = sample();
        for category in ProjectCategory::ALL {
            let filtered = Filter::Only(category).apply(&catalog);
            assert!(filtered.iter().all(|p| p.category == category));
            let expected: Vec<String> = catalog
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id.to_string())
                .collect();
            assert_eq!(ids(&filtered), expected);
        }
    }

    #[test]
    fn test_filter_with_no_matches_is_empty() {
        let catalog = sample();
        assert!(Filter::Only(ProjectCategory::Graphics)
            .apply(&catalog)
            .is_empty());
    }

    #[test]
    fn test_grouping_omits_empty_categories() {
        let catalog = sample();
        let all = Filter::All.apply(&catalog);
        let sections = group_by_category(&all);

        let categories: Vec<ProjectCategory> = sections.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            categories,
            vec![
                ProjectCategory::Photo,
                ProjectCategory::Video,
                ProjectCategory::Campaign
            ]
        );
        assert_eq!(ids(&sections[0].1), vec!["1", "3"]);
        assert_eq!(ids(&sections[1].1), vec!["2", "5"]);
    }

    #[test]
    fn test_grouping_empty_input() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_experience_filter_uses_field() {
        let experiences = vec![
            Experience {
                id: "a".to_string(),
                role: "R".to_string(),
                organization: "O".to_string(),
                start: "2020".to_string(),
                end: "2021".to_string(),
                description: String::new(),
                field: ExperienceField::Design,
                skills: Vec::new(),
            },
            Experience {
                id: "b".to_string(),
                role: "R".to_string(),
                organization: "O".to_string(),
                start: "2021".to_string(),
                end: "Present".to_string(),
                description: String::new(),
                field: ExperienceField::Media,
                skills: Vec::new(),
            },
        ];
        let filtered = Filter::Only(ExperienceField::Media).apply(&experiences);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "b");
    }

    #[test]
    fn test_choices_start_with_wildcard() {
        let project_choices = Filter::<ProjectCategory>::project_choices();
        assert_eq!(project_choices.len(), 5);
        assert_eq!(project_choices[0], Filter::All);
        assert_eq!(project_choices[0].label(), "All Projects");
        assert_eq!(project_choices[4].label(), "Campaigns");

        let experience_choices = Filter::<ExperienceField>::experience_choices();
        assert_eq!(experience_choices.len(), 4);
        assert_eq!(experience_choices[0].label(), "All Experience");
    }
}
