use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, info};

use super::data::{AboutMe, Experience, NavLink, PersonalInfo, Project, ProjectId, SkillGroup};
use super::page::Route;
use crate::error::{Error, Result};

/// Catalog shipped inside the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// The Catalog holds every record the application displays.
/// It is loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    person: PersonalInfo,
    about: AboutMe,
    #[serde(default)]
    skills: Vec<SkillGroup>,
    #[serde(default)]
    experiences: Vec<Experience>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    nav_links: Vec<NavLink>,
}

impl Catalog {
    /// Load the catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parse and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json).map_err(Error::CatalogParse)?;
        catalog.validate()?;

        info!(
            projects = catalog.projects.len(),
            experiences = catalog.experiences.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Reject catalogs the UI cannot present consistently.
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.0.as_str()) {
                return Err(Error::DuplicateId {
                    kind: "project",
                    id: project.id.to_string(),
                });
            }
            if project.title.trim().is_empty() {
                return Err(Error::EmptyField {
                    kind: "project",
                    id: project.id.to_string(),
                    field: "title",
                });
            }
        }

        let mut seen = HashSet::new();
        for experience in &self.experiences {
            if !seen.insert(experience.id.as_str()) {
                return Err(Error::DuplicateId {
                    kind: "experience",
                    id: experience.id.clone(),
                });
            }
            if experience.role.trim().is_empty() {
                return Err(Error::EmptyField {
                    kind: "experience",
                    id: experience.id.clone(),
                    field: "role",
                });
            }
        }

        // Links must name a section page; home is the brand button
        for link in &self.nav_links {
            if matches!(link.route(), None | Some(Route::Home)) {
                return Err(Error::UnknownRoute {
                    name: link.name.clone(),
                    href: link.href.clone(),
                });
            }
        }

        debug!("Catalog validated");
        Ok(())
    }

    pub fn person(&self) -> &PersonalInfo {
        &self.person
    }

    pub fn about(&self) -> &AboutMe {
        &self.about
    }

    pub fn skills(&self) -> &[SkillGroup] {
        &self.skills
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav_links
    }

    /// Look up a project in the full, unfiltered catalog.
    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// Featured projects in catalog order, at most `limit` of them.
    pub fn featured_projects(&self, limit: usize) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.featured)
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::ProjectCategory;

    fn document(projects: &str, nav_links: &str) -> String {
        format!(
            r#"{{
                "person": {{
                    "name": "N", "title": "T", "tagline": "G", "email": "e@x",
                    "phone": "1", "linkedin": "l", "location": "L",
                    "resume_url": "/r.pdf", "avatar": "/a.jpg"
                }},
                "about": {{ "bio": "B" }},
                "projects": {projects},
                "nav_links": {nav_links}
            }}"#
        )
    }

    fn project_json(id: &str, featured: bool) -> String {
        format!(
            r#"{{ "id": "{id}", "title": "P{id}", "description": "D", "category": "photo",
                 "thumbnail": "/t.jpg", "year": "2024", "featured": {featured} }}"#
        )
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.projects().len(), 8);
        assert_eq!(catalog.experiences().len(), 5);
        assert_eq!(catalog.nav_links().len(), 4);
        assert_eq!(catalog.skills().len(), 4);
        assert_eq!(catalog.person().name, "Alex Morgan");
        assert_eq!(catalog.about().paragraphs().count(), 3);
    }

    #[test]
    fn test_embedded_featured_projects() {
        let catalog = Catalog::embedded().unwrap();
        let featured = catalog.featured_projects(4);
        let ids: Vec<String> = featured.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_featured_capped_at_limit() {
        let projects: Vec<String> = (1..=8).map(|i| project_json(&i.to_string(), true)).collect();
        let json = document(&format!("[{}]", projects.join(",")), "[]");
        let catalog = Catalog::from_json(&json).unwrap();

        let featured = catalog.featured_projects(4);
        let ids: Vec<String> = featured.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_featured_keeps_catalog_order() {
        let projects = [
            project_json("a", false),
            project_json("b", true),
            project_json("c", false),
            project_json("d", true),
        ];
        let json = document(&format!("[{}]", projects.join(",")), "[]");
        let catalog = Catalog::from_json(&json).unwrap();

        let ids: Vec<String> = catalog
            .featured_projects(4)
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, vec!["b", "d"]);
    }

    #[test]
    fn test_project_lookup_ignores_filters() {
        let catalog = Catalog::embedded().unwrap();
        let project = catalog.project(&ProjectId::from("6")).unwrap();
        assert_eq!(project.category, ProjectCategory::Video);
        assert!(catalog.project(&ProjectId::from("nope")).is_none());
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let json = document(
            &format!("[{}, {}]", project_json("1", false), project_json("1", true)),
            "[]",
        );
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, Error::DuplicateId { kind: "project", .. }));
    }

    #[test]
    fn test_unknown_nav_target_rejected() {
        let json = document("[]", r#"[{ "name": "Blog", "href": "/blog" }]"#);
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, Error::UnknownRoute { .. }));
    }

    #[test]
    fn test_nav_link_to_home_rejected() {
        let json = document("[]", r#"[{ "name": "Home", "href": "/" }]"#);
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, Error::UnknownRoute { ref href, .. } if href == "/"));
    }

    #[test]
    fn test_blank_title_rejected() {
        let json = document(
            r#"[{ "id": "1", "title": "  ", "description": "D", "category": "video",
                 "thumbnail": "/t.jpg", "year": "2024" }]"#,
            "[]",
        );
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, Error::EmptyField { field: "title", .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Catalog::from_json("{").unwrap_err();
        assert!(matches!(err, Error::CatalogParse(_)));
    }
}
