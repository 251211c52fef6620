//! Catalog records.
//!
//! These structs mirror `data/catalog.json` and are immutable once the
//! catalog has been loaded.

use std::fmt;

use serde::Deserialize;

use super::page::Route;

/// Identity of a project within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Kind of work a project represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Photo,
    Video,
    Graphics,
    Campaign,
}

impl ProjectCategory {
    /// Every category, in the order the portfolio groups them.
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Photo,
        ProjectCategory::Video,
        ProjectCategory::Graphics,
        ProjectCategory::Campaign,
    ];

    /// Short badge label ("Photography", "Campaign", ...)
    pub fn label(self) -> &'static str {
        match self {
            Self::Photo => "Photography",
            Self::Video => "Video",
            Self::Graphics => "Graphics",
            Self::Campaign => "Campaign",
        }
    }

    /// Label on the filter bar
    pub fn filter_label(self) -> &'static str {
        match self {
            Self::Photo => "Photography",
            Self::Video => "Video",
            Self::Graphics => "Graphics",
            Self::Campaign => "Campaigns",
        }
    }

    /// Heading and subtitle of the category's section in the grouped view.
    pub fn section(self) -> (&'static str, &'static str) {
        match self {
            Self::Photo => ("Photography", "Visual storytelling through the lens"),
            Self::Video => ("Video Production", "Moving images that move people"),
            Self::Graphics => ("Graphic Design", "Visual identity and brand systems"),
            Self::Campaign => ("Campaigns", "Integrated marketing experiences"),
        }
    }

    /// Glyph drawn next to the category badge.
    pub fn icon(self) -> char {
        match self {
            Self::Photo => '◉',
            Self::Video => '▶',
            Self::Graphics => '◆',
            Self::Campaign => '✦',
        }
    }
}

/// Discipline an experience entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceField {
    Marketing,
    Design,
    Media,
}

impl ExperienceField {
    pub const ALL: [ExperienceField; 3] = [
        ExperienceField::Marketing,
        ExperienceField::Design,
        ExperienceField::Media,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Marketing => "Marketing",
            Self::Design => "Design",
            Self::Media => "Media",
        }
    }
}

/// A piece of work shown on the portfolio page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    /// Cover image reference (opaque, resolved by the asset root)
    pub thumbnail: String,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    pub year: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Images shown in the detail overlay.
    ///
    /// Falls back to the thumbnail when the project has no image list, so the
    /// gallery is never empty.
    pub fn gallery(&self) -> Vec<&str> {
        match &self.images {
            Some(images) if !images.is_empty() => images.iter().map(String::as_str).collect(),
            _ => vec![self.thumbnail.as_str()],
        }
    }
}

/// One position in the career timeline
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub organization: String,
    /// Free-form period start ("2020")
    pub start: String,
    /// Free-form period end ("Present")
    pub end: String,
    pub description: String,
    pub field: ExperienceField,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Experience {
    pub fn period(&self) -> String {
        format!("{} — {}", self.start, self.end)
    }
}

/// Who the portfolio belongs to and how to reach them.
///
/// Link fields are passed through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub location: String,
    pub resume_url: String,
    pub avatar: String,
}

impl PersonalInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutMe {
    /// Paragraphs separated by a blank line
    pub bio: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
}

impl AboutMe {
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.bio
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

impl NavLink {
    pub fn route(&self) -> Option<Route> {
        Route::from_href(&self.href)
    }
}
