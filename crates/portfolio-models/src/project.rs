//! Project catalogue records.
//!
//! A project card carries the title, description, tag badges and category
//! badge shown on the projects grid, plus the outbound links behind its
//! buttons.

use serde::{Deserialize, Serialize};

use crate::display::Tone;

/// Outbound links of a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    /// Source repository URL ("View Project").
    pub repo: String,

    /// Live demo URL, if the project is deployed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

/// A project shown in the projects grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Card title.
    pub title: String,

    /// Card body text.
    pub description: String,

    /// Technology tags, in display order. May be empty.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Category badge text, e.g. `Python | Power BI`.
    pub category: String,

    /// Border color token of the card.
    pub tone: Tone,

    /// Cover image URL or asset path.
    pub image: String,

    /// Outbound links.
    pub links: ProjectLinks,
}

impl Project {
    /// Creates a project with the required fields and no tags or demo link.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
            category: String::new(),
            tone: Tone::default(),
            image: String::new(),
            links: ProjectLinks {
                repo: repo.into(),
                demo: None,
            },
        }
    }

    /// Whether the project has a live demo.
    pub fn has_demo(&self) -> bool {
        self.links.demo.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = Project::new("Title", "Body", "https://github.com/x/y");

        assert_eq!(project.title, "Title");
        assert!(project.tags.is_empty());
        assert!(!project.has_demo());
        assert_eq!(project.tone, Tone::Primary);
    }

    #[test]
    fn test_project_demo_omitted_from_json() {
        let project = Project::new("Title", "Body", "https://github.com/x/y");
        let json = serde_json::to_value(&project).unwrap();

        assert!(json["links"].get("demo").is_none());
        assert_eq!(json["links"]["repo"], "https://github.com/x/y");
    }

    #[test]
    fn test_project_tags_default_when_missing() {
        let json = r#"{
            "title": "T",
            "description": "D",
            "category": "Python",
            "tone": "accent",
            "image": "",
            "links": {"repo": "https://github.com/x/y"}
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert!(project.tags.is_empty());
        assert_eq!(project.tone, Tone::Accent);
    }
}
