//! Builder patterns for catalogue records.

use crate::display::Tone;
use crate::project::{Project, ProjectLinks};

/// Builder for creating Project instances with a fluent API.
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    title: String,
    description: String,
    repo: String,
    demo: Option<String>,
    tags: Vec<String>,
    category: String,
    tone: Tone,
    image: String,
}

impl ProjectBuilder {
    /// Creates a new ProjectBuilder with required fields.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            repo: repo.into(),
            demo: None,
            tags: Vec::new(),
            category: String::new(),
            tone: Tone::default(),
            image: String::new(),
        }
    }

    /// Sets the live demo URL.
    pub fn demo(mut self, url: impl Into<String>) -> Self {
        self.demo = Some(url.into());
        self
    }

    /// Sets the category badge.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the border tone.
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Sets the cover image.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Sets all tags at once.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a single tag.
    pub fn add_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Builds the Project.
    pub fn build(self) -> Project {
        Project {
            title: self.title,
            description: self.description,
            tags: self.tags,
            category: self.category,
            tone: self.tone,
            image: self.image,
            links: ProjectLinks {
                repo: self.repo,
                demo: self.demo,
            },
        }
    }
}

impl Project {
    /// Creates a builder for a new project.
    pub fn builder(
        title: impl Into<String>,
        description: impl Into<String>,
        repo: impl Into<String>,
    ) -> ProjectBuilder {
        ProjectBuilder::new(title, description, repo)
    }
}
