//! Page view model.
//!
//! Flattens the catalogue, the projects expansion state and the contact form
//! into plain data for the page template, with reveal delays already worked
//! out per item.

use serde::Serialize;

use portfolio_core::contact::{ContactFields, Notification};
use portfolio_core::{Catalogue, ExpandableList, StaggerTiming};
use portfolio_models::{
    Certification, ContactChannel, Feature, Profile, Project, SectionId, SkillGroup,
    SkillHighlight, Stat,
};

/// Reveal timing of one element, formatted for inline CSS.
#[derive(Debug, Clone, Serialize)]
pub struct Reveal {
    pub delay: String,
    pub duration: String,
}

impl Reveal {
    pub fn new(timing: StaggerTiming, index: usize) -> Self {
        Self {
            delay: format!("{:.2}s", timing.delay_secs(index)),
            duration: format!("{:.2}s", timing.duration.as_secs_f64()),
        }
    }
}

/// A list item with its reveal timing.
#[derive(Debug, Clone, Serialize)]
pub struct Staggered<T> {
    #[serde(flatten)]
    pub item: T,
    pub reveal: Reveal,
}

fn stagger<T, I>(items: I, timing: StaggerTiming) -> Vec<Staggered<T>>
where
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Staggered {
            item,
            reveal: Reveal::new(timing, index),
        })
        .collect()
}

/// A badge inside a card.
#[derive(Debug, Clone, Serialize)]
pub struct Badge<'a> {
    pub name: &'a str,
    pub reveal: Reveal,
}

fn badges<'a, I>(names: I) -> Vec<Badge<'a>>
where
    I: IntoIterator<Item = &'a String>,
{
    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| Badge {
            name,
            reveal: Reveal::new(StaggerTiming::TAG, index),
        })
        .collect()
}

/// A navigation entry.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

impl From<SectionId> for NavLink {
    fn from(section: SectionId) -> Self {
        Self {
            anchor: section.anchor(),
            label: section.label(),
        }
    }
}

/// A certification with staggered skill badges.
#[derive(Debug, Clone, Serialize)]
pub struct CertificationView<'a> {
    #[serde(flatten)]
    pub cert: &'a Certification,
    pub badges: Vec<Badge<'a>>,
}

/// A project card with staggered tags.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView<'a> {
    #[serde(flatten)]
    pub project: &'a Project,
    pub tag_badges: Vec<Badge<'a>>,
}

/// The "show more" control under the projects grid.
#[derive(Debug, Clone, Serialize)]
pub struct ToggleView {
    pub label: &'static str,
    pub href: &'static str,
    pub expanded: bool,
    pub hidden: usize,
}

/// Current contact form contents.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub fields: ContactFields,
    pub submit_label: &'static str,
}

/// Everything the page template reads.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<'a> {
    pub profile: &'a Profile,
    pub nav: Vec<NavLink>,
    pub header: Reveal,
    pub features: Vec<Staggered<&'a Feature>>,
    pub skill_groups: Vec<Staggered<&'a SkillGroup>>,
    pub skill_highlights: Vec<Staggered<&'a SkillHighlight>>,
    pub certifications: Vec<Staggered<CertificationView<'a>>>,
    pub stats: Vec<Staggered<&'a Stat>>,
    pub projects: Vec<Staggered<ProjectView<'a>>>,
    pub projects_toggle: ToggleView,
    pub contact_channels: Vec<Staggered<&'a ContactChannel>>,
    pub form: FormView,
    pub notification: Option<Notification>,
    pub quick_links: Vec<Staggered<NavLink>>,
    pub copyright: &'a str,
}

/// Builder for [`PageView`].
pub struct PageViewBuilder<'a> {
    catalogue: &'a Catalogue,
    expanded: bool,
    fields: ContactFields,
    notification: Option<Notification>,
}

impl<'a> PageViewBuilder<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self {
            catalogue,
            expanded: false,
            fields: ContactFields::default(),
            notification: None,
        }
    }

    /// Shows every project instead of the collapsed prefix.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Prefills the contact form.
    pub fn fields(mut self, fields: ContactFields) -> Self {
        self.fields = fields;
        self
    }

    /// Shows a toast.
    pub fn notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    pub fn build(self) -> PageView<'a> {
        let catalogue = self.catalogue;
        let list: ExpandableList<&Project> = ExpandableList::new(
            catalogue.projects.iter().collect(),
            portfolio_core::PROJECTS_COLLAPSED,
        )
        .with_expanded(self.expanded);

        let projects = stagger(
            list.visible().iter().copied().map(|project| ProjectView {
                project,
                tag_badges: badges(&project.tags),
            }),
            StaggerTiming::PROJECT_CARD,
        );

        let certifications = stagger(
            catalogue.certifications.iter().map(|cert| CertificationView {
                cert,
                badges: badges(&cert.skills),
            }),
            StaggerTiming::PROJECT_CARD,
        );

        PageView {
            profile: &catalogue.profile,
            nav: SectionId::ALL.into_iter().map(NavLink::from).collect(),
            header: Reveal::new(StaggerTiming::HEADER, 0),
            features: stagger(&catalogue.features, StaggerTiming::CARD),
            skill_groups: stagger(&catalogue.skill_groups, StaggerTiming::CARD),
            skill_highlights: stagger(&catalogue.skill_highlights, StaggerTiming::CARD),
            certifications,
            stats: stagger(&catalogue.stats, StaggerTiming::CARD),
            projects,
            projects_toggle: ToggleView {
                label: list.toggle_label(),
                href: if list.is_expanded() {
                    "/#projects"
                } else {
                    "/?projects=all#projects"
                },
                expanded: list.is_expanded(),
                hidden: list.hidden_count(),
            },
            contact_channels: stagger(&catalogue.contact_channels, StaggerTiming::CARD),
            form: FormView {
                fields: self.fields,
                submit_label: "Send Message",
            },
            notification: self.notification,
            quick_links: stagger(
                catalogue.quick_links.iter().copied().map(NavLink::from),
                StaggerTiming::TAG,
            ),
            copyright: &catalogue.copyright,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_view() {
        let view = PageViewBuilder::new(Catalogue::canonical()).build();

        assert_eq!(view.projects.len(), 3);
        assert_eq!(view.projects_toggle.label, "View All Projects");
        assert_eq!(view.projects_toggle.hidden, 4);
        assert_eq!(view.projects[2].reveal.delay, "0.20s");
        assert_eq!(view.projects[0].reveal.duration, "0.50s");
    }

    #[test]
    fn test_expanded_view() {
        let view = PageViewBuilder::new(Catalogue::canonical())
            .expanded(true)
            .build();

        assert_eq!(view.projects.len(), 7);
        assert_eq!(view.projects_toggle.label, "View Less Projects");
        assert_eq!(view.projects_toggle.href, "/#projects");
    }

    #[test]
    fn test_tag_stagger() {
        let view = PageViewBuilder::new(Catalogue::canonical()).build();
        let badges = &view.projects[0].item.tag_badges;

        assert_eq!(badges[0].name, "Python");
        assert_eq!(badges[3].reveal.delay, "0.15s");
    }

    #[test]
    fn test_view_serializes_flat() {
        let view = PageViewBuilder::new(Catalogue::canonical()).build();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["projects"][0]["category"], "Python | Power BI");
        assert_eq!(json["projects"][0]["reveal"]["delay"], "0.00s");
        assert_eq!(json["nav"][3]["anchor"], "certifications");
        assert!(json["notification"].is_null());
    }
}
