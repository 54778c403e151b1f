//! Row layout of the scrolled page.
//!
//! The page is one column of blocks. Each block gets a fixed number of rows
//! so the reveal tracker can tell which ones the viewport covers.

use portfolio_core::{Catalogue, ExpandableList, Span, StaggerTiming};
use portfolio_models::{Project, SectionId};

/// Rows between sections.
const SECTION_GAP: u32 = 1;

/// Identity of one block on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKey {
    Hero,
    Header(SectionId),
    Journey,
    Feature(usize),
    Analytics,
    SkillGroup(usize),
    Highlight(usize),
    Certification(usize),
    Stat(usize),
    Project(usize),
    ProjectToggle,
    Channel(usize),
    Form,
    Footer,
}

/// A block with its rows and reveal timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub key: ItemKey,
    pub section: SectionId,
    pub span: Span,
    pub timing: StaggerTiming,
    pub index: usize,
}

/// All blocks of the page, top to bottom.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    items: Vec<Placed>,
    height: u32,
}

struct Builder {
    items: Vec<Placed>,
    cursor: u32,
    section: SectionId,
}

impl Builder {
    fn section(&mut self, section: SectionId) {
        if !self.items.is_empty() {
            self.cursor += SECTION_GAP;
        }
        self.section = section;
    }

    fn push(&mut self, key: ItemKey, height: u32, timing: StaggerTiming, index: usize) {
        self.items.push(Placed {
            key,
            section: self.section,
            span: Span::new(self.cursor, height),
            timing,
            index,
        });
        self.cursor += height;
    }

    fn header(&mut self) {
        self.push(ItemKey::Header(self.section), 3, StaggerTiming::HEADER, 0);
    }
}

/// Rows of a card with a border and `lines` lines of text.
fn card(lines: usize) -> u32 {
    lines as u32 + 2
}

impl PageLayout {
    /// Lays out the catalogue with the projects list in its current state.
    pub fn build(catalogue: &Catalogue, projects: &ExpandableList<&Project>) -> Self {
        let mut b = Builder {
            items: Vec::new(),
            cursor: 0,
            section: SectionId::Home,
        };

        b.section(SectionId::Home);
        b.push(ItemKey::Hero, 16, StaggerTiming::HEADER, 0);

        b.section(SectionId::About);
        b.header();
        b.push(
            ItemKey::Journey,
            card(catalogue.profile.journey.len() * 3 + 2),
            StaggerTiming::HEADER,
            0,
        );
        for index in 0..catalogue.features.len() {
            b.push(ItemKey::Feature(index), card(2), StaggerTiming::CARD, index);
        }
        b.push(ItemKey::Analytics, 12, StaggerTiming::HEADER, 0);

        b.section(SectionId::Skills);
        b.header();
        for (index, group) in catalogue.skill_groups.iter().enumerate() {
            b.push(
                ItemKey::SkillGroup(index),
                card(group.items.len()),
                StaggerTiming::CARD,
                index,
            );
        }
        for index in 0..catalogue.skill_highlights.len() {
            b.push(ItemKey::Highlight(index), card(2), StaggerTiming::CARD, index);
        }

        b.section(SectionId::Certifications);
        b.header();
        for index in 0..catalogue.certifications.len() {
            b.push(
                ItemKey::Certification(index),
                card(4),
                StaggerTiming::PROJECT_CARD,
                index,
            );
        }
        for index in 0..catalogue.stats.len() {
            b.push(ItemKey::Stat(index), card(1), StaggerTiming::CARD, index);
        }

        b.section(SectionId::Projects);
        b.header();
        for index in 0..projects.visible().len() {
            b.push(
                ItemKey::Project(index),
                card(5),
                StaggerTiming::PROJECT_CARD,
                index,
            );
        }
        b.push(ItemKey::ProjectToggle, 1, StaggerTiming::HEADER, 0);

        b.section(SectionId::Contact);
        b.header();
        for index in 0..catalogue.contact_channels.len() {
            b.push(ItemKey::Channel(index), card(2), StaggerTiming::CARD, index);
        }
        b.push(ItemKey::Form, card(9), StaggerTiming::HEADER, 0);
        b.push(ItemKey::Footer, card(4), StaggerTiming::HEADER, 0);

        Self {
            height: b.cursor,
            items: b.items,
        }
    }

    pub fn items(&self) -> &[Placed] {
        &self.items
    }

    /// Total rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// First row of a section.
    pub fn section_top(&self, section: SectionId) -> u32 {
        self.items
            .iter()
            .find(|item| item.section == section)
            .map(|item| item.span.top)
            .unwrap_or(0)
    }

    /// Section containing `row`.
    pub fn section_at(&self, row: u32) -> SectionId {
        self.items
            .iter()
            .take_while(|item| item.span.top <= row)
            .last()
            .map(|item| item.section)
            .unwrap_or(SectionId::Home)
    }

    pub fn get(&self, key: ItemKey) -> Option<&Placed> {
        self.items.iter().find(|item| item.key == key)
    }
}
