//! Display metadata shared by all catalogue records.

use serde::{Deserialize, Serialize};

/// Anchor of a page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Certifications,
    Projects,
    Contact,
}

/// Sections linked from the footer, in display order.
pub const QUICK_LINKS: [SectionId; 5] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Contact,
];

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Certifications,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// The element id used for in-page navigation.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Certifications => "certifications",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Capitalized label for navigation menus.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Certifications => "Certifications",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Parses an anchor back into a section.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// Named color token from the site theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Primary,
    Secondary,
    Accent,
    #[serde(rename = "chart-1")]
    Chart1,
    #[serde(rename = "chart-4")]
    Chart4,
}

impl Tone {
    /// Theme token name, e.g. `chart-4`.
    pub fn token(&self) -> &'static str {
        match self {
            Tone::Primary => "primary",
            Tone::Secondary => "secondary",
            Tone::Accent => "accent",
            Tone::Chart1 => "chart-1",
            Tone::Chart4 => "chart-4",
        }
    }

    /// Approximate RGB value of the token, for renderers without a stylesheet.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Tone::Primary => (0x63, 0x66, 0xf1),
            Tone::Secondary => (0x8b, 0x5c, 0xf6),
            Tone::Accent => (0xec, 0x48, 0x99),
            Tone::Chart1 => (0x3b, 0x82, 0xf6),
            Tone::Chart4 => (0xf5, 0x9e, 0x0b),
        }
    }
}

/// Icon shown next to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Award,
    Brain,
    CheckCircle,
    Cloud,
    Code,
    Cpu,
    Database,
    Github,
    Linkedin,
    Mail,
    PieChart,
    TrendingUp,
    Twitter,
    Users,
}

impl Icon {
    /// Icon name as used by the web icon set.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Award => "award",
            Icon::Brain => "brain",
            Icon::CheckCircle => "check-circle",
            Icon::Cloud => "cloud",
            Icon::Code => "code",
            Icon::Cpu => "cpu",
            Icon::Database => "database",
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Mail => "mail",
            Icon::PieChart => "pie-chart",
            Icon::TrendingUp => "trending-up",
            Icon::Twitter => "twitter",
            Icon::Users => "users",
        }
    }

    /// Short glyph for terminal rendering.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Award => "★",
            Icon::Brain => "◉",
            Icon::CheckCircle => "✔",
            Icon::Cloud => "☁",
            Icon::Code => "λ",
            Icon::Cpu => "▣",
            Icon::Database => "≡",
            Icon::Github => "⌥",
            Icon::Linkedin => "in",
            Icon::Mail => "✉",
            Icon::PieChart => "◔",
            Icon::TrendingUp => "↗",
            Icon::Twitter => "✦",
            Icon::Users => "☺",
        }
    }
}
