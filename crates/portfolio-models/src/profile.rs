//! Hero, about, certification and stats records.

use serde::{Deserialize, Serialize};

use crate::display::{Icon, Tone};

/// A downloadable resume served from the asset root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeLink {
    pub label: String,
    /// Absolute path under the asset root, e.g. `/cv.pdf`.
    pub href: String,
}

impl ResumeLink {
    /// File name of the resume relative to the asset root.
    pub fn file_name(&self) -> &str {
        self.href.trim_start_matches('/')
    }
}

/// A social profile icon in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: String,
}

/// Who the site is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name shown in the hero heading.
    pub name: String,
    /// Role line under the name.
    pub headline: String,
    /// Hero paragraph.
    pub summary: String,
    /// Avatar image path.
    pub avatar: String,
    /// "My Journey" paragraphs of the about section.
    pub journey: Vec<String>,
    /// Resume download buttons.
    pub resumes: Vec<ResumeLink>,
    /// Footer blurb.
    pub tagline: String,
    /// Footer social icons.
    pub socials: Vec<SocialLink>,
}

/// An about-section card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

/// A professional certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub description: String,
    /// Skill badges, in display order.
    pub skills: Vec<String>,
    /// Badge gradient, as `from` and `to` CSS colors.
    pub gradient: (String, String),
    /// Issuer logo glyph.
    pub logo: String,
}

/// A headline number in the stats strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub icon: Icon,
    /// Displayed value, e.g. `15+`. Not necessarily numeric.
    pub value: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_file_name() {
        let resume = ResumeLink {
            label: "Resume".into(),
            href: "/Some_CV.pdf".into(),
        };
        assert_eq!(resume.file_name(), "Some_CV.pdf");
    }
}
