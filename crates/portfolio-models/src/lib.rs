//! Catalogue record types for the portfolio site.
//!
//! Every section of the page is fed from an ordered sequence of literal
//! records declared once at startup. This crate holds those record types and
//! the display metadata (icons, tones, section anchors) they carry; it has no
//! behavior beyond construction helpers.

pub mod builders;
pub mod contact;
pub mod display;
pub mod profile;
pub mod project;
pub mod skill;

pub use builders::ProjectBuilder;
pub use contact::ContactChannel;
pub use display::{Icon, SectionId, Tone, QUICK_LINKS};
pub use profile::{Certification, Feature, Profile, ResumeLink, SocialLink, Stat};
pub use project::{Project, ProjectLinks};
pub use skill::{Skill, SkillGroup, SkillHighlight, MAX_LEVEL};
