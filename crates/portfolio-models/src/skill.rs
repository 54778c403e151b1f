//! Skill catalogue records.

use serde::{Deserialize, Deserializer, Serialize};

use crate::display::{Icon, Tone};

/// Upper bound of a skill level; levels are display percentages.
pub const MAX_LEVEL: u8 = 100;

/// A named skill with a proficiency percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name, e.g. `Python`.
    pub name: String,

    /// Proficiency in `[0, 100]`.
    #[serde(deserialize_with = "deserialize_level")]
    pub level: u8,
}

impl Skill {
    /// Creates a skill, clamping the level into `[0, 100]`.
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            level: clamp_level(level as i64),
        }
    }

    /// Level as a fraction in `[0.0, 1.0]`, for progress bars.
    pub fn ratio(&self) -> f64 {
        f64::from(self.level) / f64::from(MAX_LEVEL)
    }
}

fn clamp_level(level: i64) -> u8 {
    level.clamp(0, i64::from(MAX_LEVEL)) as u8
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(clamp_level(raw))
}

/// A titled group of skills rendered as one card with progress bars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Group title, e.g. `Data Visualization`.
    pub title: String,
    /// Card icon.
    pub icon: Icon,
    /// Icon tone.
    pub tone: Tone,
    /// Skills in display order.
    pub items: Vec<Skill>,
}

impl SkillGroup {
    /// Creates an empty group.
    pub fn new(title: impl Into<String>, icon: Icon, tone: Tone) -> Self {
        Self {
            title: title.into(),
            icon,
            tone,
            items: Vec::new(),
        }
    }

    /// Appends a skill.
    pub fn with_skill(mut self, name: impl Into<String>, level: i32) -> Self {
        self.items.push(Skill::new(name, level));
        self
    }

    /// Mean level of the group, or 0 for an empty group.
    pub fn average_level(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        let total: u32 = self.items.iter().map(|s| u32::from(s.level)).sum();
        (total / self.items.len() as u32) as u8
    }
}

/// A compact skill card shown under the skill groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillHighlight {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_clamped() {
        assert_eq!(Skill::new("over", 140).level, 100);
        assert_eq!(Skill::new("under", -5).level, 0);
        assert_eq!(Skill::new("ok", 85).level, 85);
    }

    #[test]
    fn test_skill_level_clamped_on_deserialize() {
        let skill: Skill = serde_json::from_str(r#"{"name": "SQL", "level": 250}"#).unwrap();
        assert_eq!(skill.level, 100);

        let skill: Skill = serde_json::from_str(r#"{"name": "SQL", "level": -1}"#).unwrap();
        assert_eq!(skill.level, 0);
    }

    #[test]
    fn test_skill_ratio() {
        assert!((Skill::new("R", 85).ratio() - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_group_average() {
        let group = SkillGroup::new("Viz", Icon::PieChart, Tone::Secondary)
            .with_skill("Tableau", 95)
            .with_skill("D3.js", 70);

        assert_eq!(group.items.len(), 2);
        assert_eq!(group.average_level(), 82);
        assert_eq!(SkillGroup::new("Empty", Icon::Code, Tone::Primary).average_level(), 0);
    }
}
