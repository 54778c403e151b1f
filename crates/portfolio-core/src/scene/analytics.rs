//! Analytics showcase: skill bars that grow into place, floating metric
//! spheres and a slow sway of the whole group.

use serde::Serialize;

use super::Animate;

/// Fraction of the remaining distance a bar covers each frame.
pub const BAR_EASING: f64 = 0.05;
/// Per-frame vertical drift scale of the metric spheres.
pub const SPHERE_DRIFT: f64 = 0.001;
/// Peak sway of the group around y, radians.
pub const SWAY_AMPLITUDE: f64 = 0.1;
/// Sway frequency, radians per second.
pub const SWAY_SPEED: f64 = 0.2;

/// One skill bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataBar {
    pub label: String,
    pub target: f64,
    pub height: f64,
    /// Proficiency shown on hover.
    pub value: u8,
    pub color: String,
}

impl DataBar {
    pub fn new(label: impl Into<String>, target: f64, value: u8, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target,
            height: 0.0,
            value,
            color: color.into(),
        }
    }

    /// Eases one frame toward the target height.
    pub fn ease(&mut self) {
        self.height += (self.target - self.height) * BAR_EASING;
    }
}

/// A floating labelled sphere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSphere {
    pub label: String,
    pub position: [f64; 3],
    pub size: f64,
    pub color: String,
}

impl DataSphere {
    pub fn new(label: impl Into<String>, position: [f64; 3], size: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            position,
            size,
            color: color.into(),
        }
    }

    /// Drifts one frame; the phase is offset by the sphere's x position.
    pub fn drift(&mut self, elapsed: f64) {
        self.position[1] += (elapsed + self.position[0]).sin() * SPHERE_DRIFT;
    }
}

/// Bars, spheres and the sway angle of their group.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsScene {
    pub bars: Vec<DataBar>,
    pub spheres: Vec<DataSphere>,
    pub sway: f64,
}

impl Default for AnalyticsScene {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsScene {
    /// The showcase with all bars at zero height.
    pub fn new() -> Self {
        Self {
            bars: vec![
                DataBar::new("Python", 4.0, 95, "#3b82f6"),
                DataBar::new("SQL", 3.8, 90, "#8b5cf6"),
                DataBar::new("Tableau", 3.5, 85, "#ec4899"),
                DataBar::new("Power BI", 3.6, 88, "#f59e0b"),
                DataBar::new("Excel", 4.2, 98, "#10b981"),
                DataBar::new("R", 3.0, 75, "#06b6d4"),
            ],
            spheres: vec![
                DataSphere::new("64K+ Records", [-4.0, 4.0, -2.0], 0.3, "#3b82f6"),
                DataSphere::new("12+ KPIs", [4.0, 3.5, -2.0], 0.25, "#8b5cf6"),
                DataSphere::new("30+ Columns", [-3.0, 2.5, 2.0], 0.28, "#ec4899"),
                DataSphere::new("98% Accuracy", [3.0, 3.0, 2.0], 0.26, "#f59e0b"),
            ],
            sway: 0.0,
        }
    }

    /// Mean of the bar values.
    pub fn average_value(&self) -> f64 {
        if self.bars.is_empty() {
            return 0.0;
        }
        let total: u32 = self.bars.iter().map(|b| u32::from(b.value)).sum();
        f64::from(total) / self.bars.len() as f64
    }
}

impl Animate for AnalyticsScene {
    fn advance(&mut self, elapsed: f64) {
        self.sway = (elapsed * SWAY_SPEED).sin() * SWAY_AMPLITUDE;
        for bar in &mut self.bars {
            bar.ease();
        }
        for sphere in &mut self.spheres {
            sphere.drift(elapsed);
        }
    }
}
