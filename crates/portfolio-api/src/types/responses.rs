//! Response DTOs for the API.

use serde::Serialize;

use portfolio_core::contact::{Notification, Receipt};
use portfolio_core::ExpandableList;
use portfolio_models::{Certification, ContactChannel, Project, SkillGroup, SkillHighlight, Stat};

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
    /// Name of the contact transport in use.
    pub transport: String,
}

/// Skills section contents.
#[derive(Debug, Clone, Serialize)]
pub struct SkillsResponse<'a> {
    pub groups: &'a [SkillGroup],
    pub highlights: &'a [SkillHighlight],
}

/// Certification list response.
#[derive(Debug, Clone, Serialize)]
pub struct CertificationListResponse<'a> {
    pub certifications: &'a [Certification],
    pub total: usize,
}

/// Stats strip response.
#[derive(Debug, Clone, Serialize)]
pub struct StatListResponse<'a> {
    pub stats: &'a [Stat],
    pub total: usize,
}

/// Contact channel list response.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelListResponse<'a> {
    pub channels: &'a [ContactChannel],
    pub total: usize,
}

/// Projects as the page currently shows them.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectListResponse<'a> {
    /// Visible projects, in catalogue order.
    pub projects: Vec<&'a Project>,
    /// Number of visible projects.
    pub visible: usize,
    /// Number of projects in the catalogue.
    pub total: usize,
    /// Number of projects hidden by the collapsed view.
    pub hidden: usize,
    pub expanded: bool,
    /// Label of the toggle control.
    pub toggle_label: &'static str,
}

impl<'a> From<&ExpandableList<&'a Project>> for ProjectListResponse<'a> {
    fn from(list: &ExpandableList<&'a Project>) -> Self {
        let projects = list.visible().to_vec();
        Self {
            visible: projects.len(),
            projects,
            total: list.items().len(),
            hidden: list.hidden_count(),
            expanded: list.is_expanded(),
            toggle_label: list.toggle_label(),
        }
    }
}

/// Successful contact submission.
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub notification: Notification,
    pub receipt: Receipt,
}
