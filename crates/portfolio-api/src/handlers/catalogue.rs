//! Read-only catalogue endpoints.

use axum::{
    extract::{Query, State},
    Json,
};

use portfolio_models::Profile;

use crate::state::AppState;
use crate::types::{
    CertificationListResponse, ChannelListResponse, ProjectListResponse, ProjectsQuery,
    SkillsResponse, StatListResponse,
};

/// GET /api/profile - Hero and about content.
pub async fn profile(State(state): State<AppState>) -> Json<&'static Profile> {
    Json(&state.catalogue.profile)
}

/// GET /api/skills - Skill groups and highlights.
pub async fn skills(State(state): State<AppState>) -> Json<SkillsResponse<'static>> {
    let catalogue = state.catalogue;
    Json(SkillsResponse {
        groups: &catalogue.skill_groups,
        highlights: &catalogue.skill_highlights,
    })
}

/// GET /api/certifications - Certification cards.
pub async fn certifications(
    State(state): State<AppState>,
) -> Json<CertificationListResponse<'static>> {
    let certifications = &state.catalogue.certifications;
    Json(CertificationListResponse {
        certifications,
        total: certifications.len(),
    })
}

/// GET /api/stats - Headline numbers.
pub async fn stats(State(state): State<AppState>) -> Json<StatListResponse<'static>> {
    let stats = &state.catalogue.stats;
    Json(StatListResponse {
        stats,
        total: stats.len(),
    })
}

/// GET /api/contact-channels - Contact information cards.
pub async fn contact_channels(
    State(state): State<AppState>,
) -> Json<ChannelListResponse<'static>> {
    let channels = &state.catalogue.contact_channels;
    Json(ChannelListResponse {
        channels,
        total: channels.len(),
    })
}

/// GET /api/projects - Projects in the requested expansion state.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectsQuery>,
) -> Json<ProjectListResponse<'static>> {
    let list = state.projects(query.expanded);
    Json(ProjectListResponse::from(&list))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::make_test_state;

    #[tokio::test]
    async fn test_list_projects_collapsed() {
        let Json(body) = list_projects(
            State(make_test_state()),
            Query(ProjectsQuery::default()),
        )
        .await;

        assert_eq!(body.visible, 3);
        assert_eq!(body.total, 7);
        assert_eq!(body.hidden, 4);
        assert_eq!(body.toggle_label, "View All Projects");
    }

    #[tokio::test]
    async fn test_list_projects_expanded() {
        let Json(body) = list_projects(
            State(make_test_state()),
            Query(ProjectsQuery { expanded: true }),
        )
        .await;

        assert_eq!(body.visible, 7);
        assert_eq!(body.hidden, 0);
        assert!(body.expanded);
    }

    #[tokio::test]
    async fn test_skills() {
        let Json(body) = skills(State(make_test_state())).await;
        assert!(!body.groups.is_empty());
        assert!(body.groups.iter().all(|g| g.items.iter().all(|s| s.level <= 100)));
    }
}
