//! Server-rendered page.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Form,
};
use tracing::{debug, info};

use portfolio_core::contact::{ContactFields, ContactForm};

use crate::error::Result;
use crate::state::AppState;
use crate::types::PageQuery;
use crate::view::PageViewBuilder;

/// GET / - The full page. `?projects=all` expands the projects list.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let view = PageViewBuilder::new(state.catalogue)
        .expanded(query.is_expanded())
        .build();
    Ok(Html(state.render(&view)?))
}

/// POST /contact - Form-encoded submission from the page.
///
/// Re-renders the page. A delivered message clears the form and shows the
/// success toast; a failed delivery keeps the values and shows the error.
/// Invalid input keeps the values, adds no toast and answers 400.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(fields): Form<ContactFields>,
) -> Result<(StatusCode, Html<String>)> {
    let mut form = ContactForm::with_fields(fields);

    let (status, builder) = match form.submit_with(state.transport.as_ref()).await {
        Ok(notification) => {
            info!(success = notification.is_success(), "contact form handled");
            (
                StatusCode::OK,
                PageViewBuilder::new(state.catalogue)
                    .fields(form.fields().clone())
                    .notification(notification),
            )
        }
        Err(err) => {
            debug!(error = %err, "contact form rejected");
            (
                StatusCode::BAD_REQUEST,
                PageViewBuilder::new(state.catalogue).fields(form.fields().clone()),
            )
        }
    };

    Ok((status, Html(state.render(&builder.build())?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::make_test_state;

    #[tokio::test]
    async fn test_index_collapsed() {
        let Html(html) = index(State(make_test_state()), Query(PageQuery::default()))
            .await
            .unwrap();
        assert_eq!(html.matches("class=\"project-card reveal\"").count(), 3);
    }

    #[tokio::test]
    async fn test_submit_form_clears_fields() {
        let fields = ContactFields::new("Jane", "jane@example.com", "Hello", "Test message");
        let (status, Html(html)) = submit_form(State(make_test_state()), Form(fields))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Message sent!"));
        assert!(!html.contains("value=\"Jane\""));
    }

    #[tokio::test]
    async fn test_submit_form_invalid_keeps_fields() {
        let fields = ContactFields::new("Jane", "not-an-email", "Hello", "Test message");
        let (status, Html(html)) = submit_form(State(make_test_state()), Form(fields))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("value=\"Jane\""));
        assert!(!html.contains("Message sent!"));
    }
}
