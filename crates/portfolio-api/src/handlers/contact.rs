//! JSON contact submission.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info, warn};

use portfolio_core::contact::{ContactFields, ContactForm};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::ContactResponse;

/// POST /api/contact - Validates and delivers a contact message.
///
/// Malformed bodies and validation failures are 400; delivery failures map
/// to 502 or 504.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: std::result::Result<Json<ContactFields>, JsonRejection>,
) -> Result<Json<ContactResponse>> {
    let Json(fields) = body?;
    let mut form = ContactForm::with_fields(fields);
    let payload = form.begin_submit()?;

    match state.transport.submit(&payload).await {
        Ok(receipt) => {
            let notification = form
                .complete(Ok(receipt.clone()))
                .cloned()
                .ok_or_else(|| ApiError::Internal("submission was not in flight".into()))?;
            info!(transport = state.transport.name(), receipt = %receipt.id, "contact delivered");
            Ok(Json(ContactResponse {
                notification,
                receipt,
            }))
        }
        Err(err) => {
            warn!(transport = state.transport.name(), error = %err, "contact delivery failed");
            form.complete(Err(err.clone()));
            Err(ApiError::from(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::make_test_state;
    use portfolio_core::NotificationKind;

    #[tokio::test]
    async fn test_submit_contact_success() {
        let fields = ContactFields::new("Jane", "jane@example.com", "Hello", "Test message");
        let Json(body) = submit_contact(State(make_test_state()), Ok(Json(fields)))
            .await
            .unwrap();

        assert_eq!(body.notification.kind, NotificationKind::Success);
        assert_eq!(body.notification.title, "Message sent!");
    }

    #[tokio::test]
    async fn test_submit_contact_missing_field() {
        let fields = ContactFields::new("Jane", "jane@example.com", "", "Test message");
        let err = submit_contact(State(make_test_state()), Ok(Json(fields)))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("Subject is required"));
    }
}
