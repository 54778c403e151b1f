//! End-to-end contact form submissions against simulated and mock transports.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use portfolio_core::contact::{
    ContactFields, ContactForm, ContactTransport, FormError, FormField, NotificationKind,
    Receipt, SimulatedTransport, TransportError,
};

/// Counts submissions and answers with a fixed outcome.
struct CountingTransport {
    calls: Arc<AtomicUsize>,
    outcome: Result<(), TransportError>,
}

#[async_trait]
impl ContactTransport for CountingTransport {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn submit(&self, _fields: &ContactFields) -> Result<Receipt, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map(|_| Receipt::new())
    }
}

fn jane() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field(FormField::Name, "Jane");
    form.set_field(FormField::Email, "jane@example.com");
    form.set_field(FormField::Subject, "Hello");
    form.set_field(FormField::Message, "Test message");
    form
}

#[tokio::test(start_paused = true)]
async fn test_submit_resets_after_delay() {
    let mut form = jane();
    let transport = Arc::new(SimulatedTransport::new(Duration::from_secs(1)));

    let fields = form.begin_submit().unwrap();
    assert!(form.is_submitting());

    let pending = {
        let transport = Arc::clone(&transport);
        tokio::spawn(async move { transport.submit(&fields).await })
    };

    tokio::time::sleep(Duration::from_millis(999)).await;
    assert!(!pending.is_finished());
    assert!(form.is_submitting());
    assert_eq!(form.field(FormField::Name), "Jane");

    let outcome = pending.await.unwrap();
    form.complete(outcome);

    assert!(!form.is_submitting());
    for field in FormField::ALL {
        assert_eq!(form.field(field), "");
    }
    assert_eq!(form.notifications().len(), 1);
    let note = form.notifications().latest().unwrap();
    assert_eq!(note.kind, NotificationKind::Success);
    assert_eq!(note.title, "Message sent!");
}

#[tokio::test(start_paused = true)]
async fn test_submit_with_simulated_transport() {
    let mut form = jane();
    let transport = SimulatedTransport::new(Duration::from_secs(1));
    let start = tokio::time::Instant::now();

    let note = form.submit_with(&transport).await.unwrap();

    assert!(start.elapsed() >= Duration::from_secs(1));
    assert!(note.is_success());
    assert!(form.fields().is_empty());
}

#[tokio::test]
async fn test_empty_field_never_reaches_transport() {
    let calls = Arc::new(AtomicUsize::new(0));
    let transport = CountingTransport {
        calls: Arc::clone(&calls),
        outcome: Ok(()),
    };

    for field in FormField::ALL {
        let mut form = jane();
        form.set_field(field, "   ");

        let result = form.submit_with(&transport).await;

        assert_eq!(result.unwrap_err(), FormError::MissingField(field));
        assert!(!form.is_submitting());
        assert!(form.notifications().is_empty());
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_double_submit_schedules_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let transport = CountingTransport {
        calls: Arc::clone(&calls),
        outcome: Ok(()),
    };
    let mut form = jane();

    let fields = form.begin_submit().unwrap();
    assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));
    assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));

    let outcome = transport.submit(&fields).await;
    form.complete(outcome);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(form.notifications().success_count(), 1);
    assert_eq!(form.notifications().len(), 1);
}

#[tokio::test]
async fn test_transport_failure_keeps_message() {
    let transport = CountingTransport {
        calls: Arc::new(AtomicUsize::new(0)),
        outcome: Err(TransportError::Timeout),
    };
    let mut form = jane();

    let note = form.submit_with(&transport).await.unwrap();

    assert_eq!(note.kind, NotificationKind::Error);
    assert!(!form.is_submitting());
    assert_eq!(form.field(FormField::Message), "Test message");

    // retry re-sends the kept fields
    let again = form.submit_with(&transport).await.unwrap();
    assert_eq!(again.kind, NotificationKind::Error);
    assert_eq!(form.notifications().len(), 2);
}
