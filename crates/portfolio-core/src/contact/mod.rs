//! Contact form, its delivery transports and notifications.

pub mod form;
pub mod notification;
pub mod transport;

pub use form::{is_valid_email, ContactFields, ContactForm, FormError, FormField, FormState};
pub use notification::{Notification, NotificationKind, NotificationLog, NOTIFICATION_CAPACITY};
pub use transport::{
    transport_from_config, ContactTransport, Receipt, SimulatedTransport, TransportError,
    WebhookPayload, WebhookTransport,
};
