//! Contact channel records.

use serde::{Deserialize, Serialize};

use crate::display::{Icon, Tone};

/// A way to reach the site owner, listed beside the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    /// Channel name, e.g. `Email`.
    pub label: String,
    /// Link target: `mailto:` or `https://` URI.
    pub destination: String,
    /// Short text under the label.
    pub display_text: String,
    /// Text of the link itself.
    pub link_text: String,
    pub icon: Icon,
    pub tone: Tone,
}

impl ContactChannel {
    /// Whether the destination is an email address.
    pub fn is_mail(&self) -> bool {
        self.destination.starts_with("mailto:")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_mail() {
        let channel = ContactChannel {
            label: "Email".into(),
            destination: "mailto:someone@example.com".into(),
            display_text: "someone@example.com".into(),
            link_text: "Send me a message".into(),
            icon: Icon::Mail,
            tone: Tone::Primary,
        };
        assert!(channel.is_mail());
    }
}
