//! Contact form editing and submission.

use std::sync::mpsc;
use std::sync::Arc;

use tracing::{debug, warn};

use portfolio_core::contact::FormField;
use portfolio_models::SectionId;

use super::app::{App, Focus};

impl App {
    /// Moves focus into the form, scrolling to the contact section.
    pub fn focus_form(&mut self) {
        self.focus = Focus::Form(FormField::Name);
        self.cursor_pos = self.focused_len();
        self.jump_to(SectionId::Contact);
    }

    /// Returns focus to page scrolling.
    pub fn leave_form(&mut self) {
        self.focus = Focus::Page;
        self.cursor_pos = 0;
    }

    /// Moves to the next input (Tab).
    pub fn next_field(&mut self) {
        if let Focus::Form(field) = self.focus {
            self.focus = Focus::Form(field.next());
            self.cursor_pos = self.focused_len();
        }
    }

    /// Moves to the previous input (Shift-Tab).
    pub fn prev_field(&mut self) {
        if let Focus::Form(field) = self.focus {
            self.focus = Focus::Form(field.prev());
            self.cursor_pos = self.focused_len();
        }
    }

    /// Handle character input. Ignored while a message is being sent.
    pub fn enter_char(&mut self, c: char) {
        let Focus::Form(field) = self.focus else {
            return;
        };
        if self.form.is_submitting() {
            return;
        }
        let value = self.form.field_mut(field);
        let at = byte_index(value, self.cursor_pos);
        value.insert(at, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor.
    pub fn delete_char(&mut self) {
        let Focus::Form(field) = self.focus else {
            return;
        };
        if self.form.is_submitting() || self.cursor_pos == 0 {
            return;
        }
        self.cursor_pos -= 1;
        let value = self.form.field_mut(field);
        let at = byte_index(value, self.cursor_pos);
        value.remove(at);
    }

    /// Move cursor left.
    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn move_cursor_right(&mut self) {
        self.cursor_pos = (self.cursor_pos + 1).min(self.focused_len());
    }

    /// Submits the form.
    ///
    /// Validation failures and submits while sending leave the form as it is.
    /// Otherwise delivery runs on the runtime and its result is applied on a
    /// later tick.
    pub fn submit_form(&mut self) {
        let fields = match self.form.begin_submit() {
            Ok(fields) => fields,
            Err(err) => {
                debug!(error = %err, "submit refused");
                self.status = Some(err.to_string());
                return;
            }
        };

        let (tx, rx) = mpsc::channel();
        let transport = Arc::clone(&self.transport);
        self.runtime.spawn(async move {
            let outcome = transport.submit(&fields).await;
            if tx.send(outcome).is_err() {
                warn!("delivery finished after the app closed");
            }
        });
        self.delivery_rx = Some(rx);
        self.status = Some(self.form.submit_label().to_string());
    }
}

fn byte_index(value: &str, chars: usize) -> usize {
    value
        .char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use portfolio_core::{Showcase, SimulatedTransport};
    use tokio::runtime::Handle;

    use super::*;

    fn make_app(delay: Duration) -> App {
        App::new(
            Arc::new(SimulatedTransport::new(delay)),
            Handle::current(),
            Showcase::with_particles(4, 1),
        )
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.enter_char(c);
        }
    }

    fn fill(app: &mut App) {
        app.focus_form();
        type_str(app, "Jane");
        app.next_field();
        type_str(app, "jane@example.com");
        app.next_field();
        type_str(app, "Hello");
        app.next_field();
        type_str(app, "Test message");
    }

    #[tokio::test]
    async fn test_editing_with_cursor() {
        let mut app = make_app(Duration::ZERO);
        app.focus_form();
        type_str(&mut app, "Jne");
        app.move_cursor_left();
        app.move_cursor_left();
        app.enter_char('a');
        assert_eq!(app.form.field(FormField::Name), "Jane");

        app.move_cursor_right();
        app.move_cursor_right();
        app.move_cursor_right();
        app.delete_char();
        assert_eq!(app.form.field(FormField::Name), "Jan");
    }

    #[tokio::test]
    async fn test_typing_outside_form_is_ignored() {
        let mut app = make_app(Duration::ZERO);
        app.enter_char('x');
        assert!(app.form.fields().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_clears_after_delay() {
        let mut app = make_app(Duration::from_secs(1));
        fill(&mut app);

        app.submit_form();
        assert!(app.form.is_submitting());
        assert_eq!(app.status.as_deref(), Some("Sending..."));

        // a second submit while sending changes nothing
        app.submit_form();
        assert!(app.form.is_submitting());

        tokio::time::sleep(Duration::from_millis(1100)).await;
        app.on_tick(Instant::now());

        assert!(!app.form.is_submitting());
        assert!(app.form.fields().is_empty());
        assert_eq!(app.form.notifications().len(), 1);
        assert!(app.latest_notification().unwrap().is_success());
    }

    #[tokio::test]
    async fn test_submit_with_missing_field_changes_nothing() {
        let mut app = make_app(Duration::ZERO);
        app.focus_form();
        type_str(&mut app, "Jane");

        app.submit_form();

        assert!(!app.form.is_submitting());
        assert_eq!(app.form.field(FormField::Name), "Jane");
        assert!(app.form.notifications().is_empty());
        assert_eq!(app.status.as_deref(), Some("Email is required"));
    }
}
