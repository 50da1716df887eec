use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::{AVAILABILITY, BEST_TIMES, CONTACT_CHANNELS, FAQS, SOCIAL_LINKS};
use crate::ui::contact::{ContactForm, ContactIntent, ContactReducer, FormField, FormStatus};
use crate::ui::document::{Document, DocumentBuilder};
use crate::ui::mvi;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND, STATUS_ERROR, STATUS_OK};

use super::widgets::{body, is_copy_key, muted, title};
use super::{PageAction, PortfolioSettings};

const LABEL_WIDTH: usize = 12;

#[derive(Debug)]
pub struct ContactView {
    name: String,
    form: ContactForm,
    editing: bool,
    selected_link: usize,
}

impl ContactView {
    pub fn mount(settings: &PortfolioSettings) -> Self {
        Self {
            name: settings.name.clone(),
            form: ContactForm::default(),
            editing: false,
            selected_link: 0,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn selected_link(&self) -> usize {
        self.selected_link
    }

    pub fn on_key(&mut self, key: KeyEvent) -> PageAction {
        if self.editing {
            return self.on_form_key(key);
        }
        match key.code {
            KeyCode::Char('i') | KeyCode::Enter => {
                self.editing = true;
                PageAction::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected_link = (self.selected_link + 1) % SOCIAL_LINKS.len();
                PageAction::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_link = (self.selected_link + SOCIAL_LINKS.len() - 1) % SOCIAL_LINKS.len();
                PageAction::None
            }
            _ if is_copy_key(&key) => match SOCIAL_LINKS.get(self.selected_link) {
                Some(link) => PageAction::Copy {
                    what: format!("{} link", link.label),
                    text: link.url.to_string(),
                },
                None => PageAction::None,
            },
            _ => PageAction::None,
        }
    }

    fn on_form_key(&mut self, key: KeyEvent) -> PageAction {
        let intent = match key.code {
            KeyCode::Esc => {
                self.editing = false;
                return PageAction::None;
            }
            KeyCode::Tab | KeyCode::Down => ContactIntent::FocusNext,
            KeyCode::BackTab | KeyCode::Up => ContactIntent::FocusPrev,
            KeyCode::Backspace => ContactIntent::Backspace,
            KeyCode::Enter => match self.form.focus {
                FormField::Message => ContactIntent::Newline,
                FormField::Send => ContactIntent::Submit,
                _ => ContactIntent::FocusNext,
            },
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ContactIntent::Submit
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                ContactIntent::Insert(ch)
            }
            _ => return PageAction::None,
        };

        let submitting = intent == ContactIntent::Submit && !self.form.is_sending();
        mvi::dispatch::<ContactReducer>(&mut self.form, intent);
        if submitting && self.form.is_sending() {
            return PageAction::Submit(self.form.to_message());
        }
        PageAction::None
    }

    /// Outcome reported by the submission worker, or a local send failure.
    pub fn on_submit_result(&mut self, result: Result<(), String>) {
        let intent = match result {
            Ok(()) => ContactIntent::Submitted,
            Err(reason) => ContactIntent::SubmitFailed { reason },
        };
        mvi::dispatch::<ContactReducer>(&mut self.form, intent);
        if self.form.status == FormStatus::Sent {
            self.editing = false;
        }
    }

    pub fn document(&self, width: u16) -> Document {
        let mut doc = DocumentBuilder::new(width);
        doc.blank();
        doc.heading("Get In Touch", title());
        doc.text(
            "I'm always interested in new opportunities, collaborations, and interesting projects. Whether you have a question or just want to say hello, feel free to reach out!",
            muted(),
        );
        doc.blank();

        self.form_section(&mut doc);
        self.info_section(&mut doc);
        doc.blank();
        doc.text(&format!("Looking forward to hearing from you. {}", self.name), muted());
        doc.finish()
    }

    fn form_section(&self, doc: &mut DocumentBuilder) {
        doc.push(Line::styled("Send Me a Message", title().add_modifier(Modifier::BOLD)));
        doc.blank();
        for field in FormField::ALL {
            let focused = self.editing && self.form.focus == field;
            if field == FormField::Send {
                let style = if focused {
                    Style::default().fg(BRAND).bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                doc.blank();
                let label = if self.form.is_sending() { "Sending..." } else { field.label() };
                doc.push(Line::from(Span::styled(format!("[ {label} ]"), style)));
                continue;
            }
            self.field_rows(doc, field, focused);
        }

        match &self.form.status {
            FormStatus::Editing => {}
            FormStatus::Sending => {
                doc.text("Sending your message...", muted());
            }
            FormStatus::Sent => {
                doc.text(
                    "Message sent! I'll get back to you soon.",
                    Style::default().fg(STATUS_OK),
                );
            }
            FormStatus::Failed { reason } => {
                doc.text(
                    &format!("Could not send your message: {reason}"),
                    Style::default().fg(STATUS_ERROR),
                );
            }
        }
        let hint = if self.editing {
            "Tab/↓ next field · Enter on Send submits · Esc stops editing"
        } else {
            "Press i or Enter to start writing"
        };
        doc.text(hint, muted());
        doc.blank();
    }

    fn field_rows(&self, doc: &mut DocumentBuilder, field: FormField, focused: bool) {
        let marker = if field.is_required() { " *" } else { "" };
        let label = format!("{}{marker}", field.label());
        let label_style = if focused {
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
        } else {
            body()
        };
        let value_style = if focused {
            Style::default().bg(ACTIVE_HIGHLIGHT)
        } else {
            body()
        };

        let value = self.form.value(field);
        let mut rows: Vec<String> = value.split('\n').map(str::to_string).collect();
        if focused {
            if let Some(last) = rows.last_mut() {
                last.push('▌');
            }
        }
        for (index, row) in rows.into_iter().enumerate() {
            let label = if index == 0 { label.as_str() } else { "" };
            doc.push(Line::from(vec![
                Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
                Span::styled("┃ ", muted()),
                Span::styled(row, value_style),
            ]));
        }
        if let Some(error) = self.form.error(field) {
            doc.push(Line::from(vec![
                Span::raw(" ".repeat(LABEL_WIDTH + 2)),
                Span::styled(error, Style::default().fg(STATUS_ERROR)),
            ]));
        }
    }

    fn info_section(&self, doc: &mut DocumentBuilder) {
        doc.heading("Contact Information", title());
        for channel in CONTACT_CHANNELS {
            doc.push(Line::from(vec![
                Span::styled(format!("{:<LABEL_WIDTH$}", channel.label), muted()),
                Span::styled(channel.value, body()),
            ]));
        }
        doc.blank();

        doc.heading("Follow Me", title());
        for (index, link) in SOCIAL_LINKS.iter().enumerate() {
            let selected = !self.editing && index == self.selected_link;
            let line = Line::from(vec![
                Span::styled(if selected { "▶ " } else { "  " }, title()),
                Span::styled(format!("{:<10}", link.label), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("{:<24}", link.handle), body()),
                Span::styled(link.url, muted()),
            ]);
            if selected {
                doc.focused(|doc| {
                    doc.push(line.style(Style::default().bg(ACTIVE_HIGHLIGHT)));
                });
            } else {
                doc.push(line);
            }
        }
        doc.blank();

        doc.heading("Availability", title());
        for item in AVAILABILITY {
            doc.indented(2, &format!("✓ {item}"), Style::default().fg(STATUS_OK));
        }
        doc.text("Response time: usually within 24 hours.", muted());
        doc.blank();

        doc.heading("Best Times to Reach Me", title());
        for (days, hours) in BEST_TIMES {
            doc.push(Line::from(vec![
                Span::styled(format!("{days:<18}"), body()),
                Span::styled(*hours, muted()),
            ]));
        }
        doc.blank();

        doc.heading("Frequently Asked Questions", title());
        for faq in FAQS {
            doc.push(Line::styled(faq.question, Style::default().add_modifier(Modifier::BOLD)));
            doc.indented(2, faq.answer, body());
            doc.blank();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn type_text(view: &mut ContactView, text: &str) {
        for ch in text.chars() {
            view.on_key(key(KeyCode::Char(ch)));
        }
    }

    fn fill(view: &mut ContactView) {
        view.on_key(key(KeyCode::Char('i')));
        type_text(view, "Ada");
        view.on_key(key(KeyCode::Enter));
        type_text(view, "ada@example.com");
        view.on_key(key(KeyCode::Tab));
        view.on_key(key(KeyCode::Tab));
        type_text(view, "Hi");
        view.on_key(key(KeyCode::Tab));
    }

    #[test]
    fn enter_on_send_submits_a_valid_form() {
        let mut view = ContactView::mount(&PortfolioSettings::default());
        fill(&mut view);
        assert_eq!(view.form().focus, FormField::Send);
        let action = view.on_key(key(KeyCode::Enter));
        match action {
            PageAction::Submit(message) => {
                assert_eq!(message.name, "Ada");
                assert_eq!(message.email, "ada@example.com");
                assert_eq!(message.subject, None);
                assert_eq!(message.message, "Hi");
            }
            other => panic!("expected submit, got {other:?}"),
        }
        // A second Enter while sending does not submit twice.
        assert_eq!(view.on_key(key(KeyCode::Enter)), PageAction::None);
    }

    #[test]
    fn q_is_text_while_editing() {
        let mut view = ContactView::mount(&PortfolioSettings::default());
        view.on_key(key(KeyCode::Char('i')));
        type_text(&mut view, "q");
        assert_eq!(view.form().name, "q");
        view.on_key(key(KeyCode::Esc));
        assert!(!view.is_editing());
    }

    #[test]
    fn success_clears_form_and_leaves_editing() {
        let mut view = ContactView::mount(&PortfolioSettings::default());
        fill(&mut view);
        view.on_key(key(KeyCode::Enter));
        view.on_submit_result(Ok(()));
        assert_eq!(view.form().status, FormStatus::Sent);
        assert!(view.form().name.is_empty());
        assert!(!view.is_editing());
    }

    #[test]
    fn copy_uses_selected_social_link() {
        let mut view = ContactView::mount(&PortfolioSettings::default());
        view.on_key(key(KeyCode::Left));
        assert_eq!(view.selected_link(), SOCIAL_LINKS.len() - 1);
        view.on_key(key(KeyCode::Right));
        view.on_key(key(KeyCode::Right));
        assert_eq!(view.selected_link(), 1);
        assert_eq!(
            view.on_key(key(KeyCode::Char('y'))),
            PageAction::Copy {
                what: "LinkedIn link".into(),
                text: "https://linkedin.com/in/kedareswar-tiruveedi".into(),
            }
        );
    }
}
