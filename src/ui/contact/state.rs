use std::collections::BTreeMap;

use crate::submit::ContactMessage;
use crate::ui::mvi::UiState;

/// Focusable parts of the contact form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
    Send,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
        FormField::Send,
    ];

    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Subject,
            FormField::Subject => FormField::Message,
            FormField::Message => FormField::Send,
            FormField::Send => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Send,
            FormField::Email => FormField::Name,
            FormField::Subject => FormField::Email,
            FormField::Message => FormField::Subject,
            FormField::Send => FormField::Message,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
            FormField::Send => "Send Message",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Message)
    }
}

/// Delivery progress of the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Sending,
    Sent,
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub focus: FormField,
    pub status: FormStatus,
    /// Validation messages from the last submit attempt.
    pub errors: BTreeMap<FormField, &'static str>,
}

impl UiState for ContactForm {}

impl ContactForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
            FormField::Send => "",
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Subject => Some(&mut self.subject),
            FormField::Message => Some(&mut self.message),
            FormField::Send => None,
        }
    }

    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    /// Validation errors for the current field values; empty when submittable.
    pub fn validate(&self) -> BTreeMap<FormField, &'static str> {
        let mut errors = BTreeMap::new();
        if self.name.trim().is_empty() {
            errors.insert(FormField::Name, "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert(FormField::Email, "Email is required");
        } else if !is_plausible_email(self.email.trim()) {
            errors.insert(FormField::Email, "Enter a valid email address");
        }
        if self.message.trim().is_empty() {
            errors.insert(FormField::Message, "Message is required");
        }
        errors
    }

    /// The message handed to the submitter. Blank subjects become `None`.
    pub fn to_message(&self) -> ContactMessage {
        let subject = self.subject.trim();
        ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message: self.message.trim_end().to_string(),
        }
    }
}

/// One `@`, a non-empty local part, a dotted domain and no whitespace.
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_plausibility() {
        assert!(is_plausible_email("someone@example.com"));
        assert!(is_plausible_email("a.b+c@mail.example.org"));
        assert!(!is_plausible_email("someone"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("someone@example"));
        assert!(!is_plausible_email("someone@@example.com"));
        assert!(!is_plausible_email("some one@example.com"));
        assert!(!is_plausible_email("someone@example..com"));
        assert!(!is_plausible_email("someone@.com"));
    }

    #[test]
    fn tab_order_wraps_both_ways() {
        for field in FormField::ALL {
            assert_eq!(field.next().prev(), field);
        }
        assert_eq!(FormField::Send.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Send);
    }

    #[test]
    fn blank_subject_is_omitted() {
        let form = ContactForm {
            name: " Ada ".into(),
            email: "ada@example.com".into(),
            subject: "   ".into(),
            message: "Hello\n".into(),
            ..ContactForm::default()
        };
        let message = form.to_message();
        assert_eq!(message.name, "Ada");
        assert_eq!(message.subject, None);
        assert_eq!(message.message, "Hello");
    }
}
