use crate::ui::mvi::Reducer;

use super::intent::ContactIntent;
use super::state::{ContactForm, FormField, FormStatus};

pub struct ContactReducer;

impl Reducer for ContactReducer {
    type State = ContactForm;
    type Intent = ContactIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut form = state;
        match intent {
            ContactIntent::Insert(ch) => {
                if form.is_sending() || ch.is_control() {
                    return form;
                }
                let focus = form.focus;
                if let Some(value) = form.value_mut(focus) {
                    value.push(ch);
                    edited(&mut form, focus);
                }
            }
            ContactIntent::Backspace => {
                if form.is_sending() {
                    return form;
                }
                let focus = form.focus;
                if let Some(value) = form.value_mut(focus) {
                    value.pop();
                    edited(&mut form, focus);
                }
            }
            ContactIntent::Newline => {
                if form.is_sending() || form.focus != FormField::Message {
                    return form;
                }
                form.message.push('\n');
            }
            ContactIntent::FocusNext => form.focus = form.focus.next(),
            ContactIntent::FocusPrev => form.focus = form.focus.prev(),
            ContactIntent::Submit => {
                if form.is_sending() {
                    return form;
                }
                form.errors = form.validate();
                match form.errors.keys().next() {
                    Some(&first_invalid) => {
                        form.focus = first_invalid;
                        form.status = FormStatus::Editing;
                    }
                    None => form.status = FormStatus::Sending,
                }
            }
            ContactIntent::Submitted => {
                if form.is_sending() {
                    form = ContactForm {
                        status: FormStatus::Sent,
                        ..ContactForm::default()
                    };
                }
            }
            ContactIntent::SubmitFailed { reason } => {
                if form.is_sending() {
                    form.status = FormStatus::Failed { reason };
                }
            }
            ContactIntent::Reset => form = ContactForm::default(),
        }
        form
    }
}

/// A keystroke changed `field`: its error is stale and a sent form is being
/// written again.
fn edited(form: &mut ContactForm, field: FormField) {
    form.errors.remove(&field);
    if form.status == FormStatus::Sent {
        form.status = FormStatus::Editing;
    }
}
