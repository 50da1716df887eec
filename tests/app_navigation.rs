mod common;

use std::time::{Duration, Instant};

use common::{fill_contact_form, make_app, make_app_on, press, press_ctrl, type_text};
use crossterm::event::KeyCode;
use termfolio::ui::contact::{FormField, FormStatus};
use termfolio::ui::input::handle_key;
use termfolio::ui::notice::{NoticeKind, NoticeState};
use termfolio::ui::pages::{Page, PageView};

fn contact_form(app: &termfolio::ui::app::App) -> &termfolio::ui::contact::ContactForm {
    match app.view() {
        PageView::Contact(contact) => contact.form(),
        other => panic!("expected the contact page, got {:?}", other.page()),
    }
}

// -- Navigation ---------------------------------------------------------------

#[test]
fn digits_and_tab_move_between_pages() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.page(), Page::Certifications);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.page(), Page::Contact);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.page(), Page::Home);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.page(), Page::Contact);
}

#[test]
fn menu_selects_and_opens_a_page() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('m'));
    assert!(app.menu_open());
    assert_eq!(app.menu_selection(), Page::Home);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.menu_selection(), Page::Projects);
    // Vim keys move the selection, not the page.
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.page(), Page::Home);

    press(&mut app, KeyCode::Enter);
    assert!(!app.menu_open());
    assert_eq!(app.page(), Page::Certifications);
}

#[test]
fn escape_closes_the_menu_without_navigating() {
    let mut app = make_app_on(Page::About);
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Esc);
    assert!(!app.menu_open());
    assert_eq!(app.page(), Page::About);
}

#[test]
fn selecting_the_current_page_keeps_the_view() {
    let mut app = make_app_on(Page::Projects);
    let id = app.view_id();
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.view_id(), id);
}

#[test]
fn q_quits_outside_the_form() {
    let mut app = make_app_on(Page::About);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn stale_typewriter_ticks_do_nothing_after_navigation() {
    let mut app = make_app();
    assert!(app.next_deadline().is_some());
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.scheduler().pending(), 0);

    app.fire_due(Instant::now() + Duration::from_secs(30));
    assert_eq!(app.page(), Page::About);
    assert_eq!(app.next_deadline(), None);
}

#[test]
fn scrolled_header_state_follows_scroll_offset() {
    let mut app = make_app_on(Page::About);
    app.on_resize(80, 12);
    assert!(!app.scrolled());
    for _ in 0..5 {
        press(&mut app, KeyCode::Char('j'));
    }
    assert!(app.scrolled());
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.scroll(), 0);
}

// -- Contact form -------------------------------------------------------------

#[test]
fn typing_in_the_form_does_not_trigger_shortcuts() {
    let mut app = make_app_on(Page::Contact);
    press(&mut app, KeyCode::Char('i'));
    assert!(app.is_editing());

    type_text(&mut app, "q m 2");
    assert!(!app.should_quit());
    assert!(!app.menu_open());
    assert_eq!(app.page(), Page::Contact);
    assert_eq!(contact_form(&app).name, "q m 2");

    handle_key(&mut app, press_ctrl('q'));
    assert!(app.should_quit());
}

#[test]
fn empty_form_reports_missing_fields() {
    let mut app = make_app_on(Page::Contact);
    press(&mut app, KeyCode::Char('i'));
    for _ in 0..4 {
        press(&mut app, KeyCode::Tab);
    }
    press(&mut app, KeyCode::Enter);

    let form = contact_form(&app);
    assert_eq!(form.status, FormStatus::Editing);
    assert!(form.error(FormField::Name).is_some());
    assert!(form.error(FormField::Email).is_some());
    assert!(form.error(FormField::Message).is_some());
    assert!(form.error(FormField::Subject).is_none());
    assert_eq!(form.focus, FormField::Name);
}

#[test]
fn submit_is_queued_with_the_sending_view() {
    let (tx, mut rx) = tokio::sync::mpsc::channel(4);
    let mut app = make_app_on(Page::Contact);
    app.set_submit_sender(tx);

    fill_contact_form(&mut app);
    press(&mut app, KeyCode::Enter);
    assert!(contact_form(&app).is_sending());

    let request = rx.try_recv().expect("request queued");
    assert_eq!(request.view, app.view_id());
    assert_eq!(request.message.name, "Ada Lovelace");
    assert_eq!(request.message.subject, None);

    // A second Enter while sending does not queue a duplicate.
    press(&mut app, KeyCode::Enter);
    assert!(rx.try_recv().is_err());

    app.on_submit_finished(request.view, Ok(()));
    let form = contact_form(&app);
    assert_eq!(form.status, FormStatus::Sent);
    assert!(form.name.is_empty());
    assert!(!app.is_editing());
    assert!(matches!(
        app.notice(),
        NoticeState::Visible {
            kind: NoticeKind::Success,
            ..
        }
    ));
}

#[test]
fn failed_submission_keeps_the_message() {
    let (tx, mut rx) = tokio::sync::mpsc::channel(4);
    let mut app = make_app_on(Page::Contact);
    app.set_submit_sender(tx);
    fill_contact_form(&mut app);
    press(&mut app, KeyCode::Enter);
    let request = rx.try_recv().expect("request queued");

    app.on_submit_finished(request.view, Err("endpoint down".to_string()));
    let form = contact_form(&app);
    assert!(matches!(&form.status, FormStatus::Failed { reason } if reason == "endpoint down"));
    assert_eq!(form.message, "Hello from the tests");
    assert!(matches!(
        app.notice(),
        NoticeState::Visible {
            kind: NoticeKind::Error,
            ..
        }
    ));
}

#[test]
fn result_for_an_unmounted_view_leaves_the_new_form_alone() {
    let (tx, mut rx) = tokio::sync::mpsc::channel(4);
    let mut app = make_app_on(Page::Contact);
    app.set_submit_sender(tx);
    fill_contact_form(&mut app);
    press(&mut app, KeyCode::Enter);
    let request = rx.try_recv().expect("request queued");

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('5'));
    assert_ne!(app.view_id(), request.view);

    app.on_submit_finished(request.view, Ok(()));
    assert_eq!(contact_form(&app).status, FormStatus::Editing);
    // The notice still tells the visitor what happened.
    assert!(matches!(app.notice(), NoticeState::Visible { .. }));
}

#[test]
fn full_submit_queue_fails_the_form() {
    let (tx, _rx) = tokio::sync::mpsc::channel(1);
    let mut app = make_app_on(Page::Contact);
    app.set_submit_sender(tx.clone());
    tx.try_send(termfolio::submit::SubmitRequest {
        view: app.view_id(),
        message: common::sample_message(),
    })
    .expect("fill the queue");

    fill_contact_form(&mut app);
    press(&mut app, KeyCode::Enter);
    assert!(matches!(contact_form(&app).status, FormStatus::Failed { .. }));
    assert!(app.last_error().is_some());
}
