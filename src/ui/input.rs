use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::ui::app::App;
use crate::ui::pages::Page;

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: isize = 3;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.menu_open() {
        handle_menu_key(app, key);
        return;
    }

    // The contact form takes every other key while editing, `q` included.
    if app.is_editing() {
        app.on_key(key);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char(ch @ '1'..='5') => {
            if let Some(page) = page_for_digit(ch) {
                app.navigate(page);
            }
        }
        KeyCode::Tab => app.next_page(),
        KeyCode::BackTab => app.prev_page(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),
        _ => app.on_key(key),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => app.close_menu(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.move_menu_selection(-1),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.move_menu_selection(1),
        KeyCode::Enter => app.activate_menu_selection(),
        KeyCode::Char(ch) => {
            if let Some(page) = page_for_digit(ch) {
                app.navigate(page);
            }
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.menu_open() {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_STEP),
        MouseEventKind::ScrollDown => app.scroll_by(WHEEL_STEP),
        _ => {}
    }
}

/// `1`..`5` in menu order.
fn page_for_digit(ch: char) -> Option<Page> {
    let digit = ch.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Page::from_index)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_pages_in_menu_order() {
        assert_eq!(page_for_digit('1'), Some(Page::Home));
        assert_eq!(page_for_digit('5'), Some(Page::Contact));
        assert_eq!(page_for_digit('0'), None);
        assert_eq!(page_for_digit('6'), None);
        assert_eq!(page_for_digit('x'), None);
    }
}
