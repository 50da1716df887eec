use std::sync::Arc;
use std::time::Instant;

use crossterm::event::KeyEvent;
use parking_lot::Mutex;

use crate::clipboard::ClipboardHandler;
use crate::submit::{ContactMessage, SubmitRequest, SubmitSender};
use crate::ui::document::Document;
use crate::ui::mvi;
use crate::ui::nav::{NavIntent, NavReducer, NavState};
use crate::ui::notice::{NoticeBoard, NoticeKind, NoticeState};
use crate::ui::pages::{Page, PageAction, PageView, PortfolioSettings};
use crate::ui::reveal::Viewport;
use crate::ui::schedule::{Scheduler, TimerTarget, ViewId};

/// Body size used until the first resize arrives.
const DEFAULT_BODY: (u16, u16) = (80, 20);

/// Rows scrolled before the header switches to its scrolled style.
const SCROLLED_AFTER: usize = 2;

/// The one mounted page and everything scoped to it.
struct MountedView {
    id: ViewId,
    view: PageView,
    scroll: usize,
}

pub struct App {
    should_quit: bool,
    settings: PortfolioSettings,
    scheduler: Scheduler,
    next_view: u64,
    mounted: MountedView,
    /// Body size in cells: (cols, rows).
    body: (u16, u16),
    nav: NavState,
    notices: NoticeBoard,
    submit_sender: Option<SubmitSender>,
    clipboard: Option<Arc<Mutex<ClipboardHandler>>>,
    /// Bring the selected card into view on the next sync.
    follow_focus: bool,
    last_error: Option<String>,
}

impl App {
    pub fn new(settings: PortfolioSettings) -> Self {
        let mut scheduler = Scheduler::new();
        let id = ViewId(0);
        let view = PageView::mount(
            settings.start_page,
            id,
            &settings,
            &mut scheduler,
            Instant::now(),
        );
        let notices = NoticeBoard::new(settings.notice_duration);
        let mut app = Self {
            should_quit: false,
            settings,
            scheduler,
            next_view: 1,
            mounted: MountedView {
                id,
                view,
                scroll: 0,
            },
            body: DEFAULT_BODY,
            nav: NavState::default(),
            notices,
            submit_sender: None,
            clipboard: None,
            follow_focus: false,
            last_error: None,
        };
        app.sync_viewport();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn settings(&self) -> &PortfolioSettings {
        &self.settings
    }

    pub fn page(&self) -> Page {
        self.mounted.view.page()
    }

    pub fn view_id(&self) -> ViewId {
        self.mounted.id
    }

    pub fn view(&self) -> &PageView {
        &self.mounted.view
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn notice(&self) -> &NoticeState {
        self.notices.state()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_submit_sender(&mut self, sender: SubmitSender) {
        self.submit_sender = Some(sender);
    }

    pub fn set_clipboard(&mut self, clipboard: Arc<Mutex<ClipboardHandler>>) {
        self.clipboard = Some(clipboard);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Unmount the current view and mount `page` in its place.
    ///
    /// The old view's timers are cancelled before the new one is created, so
    /// nothing scheduled by it can fire afterwards.
    pub fn navigate(&mut self, page: Page) {
        self.close_menu();
        if page == self.page() {
            return;
        }
        self.mounted.view.unmount(&mut self.scheduler);
        let id = ViewId(self.next_view);
        self.next_view += 1;
        let view = PageView::mount(page, id, &self.settings, &mut self.scheduler, Instant::now());
        self.mounted = MountedView {
            id,
            view,
            scroll: 0,
        };
        self.follow_focus = false;
        self.sync_viewport();
    }

    pub fn next_page(&mut self) {
        self.navigate(self.page().next());
    }

    pub fn prev_page(&mut self) {
        self.navigate(self.page().prev());
    }

    pub fn menu_open(&self) -> bool {
        self.nav.menu_open
    }

    pub fn menu_selection(&self) -> Page {
        self.nav.selection
    }

    pub fn toggle_menu(&mut self) {
        let current = self.page();
        mvi::dispatch::<NavReducer>(&mut self.nav, NavIntent::ToggleMenu { current });
    }

    pub fn close_menu(&mut self) {
        mvi::dispatch::<NavReducer>(&mut self.nav, NavIntent::CloseMenu);
    }

    pub fn move_menu_selection(&mut self, direction: i32) {
        let intent = if direction.is_negative() {
            NavIntent::SelectPrev
        } else {
            NavIntent::SelectNext
        };
        mvi::dispatch::<NavReducer>(&mut self.nav, intent);
    }

    pub fn activate_menu_selection(&mut self) {
        if self.nav.menu_open {
            self.navigate(self.nav.selection);
        }
    }

    // ========================================================================
    // Scrolling and viewport
    // ========================================================================

    pub fn scroll(&self) -> usize {
        self.mounted.scroll
    }

    pub fn scrolled(&self) -> bool {
        self.mounted.scroll > SCROLLED_AFTER
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let scroll = self.mounted.scroll;
        self.mounted.scroll = if delta.is_negative() {
            scroll.saturating_sub(delta.unsigned_abs())
        } else {
            scroll.saturating_add(delta.unsigned_abs())
        };
        self.follow_focus = false;
        self.sync_viewport();
    }

    pub fn page_down(&mut self) {
        let step = self.viewport_height().saturating_sub(1).max(1);
        self.scroll_by(step as isize);
    }

    pub fn page_up(&mut self) {
        let step = self.viewport_height().saturating_sub(1).max(1);
        self.scroll_by(-(step as isize));
    }

    pub fn scroll_to_top(&mut self) {
        self.mounted.scroll = 0;
        self.follow_focus = false;
        self.sync_viewport();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.mounted.scroll = usize::MAX;
        self.follow_focus = false;
        self.sync_viewport();
    }

    /// Body area changed size.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.body = (cols.max(1), rows.max(1));
        self.sync_viewport();
    }

    /// Width pages lay out for: the body minus a one-cell margin each side.
    pub fn content_width(&self) -> u16 {
        self.body.0.saturating_sub(2).max(1)
    }

    pub fn viewport_height(&self) -> usize {
        self.body.1 as usize
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            offset: self.mounted.scroll,
            height: self.viewport_height(),
        }
    }

    /// The mounted page laid out for the current width.
    pub fn document(&self) -> Document {
        self.mounted.view.document(self.content_width())
    }

    /// Clamp the scroll offset, follow the selected card if asked to, and
    /// report the visible rows to the page's reveal observers.
    pub fn sync_viewport(&mut self) {
        let document = self.document();
        let height = self.viewport_height();

        if std::mem::take(&mut self.follow_focus) {
            if let Some(focus) = document.focus() {
                let scroll = self.mounted.scroll;
                if focus.top < scroll {
                    self.mounted.scroll = focus.top;
                } else if focus.top + focus.height > scroll + height {
                    self.mounted.scroll = (focus.top + focus.height).saturating_sub(height).min(focus.top);
                }
            }
        }

        self.mounted.scroll = self.mounted.scroll.min(document.max_scroll(height));
        let viewport = self.viewport();
        self.mounted.view.observe(&document, viewport);
    }

    // ========================================================================
    // Input and timers
    // ========================================================================

    /// True while the contact form owns the keyboard.
    pub fn is_editing(&self) -> bool {
        self.mounted.view.captures_input()
    }

    pub fn hints(&self) -> &'static str {
        self.mounted.view.hints()
    }

    /// Hand a key to the mounted page and carry out whatever it asks for.
    pub fn on_key(&mut self, key: KeyEvent) {
        let action = self.mounted.view.on_key(key);
        self.follow_focus = true;
        match action {
            PageAction::None => {}
            PageAction::Copy { what, text } => self.copy_to_clipboard(&what, &text),
            PageAction::Submit(message) => self.submit(message),
            PageAction::Notice { kind, text } => self.show_notice(kind, text),
        }
        self.sync_viewport();
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Fire every timer due at `now`, then re-sync the viewport if the mounted
    /// page changed. Typewriter ticks for a view that is no longer mounted are
    /// dropped.
    pub fn fire_due(&mut self, now: Instant) {
        let mut ticked = false;
        for target in self.scheduler.take_due(now) {
            match target {
                TimerTarget::Typewriter { view } if view == self.mounted.id => {
                    self.mounted.view.on_typewriter_timer(&mut self.scheduler, now);
                    ticked = true;
                }
                TimerTarget::Typewriter { view } => {
                    tracing::debug!(view = view.0, "dropping tick for unmounted view");
                }
                TimerTarget::DismissNotice => self.notices.on_timer(),
            }
        }
        // The hero line can re-wrap as it types, moving everything below it.
        if ticked {
            self.sync_viewport();
        }
    }

    /// Result of a submission, reported by the worker.
    ///
    /// The form is only updated if the sending view is still mounted; the
    /// notice is shown either way.
    pub fn on_submit_finished(&mut self, view: ViewId, result: Result<(), String>) {
        match &result {
            Ok(()) => {
                tracing::info!(view = view.0, "contact message sent");
                self.show_notice(NoticeKind::Success, "Message sent! I'll get back to you soon.");
            }
            Err(reason) => {
                self.show_notice(NoticeKind::Error, format!("Could not send your message: {reason}"));
            }
        }
        if view == self.mounted.id {
            self.mounted.view.on_submit_result(result);
            self.sync_viewport();
        } else {
            tracing::debug!(view = view.0, "submission result for unmounted view");
        }
    }

    fn show_notice(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notices.show(kind, text, &mut self.scheduler, Instant::now());
    }

    fn submit(&mut self, message: ContactMessage) {
        tracing::info!(view = self.mounted.id.0, "queueing contact message");
        let request = SubmitRequest {
            view: self.mounted.id,
            message,
        };
        if let Err(reason) = self.send_command(request) {
            self.mounted.view.on_submit_result(Err(reason.clone()));
            self.show_notice(NoticeKind::Error, format!("Could not send your message: {reason}"));
        }
    }

    fn send_command(&mut self, request: SubmitRequest) -> Result<(), String> {
        let Some(sender) = &self.submit_sender else {
            return Err("message delivery is not available".to_string());
        };

        match sender.try_send(request) {
            Ok(()) => {
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                let message = format!("submit queue unavailable: {err}");
                self.last_error = Some(message.clone());
                Err(message)
            }
        }
    }

    fn copy_to_clipboard(&mut self, what: &str, text: &str) {
        let result = match &self.clipboard {
            Some(clipboard) => clipboard.lock().set_text(text).map_err(|err| err.to_string()),
            None => Err("clipboard is unavailable".to_string()),
        };
        match result {
            Ok(()) => {
                tracing::info!(what, "copied to clipboard");
                self.show_notice(NoticeKind::Success, format!("Copied {what}"));
            }
            Err(reason) => {
                tracing::warn!(what, error = %reason, "clipboard copy failed");
                self.last_error = Some(reason.clone());
                self.show_notice(NoticeKind::Error, format!("{reason}: {text}"));
            }
        }
    }
}
