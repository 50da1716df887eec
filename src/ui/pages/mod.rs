//! Portfolio pages.
//!
//! The App mounts exactly one [`PageView`] at a time. Everything a view owns
//! (timers, viewport subscriptions, filters, form input) is acquired in
//! `mount` and released in `unmount`.

mod about;
mod certifications;
mod contact;
mod home;
mod projects;
mod widgets;

pub use about::{AboutView, ABOUT_SECTIONS};
pub use certifications::CertificationsView;
pub use contact::ContactView;
pub use home::HomeView;
pub use projects::ProjectsView;

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::content::PROFILE;
use crate::submit::ContactMessage;
use crate::ui::document::Document;
use crate::ui::notice::NoticeKind;
use crate::ui::reveal::Viewport;
use crate::ui::schedule::{Scheduler, ViewId};
use crate::ui::typewriter::{RoleCycle, TypewriterTiming};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    #[serde(rename = "index", alias = "home")]
    Home,
    About,
    Projects,
    Certifications,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Projects,
        Page::Certifications,
        Page::Contact,
    ];

    /// Route name, as the site would have it.
    pub fn route(self) -> &'static str {
        match self {
            Page::Home => "index",
            Page::About => "about",
            Page::Projects => "projects",
            Page::Certifications => "certifications",
            Page::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Certifications => "Certifications",
            Page::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Page::Home => 0,
            Page::About => 1,
            Page::Projects => 2,
            Page::Certifications => 3,
            Page::Contact => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPage(pub String);

impl fmt::Display for UnknownPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let routes: Vec<&str> = Page::ALL.iter().map(|page| page.route()).collect();
        write!(f, "unknown page '{}' (expected one of: {})", self.0, routes.join(", "))
    }
}

impl std::error::Error for UnknownPage {}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "home" {
            return Ok(Page::Home);
        }
        Page::ALL
            .into_iter()
            .find(|page| page.route() == wanted)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// What pages need from the configuration when they mount.
#[derive(Debug, Clone)]
pub struct PortfolioSettings {
    pub name: String,
    pub roles: RoleCycle,
    pub timing: TypewriterTiming,
    pub about_threshold: f32,
    pub timeline_threshold: f32,
    pub start_page: Page,
    pub notice_duration: Duration,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            name: PROFILE.name.to_string(),
            roles: RoleCycle::default(),
            timing: TypewriterTiming::default(),
            about_threshold: 0.2,
            timeline_threshold: 0.3,
            start_page: Page::Home,
            notice_duration: Duration::from_secs(4),
        }
    }
}

/// Side effect a page asks the App to perform after handling a key.
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    None,
    Copy { what: String, text: String },
    Submit(ContactMessage),
    Notice { kind: NoticeKind, text: String },
}

#[derive(Debug)]
pub enum PageView {
    Home(HomeView),
    About(AboutView),
    Projects(ProjectsView),
    Certifications(CertificationsView),
    Contact(ContactView),
}

impl PageView {
    pub fn mount(
        page: Page,
        view: ViewId,
        settings: &PortfolioSettings,
        scheduler: &mut Scheduler,
        now: Instant,
    ) -> Self {
        tracing::info!(page = page.route(), view = view.0, "mounting page");
        match page {
            Page::Home => PageView::Home(HomeView::mount(view, settings, scheduler, now)),
            Page::About => PageView::About(AboutView::mount(settings)),
            Page::Projects => PageView::Projects(ProjectsView::mount()),
            Page::Certifications => PageView::Certifications(CertificationsView::mount()),
            Page::Contact => PageView::Contact(ContactView::mount(settings)),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            PageView::Home(_) => Page::Home,
            PageView::About(_) => Page::About,
            PageView::Projects(_) => Page::Projects,
            PageView::Certifications(_) => Page::Certifications,
            PageView::Contact(_) => Page::Contact,
        }
    }

    /// Release timers and viewport subscriptions.
    pub fn unmount(&mut self, scheduler: &mut Scheduler) {
        tracing::info!(page = self.page().route(), "unmounting page");
        match self {
            PageView::Home(home) => home.unmount(scheduler),
            PageView::About(about) => about.unmount(),
            PageView::Projects(_) | PageView::Certifications(_) | PageView::Contact(_) => {}
        }
    }

    pub fn document(&self, width: u16) -> Document {
        match self {
            PageView::Home(home) => home.document(width),
            PageView::About(about) => about.document(width),
            PageView::Projects(projects) => projects.document(width),
            PageView::Certifications(certs) => certs.document(width),
            PageView::Contact(contact) => contact.document(width),
        }
    }

    /// Feed the latest layout and scroll position to the reveal observers.
    pub fn observe(&mut self, document: &Document, viewport: Viewport) {
        match self {
            PageView::Home(home) => home.observe(document, viewport),
            PageView::About(about) => about.observe(document, viewport),
            PageView::Projects(_) | PageView::Certifications(_) | PageView::Contact(_) => {}
        }
    }

    pub fn on_typewriter_timer(&mut self, scheduler: &mut Scheduler, now: Instant) {
        if let PageView::Home(home) = self {
            home.on_timer(scheduler, now);
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> PageAction {
        match self {
            PageView::Home(home) => home.on_key(key),
            PageView::About(_) => PageAction::None,
            PageView::Projects(projects) => projects.on_key(key),
            PageView::Certifications(certs) => certs.on_key(key),
            PageView::Contact(contact) => contact.on_key(key),
        }
    }

    /// True while the page wants every key (contact form editing).
    pub fn captures_input(&self) -> bool {
        matches!(self, PageView::Contact(contact) if contact.is_editing())
    }

    pub fn on_submit_result(&mut self, result: Result<(), String>) {
        if let PageView::Contact(contact) = self {
            contact.on_submit_result(result);
        }
    }

    /// Key hints for the footer.
    pub fn hints(&self) -> &'static str {
        match self {
            PageView::Home(_) => " c: Category │ ←/→: Select │ y: Copy link │ 1-5: Pages │ m: Menu │ q: Quit",
            PageView::About(_) => " ↑/↓: Scroll │ 1-5: Pages │ Tab: Next page │ m: Menu │ q: Quit",
            PageView::Projects(_) | PageView::Certifications(_) => {
                " c/C: Category │ s: Status │ r: Reset │ ←/→: Select │ y: Copy │ m: Menu │ q: Quit"
            }
            PageView::Contact(contact) if contact.is_editing() => {
                " Tab: Next field │ Enter: Send/next │ Esc: Done │ Ctrl+Q: Quit"
            }
            PageView::Contact(_) => " i: Write message │ ←/→: Select link │ y: Copy │ m: Menu │ q: Quit",
        }
    }
}
