use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::{Project, PROFICIENCY, PROFILE, PROJECTS, TIMELINE};
use crate::ui::document::{Document, DocumentBuilder};
use crate::ui::filter::{FilterAxis, FilterReducer, FilterState};
use crate::ui::mvi;
use crate::ui::reveal::{RegionId, RevealDriver, Viewport};
use crate::ui::schedule::{Scheduler, ViewId};
use crate::ui::theme::{accent, BRAND};
use crate::ui::typewriter::TypewriterDriver;

use super::widgets::{body, filter_bar, filter_intent, is_copy_key, muted, project_card, title};
use super::{PageAction, PortfolioSettings};

/// Canonical landing page: hero, featured projects, coding journey.
#[derive(Debug)]
pub struct HomeView {
    name: String,
    typewriter: TypewriterDriver,
    featured: FilterState<Project>,
    timeline: RevealDriver,
}

impl HomeView {
    pub fn mount(
        view: ViewId,
        settings: &PortfolioSettings,
        scheduler: &mut Scheduler,
        now: Instant,
    ) -> Self {
        Self {
            name: settings.name.clone(),
            typewriter: TypewriterDriver::mount(
                view,
                settings.roles.clone(),
                settings.timing,
                scheduler,
                now,
            ),
            featured: FilterState::new(PROJECTS),
            timeline: RevealDriver::mount(settings.timeline_threshold, TIMELINE.len()),
        }
    }

    pub fn typewriter(&self) -> &TypewriterDriver {
        &self.typewriter
    }

    pub fn featured(&self) -> &FilterState<Project> {
        &self.featured
    }

    pub fn timeline(&self) -> &RevealDriver {
        &self.timeline
    }

    pub fn on_timer(&mut self, scheduler: &mut Scheduler, now: Instant) {
        self.typewriter.on_timer(scheduler, now);
    }

    pub fn unmount(&mut self, scheduler: &mut Scheduler) {
        self.typewriter.unmount(scheduler);
        self.timeline.unmount();
    }

    pub fn observe(&mut self, document: &Document, viewport: Viewport) {
        self.timeline.sync(document.handles(TIMELINE.len()), viewport);
    }

    pub fn on_key(&mut self, key: KeyEvent) -> PageAction {
        if is_copy_key(&key) {
            return match self.featured.selected_item() {
                Some(project) => PageAction::Copy {
                    what: project.title.to_string(),
                    text: project.primary_url().to_string(),
                },
                None => PageAction::None,
            };
        }
        // Featured projects filter by category only.
        if let Some(intent) = filter_intent(&key, false) {
            mvi::dispatch::<FilterReducer<Project>>(&mut self.featured, intent);
        }
        PageAction::None
    }

    pub fn document(&self, width: u16) -> Document {
        let mut doc = DocumentBuilder::new(width);
        self.hero(&mut doc);
        self.featured_projects(&mut doc);
        self.journey(&mut doc);

        doc.blank();
        doc.text(
            &format!("© 2024 {}. Built with Rust, ratatui and crossterm.", self.name),
            muted(),
        );
        doc.finish()
    }

    fn hero(&self, doc: &mut DocumentBuilder) {
        let state = self.typewriter.state();
        doc.blank();
        doc.push(Line::from(vec![
            Span::styled("Hi, I'm ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                self.name.clone(),
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ),
        ]));
        doc.push(Line::from(vec![
            Span::styled("> ", muted()),
            Span::styled(state.displayed_text.clone(), title()),
            Span::styled("▌", Style::default().fg(BRAND).add_modifier(Modifier::SLOW_BLINK)),
        ]));
        doc.blank();
        doc.text(PROFILE.tagline, body());
        doc.blank();
        doc.push(Line::from(vec![
            Span::styled("[3] View My Work", title().add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("[5] Get In Touch", body().add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("↓ scroll", muted()),
        ]));
        doc.blank();
    }

    fn featured_projects(&self, doc: &mut DocumentBuilder) {
        doc.heading("Featured Projects", title());
        doc.text(
            "Discover some of my recent work showcasing my skills in full-stack development, machine learning, and cloud technologies.",
            muted(),
        );
        doc.blank();
        filter_bar(doc, "Category", self.featured.category, "All Projects");
        doc.blank();

        let visible = self.featured.visible();
        if visible.is_empty() {
            doc.text("No projects in this category yet.", muted());
            doc.blank();
        }
        for (index, project) in visible.into_iter().enumerate() {
            if index == self.featured.selected {
                doc.focused(|doc| project_card(doc, project, true, false));
            } else {
                project_card(doc, project, false, false);
            }
        }
        if self.featured.category != FilterAxis::All {
            doc.text("Press r to show all projects.", muted());
            doc.blank();
        }
    }

    fn journey(&self, doc: &mut DocumentBuilder) {
        doc.heading("My Coding Journey", title());
        doc.text(
            "From curious beginner to passionate developer, here's how my journey in technology has evolved.",
            muted(),
        );
        doc.blank();
        for (index, entry) in TIMELINE.iter().enumerate() {
            let revealed = self.timeline.is_revealed(RegionId(index));
            let style = Style::default().fg(accent(entry.focus));
            doc.reveal_region(RegionId(index), revealed, |doc| {
                doc.push(Line::from(vec![
                    Span::styled("● ", style),
                    Span::styled(entry.year, style.add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(entry.title, Style::default().add_modifier(Modifier::BOLD)),
                ]));
                doc.indented(4, entry.description, body());
                doc.indented(4, &entry.technologies.join(" · "), style);
                doc.blank();
            });
        }

        doc.heading("Technical Proficiency", title());
        for skill in PROFICIENCY {
            doc.bar(skill.name, skill.level, title());
        }
    }
}
