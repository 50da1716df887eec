use crossterm::event::KeyEvent;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::{status_counts, Certification, Status, CERTIFICATIONS, ROADMAP};
use crate::ui::document::{Document, DocumentBuilder};
use crate::ui::filter::{FilterReducer, FilterState};
use crate::ui::mvi;
use crate::ui::notice::NoticeKind;
use crate::ui::theme::{accent, BRAND};

use super::widgets::{
    body, certification_card, filter_bar, filter_intent, is_copy_key, muted, stats_line, title,
};
use super::PageAction;

#[derive(Debug)]
pub struct CertificationsView {
    filter: FilterState<Certification>,
}

impl CertificationsView {
    pub fn mount() -> Self {
        Self {
            filter: FilterState::new(CERTIFICATIONS),
        }
    }

    pub fn filter(&self) -> &FilterState<Certification> {
        &self.filter
    }

    pub fn on_key(&mut self, key: KeyEvent) -> PageAction {
        if is_copy_key(&key) {
            return match self.filter.selected_item() {
                Some(Certification {
                    title,
                    credential_url: Some(url),
                    ..
                }) => PageAction::Copy {
                    what: title.to_string(),
                    text: url.to_string(),
                },
                Some(cert) => PageAction::Notice {
                    kind: NoticeKind::Info,
                    text: format!("No credential link yet for {}", cert.title),
                },
                None => PageAction::None,
            };
        }
        if let Some(intent) = filter_intent(&key, true) {
            mvi::dispatch::<FilterReducer<Certification>>(&mut self.filter, intent);
        }
        PageAction::None
    }

    pub fn document(&self, width: u16) -> Document {
        let mut doc = DocumentBuilder::new(width);
        doc.blank();
        doc.heading("Certifications & Learning", title());
        doc.text(
            "My commitment to continuous learning through professional certifications and structured learning paths in cloud computing, AI, and software development.",
            muted(),
        );
        doc.blank();

        let counts = status_counts(CERTIFICATIONS.iter().map(|cert| cert.status));
        stats_line(
            &mut doc,
            &[
                (counts.completed, "Completed", Style::default().fg(accent(Status::Completed))),
                (counts.in_progress, "In Progress", Style::default().fg(accent(Status::InProgress))),
                (counts.planned, "Planned", Style::default().fg(accent(Status::Planned))),
                (counts.total(), "Total Goals", Style::default().fg(BRAND)),
            ],
        );
        doc.blank();

        filter_bar(&mut doc, "Category", self.filter.category, "All Categories");
        filter_bar(&mut doc, "Status", self.filter.status, "All Status");
        doc.blank();

        let visible = self.filter.visible();
        if visible.is_empty() {
            doc.text("No certifications match these filters. Press r to reset.", muted());
            doc.blank();
        }
        for (index, cert) in visible.into_iter().enumerate() {
            if index == self.filter.selected {
                doc.focused(|doc| certification_card(doc, cert, true));
            } else {
                certification_card(&mut doc, cert, false);
            }
        }

        doc.heading("Learning Roadmap", title());
        for step in ROADMAP {
            doc.push(Line::from(vec![
                Span::styled("◆ ", title()),
                Span::styled(step.period, Style::default().add_modifier(Modifier::BOLD)),
            ]));
            for goal in step.goals {
                doc.indented(4, goal, body());
            }
        }
        doc.finish()
    }
}
