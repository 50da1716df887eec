use std::collections::BTreeSet;

use crossterm::event::KeyEvent;
use ratatui::style::Style;

use crate::content::{status_counts, Project, Status, PROJECTS};
use crate::ui::document::{Document, DocumentBuilder};
use crate::ui::filter::{FilterReducer, FilterState};
use crate::ui::mvi;
use crate::ui::theme::{accent, BRAND};

use super::widgets::{body, filter_bar, filter_intent, is_copy_key, muted, project_card, stats_line, title};
use super::PageAction;

#[derive(Debug)]
pub struct ProjectsView {
    filter: FilterState<Project>,
}

impl ProjectsView {
    pub fn mount() -> Self {
        Self {
            filter: FilterState::new(PROJECTS),
        }
    }

    pub fn filter(&self) -> &FilterState<Project> {
        &self.filter
    }

    pub fn on_key(&mut self, key: KeyEvent) -> PageAction {
        if is_copy_key(&key) {
            return match self.filter.selected_item() {
                Some(project) => PageAction::Copy {
                    what: project.title.to_string(),
                    text: project.primary_url().to_string(),
                },
                None => PageAction::None,
            };
        }
        if let Some(intent) = filter_intent(&key, true) {
            mvi::dispatch::<FilterReducer<Project>>(&mut self.filter, intent);
        }
        PageAction::None
    }

    pub fn document(&self, width: u16) -> Document {
        let mut doc = DocumentBuilder::new(width);
        doc.blank();
        doc.heading("My Projects", title());
        doc.text(
            "A showcase of my work spanning web development, machine learning, and cloud infrastructure. Each project represents a step in my journey of continuous learning and innovation.",
            muted(),
        );
        doc.blank();

        filter_bar(&mut doc, "Category", self.filter.category, "All Projects");
        filter_bar(&mut doc, "Status", self.filter.status, "All Status");
        let visible = self.filter.visible();
        doc.text(
            &format!("Showing {} of {} projects", visible.len(), self.filter.items.len()),
            muted(),
        );
        doc.blank();

        if visible.is_empty() {
            doc.text("No projects match these filters. Press r to reset.", muted());
            doc.blank();
        }
        for (index, project) in visible.into_iter().enumerate() {
            if index == self.filter.selected {
                doc.focused(|doc| project_card(doc, project, true, true));
            } else {
                project_card(&mut doc, project, false, true);
            }
        }

        doc.heading("Project Stats", title());
        let counts = status_counts(PROJECTS.iter().map(|project| project.status));
        let technologies: BTreeSet<&str> = PROJECTS
            .iter()
            .flat_map(|project| project.technologies.iter().copied())
            .collect();
        stats_line(
            &mut doc,
            &[
                (counts.completed, "Completed", Style::default().fg(accent(Status::Completed))),
                (counts.in_progress, "In Progress", Style::default().fg(accent(Status::InProgress))),
                (counts.planned, "Planned", Style::default().fg(accent(Status::Planned))),
                (technologies.len(), "Technologies Used", Style::default().fg(BRAND)),
            ],
        );
        doc.blank();
        doc.text(
            "Interested in working together? Press 5 to get in touch.",
            body(),
        );
        doc.finish()
    }
}
