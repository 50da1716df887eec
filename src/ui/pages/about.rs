use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::{FOCUS_GOALS, LEARNING_PATH, PROFILE, SKILL_GROUPS, WHAT_I_DO};
use crate::ui::document::{Document, DocumentBuilder};
use crate::ui::reveal::{RegionId, RevealDriver, Viewport};
use crate::ui::theme::accent;

use super::widgets::{body, muted, title};
use super::PortfolioSettings;

/// Reveal sections of the about page, top to bottom.
pub const ABOUT_SECTIONS: usize = 4;

const HEADER: RegionId = RegionId(0);
const INTRO: RegionId = RegionId(1);
const SKILLS: RegionId = RegionId(2);
const JOURNEY: RegionId = RegionId(3);

#[derive(Debug)]
pub struct AboutView {
    sections: RevealDriver,
}

impl AboutView {
    pub fn mount(settings: &PortfolioSettings) -> Self {
        Self {
            sections: RevealDriver::mount(settings.about_threshold, ABOUT_SECTIONS),
        }
    }

    pub fn sections(&self) -> &RevealDriver {
        &self.sections
    }

    pub fn unmount(&mut self) {
        self.sections.unmount();
    }

    pub fn observe(&mut self, document: &Document, viewport: Viewport) {
        self.sections.sync(document.handles(ABOUT_SECTIONS), viewport);
    }

    pub fn document(&self, width: u16) -> Document {
        let mut doc = DocumentBuilder::new(width);
        doc.blank();

        doc.reveal_region(HEADER, self.sections.is_revealed(HEADER), |doc| {
            doc.heading("About Me", title());
            doc.text(
                "Passionate software engineer with a love for creating innovative solutions and exploring cutting-edge technologies.",
                muted(),
            );
            doc.blank();
        });

        doc.reveal_region(INTRO, self.sections.is_revealed(INTRO), |doc| {
            doc.push(Line::styled("Who I Am", title().add_modifier(Modifier::BOLD)));
            for paragraph in PROFILE.intro {
                doc.text(paragraph, body());
                doc.blank();
            }
            doc.push(Line::styled("What I Do", title().add_modifier(Modifier::BOLD)));
            for item in WHAT_I_DO {
                let style = Style::default().fg(accent(item.focus));
                doc.push(Line::from(vec![
                    Span::styled("◆ ", style),
                    Span::styled(item.title, style.add_modifier(Modifier::BOLD)),
                ]));
                doc.indented(4, item.detail, body());
            }
            doc.blank();
        });

        // Bars stay empty until the section has been seen.
        let skills_revealed = self.sections.is_revealed(SKILLS);
        doc.reveal_region(SKILLS, skills_revealed, |doc| {
            doc.heading("Technical Skills", title());
            for group in SKILL_GROUPS {
                doc.push(Line::styled(group.name, Style::default().add_modifier(Modifier::BOLD)));
                for skill in group.skills {
                    let level = if skills_revealed { skill.level } else { 0 };
                    doc.bar(skill.name, level, title());
                }
                doc.blank();
            }
        });

        doc.reveal_region(JOURNEY, self.sections.is_revealed(JOURNEY), |doc| {
            doc.heading("Learning Path", title());
            for (index, step) in LEARNING_PATH.iter().enumerate() {
                let style = Style::default().fg(accent(step.focus));
                doc.push(Line::from(vec![
                    Span::styled(format!("{}. ", index + 1), style),
                    Span::styled(step.title, style.add_modifier(Modifier::BOLD)),
                ]));
                doc.indented(4, step.detail, body());
            }
            doc.blank();
            doc.heading("Current Focus", title());
            for (heading, goals) in FOCUS_GOALS {
                doc.push(Line::styled(*heading, Style::default().add_modifier(Modifier::BOLD)));
                for goal in *goals {
                    doc.indented(2, &format!("• {goal}"), body());
                }
                doc.blank();
            }
        });

        doc.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill_rows(doc: &Document) -> Vec<String> {
        doc.lines()
            .iter()
            .map(|line| line.to_string())
            .filter(|text| text.starts_with("Python"))
            .collect()
    }

    #[test]
    fn skill_bars_fill_only_after_reveal() {
        let mut view = AboutView::mount(&PortfolioSettings::default());
        let hidden = view.document(100);
        assert!(skill_rows(&hidden).iter().all(|row| row.ends_with("  0%")));

        let region = hidden.region(SKILLS).expect("skills region laid out");
        view.observe(
            &hidden,
            Viewport {
                offset: region.top,
                height: region.height,
            },
        );
        assert!(view.sections().is_revealed(SKILLS));
        let shown = view.document(100);
        assert!(skill_rows(&shown).iter().all(|row| row.ends_with(" 90%")));
    }

    #[test]
    fn sections_far_below_the_fold_stay_hidden() {
        let mut view = AboutView::mount(&PortfolioSettings::default());
        let doc = view.document(100);
        view.observe(&doc, Viewport { offset: 0, height: 5 });
        assert!(view.sections().is_revealed(HEADER));
        assert!(!view.sections().is_revealed(JOURNEY));
    }
}
