//! Static portfolio content.
//!
//! Everything here is fixed, compiled-in data. Pages only filter and draw it.

mod certifications;
mod journey;
mod profile;
mod projects;

pub use certifications::{CertCategory, CertLevel, Certification, RoadmapStep, CERTIFICATIONS, ROADMAP};
pub use journey::{
    Focus, LearningStep, Skill, SkillGroup, TimelineEntry, FOCUS_GOALS, LEARNING_PATH,
    PROFICIENCY, SKILL_GROUPS, TIMELINE, WHAT_I_DO,
};
pub use profile::{
    ContactChannel, Faq, Profile, SocialLink, AVAILABILITY, BEST_TIMES, CONTACT_CHANNELS, FAQS,
    PROFILE, SOCIAL_LINKS,
};
pub use projects::{Project, ProjectCategory, PROJECTS};

use crate::ui::filter::Choice;

/// Progress of a project or certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Completed,
    InProgress,
    Planned,
}

impl Choice for Status {
    const ALL: &'static [Self] = &[Status::Completed, Status::InProgress, Status::Planned];

    fn label(self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::InProgress => "In Progress",
            Status::Planned => "Planned",
        }
    }
}

impl Status {
    pub fn badge(self) -> &'static str {
        match self {
            Status::Completed => "COMPLETED",
            Status::InProgress => "IN PROGRESS",
            Status::Planned => "PLANNED",
        }
    }
}

/// Number of items per status, for the stats panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub completed: usize,
    pub in_progress: usize,
    pub planned: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.completed + self.in_progress + self.planned
    }
}

pub fn status_counts<I>(statuses: I) -> StatusCounts
where
    I: IntoIterator<Item = Status>,
{
    statuses
        .into_iter()
        .fold(StatusCounts::default(), |mut counts, status| {
            match status {
                Status::Completed => counts.completed += 1,
                Status::InProgress => counts.in_progress += 1,
                Status::Planned => counts.planned += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certification_counts_match_catalog() {
        let counts = status_counts(CERTIFICATIONS.iter().map(|cert| cert.status));
        assert_eq!(counts.total(), CERTIFICATIONS.len());
        assert_eq!(counts.completed, 0);
        assert_eq!(counts.in_progress, 1);
        assert_eq!(counts.planned, 5);
    }

    #[test]
    fn project_ids_are_unique() {
        let mut ids: Vec<u32> = PROJECTS.iter().map(|project| project.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn skill_levels_are_percentages() {
        let all = SKILL_GROUPS
            .iter()
            .flat_map(|group| group.skills.iter())
            .chain(PROFICIENCY.iter());
        for skill in all {
            assert!(skill.level <= 100, "{} is above 100%", skill.name);
        }
    }
}
