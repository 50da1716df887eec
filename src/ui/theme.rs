use ratatui::style::Color;

use crate::content::{CertCategory, CertLevel, Focus, ProjectCategory, Status};

pub const BRAND: Color = Color::Rgb(0x22, 0xd3, 0xee);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const SCROLLED_BORDER: Color = Color::Rgb(0x22, 0xd3, 0xee);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BODY_TEXT: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const BAR_EMPTY: Color = Color::Rgb(0x37, 0x41, 0x51);

/// Accent palette. Every content enum maps onto it by exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Cyan,
    Purple,
    Green,
    Pink,
    Blue,
    Orange,
    Yellow,
}

impl Accent {
    pub fn color(self) -> Color {
        match self {
            Accent::Cyan => Color::Rgb(0x22, 0xd3, 0xee),
            Accent::Purple => Color::Rgb(0xa8, 0x55, 0xf7),
            Accent::Green => Color::Rgb(0x4a, 0xde, 0x80),
            Accent::Pink => Color::Rgb(0xf4, 0x72, 0xb6),
            Accent::Blue => Color::Rgb(0x60, 0xa5, 0xfa),
            Accent::Orange => Color::Rgb(0xfb, 0x92, 0x3c),
            Accent::Yellow => Color::Rgb(0xfa, 0xcc, 0x15),
        }
    }
}

impl From<ProjectCategory> for Accent {
    fn from(category: ProjectCategory) -> Self {
        match category {
            ProjectCategory::Web => Accent::Cyan,
            ProjectCategory::Backend => Accent::Purple,
            ProjectCategory::Ai => Accent::Pink,
            ProjectCategory::Devops => Accent::Green,
        }
    }
}

impl From<Status> for Accent {
    fn from(status: Status) -> Self {
        match status {
            Status::Completed => Accent::Green,
            Status::InProgress => Accent::Yellow,
            Status::Planned => Accent::Blue,
        }
    }
}

impl From<CertLevel> for Accent {
    fn from(level: CertLevel) -> Self {
        match level {
            CertLevel::Fundamental => Accent::Green,
            CertLevel::Associate => Accent::Blue,
            CertLevel::Professional => Accent::Purple,
            CertLevel::Expert => Accent::Orange,
        }
    }
}

impl From<CertCategory> for Accent {
    fn from(category: CertCategory) -> Self {
        match category {
            CertCategory::Cloud => Accent::Orange,
            CertCategory::Programming => Accent::Blue,
            CertCategory::Ai => Accent::Pink,
            CertCategory::Devops => Accent::Green,
            CertCategory::Database => Accent::Purple,
        }
    }
}

impl From<Focus> for Accent {
    fn from(focus: Focus) -> Self {
        match focus {
            Focus::Foundations => Accent::Cyan,
            Focus::FullStack => Accent::Purple,
            Focus::Cloud => Accent::Green,
            Focus::MachineLearning => Accent::Pink,
            Focus::Leadership => Accent::Cyan,
        }
    }
}

/// Accent color for anything with a mapping.
pub fn accent<T: Into<Accent>>(value: T) -> Color {
    value.into().color()
}
