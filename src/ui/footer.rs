use crate::ui::pages::Page;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom bar: key hints on the left; route, scroll position and version on
/// the right.
pub struct Footer {
    hints: &'static str,
    page: Page,
    progress: Option<usize>,
}

impl Footer {
    pub fn new(hints: &'static str, page: Page) -> Self {
        Self {
            hints,
            page,
            progress: None,
        }
    }

    /// Show how far down the page is scrolled. Pages that fit the body show
    /// nothing.
    pub fn with_scroll(mut self, scroll: usize, max_scroll: usize) -> Self {
        self.progress = (max_scroll > 0).then(|| scroll.min(max_scroll) * 100 / max_scroll);
        self
    }

    fn status(&self) -> String {
        let route = match self.page {
            Page::Home => "/".to_string(),
            page => format!("/{}", page.route()),
        };
        match self.progress {
            Some(percent) => format!("{route} │ {percent:>3}% │ v{VERSION} "),
            None => format!("{route} │ v{VERSION} "),
        }
    }

    /// Content for `width` columns. Hints give way before the status does.
    fn line(&self, width: usize) -> Line<'static> {
        let status = self.status();
        // Count chars, not bytes: both halves contain box-drawing characters.
        let status_width = status.chars().count();
        let room = width.saturating_sub(status_width);
        let hints: String = self.hints.chars().take(room).collect();
        let padding = room - hints.chars().count();

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(status, text_style),
        ])
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let content_width = area.width.saturating_sub(2) as usize;

        Paragraph::new(self.line(content_width))
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
