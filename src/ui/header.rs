use crate::ui::pages::Page;
use crate::ui::theme::{BRAND, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, SCROLLED_BORDER};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Site nav bar: name plus numbered page tabs.
pub struct Header<'a> {
    name: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }

    /// Once the page is scrolled the bar gets a bright border, like the
    /// site's nav picking up a background.
    pub fn widget(&self, current: Page, scrolled: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default().fg(BRAND).add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(self.name.to_string(), Style::default().fg(BRAND).add_modifier(Modifier::BOLD)),
            Span::styled("  │ ", separator_style),
        ];
        for page in Page::ALL {
            let style = if page == current { active_style } else { text_style };
            spans.push(Span::styled(format!(" {} ", page.index() + 1), separator_style));
            spans.push(Span::styled(page.title(), style));
            spans.push(Span::raw(" "));
        }

        let border = if scrolled { SCROLLED_BORDER } else { GLOBAL_BORDER };
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(border)),
        )
    }
}
