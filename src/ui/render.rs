use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, content_rect, corner_rect, layout_regions};
use crate::ui::notice::{NoticeKind, NoticeState};
use crate::ui::pages::Page;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(&app.settings().name);
    frame.render_widget(header_widget.widget(app.page(), app.scrolled()), header);

    frame.render_widget(Clear, body);
    let document = app.document();
    let lines = document.window(app.viewport());
    frame.render_widget(Paragraph::new(lines), content_rect(body));

    let footer_widget = Footer::new(app.hints(), app.page())
        .with_scroll(app.scroll(), document.max_scroll(app.viewport_height()));
    frame.render_widget(footer_widget.widget(footer), footer);

    if app.menu_open() {
        draw_menu(frame, app, body);
    }
    if let NoticeState::Visible { kind, text } = app.notice() {
        draw_notice(frame, *kind, text, body);
    }
}

fn draw_menu(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let mut lines = Vec::new();
    for page in Page::ALL {
        let marker = if page == app.page() { "●" } else { " " };
        let mut line = Line::from(vec![
            Span::styled(format!(" {} ", page.index() + 1), Style::default().fg(HEADER_SEPARATOR)),
            Span::styled(format!("{:<16}", page.title()), Style::default().fg(HEADER_TEXT)),
            Span::styled(format!("/{:<15}", page.route()), Style::default().fg(HEADER_SEPARATOR)),
            Span::styled(marker, Style::default().fg(BRAND)),
        ]);
        if page == app.menu_selection() {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Up/Down: Move  Enter: Open  Esc: Close"));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4);
    let popup_height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(" Navigate ", Style::default().fg(BRAND)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}

fn draw_notice(frame: &mut Frame<'_>, kind: NoticeKind, text: &str, body: Rect) {
    let (title, color) = match kind {
        NoticeKind::Info => (" Info ", BRAND),
        NoticeKind::Success => (" Done ", STATUS_OK),
        NoticeKind::Error => (" Error ", STATUS_ERROR),
    };
    let max_width = body.width.saturating_sub(2).clamp(1, 60);
    let text_width = text.chars().count() as u16;
    let width = text_width.saturating_add(4).min(max_width);
    let inner = width.saturating_sub(2).max(1);
    let rows = text_width.div_ceil(inner).max(1);
    let area = corner_rect(body, width, rows.saturating_add(2));

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(color)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let widget = Paragraph::new(text.to_string())
        .style(Style::default().fg(HEADER_TEXT))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(widget, area);
}
