use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::{Certification, Project, Status};
use crate::ui::document::DocumentBuilder;
use crate::ui::filter::{Choice, FilterAxis, FilterIntent};
use crate::ui::theme::{accent, ACTIVE_HIGHLIGHT, BODY_TEXT, BRAND, HEADER_TEXT, MUTED_TEXT};

pub fn body() -> Style {
    Style::default().fg(BODY_TEXT)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED_TEXT)
}

pub fn title() -> Style {
    Style::default().fg(BRAND)
}

/// `[ LABEL ]` chip in the given accent.
pub fn badge(text: &str, style: Style) -> Span<'static> {
    Span::styled(format!("[{text}]"), style.add_modifier(Modifier::BOLD))
}

/// One row of filter chips: `All` followed by every variant.
pub fn filter_bar<T: Choice>(
    builder: &mut DocumentBuilder,
    label: &str,
    axis: FilterAxis<T>,
    all_label: &'static str,
) {
    let options = std::iter::once(FilterAxis::All).chain(T::ALL.iter().map(|v| FilterAxis::Only(*v)));
    let mut spans = vec![Span::styled(format!("{label:<10}"), muted())];
    for option in options {
        let text = option.label(all_label);
        if option == axis {
            spans.push(Span::styled(
                format!(" {text} "),
                Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(format!(" {text} "), muted()));
        }
    }
    builder.push(Line::from(spans));
}

/// Map list-page keys onto filter intents.
pub fn filter_intent<C: Choice, S: Choice>(
    key: &KeyEvent,
    with_status: bool,
) -> Option<FilterIntent<C, S>> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('c') => Some(FilterIntent::NextCategory),
        KeyCode::Char('C') => Some(FilterIntent::PrevCategory),
        KeyCode::Char('s') if with_status => Some(FilterIntent::NextStatus),
        KeyCode::Char('r') => Some(FilterIntent::Reset),
        KeyCode::Right | KeyCode::Char('l') => Some(FilterIntent::SelectNext),
        KeyCode::Left | KeyCode::Char('h') => Some(FilterIntent::SelectPrev),
        _ => None,
    }
}

pub fn is_copy_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('y') && !key.modifiers.contains(KeyModifiers::CONTROL)
}

fn card_title(title: &str, selected: bool, style: Style, status: Status) -> Line<'static> {
    let marker = if selected { "▶ " } else { "  " };
    let line = Line::from(vec![
        Span::styled(marker, title_style(selected)),
        Span::styled(title.to_string(), style.add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        badge(status.badge(), Style::default().fg(accent(status))),
    ]);
    if selected {
        line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
    } else {
        line
    }
}

fn title_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(BRAND)
    } else {
        Style::default()
    }
}

/// Project card. `detailed` adds highlights and links.
pub fn project_card(builder: &mut DocumentBuilder, project: &Project, selected: bool, detailed: bool) {
    let category_style = Style::default().fg(accent(project.category));
    builder.push(card_title(project.title, selected, category_style, project.status));
    builder.indented(4, project.category.label(), category_style);
    builder.indented(4, project.description, body());
    builder.indented(4, &format!("Tech: {}", project.technologies.join(" · ")), muted());
    if detailed {
        for highlight in project.highlights {
            builder.indented(4, &format!("• {highlight}"), body());
        }
        builder.indented(4, &format!("Code: {}", project.github_url), muted());
        if let Some(live) = project.live_url {
            builder.indented(4, &format!("Live: {live}"), muted());
        }
    }
    builder.blank();
}

pub fn certification_card(builder: &mut DocumentBuilder, cert: &Certification, selected: bool) {
    let category_style = Style::default().fg(accent(cert.category));
    builder.push(card_title(cert.title, selected, category_style, cert.status));
    builder.push(Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("{} · {}  ", cert.issuer, cert.date), muted()),
        badge(cert.level.badge(), Style::default().fg(accent(cert.level))),
    ]));
    builder.indented(4, cert.category.label(), category_style);
    builder.indented(4, cert.description, body());
    builder.indented(4, &format!("Skills: {}", cert.skills.join(" · ")), muted());
    if let Some(url) = cert.credential_url {
        builder.indented(4, &format!("Credential: {url}"), muted());
    }
    builder.blank();
}

/// Row of `value label` stats.
pub fn stats_line(builder: &mut DocumentBuilder, stats: &[(usize, &str, Style)]) {
    let mut spans = Vec::new();
    for (index, (value, label, style)) in stats.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("   │   ", muted()));
        }
        spans.push(Span::styled(value.to_string(), style.add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(format!(" {label}"), body()));
    }
    builder.push(Line::from(spans));
}
