//! Page documents: pre-wrapped lines plus the extents of observed regions.
//!
//! A page is laid out once per frame for the current body width. The same
//! document is drawn and handed to the reveal observer, so region handles
//! always match what is on screen.

use std::collections::BTreeMap;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::reveal::{RegionHandle, RegionId, Viewport};
use crate::ui::theme::BAR_EMPTY;

#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<Line<'static>>,
    regions: BTreeMap<RegionId, RegionHandle>,
    focus: Option<RegionHandle>,
}

impl Document {
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Extent of a region; `None` when it rendered to zero rows.
    pub fn region(&self, id: RegionId) -> Option<RegionHandle> {
        self.regions.get(&id).copied()
    }

    /// Handles for regions `0..count`, attached or not.
    pub fn handles(&self, count: usize) -> Vec<(RegionId, Option<RegionHandle>)> {
        (0..count)
            .map(|index| (RegionId(index), self.region(RegionId(index))))
            .collect()
    }

    /// Extent of the selected card, if the page has one.
    pub fn focus(&self) -> Option<RegionHandle> {
        self.focus
    }

    /// Lines inside `viewport`.
    pub fn window(&self, viewport: Viewport) -> Vec<Line<'static>> {
        self.lines
            .iter()
            .skip(viewport.offset)
            .take(viewport.height)
            .cloned()
            .collect()
    }

    pub fn max_scroll(&self, viewport_height: usize) -> usize {
        self.height().saturating_sub(viewport_height)
    }
}

pub struct DocumentBuilder {
    width: usize,
    lines: Vec<Line<'static>>,
    regions: BTreeMap<RegionId, RegionHandle>,
    focus: Option<RegionHandle>,
}

impl DocumentBuilder {
    pub fn new(width: u16) -> Self {
        Self {
            width: usize::from(width).max(1),
            lines: Vec::new(),
            regions: BTreeMap::new(),
            focus: None,
        }
    }

    pub fn push(&mut self, line: Line<'static>) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.push(Line::default())
    }

    /// Word-wrapped paragraph.
    pub fn text(&mut self, text: &str, style: Style) -> &mut Self {
        self.indented(0, text, style)
    }

    pub fn indented(&mut self, indent: usize, text: &str, style: Style) -> &mut Self {
        let pad = " ".repeat(indent);
        for row in wrap(text, self.width.saturating_sub(indent)) {
            self.lines
                .push(Line::from(vec![Span::raw(pad.clone()), Span::styled(row, style)]));
        }
        self
    }

    pub fn heading(&mut self, title: &str, style: Style) -> &mut Self {
        let width = title.chars().count().min(self.width);
        self.push(Line::styled(title.to_string(), style.add_modifier(Modifier::BOLD)));
        self.push(Line::styled("─".repeat(width), style))
    }

    /// Labelled percentage bar.
    pub fn bar(&mut self, label: &str, percent: u8, style: Style) -> &mut Self {
        let percent = percent.min(100);
        let label_width = 24.min(self.width / 2);
        let bar_width = self.width.saturating_sub(label_width + 8).clamp(1, 40);
        let filled = bar_width * usize::from(percent) / 100;
        let label: String = label.chars().take(label_width).collect();
        self.push(Line::from(vec![
            Span::raw(format!("{label:<label_width$} ")),
            Span::styled("█".repeat(filled), style),
            Span::styled("░".repeat(bar_width - filled), Style::default().fg(BAR_EMPTY)),
            Span::raw(format!(" {percent:>3}%")),
        ]))
    }

    /// Record the rows produced by `build` as region `id`.
    pub fn region(&mut self, id: RegionId, build: impl FnOnce(&mut Self)) -> &mut Self {
        let top = self.lines.len();
        build(self);
        let height = self.lines.len() - top;
        if height > 0 {
            self.regions.insert(id, RegionHandle { top, height });
        }
        self
    }

    /// Like [`region`](Self::region), dimming the rows until `revealed`.
    pub fn reveal_region(
        &mut self,
        id: RegionId,
        revealed: bool,
        build: impl FnOnce(&mut Self),
    ) -> &mut Self {
        let top = self.lines.len();
        self.region(id, build);
        if !revealed {
            for line in &mut self.lines[top..] {
                let faded = std::mem::take(line).patch_style(Style::default().add_modifier(Modifier::DIM));
                *line = faded;
            }
        }
        self
    }

    /// Record the rows produced by `build` as the selected card.
    pub fn focused(&mut self, build: impl FnOnce(&mut Self)) -> &mut Self {
        let top = self.lines.len();
        build(self);
        let height = self.lines.len() - top;
        if height > 0 {
            self.focus = Some(RegionHandle { top, height });
        }
        self
    }

    pub fn finish(self) -> Document {
        Document {
            lines: self.lines,
            regions: self.regions,
            focus: self.focus,
        }
    }
}

/// Greedy word wrap by character count. Hard line breaks are kept; words
/// longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for paragraph in text.split('\n') {
        let mut row = String::new();
        let mut row_len = 0;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if row_len > 0 {
                    rows.push(std::mem::take(&mut row));
                    row_len = 0;
                }
                let rest = word.split_off(width);
                rows.push(word.into_iter().collect());
                word = rest;
            }
            let needed = if row_len == 0 { word.len() } else { row_len + 1 + word.len() };
            if needed > width {
                rows.push(std::mem::take(&mut row));
                row_len = 0;
            }
            if row_len > 0 {
                row.push(' ');
                row_len += 1;
            }
            row.extend(word.iter());
            row_len += word.len();
        }
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn wrap_keeps_hard_breaks_and_splits_long_words() {
        assert_eq!(wrap("ab\ncd", 10), vec!["ab", "cd"]);
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn wrap_counts_characters_not_bytes() {
        assert_eq!(wrap("héllo wörld", 5), vec!["héllo", "wörld"]);
    }

    #[test]
    fn regions_record_their_extent() {
        let mut builder = DocumentBuilder::new(40);
        builder.blank();
        builder.region(RegionId(0), |b| {
            b.text("one", Style::default()).text("two", Style::default());
        });
        builder.region(RegionId(1), |_| {});
        let doc = builder.finish();
        assert_eq!(doc.region(RegionId(0)), Some(RegionHandle { top: 1, height: 2 }));
        assert_eq!(doc.region(RegionId(1)), None);
        assert_eq!(
            doc.handles(2),
            vec![
                (RegionId(0), Some(RegionHandle { top: 1, height: 2 })),
                (RegionId(1), None)
            ]
        );
    }

    #[test]
    fn unrevealed_region_keeps_its_height() {
        let mut hidden = DocumentBuilder::new(40);
        hidden.reveal_region(RegionId(0), false, |b| {
            b.text("content", Style::default());
        });
        let mut shown = DocumentBuilder::new(40);
        shown.reveal_region(RegionId(0), true, |b| {
            b.text("content", Style::default());
        });
        assert_eq!(hidden.finish().height(), shown.finish().height());
    }

    #[test]
    fn window_clips_to_viewport() {
        let mut builder = DocumentBuilder::new(10);
        for n in 0..10 {
            builder.text(&n.to_string(), Style::default());
        }
        let doc = builder.finish();
        assert_eq!(doc.window(Viewport { offset: 8, height: 5 }).len(), 2);
        assert_eq!(doc.max_scroll(4), 6);
    }
}
