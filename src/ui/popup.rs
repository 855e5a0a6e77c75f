//! Help popup overlay listing every key binding.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// `(key, what it does)` rows shown in the help popup.
const HELP_ROWS: &[(&str, &str)] = &[
    ("h a s g r b c", "Jump to a section"),
    ("Tab / Shift+Tab", "Focus next / previous widget"),
    ("↑/↓, PgUp/PgDn", "Scroll the page"),
    ("←/→", "Gallery cursor · carousel · pick-lists"),
    ("1-5", "Gallery category filter"),
    ("1-9", "Jump to a review (when focused)"),
    ("Enter", "Open photo / next field / submit"),
    ("Esc", "Close overlay / drop focus"),
    ("p m f i w", "Contact links (when focused)"),
    ("q / Ctrl+c", "Quit"),
];

/// Keybinding reference popup.
pub struct HelpPopup;

impl Widget for HelpPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (HELP_ROWS.len() as u16) + 5;
        let popup = centered_fixed(56, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Keys ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        for &(keys, what) in HELP_ROWS {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<18}"), Style::default().fg(Color::Yellow)),
                Span::styled(what, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Esc: close",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
