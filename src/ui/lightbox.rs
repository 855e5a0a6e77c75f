//! Full-screen photo lightbox overlay.
//!
//! Renders the selected gallery record centred on the terminal with
//! navigation arrows, a close button, and a position indicator ("3 / 7").
//! There is no pixel rendering — gallery entries are records with remote
//! URLs, so the viewer shows the record: title, category, caption, source.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::core::clinic::GalleryImage;
use crate::ui::text::{truncate, wrap};
use crate::ui::theme::Theme;

/// The lightbox overlay widget.
pub struct LightboxWidget<'a> {
    /// The image under the viewer, if the filtered sequence is non-empty.
    pub image: Option<&'a GalleryImage>,
    /// Position within the filtered sequence (0-based).
    pub index: usize,
    /// Filtered sequence length.
    pub total: usize,
}

/// Clickable regions returned after rendering, for mouse hit-testing.
#[derive(Debug, Clone, Copy)]
pub struct LightboxHitZones {
    pub close_rect: Rect,
    pub prev_rect: Rect,
    pub next_rect: Rect,
}

impl<'a> LightboxWidget<'a> {
    /// Compute the overlay area (centred, 80% of terminal).
    fn overlay_area(terminal: Rect) -> Rect {
        let margin_x = (terminal.width as f32 * 0.1).round() as u16;
        let margin_y = (terminal.height as f32 * 0.1).round() as u16;
        Rect::new(
            terminal.x + margin_x,
            terminal.y + margin_y,
            terminal.width.saturating_sub(margin_x * 2).max(24),
            terminal.height.saturating_sub(margin_y * 2).max(10),
        )
    }

    /// Render and return hit zones for mouse interaction.
    pub fn render_and_hit(self, terminal_area: Rect, buf: &mut Buffer) -> LightboxHitZones {
        let area = Self::overlay_area(terminal_area);

        // Clear the background.
        Clear.render(area, buf);

        let title = match self.image {
            Some(img) => format!(
                " {} — {}/{} ",
                img.title.unwrap_or(img.alt),
                self.index + 1,
                self.total,
            ),
            None => " No photos in this category ".to_string(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightBlue))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        block.render(area, buf);

        // Close button [X] on the top-right corner of the border.
        let close_rect = Rect::new(area.x + area.width.saturating_sub(5), area.y, 3, 1);
        Paragraph::new(Line::from(Span::styled(
            "[X]",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )))
        .render(close_rect, buf);

        // Navigation arrows on the left/right edges (vertically centred).
        // Navigation wraps, so both arrows show whenever there is anywhere
        // to go.
        let arrow_y = area.y + area.height / 2;
        let prev_rect = Rect::new(area.x, arrow_y, 3, 1);
        let next_rect = Rect::new(area.x + area.width.saturating_sub(3), arrow_y, 3, 1);

        if self.total > 1 {
            Paragraph::new(Line::from(Span::styled(
                " ◀",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )))
            .render(prev_rect, buf);
            Paragraph::new(Line::from(Span::styled(
                "▶ ",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )))
            .render(next_rect, buf);
        }

        // Record body: category badge, caption, source URL.
        if let Some(img) = self.image {
            let content_area = Rect::new(
                inner.x.saturating_add(3),
                inner.y + 1,
                inner.width.saturating_sub(6),
                inner.height.saturating_sub(3),
            );
            if content_area.width > 4 && content_area.height > 3 {
                let mut lines = vec![
                    Line::from(Span::styled(
                        format!("[{}]", img.category.label()),
                        Theme::tab_active_style(),
                    )),
                    Line::raw(""),
                ];
                for row in wrap(img.alt, content_area.width as usize) {
                    lines.push(Line::from(Span::styled(row, Theme::body_style())));
                }
                lines.push(Line::raw(""));
                lines.push(Line::from(Span::styled(
                    truncate(img.src, content_area.width as usize),
                    Theme::dim_style(),
                )));
                Paragraph::new(lines).render(content_area, buf);
            }
        }

        // Footer hint.
        let footer = Line::from(Span::styled(
            " ←/→ navigate   1-5 filter   Esc close ",
            Style::default().fg(Color::DarkGray),
        ));
        let footer_y = inner.y + inner.height.saturating_sub(1);
        Paragraph::new(vec![footer]).render(Rect::new(inner.x, footer_y, inner.width, 1), buf);

        LightboxHitZones {
            close_rect,
            prev_rect,
            next_rect,
        }
    }
}
