//! Gallery section — filter tabs and the photo grid.

use ratatui::text::{Line, Span};

use crate::core::clinic::GalleryImage;
use crate::core::gallery::{CategoryFilter, GalleryState};
use crate::ui::text::truncate;
use crate::ui::theme::Theme;

/// Cards per grid row; the key handler moves the cursor by this much on ↑/↓.
pub const GRID_COLS: usize = 3;

pub fn lines(
    images: &[GalleryImage],
    state: &GalleryState,
    focused: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    out.push(Line::from(Span::styled(
        "── Clinic Gallery ──",
        Theme::section_title_style(),
    )));
    out.push(Line::raw(""));

    // Filter tabs with digit hints and per-tab counts.
    let mut tabs: Vec<Span<'static>> = Vec::new();
    for (i, &filter) in CategoryFilter::ALL.iter().enumerate() {
        let count = match filter {
            CategoryFilter::All => images.len(),
            CategoryFilter::Only(cat) => {
                images.iter().filter(|img| img.category == cat).count()
            }
        };
        let label = format!(" [{}] {} ({}) ", i + 1, filter.label(), count);
        let style = if filter == state.filter {
            Theme::tab_active_style()
        } else {
            Theme::tab_inactive_style()
        };
        tabs.push(Span::styled(label, style));
        tabs.push(Span::raw(" "));
    }
    out.push(Line::from(tabs));
    out.push(Line::raw(""));

    let filtered = state.filtered(images);
    if filtered.is_empty() {
        out.push(Line::from(Span::styled(
            "No images found for this category.",
            Theme::dim_style(),
        )));
        out.push(Line::raw(""));
        return out;
    }

    // Card grid, GRID_COLS per row.  Two text rows per card: title and a dim
    // category/alt row.
    let card_w = (width.saturating_sub((GRID_COLS - 1) * 2) / GRID_COLS).max(12);
    for (row_idx, chunk) in filtered.chunks(GRID_COLS).enumerate() {
        let mut title_spans: Vec<Span<'static>> = Vec::new();
        let mut detail_spans: Vec<Span<'static>> = Vec::new();

        for (col_idx, img) in chunk.iter().enumerate() {
            let flat_idx = row_idx * GRID_COLS + col_idx;
            let selected = focused && flat_idx == state.cursor;

            let title = img.title.unwrap_or(img.alt);
            let marker = if selected { "▸" } else { "◦" };
            let title_text = format!(
                "{:<width$}",
                truncate(&format!("{marker} {title}"), card_w),
                width = card_w
            );
            let detail_text = format!(
                "{:<width$}",
                truncate(&format!("  {}", img.category.label()), card_w),
                width = card_w
            );

            let title_style = if selected {
                Theme::selected_style()
            } else {
                Theme::body_style()
            };
            title_spans.push(Span::styled(title_text, title_style));
            title_spans.push(Span::raw("  "));
            detail_spans.push(Span::styled(detail_text, Theme::dim_style()));
            detail_spans.push(Span::raw("  "));
        }

        out.push(Line::from(title_spans));
        out.push(Line::from(detail_spans));
        out.push(Line::raw(""));
    }

    let hint = if focused {
        "←/→/↑/↓ select · Enter view · 1-5 filter"
    } else {
        "press g (or Tab) to browse the gallery"
    };
    out.push(Line::from(Span::styled(hint, Theme::dim_style())));

    out
}
