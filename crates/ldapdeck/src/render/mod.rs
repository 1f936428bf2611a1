pub mod text;
pub mod tree;
pub mod view;

use eframe::egui::{self, FontId, Pos2, Stroke};

use crate::theme::Theme;

use view::{Body, SlideView};

/// Paint a slide card into `rect`.
pub fn render_slide(ui: &egui::Ui, view: &SlideView<'_>, theme: &Theme, rect: egui::Rect, scale: f32) {
    let painter = ui.painter();
    painter.rect_filled(rect, 24.0 * scale, theme.surface);
    painter.rect_stroke(
        rect,
        24.0 * scale,
        Stroke::new(1.0, theme.border),
        egui::StrokeKind::Inside,
    );

    let padding = 48.0 * scale;
    let content_rect = rect.shrink(padding);
    let width = content_rect.width();

    // Header
    let counter = text::draw_spaced_label(
        ui,
        &view.counter,
        content_rect.left_top(),
        theme.small_size * scale,
        Theme::with_opacity(theme.foreground, 0.6),
        false,
    );
    let mut y = counter.bottom() + 12.0 * scale;

    y += text::draw_text(
        ui,
        view.title,
        Pos2::new(content_rect.left(), y),
        FontId::proportional(theme.title_size * scale),
        theme.heading_color,
        width,
    );
    if let Some(subtitle) = view.subtitle {
        y += 8.0 * scale;
        y += text::draw_text(
            ui,
            subtitle,
            Pos2::new(content_rect.left(), y),
            FontId::proportional(theme.subtitle_size * scale),
            Theme::with_opacity(theme.foreground, 0.8),
            width,
        );
    }
    if let Some(highlight) = view.highlight {
        y += 12.0 * scale;
        y += text::draw_text(
            ui,
            highlight,
            Pos2::new(content_rect.left(), y),
            FontId::proportional(theme.body_size * 0.85 * scale),
            theme.accent,
            width,
        );
    }

    // Footer
    let footer_size = theme.small_size * 1.1 * scale;
    let footer_color = Theme::with_opacity(theme.foreground, 0.7);
    let footer_y = content_rect.bottom() - footer_size * 1.3;
    let label = painter.layout_no_wrap(
        view.footer.label.to_string(),
        FontId::proportional(footer_size),
        footer_color,
    );
    painter.galley(Pos2::new(content_rect.left(), footer_y), label, footer_color);
    let year = painter.layout_no_wrap(
        view.footer.year.to_string(),
        FontId::proportional(footer_size),
        footer_color,
    );
    painter.galley(
        Pos2::new(content_rect.right() - year.rect.width(), footer_y),
        year,
        footer_color,
    );

    // Body, vertically centered between header and footer
    let body_top = y + 24.0 * scale;
    let body_bottom = footer_y - 32.0 * scale;
    let body_height = measure_body(ui, &view.body, theme, width, scale);
    let body_y = body_top + ((body_bottom - body_top - body_height) / 2.0).max(0.0);
    draw_body(ui, &view.body, theme, Pos2::new(content_rect.left(), body_y), width, scale);
}

const LIST_GAP: f32 = 16.0;
const COLUMN_GAP: f32 = 32.0;
const SECTION_GAP: f32 = 24.0;

fn measure_body(ui: &egui::Ui, body: &Body<'_>, theme: &Theme, width: f32, scale: f32) -> f32 {
    match body {
        Body::List { bullets } => {
            text::measure_bullets(ui, bullets, theme, width, LIST_GAP * scale, scale)
        }
        Body::Graphic { bullets } => {
            text::measure_bullets(ui, bullets, theme, width, LIST_GAP * 0.75 * scale, scale)
                + SECTION_GAP * scale
                + tree::height(scale)
        }
        Body::Split { primary, secondary } => {
            let column_width = (width - COLUMN_GAP * scale) / 2.0;
            let heading = theme.body_size * 1.1 * scale + 12.0 * scale;
            let list = |bullets: &[&str]| {
                text::measure_bullets(ui, bullets, theme, column_width, LIST_GAP * 0.75 * scale, scale)
            };
            heading + list(primary.bullets).max(list(secondary.bullets))
        }
    }
}

fn draw_body(ui: &egui::Ui, body: &Body<'_>, theme: &Theme, pos: Pos2, width: f32, scale: f32) {
    match body {
        Body::List { bullets } => {
            text::draw_bullets(ui, bullets, theme, pos, width, LIST_GAP * scale, scale);
        }
        Body::Graphic { bullets } => {
            let h = text::draw_bullets(ui, bullets, theme, pos, width, LIST_GAP * 0.75 * scale, scale);
            let tree_width = width.min(900.0 * scale);
            let tree_x = pos.x + (width - tree_width) / 2.0;
            tree::draw(
                ui,
                theme,
                Pos2::new(tree_x, pos.y + h + SECTION_GAP * scale),
                tree_width,
                scale,
            );
        }
        Body::Split { primary, secondary } => {
            let column_width = (width - COLUMN_GAP * scale) / 2.0;
            for (i, column) in [primary, secondary].into_iter().enumerate() {
                let x = pos.x + i as f32 * (column_width + COLUMN_GAP * scale);
                let h = text::draw_text(
                    ui,
                    column.heading,
                    Pos2::new(x, pos.y),
                    FontId::proportional(theme.body_size * 1.1 * scale),
                    theme.accent_soft,
                    column_width,
                );
                text::draw_bullets(
                    ui,
                    column.bullets,
                    theme,
                    Pos2::new(x, pos.y + h + 12.0 * scale),
                    column_width,
                    LIST_GAP * 0.75 * scale,
                    scale,
                );
            }
        }
    }
}
