use eframe::egui::{self, Color32, FontId, Pos2};

use crate::theme::Theme;

/// Layout and paint wrapped text, returning the height used.
pub fn draw_text(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    font: FontId,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = ui
        .painter()
        .layout(text.to_string(), font, color, max_width);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Height `text` would occupy when wrapped to `max_width`.
pub fn measure_text(ui: &egui::Ui, text: &str, font: FontId, max_width: f32) -> f32 {
    ui.painter()
        .layout(text.to_string(), font, Color32::WHITE, max_width)
        .rect
        .height()
}

/// Draw a disc-bulleted list. Returns height used.
pub fn draw_bullets(
    ui: &egui::Ui,
    bullets: &[&str],
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    gap: f32,
    scale: f32,
) -> f32 {
    let size = theme.body_size * scale;
    let color = Theme::with_opacity(theme.foreground, 0.9);
    let indent = 22.0 * scale;
    let mut y = pos.y;

    for (i, bullet) in bullets.iter().enumerate() {
        if i > 0 {
            y += gap;
        }
        let dot_center = Pos2::new(pos.x + 6.0 * scale, y + size * 0.6);
        ui.painter().circle_filled(dot_center, 3.0 * scale, color);
        y += draw_text(
            ui,
            bullet,
            Pos2::new(pos.x + indent, y),
            FontId::proportional(size),
            color,
            max_width - indent,
        );
    }

    y - pos.y
}

/// Height of a bulleted list as drawn by `draw_bullets`.
pub fn measure_bullets(
    ui: &egui::Ui,
    bullets: &[&str],
    theme: &Theme,
    max_width: f32,
    gap: f32,
    scale: f32,
) -> f32 {
    let font = FontId::proportional(theme.body_size * scale);
    let indent = 22.0 * scale;
    let lines: f32 = bullets
        .iter()
        .map(|b| measure_text(ui, b, font.clone(), max_width - indent))
        .sum();
    lines + gap * bullets.len().saturating_sub(1) as f32
}

/// Uppercase label with wide letter spacing, as used in the top bar and
/// the slide header. Returns the painted rect.
pub fn draw_spaced_label(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    size: f32,
    color: Color32,
    align_right: bool,
) -> egui::Rect {
    let mut job = egui::text::LayoutJob::default();
    job.append(
        &text.to_uppercase(),
        0.0,
        egui::text::TextFormat {
            font_id: FontId::proportional(size),
            color,
            extra_letter_spacing: size * 0.3,
            ..Default::default()
        },
    );
    let galley = ui.painter().layout_job(job);
    let x = if align_right {
        pos.x - galley.rect.width()
    } else {
        pos.x
    };
    let rect = egui::Rect::from_min_size(Pos2::new(x, pos.y), galley.rect.size());
    ui.painter().galley(rect.min, galley, color);
    rect
}
