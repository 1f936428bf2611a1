//! The fixed directory tree shown by graphic slides.

use eframe::egui::{self, FontId, Pos2, Stroke};

use crate::render::text;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeNode {
    pub label: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch {
    pub unit: &'static str,
    pub entry: TreeNode,
}

pub const ROOT: TreeNode = TreeNode {
    label: "Root",
    detail: "dc=schule,dc=de",
};

pub const BRANCHES: [Branch; 4] = [
    Branch {
        unit: "ou=users",
        entry: TreeNode {
            label: "cn=Max Muster",
            detail: "uid=mmuster, mail=max.muster@schule.de",
        },
    },
    Branch {
        unit: "ou=groups",
        entry: TreeNode {
            label: "cn=Admins",
            detail: "member: cn=Max Muster",
        },
    },
    Branch {
        unit: "ou=devices",
        entry: TreeNode {
            label: "cn=Notebook-01",
            detail: "device=Windows",
        },
    },
    Branch {
        unit: "ou=policies",
        entry: TreeNode {
            label: "cn=PasswordPolicy",
            detail: "pwdMinLength=12",
        },
    },
];

const ROOT_BOX_HEIGHT: f32 = 52.0;
const UNIT_BOX_HEIGHT: f32 = 36.0;
const ENTRY_BOX_HEIGHT: f32 = 62.0;
const TRUNK: f32 = 40.0;
const STEM: f32 = 32.0;

/// Total height the diagram needs at `scale`.
pub fn height(scale: f32) -> f32 {
    (ROOT_BOX_HEIGHT + TRUNK + UNIT_BOX_HEIGHT + STEM + ENTRY_BOX_HEIGHT) * scale
}

/// Draw the tree centered horizontally within `width`, top at `pos.y`.
/// Returns height used.
pub fn draw(ui: &egui::Ui, theme: &Theme, pos: Pos2, width: f32, scale: f32) -> f32 {
    let painter = ui.painter();
    let line = Stroke::new(1.0 * scale, Theme::with_opacity(theme.foreground, 0.2));
    let box_fill = Theme::with_opacity(theme.foreground, 0.08);
    let entry_fill = theme.background;
    let border = theme.border;
    let label_color = theme.heading_color;
    let detail_color = Theme::with_opacity(theme.foreground, 0.7);
    let center_x = pos.x + width / 2.0;
    let rounding = 8.0 * scale;

    // Root
    let root_rect = egui::Rect::from_center_size(
        Pos2::new(center_x, pos.y + ROOT_BOX_HEIGHT * scale / 2.0),
        egui::vec2(180.0 * scale, ROOT_BOX_HEIGHT * scale),
    );
    painter.rect_filled(root_rect, rounding, box_fill);
    painter.rect_stroke(
        root_rect,
        rounding,
        Stroke::new(1.0, border),
        egui::StrokeKind::Inside,
    );
    draw_node(ui, ROOT, root_rect, theme.body_size * 0.8 * scale, scale, label_color, detail_color);

    let trunk_top = root_rect.bottom();
    let bar_y = trunk_top + TRUNK * scale;
    painter.line_segment([Pos2::new(center_x, trunk_top), Pos2::new(center_x, bar_y)], line);

    let column_width = width / BRANCHES.len() as f32;
    let first_x = pos.x + column_width / 2.0;
    let last_x = pos.x + width - column_width / 2.0;
    painter.line_segment([Pos2::new(first_x, bar_y), Pos2::new(last_x, bar_y)], line);

    let label_size = theme.small_size * 1.15 * scale;
    for (i, branch) in BRANCHES.iter().enumerate() {
        let x = pos.x + column_width * (i as f32 + 0.5);
        let box_width = (column_width - 16.0 * scale).max(0.0);

        let unit_rect = egui::Rect::from_min_size(
            Pos2::new(x - box_width * 0.35, bar_y),
            egui::vec2(box_width * 0.7, UNIT_BOX_HEIGHT * scale),
        );
        painter.rect_filled(unit_rect, rounding, box_fill);
        painter.rect_stroke(
            unit_rect,
            rounding,
            Stroke::new(1.0, border),
            egui::StrokeKind::Inside,
        );
        let galley = painter.layout_no_wrap(
            branch.unit.to_string(),
            FontId::proportional(label_size),
            label_color,
        );
        painter.galley(
            unit_rect.center() - galley.rect.size() / 2.0,
            galley,
            label_color,
        );

        let stem_bottom = unit_rect.bottom() + STEM * scale;
        painter.line_segment([Pos2::new(x, unit_rect.bottom()), Pos2::new(x, stem_bottom)], line);

        let entry_rect = egui::Rect::from_min_size(
            Pos2::new(x - box_width / 2.0, stem_bottom),
            egui::vec2(box_width, ENTRY_BOX_HEIGHT * scale),
        );
        painter.rect_filled(entry_rect, 6.0 * scale, entry_fill);
        painter.rect_stroke(
            entry_rect,
            6.0 * scale,
            Stroke::new(1.0, border),
            egui::StrokeKind::Inside,
        );
        draw_node(ui, branch.entry, entry_rect, label_size, scale, label_color, detail_color);
    }

    height(scale)
}

fn draw_node(
    ui: &egui::Ui,
    node: TreeNode,
    rect: egui::Rect,
    size: f32,
    scale: f32,
    label_color: egui::Color32,
    detail_color: egui::Color32,
) {
    let inner_width = rect.width() - 16.0 * scale;
    let label_font = FontId::proportional(size);
    let detail_font = FontId::proportional(detail_size(size));
    let label_h = text::measure_text(ui, node.label, label_font.clone(), inner_width);
    let detail_h = text::measure_text(ui, node.detail, detail_font.clone(), inner_width);
    let top = rect.center().y - (label_h + detail_h) / 2.0;

    let label_galley = ui.painter().layout(
        node.label.to_string(),
        label_font,
        label_color,
        inner_width,
    );
    ui.painter().galley(
        Pos2::new(rect.center().x - label_galley.rect.width() / 2.0, top),
        label_galley,
        label_color,
    );
    let detail_galley = ui.painter().layout(
        node.detail.to_string(),
        detail_font,
        detail_color,
        inner_width,
    );
    ui.painter().galley(
        Pos2::new(
            rect.center().x - detail_galley.rect.width() / 2.0,
            top + label_h,
        ),
        detail_galley,
        detail_color,
    );
}

fn detail_size(label_size: f32) -> f32 {
    label_size * 0.78
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_shape() {
        assert_eq!(ROOT.detail, "dc=schule,dc=de");
        let units: Vec<&str> = BRANCHES.iter().map(|b| b.unit).collect();
        assert_eq!(units, ["ou=users", "ou=groups", "ou=devices", "ou=policies"]);
        assert_eq!(BRANCHES[0].entry.label, "cn=Max Muster");
        assert_eq!(BRANCHES[3].entry.detail, "pwdMinLength=12");
    }

    #[test]
    fn test_height_scales() {
        assert_eq!(height(2.0), height(1.0) * 2.0);
    }
}
