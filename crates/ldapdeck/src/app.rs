use eframe::egui;
use std::time::Instant;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::navigation::{Controller, KeyStream};
use crate::render;
use crate::render::view::{self, BACK_BUTTON, DECK_LABEL, NAVIGATION_HINT, NEXT_BUTTON};
use crate::theme::Theme;

const TOAST_DURATION: f32 = 1.5;
const TOAST_FADE_START: f32 = 1.0;
const MAX_CARD_WIDTH: f32 = 1100.0;

/// Launch settings from the command line. `None` fields fall back to the
/// config file.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub windowed: bool,
    pub theme: Option<String>,
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        if elapsed < TOAST_FADE_START {
            1.0
        } else if elapsed < TOAST_DURATION {
            1.0 - (elapsed - TOAST_FADE_START) / (TOAST_DURATION - TOAST_FADE_START)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= TOAST_DURATION
    }
}

struct DeckApp {
    catalog: Catalog,
    controller: Controller,
    keys: KeyStream,
    theme: Theme,
    show_hud: bool,
    toast: Option<Toast>,
}

impl DeckApp {
    fn new(catalog: Catalog, theme: Theme) -> Self {
        let keys = KeyStream::new();
        let mut controller = Controller::new(&catalog);
        controller.mount(&keys);
        Self {
            catalog,
            controller,
            keys,
            theme,
            show_hud: false,
            toast: None,
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
    }

    /// Route this frame's key presses through the key stream. Keys a
    /// listener consumed are removed from the frame's events so no widget
    /// sees them.
    fn dispatch_keys(&mut self, ctx: &egui::Context) {
        let pressed: Vec<egui::Key> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => Some(*key),
                    _ => None,
                })
                .collect()
        });

        let consumed: Vec<egui::Key> = pressed
            .into_iter()
            .filter(|key| self.keys.dispatch(*key).is_consumed())
            .collect();

        if !consumed.is_empty() {
            ctx.input_mut(|i| {
                i.events.retain(|event| {
                    !matches!(event, egui::Event::Key { key, .. } if consumed.contains(key))
                });
            });
        }
    }

    fn compute_scale(rect: egui::Rect) -> f32 {
        let ref_w = 1280.0;
        let ref_h = 800.0;
        (rect.width() / ref_w).min(rect.height() / ref_h)
    }

    fn draw_top_bar(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let color = Theme::with_opacity(self.theme.accent_soft, 0.7);
        let size = self.theme.small_size * scale;
        render::text::draw_spaced_label(ui, DECK_LABEL, rect.left_top(), size, color, false);
        render::text::draw_spaced_label(
            ui,
            &self.controller.position().indicator(),
            rect.right_top(),
            size,
            color,
            true,
        );
    }

    fn draw_controls(&self, ui: &mut egui::Ui, rect: egui::Rect, scale: f32) {
        let hint_color = Theme::with_opacity(self.theme.foreground, 0.6);
        let hint = ui.painter().layout_no_wrap(
            NAVIGATION_HINT.join("  "),
            egui::FontId::proportional(self.theme.small_size * scale),
            hint_color,
        );
        ui.painter().galley(
            egui::pos2(rect.left(), rect.center().y - hint.rect.height() / 2.0),
            hint,
            hint_color,
        );

        let button_size = egui::vec2(120.0 * scale, 40.0 * scale);
        let gap = 8.0 * scale;
        let next_rect = egui::Rect::from_min_size(
            egui::pos2(rect.right() - button_size.x, rect.center().y - button_size.y / 2.0),
            button_size,
        );
        let back_rect = next_rect.translate(egui::vec2(-(button_size.x + gap), 0.0));
        let text_size = self.theme.small_size * 1.1 * scale;

        let back = egui::Button::new(
            egui::RichText::new(BACK_BUTTON)
                .size(text_size)
                .strong()
                .color(self.theme.foreground),
        )
        .fill(Theme::with_opacity(self.theme.foreground, 0.1))
        .stroke(egui::Stroke::new(1.0, Theme::with_opacity(self.theme.foreground, 0.3)))
        .corner_radius(button_size.y / 2.0);
        if ui.put(back_rect, back).clicked() {
            self.controller.retreat();
        }

        let next = egui::Button::new(
            egui::RichText::new(NEXT_BUTTON)
                .size(text_size)
                .strong()
                .color(self.theme.on_accent),
        )
        .fill(self.theme.accent)
        .stroke(egui::Stroke::new(1.0, self.theme.accent))
        .corner_radius(button_size.y / 2.0);
        if ui.put(next_rect, next).clicked() {
            self.controller.advance();
        }
    }

    fn draw_toast(&self, ui: &egui::Ui, ctx: &egui::Context, rect: egui::Rect, scale: f32) {
        let Some(ref toast) = self.toast else {
            return;
        };
        let opacity = toast.opacity();
        if opacity <= 0.0 {
            return;
        }
        let toast_color = Theme::with_opacity(self.theme.foreground, opacity * 0.9);
        let toast_bg = Theme::with_opacity(self.theme.surface, opacity * 0.9);
        let galley = ui.painter().layout_no_wrap(
            toast.message.clone(),
            egui::FontId::proportional(18.0 * scale),
            toast_color,
        );
        let padding = 14.0 * scale;
        let toast_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.center().x - galley.rect.width() / 2.0 - padding,
                rect.top() + 24.0 * scale,
            ),
            egui::vec2(
                galley.rect.width() + padding * 2.0,
                galley.rect.height() + padding * 2.0,
            ),
        );
        ui.painter().rect_filled(toast_rect, 8.0 * scale, toast_bg);
        let text_pos = egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
        ui.painter().galley(text_pos, galley, toast_color);
        ctx.request_repaint();
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.dispatch_keys(ctx);

        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        let mut toggle_theme = false;

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
            }
            if i.key_pressed(egui::Key::D) {
                toggle_theme = true;
            }
            if i.key_pressed(egui::Key::H) {
                self.show_hud = !self.show_hud;
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }
        if toggle_theme {
            self.toggle_theme();
        }
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let bg = self.theme.background;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);
                let scale = Self::compute_scale(rect);

                let margin = 32.0 * scale;
                let width = (rect.width() - margin * 2.0).min(MAX_CARD_WIDTH * scale);
                let column = egui::Rect::from_center_size(
                    rect.center(),
                    egui::vec2(width, rect.height() - margin * 2.0),
                );

                let bar_height = 24.0 * scale;
                let controls_height = 56.0 * scale;
                let gap = 20.0 * scale;

                let top_bar = egui::Rect::from_min_size(
                    column.left_top(),
                    egui::vec2(column.width(), bar_height),
                );
                let controls = egui::Rect::from_min_size(
                    egui::pos2(column.left(), column.bottom() - controls_height),
                    egui::vec2(column.width(), controls_height),
                );
                let card = egui::Rect::from_min_max(
                    egui::pos2(column.left(), top_bar.bottom() + gap),
                    egui::pos2(column.right(), controls.top() - gap),
                );

                self.draw_top_bar(ui, top_bar, scale);

                let position = self.controller.position();
                if let Some(slide) = self.catalog.get(position.index()) {
                    let slide_view = view::layout(slide, position, view::current_year());
                    render::render_slide(ui, &slide_view, &self.theme, card, scale);
                }

                self.draw_controls(ui, controls, scale);
                self.draw_toast(ui, ctx, rect, scale);

                if self.show_hud {
                    draw_hud(ui, &self.theme, rect, scale);
                }
            });
    }
}

impl Drop for DeckApp {
    fn drop(&mut self) {
        self.controller.unmount();
    }
}

fn draw_hud(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32) {
    let shortcuts = [
        ("\u{2192} / Page Down", "Next slide"),
        ("\u{2190} / Page Up", "Previous slide"),
        ("D", "Toggle theme"),
        ("F", "Toggle fullscreen"),
        ("H", "Toggle this HUD"),
        ("Q", "Quit"),
    ];

    let bg = Theme::with_opacity(theme.surface, 0.95);
    let text_color = Theme::with_opacity(theme.foreground, 0.9);
    let key_color = Theme::with_opacity(theme.accent, 0.9);

    let padding = 24.0 * scale;
    let line_height = 30.0 * scale;
    let hud_height = shortcuts.len() as f32 * line_height + padding * 2.0 + 40.0 * scale;
    let hud_width = 380.0 * scale;

    let hud_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(hud_width, hud_height));

    ui.painter().rect_filled(hud_rect, 12.0 * scale, bg);

    let title_galley = ui.painter().layout_no_wrap(
        "Keyboard Shortcuts".to_string(),
        egui::FontId::proportional(20.0 * scale),
        Theme::with_opacity(theme.heading_color, 0.9),
    );
    let title_pos = egui::pos2(hud_rect.left() + padding, hud_rect.top() + padding);
    ui.painter().galley(title_pos, title_galley, text_color);

    let mut y = hud_rect.top() + padding + 40.0 * scale;

    for (key, desc) in &shortcuts {
        let key_galley = ui.painter().layout_no_wrap(
            key.to_string(),
            egui::FontId::monospace(15.0 * scale),
            key_color,
        );
        ui.painter().galley(
            egui::pos2(hud_rect.left() + padding, y),
            key_galley,
            key_color,
        );

        let desc_galley = ui.painter().layout_no_wrap(
            desc.to_string(),
            egui::FontId::proportional(15.0 * scale),
            text_color,
        );
        ui.painter().galley(
            egui::pos2(hud_rect.left() + padding + 190.0 * scale, y),
            desc_galley,
            text_color,
        );

        y += line_height;
    }
}

pub fn run(options: LaunchOptions) -> anyhow::Result<()> {
    let catalog = Catalog::builtin()?;
    let config = Config::load_or_default();

    let theme_name = options
        .theme
        .as_deref()
        .or(config.theme())
        .unwrap_or("dark");
    let theme = Theme::from_name(theme_name);
    let windowed = options.windowed || config.windowed();

    tracing::info!(
        theme = %theme.name,
        windowed,
        slides = catalog.len(),
        "launching presentation"
    );

    let title = format!("{DECK_LABEL} - ldapdeck");
    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(DeckApp::new(catalog, theme)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn press(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_app_mounts_single_listener_at_first_slide() {
        let app = DeckApp::new(Catalog::builtin().unwrap(), Theme::dark());
        assert!(app.controller.is_mounted());
        assert_eq!(app.keys.listener_count(), 1);
        assert_eq!(app.controller.index(), 0);

        app.keys.dispatch(egui::Key::ArrowRight);
        assert_eq!(app.controller.index(), 1);
    }

    #[test]
    fn test_key_presses_and_buttons_share_state() {
        let app = DeckApp::new(Catalog::builtin().unwrap(), Theme::dark());
        app.keys.dispatch(egui::Key::PageUp);
        assert_eq!(app.controller.index(), 5);
        app.controller.advance();
        assert_eq!(app.controller.index(), 0);
    }

    #[test]
    fn test_consumed_keys_are_hidden_from_the_frame() {
        let ctx = egui::Context::default();
        let mut app = DeckApp::new(Catalog::builtin().unwrap(), Theme::dark());
        let input = egui::RawInput {
            events: vec![press(egui::Key::ArrowRight), press(egui::Key::D)],
            ..Default::default()
        };

        let mut right_visible = true;
        let mut d_visible = false;
        let _ = ctx.run(input, |ctx| {
            app.dispatch_keys(ctx);
            right_visible = ctx.input(|i| i.key_pressed(egui::Key::ArrowRight));
            d_visible = ctx.input(|i| i.key_pressed(egui::Key::D));
        });

        assert_eq!(app.controller.index(), 1);
        assert!(!right_visible);
        assert!(d_visible);
    }

    #[test]
    fn test_toast_fades_out() {
        let fresh = Toast::new("Theme: light".to_string());
        assert_eq!(fresh.opacity(), 1.0);
        assert!(!fresh.is_expired());

        let fading = Toast {
            message: "Theme: dark".to_string(),
            start: Instant::now() - Duration::from_secs_f32(1.25),
        };
        let opacity = fading.opacity();
        assert!(opacity > 0.0 && opacity < 1.0, "opacity {opacity}");
        assert!(!fading.is_expired());

        let gone = Toast {
            message: "Theme: dark".to_string(),
            start: Instant::now() - Duration::from_secs(2),
        };
        assert_eq!(gone.opacity(), 0.0);
        assert!(gone.is_expired());
    }
}
