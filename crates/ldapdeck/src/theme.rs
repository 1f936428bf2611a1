use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    /// Card behind the slide content
    pub surface: Color32,
    pub border: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    /// Highlight line and primary button
    pub accent: Color32,
    /// Top bar and split column headings
    pub accent_soft: Color32,
    pub on_accent: Color32,
    pub title_size: f32,
    pub subtitle_size: f32,
    pub body_size: f32,
    pub small_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x02, 0x06, 0x17),
            surface: Color32::from_rgb(0x0F, 0x17, 0x2A),
            border: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 0x1A),
            foreground: Color32::from_rgb(0xE6, 0xE8, 0xEC),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x67, 0xE8, 0xF9),
            accent_soft: Color32::from_rgb(0xA5, 0xF3, 0xFC),
            on_accent: Color32::from_rgb(0x02, 0x06, 0x17),
            title_size: 40.0,
            subtitle_size: 20.0,
            body_size: 20.0,
            small_size: 13.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xF1, 0xF5, 0xF9),
            surface: Color32::WHITE,
            border: Color32::from_rgb(0xCB, 0xD5, 0xE1),
            foreground: Color32::from_rgb(0x1E, 0x29, 0x3B),
            heading_color: Color32::from_rgb(0x0F, 0x17, 0x2A),
            accent: Color32::from_rgb(0x08, 0x91, 0xB2),
            accent_soft: Color32::from_rgb(0x15, 0x5E, 0x75),
            on_accent: Color32::WHITE,
            title_size: 40.0,
            subtitle_size: 20.0,
            body_size: 20.0,
            small_size: 13.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_defaults_to_dark() {
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("dark").name, "dark");
        assert_eq!(Theme::from_name("neon").name, "dark");
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::dark().toggled().name, "light");
        assert_eq!(Theme::light().toggled().name, "dark");
    }

    #[test]
    fn test_with_opacity() {
        let c = Theme::with_opacity(Color32::from_rgb(10, 20, 30), 0.5);
        assert_eq!(c.a(), 127);
    }
}
