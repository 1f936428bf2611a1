//! Pure layout selection: which regions a slide shows and with what text.
//! Painting happens in `render::render_slide`.

use crate::catalog::{Slide, Variant};
use crate::navigation::Position;

pub const DECK_LABEL: &str = "LDAP Präsentation";
pub const FOOTER_LABEL: &str = "LDAP Essentials · Präsentation";
pub const NAVIGATION_HINT: [&str; 4] = [
    "Navigation:",
    "\u{2190}/\u{2192} Pfeiltasten",
    "\u{2022}",
    "Klick auf Buttons",
];
pub const BACK_BUTTON: &str = "Zurück";
pub const NEXT_BUTTON: &str = "Weiter";
pub const SPLIT_PRIMARY_HEADING: &str = "Schutzziele";
pub const SPLIT_SECONDARY_HEADING: &str = "Notwendigkeit";

#[derive(Debug, Clone, PartialEq)]
pub struct SlideView<'a> {
    /// Top bar indicator, `01 / 06`.
    pub indicator: String,
    /// Header line, `Folie 1 von 6`.
    pub counter: String,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub highlight: Option<&'a str>,
    pub body: Body<'a>,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body<'a> {
    List {
        bullets: &'a [&'static str],
    },
    Split {
        primary: Column<'a>,
        secondary: Column<'a>,
    },
    Graphic {
        bullets: &'a [&'static str],
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column<'a> {
    pub heading: &'static str,
    pub bullets: &'a [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    pub label: &'static str,
    pub year: i32,
}

impl Body<'_> {
    /// Secondary bullets shown by this body, if any.
    pub fn secondary_bullets(&self) -> Option<&[&'static str]> {
        match self {
            Body::Split { secondary, .. } => Some(secondary.bullets),
            _ => None,
        }
    }

    pub fn has_diagram(&self) -> bool {
        matches!(self, Body::Graphic { .. })
    }
}

/// Lay out `slide` at `position`. `year` is the calendar year shown in
/// the footer.
pub fn layout(slide: &Slide, position: Position, year: i32) -> SlideView<'_> {
    let body = match slide.variant {
        Variant::Graphic => Body::Graphic {
            bullets: slide.bullets,
        },
        Variant::Split => Body::Split {
            primary: Column {
                heading: SPLIT_PRIMARY_HEADING,
                bullets: slide.bullets,
            },
            secondary: Column {
                heading: SPLIT_SECONDARY_HEADING,
                bullets: slide.secondary_bullets.unwrap_or(&[]),
            },
        },
        Variant::Default => Body::List {
            bullets: slide.bullets,
        },
    };

    SlideView {
        indicator: position.indicator(),
        counter: format!("Folie {} von {}", position.number(), position.total()),
        title: slide.title,
        subtitle: slide.subtitle.filter(|s| !s.is_empty()),
        highlight: slide.highlight.filter(|s| !s.is_empty()),
        body,
        footer: Footer {
            label: FOOTER_LABEL,
            year,
        },
    }
}

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const PRIMARY: &[&str] = &["one", "two"];
    const SECONDARY: &[&str] = &["three"];

    fn slide(variant: Variant) -> Slide {
        Slide {
            id: "s",
            title: "Heading",
            subtitle: None,
            highlight: None,
            variant,
            bullets: PRIMARY,
            secondary_bullets: Some(SECONDARY),
        }
    }

    #[test]
    fn test_split_shows_secondary_bullets() {
        let s = slide(Variant::Split);
        let view = layout(&s, Position::start(1), 2025);
        match &view.body {
            Body::Split { primary, secondary } => {
                assert_eq!(primary.heading, "Schutzziele");
                assert_eq!(primary.bullets, PRIMARY);
                assert_eq!(secondary.heading, "Notwendigkeit");
                assert_eq!(secondary.bullets, SECONDARY);
            }
            other => panic!("expected split body, got {other:?}"),
        }
    }

    #[test]
    fn test_default_never_shows_secondary_bullets() {
        let s = slide(Variant::Default);
        let view = layout(&s, Position::start(1), 2025);
        assert!(matches!(view.body, Body::List { bullets } if bullets == PRIMARY));
        assert!(view.body.secondary_bullets().is_none());
        assert!(!view.body.has_diagram());
    }

    #[test]
    fn test_graphic_shows_diagram_without_secondary() {
        let s = slide(Variant::Graphic);
        let view = layout(&s, Position::start(1), 2025);
        assert!(view.body.has_diagram());
        assert!(view.body.secondary_bullets().is_none());
    }

    #[test]
    fn test_split_without_secondary_renders_empty_column() {
        let s = Slide {
            secondary_bullets: None,
            ..slide(Variant::Split)
        };
        let view = layout(&s, Position::start(1), 2025);
        assert_eq!(view.body.secondary_bullets(), Some(&[][..]));
    }

    #[test]
    fn test_unknown_variant_tag_renders_as_list() {
        let s = slide(Variant::from_name("timeline"));
        let view = layout(&s, Position::start(1), 2025);
        assert!(matches!(view.body, Body::List { .. }));
    }

    #[test]
    fn test_counter_and_indicator() {
        let catalog = Catalog::builtin().unwrap();
        let position = Position::at(2, catalog.len()).unwrap();
        let view = layout(catalog.get(2).unwrap(), position, 2025);
        assert_eq!(view.indicator, "03 / 06");
        assert_eq!(view.counter, "Folie 3 von 6");
        assert_eq!(view.title, "Warum LDAP?");
    }

    #[test]
    fn test_optional_regions_omitted() {
        let catalog = Catalog::builtin().unwrap();
        let view = layout(catalog.get(1).unwrap(), Position::at(1, 6).unwrap(), 2025);
        assert!(view.subtitle.is_none());
        assert!(view.highlight.is_none());

        let view = layout(catalog.get(0).unwrap(), Position::start(6), 2025);
        assert_eq!(view.subtitle, Some("Einführung & Überblick"));
        assert_eq!(view.highlight, Some("Erstellt von: Dein Name"));
    }

    #[test]
    fn test_empty_optional_text_is_omitted() {
        let s = Slide {
            subtitle: Some(""),
            highlight: Some(""),
            ..slide(Variant::Default)
        };
        let view = layout(&s, Position::start(1), 2025);
        assert!(view.subtitle.is_none());
        assert!(view.highlight.is_none());
    }

    #[test]
    fn test_footer_year() {
        let s = slide(Variant::Default);
        let view = layout(&s, Position::start(1), 2031);
        assert_eq!(view.footer.year, 2031);
        assert_eq!(view.footer.label, "LDAP Essentials · Präsentation");
        assert!(current_year() >= 2024);
    }
}
