use std::fmt::Write;

use anyhow::Result;
use colored::Colorize;

use crate::catalog::{Catalog, Variant};
use crate::navigation::Position;

pub fn run() -> Result<()> {
    let catalog = Catalog::builtin()?;
    print!("{}", render(&catalog));
    Ok(())
}

/// One line per slide: `NN / TT  title [variant]`, subtitle indented below.
pub fn render(catalog: &Catalog) -> String {
    let mut out = String::new();
    let mut position = Position::start(catalog.len());
    for slide in catalog.iter() {
        let tag = match slide.variant {
            Variant::Default => String::new(),
            other => format!(" [{other}]"),
        };
        let _ = writeln!(
            out,
            "{}  {}{}",
            position.indicator().dimmed(),
            slide.title.bold(),
            tag.cyan()
        );
        if let Some(subtitle) = slide.subtitle {
            let _ = writeln!(out, "         {subtitle}");
        }
        position = position.advanced();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_lists_every_slide() {
        colored::control::set_override(false);
        let catalog = Catalog::builtin().unwrap();
        let out = render(&catalog);
        let lines: Vec<&str> = out.lines().filter(|l| !l.starts_with(' ')).collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("01 / 06  LDAP"));
        assert_eq!(lines[2], "03 / 06  Warum LDAP? [split]");
        assert_eq!(lines[3], "04 / 06  LDAP-Struktur [graphic]");
        assert_eq!(lines[5], "06 / 06  Wie funktioniert LDAP? (Teil 2)");
        assert!(out.contains("         Beispielhafte Baumdarstellung"));
    }
}
