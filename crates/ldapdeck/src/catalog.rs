use std::collections::HashSet;

use anyhow::Result;

/// Layout mode of a slide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Single bulleted list
    #[default]
    Default,
    /// Two bulleted lists side by side
    Split,
    /// Bulleted list plus the directory tree diagram
    Graphic,
}

impl Variant {
    /// Resolve a variant tag. Unknown or empty tags fall back to `Default`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "split" => Self::Split,
            "graphic" => Self::Graphic,
            _ => Self::Default,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Split => "split",
            Self::Graphic => "graphic",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub highlight: Option<&'static str>,
    pub variant: Variant,
    pub bullets: &'static [&'static str],
    /// Only shown by the split layout.
    pub secondary_bullets: Option<&'static [&'static str]>,
}

/// Ordered, immutable slide sequence. Never empty, ids are unique.
#[derive(Debug, Clone)]
pub struct Catalog {
    slides: Vec<Slide>,
}

impl Catalog {
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            anyhow::bail!("Catalog must contain at least one slide");
        }
        let mut seen = HashSet::new();
        for slide in &slides {
            if !seen.insert(slide.id) {
                anyhow::bail!("Duplicate slide id: {}", slide.id);
            }
        }
        tracing::info!(slides = slides.len(), "catalog ready");
        Ok(Self { slides })
    }

    /// The built-in LDAP introduction deck.
    pub fn builtin() -> Result<Self> {
        Self::new(LDAP_SLIDES.to_vec())
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

const LDAP_SLIDES: [Slide; 6] = [
    Slide {
        id: "slide-1",
        title: "LDAP \u{2013} Lightweight Directory Access Protocol",
        subtitle: Some("Einführung & Überblick"),
        highlight: Some("Erstellt von: Dein Name"),
        variant: Variant::Default,
        bullets: &[
            "Standardprotokoll für den Zugriff auf Verzeichnisdienste",
            "Entwickelt für schnelle, hierarchische Abfragen",
            "Basis vieler Identitäts- und Berechtigungsprozesse",
        ],
        secondary_bullets: None,
    },
    Slide {
        id: "slide-2",
        title: "Was ist LDAP?",
        subtitle: None,
        highlight: None,
        variant: Variant::Default,
        bullets: &[
            "Netzwerkprotokoll zur Abfrage und Verwaltung von Verzeichnisdiensten",
            "Standardisiert (RFC 4510 ff.) \u{2013} herstellerübergreifende Nutzung möglich",
            "Typische Systeme: OpenLDAP, Microsoft Active Directory, 389 Directory Server",
            "Verzeichnis ist hierarchisch (Baumstruktur mit Distinguished Names)",
        ],
        secondary_bullets: None,
    },
    Slide {
        id: "slide-3",
        title: "Warum LDAP?",
        subtitle: Some("Schutzziele & betriebliche Notwendigkeit"),
        highlight: None,
        variant: Variant::Split,
        bullets: &[
            "Verfügbarkeit: zentrale Nutzerverwaltung für zahlreiche Dienste",
            "Integrität: konsistente Daten dank definierter Schemata",
            "Vertraulichkeit: Zugriffskontrollen, LDAPS/TLS-Verschlüsselung",
        ],
        secondary_bullets: Some(&[
            "Unternehmensweite Benutzer- und Gruppenverwaltung",
            "Skalierbare Authentifizierung & Autorisierung",
            "Delegierbare Administration und zentrale Policies",
        ]),
    },
    Slide {
        id: "slide-4",
        title: "LDAP-Struktur",
        subtitle: Some("Beispielhafte Baumdarstellung"),
        highlight: Some("dc=schule,dc=de"),
        variant: Variant::Graphic,
        bullets: &[
            "Organizational Units (OUs) strukturieren Bereiche oder Standorte",
            "Entries repräsentieren Benutzer, Gruppen, Geräte und Policies",
            "Distinguished Names bestimmen die eindeutige Position im Baum",
        ],
        secondary_bullets: None,
    },
    Slide {
        id: "slide-5",
        title: "Wie funktioniert LDAP? (Teil 1)",
        subtitle: None,
        highlight: None,
        variant: Variant::Default,
        bullets: &[
            "Client/Server-Modell: Anwendungen binden (bind) sich an einen LDAP-Server",
            "Kernoperationen: Bind (Authentifizierung), Search (Suche), Compare (Attributvergleich)",
            "Weitere Operationen: Add, Modify, Delete, ModifyDN, Extended",
            "Kommunikation über Port 389 (LDAP) bzw. 636 (LDAPS)",
        ],
        secondary_bullets: None,
    },
    Slide {
        id: "slide-6",
        title: "Wie funktioniert LDAP? (Teil 2)",
        subtitle: None,
        highlight: None,
        variant: Variant::Default,
        bullets: &[
            "Suchanfragen nutzen Filter (z. B. (objectClass=person) UND (ou=Lehrer))",
            "Server liefert Einträge mit Attributen (z. B. cn, mail, memberOf)",
            "Schema definiert zulässige ObjectClasses und Attribute",
            "Ergebnisse dienen Authentifizierung, Autorisierung und Provisionierung",
        ],
        secondary_bullets: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(id: &'static str) -> Slide {
        Slide {
            id,
            title: "Title",
            subtitle: None,
            highlight: None,
            variant: Variant::Default,
            bullets: &[],
            secondary_bullets: None,
        }
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(0).unwrap().id, "slide-1");
        assert_eq!(catalog.get(2).unwrap().variant, Variant::Split);
        assert_eq!(catalog.get(3).unwrap().variant, Variant::Graphic);
        assert!(catalog.get(6).is_none());
    }

    #[test]
    fn test_builtin_ids_are_in_presentation_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<&str> = catalog.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            ["slide-1", "slide-2", "slide-3", "slide-4", "slide-5", "slide-6"]
        );
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = Catalog::new(Vec::new()).unwrap_err();
        assert!(err.to_string().contains("at least one slide"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::new(vec![slide("a"), slide("b"), slide("a")]).unwrap_err();
        assert!(err.to_string().contains("Duplicate slide id: a"));
    }

    #[test]
    fn test_single_slide_catalog() {
        let catalog = Catalog::new(vec![slide("only")]).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_variant_from_name() {
        assert_eq!(Variant::from_name("split"), Variant::Split);
        assert_eq!(Variant::from_name("graphic"), Variant::Graphic);
        assert_eq!(Variant::from_name("default"), Variant::Default);
        assert_eq!(Variant::from_name("carousel"), Variant::Default);
        assert_eq!(Variant::from_name(""), Variant::Default);
    }
}
