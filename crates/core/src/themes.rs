// crates/core/src/themes.rs
//! Built-in visual themes.
//!
//! Elements only carry a semantic [`StyleRole`]; a theme decides what each
//! role looks like. Themes are immutable records in a static catalog.

use serde::Serialize;

use crate::types::StyleRole;

/// Colors as `#rrggbb` hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub heading_font: &'static str,
    pub body_font: &'static str,
    /// Body size in px. Other roles scale from it.
    pub base_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub palette: Palette,
    pub typography: Typography,
}

/// Concrete look for one element role under a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub color: &'static str,
    pub font_family: &'static str,
    pub font_size: u32,
    pub font_weight: u16,
}

impl Theme {
    pub fn resolve(&self, role: StyleRole) -> ResolvedStyle {
        let p = &self.palette;
        let t = &self.typography;
        let (color, font_family, font_size, font_weight) = match role {
            StyleRole::Title => (p.primary, t.heading_font, t.base_size * 2, 700),
            StyleRole::Heading => (p.secondary, t.heading_font, t.base_size * 3 / 2, 600),
            StyleRole::Body => (p.text, t.body_font, t.base_size, 400),
            StyleRole::Caption => (p.muted, t.body_font, t.base_size * 3 / 4, 400),
            StyleRole::Accent => (p.accent, t.body_font, t.base_size, 600),
            StyleRole::Muted => (p.muted, t.body_font, t.base_size, 400),
        };
        ResolvedStyle {
            color,
            font_family,
            font_size,
            font_weight,
        }
    }
}

static THEMES: &[Theme] = &[
    Theme {
        id: "modern",
        name: "Modern",
        description: "Clean sans-serif type with a blue accent",
        palette: Palette {
            background: "#ffffff",
            text: "#1f2937",
            primary: "#2563eb",
            secondary: "#1e40af",
            accent: "#f59e0b",
            muted: "#9ca3af",
        },
        typography: Typography {
            heading_font: "Inter",
            body_font: "Inter",
            base_size: 16,
        },
    },
    Theme {
        id: "corporate",
        name: "Corporate",
        description: "Conservative navy and grey for business reports",
        palette: Palette {
            background: "#f8fafc",
            text: "#0f172a",
            primary: "#1e3a5f",
            secondary: "#334155",
            accent: "#0d9488",
            muted: "#94a3b8",
        },
        typography: Typography {
            heading_font: "Georgia",
            body_font: "Arial",
            base_size: 15,
        },
    },
    Theme {
        id: "minimal",
        name: "Minimal",
        description: "Black on white with a single accent",
        palette: Palette {
            background: "#ffffff",
            text: "#111111",
            primary: "#111111",
            secondary: "#444444",
            accent: "#e11d48",
            muted: "#bbbbbb",
        },
        typography: Typography {
            heading_font: "Helvetica",
            body_font: "Helvetica",
            base_size: 16,
        },
    },
    Theme {
        id: "vibrant",
        name: "Vibrant",
        description: "Saturated colors for social and marketing content",
        palette: Palette {
            background: "#fff7ed",
            text: "#292524",
            primary: "#db2777",
            secondary: "#7c3aed",
            accent: "#f97316",
            muted: "#a8a29e",
        },
        typography: Typography {
            heading_font: "Poppins",
            body_font: "Nunito",
            base_size: 17,
        },
    },
    Theme {
        id: "midnight",
        name: "Midnight",
        description: "Light text on a dark background",
        palette: Palette {
            background: "#0b1120",
            text: "#e2e8f0",
            primary: "#38bdf8",
            secondary: "#a5b4fc",
            accent: "#facc15",
            muted: "#64748b",
        },
        typography: Typography {
            heading_font: "Inter",
            body_font: "Inter",
            base_size: 16,
        },
    },
];

/// All built-in themes, default first.
pub fn catalog() -> &'static [Theme] {
    THEMES
}

pub fn find(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.id == id)
}

pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<&str> = catalog().iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog().len());
        assert_eq!(ids, vec!["corporate", "midnight", "minimal", "modern", "vibrant"]);
    }

    #[test]
    fn test_find() {
        assert_eq!(find("midnight").map(|t| t.name), Some("Midnight"));
        assert!(find("neon").is_none());
        assert_eq!(default_theme().id, "modern");
    }

    #[test]
    fn test_resolve_roles() {
        let theme = default_theme();
        let title = theme.resolve(StyleRole::Title);
        assert_eq!(title.color, "#2563eb");
        assert_eq!(title.font_size, 32);
        assert_eq!(title.font_weight, 700);

        let caption = theme.resolve(StyleRole::Caption);
        assert_eq!(caption.font_size, 12);
        assert_eq!(caption.color, theme.palette.muted);
    }

    #[test]
    fn test_colors_are_hex() {
        for theme in catalog() {
            let p = theme.palette;
            for color in [p.background, p.text, p.primary, p.secondary, p.accent, p.muted] {
                assert!(
                    color.len() == 7 && color.starts_with('#'),
                    "{}: bad color {color}",
                    theme.id
                );
            }
        }
    }

    #[test]
    fn test_theme_serializes_camel_case() {
        let json = serde_json::to_value(default_theme()).unwrap();
        assert_eq!(json["typography"]["headingFont"], "Inter");
        assert_eq!(json["palette"]["background"], "#ffffff");
    }
}
