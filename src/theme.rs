//! Built-in color themes.
//!
//! A theme is a fixed palette of CSS color and gradient strings applied to every
//! slide of a run. Lookups never fail: unknown names resolve to
//! [`DEFAULT_THEME`].

/// Name of the palette returned for unregistered theme names.
pub const DEFAULT_THEME: &str = "dark_professional";

/// Background color prefixes that mark a theme as light.
const LIGHT_PREFIXES: [&str; 4] = ["#f8", "#ff", "#fe", "#e9"];

const DEFAULT_GLASS_BG: &str = "rgba(255,255,255,0.06)";
const DEFAULT_GLASS_BD: &str = "rgba(255,255,255,0.12)";
const DEFAULT_GLASS_BLUR: &str = "12px";

/// Frosted-glass surface tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glass {
    pub bg: &'static str,
    pub bd: &'static str,
    pub blur: &'static str,
}

/// An immutable palette record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    /// Body background (usually a gradient)
    pub bg: &'static str,
    pub accent: &'static str,
    /// Secondary accent used at the end of accent gradients
    pub accent_sub: &'static str,
    /// Primary, secondary and tertiary text colors
    pub t1: &'static str,
    pub t2: &'static str,
    pub t3: &'static str,
    pub badge_bg: &'static str,
    pub badge_bd: &'static str,
    pub divider: &'static str,
    pub card_bg: &'static str,
    pub card_bd: &'static str,
    /// Color of the large numeral watermark on point slides
    pub num_color: &'static str,
    pub glass: Option<Glass>,
}

impl ThemePalette {
    pub fn glass_bg(&self) -> &'static str {
        self.glass.map(|g| g.bg).unwrap_or(DEFAULT_GLASS_BG)
    }

    pub fn glass_bd(&self) -> &'static str {
        self.glass.map(|g| g.bd).unwrap_or(DEFAULT_GLASS_BD)
    }

    pub fn glass_blur(&self) -> &'static str {
        self.glass.map(|g| g.blur).unwrap_or(DEFAULT_GLASS_BLUR)
    }

    /// Whether the background reads as dark.
    ///
    /// Only the first 50 characters of the background are inspected. A dark
    /// theme renders the logo inverted to white.
    pub fn is_dark(&self) -> bool {
        let head: String = self.bg.chars().take(50).collect::<String>().to_lowercase();
        !LIGHT_PREFIXES.iter().any(|p| head.contains(p))
    }
}

static THEMES: &[(&str, ThemePalette)] = &[
    (
        "dark_professional",
        ThemePalette {
            bg: "linear-gradient(160deg, #0c1220 0%, #1a2744 40%, #0f3460 100%)",
            accent: "#e94560",
            accent_sub: "#e94560",
            t1: "#ffffff",
            t2: "#8899aa",
            t3: "#445566",
            badge_bg: "rgba(233,69,96,0.15)",
            badge_bd: "rgba(233,69,96,0.3)",
            divider: "rgba(255,255,255,0.08)",
            card_bg: "rgba(255,255,255,0.05)",
            card_bd: "rgba(255,255,255,0.08)",
            num_color: "rgba(233,69,96,0.12)",
            glass: Some(Glass {
                bg: "rgba(255,255,255,0.05)",
                bd: "rgba(255,255,255,0.10)",
                blur: "12px",
            }),
        },
    ),
    (
        "aegis_brand",
        ThemePalette {
            // deep navy with a gold accent
            bg: "linear-gradient(160deg, #0f1923 0%, #1B2B48 45%, #1a3a5c 100%)",
            accent: "#D4AF37",
            accent_sub: "#C9956B",
            t1: "#FFFFFF",
            t2: "#A0B4C8",
            t3: "#5A7088",
            badge_bg: "rgba(212,175,55,0.12)",
            badge_bd: "rgba(212,175,55,0.30)",
            divider: "rgba(255,255,255,0.06)",
            card_bg: "rgba(255,255,255,0.04)",
            card_bd: "rgba(212,175,55,0.10)",
            num_color: "rgba(212,175,55,0.08)",
            glass: Some(Glass {
                bg: "rgba(255,255,255,0.06)",
                bd: "rgba(255,255,255,0.12)",
                blur: "12px",
            }),
        },
    ),
    (
        "light_clean",
        ThemePalette {
            bg: "linear-gradient(160deg, #f8f9fb 0%, #eef1f6 100%)",
            accent: "#2f6fed",
            accent_sub: "#5b8def",
            t1: "#111827",
            t2: "#4b5563",
            t3: "#9ca3af",
            badge_bg: "rgba(47,111,237,0.10)",
            badge_bd: "rgba(47,111,237,0.25)",
            divider: "rgba(17,24,39,0.08)",
            card_bg: "rgba(255,255,255,0.80)",
            card_bd: "rgba(17,24,39,0.06)",
            num_color: "rgba(47,111,237,0.08)",
            glass: None,
        },
    ),
    (
        "warm_ivory",
        ThemePalette {
            bg: "linear-gradient(160deg, #fefaf2 0%, #f6ecd9 100%)",
            accent: "#b4532a",
            accent_sub: "#d08c4f",
            t1: "#2b2118",
            t2: "#6b5a48",
            t3: "#a8957f",
            badge_bg: "rgba(180,83,42,0.10)",
            badge_bd: "rgba(180,83,42,0.25)",
            divider: "rgba(43,33,24,0.10)",
            card_bg: "rgba(255,255,255,0.60)",
            card_bd: "rgba(180,83,42,0.12)",
            num_color: "rgba(180,83,42,0.07)",
            glass: Some(Glass {
                bg: "rgba(255,255,255,0.55)",
                bd: "rgba(43,33,24,0.08)",
                blur: "10px",
            }),
        },
    ),
];

/// Names of every registered theme, in registry order.
pub fn names() -> impl Iterator<Item = &'static str> {
    THEMES.iter().map(|(name, _)| *name)
}

/// Exact lookup without fallback.
pub fn get(name: &str) -> Option<&'static ThemePalette> {
    THEMES.iter().find(|(n, _)| *n == name).map(|(_, p)| p)
}

/// Look up a palette, falling back to [`DEFAULT_THEME`] for unknown names.
pub fn lookup(name: &str) -> &'static ThemePalette {
    get(name).unwrap_or_else(default_palette)
}

fn default_palette() -> &'static ThemePalette {
    &THEMES[0].1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_first_entry() {
        assert_eq!(THEMES[0].0, DEFAULT_THEME);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        assert_eq!(lookup("no_such_theme"), lookup(DEFAULT_THEME));
        assert!(get("no_such_theme").is_none());
    }

    #[test]
    fn dark_and_light_detection() {
        assert!(lookup("dark_professional").is_dark());
        assert!(lookup("aegis_brand").is_dark());
        assert!(!lookup("light_clean").is_dark());
        assert!(!lookup("warm_ivory").is_dark());
    }

    #[test]
    fn glass_tokens_fall_back_when_absent() {
        let p = lookup("light_clean");
        assert_eq!(p.glass_bg(), DEFAULT_GLASS_BG);
        assert_eq!(p.glass_blur(), DEFAULT_GLASS_BLUR);
        assert_eq!(lookup("warm_ivory").glass_blur(), "10px");
    }

    #[test]
    fn names_lists_all_themes() {
        let all: Vec<_> = names().collect();
        assert_eq!(all.len(), 4);
        assert!(all.contains(&"aegis_brand"));
    }
}
