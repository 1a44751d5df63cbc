//! Fixed option catalogs: fonts and background washes.
//!
//! Both catalogs are compiled in and not user-extensible. The first entry
//! of each is the default, used as the fallback whenever an external
//! identifier (URL parameter, CLI input) fails validation.

use serde::Serialize;

/// A selectable font.
///
/// `family` is the CSS font-family string used both for rendering and as
/// the stable identifier carried in the `font` query parameter.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FontOption {
    /// Display name shown in the font picker.
    pub name: &'static str,
    /// Short stable id (not used on the wire; kept for UI keys).
    pub value: &'static str,
    /// CSS font-family string.
    pub family: &'static str,
}

/// A background wash: a diagonal gradient from `from` to `to`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundStyle {
    /// Stable token carried in the `bg` query parameter.
    pub token: &'static str,
    /// Gradient start color (top-left), #rrggbb.
    pub from: &'static str,
    /// Gradient end color (bottom-right), #rrggbb.
    pub to: &'static str,
}

/// Font catalog. The first entry is the default.
pub const FONTS: [FontOption; 6] = [
    FontOption {
        name: "思源明朝",
        value: "source-serif",
        family: "\"Shippori Mincho\", serif",
    },
    FontOption {
        name: "クレー",
        value: "klee",
        family: "\"Klee One\", serif",
    },
    FontOption {
        name: "禅明朝",
        value: "zen-mincho",
        family: "\"Zen Old Mincho\", serif",
    },
    FontOption {
        name: "禅アンティーク",
        value: "zen-antique",
        family: "\"Zen Antique\", serif",
    },
    FontOption {
        name: "ヒラギノ明朝",
        value: "hiragino",
        family: "\"Hiragino Mincho ProN\", serif",
    },
    FontOption {
        name: "游明朝",
        value: "yu-mincho",
        family: "\"Yu Mincho\", serif",
    },
];

/// Background catalog. The first entry is the default.
pub const BACKGROUNDS: [BackgroundStyle; 3] = [
    BackgroundStyle {
        token: "amber-red",
        from: "#fffbeb",
        to: "#fef2f2",
    },
    BackgroundStyle {
        token: "slate-blue",
        from: "#f8fafc",
        to: "#eff6ff",
    },
    BackgroundStyle {
        token: "stone-emerald",
        from: "#fafaf9",
        to: "#ecfdf5",
    },
];

/// The default font (first catalog entry).
#[must_use]
pub fn default_font() -> FontOption {
    let [first, ..] = FONTS;
    first
}

/// The default background (first catalog entry).
#[must_use]
pub fn default_background() -> BackgroundStyle {
    let [first, ..] = BACKGROUNDS;
    first
}

/// Look up a font by its CSS family string.
#[must_use]
pub fn font_by_family(family: &str) -> Option<FontOption> {
    FONTS.into_iter().find(|f| f.family == family)
}

/// Look up a background by its token.
#[must_use]
pub fn background_by_token(token: &str) -> Option<BackgroundStyle> {
    BACKGROUNDS.into_iter().find(|b| b.token == token)
}
