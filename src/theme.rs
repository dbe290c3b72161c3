//! Theme state machine and style-token tables.
//!
//! Two visual modes, light and dark. Every renderer looks its class names up
//! in the active mode's [`StyleTokens`], and the structural class pairs are
//! synchronized across the whole document on each mode change, so no
//! renderer carries its own light/dark branching.

/// Light or dark visual styling state. Not persisted across reloads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The single transition: flip unconditionally.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Style tokens for this mode.
    pub fn tokens(self) -> &'static StyleTokens {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

/// Class names and button label for one theme mode, consumed uniformly by
/// every renderer. The classes themselves are defined by the host
/// stylesheet; this table only decides which names get applied.
#[derive(Debug, PartialEq, Eq)]
pub struct StyleTokens {
    /// Full-name heading text color.
    pub heading: &'static str,
    /// Detail row label text color.
    pub detail_label: &'static str,
    /// Detail row value text color.
    pub detail_value: &'static str,
    /// Bio paragraph text color.
    pub bio: &'static str,
    /// Personality pill background/text variant.
    pub pill: &'static str,
    /// Toggle button label naming the mode a click would enter.
    pub toggle_label: &'static str,
}

static LIGHT: StyleTokens = StyleTokens {
    heading: "heading-light",
    detail_label: "detail-label-light",
    detail_value: "detail-value-light",
    bio: "bio-light",
    pill: "pill-light",
    toggle_label: "Enter Dark Mode",
};

static DARK: StyleTokens = StyleTokens {
    heading: "heading-dark",
    detail_label: "detail-label-dark",
    detail_value: "detail-value-dark",
    bio: "bio-dark",
    pill: "pill-dark",
    toggle_label: "Enter Light Mode",
};

/// Structural `(light, dark)` class pairs. On a mode change, every element
/// carrying the inactive half of a pair is swapped to the active half.
pub const STRUCTURAL_PAIRS: [(&str, &str); 4] = [
    ("box", "box-dark"),
    ("box-header", "box-header-dark"),
    ("box-text", "box-text-dark"),
    ("primary", "primary-dark"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_is_involutive() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_labels_name_the_next_mode() {
        assert_eq!(ThemeMode::Light.tokens().toggle_label, "Enter Dark Mode");
        assert_eq!(ThemeMode::Dark.tokens().toggle_label, "Enter Light Mode");
    }

    #[test]
    fn test_token_tables_never_share_class_names() {
        let light = ThemeMode::Light.tokens();
        let dark = ThemeMode::Dark.tokens();
        let light_classes = [
            light.heading,
            light.detail_label,
            light.detail_value,
            light.bio,
            light.pill,
        ];
        let dark_classes = [
            dark.heading,
            dark.detail_label,
            dark.detail_value,
            dark.bio,
            dark.pill,
        ];
        for class in light_classes {
            assert!(!dark_classes.contains(&class), "shared class: {class}");
        }
    }

    #[test]
    fn test_structural_pairs_are_distinct() {
        for (light, dark) in STRUCTURAL_PAIRS {
            assert_ne!(light, dark);
        }
    }
}
