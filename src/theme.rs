//! Theme Palettes
//!
//! Two named palettes (dark and light) mapping five color roles to values.
//! Switching themes writes all five as CSS custom properties on the document
//! root; chart redraws pick the new colors up from the active palette.

use wasm_bindgen::JsCast;

/// Named theme, exactly one active at a time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeName {
    Dark,
    Light,
}

impl ThemeName {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon shown on the toggle button
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "🌙",
            Self::Light => "☀️",
        }
    }
}

/// Five color roles applied document-wide and used by the chart renderer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text_primary: &'static str,
}

const DARK: Palette = Palette {
    background: "#060714",
    primary: "#00ffff",
    secondary: "#00ff9d",
    accent: "#ff6ec7",
    text_primary: "#ffffff",
};

const LIGHT: Palette = Palette {
    background: "#f5f5f5",
    primary: "#0066cc",
    secondary: "#00994d",
    accent: "#cc3d8f",
    text_primary: "#333333",
};

/// Look up the palette for a theme
pub fn palette(name: ThemeName) -> &'static Palette {
    match name {
        ThemeName::Dark => &DARK,
        ThemeName::Light => &LIGHT,
    }
}

/// The CSS custom properties a palette binds, in application order
pub fn css_variables(palette: &Palette) -> [(&'static str, &'static str); 5] {
    [
        ("--bg-dark", palette.background),
        ("--primary-color", palette.primary),
        ("--secondary-color", palette.secondary),
        ("--accent-color", palette.accent),
        ("--text-primary", palette.text_primary),
    ]
}

/// Append a ~70% alpha channel to a 6-digit hex color for chart fills
pub fn with_alpha(hex: &str) -> String {
    format!("{}B3", hex)
}

/// Write the palette's variables onto the document root
pub fn apply_palette(name: ThemeName) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };

    let style = root.style();
    for (property, value) in css_variables(palette(name)) {
        let _ = style.set_property(property, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_flips_between_two_themes() {
        assert_eq!(ThemeName::Dark.toggled(), ThemeName::Light);
        assert_eq!(ThemeName::Light.toggled(), ThemeName::Dark);
        assert_eq!(ThemeName::Dark.toggled().toggled(), ThemeName::Dark);
    }

    #[test]
    fn test_palettes_are_distinct() {
        assert_ne!(palette(ThemeName::Dark), palette(ThemeName::Light));
    }

    #[test]
    fn test_css_variables_bind_all_five_roles() {
        for name in [ThemeName::Dark, ThemeName::Light] {
            let vars = css_variables(palette(name));
            assert_eq!(vars.len(), 5);
            for (property, value) in vars {
                assert!(property.starts_with("--"));
                assert!(!value.is_empty());
            }
        }
    }

    #[test]
    fn test_with_alpha_suffix() {
        assert_eq!(with_alpha("#00ffff"), "#00ffffB3");
    }
}
