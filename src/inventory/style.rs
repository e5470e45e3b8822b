use crate::scene::{Appearance, Rgb};

/// Colors and opacities of the selection, keep, and hover looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightStyle {
    pub selected_color: Rgb,
    /// Used when the original material has no metalness channel.
    pub fallback_metalness: f64,
    /// Used when the original material has no roughness channel.
    pub fallback_roughness: f64,
    pub kept_color: Rgb,
    pub kept_emissive: Rgb,
    pub kept_opacity: f64,
    pub hover_color: Rgb,
    pub hover_opacity: f64,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            selected_color: Rgb::from_hex(0xff_0000),
            fallback_metalness: 0.1,
            fallback_roughness: 0.7,
            kept_color: Rgb::from_hex(0x00_ff00),
            kept_emissive: Rgb::from_hex(0x00_4400),
            kept_opacity: 0.1,
            hover_color: Rgb::from_hex(0x00_ff00),
            hover_opacity: 0.8,
        }
    }
}

impl HighlightStyle {
    /// Layers the active overrides over the captured original.
    ///
    /// Order is kept, then selected, then hidden, so a selected part ignores
    /// the kept look and a hidden part is transparent whatever else applies.
    #[must_use]
    pub fn compose(
        &self,
        original: &Appearance,
        kept: bool,
        selected: bool,
        hidden: bool,
    ) -> Appearance {
        let mut out = *original;

        if kept {
            out.color = self.kept_color;
            out.emissive = self.kept_emissive;
            out.opacity = self.kept_opacity;
            out.transparent = true;
        }

        if selected {
            out = Appearance {
                color: self.selected_color,
                emissive: Rgb::BLACK,
                opacity: 1.0,
                transparent: false,
                metalness: Some(original.metalness.unwrap_or(self.fallback_metalness)),
                roughness: Some(original.roughness.unwrap_or(self.fallback_roughness)),
            };
        }

        if hidden {
            out.opacity = 0.0;
            out.transparent = true;
        } else if out.opacity >= 1.0 {
            out.transparent = false;
        }

        out
    }
}
