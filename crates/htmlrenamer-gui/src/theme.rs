/// Colour scheme and visual theme for HtmlRenamer.
///
/// An "ink on paper" look: slate panels with a teal accent in dark mode,
/// warm paper tones in light mode. Widgets reference the semantic names
/// here (`success`, `warning`, ...) rather than raw hex codes.
use egui::{Color32, Stroke, Visuals};

/// Semantic colour palette.
pub struct HtmlRenamerTheme {
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub separator: Color32,
    pub selection: Color32,
}

impl HtmlRenamerTheme {
    /// Dark theme (default).
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x17, 0x1c, 0x22),
            surface: Color32::from_rgb(0x21, 0x28, 0x30),
            surface_hover: Color32::from_rgb(0x2c, 0x35, 0x40),
            text_primary: Color32::from_rgb(0xe6, 0xea, 0xee),
            text_secondary: Color32::from_rgb(0xa9, 0xb4, 0xbf),
            text_muted: Color32::from_rgb(0x6b, 0x78, 0x85),
            accent: Color32::from_rgb(0x4f, 0xc1, 0xb0),
            error: Color32::from_rgb(0xef, 0x6f, 0x6c),
            warning: Color32::from_rgb(0xf2, 0xb8, 0x4b),
            success: Color32::from_rgb(0x7b, 0xcf, 0x7a),
            separator: Color32::from_rgb(0x33, 0x3d, 0x48),
            selection: Color32::from_rgb(0x1f, 0x4a, 0x47),
        }
    }

    /// Light theme: paper background, darker teal so text stays readable.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xf4, 0xf1, 0xea),
            surface: Color32::from_rgb(0xfd, 0xfc, 0xf8),
            surface_hover: Color32::from_rgb(0xea, 0xe6, 0xdb),
            text_primary: Color32::from_rgb(0x22, 0x26, 0x2b),
            text_secondary: Color32::from_rgb(0x4d, 0x55, 0x5e),
            text_muted: Color32::from_rgb(0x8a, 0x90, 0x96),
            accent: Color32::from_rgb(0x1f, 0x8a, 0x7d),
            error: Color32::from_rgb(0xc0, 0x39, 0x2b),
            warning: Color32::from_rgb(0xb9, 0x77, 0x0e),
            success: Color32::from_rgb(0x2e, 0x7d, 0x32),
            separator: Color32::from_rgb(0xd8, 0xd2, 0xc4),
            selection: Color32::from_rgba_unmultiplied(0x1f, 0x8a, 0x7d, 0x40),
        }
    }

    pub fn for_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Palette matching whatever visuals `ui` is currently drawn with.
    pub fn of(ui: &egui::Ui) -> Self {
        Self::for_dark_mode(ui.visuals().dark_mode)
    }

    /// Install this palette as the context's style.
    pub fn apply(&self, ctx: &egui::Context, dark_mode: bool) {
        let mut visuals = if dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.extreme_bg_color = self.background;
        visuals.window_fill = self.surface;
        visuals.faint_bg_color = self.surface;
        visuals.window_stroke = Stroke::new(1.0, self.separator);
        visuals.hyperlink_color = self.accent;
        visuals.warn_fg_color = self.warning;
        visuals.error_fg_color = self.error;
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        let w = &mut visuals.widgets;
        for (widget, fill, text) in [
            (&mut w.noninteractive, self.surface, self.text_primary),
            (&mut w.inactive, self.surface, self.text_secondary),
            (&mut w.hovered, self.surface_hover, self.accent),
            (&mut w.active, self.accent, self.background),
        ] {
            widget.bg_fill = fill;
            widget.weak_bg_fill = fill;
            widget.fg_stroke = Stroke::new(1.0, text);
        }

        ctx.style_mut(|style| {
            style.visuals = visuals;
            style.spacing.item_spacing = egui::vec2(6.0, 5.0);
            style.spacing.button_padding = egui::vec2(10.0, 4.0);
        });
    }
}
