use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::Selection,
    Color32,
    Stroke,
    Visuals,
};

/// Accent palette used on top of the registered egui visuals. Both variants
/// are installed at startup; egui picks the active one from the theme
/// preference, so accessors only need the mode to pick against.
#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    background_dim: Color32,
    background_raised: Color32,
    foreground: Color32,
    selection: Color32,
    red: Color32,
    yellow: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::night()
    }
}

impl Theme {
    pub fn night() -> Self {
        Theme { dark: Palette::night_dark(), light: Palette::night_light() }
    }

    fn active(&self, ctx: &egui::Context) -> &Palette {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.active(ctx).purple).strong()
    }

    pub fn accent(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.active(ctx).cyan)
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.active(ctx).red
    }

    pub fn yellow(&self, ctx: &egui::Context) -> Color32 {
        self.active(ctx).yellow
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.active(ctx).green
    }

    pub fn cyan(&self, ctx: &egui::Context) -> Color32 {
        self.active(ctx).cyan
    }

    pub fn card_fill(&self, ctx: &egui::Context) -> Color32 {
        self.active(ctx).background_raised
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.active(ctx).selection.gamma_multiply(2.0)
    }
}

impl Palette {
    fn night_dark() -> Self {
        Self {
            background: Color32::from_rgb(23, 24, 38),
            background_dim: Color32::from_rgb(19, 20, 32),
            background_raised: Color32::from_rgb(42, 44, 66),
            foreground: Color32::from_rgb(204, 204, 204),
            selection: Color32::from_rgb(68, 71, 90),
            red: Color32::from_rgb(255, 121, 121),
            yellow: Color32::from_rgb(241, 250, 140),
            green: Color32::from_rgb(86, 209, 123),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(97, 175, 239),
        }
    }

    fn night_light() -> Self {
        Self {
            background: Color32::from_rgb(240, 240, 250),
            background_dim: Color32::from_rgb(220, 220, 240),
            background_raised: Color32::from_rgb(252, 252, 255),
            foreground: Color32::from_rgb(40, 40, 40),
            selection: Color32::from_rgb(200, 200, 230),
            red: Color32::from_rgb(200, 80, 80),
            yellow: Color32::from_rgb(200, 170, 60),
            green: Color32::from_rgb(80, 180, 100),
            purple: Color32::from_rgb(150, 120, 200),
            cyan: Color32::from_rgb(80, 160, 200),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let mut widgets = default.widgets.clone();
    widgets.noninteractive.bg_fill = palette.background;
    widgets.noninteractive.fg_stroke.color = palette.foreground;
    widgets.inactive.bg_fill = palette.background_raised;
    widgets.inactive.fg_stroke.color = palette.foreground;
    widgets.hovered.bg_fill = palette.selection;
    widgets.hovered.bg_stroke.color = palette.cyan;
    widgets.active.bg_fill = palette.selection;
    widgets.active.bg_stroke.color = palette.cyan;
    widgets.open.bg_stroke.color = palette.purple;

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets,
            selection: Selection {
                bg_fill: palette.selection,
                stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
            },
            hyperlink_color: palette.cyan,
            faint_bg_color: match is_dark {
                true => palette.background_dim,
                false => palette.background_raised,
            },
            extreme_bg_color: palette.background_dim,
            error_fg_color: palette.red,
            warn_fg_color: palette.yellow,
            window_shadow: Shadow { color: palette.background_dim, ..default.window_shadow },
            window_fill: palette.background,
            window_stroke: Stroke {
                color: palette.background_raised,
                ..default.window_stroke
            },
            panel_fill: palette.background,
            collapsing_header_frame: true,
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}
