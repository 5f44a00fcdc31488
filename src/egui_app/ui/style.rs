use eframe::egui::{Color32, Stroke, Visuals, epaint::CornerRadius, style::WidgetVisuals};

use crate::form::display::ConfidenceTone;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_hover: Color32,
    pub error_bg: Color32,
    pub error_fg: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub bar_track: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(14, 15, 17),
        bg_secondary: Color32::from_rgb(26, 28, 31),
        bg_tertiary: Color32::from_rgb(40, 43, 48),
        panel_outline: Color32::from_rgb(31, 120, 180),
        text_primary: Color32::from_rgb(214, 219, 224),
        text_muted: Color32::from_rgb(140, 146, 155),
        accent: Color32::from_rgb(31, 120, 180),
        accent_hover: Color32::from_rgb(21, 96, 160),
        error_bg: Color32::from_rgb(58, 24, 26),
        error_fg: Color32::from_rgb(255, 77, 79),
        success: Color32::from_rgb(82, 196, 26),
        warning: Color32::from_rgb(250, 173, 20),
        bar_track: Color32::from_rgb(60, 62, 66),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_tertiary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.error_fg;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    set_widget(&mut visuals.widgets.inactive, palette.bg_tertiary, palette);
    set_widget(&mut visuals.widgets.hovered, palette.accent_hover, palette);
    set_widget(&mut visuals.widgets.active, palette.accent, palette);
}

fn set_widget(vis: &mut WidgetVisuals, fill: Color32, palette: Palette) {
    vis.corner_radius = CornerRadius::same(4);
    vis.bg_fill = fill;
    vis.weak_bg_fill = fill;
    vis.bg_stroke = Stroke::new(1.0, palette.bg_tertiary);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Left accent border used on form sections.
pub fn section_stroke() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

/// Semantic tone for the status bar badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(42, 42, 42),
        StatusTone::Busy => Color32::from_rgb(31, 139, 255),
        StatusTone::Info => Color32::from_rgb(64, 140, 112),
        StatusTone::Warning => Color32::from_rgb(192, 136, 26),
        StatusTone::Error => Color32::from_rgb(192, 48, 48),
    }
}

pub fn status_badge_label(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Idle => "Idle",
        StatusTone::Busy => "Working",
        StatusTone::Info => "Info",
        StatusTone::Warning => "Warning",
        StatusTone::Error => "Error",
    }
}

/// Fill colour for the confidence bar.
pub fn confidence_color(tone: ConfidenceTone) -> Color32 {
    let palette = palette();
    match tone {
        ConfidenceTone::High => palette.success,
        ConfidenceTone::Medium => palette.warning,
        ConfidenceTone::Low => palette.error_fg,
    }
}
