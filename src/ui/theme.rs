//! Theme constants for the Pentaroll GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const EDGE_CELL_BG: Color32 = Color32::from_rgb(238, 203, 157); // Lighter playable ring
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);

// Marble colors with better contrast
pub const RED_MARBLE: Color32 = Color32::from_rgb(211, 47, 47);
pub const RED_MARBLE_HIGHLIGHT: Color32 = Color32::from_rgb(255, 138, 128);
pub const GREEN_MARBLE: Color32 = Color32::from_rgb(56, 142, 60);
pub const GREEN_MARBLE_HIGHLIGHT: Color32 = Color32::from_rgb(165, 214, 167);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 235, 59);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Direction arrow overlay
pub const ARROW_BG: Color32 = Color32::from_rgb(38, 50, 56);
pub const ARROW_BG_HOVER: Color32 = Color32::from_rgb(69, 90, 100);
pub const ARROW_FG: Color32 = Color32::from_rgb(236, 239, 241);
pub const CHOICE_RING: Color32 = Color32::from_rgb(255, 193, 7);

// Functions for colors that can't be const
pub fn hover_valid(turn_color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(turn_color.r(), turn_color.g(), turn_color.b(), 90)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_GOOD: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WAIT: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 30.0;
pub const MARBLE_RADIUS_RATIO: f32 = 0.38;
pub const GRID_LINE_WIDTH: f32 = 1.5;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
pub const ARROW_RADIUS_RATIO: f32 = 0.30;
