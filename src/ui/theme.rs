//! Theme constants for the GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 243, 236);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 60, 66);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(214, 48, 49);
pub const O_MARK: Color32 = Color32::from_rgb(9, 132, 227);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(253, 203, 110);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 80);

pub fn hover_cell() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 40)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_ERROR: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const MARK_SIZE_RATIO: f32 = 0.6;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 3.0;

/// Color for a mark, `None` for empty cells
pub fn mark_color(mark: crate::Mark) -> Option<Color32> {
    match mark {
        crate::Mark::X => Some(X_MARK),
        crate::Mark::O => Some(O_MARK),
        crate::Mark::Empty => None,
    }
}
