//! Board rendering for the GUI

use crate::{Board, Pos};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Side of the board being drawn
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 32.0,
            board_rect: Rect::NOTHING,
            size: 3,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any.
    ///
    /// Only empty cells report clicks, and only while `accept_input` holds.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        accept_input: bool,
    ) -> Option<Pos> {
        self.size = board.size();
        let available_size = ui.available_size();

        let board_px = (available_size.x.min(available_size.y) - 20.0).max(64.0);
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_px, board_px), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        if let Some(line) = winning_line {
            for &pos in line {
                painter.rect_filled(
                    self.cell_rect(pos).shrink(2.0),
                    CornerRadius::same(3),
                    WIN_HIGHLIGHT,
                );
            }
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        let mut clicked_pos = None;

        if accept_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    if board.is_empty(pos) {
                        painter.rect_filled(
                            self.cell_rect(pos).shrink(2.0),
                            CornerRadius::same(3),
                            hover_cell(),
                        );
                        if response.clicked() {
                            clicked_pos = Some(pos);
                        }
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the cell grid, borders included
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = self.size as f32 * self.cell_size;

        for i in 0..=self.size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        let font = egui::FontId::proportional(self.cell_size * MARK_SIZE_RATIO);
        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Pos::new(row as u8, col as u8);
                let mark = board.get(pos);
                if let Some(color) = mark_color(mark) {
                    painter.text(
                        self.cell_center(pos),
                        egui::Align2::CENTER_CENTER,
                        mark.symbol(),
                        font.clone(),
                        color,
                    );
                }
            }
        }
    }

    /// Draw last move marker in the cell corner
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.cell_rect(pos).min + Vec2::splat(LAST_MOVE_MARKER_RADIUS + 3.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col, self.size) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(size: usize) -> BoardView {
        BoardView {
            cell_size: 10.0,
            board_rect: Rect::from_min_size(
                Pos2::ZERO,
                Vec2::splat(2.0 * BOARD_MARGIN + 10.0 * size as f32),
            ),
            size,
        }
    }

    #[test]
    fn test_screen_to_board() {
        let v = view(3);
        let at = |x: f32, y: f32| v.screen_to_board(Pos2::new(BOARD_MARGIN + x, BOARD_MARGIN + y));
        assert_eq!(at(1.0, 1.0), Some(Pos::new(0, 0)));
        assert_eq!(at(25.0, 15.0), Some(Pos::new(1, 2)));
        assert_eq!(v.screen_to_board(Pos2::new(1.0, 1.0)), None);
        assert_eq!(v.screen_to_board(Pos2::new(BOARD_MARGIN + 31.0, BOARD_MARGIN)), None);
    }

    #[test]
    fn test_cell_center_round_trips() {
        let v = view(5);
        let pos = Pos::new(3, 4);
        assert_eq!(v.screen_to_board(v.cell_center(pos)), Some(pos));
    }
}
