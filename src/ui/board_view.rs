//! Board rendering for the Pentaroll GUI

use crate::board::{Direction, Marble, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the player did on the board this frame
#[derive(Debug, Default)]
pub struct BoardResponse {
    /// Cell the player clicked, if any
    pub clicked_cell: Option<Pos>,
    /// Direction arrow the player clicked during a push choice
    pub clicked_direction: Option<Direction>,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and report clicks.
    ///
    /// While `pending_choice` is set the arrows take click priority over
    /// the cells, so picking a direction never reads as a cell selection.
    #[allow(clippy::too_many_arguments)]
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &crate::Board,
        current_turn: Marble,
        last_move: Option<Pos>,
        pending_choice: Option<(Pos, &[Direction])>,
        winning_line: Option<[Pos; 5]>,
        accepting_input: bool,
    ) -> BoardResponse {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        // Draw board background and the playable edge ring
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_edge_ring(&painter);

        // Draw grid lines
        self.draw_grid(&painter);

        // Draw coordinate labels
        self.draw_coordinates(&painter);

        // Draw placed marbles
        self.draw_marbles(&painter, board);

        // Draw last move marker
        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        // Draw winning line highlight
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let mut board_response = BoardResponse::default();
        let pointer_pos = response.hover_pos();

        // Direction choice overlay; arrows win over cell clicks
        if let Some((pos, directions)) = pending_choice {
            self.draw_choice_ring(&painter, pos);
            for &dir in directions {
                let center = self.arrow_center(pos, dir);
                let hovered = pointer_pos
                    .is_some_and(|p| p.distance(center) <= self.arrow_radius());
                self.draw_arrow(&painter, center, dir, hovered);

                if hovered && response.clicked() {
                    board_response.clicked_direction = Some(dir);
                }
            }
        }

        if board_response.clicked_direction.is_some() {
            return board_response;
        }

        // Hover preview and cell click
        if accepting_input {
            if let Some(pointer) = pointer_pos {
                if let Some(pos) = self.screen_to_board(pointer) {
                    if pending_choice.is_none() {
                        self.draw_hover_preview(&painter, board, pos, current_turn);
                    }
                    if response.clicked() {
                        board_response.clicked_cell = Some(pos);
                    }
                }
            }
        } else if response.clicked() {
            // A click outside the arrows cancels a pending choice
            if let Some(pointer) = pointer_pos {
                board_response.clicked_cell = self.screen_to_board(pointer);
            }
        }

        board_response
    }

    /// Lighten the edge ring so the playable cells stand out
    fn draw_edge_ring(&self, painter: &Painter) {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(row, col);
                if pos.is_edge() {
                    painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, EDGE_CELL_BG);
                }
            }
        }
    }

    /// Draw the 6x6 cell grid
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 0..=BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw coordinate labels (A-F, 1-6)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;

            // Column letters across the top
            let letter = (b'A' + i as u8) as char;
            let pos = Pos2::new(self.board_rect.min.x + offset, self.board_rect.min.y + 12.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);

            // Row numbers down the left
            let pos = Pos2::new(self.board_rect.min.x + 12.0, self.board_rect.min.y + offset);
            painter.text(pos, egui::Align2::CENTER_CENTER, i + 1, font.clone(), GRID_LINE);
        }
    }

    /// Draw all placed marbles
    fn draw_marbles(&self, painter: &Painter, board: &crate::Board) {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(row, col);
                let marble = board.get(pos);

                if marble != Marble::Empty {
                    self.draw_marble(painter, pos, marble);
                }
            }
        }
    }

    /// Draw a single marble with visual polish
    fn draw_marble(&self, painter: &Painter, pos: Pos, marble: Marble) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * MARBLE_RADIUS_RATIO;

        let (body, highlight) = match marble {
            Marble::Red => (RED_MARBLE, RED_MARBLE_HIGHLIGHT),
            Marble::Green => (GREEN_MARBLE, GREEN_MARBLE_HIGHLIGHT),
            Marble::Empty => return,
        };

        // Shadow
        let shadow_offset = Vec2::new(2.0, 2.0);
        painter.circle_filled(
            center + shadow_offset,
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );

        // Main marble
        painter.circle_filled(center, radius, body);

        // Glass highlight
        let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
        painter.circle_filled(center + highlight_offset, radius * 0.25, highlight);
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.cell_center(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for i in 0..4 {
            let start = self.cell_center(line[i]);
            let end = self.cell_center(line[i + 1]);
            painter.line_segment([start, end], stroke);
        }

        // Ring each marble of the line
        for pos in line {
            let center = self.cell_center(*pos);
            let radius = self.cell_size * MARBLE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Ring the marble whose push direction is being chosen
    fn draw_choice_ring(&self, painter: &Painter, pos: Pos) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * MARBLE_RADIUS_RATIO + 4.0;
        painter.circle_stroke(center, radius, Stroke::new(3.0, CHOICE_RING));
    }

    /// Draw one clickable direction arrow
    fn draw_arrow(&self, painter: &Painter, center: Pos2, dir: Direction, hovered: bool) {
        let bg = if hovered { ARROW_BG_HOVER } else { ARROW_BG };
        painter.circle_filled(center, self.arrow_radius(), bg);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            dir.arrow(),
            egui::FontId::proportional(self.cell_size * 0.4),
            ARROW_FG,
        );
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, board: &crate::Board, pos: Pos, turn: Marble) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * MARBLE_RADIUS_RATIO;

        let color = if pos.is_edge() && board.is_empty(pos) {
            let turn_color = match turn {
                Marble::Red => RED_MARBLE,
                Marble::Green => GREEN_MARBLE,
                Marble::Empty => return,
            };
            hover_valid(turn_color)
        } else if pos.is_edge() {
            // Occupied edge cell: a click starts a push, no tint needed
            return;
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    fn arrow_radius(&self) -> f32 {
        self.cell_size * ARROW_RADIUS_RATIO
    }

    /// Screen point of the arrow for pushing from `pos` along `dir`
    fn arrow_center(&self, pos: Pos, dir: Direction) -> Pos2 {
        let (dr, dc) = dir.delta();
        let center = self.cell_center(pos);
        center + Vec2::new(dc as f32, dr as f32) * self.cell_size
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
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

    /// Screen center of a cell
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
