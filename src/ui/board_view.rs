//! Board rendering for the Reversi GUI

use crate::{Board, Pos, Stone, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::game_state::GameState;
use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Show dots on the human's legal cells
    pub show_legal_moves: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            show_legal_moves: true,
        }
    }
}

impl BoardView {
    /// Render the whole grid and return the clicked cell, if any.
    ///
    /// Every cell is redrawn from the session each frame.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        painter.rect_filled(self.grid_rect(), CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, state.board());

        if let Some(report) = &state.last_report {
            for &pos in &report.flipped {
                self.draw_flip_marker(&painter, pos);
            }
        }
        if let Some(pos) = state.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }

        if state.game_over().is_some() {
            painter.rect_stroke(
                self.grid_rect(),
                CornerRadius::ZERO,
                Stroke::new(4.0, WIN_HIGHLIGHT),
                StrokeKind::Outside,
            );
            return None;
        }

        if self.show_legal_moves && state.is_human_turn() && !state.is_ai_thinking() {
            for pos in state.engine().legal_moves(state.human_color()) {
                self.draw_legal_dot(&painter, pos);
            }
        }

        // Handle hover preview and click
        let pointer_pos = response.hover_pos()?;
        let board_pos = self.screen_to_board(pointer_pos)?;
        let x = board_pos.row as usize;
        let y = board_pos.col as usize;

        if !state.is_human_turn() || state.board().get(board_pos) != Stone::Empty {
            return None;
        }

        let is_valid = state.preview_hover(x, y);
        self.draw_hover_preview(&painter, board_pos, state.human_color(), is_valid);

        if response.clicked() {
            Some(board_pos)
        } else {
            None
        }
    }

    /// Playing area inside the margin
    fn grid_rect(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        )
    }

    /// Draw the 8x8 cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let grid = self.grid_rect();

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            let x = grid.min.x + offset;
            painter.line_segment([Pos2::new(x, grid.min.y), Pos2::new(x, grid.max.y)], stroke);

            // Horizontal line
            let y = grid.min.y + offset;
            painter.line_segment([Pos2::new(grid.min.x, y), Pos2::new(grid.max.x, y)], stroke);
        }
    }

    /// Draw the four marked intersections
    fn draw_star_points(&self, painter: &Painter) {
        let grid = self.grid_rect();
        for (row, col) in STAR_POINTS {
            let center = grid.min + Vec2::new(col as f32, row as f32) * self.cell_size;
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (0-7 on both axes, x down and y across)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);
        let grid = self.grid_rect();

        for i in 0..BOARD_SIZE {
            let center = (i as f32 + 0.5) * self.cell_size;

            // y across the top
            let pos = Pos2::new(grid.min.x + center, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_LABEL);

            // x down the left side
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, grid.min.y + center);
            painter.text(pos, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_LABEL);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all() {
            let stone = board.get(pos);
            if stone != Stone::Empty {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);

                // Inner shadow for depth
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Ring around a stone flipped by the last move
    fn draw_flip_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO + 2.0;
        painter.circle_stroke(center, radius, Stroke::new(2.0, FLIP_MARKER));
    }

    fn draw_legal_dot(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, self.cell_size * LEGAL_DOT_RADIUS_RATIO, legal_move_dot());
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 110),
                Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 110),
                Stone::Empty => return,
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect().min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the center of its cell on screen
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let grid = self.grid_rect();
        let x = grid.min.x + (pos.col as f32 + 0.5) * self.cell_size;
        let y = grid.min.y + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
