use std::fmt;

use rustc_hash::FxHashSet;

use crate::domain::board::HyperBoard;
use crate::domain::lines::Line;
use crate::domain::models::{BoardState, Token};
use crate::infrastructure::storage::{coords_to_index, index_to_coords};

const COLOR_RESET: &str = "\x1b[0m";
const COLOR_X: &str = "\x1b[31m";
const COLOR_O: &str = "\x1b[36m";
const COLOR_DIM: &str = "\x1b[90m";
const COLOR_WIN: &str = "\x1b[1;33m";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    pub color: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle { color: true }
    }
}

#[derive(Clone, Copy)]
struct Glyph {
    ch: char,
    color: Option<&'static str>,
}

const BLANK: Glyph = Glyph { ch: ' ', color: None };

/// Fixed-size character grid; each glyph remembers its own color.
struct Canvas {
    width: usize,
    height: usize,
    color: bool,
    glyphs: Vec<Glyph>,
}

impl Canvas {
    fn new(width: usize, height: usize, color: bool) -> Self {
        Canvas {
            width,
            height,
            color,
            glyphs: vec![BLANK; width * height],
        }
    }

    fn put(&mut self, x: usize, y: usize, ch: char, color: &'static str) {
        if x < self.width && y < self.height {
            self.glyphs[y * self.width + x] = Glyph {
                ch,
                color: Some(color),
            };
        }
    }

    fn text(&mut self, x: usize, y: usize, text: &str, color: &'static str) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i, y, ch, color);
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for glyph in &self.glyphs[y * self.width..(y + 1) * self.width] {
                match glyph.color {
                    Some(color) if self.color => write!(f, "{}{}{}", color, glyph.ch, COLOR_RESET)?,
                    _ => write!(f, "{}", glyph.ch)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

struct Painter<'b, S: BoardState> {
    board: &'b HyperBoard<S>,
    dimension: usize,
    side: usize,
    /// Width of the widest axis index.
    label_width: usize,
    highlight: FxHashSet<usize>,
}

/// Draws the board as nested 2-D grids. Odd layers are laid out side by
/// side, even layers stacked top to bottom; the last two axes are the rows
/// and columns of each grid.
///
/// Every grid carries column indices above it and row indices on its left.
/// On boards above two dimensions each grid is titled with the leading
/// coordinate components it stands for, e.g. `1.0.*.*`.
pub fn render_board<S: BoardState>(board: &HyperBoard<S>, style: RenderStyle) -> String {
    let side = board.side();
    let highlight: FxHashSet<usize> = board
        .winning_line()
        .map(|line| {
            line.iter()
                .filter_map(|coord| coords_to_index(coord.values(), side))
                .collect()
        })
        .unwrap_or_default();

    let painter = Painter {
        board,
        dimension: board.dimension(),
        side,
        label_width: (side - 1).to_string().len(),
        highlight,
    };
    let (w, h) = painter.block_size(painter.dimension);
    let mut canvas = Canvas::new(w, h, style.color);
    painter.draw(painter.dimension, &mut canvas, 0, 0, 0);

    canvas.to_string()
}

impl<S: BoardState> Painter<'_, S> {
    fn titled(&self) -> bool {
        self.dimension > 2
    }

    fn block_size(&self, dim: usize) -> (usize, usize) {
        let side = self.side;
        if dim <= 2 {
            let grid_w = self.label_width + 2 * side;
            if !self.titled() {
                return (grid_w, side + 1);
            }
            let title_w = (self.dimension - 2) * (self.label_width + 1) + 3;
            return (grid_w.max(title_w), side + 2);
        }

        let (child_w, child_h) = self.block_size(dim - 1);
        let gaps = side - 1;

        if dim % 2 != 0 {
            (child_w * side + 2 * gaps, child_h)
        } else {
            (child_w, child_h * side + gaps)
        }
    }

    fn draw(&self, current_dim: usize, canvas: &mut Canvas, x: usize, y: usize, base_index: usize) {
        let side = self.side;

        if current_dim <= 2 {
            self.draw_grid(canvas, x, y, base_index);
            return;
        }

        let (child_w, child_h) = self.block_size(current_dim - 1);
        let stride = side.pow((current_dim - 1) as u32);

        if current_dim % 2 != 0 {
            let gap = 2;
            for i in 0..side {
                let next_x = x + i * (child_w + gap);
                self.draw(current_dim - 1, canvas, next_x, y, base_index + i * stride);

                if i + 1 < side {
                    let sep_x = next_x + child_w + gap / 2 - 1;
                    for k in 0..child_h {
                        canvas.put(sep_x, y + k, '|', COLOR_DIM);
                    }
                }
            }
        } else {
            let gap = 1;
            for i in 0..side {
                let next_y = y + i * (child_h + gap);
                self.draw(current_dim - 1, canvas, x, next_y, base_index + i * stride);

                if i + 1 < side {
                    let sep_y = next_y + child_h;
                    for k in 0..child_w {
                        canvas.put(x + k, sep_y, '-', COLOR_DIM);
                    }
                }
            }
        }
    }

    fn draw_grid(&self, canvas: &mut Canvas, x: usize, y: usize, base_index: usize) {
        let side = self.side;
        let cells_x = x + self.label_width + 1;
        let mut top = y;

        if self.titled() {
            canvas.text(x, top, &self.title(base_index), COLOR_DIM);
            top += 1;
        }
        for col in 0..side {
            canvas.text(cells_x + 2 * col, top, &col.to_string(), COLOR_DIM);
        }
        for row in 0..side {
            let row_y = top + 1 + row;
            let label = format!("{:>width$}", row, width = self.label_width);
            canvas.text(x, row_y, &label, COLOR_DIM);
            for col in 0..side {
                let (ch, color) = self.glyph(base_index + row * side + col);
                canvas.put(cells_x + 2 * col, row_y, ch, color);
            }
        }
    }

    /// Leading components of every cell in the grid starting at `base_index`.
    fn title(&self, base_index: usize) -> String {
        let coords = index_to_coords(base_index, self.dimension, self.side);
        let mut parts: Vec<String> = coords[..self.dimension - 2]
            .iter()
            .map(|v| v.to_string())
            .collect();
        parts.push("*".to_string());
        parts.push("*".to_string());
        parts.join(".")
    }

    fn glyph(&self, cell_idx: usize) -> (char, &'static str) {
        let owner = self.board.state().cell_at(cell_idx).and_then(|c| c.owner());
        let color = match owner {
            _ if self.highlight.contains(&cell_idx) => COLOR_WIN,
            Some(Token::X) => COLOR_X,
            Some(Token::O) => COLOR_O,
            Some(Token::Blocker) | None => COLOR_DIM,
        };
        (owner.map_or('.', Token::glyph), color)
    }
}

/// One `(a b c)` row per coordinate of the line.
pub fn format_winning_path(line: &Line) -> String {
    let mut result = String::new();
    for coord in line {
        let values: Vec<String> = coord.values().iter().map(|v| v.to_string()).collect();
        result.push('(');
        result.push_str(&values.join(" "));
        result.push_str(")\n");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coordinate::Coordinate;
    use crate::domain::models::{Player, PlayerId};
    use crate::infrastructure::storage::FlatBoardState;

    const PLAIN: RenderStyle = RenderStyle { color: false };

    #[test]
    fn test_render_2d() {
        let mut board = HyperBoard::<FlatBoardState>::new(2).unwrap();
        let mut o = Player::new(PlayerId::First);
        let mut x = Player::new(PlayerId::Second);
        board.place("0.0", &mut o).unwrap();
        board.place("1.2", &mut x).unwrap();

        assert_eq!(
            render_board(&board, PLAIN),
            "  0 1 2\n0 O . .\n1 . . X\n2 . . .\n"
        );
    }

    #[test]
    fn test_render_3d_lays_layers_side_by_side() {
        let mut board = HyperBoard::<FlatBoardState>::new(3).unwrap();
        let mut x = Player::new(PlayerId::Second);
        board.place("1.0.3", &mut x).unwrap();

        let rendered = render_board(&board, PLAIN);
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], "0.*.*    | 1.*.*    | 2.*.*    | 3.*.*    ");
        assert_eq!(rows[1], "  0 1 2 3|   0 1 2 3|   0 1 2 3|   0 1 2 3");
        assert_eq!(rows[2], "0 . . . .| 0 . . . X| 0 . . . .| 0 . . . .");
        assert_eq!(rows[5], "3 . . . .| 3 . . . .| 3 . . . .| 3 . . . .");
    }

    #[test]
    fn test_render_4d_stacks_blocks() {
        let mut board = HyperBoard::<FlatBoardState>::new(4).unwrap();
        board.place_blocker(&Coordinate::new(vec![2, 2, 2, 2])).unwrap();

        let rendered = render_board(&board, PLAIN);
        let painter_size = (5 * 11 + 2 * 4, 5 * 7 + 4);
        assert_eq!(rendered.lines().count(), painter_size.1);
        assert!(rendered.lines().all(|row| row.chars().count() == painter_size.0));
        assert_eq!(rendered.matches('-').count(), 4 * painter_size.0 + 1);
    }

    #[test]
    fn test_render_labels_tell_what_to_type() {
        let mut board = HyperBoard::<FlatBoardState>::new(4).unwrap();
        let mut o = Player::new(PlayerId::First);
        board.place("3.1.4.0", &mut o).unwrap();

        let rendered = render_board(&board, PLAIN);
        let rows: Vec<&str> = rendered.lines().collect();
        // Block 3 of the first axis starts after three blocks of 7 rows and
        // their separators; block 1 of the second axis is the second column.
        let top = 3 * 8;
        assert!(rows[top].starts_with("3.0.*.*"));
        assert_eq!(&rows[top][13..20], "3.1.*.*");
        assert_eq!(&rows[top + 1][13..24], "  0 1 2 3 4");
        assert_eq!(&rows[top + 6][13..24], "4 O . . . .");
        assert_eq!(rendered.matches("2.4.*.*").count(), 1);
    }

    #[test]
    fn test_color_marks_winning_line() {
        let mut board = HyperBoard::<FlatBoardState>::new(2).unwrap();
        let mut o = Player::new(PlayerId::First);
        for raw in ["0.0", "1.1", "2.2"] {
            board.place(raw, &mut o).unwrap();
        }
        let rendered = render_board(&board, RenderStyle { color: true });
        assert_eq!(rendered.matches(COLOR_WIN).count(), 3);
    }

    #[test]
    fn test_format_winning_path() {
        let line = Line::new(vec![
            Coordinate::new(vec![0, 2]),
            Coordinate::new(vec![1, 1]),
            Coordinate::new(vec![2, 0]),
        ]);
        assert_eq!(format_winning_path(&line), "(0 2)\n(1 1)\n(2 0)\n");
    }
}
