//! Text rendering of the two boards side by side.

use std::fmt::Write;

use crate::board::{Board, CellView};

const BOARD_GAP: &str = "   |   ";

/// Character used for a cell in the text view.
pub fn cell_char(view: CellView) -> char {
    match view {
        CellView::Empty => '.',
        CellView::Ship => 'S',
        CellView::Miss => 'o',
        CellView::Hit => 'X',
    }
}

fn header(board: &Board, out: &mut String) {
    out.push_str("   ");
    for c in 0..board.dimension() {
        let _ = write!(out, "{:>3}", c + 1);
    }
}

fn row(board: &Board, r: usize, reveal: bool, out: &mut String) {
    let _ = write!(out, "{:>3}", r + 1);
    for c in 0..board.dimension() {
        let ch = board
            .cell_view(r, c, reveal)
            .map(cell_char)
            .unwrap_or(' ');
        let _ = write!(out, "{:>3}", ch);
    }
}

/// Render one board with row and column numbers (1-based).
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    header(board, &mut out);
    out.push('\n');
    for r in 0..board.dimension() {
        row(board, r, reveal, &mut out);
        out.push('\n');
    }
    out
}

/// Player's board on the left (always revealed), computer's on the right.
pub fn render_boards(player: &Board, computer: &Board, reveal_computer: bool) -> String {
    let mut out = String::new();
    let width = 3 + 3 * player.dimension();
    let _ = writeln!(out, "{:<width$}{}{}", "Your fleet", BOARD_GAP, "Computer", width = width);
    header(player, &mut out);
    out.push_str(BOARD_GAP);
    header(computer, &mut out);
    out.push('\n');
    let rows = player.dimension().max(computer.dimension());
    for r in 0..rows {
        let mut left = String::new();
        if r < player.dimension() {
            row(player, r, true, &mut left);
        }
        let _ = write!(out, "{:<width$}{}", left, BOARD_GAP, width = width);
        if r < computer.dimension() {
            row(computer, r, reveal_computer, &mut out);
        }
        out.push('\n');
    }
    out.push_str("Legend: S=ship  X=hit  o=miss  .=water\n");
    out
}
