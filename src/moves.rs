//! Stone placement and capture for random playouts.
//!
//! This is a simplified rule set rather than real Go legality:
//! - Filling a point surrounded only by your own stones is illegal
//! - A placed group must keep at least [`LEGAL_LIBERTIES`] liberties
//!   (checked before captures are resolved), which rules out self-atari
//! - Neighboring enemy groups left without liberties are removed
//!
//! There is no ko rule; playouts are bounded by a move budget instead.

use crate::board::{Board, Sign, Vertex};
use crate::constants::{CAPTURE_LIBERTIES, LEGAL_LIBERTIES};
use crate::liberty::has_liberties;

/// Place a stone of `sign` at `vertex`.
///
/// Returns the captured vertices (possibly none) on success, or `None` if
/// the move is illegal. The board is only modified when the move succeeds.
pub fn make_move(board: &mut Board, sign: Sign, vertex: Vertex) -> Option<Vec<Vertex>> {
    if sign.is_empty() || !board.has_vertex(vertex) || !board.get(vertex).is_empty() {
        return None;
    }

    let neighbors = board.neighbors(vertex);
    let neighbor_signs: Vec<Sign> = neighbors.iter().map(|&n| board.get(n)).collect();

    // Own eye (or a 1x1 board with no neighbors at all)
    if neighbor_signs.iter().all(|&s| s == sign) {
        return None;
    }

    board.set(vertex, sign);

    if !has_liberties(board, vertex, LEGAL_LIBERTIES) {
        board.set(vertex, Sign::Empty);
        return None;
    }

    let mut dead = Vec::new();

    for (&n, &s) in neighbors.iter().zip(&neighbor_signs) {
        // Skip friends, empty points and groups removed earlier in this move
        if s != -sign || board.get(n) != s {
            continue;
        }
        if has_liberties(board, n, CAPTURE_LIBERTIES) {
            continue;
        }

        let chain = board.chain(n);
        for &c in &chain {
            board.set(c, Sign::Empty);
        }
        dead.extend(chain);
    }

    Some(dead)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_on_empty_board() {
        let mut board = Board::new(5, 5);
        assert_eq!(make_move(&mut board, Sign::Black, (2, 2)), Some(vec![]));
        assert_eq!(board.get((2, 2)), Sign::Black);
    }

    #[test]
    fn test_occupied_point_is_illegal() {
        let mut board: Board = ". X .\n. . .".parse().unwrap();
        let before = board.clone();
        assert_eq!(make_move(&mut board, Sign::White, (1, 0)), None);
        assert_eq!(make_move(&mut board, Sign::Empty, (0, 0)), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_own_eye_is_illegal() {
        let mut board: Board = "\
            . X .
            X . X
            . X .
        "
        .parse()
        .unwrap();
        let before = board.clone();
        assert_eq!(make_move(&mut board, Sign::Black, (1, 1)), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_self_atari_is_illegal() {
        // White at (0, 0) would be left with the single liberty (0, 1).
        let mut board: Board = "\
            . X .
            . . .
            . . .
        "
        .parse()
        .unwrap();
        let before = board.clone();
        assert_eq!(make_move(&mut board, Sign::White, (0, 0)), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_capture_single_stone() {
        let mut board: Board = "\
            X O . . .
            . . . . .
            . . . . .
        "
        .parse()
        .unwrap();
        let captured = make_move(&mut board, Sign::White, (0, 1));
        assert_eq!(captured, Some(vec![(0, 0)]));
        assert_eq!(board.get((0, 0)), Sign::Empty);
        assert_eq!(board.get((0, 1)), Sign::White);
    }

    #[test]
    fn test_capture_removes_whole_chain() {
        let mut board: Board = "\
            O O O . .
            X X O . .
            . O O . .
        "
        .parse()
        .unwrap();
        let mut captured = make_move(&mut board, Sign::White, (0, 2)).unwrap();
        captured.sort();
        assert_eq!(captured, vec![(0, 1), (1, 1)]);
        assert_eq!(board.get((0, 1)), Sign::Empty);
        assert_eq!(board.get((1, 1)), Sign::Empty);
    }

    #[test]
    fn test_chain_touching_twice_is_captured_once() {
        let mut board: Board = "\
            O O O O .
            O X X O .
            O X . O .
            O O O O .
        "
        .parse()
        .unwrap();
        // (2, 2) touches the black chain at (2, 1) and (1, 2).
        let captured = make_move(&mut board, Sign::White, (2, 2)).unwrap();
        assert_eq!(captured.len(), 3);
    }
}
