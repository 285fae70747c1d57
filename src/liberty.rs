//! Liberty counting with early exit.
//!
//! Callers only ever ask whether a group has *at least* a few liberties, so
//! the search stops as soon as the threshold is met instead of walking the
//! whole group.

use crate::board::{Board, Vertex};

/// Check whether the group at `start` has at least `n` liberties.
///
/// Walks the group depth-first with an explicit stack. Each visited stone
/// adds its empty neighbors to a running total; the walk stops as soon as
/// the total reaches `n`.
///
/// Liberties shared by several stones of the group are counted once per
/// stone. This only inflates the count, and the small thresholds used by
/// the move engine (1 and 2) are rarely affected.
pub fn has_liberties(board: &Board, start: Vertex, n: usize) -> bool {
    if n == 0 {
        return true;
    }
    if !board.has_vertex(start) {
        return false;
    }

    let sign = board.get(start);
    let mut visited = vec![false; board.width() * board.height()];
    let mut stack = vec![start];
    let mut count = 0;
    visited[board.vertex_to_index(start)] = true;

    while let Some(v) = stack.pop() {
        let mut friendly = Vec::with_capacity(4);
        for nb in board.neighbors(v) {
            let s = board.get(nb);
            if s.is_empty() {
                count += 1;
            } else if s == sign {
                friendly.push(nb);
            }
        }

        if count >= n {
            return true;
        }

        for nb in friendly {
            let i = board.vertex_to_index(nb);
            if !visited[i] {
                visited[i] = true;
                stack.push(nb);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_threshold_is_trivially_true() {
        let board: Board = "O X O\nX O X\nO X O".parse().unwrap();
        // Surrounded stone with no liberties still passes a zero threshold.
        assert!(has_liberties(&board, (1, 1), 0));
        assert!(!has_liberties(&board, (1, 1), 1));
    }

    #[test]
    fn test_corner_stone_has_two_liberties() {
        let mut board = Board::new(9, 9);
        board.set((0, 0), crate::board::Sign::Black);
        assert!(has_liberties(&board, (0, 0), 1));
        assert!(has_liberties(&board, (0, 0), 2));
        assert!(!has_liberties(&board, (0, 0), 3));
    }

    #[test]
    fn test_center_stone_has_four_liberties() {
        let board: Board = ". . .\n. X .\n. . .".parse().unwrap();
        assert!(has_liberties(&board, (1, 1), 4));
        assert!(!has_liberties(&board, (1, 1), 5));
    }

    #[test]
    fn test_group_liberties_follow_friendly_stones() {
        let board: Board = "\
            O X X .
            O O X O
            . O O .
        "
        .parse()
        .unwrap();
        // The black group has a single liberty at (3, 0).
        assert!(has_liberties(&board, (1, 0), 1));
        assert!(!has_liberties(&board, (1, 0), 2));
        assert!(has_liberties(&board, (2, 1), 1));
    }

    #[test]
    fn test_shared_liberty_counted_per_stone() {
        // (1, 0) and (0, 1) both touch the only liberty at (1, 1).
        let board: Board = "\
            X X
            X .
            O O
        "
        .parse()
        .unwrap();
        assert!(has_liberties(&board, (1, 0), 2));
        assert!(!has_liberties(&board, (1, 0), 3));
    }
}
