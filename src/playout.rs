//! Random playouts (game simulation until both sides run out of moves).
//!
//! A playout fills the board with uniformly random legal moves for both
//! sides, alternating turns, until:
//! - there are no empty points left,
//! - both sides passed in a row (neither found a legal move), or
//! - the move budget is spent.
//!
//! The final arrangement, after [`fix_holes`], is one vote on who owns
//! each point.

use crate::board::{Board, Sign, Vertex};
use crate::moves::make_move;

fn side(sign: Sign) -> usize {
    match sign {
        Sign::White => 1,
        _ => 0,
    }
}

/// Play random moves on a copy of `board` starting with `sign` to move.
///
/// `budget` caps the number of turns (passes included) and defaults to the
/// number of points on the board. An empty starting sign is treated as
/// black. The input board is not modified.
pub fn simulate(board: &Board, sign: Sign, budget: Option<usize>, rng: &mut fastrand::Rng) -> Board {
    let mut board = board.clone();
    let mut sign = if sign.is_empty() { Sign::Black } else { sign };
    let mut budget = budget.unwrap_or(board.width() * board.height());

    let mut free: Vec<Vertex> = board.vertices().filter(|&v| board.get(v).is_empty()).collect();
    let mut illegal: Vec<Vertex> = Vec::new();
    let mut passed = [false; 2];
    let mut turns = 0;

    while budget > 0 {
        if free.is_empty() || (passed[0] && passed[1]) {
            break;
        }

        let mut moved = false;

        while !free.is_empty() {
            let vertex = free.swap_remove(rng.usize(..free.len()));

            match make_move(&mut board, sign, vertex) {
                Some(captured) => {
                    // Captured points are playable again
                    free.extend(captured);
                    passed[side(-sign)] = false;
                    moved = true;
                    break;
                }
                None => illegal.push(vertex),
            }
        }

        passed[side(sign)] = !moved;

        // Illegal points may become legal once the board changes
        free.append(&mut illegal);

        sign = -sign;
        budget -= 1;
        turns += 1;
    }

    let reason = if free.is_empty() {
        "board full"
    } else if passed[0] && passed[1] {
        "both passed"
    } else {
        "budget spent"
    };
    log::trace!("playout ended after {turns} turns: {reason}");

    fix_holes(&mut board);
    board
}

/// Fill single empty points whose neighbors all share one color.
///
/// This is a single pass, column by column. Points already scanned are not
/// revisited, so a run of adjacent holes may only be partly filled.
pub fn fix_holes(board: &mut Board) -> &mut Board {
    for x in 0..board.width() {
        for y in 0..board.height() {
            let vertex = (x, y);
            if !board.get(vertex).is_empty() {
                continue;
            }

            let neighbors = board.neighbors(vertex);
            let Some(&first) = neighbors.first() else {
                continue;
            };
            let sign = board.get(first);

            if !sign.is_empty() && neighbors.iter().all(|&n| board.get(n) == sign) {
                board.set(vertex, sign);
            }
        }
    }
    board
}
