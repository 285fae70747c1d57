//! Deadstones: guess the dead stones of a finished Go game.
//!
//! Instead of reading life and death, this crate plays many random games
//! from the given position and looks at who ended up owning each point.
//! A chain of stones standing in what is usually the opponent's area at the
//! end of those playouts is considered dead.
//!
//! ## Modules
//!
//! - [`board`] - Board storage, chains and the text format
//! - [`liberty`] - Early-exit liberty checks
//! - [`moves`] - Simplified move legality and captures
//! - [`playout`] - Random playouts and hole filling
//! - [`deadstones`] - Ownership estimation and dead stone classification
//! - [`constants`] - Engine parameters
//! - [`logging`] - Stderr backend for the `log` facade
//!
//! ## Example
//!
//! ```
//! use deadstones::board::Board;
//! use deadstones::deadstones::classify_dead;
//!
//! let board: Board = "\
//!     . X . X .
//!     X X X X X
//!     X . O . X
//!     X X X X X
//!     . X . X .
//! "
//! .parse()
//! .unwrap();
//!
//! let dead = classify_dead(&board, 30);
//! assert_eq!(dead, vec![(2, 2)]);
//! ```

pub mod board;
pub mod constants;
pub mod deadstones;
pub mod liberty;
pub mod logging;
pub mod moves;
pub mod playout;
