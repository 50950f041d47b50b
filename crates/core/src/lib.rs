//! Core board and heading state - pure and testable
//!
//! This module holds the two pieces of shared state the rest of the workspace
//! reads and writes. It has no dependencies on terminal I/O, making it:
//!
//! - **Deterministic**: every mutation is an explicit method call
//! - **Testable**: invariants are checked by unit and property tests
//! - **Shareable**: [`DirectionState`] is `Sync` and meant to sit behind an `Arc`
//!
//! # Module Structure
//!
//! - [`board`]: occupancy grid with per-cell dirty tracking and border walls
//! - [`direction`]: current/previous heading with reversal rejection
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{BoardGrid, DirectionState};
//! use tui_snake_types::Direction;
//!
//! let heading = DirectionState::new();
//! assert!(!heading.try_set(Direction::Left)); // reversal of Right
//! assert!(heading.try_set(Direction::Up));
//! assert_eq!(heading.snapshot(), (Direction::Up, Direction::Right));
//!
//! let mut board = BoardGrid::new(4, 4);
//! board.init_walls();
//! assert!(board.occupied(0, 0));
//! assert!(!board.occupied(1, 1));
//! ```

pub mod board;
pub mod direction;

pub use tui_snake_types as types;

pub use board::BoardGrid;
pub use direction::DirectionState;
