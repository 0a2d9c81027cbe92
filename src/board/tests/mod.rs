//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `apply.rs` - Move application: captures, castling, en passant, promotion
//! - `movegen.rs` - Per-role destinations and validation
//! - `check.rs` - Check, checkmate and status
//! - `perft.rs` - Legal move counts against known reference positions
//! - `proptest.rs` - Property-based tests over random playouts

mod movegen;

use super::{Position, Role, Square};

fn fen(text: &str) -> Position {
    Position::try_from_fen(text).expect("test FEN must parse")
}

fn sq(name: &str) -> Square {
    name.parse().expect("test square must parse")
}

/// Validate and apply a coordinate move for the side to move.
fn play(position: &mut Position, from: &str, to: &str) {
    play_promoting(position, from, to, None);
}

fn play_promoting(position: &mut Position, from: &str, to: &str, promotion: Option<Role>) {
    let mv = position.build_move(sq(from), sq(to), promotion);
    position
        .validate_move(&mv)
        .unwrap_or_else(|e| panic!("{from}{to} rejected: {e}"));
    position.apply_move(&mv).expect("validated move applies");
}

/// Apply a sequence like `["e2e4", "e7e5"]` from the initial setup.
fn position_after(moves: &[&str]) -> Position {
    let mut position = Position::new();
    for text in moves {
        play(&mut position, &text[0..2], &text[2..4]);
    }
    position
}
