//! Move generation and validation tests.

use super::{fen, position_after, sq};
use crate::board::{Color, Move, MoveError, Position, Role, SquareSet};

fn set(names: &[&str]) -> SquareSet {
    names.iter().map(|n| sq(n)).collect()
}

#[test]
fn test_initial_destinations() {
    let position = Position::new();
    assert_eq!(position.allowed_moves(sq("e2")), set(&["e3", "e4"]));
    assert_eq!(position.allowed_moves(sq("g1")), set(&["f3", "h3"]));
    assert_eq!(position.allowed_moves(sq("b8")), set(&["a6", "c6"]));
    for blocked in ["a1", "c1", "d1", "e1", "h8", "d8"] {
        assert!(position.allowed_moves(sq(blocked)).is_empty(), "{blocked}");
    }

    let all = position.all_allowed_moves();
    assert_eq!(all.len(), 32);
    assert_eq!(all.values().map(|t| t.len()).sum::<usize>(), 40);
    assert_eq!(position.legal_move_count().unwrap(), 20);
}

#[test]
fn test_empty_square_has_no_moves() {
    assert!(Position::new().allowed_moves(sq("e4")).is_empty());
    assert!(Position::new().legal_moves(sq("e4")).unwrap().is_empty());
}

#[test]
fn test_destinations_never_hold_own_pieces() {
    let position = position_after(&["e2e4", "d7d5", "g1f3", "b8c6", "f1b5"]);
    for (from, targets) in position.all_allowed_moves() {
        let color = position.piece_at(from).map(|p| p.color);
        for to in targets {
            assert_ne!(position.piece_at(to).map(|p| p.color), color, "{from}{to}");
        }
    }
}

#[test]
fn test_knight_in_corner() {
    let position = fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
    assert_eq!(position.allowed_moves(sq("a1")), set(&["b3", "c2"]));
}

#[test]
fn test_rook_stops_at_first_piece() {
    let position = fen("4k3/8/8/8/R2p4/8/8/4K3 w - - 0 1");
    let targets = position.allowed_moves(sq("a4"));
    assert_eq!(targets.len(), 10);
    assert!(targets.contains(sq("d4")));
    assert!(!targets.contains(sq("e4")));
    assert!(targets.contains(sq("a8")));
    assert!(targets.contains(sq("a1")));
}

#[test]
fn test_queen_in_centre() {
    let position = fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1");
    assert_eq!(position.allowed_moves(sq("d4")).len(), 27);
}

#[test]
fn test_bishop_blocked_by_own_pawn() {
    let position = Position::new();
    assert!(position.allowed_moves(sq("f1")).is_empty());
    let position = position_after(&["e2e4", "e7e5"]);
    assert_eq!(
        position.allowed_moves(sq("f1")),
        set(&["e2", "d3", "c4", "b5", "a6"])
    );
}

#[test]
fn test_king_steps() {
    let position = fen("4k3/8/8/8/4K3/8/8/8 w - - 0 1");
    assert_eq!(position.allowed_moves(sq("e4")).len(), 8);
}

#[test]
fn test_pawn_pushes_blocked() {
    let position = fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    assert!(position.allowed_moves(sq("e2")).is_empty());

    let position = fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
    assert_eq!(position.allowed_moves(sq("e2")), set(&["e3"]));
}

#[test]
fn test_pawn_captures_diagonally_only() {
    let position = fen("4k3/8/8/8/8/3pnp2/4P3/4K3 w - - 0 1");
    assert_eq!(position.allowed_moves(sq("e2")), set(&["d3", "f3"]));
}

#[test]
fn test_black_pawn_moves_down() {
    let position = fen("4k3/3p4/8/8/8/8/8/4K3 b - - 0 1");
    assert_eq!(position.allowed_moves(sq("d7")), set(&["d6", "d5"]));
}

#[test]
fn test_castling_available_with_clear_path() {
    let position = fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(position.allowed_moves(sq("e1")).contains(sq("g1")));
}

#[test]
fn test_castling_absent_when_path_occupied() {
    for fen_text in [
        "4k3/8/8/8/8/8/8/4KB1R w K - 0 1",
        "4k3/8/8/8/8/8/8/4K1NR w K - 0 1",
    ] {
        let position = fen(fen_text);
        assert!(!position.allowed_moves(sq("e1")).contains(sq("g1")), "{fen_text}");
    }
}

#[test]
fn test_castling_absent_without_right() {
    let position = fen("4k3/8/8/8/8/8/8/4K2R w - - 0 1");
    assert!(!position.allowed_moves(sq("e1")).contains(sq("g1")));
}

#[test]
fn test_castling_absent_through_or_out_of_check() {
    for fen_text in [
        // f1 attacked
        "4kr2/8/8/8/8/8/8/4K2R w K - 0 1",
        // g1 attacked
        "4k1r1/8/8/8/8/8/8/4K2R w K - 0 1",
        // king in check
        "4r1k1/8/8/8/8/8/8/4K2R w K - 0 1",
    ] {
        let position = fen(fen_text);
        assert!(!position.allowed_moves(sq("e1")).contains(sq("g1")), "{fen_text}");
    }

    // b1 may be attacked on the queenside
    let position = fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(position.allowed_moves(sq("e1")).contains(sq("c1")));
}

#[test]
fn test_pinned_piece_is_pseudo_legal_only() {
    let position = fen("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1");
    assert_eq!(position.allowed_moves(sq("e2")).len(), 6);
    assert!(position.legal_moves(sq("e2")).unwrap().is_empty());
}

#[test]
fn test_is_attacked() {
    let position = Position::new();
    assert!(position.is_attacked(sq("f3"), Color::White));
    assert!(!position.is_attacked(sq("e4"), Color::White));
    assert!(position.is_attacked(sq("f6"), Color::Black));
    // pawns do not attack straight ahead
    assert!(!position.is_attacked(sq("e3"), Color::Black));
}

#[test]
fn test_validate_rejections() {
    let position = Position::new();

    let err = position.validate_move(&Move::new(sq("e4"), sq("e5"))).unwrap_err();
    assert_eq!(err, MoveError::NoPieceAt { square: sq("e4") });

    let err = position.validate_move(&Move::new(sq("e7"), sq("e5"))).unwrap_err();
    assert_eq!(
        err,
        MoveError::WrongSide {
            square: sq("e7"),
            side_to_move: Color::White
        }
    );

    let err = position.validate_move(&Move::new(sq("e2"), sq("e5"))).unwrap_err();
    assert_eq!(
        err,
        MoveError::IllegalDestination {
            from: sq("e2"),
            to: sq("e5")
        }
    );

    let err = position
        .validate_move(&Move::new(sq("e2"), sq("e4")).with_promotion(Role::Queen))
        .unwrap_err();
    assert_eq!(
        err,
        MoveError::UnexpectedPromotion {
            from: sq("e2"),
            to: sq("e4")
        }
    );

    // a castle flag on an ordinary move does not match the position
    let err = position.validate_move(&Move::castle(sq("g1"), sq("f3"))).unwrap_err();
    assert!(matches!(err, MoveError::IllegalDestination { .. }));
}

#[test]
fn test_validate_rejects_king_promotion() {
    let position = fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let err = position
        .validate_move(&Move::new(sq("a7"), sq("a8")).with_promotion(Role::King))
        .unwrap_err();
    assert_eq!(err, MoveError::InvalidPromotion { role: Role::King });
}

#[test]
fn test_validate_rejects_self_check() {
    let position = fen("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1");
    let mv = position.build_move(sq("e2"), sq("c3"), None);
    assert!(position.validate_pseudo_legal(&mv).is_ok());
    assert_eq!(
        position.validate_move(&mv),
        Err(MoveError::LeavesKingInCheck {
            from: sq("e2"),
            to: sq("c3")
        })
    );
}

#[test]
fn test_build_move_infers_flags() {
    let position = fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    let castle = position.build_move(sq("e1"), sq("g1"), None);
    assert!(castle.is_castle);

    let position = position_after(&["e2e4", "a7a6", "e4e5", "d7d5"]);
    let ep = position.build_move(sq("e5"), sq("d6"), None);
    assert_eq!(ep, Move::en_passant(sq("e5"), sq("d6"), sq("d5")));

    let plain = position.build_move(sq("e5"), sq("e6"), None);
    assert_eq!(plain, Move::new(sq("e5"), sq("e6")));
}
