//! Board module tests.
//!
//! Scenario tests live here, grouped by category; `proptest.rs` holds the
//! property-based playout tests.


use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;

fn id_at(board: &Board, name: &str) -> PieceId {
    board
        .tile_named(name)
        .and_then(Tile::occupant)
        .unwrap_or_else(|| panic!("no piece on {name}"))
}

fn sq(name: &str) -> Square {
    Square::parse(name).unwrap_or_else(|| panic!("bad square {name}"))
}

mod structure_tests {
    use super::*;

    #[test]
    fn test_initial_piece_counts() {
        let board = Board::new();
        assert_eq!(board.roster(Color::Light).len(), 16);
        assert_eq!(board.roster(Color::Dark).len(), 16);
        assert_eq!(board.tiles().filter(|t| t.is_occupied()).count(), 32);
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::new();

        let light_king = id_at(&board, "e1");
        assert_eq!(board.piece(light_king).kind(), PieceKind::King);
        assert_eq!(board.piece(light_king).color(), Color::Light);

        let dark_queen = id_at(&board, "d8");
        assert_eq!(board.piece(dark_queen).kind(), PieceKind::Queen);
        assert_eq!(board.piece(dark_queen).color(), Color::Dark);

        for file in 0..8 {
            let light_pawn = board.occupant(Square(1, file)).expect("light pawn");
            assert_eq!(board.piece(light_pawn).kind(), PieceKind::Pawn);
            let dark_pawn = board.occupant(Square(6, file)).expect("dark pawn");
            assert_eq!(board.piece(dark_pawn).kind(), PieceKind::Pawn);
        }

        for rank in 2..6 {
            for file in 0..8 {
                assert!(!board.tile(Square(rank, file)).is_occupied());
            }
        }
    }

    #[test]
    fn test_tile_shades_alternate() {
        let board = Board::new();
        assert_eq!(board.tile(sq("a1")).shade(), Color::Dark);
        assert_eq!(board.tile(sq("b1")).shade(), Color::Light);
        assert_eq!(board.tile(sq("a2")).shade(), Color::Light);
        assert_eq!(board.tile(sq("h8")).shade(), Color::Dark);
    }

    #[test]
    fn test_tile_named_case_insensitive() {
        let board = Board::new();
        assert_eq!(
            board.tile_named("E4").map(Tile::square),
            Some(Square(3, 4))
        );
        assert_eq!(
            board.tile_named("e4").map(Tile::square),
            Some(Square(3, 4))
        );
    }

    #[test]
    fn test_tile_named_soft_fails() {
        let board = Board::new();
        assert!(board.tile_named("").is_none());
        assert!(board.tile_named("z9").is_none());
        assert!(board.tile_named("e0").is_none());
        assert!(board.tile_named("e10").is_none());
    }

    #[test]
    fn test_kings_found() {
        let board = Board::new();
        let light = board.king_of(Color::Light).expect("light king");
        let dark = board.king_of(Color::Dark).expect("dark king");
        assert_eq!(board.piece(light).square(), sq("e1"));
        assert_eq!(board.piece(dark).square(), sq("e8"));
    }

    #[test]
    fn test_new_board_is_consistent() {
        assert!(Board::new().is_consistent());
    }
}

mod movement_tests {
    use super::*;

    #[test]
    fn test_knight_moves_from_start() {
        let mut board = Board::new();
        let knight = id_at(&board, "g1");
        let moves = board.legal_moves(knight);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(sq("f3")));
        assert!(moves.contains(sq("h3")));
    }

    #[test]
    fn test_sliders_blocked_at_start() {
        let mut board = Board::new();
        for name in ["a1", "c1", "d1"] {
            let piece = id_at(&board, name);
            assert!(
                board.legal_moves(piece).is_empty(),
                "{name} should have no moves in the initial position"
            );
        }
    }

    #[test]
    fn test_pawn_single_and_double_step() {
        let mut board = Board::new();
        let pawn = id_at(&board, "e2");
        let moves = board.legal_moves(pawn);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(sq("e3")));
        assert!(moves.contains(sq("e4")));
    }

    #[test]
    fn test_pawn_double_step_needs_both_tiles_empty() {
        let mut board = BoardBuilder::new()
            .piece(sq("e1"), Color::Light, PieceKind::King)
            .piece(sq("e8"), Color::Dark, PieceKind::King)
            .piece(sq("a2"), Color::Light, PieceKind::Pawn)
            .piece(sq("a3"), Color::Dark, PieceKind::Knight)
            .piece(sq("b2"), Color::Light, PieceKind::Pawn)
            .piece(sq("b4"), Color::Dark, PieceKind::Knight)
            .build();

        let blocked = id_at(&board, "a2");
        assert!(board.legal_moves(blocked).is_empty());

        let half_blocked = id_at(&board, "b2");
        let moves = board.legal_moves(half_blocked);
        assert!(moves.contains(sq("b3")));
        assert!(!moves.contains(sq("b4")));
    }

    #[test]
    fn test_pawn_double_step_only_from_start_rank() {
        let mut board = BoardBuilder::new()
            .piece(sq("e1"), Color::Light, PieceKind::King)
            .piece(sq("e8"), Color::Dark, PieceKind::King)
            .piece(sq("c3"), Color::Light, PieceKind::Pawn)
            .build();

        let pawn = id_at(&board, "c3");
        let moves = board.legal_moves(pawn);
        assert!(moves.contains(sq("c4")));
        assert!(!moves.contains(sq("c5")));
    }

    #[test]
    fn test_pawn_captures_diagonally_only() {
        let mut board = BoardBuilder::new()
            .piece(sq("e1"), Color::Light, PieceKind::King)
            .piece(sq("e8"), Color::Dark, PieceKind::King)
            .piece(sq("d4"), Color::Light, PieceKind::Pawn)
            .piece(sq("d5"), Color::Dark, PieceKind::Rook)
            .piece(sq("e5"), Color::Dark, PieceKind::Rook)
            .build();

        let pawn = id_at(&board, "d4");
        let moves = board.legal_moves(pawn);
        assert!(moves.contains(sq("e5")), "diagonal capture allowed");
        assert!(!moves.contains(sq("d5")), "no forward capture");
        assert!(!moves.contains(sq("c5")), "no capture into empty tile");
    }

    #[test]
    fn test_bishop_rays_stop_at_first_piece() {
        let mut board = BoardBuilder::new()
            .piece(sq("e1"), Color::Light, PieceKind::King)
            .piece(sq("e8"), Color::Dark, PieceKind::King)
            .piece(sq("c1"), Color::Light, PieceKind::Bishop)
            .piece(sq("e3"), Color::Dark, PieceKind::Pawn)
            .piece(sq("a3"), Color::Light, PieceKind::Pawn)
            .build();

        let bishop = id_at(&board, "c1");
        let moves = board.legal_moves(bishop);
        assert!(moves.contains(sq("d2")));
        assert!(moves.contains(sq("e3")), "enemy blocker is a capture");
        assert!(!moves.contains(sq("f4")), "ray stops at the blocker");
        assert!(moves.contains(sq("b2")));
        assert!(!moves.contains(sq("a3")), "friendly blocker excluded");
    }

    #[test]
    fn test_queen_covers_both_ray_sets() {
        let mut board = BoardBuilder::new()
            .piece(sq("a1"), Color::Light, PieceKind::King)
            .piece(sq("h8"), Color::Dark, PieceKind::King)
            .piece(sq("d4"), Color::Light, PieceKind::Queen)
            .build();

        let queen = id_at(&board, "d4");
        let moves = board.legal_moves(queen);
        assert!(moves.contains(sq("d8")));
        assert!(moves.contains(sq("h4")));
        assert!(moves.contains(sq("a7")));
        assert!(moves.contains(sq("g1")));
        assert!(!moves.contains(sq("d4")), "own tile never included");
    }

    #[test]
    fn test_king_steps_one_square() {
        let mut board = BoardBuilder::new()
            .piece(sq("d4"), Color::Light, PieceKind::King)
            .piece(sq("h8"), Color::Dark, PieceKind::King)
            .build();

        let king = id_at(&board, "d4");
        let moves = board.legal_moves(king);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(sq("d6")));
    }

    #[test]
    fn test_own_square_never_a_target() {
        let mut board = Board::new();
        for color in [Color::Light, Color::Dark] {
            for id in board.pieces_of(color).collect::<Vec<_>>() {
                let own = board.piece(id).square();
                assert!(!board.legal_moves(id).contains(own));
            }
        }
    }
}

mod attack_tests {
    use super::*;

    #[test]
    fn test_pawn_attacks_diagonals_not_forward() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::Light, PieceKind::King)
            .piece(sq("e8"), Color::Dark, PieceKind::King)
            .piece(sq("d4"), Color::Light, PieceKind::Pawn)
            .build();

        assert!(board.is_square_attacked(sq("c5"), Color::Light));
        assert!(board.is_square_attacked(sq("e5"), Color::Light));
        assert!(!board.is_square_attacked(sq("d5"), Color::Light));
    }

    #[test]
    fn test_knight_attack() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::Light, PieceKind::King)
            .piece(sq("e8"), Color::Dark, PieceKind::King)
            .piece(sq("g5"), Color::Dark, PieceKind::Knight)
            .build();

        assert!(board.is_square_attacked(sq("f3"), Color::Dark));
        assert!(board.is_square_attacked(sq("e4"), Color::Dark));
        assert!(!board.is_square_attacked(sq("g4"), Color::Dark));
    }

    #[test]
    fn test_slider_attack_blocked() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::Light, PieceKind::King)
            .piece(sq("e8"), Color::Dark, PieceKind::King)
            .piece(sq("a4"), Color::Dark, PieceKind::Rook)
            .piece(sq("c4"), Color::Light, PieceKind::Pawn)
            .build();

        assert!(board.is_square_attacked(sq("b4"), Color::Dark));
        assert!(board.is_square_attacked(sq("c4"), Color::Dark));
        assert!(!board.is_square_attacked(sq("d4"), Color::Dark));
    }

    #[test]
    fn test_check_detection() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::Light, PieceKind::King)
            .piece(sq("e8"), Color::Dark, PieceKind::King)
            .piece(sq("e5"), Color::Dark, PieceKind::Rook)
            .build();

        assert!(board.is_in_check(Color::Light));
        assert!(!board.is_in_check(Color::Dark));
    }
}

mod legality_tests {
    use super::*;

    #[test]
    fn test_pinned_piece_cannot_move() {
        let mut board = BoardBuilder::new()
            .piece(sq("e1"), Color::Light, PieceKind::King)
            .piece(sq("e2"), Color::Light, PieceKind::Knight)
            .piece(sq("e8"), Color::Dark, PieceKind::Rook)
            .piece(sq("a8"), Color::Dark, PieceKind::King)
            .build();

        let knight = id_at(&board, "e2");
        assert!(board.legal_moves(knight).is_empty());
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let mut board = BoardBuilder::new()
            .piece(sq("e1"), Color::Light, PieceKind::King)
            .piece(sq("a2"), Color::Dark, PieceKind::Rook)
            .piece(sq("h8"), Color::Dark, PieceKind::King)
            .build();

        let king = id_at(&board, "e1");
        let moves = board.legal_moves(king);
        assert!(!moves.contains(sq("d2")));
        assert!(!moves.contains(sq("e2")));
        assert!(!moves.contains(sq("f2")));
        assert!(moves.contains(sq("d1")));
    }

    #[test]
    fn test_blocking_pawn_keeps_file_closed() {
        let mut board = BoardBuilder::new()
            .piece(sq("e1"), Color::Light, PieceKind::King)
            .piece(sq("e2"), Color::Light, PieceKind::Pawn)
            .piece(sq("e8"), Color::Dark, PieceKind::Rook)
            .piece(sq("a8"), Color::Dark, PieceKind::King)
            .build();

        // Rook on e8 is blocked by the pawn; no check yet.
        assert!(!board.is_in_check(Color::Light));

        let pawn = id_at(&board, "e2");
        // Forward pushes keep the file closed, so they stay legal; the
        // pawn simply blocks on a different tile.
        assert!(!board.legal_moves(pawn).is_empty());
    }

    #[test]
    fn test_hypothetical_apply_restores_everything() {
        let mut board = Board::new();
        let knight = id_at(&board, "b1");
        let before: Vec<Option<PieceId>> = board.tiles().map(Tile::occupant).collect();

        let undo = board.apply_hypothetical(knight, sq("c3"));
        assert_eq!(board.occupant(sq("c3")), Some(knight));
        assert_eq!(board.occupant(sq("b1")), None);
        board.undo(undo);

        let after: Vec<Option<PieceId>> = board.tiles().map(Tile::occupant).collect();
        assert_eq!(before, after);
        assert!(board.is_consistent());
        assert_eq!(board.piece(knight).square(), sq("b1"));
    }
}

mod observer_tests {
    use super::*;

    #[test]
    fn test_occupancy_events_on_committed_changes() {
        let mut board = Board::new();
        let events = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&events);
        board.subscribe(Arc::new(move |event| {
            if matches!(event, BoardEvent::OccupancyChanged { .. }) {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        }));

        let knight = id_at(&board, "b1");
        board.relocate(knight, sq("c3"));
        // One event for the vacated tile, one for the entered tile.
        assert_eq!(events.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_hypotheticals_are_silent() {
        let mut board = Board::new();
        let events = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&events);
        board.subscribe(Arc::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        let knight = id_at(&board, "b1");
        let undo = board.apply_hypothetical(knight, sq("c3"));
        board.undo(undo);
        assert_eq!(events.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_capture_clears_tile_and_flags() {
        let mut board = BoardBuilder::new()
            .piece(sq("e1"), Color::Light, PieceKind::King)
            .piece(sq("e8"), Color::Dark, PieceKind::King)
            .piece(sq("d5"), Color::Dark, PieceKind::Rook)
            .build();

        let rook = id_at(&board, "d5");
        board.capture(rook);
        assert!(board.piece(rook).is_captured());
        assert!(!board.tile(sq("d5")).is_occupied());
        assert!(board.legal_moves(rook).is_empty());
        assert!(!board
            .pieces_of(Color::Dark)
            .any(|id| id == rook));
    }

    #[test]
    fn test_ignored_piece_is_transparent() {
        let mut board = BoardBuilder::new()
            .piece(sq("e1"), Color::Light, PieceKind::King)
            .piece(sq("e8"), Color::Dark, PieceKind::King)
            .piece(sq("c4"), Color::Dark, PieceKind::Rook)
            .piece(sq("e4"), Color::Dark, PieceKind::Pawn)
            .build();

        // The pawn blocks the rook's ray toward g4 and attacks d3.
        assert!(!board.is_square_attacked(sq("g4"), Color::Dark));
        assert!(board.is_square_attacked(sq("d3"), Color::Dark));

        let pawn = id_at(&board, "e4");
        board.mark_ignored(pawn);

        assert!(board.is_square_attacked(sq("g4"), Color::Dark));
        assert!(!board.is_square_attacked(sq("d3"), Color::Dark));
        assert!(board.legal_moves(pawn).is_empty());
    }
}
