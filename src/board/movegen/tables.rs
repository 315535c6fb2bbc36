//! Precomputed target tables for leaper pieces (knights, kings).

use once_cell::sync::Lazy;

use crate::board::types::Square;

fn leaper_targets(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
}

pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    leaper_targets(&[
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ])
});

pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    leaper_targets(&[
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ])
});
