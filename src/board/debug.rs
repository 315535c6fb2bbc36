use super::state::Board;
use super::types::Color;

#[cfg(debug_assertions)]
impl Board {
    /// Debug helper: render the board as an ASCII grid, Dark side on top.
    pub fn render_debug(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            out.push_str(&format!("{} ", rank + 1));
            for file in 0..8 {
                let tile = self.tile(super::types::Square(rank, file));
                let symbol = match tile.occupant() {
                    Some(id) => {
                        let piece = self.piece(id);
                        let c = piece.kind().symbol();
                        if piece.color() == Color::Dark {
                            c.to_ascii_lowercase()
                        } else {
                            c
                        }
                    }
                    None => '.',
                };
                out.push(' ');
                out.push(symbol);
            }
            out.push('\n');
        }
        out.push_str("   a b c d e f g h\n");
        out
    }
}

impl Board {
    /// Verify the bidirectional occupancy invariant: every tile's occupant
    /// records that tile as its square, and every non-captured piece is the
    /// occupant of the square it records.
    pub(crate) fn is_consistent(&self) -> bool {
        for tile in self.tiles() {
            if let Some(id) = tile.occupant() {
                let piece = self.piece(id);
                if piece.square() != tile.square() || piece.is_captured() {
                    return false;
                }
            }
        }
        for color in [Color::Light, Color::Dark] {
            for &id in self.roster(color) {
                let piece = self.piece(id);
                if !piece.is_captured() && self.occupant(piece.square()) != Some(id) {
                    return false;
                }
            }
        }
        true
    }
}
