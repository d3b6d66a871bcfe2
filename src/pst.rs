pub mod tables;

use static_init::dynamic;
use thiserror::Error;

use crate::{
    score::Score,
    types::{Piece, PieceType, Side, Square, SquareMap},
};
use tables::{white_table, KING_PST};

/// Packed scores for every piece code and square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pst {
    rows: [SquareMap<Score>; Piece::COUNT],
}

// Built once, by whichever thread reads it first.
#[dynamic]
static PST: Pst = Pst::generate();

/// Score of `piece` standing on `square`, from white's point of view.
#[inline]
pub fn lookup(piece: Piece, square: Square) -> Score {
    PST.get(piece, square)
}

/// The process-wide table.
pub fn global() -> &'static Pst {
    &PST
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymmetryError {
    #[error("{piece} on {square} is {actual:?}, expected {expected:?} from the white value on {mirror}")]
    Mirror {
        piece: Piece,
        square: Square,
        mirror: Square,
        expected: Score,
        actual: Score,
    },
    #[error("Unused piece code {code} holds {value:?} on {square}")]
    UnusedSlot { code: u8, square: Square, value: Score },
}

impl Pst {
    /// Copies the white tables and derives black ones by flipping ranks and
    /// negating both components. All other piece codes stay zero.
    pub fn generate() -> Self {
        let mut rows = [SquareMap::new([Score::ZERO; 64]); Piece::COUNT];

        for kind in PieceType::all() {
            let white = white_table(kind);
            rows[Piece::new(Side::White, kind).index()] = *white;

            let mut black = SquareMap::default();
            for sq in Square::all() {
                black[sq] = mirrored(white[sq.flip_rank()]);
            }
            rows[Piece::new(Side::Black, kind).index()] = black;
        }

        let pst = Pst { rows };
        debug_assert_eq!(pst.verify(), Ok(()));
        tracing::debug!(rows = Piece::COUNT, "generated piece-square table");
        pst
    }

    #[inline]
    pub fn get(&self, piece: Piece, square: Square) -> Score {
        debug_assert!(piece.index() < Piece::COUNT);
        // SAFETY: piece codes are always below Piece::COUNT
        unsafe { self.rows.get_unchecked(piece.index())[square] }
    }

    pub fn row(&self, piece: Piece) -> &SquareMap<Score> {
        &self.rows[piece.index()]
    }

    /// Checks that every black entry is the negated rank mirror of the white
    /// one and that unused piece codes are zero everywhere.
    pub fn verify(&self) -> Result<(), SymmetryError> {
        let result = self.find_asymmetry();
        if let Err(error) = &result {
            tracing::error!(%error, "piece-square table symmetry check failed");
        }

        result
    }

    fn find_asymmetry(&self) -> Result<(), SymmetryError> {
        for code in 0..Piece::COUNT as u8 {
            let Some(piece) = Piece::from_u8(code) else {
                continue;
            };

            match piece.kind() {
                None => {
                    if let Some((square, value)) =
                        self.row(piece).iter().find(|(_, value)| **value != Score::ZERO)
                    {
                        return Err(SymmetryError::UnusedSlot {
                            code,
                            square,
                            value: *value,
                        });
                    }
                }
                Some(_) if piece.side() == Side::Black => {
                    let white = piece.flip();
                    for square in Square::all() {
                        let mirror = square.flip_rank();
                        let expected = mirrored(self.get(white, mirror));
                        let actual = self.get(piece, square);
                        if actual != expected {
                            return Err(SymmetryError::Mirror {
                                piece,
                                square,
                                mirror,
                                expected,
                                actual,
                            });
                        }
                    }
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

fn mirrored(white: Score) -> Score {
    Score::pack(-i32::from(white.mg()), -i32::from(white.eg()))
}

pub const MAX_PIECES_PER_SIDE: usize = 16;

/// Upper bound on the absolute middlegame and endgame totals of any position
/// with at most [`MAX_PIECES_PER_SIDE`] pieces per side.
///
/// Per side: the king on its worst square plus the fifteen worst non-king
/// squares, each square counted once. Black mirrors white, so both sides share
/// the same bound.
pub const ACCUMULATION_BOUND: (i32, i32) = (2 * side_bound(false), 2 * side_bound(true));

const _: () = assert!(
    ACCUMULATION_BOUND.0 <= i16::MAX as i32 && ACCUMULATION_BOUND.1 <= i16::MAX as i32,
    "piece-square totals could overflow a packed score"
);

const fn magnitude(s: Score, eg: bool) -> i32 {
    let v = (if eg { s.eg() } else { s.mg() }) as i32;
    if v < 0 {
        -v
    } else {
        v
    }
}

const fn side_bound(eg: bool) -> i32 {
    let mut king = 0;
    let mut sq = 0;
    while sq < 64 {
        let m = magnitude(KING_PST.as_array()[sq], eg);
        if m > king {
            king = m;
        }
        sq += 1;
    }

    let kinds = PieceType::all();
    let mut worst = [0i32; 64];
    let mut k = 0;
    while k < kinds.len() {
        if !matches!(kinds[k], PieceType::King) {
            let table = white_table(kinds[k]).as_array();
            sq = 0;
            while sq < 64 {
                let m = magnitude(table[sq], eg);
                if m > worst[sq] {
                    worst[sq] = m;
                }
                sq += 1;
            }
        }
        k += 1;
    }

    let mut total = king;
    let mut taken = 1;
    while taken < MAX_PIECES_PER_SIDE {
        let mut best = 0;
        let mut i = 1;
        while i < 64 {
            if worst[i] > worst[best] {
                best = i;
            }
            i += 1;
        }
        total += worst[best];
        worst[best] = -1;
        taken += 1;
    }

    total
}
