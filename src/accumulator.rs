use crate::{
    pst::{lookup, ACCUMULATION_BOUND},
    score::Score,
    types::{Piece, Square},
};

/// Running piece-square total of a position.
///
/// Black rows of the table are already negated, so the total is white's
/// advantage and needs no per-side bookkeeping. The packed total only stays
/// exact while both components are within [`ACCUMULATION_BOUND`], which holds
/// for positions with at most one king and sixteen pieces per side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PstAccumulator {
    score: Score,
}

impl PstAccumulator {
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Piece, Square)>,
    {
        let mut acc = Self::default();
        for (piece, square) in pieces {
            acc.add(piece, square);
        }

        acc
    }

    #[inline]
    pub fn add(&mut self, piece: Piece, square: Square) {
        self.score += lookup(piece, square);
        self.debug_check_bound();
    }

    #[inline]
    pub fn remove(&mut self, piece: Piece, square: Square) {
        self.score -= lookup(piece, square);
    }

    #[inline]
    pub fn move_piece(&mut self, piece: Piece, from: Square, to: Square) {
        self.score += lookup(piece, to) - lookup(piece, from);
        self.debug_check_bound();
    }

    // `promoted` replaces the pawn on arrival
    pub fn promote(&mut self, pawn: Piece, from: Square, to: Square, promoted: Piece) {
        self.remove(pawn, from);
        self.add(promoted, to);
    }

    pub const fn score(&self) -> Score {
        self.score
    }

    pub const fn mg(&self) -> i16 {
        self.score.mg()
    }

    pub const fn eg(&self) -> i16 {
        self.score.eg()
    }

    #[inline]
    fn debug_check_bound(&self) {
        let (mg, eg) = ACCUMULATION_BOUND;
        debug_assert!(
            i32::from(self.mg()).abs() <= mg && i32::from(self.eg()).abs() <= eg,
            "piece-square total {:?} is outside the accumulation bound",
            self.score
        );
    }
}

impl FromIterator<(Piece, Square)> for PstAccumulator {
    fn from_iter<I: IntoIterator<Item = (Piece, Square)>>(iter: I) -> Self {
        Self::from_pieces(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        placement::{parse_placement, STARTING_POSITION_FEN},
        score::S,
        types::{PieceType, Side},
    };
    use proptest::{prop_assert_eq, proptest, sample::subsequence};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn starting_position_sums_without_overflow() {
        let pieces = parse_placement(STARTING_POSITION_FEN).unwrap();
        assert_eq!(pieces.len(), 32);

        let acc = PstAccumulator::from_pieces(pieces.iter().copied());
        let mg: i32 = pieces.iter().map(|&(p, s)| i32::from(lookup(p, s).mg())).sum();
        let eg: i32 = pieces.iter().map(|&(p, s)| i32::from(lookup(p, s).eg())).sum();
        assert_eq!(i32::from(acc.mg()), mg);
        assert_eq!(i32::from(acc.eg()), eg);

        // The start position is its own mirror.
        assert_eq!(acc.score(), Score::ZERO);
    }

    #[test]
    fn one_side_of_starting_position() {
        let pieces = parse_placement(STARTING_POSITION_FEN).unwrap();
        let white: Vec<_> = pieces
            .into_iter()
            .filter(|(p, _)| p.side() == Side::White)
            .collect();
        assert_eq!(white.len(), 16);

        let acc: PstAccumulator = white.iter().copied().collect();
        let mg: i32 = white.iter().map(|&(p, s)| i32::from(lookup(p, s).mg())).sum();
        let eg: i32 = white.iter().map(|&(p, s)| i32::from(lookup(p, s).eg())).sum();
        assert_eq!(i32::from(acc.mg()), mg);
        assert_eq!(i32::from(acc.eg()), eg);
        assert_eq!(acc.score(), S(mg as i16, eg as i16));
    }

    #[test]
    fn incremental_matches_from_scratch() {
        let white_pawn = Piece::new(Side::White, PieceType::Pawn);
        let black_pawn = Piece::new(Side::Black, PieceType::Pawn);
        let black_knight = Piece::new(Side::Black, PieceType::Knight);
        let white_bishop = Piece::new(Side::White, PieceType::Bishop);

        let mut acc =
            PstAccumulator::from_pieces(parse_placement(STARTING_POSITION_FEN).unwrap());

        // 1. e4 Nf6 2. Bc4 Nxe4
        acc.move_piece(white_pawn, sq("e2"), sq("e4"));
        acc.move_piece(black_knight, sq("g8"), sq("f6"));
        acc.move_piece(white_bishop, sq("f1"), sq("c4"));
        acc.remove(white_pawn, sq("e4"));
        acc.move_piece(black_knight, sq("f6"), sq("e4"));

        let expected = PstAccumulator::from_pieces(
            parse_placement("rnbqkb1r/pppppppp/8/8/2B1n3/8/PPPP1PPP/RNBQK1NR").unwrap(),
        );
        assert_eq!(acc, expected);

        acc.remove(black_pawn, sq("a7"));
        acc.add(black_pawn, sq("a7"));
        assert_eq!(acc, expected);
    }

    #[test]
    fn promotion() {
        let pawn = Piece::new(Side::White, PieceType::Pawn);
        let queen = Piece::new(Side::White, PieceType::Queen);
        let king = Piece::new(Side::White, PieceType::King);

        let mut acc = PstAccumulator::from_pieces([(king, sq("e1")), (pawn, sq("b7"))]);
        acc.promote(pawn, sq("b7"), sq("b8"), queen);

        assert_eq!(
            acc,
            PstAccumulator::from_pieces([(king, sq("e1")), (queen, sq("b8"))])
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the accumulation bound")]
    fn crowd_of_kings_breaks_the_bound() {
        let king = Piece::new(Side::White, PieceType::King);
        PstAccumulator::from_pieces(Square::all().map(|sq| (king, sq)));
    }

    #[test]
    fn full_sides_stay_inside_the_bound() {
        let pieces = parse_placement("qqqqqqqq/rnbqkbnr/8/8/8/8/RNBQKBNR/QQQQQQQQ").unwrap();
        let acc = PstAccumulator::from_pieces(pieces);
        assert!(i32::from(acc.mg()).abs() <= ACCUMULATION_BOUND.0);
        assert!(i32::from(acc.eg()).abs() <= ACCUMULATION_BOUND.1);
    }

    proptest! {
        // No kings and at most fifteen pieces per side, so every position
        // stays inside the accumulation bound.
        #[test]
        fn order_does_not_matter(squares in subsequence((0u8..64).collect::<Vec<_>>(), 0..31)) {
            let non_kings = Piece::all().filter(|p| p.kind() != Some(PieceType::King));
            let pieces: Vec<(Piece, Square)> = squares
                .iter()
                .zip(non_kings.cycle())
                .map(|(&sq, piece)| (piece, Square::from_u8(sq).unwrap()))
                .collect();

            let forward = PstAccumulator::from_pieces(pieces.iter().copied());
            let backward = PstAccumulator::from_pieces(pieces.iter().rev().copied());
            prop_assert_eq!(forward, backward);

            let mg: i32 = pieces.iter().map(|&(p, s)| i32::from(lookup(p, s).mg())).sum();
            prop_assert_eq!(i32::from(forward.mg()), mg);
        }
    }
}
