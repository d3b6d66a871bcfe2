use thiserror::Error;

use crate::{
    pst::MAX_PIECES_PER_SIDE,
    types::{File, Piece, PieceType, Rank, Side, Square},
};

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("Empty piece placement")]
    Empty,
    #[error("Unknown character '{0}' in piece placement")]
    UnknownCharacter(char),
    #[error("Rank {rank} describes more than 8 files")]
    RankOverflow { rank: Rank },
    #[error("Rank {rank} describes {files} files instead of 8")]
    RankUnderflow { rank: Rank, files: u8 },
    #[error("Piece placement has {0} ranks instead of 8")]
    RankCount(usize),
    #[error("{side:?} has {count} pieces, at most {max} are allowed", max = MAX_PIECES_PER_SIDE)]
    TooManyPieces { side: Side, count: usize },
    #[error("{side:?} has {count} kings")]
    TooManyKings { side: Side, count: usize },
}

/// Parses the piece placement field of a FEN string, the first
/// whitespace-separated field. Any remaining fields are ignored.
///
/// Each side may have at most [`MAX_PIECES_PER_SIDE`] pieces and one king,
/// which keeps every accepted position inside the accumulation bound.
pub fn parse_placement(fen: &str) -> Result<Vec<(Piece, Square)>, PlacementError> {
    let board = fen.split_whitespace().next().ok_or(PlacementError::Empty)?;

    let ranks: Vec<&str> = board.split('/').collect();
    if ranks.len() != 8 {
        return Err(PlacementError::RankCount(ranks.len()));
    }

    let mut pieces = Vec::with_capacity(32);
    for (row, rank) in Rank::all().into_iter().rev().zip(ranks) {
        let mut file: u8 = 0;
        for c in rank.chars() {
            if let Some(empty) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                file += empty as u8;
                if file > 8 {
                    return Err(PlacementError::RankOverflow { rank: row });
                }
                continue;
            }

            let piece = Piece::from_char(c).ok_or(PlacementError::UnknownCharacter(c))?;
            let f = File::new(file).ok_or(PlacementError::RankOverflow { rank: row })?;
            pieces.push((piece, Square::from_file_rank(f, row)));
            file += 1;
        }

        if file != 8 {
            return Err(PlacementError::RankUnderflow { rank: row, files: file });
        }
    }

    for side in Side::all() {
        let count = pieces.iter().filter(|(p, _)| p.side() == side).count();
        if count > MAX_PIECES_PER_SIDE {
            return Err(PlacementError::TooManyPieces { side, count });
        }

        let kings = pieces
            .iter()
            .filter(|(p, _)| *p == Piece::new(side, PieceType::King))
            .count();
        if kings > 1 {
            return Err(PlacementError::TooManyKings { side, count: kings });
        }
    }

    tracing::trace!(pieces = pieces.len(), "parsed piece placement");
    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn starting_position() {
        let pieces = parse_placement(STARTING_POSITION_FEN).unwrap();
        assert_eq!(pieces.len(), 32);

        // a8 comes first, h1 last
        assert_eq!(
            pieces[0],
            (
                Piece::new(Side::Black, PieceType::Rook),
                Square::from_file_rank(File::A, Rank::Eight)
            )
        );
        assert_eq!(
            pieces[4],
            (Piece::new(Side::Black, PieceType::King), Square::E8)
        );
        assert_eq!(
            pieces[31],
            (
                Piece::new(Side::White, PieceType::Rook),
                Square::from_file_rank(File::H, Rank::One)
            )
        );
        assert!(pieces.contains(&(Piece::new(Side::White, PieceType::King), Square::E1)));
    }

    #[test]
    fn full_sides_are_accepted() {
        // sixteen pieces per side with promoted queens instead of pawns
        let pieces = parse_placement("qqqqqqqq/rnbqkbnr/8/8/8/8/RNBQKBNR/QQQQQQQQ").unwrap();
        assert_eq!(pieces.len(), 32);
    }

    #[test]
    fn kiwipete() {
        let pieces =
            parse_placement("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
                .unwrap();
        assert_eq!(pieces.len(), 32);
        assert!(pieces.contains(&(
            Piece::new(Side::White, PieceType::Queen),
            Square::from_file_rank(File::F, Rank::Three)
        )));
        assert!(pieces.contains(&(
            Piece::new(Side::Black, PieceType::Pawn),
            Square::from_file_rank(File::H, Rank::Three)
        )));
    }

    #[test_case("" => Err(PlacementError::Empty); "empty")]
    #[test_case("8/8/8/8/8/8/8" => Err(PlacementError::RankCount(7)); "seven ranks")]
    #[test_case("8/8/8/8/8/8/8/8/8" => Err(PlacementError::RankCount(9)); "nine ranks")]
    #[test_case("8/8/8/8/8/8/8/7X" => Err(PlacementError::UnknownCharacter('X')); "unknown piece")]
    #[test_case("8/8/8/8/8/8/8/9" => Err(PlacementError::UnknownCharacter('9')); "nine empty")]
    #[test_case("8/8/8/8/8/8/8/44k" => Err(PlacementError::RankOverflow { rank: Rank::One }); "too many files")]
    #[test_case("8/8/8/8/8/8/8/54" => Err(PlacementError::RankOverflow { rank: Rank::One }); "too many empty files")]
    #[test_case("7/8/8/8/8/8/8/8" => Err(PlacementError::RankUnderflow { rank: Rank::Eight, files: 7 }); "too few files")]
    #[test_case("8/8/8/8/8/8/8/KKKKKKKK" => Err(PlacementError::TooManyKings { side: Side::White, count: 8 }); "eight white kings")]
    #[test_case("kk6/8/8/8/8/8/8/4K3" => Err(PlacementError::TooManyKings { side: Side::Black, count: 2 }); "two black kings")]
    #[test_case("8/8/8/8/8/PPPPPPPP/PPPPPPPP/P6K" => Err(PlacementError::TooManyPieces { side: Side::White, count: 18 }); "eighteen white pieces")]
    #[test_case("nnnnnnnn/nnnnnnnn/n7/8/8/8/8/8" => Err(PlacementError::TooManyPieces { side: Side::Black, count: 17 }); "seventeen black pieces")]
    #[test_case("KKKKKKKK/KKKKKKKK/KKKKKKKK/KKKKKKKK/KKKKKKKK/KKKKKKKK/KKKKKKKK/KKKKKKKK" => Err(PlacementError::TooManyPieces { side: Side::White, count: 64 }); "board full of kings")]
    #[test_case("8/8/8/8/8/8/8/8 w - - 0 1" => Ok(vec![]); "empty board")]
    #[test_case("8/8/8/8/8/8/8/K7" => Ok(vec![(Piece::new(Side::White, PieceType::King), Square::A1)]); "lone king")]
    fn parse(input: &str) -> Result<Vec<(Piece, Square)>, PlacementError> {
        parse_placement(input)
    }
}
