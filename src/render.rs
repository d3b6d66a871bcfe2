use std::fmt;

use crate::{
    pst::{tables::white_table, Pst},
    score::Score,
    types::{File, Piece, PieceType, Rank, Square, SquareMap},
};

/// Middlegame and endgame grids of one table row, rank 8 on top.
pub struct TableView<'a> {
    pub pst: &'a Pst,
    pub piece: Piece,
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.pst.row(self.piece);
        let name = match self.piece.kind() {
            Some(kind) => format!("{:?} {}", self.piece.side(), kind.name()),
            None => format!("unused code {}", self.piece.as_u8()),
        };
        writeln!(f, "{} ({name})", self.piece)?;

        write_grid(f, "mg", row, Score::mg)?;
        write_grid(f, "eg", row, Score::eg)
    }
}

fn write_grid(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    row: &SquareMap<Score>,
    component: fn(Score) -> i16,
) -> fmt::Result {
    writeln!(f, "{label}")?;
    for rank in Rank::all().into_iter().rev() {
        write!(f, "{rank} |")?;
        for file in File::all() {
            write!(f, "{:>6}", component(row[Square::from_file_rank(file, rank)]))?;
        }
        writeln!(f)?;
    }

    write!(f, "   ")?;
    for file in File::all() {
        write!(f, "{:>6}", file.to_string())?;
    }
    writeln!(f)
}

/// The authored white table for a piece kind, formatted as the Rust literal
/// it is written as.
pub struct SourceView(pub PieceType);

impl fmt::Display for SourceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = white_table(self.0);
        writeln!(f, "#[rustfmt::skip]")?;
        writeln!(
            f,
            "pub const {}_PST: SquareMap<Score> = SquareMap::visual([",
            self.0.name().to_uppercase()
        )?;
        for rank in Rank::all().into_iter().rev() {
            write!(f, "   ")?;
            for file in File::all() {
                let s = table[Square::from_file_rank(file, rank)];
                write!(f, " S({:>5}, {:>5}),", s.mg(), s.eg())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "]);")
    }
}

pub fn render_table(pst: &Pst, piece: Piece) -> String {
    TableView { pst, piece }.to_string()
}

pub fn render_source(kind: PieceType) -> String {
    SourceView(kind).to_string()
}
