use std::fmt::Write;

use thiserror::Error;

use crate::{
    accumulator::PstAccumulator,
    placement::{parse_placement, PlacementError},
    pst::{self, SymmetryError, ACCUMULATION_BOUND},
    render::{render_source, render_table},
    types::{Piece, PieceParseError, PieceType, Square, SquareParseError},
};

pub const USAGE: &str = "\
usage: pstool <command>

commands:
    show <piece>            print the middlegame and endgame grids of a piece (K, n, ...)
    probe <piece> <square>  print the packed score of a piece on a square (e4 or 0-63)
    score <fen>             sum the table over a position
    source <kind>           print the authored white table of a piece kind
    verify                  check the black tables against the white ones
    help                    print this message
";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    Show(Piece),
    Probe { piece: Piece, square: Square },
    Score { fen: &'a str },
    Source(PieceType),
    Verify,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Missing {0}")]
    MissingArgument(&'static str),
    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("Unknown piece kind '{0}'")]
    UnknownKind(String),
    #[error("Invalid piece: {0}")]
    Piece(#[from] PieceParseError),
    #[error("Invalid square: {0}")]
    Square(#[from] SquareParseError),
}

impl<'a> TryFrom<&'a str> for Command<'a> {
    type Error = CommandParseError;

    fn try_from(input: &'a str) -> Result<Command<'a>, Self::Error> {
        let input = input.trim();
        let (command, rest) = input.split_once(' ').unwrap_or((input, ""));
        let rest = rest.trim();
        let mut args = rest.split_whitespace();

        let command = match command {
            "" | "help" | "--help" | "-h" => Command::Help,
            "show" => {
                let piece = args.next().ok_or(CommandParseError::MissingArgument("piece"))?;
                Command::Show(piece.parse()?)
            }
            "probe" => {
                let piece = args.next().ok_or(CommandParseError::MissingArgument("piece"))?;
                let square = args.next().ok_or(CommandParseError::MissingArgument("square"))?;
                Command::Probe {
                    piece: piece.parse()?,
                    square: square.parse()?,
                }
            }
            "score" => {
                if rest.is_empty() {
                    return Err(CommandParseError::MissingArgument("position"));
                }
                return Ok(Command::Score { fen: rest });
            }
            "source" => {
                let kind = args.next().ok_or(CommandParseError::MissingArgument("piece kind"))?;
                Command::Source(parse_kind(kind)?)
            }
            "verify" => Command::Verify,
            _ => return Err(CommandParseError::UnknownCommand(input.to_owned())),
        };

        match args.next() {
            Some(extra) => Err(CommandParseError::UnexpectedArgument(extra.to_owned())),
            None => Ok(command),
        }
    }
}

fn parse_kind(input: &str) -> Result<PieceType, CommandParseError> {
    let mut chars = input.chars();
    let single = match (chars.next(), chars.next()) {
        (Some(c), None) => PieceType::from_char(c),
        _ => None,
    };

    single
        .or_else(|| {
            PieceType::all()
                .into_iter()
                .find(|kind| kind.name().eq_ignore_ascii_case(input))
        })
        .ok_or_else(|| CommandParseError::UnknownKind(input.to_owned()))
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Command(#[from] CommandParseError),
    #[error("Invalid position: {0}")]
    Placement(#[from] PlacementError),
    #[error("Table check failed: {0}")]
    Symmetry(#[from] SymmetryError),
    #[error("Formatting failed")]
    Format(#[from] std::fmt::Error),
}

/// Runs one command line and returns what should be printed.
pub fn run(input: &str) -> Result<String, RunError> {
    let command = Command::try_from(input)?;
    tracing::debug!(?command, "running command");

    let mut out = String::new();
    match command {
        Command::Help => out.push_str(USAGE),
        Command::Show(piece) => out.push_str(&render_table(pst::global(), piece)),
        Command::Probe { piece, square } => {
            let score = pst::lookup(piece, square);
            writeln!(out, "{piece} on {square}: {score:?} (packed {})", score.raw())?;
        }
        Command::Score { fen } => {
            let pieces = parse_placement(fen)?;
            let acc = PstAccumulator::from_pieces(pieces.iter().copied());
            writeln!(out, "pieces {}", pieces.len())?;
            writeln!(out, "mg {}", acc.mg())?;
            writeln!(out, "eg {}", acc.eg())?;
        }
        Command::Source(kind) => out.push_str(&render_source(kind)),
        Command::Verify => {
            pst::global().verify()?;
            tracing::info!("piece-square table symmetry verified");
            let (mg, eg) = ACCUMULATION_BOUND;
            writeln!(out, "ok: black tables mirror white, unused codes are zero")?;
            writeln!(out, "accumulation bound: mg {mg} eg {eg} (limit {})", i16::MAX)?;
        }
    }

    Ok(out)
}
