use std::str::FromStr;

use thiserror::Error;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Square(u8);

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    King = 1,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PieceType {
    pub const fn from_u8(p: u8) -> Option<Self> {
        match p {
            1 => Some(PieceType::King),
            2 => Some(PieceType::Pawn),
            3 => Some(PieceType::Knight),
            4 => Some(PieceType::Bishop),
            5 => Some(PieceType::Rook),
            6 => Some(PieceType::Queen),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceType::King),
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            _ => None,
        }
    }

    pub const fn all() -> [PieceType; 6] {
        [
            PieceType::King,
            PieceType::Pawn,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Rook,
            PieceType::Queen,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceType::King => "king",
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
        }
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White = 0,
    Black,
}

impl Side {
    pub const fn white(white: bool) -> Self {
        if white {
            Side::White
        } else {
            Side::Black
        }
    }

    pub const fn all() -> [Side; 2] {
        [Side::White, Side::Black]
    }
}

impl std::ops::Not for Side {
    type Output = Side;

    fn not(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// Color-qualified piece code, laid out as `kind + 8 * side`.
///
/// Code 0 is the empty square. Codes 7, 8 and 15 are never produced by
/// [`Piece::new`] but are valid table rows, so a board representation using the
/// same layout can index with any 4-bit code.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const COUNT: usize = 16;
    pub const NONE: Piece = Piece(0);

    pub const fn new(side: Side, kind: PieceType) -> Self {
        Piece(kind as u8 + 8 * side as u8)
    }

    pub const fn from_u8(code: u8) -> Option<Self> {
        if (code as usize) < Self::COUNT {
            Some(Piece(code))
        } else {
            None
        }
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// `None` for the empty code and the unused slots.
    pub const fn kind(self) -> Option<PieceType> {
        PieceType::from_u8(self.0 & 0b0111)
    }

    pub const fn side(self) -> Side {
        Side::white(self.0 & 0b1000 == 0)
    }

    /// Same kind, other side.
    pub const fn flip(self) -> Self {
        Piece(self.0 ^ 0b1000)
    }

    pub fn from_char(c: char) -> Option<Self> {
        let kind = PieceType::from_char(c)?;
        Some(Piece::new(Side::white(c.is_ascii_uppercase()), kind))
    }

    pub fn as_char(self) -> Option<char> {
        let c = self.kind()?.as_char();
        Some(match self.side() {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        })
    }

    /// The twelve playing pieces, white first.
    pub fn all() -> impl Iterator<Item = Piece> + Clone {
        Side::all()
            .into_iter()
            .flat_map(|side| PieceType::all().map(|kind| Piece::new(side, kind)))
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char().unwrap_or('-'))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PieceParseError {
    #[error("Expected a single piece letter, got '{0}'")]
    Length(String),
    #[error("Unknown piece letter '{0}'")]
    Unknown(char),
}

impl FromStr for Piece {
    type Err = PieceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::from_char(c).ok_or(PieceParseError::Unknown(c)),
            _ => Err(PieceParseError::Length(s.to_owned())),
        }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum File {
    A = 0,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    const fn index(&self) -> usize {
        *self as usize
    }

    pub const fn new(file: u8) -> Option<Self> {
        match file {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    // Only the low three bits are looked at.
    const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => File::A,
            1 => File::B,
            2 => File::C,
            3 => File::D,
            4 => File::E,
            5 => File::F,
            6 => File::G,
            _ => File::H,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => File::new(c as u8 - b'a'),
            _ => None,
        }
    }

    pub const fn all() -> [File; 8] {
        [
            File::A,
            File::B,
            File::C,
            File::D,
            File::E,
            File::F,
            File::G,
            File::H,
        ]
    }
}

impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            File::A => write!(f, "a"),
            File::B => write!(f, "b"),
            File::C => write!(f, "c"),
            File::D => write!(f, "d"),
            File::E => write!(f, "e"),
            File::F => write!(f, "f"),
            File::G => write!(f, "g"),
            File::H => write!(f, "h"),
        }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    One = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Rank {
    const fn index(&self) -> usize {
        *self as usize
    }

    pub const fn new(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Rank::One),
            1 => Some(Rank::Two),
            2 => Some(Rank::Three),
            3 => Some(Rank::Four),
            4 => Some(Rank::Five),
            5 => Some(Rank::Six),
            6 => Some(Rank::Seven),
            7 => Some(Rank::Eight),
            _ => None,
        }
    }

    const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => Rank::One,
            1 => Rank::Two,
            2 => Rank::Three,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            _ => Rank::Eight,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Rank::new(c as u8 - b'1'),
            _ => None,
        }
    }

    pub const fn all() -> [Rank; 8] {
        [
            Rank::One,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
        ]
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::One => write!(f, "1"),
            Rank::Two => write!(f, "2"),
            Rank::Three => write!(f, "3"),
            Rank::Four => write!(f, "4"),
            Rank::Five => write!(f, "5"),
            Rank::Six => write!(f, "6"),
            Rank::Seven => write!(f, "7"),
            Rank::Eight => write!(f, "8"),
        }
    }
}

impl Square {
    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);

    pub const fn from_file_rank(file: File, rank: Rank) -> Self {
        Square((file.index() + rank.index() * 8) as u8)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn from_u8(sq: u8) -> Option<Self> {
        if sq < 64 {
            Some(Square(sq))
        } else {
            None
        }
    }

    pub const fn file(self) -> File {
        File::from_bits(self.0)
    }

    pub const fn rank(self) -> Rank {
        Rank::from_bits(self.0 >> 3)
    }

    /// Vertical mirror: rank `r` becomes rank `7 - r`, the file is kept.
    pub const fn flip_rank(self) -> Self {
        Square(self.0 ^ 0b111000)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{}{}", self.file(), self.rank())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("Invalid square '{0}', expected a file and a rank like 'e4'")]
    Malformed(String),
    #[error("Square index {0} is out of range")]
    OutOfRange(u8),
}

impl FromStr for Square {
    type Err = SquareParseError;

    /// Accepts algebraic notation (`e4`) or a raw index (`28`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(index) = s.parse::<u8>() {
            return Square::from_u8(index).ok_or(SquareParseError::OutOfRange(index));
        }

        let mut chars = s.chars();
        let file = chars.next().and_then(File::from_char);
        let rank = chars.next().and_then(Rank::from_char);
        match (file, rank, chars.next()) {
            (Some(file), Some(rank), None) => Ok(Square::from_file_rank(file, rank)),
            _ => Err(SquareParseError::Malformed(s.to_owned())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SquareMap<T> {
    inner: [T; 64],
}

impl<T> SquareMap<T> {
    pub const fn new(data: [T; 64]) -> Self {
        SquareMap { inner: data }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, &T)> {
        self.inner
            .iter()
            .enumerate()
            .map(|(sq, value)| (Square(sq as u8), value))
    }

    pub const fn as_array(&self) -> &[T; 64] {
        &self.inner
    }
}

impl<T: Copy> SquareMap<T> {
    /// Builds a map from data written the way a board is printed: rank 8 in the
    /// first row, rank 1 in the last.
    pub const fn visual(mut data: [T; 64]) -> Self {
        let mut rank = 0;
        while rank < 4 {
            let mut file = 0;
            while file < 8 {
                let t = data[8 * rank + file];
                data[8 * rank + file] = data[8 * (7 - rank) + file];
                data[8 * (7 - rank) + file] = t;
                file += 1;
            }
            rank += 1;
        }
        Self { inner: data }
    }
}

impl<T: Copy + Default> Default for SquareMap<T> {
    fn default() -> Self {
        Self::new([T::default(); 64])
    }
}

impl<T> std::ops::Index<Square> for SquareMap<T> {
    type Output = T;

    fn index(&self, square: Square) -> &T {
        // SAFETY: square.0 < 64
        unsafe { self.inner.get_unchecked(square.0 as usize) }
    }
}

impl<T> std::ops::IndexMut<Square> for SquareMap<T> {
    fn index_mut(&mut self, square: Square) -> &mut T {
        // SAFETY: square.0 < 64
        unsafe { self.inner.get_unchecked_mut(square.0 as usize) }
    }
}
