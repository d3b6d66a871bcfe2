//! Authored white piece-square tables. Rows are written rank 8 first, so each
//! literal reads like a board diagram from white's side.
//!
//! Black rows are never written by hand; see [`super::Pst::generate`].

use crate::{
    score::{Score, S},
    types::{PieceType, SquareMap},
};

// Kept away from the centre in both phases; not derived from any formula.
#[rustfmt::skip]
pub const KING_PST: SquareMap<Score> = SquareMap::visual([
    S(-1262,  -994), S( -878,  -894), S( -648, -1158), S( -571, -1304), S( -571, -1304), S( -648, -1158), S( -878,  -894), S(-1262,  -994),
    S( -962,  -839), S( -578,  -737), S( -348, -1018), S( -271, -1176), S( -271, -1176), S( -348, -1018), S( -578,  -737), S( -962,  -839),
    S( -785,  -720), S( -401,  -621), S( -170,  -911), S(  -93, -1083), S(  -93, -1083), S( -170,  -911), S( -401,  -621), S( -785,  -720),
    S( -734,  -614), S( -350,  -512), S( -119,  -816), S(  -43, -1000), S(  -43, -1000), S( -119,  -816), S( -350,  -512), S( -734,  -614),
    S( -808,  -517), S( -424,  -418), S( -193,  -734), S( -116,  -932), S( -116,  -932), S( -193,  -734), S( -424,  -418), S( -808,  -517),
    S(-1006,  -446), S( -622,  -344), S( -392,  -674), S( -315,  -884), S( -315,  -884), S( -392,  -674), S( -622,  -344), S(-1006,  -446),
    S(-1330,  -281), S( -946,  -181), S( -716,  -537), S( -639,  -771), S( -639,  -771), S( -716,  -537), S( -946,  -181), S(-1330,  -281),
    S(-1778,  -296), S(-1394,  -196), S(-1163,  -564), S(-1086,  -812), S(-1086,  -812), S(-1163,  -564), S(-1394,  -196), S(-1778,  -296),
]);

#[rustfmt::skip]
pub const PAWN_PST: SquareMap<Score> = SquareMap::visual([
    S(    0,     0), S(    0,     0), S(    0,     0), S(    0,     0), S(    0,     0), S(    0,     0), S(    0,     0), S(    0,     0),
    S(   19,   -64), S(   12,    19), S(    8,    70), S(    1,   121), S(    1,   121), S(    8,    70), S(   12,    19), S(   19,   -64),
    S(   19,   -64), S(   12,    19), S(    8,    70), S(    1,   121), S(    1,   121), S(    8,    70), S(   12,    19), S(   19,   -64),
    S(   12,   -70), S(    8,     6), S(    1,    51), S(   -1,    96), S(   -1,    96), S(    1,    51), S(    8,     6), S(   12,   -70),
    S(    8,   -76), S(    1,    -6), S(   -1,    32), S(   -8,    70), S(   -8,    70), S(   -1,    32), S(    1,    -6), S(    8,   -76),
    S(    1,   -83), S(   -1,   -19), S(   -8,    12), S(  -12,    44), S(  -12,    44), S(   -8,    12), S(   -1,   -19), S(    1,   -83),
    S(    0,   -86), S(   -4,   -25), S(  -11,     3), S(  -16,    32), S(  -16,    32), S(  -11,     3), S(   -4,   -25), S(    0,   -86),
    S(    0,     0), S(    0,     0), S(    0,     0), S(    0,     0), S(    0,     0), S(    0,     0), S(    0,     0), S(    0,     0),
]);

#[rustfmt::skip]
pub const KNIGHT_PST: SquareMap<Score> = SquareMap::visual([
    S( -629, -2070), S(  -83,  -281), S(  -60,  -190), S(  -49,  -146), S(  -49,  -146), S(  -60,  -190), S(  -83,  -281), S( -629, -2070),
    S( -112,  -326), S(  -62,  -155), S(  -24,   -32), S(  -12,    12), S(  -12,    12), S(   -8,     2), S(  -62,  -155), S( -112,  -326),
    S(  -65,  -181), S(  -16,   -12), S(   23,   110), S(   50,   192), S(   50,   192), S(   23,   110), S(  -16,   -12), S(  -65,  -181),
    S(  -58,  -159), S(   -8,     9), S(   31,   132), S(   58,   214), S(   58,   214), S(   31,   132), S(   -8,     9), S(  -58,  -159),
    S(  -56,  -188), S(   -7,   -18), S(   32,   105), S(   44,   148), S(   44,   148), S(   32,   105), S(   -7,   -18), S(  -56,  -188),
    S(  -61,  -268), S(  -12,   -98), S(   11,    -9), S(   22,    35), S(   22,    35), S(   11,    -9), S(  -12,   -98), S(  -61,  -268),
    S(  -72,  -400), S(  -39,  -265), S(  -16,  -176), S(   -5,  -131), S(   -5,  -131), S(  -16,  -176), S(  -39,  -265), S(  -72,  -400),
    S( -106,  -617), S(  -72,  -482), S(  -50,  -393), S(  -39,  -348), S(  -39,  -348), S(  -50,  -393), S(  -72,  -482), S( -106,  -617),
]);

#[rustfmt::skip]
pub const BISHOP_PST: SquareMap<Score> = SquareMap::visual([
    S(  -16,   -44), S(  -32,   -54), S(  -32,   -54), S(  -16,   -44), S(  -16,   -44), S(  -32,   -54), S(  -32,   -54), S(  -16,   -44),
    S(  -32,   -66), S(   16,    32), S(   32,    54), S(   16,    22), S(   16,    22), S(   32,    54), S(   16,    32), S(  -32,   -66),
    S(  -32,   -76), S(   16,    44), S(   32,    66), S(   32,    54), S(   32,    54), S(   32,    66), S(   16,    44), S(  -32,   -76),
    S(  -32,   -76), S(    0,     0), S(   16,    44), S(   48,    98), S(   48,    98), S(   16,    44), S(    0,     0), S(  -32,   -76),
    S(  -32,   -66), S(    0,     8), S(   32,    54), S(   48,   112), S(   48,   112), S(   32,    54), S(    0,     8), S(  -32,   -66),
    S(  -32,   -66), S(   16,    32), S(   32,    54), S(   16,    44), S(   16,    44), S(   32,    54), S(   16,    32), S(  -32,   -66),
    S(  -32,   -54), S(   16,    22), S(   16,    22), S(    0,    -8), S(    0,    -8), S(   16,    22), S(   16,    22), S(  -32,   -54),
    S(  -16,   -32), S(  -32,   -66), S(  -48,   -88), S(  -48,   -98), S(  -48,   -98), S(  -48,   -88), S(  -32,   -66), S(  -16,   -32),
]);

#[rustfmt::skip]
pub const ROOK_PST: SquareMap<Score> = SquareMap::visual([
    S(  -67,   -59), S(  -67,     9), S(  -67,    79), S(  -67,   144), S(  -67,   144), S(  -67,    79), S(  -67,     9), S(  -67,   -59),
    S(   21,   -62), S(   21,     6), S(   21,    76), S(   21,   141), S(   21,   121), S(   21,    76), S(   21,     6), S(   21,   -62),
    S(   48,   -82), S(   48,   -12), S(   48,    54), S(   48,   121), S(   48,   121), S(   48,    54), S(   48,   -12), S(   48,   -82),
    S(   39,  -101), S(   39,   -27), S(   39,    37), S(   39,   102), S(   39,   102), S(   39,    37), S(   39,   -27), S(   39,  -101),
    S(   22,   -94), S(   22,   -21), S(   22,    43), S(   22,   108), S(   22,   108), S(   22,    43), S(   22,   -21), S(   22,   -94),
    S(   20,   -85), S(   20,   -12), S(   20,    52), S(   20,   118), S(   20,   118), S(   20,    52), S(   20,   -12), S(   20,   -85),
    S(    9,   -73), S(    9,     1), S(    9,    65), S(    9,   130), S(    9,   130), S(    9,    65), S(    9,     1), S(    9,   -73),
    S(  -11,   -57), S(  -11,    17), S(  -11,    81), S(  -11,   146), S(  -11,   146), S(  -11,    81), S(  -11,    17), S(  -11,   -57),
]);

#[rustfmt::skip]
pub const QUEEN_PST: SquareMap<Score> = SquareMap::visual([
    S(  -64,   -22), S( -101,   -22), S( -127,   -22), S( -140,   -22), S( -140,   -22), S( -127,   -22), S( -101,   -22), S(  -64,   -22),
    S(  -29,   -29), S(    6,    12), S(  -19,    12), S(  -32,    12), S(  -32,    12), S(  -19,    12), S(    6,    12), S(  -29,   -29),
    S(   -6,   -35), S(   28,     6), S(   63,    38), S(   51,    38), S(   51,    38), S(   63,    38), S(   28,     6), S(   -6,   -35),
    S(    3,   -41), S(   38,     0), S(   72,    32), S(  110,    60), S(  110,    60), S(   72,    32), S(   38,     0), S(    3,   -41),
    S(    0,   -47), S(   35,    -6), S(   69,    26), S(  107,    54), S(  107,    54), S(   69,    26), S(   35,    -6), S(    0,   -47),
    S(  -16,   -53), S(   19,   -12), S(   54,    20), S(   41,    20), S(   41,    20), S(   54,    20), S(   19,   -12), S(  -16,   -53),
    S(  -45,   -60), S(   -9,   -19), S(  -35,   -19), S(  -48,   -19), S(  -48,   -19), S(  -35,   -19), S(   -9,   -19), S(  -45,   -60),
    S(  -85,   -66), S( -124,   -66), S( -149,   -66), S( -162,   -66), S( -162,   -66), S( -149,   -66), S( -124,   -66), S(  -85,   -66),
]);

pub const fn white_table(kind: PieceType) -> &'static SquareMap<Score> {
    match kind {
        PieceType::King => &KING_PST,
        PieceType::Pawn => &PAWN_PST,
        PieceType::Knight => &KNIGHT_PST,
        PieceType::Bishop => &BISHOP_PST,
        PieceType::Rook => &ROOK_PST,
        PieceType::Queen => &QUEEN_PST,
    }
}
