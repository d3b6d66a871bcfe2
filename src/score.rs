//! Middlegame/endgame score pairs packed into one `i32`.
//!
//! The endgame half lives in the upper 16 bits and the middlegame half in the
//! lower 16 bits, so `packed = (eg << 16) + mg`. A negative middlegame value
//! borrows one from the upper half; [`Score::eg`] adds `0x8000` before shifting
//! to undo that borrow. All arithmetic on the packed word wraps modulo 2^32, which
//! keeps the encoding additive: summing packed scores and unpacking once yields
//! the component sums as long as each of them fits in an `i16`.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Score(i32);

#[allow(non_snake_case)]
pub const fn S(mg: i16, eg: i16) -> Score {
    Score((((eg as u32) << 16) as i32).wrapping_add(mg as i32))
}

impl Score {
    pub const ZERO: Score = S(0, 0);

    /// Packs wide components. Both must fit in an `i16`.
    pub fn pack(mg: i32, eg: i32) -> Score {
        debug_assert!(
            i16::try_from(mg).is_ok(),
            "middlegame component {mg} out of range"
        );
        debug_assert!(
            i16::try_from(eg).is_ok(),
            "endgame component {eg} out of range"
        );
        S(mg as i16, eg as i16)
    }

    /// Reinterprets a packed integer as produced by another engine using the
    /// same layout.
    pub const fn from_raw(raw: i32) -> Score {
        Score(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    pub const fn mg(self) -> i16 {
        self.0 as i16
    }

    pub const fn eg(self) -> i16 {
        (self.0.wrapping_add(0x8000) as u32 >> 16) as i16
    }
}

impl Add for Score {
    type Output = Score;

    #[inline]
    fn add(self, rhs: Score) -> Score {
        Score(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Score {
    #[inline]
    fn add_assign(&mut self, rhs: Score) {
        *self = *self + rhs;
    }
}

impl Sub for Score {
    type Output = Score;

    #[inline]
    fn sub(self, rhs: Score) -> Score {
        Score(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for Score {
    #[inline]
    fn sub_assign(&mut self, rhs: Score) {
        *self = *self - rhs;
    }
}

impl Neg for Score {
    type Output = Score;

    #[inline]
    fn neg(self) -> Score {
        Score(self.0.wrapping_neg())
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Score {
        iter.fold(Score::ZERO, |acc, s| acc + s)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "S({:>4}, {:>4})", self.mg(), self.eg())
    }
}

impl std::fmt::Debug for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "S({}, {})", self.mg(), self.eg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{prop_assume, proptest};

    const EDGES: [i16; 9] = [i16::MIN, i16::MIN + 1, -32000, -1, 0, 1, 32000, i16::MAX - 1, i16::MAX];

    proptest! {
        #[test]
        fn mg(mg: i16, eg: i16) {
            assert_eq!(S(mg, eg).mg(), mg)
        }

        #[test]
        fn eg(mg: i16, eg: i16) {
            assert_eq!(S(mg, eg).eg(), eg)
        }

        #[test]
        fn addition(mg1: i16, eg1: i16, mg2: i16, eg2: i16) {
            prop_assume!(mg1.checked_add(mg2).is_some());
            prop_assume!(eg1.checked_add(eg2).is_some());
            let a = S(mg1, eg1);
            let b = S(mg2, eg2);
            let add = S(mg1 + mg2, eg1 + eg2);
            assert_eq!(a + b, add);
        }

        #[test]
        fn subtraction(mg1: i16, eg1: i16, mg2: i16, eg2: i16) {
            prop_assume!(mg1.checked_sub(mg2).is_some());
            prop_assume!(eg1.checked_sub(eg2).is_some());
            let a = S(mg1, eg1);
            let b = S(mg2, eg2);
            let sub = S(mg1 - mg2, eg1 - eg2);
            assert_eq!(a - b, sub);
        }

        #[test]
        fn negation(mg: i16, eg: i16) {
            prop_assume!(mg != i16::MIN && eg != i16::MIN);
            assert_eq!(-S(mg, eg), S(-mg, -eg));
        }
    }

    #[test]
    fn every_eg_against_edge_mg() {
        for mg in EDGES {
            for eg in i16::MIN..=i16::MAX {
                let s = S(mg, eg);
                assert_eq!(s.mg(), mg, "mg of S({mg}, {eg})");
                assert_eq!(s.eg(), eg, "eg of S({mg}, {eg})");
            }
        }
    }

    #[test]
    fn every_mg_against_edge_eg() {
        for eg in EDGES {
            for mg in i16::MIN..=i16::MAX {
                let s = S(mg, eg);
                assert_eq!(s.mg(), mg, "mg of S({mg}, {eg})");
                assert_eq!(s.eg(), eg, "eg of S({mg}, {eg})");
            }
        }
    }

    #[test]
    fn negative_mg_borrows_from_eg_half() {
        // Without the rounding bias the upper half would read as eg - 1.
        let s = S(-1, 5);
        assert_eq!(s.raw(), (5 << 16) - 1);
        assert_eq!(s.raw() >> 16, 4);
        assert_eq!(s.eg(), 5);
    }

    #[test]
    fn reference_packing() {
        assert_eq!(S(-1086, -812).raw(), -53216318);
        assert_eq!(Score::from_raw(-53216318), S(-1086, -812));
        assert_eq!(Score::from_raw(65144046), S(1262, 994));
        assert_eq!(Score::pack(38, 0).raw(), 38);
    }

    #[test]
    fn sum_matches_component_sums() {
        let parts = [S(10, -20), S(-300, 45), S(7, 7), S(-1, -1)];
        let total: Score = parts.iter().copied().sum();
        assert_eq!(total, S(-284, 31));
    }

    #[test]
    fn display() {
        assert_eq!(S(-1086, -812).to_string(), "S(-1086, -812)");
        assert_eq!(format!("{:?}", S(5, -3)), "S(5, -3)");
    }
}
