use std::{fmt, str::FromStr};

use self::Move::*;
use crate::cubie::{Corner::*, CubieCube, Edge::*, SOLVED_CUBIE_CUBE};
use crate::error::Error;

/// Layer moves, Up, Right, Front, Down, Left, Back.
///
/// $ clockwise, $2 double, $3 counter-clockwise.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            U3 => write!(f, "U'"),
            D3 => write!(f, "D'"),
            R3 => write!(f, "R'"),
            L3 => write!(f, "L'"),
            F3 => write!(f, "F'"),
            B3 => write!(f, "B'"),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(R),
            "R'" => Ok(R3),
            "R2" => Ok(R2),
            "L" => Ok(L),
            "L'" => Ok(L3),
            "L2" => Ok(L2),
            "U" => Ok(U),
            "U'" => Ok(U3),
            "U2" => Ok(U2),
            "D" => Ok(D),
            "D'" => Ok(D3),
            "D2" => Ok(D2),
            "F" => Ok(F),
            "F'" => Ok(F3),
            "F2" => Ok(F2),
            "B" => Ok(B),
            "B'" => Ok(B3),
            "B2" => Ok(B2),
            _ => Err(Error::InvalidScramble),
        }
    }
}

impl Move {
    /// True if this move is redundant right after `last`: same face again, or
    /// the second half of an opposite-face pair in the wrong order. Of two
    /// commuting moves only one order is searched.
    pub fn cancels(self, last: Move) -> bool {
        let diff = last as i8 / 3 - self as i8 / 3;
        diff == 0 || diff == 3
    }
}

/// The basic six cube moves described by permutations and changes in orientation.
///
/// U_MOVE
pub const U_MOVE: CubieCube = CubieCube {
    cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// R_MOVE
pub const R_MOVE: CubieCube = CubieCube {
    cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR], //permutation of the corners
    co: [2, 0, 0, 1, 1, 0, 0, 2],                 //changes of the orientations of the corners
    ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR], //permutation of the edges
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],     //changes of the orientations of the edges
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// F_MOVE
pub const F_MOVE: CubieCube = CubieCube {
    cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// D_MOVE
pub const D_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// L_MOVE
pub const L_MOVE: CubieCube = CubieCube {
    cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// The basic six cube moves described by permutations and changes in orientation.
///
/// B_MOVE
pub const B_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

lazy_static! {
    /// The 18 face turns as cubie cubes, indexed by `Move`. Powers of the six
    /// basic moves.
    pub static ref MOVE_CUBES: [CubieCube; 18] = {
        let basics = [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE];
        let mut mc = [SOLVED_CUBIE_CUBE; 18];
        for (f, basic) in basics.iter().enumerate() {
            let mut acc = SOLVED_CUBIE_CUBE;
            for p in 0..3 {
                acc = acc * *basic;
                mc[3 * f + p] = acc;
            }
        }
        mc
    };
}

#[cfg(test)]
mod test {
    use crate::constants::ALL_MOVES;
    use crate::cubie::SOLVED_CUBIE_CUBE;
    use crate::moves::Move::*;
    use crate::moves::*;
    use std::str::FromStr;

    #[test]
    fn test_move_cubes() {
        assert_eq!(MOVE_CUBES[U as usize], U_MOVE);
        assert_eq!(MOVE_CUBES[R2 as usize], R_MOVE * R_MOVE);
        assert_eq!(MOVE_CUBES[B3 as usize], B_MOVE * B_MOVE * B_MOVE);
        // a quarter turn has order 4
        for f in [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE] {
            assert_eq!(f * f * f * f, SOLVED_CUBIE_CUBE);
        }
    }

    #[test]
    fn test_cancels() {
        assert!(U2.cancels(U));
        assert!(U.cancels(U3));
        assert!(U.cancels(D)); // axis pairs are searched in one order only
        assert!(!D.cancels(U));
        assert!(R3.cancels(L2));
        assert!(!L.cancels(R));
        assert!(!F.cancels(U));
        assert!(!U.cancels(F2));
    }

    #[test]
    fn test_from_str() {
        for m in ALL_MOVES {
            assert_eq!(Move::from_str(&m.to_string()).unwrap(), m);
        }
        assert!(Move::from_str("X").is_err());
    }
}
