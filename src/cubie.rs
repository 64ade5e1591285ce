use std::fmt;
use std::ops::Mul;

use self::{Corner::*, Edge::*};
use crate::constants::*;
use crate::moves::{Move, MOVE_CUBES};

/// Represents the 8 corners on the cube, described by the layer they are on.
///
/// Example: `ULB` (Up, Left, Back).
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Corner {
    URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB,
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Represents the 12 edges on the cube, described by the layer they are on.
///
/// Example: `BL` (Back, Left).
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Edge {
    UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Cube on the cubie level.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CubieCube {
    /// Corner permutation, relative to SOLVED_CUBIE_CUBE.
    pub cp: [Corner; 8],
    /// Corner orientation, 3 possible values: 0 (correctly oriented), 1 (twisted clockwise), 2 (twisted counter-clockwise).
    pub co: [u8; 8],
    /// Edge permutation, relative to SOLVED_CUBIE_CUBE.
    pub ep: [Edge; 12],
    /// Edge orientation, 2 possible values: 0 (correctly oriented), 1 (flipped).
    pub eo: [u8; 12],
}

/// Solved cube on the cubie level.
pub const SOLVED_CUBIE_CUBE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

impl Default for CubieCube {
    fn default() -> Self {
        SOLVED_CUBIE_CUBE
    }
}

impl Mul for CubieCube {
    type Output = Self;

    fn mul(self, rhs: CubieCube) -> Self::Output {
        let mut res = CubieCube::default();
        // (A * B).c = A(B(x).c).c
        // (A * B).o = A(B(x).c).o + B(x).o

        for i in 0..8 {
            res.cp[i] = self.cp[rhs.cp[i] as usize];
            res.co[i] = (self.co[rhs.cp[i] as usize] + rhs.co[i]) % 3;
        }

        for i in 0..12 {
            res.ep[i] = self.ep[rhs.ep[i] as usize];
            res.eo[i] = (self.eo[rhs.ep[i] as usize] + rhs.eo[i]) % 2;
        }
        res
    }
}

impl fmt::Display for CubieCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();
        for i in 0..8 {
            let cs: String = format!("({},{})", self.cp[i], self.co[i]);
            s.push_str(&cs);
        }
        for i in 0..12 {
            let es: String = format!("({},{})", self.ep[i], self.eo[i]);
            s.push_str(&es);
        }
        write!(f, "{s}")
    }
}

impl From<&Vec<Move>> for CubieCube {
    fn from(moves: &Vec<Move>) -> Self {
        CubieCube::default().apply_moves(moves)
    }
}

impl CubieCube {
    /// Applies a move to the current state.
    pub fn apply_move(self, m: Move) -> Self {
        self * MOVE_CUBES[m as usize]
    }

    /// Applies the sequence of moves to the current state.
    pub fn apply_moves(&self, moves: &[Move]) -> Self {
        moves.iter().fold(*self, |acc, &m| acc.apply_move(m))
    }

    /// Multiply this cubie cube with another cubie cube b, restricted to the corners.
    pub fn corner_multiply(&mut self, b: &CubieCube) {
        let mut c_perm = [URF; 8];
        let mut c_ori = [0; 8];
        for c in 0..8 {
            c_perm[c] = self.cp[b.cp[c] as usize];
            c_ori[c] = (self.co[b.cp[c] as usize] + b.co[c]) % 3;
        }
        self.cp = c_perm;
        self.co = c_ori;
    }

    /// Multiply this cubie cube with another cubie cube b, restricted to the edges.
    pub fn edge_multiply(&mut self, b: &CubieCube) {
        let mut e_perm = [UR; 12];
        let mut e_ori = [0; 12];
        for e in 0..12 {
            e_perm[e] = self.ep[b.ep[e] as usize];
            e_ori[e] = (self.eo[b.ep[e] as usize] + b.eo[e]) % 2;
        }
        self.ep = e_perm;
        self.eo = e_ori;
    }

    /// Get the twist of the 8 corners. 0 <= twist < 2187.
    ///
    /// The orientation of the 8th corner is determined by the other seven and not encoded.
    pub fn get_twist(&self) -> u16 {
        self.co[0..7].iter().fold(0, |acc, &o| 3 * acc + o as u16)
    }

    /// Set the twist of the 8 corners. 0 <= twist < 2187.
    pub fn set_twist(&mut self, twist: u16) {
        let mut twistparity = 0;
        let mut twist = twist;
        for i in ((URF as usize)..(DRB as usize)).rev() {
            self.co[i] = (twist % 3) as u8;
            twistparity += self.co[i];
            twist /= 3;
        }
        self.co[DRB as usize] = (3 - twistparity % 3) % 3;
    }

    /// Get the permutation of the 8 corners as a factorial-base rank. 0 <= perm < 40320.
    ///
    /// Digit k is the rank of the cubie in slot k among the cubies not seen in
    /// slots 0..k, weighted by (7 - k)!. The 8th digit is always 0 and dropped.
    pub fn get_corner_perm(&self) -> u16 {
        let mut slot: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
        let mut idx: usize = 0;
        for k in 0..7 {
            let c = self.cp[k] as usize;
            idx = idx * (8 - k) + slot[c] as usize;
            for s in &mut slot[c + 1..] {
                *s -= 1;
            }
        }
        idx as u16
    }

    /// Set the permutation of the 8 corners from its rank. 0 <= perm < 40320.
    pub fn set_corner_perm(&mut self, perm: u16) {
        let mut rest = ALL_CORNERS.to_vec();
        let mut idx = perm as usize;
        for k in 0..8 {
            let d = idx / FACTORIAL[7 - k];
            idx %= FACTORIAL[7 - k];
            self.cp[k] = rest.remove(d);
        }
    }

    /// The corner coordinate, perm * 2187 + twist. 0 <= coord < 88179840.
    ///
    /// Enumerates the 8! * 3^7 corner configurations, one coordinate per
    /// configuration. Edges do not contribute.
    pub fn get_corner_coord(&self) -> usize {
        self.get_corner_perm() as usize * N_TWIST + self.get_twist() as usize
    }

    /// Set the corners from a corner coordinate. 0 <= coord < 88179840.
    pub fn set_corner_coord(&mut self, coord: usize) {
        debug_assert!(coord < N_CORNER_STATES);
        self.set_corner_perm((coord / N_TWIST) as u16);
        self.set_twist((coord % N_TWIST) as u16);
    }
}
