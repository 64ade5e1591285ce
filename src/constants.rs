use crate::cubie::Corner::{self, *};
use crate::cubie::Edge::{self, *};
use crate::moves::Move::{self, *};

/// 3^7 = 2187 possible orientations of the 8 corners.
pub const N_TWIST: usize = 2187;
/// 8! = 40320 permutations of the 8 corners.
pub const N_CORNER_PERM: usize = 40320;
/// 8! * 3^7 = 88179840 distinct corner configurations.
pub const N_CORNER_STATES: usize = N_CORNER_PERM * N_TWIST;
/// Bytes of the packed depth table, two 4-bit entries per byte.
pub const N_TABLE_BYTES: usize = N_CORNER_STATES / 2;
/// 18 face turns, 6 faces with 3 turns each.
pub const N_MOVE: usize = 18;
/// Diameter of the corner subgroup. No corner configuration needs more turns.
pub const MAX_CORNER_DEPTH: u8 = 11;

/// FACTORIAL[n] = n!.
pub const FACTORIAL: [usize; 8] = [1, 1, 2, 6, 24, 120, 720, 5040];

pub const ALL_CORNERS: [Corner; 8] = [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB];

pub const ALL_EDGES: [Edge; 12] = [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR];

#[rustfmt::skip]
pub const ALL_MOVES: [Move; 18] = [
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
];
