use std::io::{Read, Write};

use crate::constants::*;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::moves::{Move, MOVE_CUBES};
use crate::write_table;

/// Packed array of 4-bit entries, two per byte.
///
/// Entry `i` lives in byte `i / 2`, in the low nibble for even `i` and in the
/// high nibble for odd `i`.
pub struct NibbleArray {
    data: Vec<u8>,
}

impl NibbleArray {
    /// A zero-filled array with room for `len` entries.
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![0; (len + 1) / 2],
        }
    }

    pub fn get(&self, ix: usize) -> u8 {
        let b = self.data[ix / 2];
        match ix % 2 {
            0 => b & 0x0f,
            _ => b >> 4,
        }
    }

    /// Write `value` into entry `ix`. The sibling nibble is left untouched.
    pub fn set(&mut self, ix: usize, value: u8) {
        debug_assert!(value <= 0x0f);
        let b = &mut self.data[ix / 2];
        match ix % 2 {
            0 => *b = (*b & 0xf0) | value,
            _ => *b = (*b & 0x0f) | (value << 4),
        }
    }

    /// Zero all entries.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// A frame of the depth-first search over the turn graph.
struct Frame {
    cube: CubieCube,
    last: Option<Move>,
    dist: u8,
}

/// The corner depth table holds, for every one of the 8! * 3^7 corner
/// configurations, the minimum number of face turns to reach it from the
/// reference cube. Solvers read it as an admissible lower bound.
///
/// A nibble stores distance + 1 so that 0 can mean "not yet filled" during
/// generation; `lookup` undoes the shift. The largest stored value is 12.
pub struct CornerDepthTable {
    depths: NibbleArray,
}

impl Default for CornerDepthTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CornerDepthTable {
    /// An empty table of 44089920 bytes. Fill it with `generate` or `read`.
    pub fn new() -> Self {
        Self {
            depths: NibbleArray::new(N_CORNER_STATES),
        }
    }

    /// The minimum number of face turns to bring the corners of `cc` into the
    /// reference configuration.
    pub fn lookup(&self, cc: &CubieCube) -> u8 {
        let depth = self.depths.get(cc.get_corner_coord());
        debug_assert!(depth != 0, "depth table entry not filled");
        depth - 1
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.depths.as_bytes()
    }

    /// Fill the table with the distances of all corner configurations from
    /// `reference`, by iterative deepening over the 18 face turns.
    ///
    /// Each round searches all paths of length `depth` and records the states
    /// first reached on that frontier. A visited table with the same packed
    /// layout keeps the shallowest push depth of the current round, which cuts
    /// the re-expansion of states already queued on a shorter path. Memory
    /// stays at two 44 MB buffers plus a stack of a few hundred frames, but
    /// the run still takes minutes to an hour.
    pub fn generate(&mut self, reference: &CubieCube) -> Result<(), Error> {
        self.depths.clear();
        let mut visited = NibbleArray::new(N_CORNER_STATES);
        let mut stack: Vec<Frame> = Vec::with_capacity(N_MOVE * (MAX_CORNER_DEPTH as usize + 1));
        let mut filled: usize = 0;
        let mut pops: u64 = 0;

        for depth in 0..=MAX_CORNER_DEPTH {
            visited.clear();
            stack.push(Frame {
                cube: *reference,
                last: None,
                dist: 0,
            });

            while let Some(Frame { cube, last, dist }) = stack.pop() {
                pops += 1;
                if pops % (1 << 18) == 0 {
                    print!(".");
                }

                if dist == depth {
                    // on the frontier, record the state if it is new
                    let ix = cube.get_corner_coord();
                    if self.depths.get(ix) == 0 {
                        self.depths.set(ix, depth + 1);
                        filled += 1;
                    }
                    continue;
                }

                for m in ALL_MOVES {
                    if let Some(last) = last {
                        if m.cancels(last) {
                            continue;
                        }
                    }
                    let mut next = cube;
                    next.corner_multiply(&MOVE_CUBES[m as usize]);
                    let ix = next.get_corner_coord();
                    let seen = visited.get(ix);
                    if seen != 0 && seen <= dist + 1 {
                        // already queued this round on a path at most as long
                        continue;
                    }
                    visited.set(ix, dist + 1);
                    stack.push(Frame {
                        cube: next,
                        last: Some(m),
                        dist: dist + 1,
                    });
                }
            }

            println!();
            println!("Depth: {} done: {}/{}", depth, filled, N_CORNER_STATES);
            if filled == N_CORNER_STATES {
                return Ok(());
            }
        }
        Err(Error::IncompleteTable(filled, N_CORNER_STATES))
    }

    /// Write the packed table, exactly 44089920 bytes, no header.
    pub fn write<W: Write>(&self, sink: &mut W) -> Result<(), Error> {
        sink.write_all(self.depths.as_bytes())?;
        Ok(())
    }

    /// Read the packed table, exactly 44089920 bytes. A short source is an error.
    pub fn read<R: Read>(&mut self, source: &mut R) -> Result<(), Error> {
        source.read_exact(self.depths.bytes_mut())?;
        Ok(())
    }
}

/// Create/load the corner depth table.
///
/// Loads the packed blob from `fname` if it exists, otherwise generates the
/// table from the solved cube and writes it there.
pub fn create_corner_depth_table(fname: &str) -> Result<CornerDepthTable, Error> {
    let bytes = std::fs::read(fname).unwrap_or_default();
    let mut table = CornerDepthTable::new();
    if bytes.is_empty() {
        println!("Creating {} table...", fname);
        println!("This may take some minutes or longer, depending on the hardware.");
        table.generate(&CubieCube::default())?;
        write_table(fname, table.as_bytes())?;
    } else {
        if bytes.len() != N_TABLE_BYTES {
            return Err(Error::InvalidTableSize(bytes.len(), N_TABLE_BYTES));
        }
        table.read(&mut bytes.as_slice())?;
    }
    Ok(table)
}

#[cfg(test)]
mod test {
    use crate::constants::*;
    use crate::cubie::CubieCube;
    use crate::moves::Move::*;
    use crate::pruning::*;
    use crate::scramble::gen_scramble;

    #[test]
    fn test_nibble_array() {
        let mut nibbles = NibbleArray::new(8);
        assert_eq!(nibbles.as_bytes().len(), 4);
        for (ix, value) in [3, 7, 11, 15].into_iter().enumerate() {
            nibbles.set(ix, value);
        }
        assert_eq!(nibbles.get(0), 3);
        assert_eq!(nibbles.get(1), 7);
        assert_eq!(nibbles.get(2), 11);
        assert_eq!(nibbles.get(3), 15);
        assert_eq!(nibbles.as_bytes()[0], 0x73);
        assert_eq!(nibbles.as_bytes()[1], 0xfb);

        // the sibling nibble survives a set
        nibbles.set(0, 5);
        assert_eq!(nibbles.get(1), 7);
        nibbles.set(3, 1);
        assert_eq!(nibbles.get(2), 11);
        assert_eq!(nibbles.get(4), 0);

        nibbles.clear();
        assert_eq!(nibbles.as_bytes(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_table_roundtrip() {
        let mut table = CornerDepthTable::new();
        table.depths.set(0, 1);
        table.depths.set(33_067_440, 2);
        table.depths.set(N_CORNER_STATES - 1, 12);

        let mut blob: Vec<u8> = Vec::new();
        table.write(&mut blob).unwrap();
        assert_eq!(blob.len(), N_TABLE_BYTES);

        let mut other = CornerDepthTable::new();
        other.read(&mut blob.as_slice()).unwrap();
        assert_eq!(other.as_bytes(), table.as_bytes());
        assert_eq!(other.depths.get(33_067_440), 2);
    }

    #[test]
    fn test_read_short_source() {
        let short = [0u8; 10];
        let mut table = CornerDepthTable::new();
        assert!(table.read(&mut short.as_slice()).is_err());
    }

    #[test]
    #[ignore = "fills all 88179840 entries, takes minutes to an hour"]
    fn test_generate() {
        let mut table = CornerDepthTable::new();
        table.generate(&CubieCube::default()).unwrap();

        let solved = CubieCube::default();
        assert_eq!(table.lookup(&solved), 0);
        assert_eq!(table.lookup(&solved.apply_move(U)), 1);
        assert_eq!(table.lookup(&solved.apply_moves(&[U, U3])), 0);

        // every entry filled, none past the subgroup diameter (stored depth + 1 <= 12)
        let mut histogram = [0usize; 16];
        for ix in 0..N_CORNER_STATES {
            histogram[table.depths.get(ix) as usize] += 1;
        }
        assert_eq!(histogram[0], 0);
        assert!(histogram[12] > 0);
        assert!(histogram[13..].iter().all(|&n| n == 0));
        assert_eq!(histogram.iter().sum::<usize>(), N_CORNER_STATES);

        // the table is a lower bound along any move sequence
        for _ in 0..100 {
            let mut cc = CubieCube::default();
            for (i, &m) in gen_scramble(12).iter().enumerate() {
                cc = cc.apply_move(m);
                assert!(table.lookup(&cc) as usize <= i + 1);
            }
        }

        // neighboring configurations differ by at most one turn
        for _ in 0..100 {
            let cc = CubieCube::from(&gen_scramble(20));
            let d = table.lookup(&cc) as i32;
            for m in ALL_MOVES {
                let dn = table.lookup(&cc.apply_move(m)) as i32;
                assert!((d - dn).abs() <= 1);
            }
        }

        let mut blob: Vec<u8> = Vec::new();
        table.write(&mut blob).unwrap();
        let mut reloaded = CornerDepthTable::new();
        reloaded.read(&mut blob.as_slice()).unwrap();
        assert_eq!(reloaded.as_bytes(), table.as_bytes());
    }

    #[test]
    #[ignore = "fills all 88179840 entries, takes minutes to an hour"]
    fn test_generate_scrambled_reference() {
        // the corner subgroup acts transitively on itself, so any reference
        // cube reaches the full fill count
        let reference = CubieCube::from(&gen_scramble(30));
        let mut table = CornerDepthTable::new();
        table.generate(&reference).unwrap();
        assert_eq!(table.lookup(&reference), 0);
        for m in ALL_MOVES {
            assert_eq!(table.lookup(&reference.apply_move(m)), 1);
        }
    }
}
