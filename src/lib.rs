//! # cornerdb
//! `cornerdb`: corner pattern database for the 3x3 Rubik's cube. For every one
//! of the 8! * 3^7 = 88179840 corner configurations the database holds the
//! minimum number of face turns back to the reference cube, packed two entries
//! per byte. An IDA* solver reads it in O(1) as an admissible lower bound on
//! the remaining solution length.

#[macro_use]
extern crate lazy_static;

/// Module containing functions for scrambling the cube.
pub mod scramble;

/// Error define.
pub mod error;

/// Module containing 3x3 cube constants.
pub mod constants;

/// Module for represent a cube on the cubie level, with the corner coordinate.
pub mod cubie;

/// Module for represent moves on the cubie level.
pub mod moves;

/// Module for create/load the corner depth table. The table cuts the search
/// tree during the search.
pub mod pruning;

use std::{fs, path::Path};

use crate::error::Error;

fn write_table<P>(path: P, bytes: &[u8]) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    if let Some(dir) = path.as_ref().parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    fs::write(path, bytes)?;
    Ok(())
}
