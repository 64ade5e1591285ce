use std::str::FromStr;

use rand::Rng;

use crate::constants::{ALL_MOVES, N_MOVE};
use crate::error::Error;
use crate::moves::Move;

pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace()
        .map(|word| Move::from_str(word.trim()))
        .collect()
}

pub fn scramble_to_str(s: &[Move]) -> Result<String, Error> {
    let result: String = s
        .iter()
        .map(Move::to_string)
        .fold("".to_string(), |acc, x| format!("{} {}", acc, x));
    Ok(result)
}

/// Generate a random scramble of `length` moves, without trivially redundant
/// successors.
pub fn gen_scramble(length: usize) -> Vec<Move> {
    let mut rng = rand::thread_rng();
    let mut moves: Vec<Move> = Vec::with_capacity(length);
    while moves.len() < length {
        let m = ALL_MOVES[rng.gen_range(0..N_MOVE)];
        if let Some(&last) = moves.last() {
            if m.cancels(last) {
                continue;
            }
        }
        moves.push(m);
    }
    moves
}
