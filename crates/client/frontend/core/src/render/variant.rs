//! Deterministic tile variant selection.
//!
//! The variant drawn for a cell depends only on its glyph, its position and
//! the presentation's seed, so redrawing never makes tiles flicker and two
//! windows with the same seed agree.

use game_core::Position;

/// Mixes the inputs into a 64-bit hash (SplitMix64 style avalanche).
pub fn variant_hash(glyph: char, position: Position, seed: u64) -> u64 {
    let mut hash = seed;

    hash ^= (glyph as u64).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (position.x as u32 as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (position.y as u32 as u64).wrapping_mul(0x85ebca6b).rotate_left(32);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;

    hash
}

/// Index into a variant list of length `count`. `count` of zero yields 0.
pub fn variant_index(glyph: char, position: Position, seed: u64, count: usize) -> usize {
    if count <= 1 {
        return 0;
    }
    (variant_hash(glyph, position, seed) % count as u64) as usize
}
