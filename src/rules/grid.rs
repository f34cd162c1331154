//! Grid-size policy.
//!
//! Levels 1 through 4 grow the board from 4x4 to 10x10. Any other level
//! falls back to the 4x4 board, so level 5 starts the cycle again. Whether
//! that wrap is intended is still open; tests pin it as-is.

/// Every side length the policy can produce.
pub const GRID_SIZES: [usize; 4] = [4, 6, 8, 10];

/// Side length of the square board for `level`.
#[must_use]
pub const fn grid_size(level: u32) -> usize {
    match level {
        1 => 4,
        2 => 6,
        3 => 8,
        4 => 10,
        _ => 4,
    }
}

/// Number of tiles on the board for `level`.
#[must_use]
pub const fn tile_count(level: u32) -> usize {
    let side = grid_size(level);
    side * side
}

/// Number of distinct pair-identities dealt for `level`.
///
/// Exact: every side length is even.
#[must_use]
pub const fn pair_count(level: u32) -> usize {
    tile_count(level) / 2
}
