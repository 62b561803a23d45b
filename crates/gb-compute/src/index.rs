//! Work-item addressing.
//!
//! Pure mappings from a work-item identity (a flat dispatch index, a 2-D
//! coordinate pair, or a (group, local) pair) to the matrix coordinates the
//! item is responsible for. Out-of-range identities map to `None`: an item
//! launched by an oversized dispatch grid must perform no work and no memory
//! access.

/// Maps a flattened dispatch index to its `(i, j)` identity in an N x N
/// grid, row-major, applying the 2-D bounds guard.
///
/// Returns `None` for indices past the end of the grid (and for `n == 0`,
/// where every identity is out of range).
pub fn grid_coords(idx: usize, n: usize) -> Option<(usize, usize)> {
    if n == 0 {
        return None;
    }
    checked_coords(idx / n, idx % n, n)
}

/// The 2-D bounds guard: `Some((i, j))` iff `i < n && j < n`.
pub fn checked_coords(i: usize, j: usize, n: usize) -> Option<(usize, usize)> {
    if i < n && j < n {
        Some((i, j))
    } else {
        None
    }
}

/// The 1-D bounds guard for row-per-item kernels: `Some(i)` iff `i < n`.
pub fn checked_row(i: usize, n: usize) -> Option<usize> {
    if i < n {
        Some(i)
    } else {
        None
    }
}

/// Splits a global work-item id into its `(group_id, local_id)` pair.
///
/// The local id identifies the item's position within its work group and is
/// used only for distributing cooperative fill work, never for output
/// addressing.
pub fn group_of(global_id: usize, local_size: usize) -> (usize, usize) {
    debug_assert!(local_size > 0, "local_size must be nonzero");
    (global_id / local_size, global_id % local_size)
}

/// Number of work groups needed to cover `global` items at `local` items per
/// group (ceiling division).
pub fn group_count(global: usize, local: usize) -> usize {
    debug_assert!(local > 0, "local must be nonzero");
    global.div_ceil(local)
}

/// Rounds an N-item global range up to a whole number of work groups.
///
/// Items with ids in `n..padded_global(n, local)` are launched but must stay
/// inert apart from barrier participation.
pub fn padded_global(n: usize, local: usize) -> usize {
    group_count(n, local) * local
}
