use rayon::prelude::*;

use crate::index;

/// Naive multiply: one output element per work item, both operands read
/// straight from shared memory.
///
/// The 2-D index space is flattened row-major; every element is written by
/// exactly one item and no reads overlap any other item's writes, so the
/// items run unrestricted in parallel. Items past the grid (an oversized
/// dispatch) fall out of `grid_coords` and touch nothing.
pub(crate) fn run(a: &[f32], b: &[f32], c: &mut [f32], n: usize) {
    c.par_iter_mut().enumerate().for_each(|(idx, out)| {
        if let Some((i, j)) = index::grid_coords(idx, n) {
            let mut tmp = 0.0f32;
            for k in 0..n {
                tmp += a[i * n + k] * b[k * n + j];
            }
            *out = tmp;
        }
    });
}
