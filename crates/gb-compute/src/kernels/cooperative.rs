use std::thread;

use crate::device::{DeviceContext, WorkGroup};
use crate::error::Result;
use crate::index;

/// Cooperative-tile multiply: one work item per row, grouped, with the
/// current output column of B staged through group-shared memory.
///
/// Every work item is an OS thread; each group of `nloc` items shares one
/// barrier and one column-sized scratch buffer. Per output column j the
/// group walks a fixed barrier protocol:
///
/// 1. barrier - nobody may start overwriting the scratch while another item
///    still reads column j-1 out of it;
/// 2. strided fill - local id `iloc` writes elements iloc, iloc+nloc, ... of
///    column j, up to an exact bound of N;
/// 3. barrier - the column is fully staged before any item reads it;
/// 4. compute - each item with a row forms the dot product of its private
///    row cache with the staged column and writes C[i, j];
/// 5. barrier - all reads retired before the next pass's writers start.
///
/// The global range is N rounded up to whole groups. Items past N own no
/// output row and skip staging and compute, but still execute every barrier:
/// barrier participation must be identical across a group or it deadlocks,
/// so it is never conditioned on the row bounds check.
pub(crate) fn run(
    ctx: &DeviceContext,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    n: usize,
) -> Result<()> {
    let nloc = ctx.group_size(n);
    let scratch_len = ctx.scratch_len(n)?;
    let global = index::padded_global(n, nloc);
    let n_groups = index::group_count(global, nloc);

    let groups: Vec<WorkGroup> = (0..n_groups)
        .map(|_| WorkGroup::new(nloc, scratch_len))
        .collect();

    thread::scope(|s| {
        let mut rows = c.chunks_mut(n);
        for global_id in 0..global {
            let (group_id, local_id) = index::group_of(global_id, nloc);
            let group = &groups[group_id];
            // Rows are handed out in global-id order; padded items get none.
            let row = match index::checked_row(global_id, n) {
                Some(_) => rows.next(),
                None => None,
            };
            s.spawn(move || item(group, global_id, local_id, nloc, a, b, row, n));
        }
    });

    Ok(())
}

/// Body of one work item. Runs the full barrier sequence even when the item
/// owns no output row.
#[allow(clippy::too_many_arguments)]
fn item(
    group: &WorkGroup,
    global_id: usize,
    local_id: usize,
    nloc: usize,
    a: &[f32],
    b: &[f32],
    mut row: Option<&mut [f32]>,
    n: usize,
) {
    // Private row cache, staged once and reused for all N columns.
    let awrk: Vec<f32> = match index::checked_row(global_id, n) {
        Some(i) => a[i * n..(i + 1) * n].to_vec(),
        None => Vec::new(),
    };

    for j in 0..n {
        group.barrier();

        let mut k = local_id;
        while k < n {
            group.local().store(k, b[k * n + j]);
            k += nloc;
        }

        group.barrier();

        if let Some(row) = row.as_deref_mut() {
            let mut tmp = 0.0f32;
            for k in 0..n {
                tmp += awrk[k] * group.local().load(k);
            }
            row[j] = tmp;
        }

        group.barrier();
    }
}
