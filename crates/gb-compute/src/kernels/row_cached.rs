use rayon::prelude::*;

/// Row-cached multiply: one work item per output row.
///
/// Each item stages its row of A into a private scratch buffer once, then
/// reuses it across all N output columns, so the left operand is read once
/// per element instead of N times. The right operand is still re-read in
/// full by every item.
pub(crate) fn run(a: &[f32], b: &[f32], c: &mut [f32], n: usize) {
    c.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
        // Private row cache: populated before any dot product uses it.
        let mut awrk = vec![0.0f32; n];
        awrk.copy_from_slice(&a[i * n..(i + 1) * n]);

        for j in 0..n {
            let mut tmp = 0.0f32;
            for k in 0..n {
                tmp += awrk[k] * b[k * n + j];
            }
            row[j] = tmp;
        }
    });
}
