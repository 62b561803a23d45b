/// Sequential matrix multiplication: C = A * B for square N x N matrices in
/// flat row-major layout.
///
/// Straightforward triple-nested loops, optimized for correctness rather
/// than speed. This is the baseline every parallel variant must match.
///
/// # Panics
/// Panics if an operand's length does not equal `n * n`.
pub fn mat_mul(a: &[f32], b: &[f32], n: usize) -> Vec<f32> {
    assert_eq!(a.len(), n * n, "a has length {} but n*n is {}", a.len(), n * n);
    assert_eq!(b.len(), n * n, "b has length {} but n*n is {}", b.len(), n * n);

    let mut c = vec![0.0f32; n * n];
    for i in 0..n {
        for j in 0..n {
            let mut tmp = 0.0f32;
            for k in 0..n {
                tmp += a[i * n + k] * b[k * n + j];
            }
            c[i * n + j] = tmp;
        }
    }
    c
}

/// Sequential elementwise vector addition: c[i] = a[i] + b[i].
///
/// # Panics
/// Panics if the operands differ in length.
pub fn vec_add(a: &[f32], b: &[f32]) -> Vec<f32> {
    assert_eq!(
        a.len(),
        b.len(),
        "operand lengths differ: {} vs {}",
        a.len(),
        b.len()
    );
    a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}
