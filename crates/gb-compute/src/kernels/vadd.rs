use rayon::prelude::*;

use crate::error::{ComputeError, Result};

/// Elementwise vector addition: c[i] = a[i] + b[i].
///
/// One work item per element over a 1-D index space; every item writes
/// exactly its own output slot. Chained sums (D = C + E and so on) are
/// composed from repeated dispatches by the caller.
///
/// # Errors
/// Returns `OperandLength` if the operands differ in length.
pub fn vadd(a: &[f32], b: &[f32]) -> Result<Vec<f32>> {
    if a.len() != b.len() {
        return Err(ComputeError::OperandLength {
            role: "b",
            len: b.len(),
            expected: a.len(),
        });
    }
    Ok(a.par_iter().zip(b.par_iter()).map(|(x, y)| x + y).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vadd() {
        let c = vadd(&[1.0, 2.0], &[3.0, 4.0]).unwrap();
        assert_eq!(c, vec![4.0, 6.0]);
    }

    #[test]
    fn test_vadd_empty() {
        assert!(vadd(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_vadd_length_mismatch() {
        assert!(vadd(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_vadd_chain() {
        let a = [1.0, 2.0];
        let b = [10.0, 20.0];
        let e = [100.0, 200.0];
        let c = vadd(&a, &b).unwrap();
        let d = vadd(&c, &e).unwrap();
        assert_eq!(d, vec![111.0, 222.0]);
    }
}
