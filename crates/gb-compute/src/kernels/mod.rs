mod cooperative;
mod naive;
mod row_cached;
mod vadd;

pub use vadd::vadd;

use crate::device::DeviceContext;
use crate::error::{ComputeError, Result};

/// The closed set of matrix-multiply kernel variants.
///
/// All variants share one dispatch contract: row-major square operands of
/// length N*N in, a fully overwritten row-major output of length N*N out.
/// They are drop-in substitutable; only the memory traffic differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelVariant {
    /// One work item per output element, operands read from shared memory.
    Naive,
    /// One work item per output row, with the A row staged in private memory.
    RowCached,
    /// Grouped items staging B columns through barrier-synchronized shared
    /// memory, on top of the private row cache.
    CooperativeTile,
}

impl KernelVariant {
    /// Every variant, in the order the benchmark runs them.
    pub const ALL: [KernelVariant; 3] = [
        KernelVariant::Naive,
        KernelVariant::RowCached,
        KernelVariant::CooperativeTile,
    ];

    /// Returns the name of this variant (e.g. "naive", "row_cached").
    pub fn name(&self) -> &'static str {
        match self {
            KernelVariant::Naive => "naive",
            KernelVariant::RowCached => "row_cached",
            KernelVariant::CooperativeTile => "cooperative_tile",
        }
    }

    /// Matrix multiplication: C = A * B for square N x N matrices.
    ///
    /// Validates operand lengths, then dispatches this variant over an index
    /// space sized to `n`. `n == 0` performs no dispatch and returns an
    /// empty output.
    ///
    /// # Errors
    /// Returns `OperandLength` for missized operands, and whatever the
    /// variant's dispatch validation reports (e.g. `ScratchTooSmall` for a
    /// misconfigured cooperative dispatch).
    pub fn matmul(
        &self,
        ctx: &DeviceContext,
        a: &[f32],
        b: &[f32],
        n: usize,
    ) -> Result<Vec<f32>> {
        check_operand("a", a.len(), n)?;
        check_operand("b", b.len(), n)?;
        if n == 0 {
            return Ok(Vec::new());
        }

        let mut c = vec![0.0f32; n * n];
        match self {
            KernelVariant::Naive => naive::run(a, b, &mut c, n),
            KernelVariant::RowCached => row_cached::run(a, b, &mut c, n),
            KernelVariant::CooperativeTile => cooperative::run(ctx, a, b, &mut c, n)?,
        }
        Ok(c)
    }
}

fn check_operand(role: &'static str, len: usize, n: usize) -> Result<()> {
    if len != n * n {
        return Err(ComputeError::OperandLength {
            role,
            len,
            expected: n * n,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_square(n: usize, seed: u64) -> (Vec<f32>, Vec<f32>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = (0..n * n).map(|_| rng.gen::<f32>()).collect();
        let b = (0..n * n).map(|_| rng.gen::<f32>()).collect();
        (a, b)
    }

    #[test]
    fn test_names() {
        assert_eq!(KernelVariant::Naive.name(), "naive");
        assert_eq!(KernelVariant::RowCached.name(), "row_cached");
        assert_eq!(KernelVariant::CooperativeTile.name(), "cooperative_tile");
    }

    #[test]
    fn test_all_variants_match_oracle_n16() {
        // The benchmark's concrete scenario: N=16, uniform random inputs in
        // [0,1), zero mismatches expected from every variant.
        let n = 16;
        let (a, b) = random_square(n, 42);
        let expected = gb_oracle::mat_mul(&a, &b, n);
        let ctx = DeviceContext::new();

        for variant in KernelVariant::ALL {
            let c = variant.matmul(&ctx, &a, &b, n).unwrap();
            let verdict = gb_oracle::compare(&c, &expected, gb_oracle::MATMUL_TOL);
            assert!(
                verdict.passed(),
                "{}: {} ({:?})",
                variant.name(),
                verdict,
                verdict.first_mismatch
            );
        }
    }

    #[test]
    fn test_cross_variant_equivalence() {
        let n = 10;
        let (a, b) = random_square(n, 9);
        let ctx = DeviceContext::new().with_group_size(4).unwrap();

        let baseline = KernelVariant::Naive.matmul(&ctx, &a, &b, n).unwrap();
        for variant in [KernelVariant::RowCached, KernelVariant::CooperativeTile] {
            let c = variant.matmul(&ctx, &a, &b, n).unwrap();
            let verdict = gb_oracle::compare(&c, &baseline, gb_oracle::MATMUL_TOL);
            assert!(verdict.passed(), "{} diverged: {}", variant.name(), verdict);
        }
    }

    #[test]
    fn test_idempotent_redispatch() {
        let n = 6;
        let (a, b) = random_square(n, 11);
        let ctx = DeviceContext::new();

        for variant in KernelVariant::ALL {
            let first = variant.matmul(&ctx, &a, &b, n).unwrap();
            let second = variant.matmul(&ctx, &a, &b, n).unwrap();
            assert_eq!(first, second, "{} is not idempotent", variant.name());
        }
    }

    #[test]
    fn test_n1_exact() {
        let ctx = DeviceContext::new();
        for variant in KernelVariant::ALL {
            let c = variant.matmul(&ctx, &[3.0], &[4.0], 1).unwrap();
            assert_eq!(c, vec![12.0], "{}", variant.name());
        }
    }

    #[test]
    fn test_n0_no_dispatch() {
        let ctx = DeviceContext::new();
        for variant in KernelVariant::ALL {
            let c = variant.matmul(&ctx, &[], &[], 0).unwrap();
            assert!(c.is_empty(), "{}", variant.name());
        }
    }

    #[test]
    fn test_operand_length_rejected() {
        let ctx = DeviceContext::new();
        let err = KernelVariant::Naive
            .matmul(&ctx, &[1.0, 2.0], &[1.0, 2.0, 3.0, 4.0], 2)
            .unwrap_err();
        match err {
            ComputeError::OperandLength { role, len, expected } => {
                assert_eq!(role, "a");
                assert_eq!(len, 2);
                assert_eq!(expected, 4);
            }
            other => panic!("expected OperandLength, got {:?}", other),
        }
    }
}
