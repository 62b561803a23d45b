//! `gb-oracle` - Sequential reference kernels and tolerance verdicts.
//!
//! This crate provides:
//! - Sequential triple-loop matrix multiply and elementwise vector add,
//!   used as the correctness baseline for every parallel kernel variant
//! - Elementwise tolerance comparison producing a `Verdict` value
//! - The tolerances the benchmark scenarios run at

pub mod reference;
pub mod verdict;

pub use reference::{mat_mul, vec_add};
pub use verdict::{compare, Mismatch, Verdict, MATMUL_TOL, VADD_TOL};
