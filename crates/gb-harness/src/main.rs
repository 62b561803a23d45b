//! gemmbench - host harness for the data-parallel kernel benchmarks.
//!
//! Generates deterministic random inputs, dispatches every matrix-multiply
//! kernel variant plus the chained vector-add scenario, times each dispatch,
//! and validates all outputs against the sequential oracle. A failed verdict
//! fails the run's exit code but never aborts the remaining cases.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use gb_compute::{vadd, DeviceContext, KernelVariant};
use gb_oracle::{compare, mat_mul, vec_add, Verdict, MATMUL_TOL, VADD_TOL};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default matrix dimension, matching the classic benchmark size.
const DEFAULT_N: usize = 64;

/// Default RNG seed for reproducible inputs.
const DEFAULT_SEED: u64 = 42;

/// Vector length for the chained vector-add scenario.
const VADD_LENGTH: usize = 1024;

#[derive(Debug, PartialEq)]
struct RunConfig {
    n: usize,
    group_size: Option<usize>,
    seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            n: DEFAULT_N,
            group_size: None,
            seed: DEFAULT_SEED,
        }
    }
}

/// Parses `gemmbench [N] [--group-size G] [--seed S]`.
fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<RunConfig, String> {
    let mut cfg = RunConfig::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--group-size" => {
                let value = args.next().ok_or("--group-size needs a value")?;
                cfg.group_size = Some(parse_usize("--group-size", &value)?);
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                cfg.seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("--seed: not a number: {}", value))?;
            }
            other if !other.starts_with('-') => {
                cfg.n = parse_usize("N", other)?;
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(cfg)
}

fn parse_usize(what: &str, value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{}: not a number: {}", what, value))
}

/// Uniform random f32 values in [0, 1).
fn random_buffer(rng: &mut StdRng, len: usize) -> Vec<f32> {
    (0..len).map(|_| rng.gen::<f32>()).collect()
}

/// MFLOPS for an N x N multiply: 2*N^3 floating point operations.
fn mflops(n: usize, seconds: f64) -> f64 {
    2.0 * (n as f64).powi(3) / (1_000_000.0 * seconds)
}

fn report_verdict(label: &str, verdict: &Verdict) -> bool {
    println!("  {}: {}", label, verdict);
    if let Some(m) = &verdict.first_mismatch {
        println!(
            "  first mismatch at {}: got {} expected {} (rel err {})",
            m.index, m.actual, m.expected, m.rel_err
        );
    }
    verdict.passed()
}

/// Runs every matmul variant on one pair of random matrices; returns true
/// when all verdicts pass.
fn run_matmul(cfg: &RunConfig) -> Result<bool, String> {
    let ctx = match cfg.group_size {
        Some(nloc) => DeviceContext::new()
            .with_group_size(nloc)
            .map_err(|e| e.to_string())?,
        None => DeviceContext::new(),
    };

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let n = cfg.n;
    let a = random_buffer(&mut rng, n * n);
    let b = random_buffer(&mut rng, n * n);
    let expected = mat_mul(&a, &b, n);

    let mut all_passed = true;
    for variant in KernelVariant::ALL {
        let start = Instant::now();
        let c = variant.matmul(&ctx, &a, &b, n).map_err(|e| e.to_string())?;
        let seconds = start.elapsed().as_secs_f64();

        println!(
            "{}: matrix size {}: {:.6} seconds at {:.2} MFLOPS",
            variant.name(),
            n,
            seconds,
            mflops(n, seconds)
        );
        let verdict = compare(&c, &expected, MATMUL_TOL);
        all_passed &= report_verdict("C = A*B", &verdict);
    }
    Ok(all_passed)
}

/// The chained vector-add scenario: C = A+B, D = C+E, F = D+G, each stage
/// validated independently. Returns true when every stage passes.
fn run_vadd_chain(seed: u64) -> Result<bool, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = random_buffer(&mut rng, VADD_LENGTH);
    let b = random_buffer(&mut rng, VADD_LENGTH);
    let e = random_buffer(&mut rng, VADD_LENGTH);
    let g = random_buffer(&mut rng, VADD_LENGTH);

    let start = Instant::now();
    let c = vadd(&a, &b).map_err(|err| err.to_string())?;
    let d = vadd(&c, &e).map_err(|err| err.to_string())?;
    let f = vadd(&d, &g).map_err(|err| err.to_string())?;
    let seconds = start.elapsed().as_secs_f64();

    println!("vadd: {} elements, 3 chained dispatches: {:.6} seconds", VADD_LENGTH, seconds);
    let mut all_passed = true;
    all_passed &= report_verdict("C = A+B", &compare(&c, &vec_add(&a, &b), VADD_TOL));
    all_passed &= report_verdict("D = C+E", &compare(&d, &vec_add(&c, &e), VADD_TOL));
    all_passed &= report_verdict("F = D+G", &compare(&f, &vec_add(&d, &g), VADD_TOL));
    Ok(all_passed)
}

fn main() -> ExitCode {
    let cfg = match parse_args(env::args().skip(1)) {
        Ok(cfg) => cfg,
        Err(msg) => {
            eprintln!("gemmbench: {}", msg);
            eprintln!("usage: gemmbench [N] [--group-size G] [--seed S]");
            return ExitCode::FAILURE;
        }
    };

    let mut all_passed = true;
    match run_matmul(&cfg) {
        Ok(passed) => all_passed &= passed,
        Err(msg) => {
            eprintln!("gemmbench: matmul: {}", msg);
            all_passed = false;
        }
    }
    match run_vadd_chain(cfg.seed) {
        Ok(passed) => all_passed &= passed,
        Err(msg) => {
            eprintln!("gemmbench: vadd: {}", msg);
            all_passed = false;
        }
    }

    if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
