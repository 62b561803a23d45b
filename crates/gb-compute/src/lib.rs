//! `gb-compute` - Data-parallel kernels over a simulated work-group
//! execution model.
//!
//! This crate provides:
//! - Work-item addressing: pure identity-to-coordinate mappings with bounds
//!   guards for oversized dispatch grids
//! - A `DeviceContext` carrying validated dispatch configuration (work-group
//!   size, shared-scratch sizing)
//! - Group-shared `LocalBuffer` scratch memory ordered by the group barrier
//! - Three matrix-multiply kernel variants behind one dispatch contract,
//!   plus an elementwise vector-add kernel
//!
//! Independent work items run on the rayon pool; grouped items run as scoped
//! threads so that barrier rendezvous semantics hold exactly.

pub mod device;
pub mod error;
pub mod index;
pub mod kernels;
pub mod local;

// Re-export primary types at the crate root for convenience.
pub use device::DeviceContext;
pub use error::{ComputeError, Result};
pub use kernels::{vadd, KernelVariant};
pub use local::LocalBuffer;
