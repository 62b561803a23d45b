use std::sync::Barrier;

use crate::error::{ComputeError, Result};
use crate::local::LocalBuffer;

/// Default work-group size when the caller does not choose one.
pub const DEFAULT_GROUP_SIZE: usize = 16;

/// Dispatch configuration threaded explicitly through every kernel call.
///
/// Replaces the ambient global context of a compute-offload runtime: the
/// work-group size and the shared-scratch sizing are the two knobs a caller
/// can turn, and both are validated before any work is launched.
#[derive(Debug, Clone, Default)]
pub struct DeviceContext {
    group_size: Option<usize>,
    scratch_len: Option<usize>,
}

impl DeviceContext {
    /// Default configuration: group size chosen per dispatch, scratch sized
    /// exactly to the dispatch dimension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request an explicit work-group size for cooperative dispatches.
    ///
    /// The size does not have to divide the dispatch dimension; trailing
    /// items are launched inert. A size of zero is rejected.
    pub fn with_group_size(mut self, nloc: usize) -> Result<Self> {
        if nloc == 0 {
            return Err(ComputeError::InvalidGroupSize);
        }
        self.group_size = Some(nloc);
        Ok(self)
    }

    /// Request an explicit shared-scratch length (in f32 slots) for
    /// cooperative dispatches. Checked against the dispatch dimension when
    /// the dispatch is built.
    pub fn with_scratch_len(mut self, len: usize) -> Self {
        self.scratch_len = Some(len);
        self
    }

    /// Effective work-group size for an `n`-row dispatch.
    pub fn group_size(&self, n: usize) -> usize {
        match self.group_size {
            Some(nloc) => nloc,
            None => n.min(DEFAULT_GROUP_SIZE).max(1),
        }
    }

    /// Effective shared-scratch length for an `n`-row dispatch.
    ///
    /// # Errors
    /// Returns `ScratchTooSmall` if the configured scratch cannot hold one
    /// full column of the right operand.
    pub fn scratch_len(&self, n: usize) -> Result<usize> {
        match self.scratch_len {
            Some(len) if len < n => Err(ComputeError::ScratchTooSmall { len, needed: n }),
            Some(len) => Ok(len),
            None => Ok(n),
        }
    }
}

/// One work group's synchronization state: the barrier its members rendezvous
/// on and the local memory they share.
#[derive(Debug)]
pub struct WorkGroup {
    barrier: Barrier,
    local: LocalBuffer,
}

impl WorkGroup {
    /// Create a group of `members` work items sharing `scratch_len` f32 slots.
    pub fn new(members: usize, scratch_len: usize) -> Self {
        WorkGroup {
            barrier: Barrier::new(members),
            local: LocalBuffer::new(scratch_len),
        }
    }

    /// Rendezvous: blocks until every member of the group has arrived.
    ///
    /// All stores to the shared buffer issued before the barrier are visible
    /// to every member after it.
    pub fn barrier(&self) {
        self.barrier.wait();
    }

    /// The group-shared scratch buffer.
    pub fn local(&self) -> &LocalBuffer {
        &self.local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_group_size_clamps_to_n() {
        let ctx = DeviceContext::new();
        assert_eq!(ctx.group_size(64), DEFAULT_GROUP_SIZE);
        assert_eq!(ctx.group_size(8), 8);
        assert_eq!(ctx.group_size(1), 1);
    }

    #[test]
    fn test_explicit_group_size_is_kept() {
        let ctx = DeviceContext::new().with_group_size(5).unwrap();
        assert_eq!(ctx.group_size(16), 5);
        // Larger than the dispatch is allowed; trailing items run inert.
        assert_eq!(ctx.group_size(3), 5);
    }

    #[test]
    fn test_zero_group_size_rejected() {
        assert!(matches!(
            DeviceContext::new().with_group_size(0),
            Err(ComputeError::InvalidGroupSize)
        ));
    }

    #[test]
    fn test_scratch_len_default_matches_n() {
        let ctx = DeviceContext::new();
        assert_eq!(ctx.scratch_len(16).unwrap(), 16);
    }

    #[test]
    fn test_scratch_too_small_rejected() {
        let ctx = DeviceContext::new().with_scratch_len(8);
        assert_eq!(ctx.scratch_len(8).unwrap(), 8);
        match ctx.scratch_len(16) {
            Err(ComputeError::ScratchTooSmall { len, needed }) => {
                assert_eq!(len, 8);
                assert_eq!(needed, 16);
            }
            other => panic!("expected ScratchTooSmall, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_scratch_is_kept() {
        let ctx = DeviceContext::new().with_scratch_len(32);
        assert_eq!(ctx.scratch_len(16).unwrap(), 32);
    }
}
