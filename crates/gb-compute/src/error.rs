use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComputeError {
    #[error("operand {role} has length {len} but the dispatch requires {expected}")]
    OperandLength {
        role: &'static str,
        len: usize,
        expected: usize,
    },
    #[error("work-group size must be nonzero")]
    InvalidGroupSize,
    #[error("group-shared scratch holds {len} elements but the dispatch needs {needed}")]
    ScratchTooSmall { len: usize, needed: usize },
}

pub type Result<T> = std::result::Result<T, ComputeError>;
