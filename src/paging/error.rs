use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid frame capacity {0}: at least one frame is required")]
    InvalidCapacity(usize),
}
