pub mod engine;
pub mod error;
pub mod mapper;
pub mod recorder;
pub mod stats;
mod replacer;

pub use engine::LruEngine;
pub use error::EngineError;
pub use mapper::derive_page_id;
pub use recorder::EventRecorder;
pub use stats::Statistics;
