pub mod config;
pub mod coordinator;
pub mod engine;
pub mod log;
pub mod session;

pub use coordinator::Coordinator;
pub use engine::{Phase, StopwatchEngine, StopwatchState};
pub use session::EditingSession;
