pub mod engine;
pub mod placement;
pub mod session;
pub mod snapshot;
