//! Test support shared with downstream crates via the `tests` feature

pub mod backend;

pub use backend::InMemoryBackend;
pub use state::StateBackendTestSuite;
