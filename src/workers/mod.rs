pub mod core;
pub mod poller;

pub use poller::{PollerHandle, spawn_poller};
