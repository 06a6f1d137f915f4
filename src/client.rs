//! Client interface for the generation backend.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
mod driver;
pub mod orchestrator;
pub mod types;

pub use builder::SpecGenClientBuilder;
pub use core::SpecGenClient;
pub use orchestrator::{Orchestrator, TurnOptions, TurnReport};
pub use types::{noop_observer, CancelHandle, NoopObserver, TurnObserver, TurnOutcome, TurnStats};
