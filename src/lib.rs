//! # specgen-client
//!
//! 这是 SpecGen 文档生成后端的流式客户端，负责把分块的 NDJSON 事件流解析为会话状态。
//!
//! Streaming client for the SpecGen document-generation API: a user
//! describes a feature, the backend streams back newline-delimited JSON
//! events, and this crate incrementally folds them into markdown content,
//! reasoning commentary, and token-usage statistics.
//!
//! ## Overview
//!
//! The hard part lives in [`pipeline`]: an incremental stream parser that
//! tolerates arbitrary chunk boundaries, partial lines, and malformed JSON.
//! Around it, [`client`] owns the request lifecycle — dispatch, sequential
//! chunk reads, cooperative cancellation, and the classification of every
//! turn into exactly one of completed / aborted / failed.
//!
//! ```text
//! network bytes → UTF-8 decode → LineFramer → decode_line → StreamEvent
//!                                                                │
//!                                     SessionState::apply ◄──────┘
//! ```
//!
//! Cancellation flows the other way: a [`CancelHandle`] stops the read loop
//! and reclassifies any resulting teardown error as an aborted turn.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use specgen_client::{Orchestrator, SpecGenClient, TurnOptions, NoopObserver};
//!
//! #[tokio::main]
//! async fn main() -> specgen_client::Result<()> {
//!     let client = SpecGenClient::builder()
//!         .base_url("http://localhost:8000/api/v1")
//!         .build()?;
//!
//!     let mut chat = Orchestrator::new(client);
//!     let report = chat
//!         .submit("A todo app with offline sync", TurnOptions::default(), &NoopObserver)
//!         .await;
//!
//!     println!("{:?}", report.outcome);
//!     println!("{}", chat.session().markdown_content());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, turn driver, orchestrator, cancellation |
//! | [`pipeline`] | Line framing, event decoding, session state |
//! | [`transport`] | HTTP transport to the backend |
//! | [`types`] | Wire types (events, requests) |
//! | [`utils`] | Incremental UTF-8 decoding |

pub mod client;
pub mod pipeline;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use client::{
    noop_observer, CancelHandle, NoopObserver, Orchestrator, SpecGenClient, SpecGenClientBuilder,
    TurnObserver, TurnOptions, TurnOutcome, TurnReport, TurnStats,
};
pub use pipeline::{SessionState, StreamSession};
pub use types::{
    events::{StreamEvent, TokenUsage},
    request::{GenerationMode, GenerationRequest, ImageAttachment, ImageMime},
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
