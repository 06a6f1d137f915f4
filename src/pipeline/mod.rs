//! 流水线处理模块：把分块文本流解析为类型化事件并折叠进会话状态。
//!
//! # Stream Parsing Pipeline
//!
//! This module turns a raw, arbitrarily chunked text stream into typed
//! semantic events and folds them into per-turn session state.
//!
//! ```text
//! text fragments → LineFramer → complete lines → decode_line → StreamEvent
//!                                                       │
//!                                            SessionState::apply
//! ```
//!
//! Chunk boundaries carry no meaning: a fragment may close zero, one, or
//! many lines, and a partial trailing line stays buffered for the next
//! fragment. Malformed lines are dropped locally and never abort the
//! stream.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`LineFramer`] | Buffers fragments, drains newline-terminated lines |
//! | [`decode_line`] | Parses one line into a [`StreamEvent`](crate::types::StreamEvent) |
//! | [`SessionState`] | Deterministic, order-dependent event fold |
//! | [`StreamSession`] | Framer + state with an atomic combined reset |

pub mod decode;
pub mod framer;
pub mod session;


pub use decode::decode_line;
pub use framer::LineFramer;
pub use session::{SessionState, StreamSession};
