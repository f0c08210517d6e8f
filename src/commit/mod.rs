// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message parsing.
//!
//! [`CommitMessage::parse`] never fails: any input, including empty or
//! non-conventional text, yields a message whose fields are simply absent.

mod message;
mod sanitize;

pub use message::CommitMessage;
pub use sanitize::{sanitize, sanitize_bytes, strip_comments};
