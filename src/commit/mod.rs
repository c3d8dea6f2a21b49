// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message parsing and input sources.

mod message;
pub mod source;

pub use message::CommitMessage;
pub use source::MessageSource;
