// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git hooks management.

mod manager;

pub use manager::{hook_script, HookManager, COMMIT_MSG_HOOK};
