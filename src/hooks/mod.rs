// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git hooks management.
//!
//! Hooks written by commitlint carry a marker line; anything without it is
//! treated as foreign and only ever moved aside to `<hook>.backup`.

mod manager;
mod templates;

pub use manager::{
    validate_command, validate_hook_name, validate_removal_name, HookManager, HookStatus,
    MAX_COMMAND_LENGTH, VALID_HOOKS,
};
pub use templates::{is_commitlint_hook, HookTemplate, TemplateContext, HOOK_MARKER};
