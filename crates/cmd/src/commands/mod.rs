// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod export;
pub mod shell;
pub mod tree;

pub use export::export_command;
pub use shell::shell_command;
pub use tree::tree_command;
