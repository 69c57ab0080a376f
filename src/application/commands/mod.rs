//! 应用层 - 命令
//!
//! CQRS 命令侧：向外部工作流转发问题

mod relay_commands;

pub mod handlers;

pub use relay_commands::*;
