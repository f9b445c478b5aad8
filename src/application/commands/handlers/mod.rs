//! Command Handlers 实现

mod notify_handlers;

pub use notify_handlers::*;
