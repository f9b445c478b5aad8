//! HTTP Handlers

mod notify;
mod sound;
mod status;

pub use notify::*;
pub use sound::*;
pub use status::*;
