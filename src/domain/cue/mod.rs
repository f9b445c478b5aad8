//! Cue Context
//!
//! 提示音目录：启动时加载一次，运行期只读

mod catalog;
mod errors;

pub use catalog::{CueCatalog, ResolvedCue, ResourceHandle, FALLBACK_CUE};
pub use errors::CatalogError;
