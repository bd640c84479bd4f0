//! covtree: Path Contents Aggregation
//!
//! Turns a flat list of file paths with per-file coverage totals into a
//! filtered, sorted, hierarchical view at any directory depth, or one of the
//! well-defined "not found" outcomes.

pub mod config;
pub mod contents;
pub mod critical;
pub mod error;
pub mod index;
pub mod logging;
pub mod oracle;
pub mod report;
pub mod resolver;
pub mod service;
pub mod tooling;
pub mod types;

pub use contents::{DisplayType, Filters, Node, Ordering, OrderingDirection, OrderingParameter};
pub use error::ApiError;
pub use resolver::{resolve_path_contents, Outcome};
pub use types::{FileEntry, Totals};
