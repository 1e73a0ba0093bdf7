//! Git history acquisition.

pub mod history;

pub use history::collect_history;
