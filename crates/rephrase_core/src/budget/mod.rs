//! Token budgeting for rephrase requests.
//!
//! Decides how much trailing chat history can accompany a request without
//! exceeding a token ceiling.
//!
//! # Key Components
//!
//! - [`counter`]: token counting via heuristic estimation
//! - [`history`]: trailing-history selection under a token ceiling

pub mod counter;
pub mod history;

pub use counter::{HeuristicTokenCounter, SharedTokenCounter, TokenCounter};
pub use history::select_history;
