//! Seqmatch Engine - pattern matching over ordered event sequences
//!
//! Executes a compiled `PatternDefinition` against a finite, ordered slice
//! of events, lazily producing one `PatternMatch` per successful traversal
//! of all terms. Matching is pure and synchronous; concurrent runs of the
//! same definition over different sequences need no synchronization.

pub mod context;
pub mod matcher;
pub mod result;

mod eval;

// Re-export main types
pub use context::MatchContext;
pub use matcher::{find_matches, Matcher};
pub use result::PatternMatch;
