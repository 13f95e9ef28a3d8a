//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `inputs` - Shared utilities for loading the catalog, transactions and goals
//! - `catalog` - Catalog listing
//! - `missed` - Missed rewards report
//! - `timeline` - Goal timelines

pub mod catalog;
pub mod inputs;
pub mod missed;
pub mod timeline;

// Re-export command functions for main.rs
pub use catalog::*;
pub use inputs::*;
pub use missed::*;
pub use timeline::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a dollar amount with cents
pub fn usd(amount: f64) -> String {
    format!("${:.2}", amount)
}
