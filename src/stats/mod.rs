//! Player statistics: per-round counters and lifetime totals.

mod record;

pub use record::{LifetimeStats, PlayerRecord, RoundStats};
