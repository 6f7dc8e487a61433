// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for publication stamps, ad windows and view timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
