// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::SmartIpKeyExtractor,
};

pub type FormRateLimit = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;
type FormRateConfig = GovernorConfig<SmartIpKeyExtractor, NoOpMiddleware>;

/// One form submission is replenished every 500ms, i.e. two per second.
pub const FORM_REPLENISH_MS: u64 = 500;
pub const FORM_BURST: u32 = 10;

fn form_rate_config(replenish_every_ms: u64, burst: u32) -> Option<FormRateConfig> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(replenish_every_ms);
    builder.burst_size(burst);
    builder.key_extractor(SmartIpKeyExtractor).finish()
}

/// Per-client limit for the public form endpoints (comments, newsletter, contact).
///
/// Clients are keyed by `X-Forwarded-For`/`X-Real-Ip` first and the peer
/// address otherwise, so the server must be run with connect info.
pub fn form_rate_limit(replenish_every_ms: u64, burst: u32) -> Option<FormRateLimit> {
    let config = form_rate_config(replenish_every_ms, burst)?;
    Some(GovernorLayer::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn zero_burst_or_interval_is_rejected() {
        assert!(form_rate_limit(FORM_REPLENISH_MS, 0).is_none());
        assert!(form_rate_limit(0, FORM_BURST).is_none());
        assert!(form_rate_limit(FORM_REPLENISH_MS, FORM_BURST).is_some());
    }

    #[test]
    fn form_quota_refills_twice_a_second() {
        let config = form_rate_config(FORM_REPLENISH_MS, FORM_BURST).unwrap();
        assert_eq!(config.period(), Duration::from_millis(500));
        assert_eq!(config.burst_size(), 10);
    }
}
