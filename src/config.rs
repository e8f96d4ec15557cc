use std::time::Duration;

/// Latency and timeout knobs for the simulated operations.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub voice_capture_delay: Duration,
    pub summary_delay: Duration,
    pub chat_reply_delay: Duration,
    /// Upper bound for a payload source once the delay has elapsed.
    pub operation_timeout: Duration,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            voice_capture_delay: Duration::from_millis(2000),
            summary_delay: Duration::from_millis(2000),
            chat_reply_delay: Duration::from_millis(1500),
            operation_timeout: Duration::from_millis(10_000),
        }
    }
}

const FAST_DELAY_MS: u64 = 200;

impl PortalConfig {
    /// Defaults overridden by `SMART_RETRIEVAL_*` environment variables.
    ///
    /// `SMART_RETRIEVAL_FAST=1` shortens every delay, handy while iterating on the UI.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let fast_mode = lookup("SMART_RETRIEVAL_FAST")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if fast_mode {
            let fast = Duration::from_millis(FAST_DELAY_MS);
            config.voice_capture_delay = fast;
            config.summary_delay = fast;
            config.chat_reply_delay = fast;
        }

        let millis = |key: &str| {
            lookup(key).and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(ms) => Some(Duration::from_millis(ms)),
                Err(err) => {
                    log::warn!("ignoring {key}={raw}: {err}");
                    None
                }
            })
        };

        if let Some(delay) = millis("SMART_RETRIEVAL_VOICE_DELAY_MS") {
            config.voice_capture_delay = delay;
        }
        if let Some(delay) = millis("SMART_RETRIEVAL_SUMMARY_DELAY_MS") {
            config.summary_delay = delay;
        }
        if let Some(delay) = millis("SMART_RETRIEVAL_CHAT_DELAY_MS") {
            config.chat_reply_delay = delay;
        }
        if let Some(timeout) = millis("SMART_RETRIEVAL_TIMEOUT_MS") {
            config.operation_timeout = timeout;
        }

        config
    }
}
