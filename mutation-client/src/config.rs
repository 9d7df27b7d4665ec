use std::time::Duration;

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(200);
const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(5);
const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

/// Retry and timeout settings for a call.
///
/// Durations deserialize from human readable strings:
///
/// ```
/// # use std::time::Duration;
/// use mutation_client::ExecutionConfig;
///
/// let config: ExecutionConfig = serde_json::from_str(r#"{
///     "max_attempts": 5,
///     "base_delay": "100ms",
///     "attempt_timeout": "2s"
/// }"#).unwrap();
///
/// assert_eq!(config.max_attempts, 5);
/// assert_eq!(config.base_delay, Duration::from_millis(100));
/// assert_eq!(config.max_delay, Duration::from_secs(5));
/// assert_eq!(config.attempt_timeout, Some(Duration::from_secs(2)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecutionConfig {
    /// Total attempts, including the first one. `0` is treated as `1`.
    pub max_attempts: u32,
    /// The delay before the first retry. It doubles for every retry after that.
    #[serde(with = "humantime_serde")]
    pub base_delay: Duration,
    /// The upper bound for the delay between two attempts.
    #[serde(with = "humantime_serde")]
    pub max_delay: Duration,
    /// The deadline for a single attempt. `None` waits forever.
    #[serde(with = "humantime_serde")]
    pub attempt_timeout: Option<Duration>
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        ExecutionConfig {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            attempt_timeout: Some(DEFAULT_ATTEMPT_TIMEOUT)
        }
    }
}

impl ExecutionConfig {
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn with_attempt_timeout(mut self, attempt_timeout: Option<Duration>) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }

    pub(crate) fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// The delay before retry number `retry` (starting at 0).
    pub(crate) fn backoff_delay(&self, retry: u32) -> Duration {
        let factor = 1u32.checked_shl(retry).unwrap_or(u32::MAX);
        self.base_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}
