//! Internal constants for tiling engine tuning.
//!
//! # Organization
//!
//! - `timing` - Debounce and deferral delays
//! - `channel` - Actor messaging limits

/// Timing constants for event handling and debouncing.
pub mod timing {
    use std::time::Duration;

    /// Debounce delay between a reflow request and the layout pass (ms).
    ///
    /// Bursts of window events inside this window collapse into one pass.
    pub const TILING_DELAY_MS: u64 = 20;

    /// Delay before an exception window is centered (ms).
    ///
    /// Newly mapped windows report their final size shortly after they
    /// appear; centering waits for it.
    pub const CENTERING_DELAY_MS: u64 = 5;

    /// Reflow debounce delay as a `Duration`.
    pub const TILING_DELAY: Duration = Duration::from_millis(TILING_DELAY_MS);

    /// Centering delay as a `Duration`.
    pub const CENTERING_DELAY: Duration = Duration::from_millis(CENTERING_DELAY_MS);
}

/// Constants for talking to the tiler actor.
pub mod channel {
    /// Default timeout for queries answered by the tiler (ms).
    pub const QUERY_TIMEOUT_MS: u64 = 1000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centering_runs_before_reflow() {
        const { assert!(timing::CENTERING_DELAY_MS < timing::TILING_DELAY_MS) };
    }

    #[test]
    fn test_durations_match_millis() {
        assert_eq!(timing::TILING_DELAY.as_millis(), u128::from(timing::TILING_DELAY_MS));
        assert_eq!(timing::CENTERING_DELAY.as_millis(), u128::from(timing::CENTERING_DELAY_MS));
    }
}
