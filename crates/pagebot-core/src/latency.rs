//! Simulated "thinking" latency.
//!
//! Each bot turn draws two independent delays: how long the typing
//! indicator stays on and how long until the reply is delivered. The
//! conversation actor only sees the [`DelaySource`] trait, so tests can pin
//! the delays or seed the generator.

use std::time::Duration;

use pagebot_types::config::{DelayRange, WidgetConfig};
use pagebot_types::error::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the two per-turn delays.
pub trait DelaySource: Send + 'static {
    /// Duration of the typing indicator.
    fn typing_delay(&mut self) -> Duration;

    /// Time from submission (or from the end of typing, in sequential mode)
    /// until the bot reply is appended.
    fn delivery_delay(&mut self) -> Duration;
}

/// Uniformly random delays from two half-open millisecond ranges.
#[derive(Debug, Clone)]
pub struct RandomLatency {
    typing: DelayRange,
    delivery: DelayRange,
    rng: StdRng,
}

impl RandomLatency {
    /// Seed from the OS. Fails on degenerate ranges.
    pub fn new(typing: DelayRange, delivery: DelayRange) -> Result<Self, ConfigError> {
        Self::with_rng(typing, delivery, StdRng::from_os_rng())
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(
        typing: DelayRange,
        delivery: DelayRange,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(typing, delivery, StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &WidgetConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        match seed {
            Some(seed) => Self::seeded(config.typing_delay, config.delivery_delay, seed),
            None => Self::new(config.typing_delay, config.delivery_delay),
        }
    }

    fn with_rng(
        typing: DelayRange,
        delivery: DelayRange,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        typing.validate("typing_delay")?;
        delivery.validate("delivery_delay")?;
        Ok(Self {
            typing,
            delivery,
            rng,
        })
    }

    fn draw(&mut self, range: DelayRange) -> Duration {
        Duration::from_millis(self.rng.random_range(range.min_ms..range.max_ms))
    }
}

impl DelaySource for RandomLatency {
    fn typing_delay(&mut self) -> Duration {
        self.draw(self.typing)
    }

    fn delivery_delay(&mut self) -> Duration {
        self.draw(self.delivery)
    }
}

/// Constant delays. Zero for both gives an instant bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLatency {
    pub typing: Duration,
    pub delivery: Duration,
}

impl FixedLatency {
    pub fn new(typing: Duration, delivery: Duration) -> Self {
        Self { typing, delivery }
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

impl DelaySource for FixedLatency {
    fn typing_delay(&mut self) -> Duration {
        self.typing
    }

    fn delivery_delay(&mut self) -> Duration {
        self.delivery
    }
}

impl<T: DelaySource + ?Sized> DelaySource for Box<T> {
    fn typing_delay(&mut self) -> Duration {
        (**self).typing_delay()
    }

    fn delivery_delay(&mut self) -> Duration {
        (**self).delivery_delay()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPING: DelayRange = DelayRange::new(1000, 3000);
    const DELIVERY: DelayRange = DelayRange::new(1500, 2500);

    #[test]
    fn test_random_samples_stay_in_bounds() {
        let mut latency = RandomLatency::new(TYPING, DELIVERY).unwrap();
        for _ in 0..10_000 {
            assert!(TYPING.contains(latency.typing_delay()));
            assert!(DELIVERY.contains(latency.delivery_delay()));
        }
    }

    #[test]
    fn test_random_samples_vary() {
        let mut latency = RandomLatency::seeded(TYPING, DELIVERY, 7).unwrap();
        let first = latency.typing_delay();
        let varied = (0..100).any(|_| latency.typing_delay() != first);
        assert!(varied);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomLatency::seeded(TYPING, DELIVERY, 42).unwrap();
        let mut b = RandomLatency::seeded(TYPING, DELIVERY, 42).unwrap();
        for _ in 0..50 {
            assert_eq!(a.typing_delay(), b.typing_delay());
            assert_eq!(a.delivery_delay(), b.delivery_delay());
        }
    }

    #[test]
    fn test_degenerate_range_rejected() {
        let err = RandomLatency::new(DelayRange::new(5, 5), DELIVERY).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDelayRange {
                name: "typing_delay",
                ..
            }
        ));
        assert!(RandomLatency::seeded(TYPING, DelayRange::new(10, 1), 1).is_err());
    }

    #[test]
    fn test_from_config_uses_config_ranges() {
        let config = WidgetConfig {
            typing_delay: DelayRange::new(1, 2),
            delivery_delay: DelayRange::new(3, 4),
            ..WidgetConfig::default()
        };
        let mut latency = RandomLatency::from_config(&config, Some(9)).unwrap();
        assert_eq!(latency.typing_delay(), Duration::from_millis(1));
        assert_eq!(latency.delivery_delay(), Duration::from_millis(3));
    }

    #[test]
    fn test_fixed_latency() {
        let mut fixed = FixedLatency::new(Duration::from_millis(10), Duration::from_millis(20));
        assert_eq!(fixed.typing_delay(), Duration::from_millis(10));
        assert_eq!(fixed.delivery_delay(), Duration::from_millis(20));
        assert_eq!(FixedLatency::instant().typing, Duration::ZERO);
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut boxed: Box<dyn DelaySource> = Box::new(FixedLatency::new(
            Duration::from_millis(1),
            Duration::from_millis(2),
        ));
        assert_eq!(boxed.delivery_delay(), Duration::from_millis(2));
    }
}
