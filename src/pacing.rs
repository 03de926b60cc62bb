use std::time::Duration;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyPacing {
    pub min_delay: Duration,
    pub max_delay: Duration,
    pub follow_up_delay: Duration,
}

impl Default for ReplyPacing {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(2000),
            follow_up_delay: Duration::from_millis(1500),
        }
    }
}

impl ReplyPacing {
    pub fn immediate() -> Self {
        Self {
            min_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            follow_up_delay: Duration::ZERO,
        }
    }

    /// Uniform in `[min_delay, max_delay)`, or `min_delay` when the range is empty.
    pub fn reply_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let min = self.min_delay.as_millis() as u64;
        let max = self.max_delay.as_millis() as u64;
        if max <= min {
            return self.min_delay;
        }
        Duration::from_millis(rng.gen_range(min..max))
    }
}
