use std::time::Duration;

use super::config::GameConfig;

/// Tick interval that shrinks as food is eaten
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedController {
    base: Duration,
    min: Duration,
    step: Duration,
    delay: Duration,
}

impl SpeedController {
    pub fn new(config: &GameConfig) -> Self {
        let base = config.base_delay();
        Self {
            base,
            min: config.min_delay().min(base),
            step: config.speed_step(),
            delay: base,
        }
    }

    /// Current interval between ticks
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Shorten the interval by one step, never below the floor
    pub fn on_food_eaten(&mut self) {
        self.delay = self.delay.saturating_sub(self.step).max(self.min);
    }

    pub fn reset(&mut self) {
        self.delay = self.base;
    }

    pub fn multiplier(&self) -> f64 {
        self.base.as_secs_f64() / self.delay.as_secs_f64()
    }

    /// Multiplier formatted for display, e.g. "1.3x"
    pub fn label(&self) -> String {
        format!("{:.1}x", self.multiplier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_base() {
        let speed = SpeedController::new(&GameConfig::default());
        assert_eq!(speed.delay(), Duration::from_millis(170));
        assert_eq!(speed.label(), "1.0x");
    }

    #[test]
    fn test_step_per_food() {
        let mut speed = SpeedController::new(&GameConfig::default());
        speed.on_food_eaten();
        assert_eq!(speed.delay(), Duration::from_millis(163));
        speed.on_food_eaten();
        assert_eq!(speed.delay(), Duration::from_millis(156));
    }

    #[test]
    fn test_clamped_at_floor() {
        let mut speed = SpeedController::new(&GameConfig::default());
        let mut previous = speed.delay();

        for _ in 0..100 {
            speed.on_food_eaten();
            assert!(speed.delay() <= previous);
            assert!(speed.delay() >= Duration::from_millis(70));
            previous = speed.delay();
        }

        assert_eq!(speed.delay(), Duration::from_millis(70));
        assert_eq!(speed.label(), "2.4x");
    }

    #[test]
    fn test_reset_restores_base() {
        let mut speed = SpeedController::new(&GameConfig::default());
        speed.on_food_eaten();
        speed.reset();
        assert_eq!(speed.delay(), Duration::from_millis(170));
    }
}
