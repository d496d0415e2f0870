use std::time::Duration;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub app_name: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Top strip reserved for the HUD; targets never spawn there.
    pub hud_margin: f32,
    pub target_radius: f32,
    pub tick_interval: Duration,
    pub background_path: String,
    pub hit_sound_path: String,
    pub end_sound_path: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "Catch the Ball".to_string(),
            window_width: 600,
            window_height: 600,
            hud_margin: 50.0,
            target_radius: 30.0,
            tick_interval: Duration::from_secs(1),
            background_path: "background/image.jpg".to_string(),
            hit_sound_path: "sound/click.wav".to_string(),
            end_sound_path: "sound/end.wav".to_string(),
        }
    }
}

/// Accumulates frame deltas and fires once per fixed interval, so the 1 Hz
/// countdown is independent of the render rate.
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
}

impl FixedTimestep {
    pub fn every(step: Duration) -> Self {
        Self {
            step: step.max(Duration::from_millis(1)),
            accumulator: Duration::ZERO,
        }
    }

    pub fn accumulate(&mut self, delta: Duration) {
        self.accumulator += delta;
    }

    pub fn should_step(&mut self) -> bool {
        if self.accumulator >= self.step {
            self.accumulator -= self.step;
            true
        } else {
            false
        }
    }

    /// Drops whatever has accumulated, e.g. while the round-over dialog is up.
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut ts = FixedTimestep::every(Duration::from_secs(1));
        ts.accumulate(Duration::from_millis(400));
        assert!(!ts.should_step());
        ts.accumulate(Duration::from_millis(700));
        assert!(ts.should_step());
        assert!(!ts.should_step());
    }

    #[test]
    fn catches_up_after_a_long_frame() {
        let mut ts = FixedTimestep::every(Duration::from_secs(1));
        ts.accumulate(Duration::from_millis(2500));
        assert!(ts.should_step());
        assert!(ts.should_step());
        assert!(!ts.should_step());
    }
}
