//! Game balance and screen layout
//!
//! Every tunable lives here so tests can build small or fast sessions.
//! The defaults are the shipped game; `validate` runs once at startup.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigurationError;
use crate::sim::{GameMode, Rect};

/// Size of the clickable title screen buttons
const TITLE_BUTTON_SIZE: Vec2 = Vec2::new(260.0, 50.0);
/// Vertical distance of each title button from screen center
const TITLE_BUTTON_SPREAD: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Plastic ===
    pub block_size: Vec2,
    /// Free play fall speed (pixels per frame)
    pub block_speed: f32,
    /// Free play spawn delay (frames)
    pub spawn_delay: u32,
    /// Free play special chance
    pub special_chance: f64,
    pub special_speed_multiplier: f32,

    // === Levels ramp ===
    pub base_block_speed: f32,
    pub speed_increment: f32,
    pub base_spawn_delay: u32,
    pub spawn_decrement: u32,
    pub min_spawn_delay: u32,
    pub base_special_chance: f64,
    pub special_chance_step: f64,
    pub max_special_chance: f64,

    // === Conveyor ===
    pub bin_size: Vec2,
    pub bin_count: usize,
    pub bin_speed: f32,
    pub conveyor_height: f32,

    // === Scoring ===
    pub normal_points: u64,
    pub special_points: u64,
    pub level_score_goal: u64,
    pub level_up_lives: u32,
    pub levels_start_lives: u32,
    pub free_play_start_lives: u32,

    // === Feedback ===
    pub hint_duration_frames: u32,
    pub floating_text_ticks: i32,
    pub effect_volume: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            block_size: Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT),
            block_speed: BLOCK_SPEED,
            spawn_delay: SPAWN_DELAY,
            special_chance: BASE_SPECIAL_CHANCE,
            special_speed_multiplier: SPECIAL_SPEED_MULTIPLIER,

            base_block_speed: BASE_BLOCK_SPEED,
            speed_increment: SPEED_INCREMENT,
            base_spawn_delay: BASE_SPAWN_DELAY,
            spawn_decrement: SPAWN_DECREMENT,
            min_spawn_delay: MIN_SPAWN_DELAY,
            base_special_chance: BASE_SPECIAL_CHANCE,
            special_chance_step: SPECIAL_CHANCE_STEP,
            max_special_chance: MAX_SPECIAL_CHANCE,

            bin_size: Vec2::new(BIN_WIDTH, BIN_HEIGHT),
            bin_count: DEFAULT_BIN_COUNT,
            bin_speed: BIN_SPEED,
            conveyor_height: CONVEYOR_HEIGHT,

            normal_points: NORMAL_POINTS,
            special_points: SPECIAL_POINTS,
            level_score_goal: LEVEL_SCORE_GOAL,
            level_up_lives: LEVEL_UP_LIVES,
            levels_start_lives: LEVELS_START_LIVES,
            free_play_start_lives: FREE_PLAY_START_LIVES,

            hint_duration_frames: HINT_DURATION_FRAMES,
            floating_text_ticks: FLOATING_TEXT_TICKS,
            effect_volume: EFFECT_VOLUME,
        }
    }
}

impl Tuning {
    /// Lives granted when a mode is chosen on the title screen
    pub fn starting_lives(&self, mode: GameMode) -> u32 {
        match mode {
            GameMode::Levels => self.levels_start_lives,
            GameMode::FreePlay => self.free_play_start_lives,
        }
    }

    /// Y coordinate of every bin (top edge sits on the conveyor)
    pub fn bin_row_y(&self) -> f32 {
        self.screen_height - self.conveyor_height - self.bin_size.y
    }

    /// Clickable area of a title screen button
    pub fn title_button(&self, mode: GameMode) -> Rect {
        let center_y = match mode {
            GameMode::Levels => self.screen_height / 2.0 - TITLE_BUTTON_SPREAD,
            GameMode::FreePlay => self.screen_height / 2.0 + TITLE_BUTTON_SPREAD,
        };
        let center = Vec2::new(self.screen_width / 2.0, center_y);
        Rect::from_center(center, TITLE_BUTTON_SIZE)
    }

    /// Largest number of bins the spaced-out placement can ever fit
    pub fn max_spaced_bins(&self) -> usize {
        let span = (self.screen_width - self.bin_size.x).floor();
        if span < 0.0 {
            return 0;
        }
        // Accepted x positions are integers more than one bin width apart
        let step = self.bin_size.x.floor() + 1.0;
        (span / step).floor() as usize + 1
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        positive("screen_width", self.screen_width as f64)?;
        positive("screen_height", self.screen_height as f64)?;
        positive("block_size.x", self.block_size.x as f64)?;
        positive("block_size.y", self.block_size.y as f64)?;
        positive("bin_size.x", self.bin_size.x as f64)?;
        positive("bin_size.y", self.bin_size.y as f64)?;
        positive("block_speed", self.block_speed as f64)?;
        positive("base_block_speed", self.base_block_speed as f64)?;
        positive("bin_speed", self.bin_speed as f64)?;
        positive("spawn_delay", self.spawn_delay as f64)?;
        positive("min_spawn_delay", self.min_spawn_delay as f64)?;
        positive("special_speed_multiplier", self.special_speed_multiplier as f64)?;
        positive("level_score_goal", self.level_score_goal as f64)?;

        // The Levels ramp only ever gets harder
        non_negative("speed_increment", self.speed_increment as f64)?;
        non_negative("special_chance_step", self.special_chance_step)?;

        probability("special_chance", self.special_chance)?;
        probability("base_special_chance", self.base_special_chance)?;
        probability("max_special_chance", self.max_special_chance)?;

        if self.block_size.x > self.screen_width {
            return Err(ConfigurationError::OffScreen {
                field: "block_size.x",
                value: self.block_size.x,
                limit: self.screen_width,
            });
        }
        if self.bin_row_y() < 0.0 {
            return Err(ConfigurationError::OffScreen {
                field: "conveyor_height + bin_size.y",
                value: self.conveyor_height + self.bin_size.y,
                limit: self.screen_height,
            });
        }

        if self.bin_count == 0 || self.bin_count > MAX_BINS {
            return Err(ConfigurationError::BinCount {
                count: self.bin_count,
                max: MAX_BINS,
            });
        }
        if self.bin_count > self.max_spaced_bins() {
            return Err(ConfigurationError::BinsDoNotFit {
                count: self.bin_count,
                bin_width: self.bin_size.x,
                screen_width: self.screen_width,
            });
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::Negative { field, value })
    }
}

fn probability(field: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigurationError::Probability { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_bin_count_limits() {
        let tuning = Tuning {
            bin_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigurationError::BinCount { count: 0, .. })
        ));

        let tuning = Tuning {
            bin_count: MAX_BINS + 1,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigurationError::BinCount { .. })
        ));

        let tuning = Tuning {
            bin_count: MAX_BINS,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_bins_that_cannot_be_spaced_are_rejected() {
        // 200 - 60 = 140 usable pixels, 61px apart -> at most 3 bins
        let tuning = Tuning {
            screen_width: 200.0,
            bin_count: 4,
            ..Default::default()
        };
        assert_eq!(tuning.max_spaced_bins(), 3);
        assert!(matches!(
            tuning.validate(),
            Err(ConfigurationError::BinsDoNotFit { count: 4, .. })
        ));
    }

    #[test]
    fn test_bad_probability_and_speed() {
        let tuning = Tuning {
            special_chance: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigurationError::Probability { field: "special_chance", .. })
        ));

        let tuning = Tuning {
            block_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigurationError::NonPositive { field: "block_speed", .. })
        ));
    }

    #[test]
    fn test_levels_ramp_cannot_ease_off() {
        let tuning = Tuning {
            speed_increment: -0.3,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigurationError::Negative { field: "speed_increment", .. })
        ));

        let tuning = Tuning {
            special_chance_step: -0.05,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigurationError::Negative { field: "special_chance_step", .. })
        ));

        // A flat ramp is fine
        let tuning = Tuning {
            speed_increment: 0.0,
            special_chance_step: 0.0,
            spawn_decrement: 0,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_title_buttons_do_not_overlap() {
        let tuning = Tuning::default();
        let levels = tuning.title_button(GameMode::Levels);
        let free_play = tuning.title_button(GameMode::FreePlay);
        assert!(!levels.overlaps(&free_play));
        assert!(levels.contains_point(Vec2::new(400.0, 260.0)));
        assert!(free_play.contains_point(Vec2::new(400.0, 340.0)));
    }

    #[test]
    fn test_bin_row_sits_on_conveyor() {
        let tuning = Tuning::default();
        assert_eq!(tuning.bin_row_y(), 600.0 - 20.0 - 60.0);
    }
}
