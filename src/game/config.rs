use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cell the player respawns on (x, z)
    pub spawn: (i32, i32),
    /// Target cell that wins the game (x, z)
    pub goal: (i32, i32),
    /// Lives at the start of a session
    pub initial_lives: i32,

    // Tile pattern
    /// Modulus of the obstacle formula
    pub modulus: i32,
    /// Pattern offset before the first reseed
    pub initial_pattern_offset: i32,
    /// Pattern offsets are resampled from `0..reseed_range`
    pub reseed_range: i32,
    /// Reseed once the directional key press counter exceeds this value
    pub reseed_after: u32,

    // Scoring
    /// Penalty for a rejected move
    pub move_penalty: i32,
    /// Bonus for reaching the goal
    pub win_bonus: i32,
    /// Penalty for running out of lives
    pub loss_penalty: i32,

    /// Height at which a fall ends
    pub fall_floor: f32,
    /// Field of view, in degrees, for every derived camera pose
    pub fov: f32,

    /// RNG seed for reseeding; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn: (-5, 5),
            goal: (4, -4),
            initial_lives: 3,
            modulus: 7,
            initial_pattern_offset: 1,
            reseed_range: 10,
            reseed_after: 6,
            move_penalty: 5,
            win_bonus: 50,
            loss_penalty: 50,
            fall_floor: -10.0,
            fov: 90.0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default configuration with a fixed RNG seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.spawn, (-5, 5));
        assert_eq!(config.goal, (4, -4));
        assert_eq!(config.initial_lives, 3);
        assert_eq!(config.modulus, 7);
        assert_eq!(config.initial_pattern_offset, 1);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_seeded_config() {
        let config = GameConfig::seeded(42);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.modulus, 7);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::seeded(9);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"seed\":9"));

        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }
}
