use serde::{Deserialize, Serialize};

/// Importance level of a memory. Ordered: Low < Normal < High < Critical.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Low,
    #[default]
    Normal,
    High,
    Critical,
}

impl Importance {
    /// Multiplier applied to half-lives: important memories decay slower.
    pub fn half_life_multiplier(self) -> f64 {
        match self {
            Self::Low => 0.75,
            Self::Normal => 1.0,
            Self::High => 1.5,
            Self::Critical => 2.0,
        }
    }
}
