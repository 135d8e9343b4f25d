use crate::neighbors::Movement;

/// Settings applied by [`Pathfinder`](crate::Pathfinder) to every search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Movement used by [`Pathfinder::find_path`](crate::Pathfinder::find_path)
    /// and [`Pathfinder::find_path_between`](crate::Pathfinder::find_path_between).
    pub movement: Movement,
    /// Stop the wave once the target is dequeued. When unset the wave always
    /// labels every reachable cell, so distance queries cover the whole grid.
    pub stop_at_target: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            movement: Movement::Cardinal,
            stop_at_target: true,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"movement":"Diagonal"}"#).unwrap();
        assert_eq!(cfg.movement, Movement::Diagonal);
        assert!(cfg.stop_at_target);
    }
}
