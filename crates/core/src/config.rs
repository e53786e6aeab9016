//! Session configuration.

use std::time::Duration;

use crate::error::ConfigError;
use crate::types::{
    PieceKind, DEFAULT_COLS, DEFAULT_DROP_INTERVAL_MS, DEFAULT_POINTS_PER_LINE, DEFAULT_ROWS,
};

/// Everything needed to build a [`Session`](crate::Session).
///
/// ```
/// use blockfall_core::SessionConfig;
/// use blockfall_core::types::PieceKind;
///
/// let config = SessionConfig::new(10, 10)
///     .with_drop_interval_ms(250)
///     .with_piece_set(&[PieceKind::O]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    pub drop_interval_ms: u32,
    pub points_per_line: u32,
    pub seed: u32,
    pub piece_set: Vec<PieceKind>,
}

impl SessionConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_drop_interval_ms(mut self, ms: u32) -> Self {
        self.drop_interval_ms = ms;
        self
    }

    pub fn with_points_per_line(mut self, points: u32) -> Self {
        self.points_per_line = points;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_piece_set(mut self, kinds: &[PieceKind]) -> Self {
        self.piece_set = kinds.to_vec();
        self
    }

    pub fn drop_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.drop_interval_ms))
    }

    /// Check the configuration without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (rows, cols) = (self.rows, self.cols);
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        if rows > i32::MAX as usize || cols > i32::MAX as usize {
            return Err(ConfigError::GridTooLarge { rows, cols });
        }
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        if self.points_per_line == 0 {
            return Err(ConfigError::ZeroPointsPerLine);
        }
        if self.piece_set.is_empty() {
            return Err(ConfigError::EmptyPieceSet);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
            points_per_line: DEFAULT_POINTS_PER_LINE,
            seed: 1,
            piece_set: PieceKind::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SessionConfig::default();
        assert_eq!((config.rows, config.cols), (20, 10));
        assert_eq!(config.drop_interval(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_each_bad_field() {
        assert_eq!(
            SessionConfig::new(0, 10).validate(),
            Err(ConfigError::EmptyGrid { rows: 0, cols: 10 })
        );
        assert_eq!(
            SessionConfig::default().with_drop_interval_ms(0).validate(),
            Err(ConfigError::ZeroDropInterval)
        );
        assert_eq!(
            SessionConfig::default().with_points_per_line(0).validate(),
            Err(ConfigError::ZeroPointsPerLine)
        );
        assert_eq!(
            SessionConfig::default().with_piece_set(&[]).validate(),
            Err(ConfigError::EmptyPieceSet)
        );
    }
}
