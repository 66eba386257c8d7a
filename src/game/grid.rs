use super::config::ConfigError;
use super::state::Position;

/// Immutable bounds of the playable area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    width: usize,
    height: usize,
}

impl GridBounds {
    /// Create grid bounds; dimensions must be positive
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a position lies on the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// The cell where a fresh snake starts
    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            GridBounds::new(0, 10),
            Err(ConfigError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            GridBounds::new(10, 0),
            Err(ConfigError::InvalidDimensions {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn test_bounds_checking() {
        let bounds = GridBounds::new(20, 20).unwrap();

        assert!(bounds.contains(Position::new(0, 0)));
        assert!(bounds.contains(Position::new(19, 19)));
        assert!(!bounds.contains(Position::new(-1, 0)));
        assert!(!bounds.contains(Position::new(20, 0)));
        assert!(!bounds.contains(Position::new(0, 20)));
    }

    #[test]
    fn test_center() {
        assert_eq!(GridBounds::new(20, 20).unwrap().center(), Position::new(10, 10));
        assert_eq!(GridBounds::new(1, 1).unwrap().center(), Position::new(0, 0));
        assert_eq!(GridBounds::new(9, 5).unwrap().center(), Position::new(4, 2));
    }
}
