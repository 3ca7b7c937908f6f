use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` span of a host buffer, counted in code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    /// Builds a region from two positions in either order.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Smallest region spanning both `self` and `other`.
    pub fn cover(self, other: Region) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// One character matched by a classifier scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
    pub ch: char,
}

impl MatchRange {
    pub fn region(&self) -> Region {
        Region {
            start: self.start,
            end: self.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_normalizes_order() {
        let region = Region::new(7, 3);
        assert_eq!(region.start, 3);
        assert_eq!(region.end, 7);
        assert_eq!(region.len(), 4);
        assert!(!region.empty());
    }

    #[test]
    fn test_caret_is_empty() {
        assert!(Region::caret(5).empty());
    }

    #[test]
    fn test_cover() {
        assert_eq!(Region::new(0, 3).cover(Region::new(1, 4)), Region::new(0, 4));
        assert_eq!(Region::new(5, 6).cover(Region::caret(2)), Region::new(2, 6));
    }
}
