use samurai_types::{Region, SamuraiError};
use crate::highlight::HighlightStyle;

/// The editor surface the commands run against.
///
/// Offsets are code points. The host is expected to serialize command
/// execution, so implementations need no internal locking.
pub trait EditorHost {
    /// Buffer length in code points.
    fn len(&self) -> usize;

    /// Current selections in buffer order. May be empty carets.
    fn selections(&self) -> Vec<Region>;

    fn substr(&self, region: Region) -> String;

    fn replace(&mut self, region: Region, text: &str) -> Result<(), SamuraiError>;

    fn insert(&mut self, at: usize, text: &str) -> Result<(), SamuraiError>;

    fn clipboard(&self) -> String;

    /// Regions of every non-overlapping match of the regex `pattern`.
    fn find_all(&self, pattern: &str) -> Result<Vec<Region>, SamuraiError>;

    /// Draws `regions` under `key`, replacing whatever was drawn there before.
    fn add_regions(&mut self, key: &str, regions: Vec<Region>, style: HighlightStyle);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn whole_buffer(&self) -> Region {
        Region::new(0, self.len())
    }

    fn text(&self) -> String {
        self.substr(self.whole_buffer())
    }
}
