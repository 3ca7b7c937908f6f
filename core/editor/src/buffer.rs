use std::collections::BTreeMap;
use regex::Regex;
use tracing::debug;
use samurai_types::{Region, SamuraiError};
use crate::highlight::HighlightStyle;
use crate::host::EditorHost;

/// Regions drawn under one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnRegions {
    pub regions: Vec<Region>,
    pub style: HighlightStyle,
}

/// In-memory editor buffer with selections and a clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    chars: Vec<char>,
    selections: Vec<Region>,
    clipboard: String,
    drawn: BTreeMap<String, DrawnRegions>,
}

impl MemoryBuffer {
    /// Creates a buffer with a single caret at the start.
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            selections: vec![Region::caret(0)],
            clipboard: String::new(),
            drawn: BTreeMap::new(),
        }
    }

    pub fn with_clipboard(mut self, clipboard: &str) -> Self {
        self.clipboard = clipboard.to_string();
        self
    }

    pub fn with_selections(mut self, selections: Vec<Region>) -> Self {
        self.set_selections(selections);
        self
    }

    /// Clamps, sorts and merges selections the way an editor does: overlapping
    /// selections become one, duplicate carets collapse.
    pub fn set_selections(&mut self, mut selections: Vec<Region>) {
        let len = self.chars.len();
        for region in selections.iter_mut() {
            region.start = region.start.min(len);
            region.end = region.end.min(len);
        }
        selections.sort();

        let mut merged: Vec<Region> = Vec::with_capacity(selections.len());
        for region in selections {
            if let Some(last) = merged.last_mut() {
                if region.start < last.end || region == *last {
                    *last = last.cover(region);
                    continue;
                }
            }
            merged.push(region);
        }
        self.selections = merged;
    }

    pub fn select_all(&mut self) {
        self.selections = vec![Region::new(0, self.chars.len())];
    }

    pub fn drawn(&self, key: &str) -> Option<&DrawnRegions> {
        self.drawn.get(key)
    }

    fn check_region(&self, region: Region) -> Result<(), SamuraiError> {
        if region.start > region.end || region.end > self.chars.len() {
            return Err(SamuraiError::InvalidRegion {
                start: region.start,
                end: region.end,
                len: self.chars.len(),
            });
        }
        Ok(())
    }

    // 置換範囲の後ろにある位置を新しい長さに合わせてずらす
    fn shift_position(pos: usize, replaced: Region, new_len: usize) -> usize {
        if pos <= replaced.start {
            pos
        } else if pos >= replaced.end {
            pos - replaced.len() + new_len
        } else {
            replaced.start + new_len
        }
    }
}

impl EditorHost for MemoryBuffer {
    fn len(&self) -> usize {
        self.chars.len()
    }

    fn selections(&self) -> Vec<Region> {
        self.selections.clone()
    }

    fn substr(&self, region: Region) -> String {
        let end = region.end.min(self.chars.len());
        let start = region.start.min(end);
        self.chars[start..end].iter().collect()
    }

    fn replace(&mut self, region: Region, text: &str) -> Result<(), SamuraiError> {
        self.check_region(region)?;

        let replacement: Vec<char> = text.chars().collect();
        let new_len = replacement.len();
        self.chars.splice(region.start..region.end, replacement).for_each(drop);

        for selection in self.selections.iter_mut() {
            if *selection == region && !region.empty() {
                selection.end = region.start + new_len;
                continue;
            }
            selection.start = Self::shift_position(selection.start, region, new_len);
            selection.end = Self::shift_position(selection.end, region, new_len);
        }

        debug!("Replaced {}..{} with {} chars", region.start, region.end, new_len);
        Ok(())
    }

    fn insert(&mut self, at: usize, text: &str) -> Result<(), SamuraiError> {
        self.replace(Region::caret(at), text)
    }

    fn clipboard(&self) -> String {
        self.clipboard.clone()
    }

    fn find_all(&self, pattern: &str) -> Result<Vec<Region>, SamuraiError> {
        let regex = Regex::new(pattern).map_err(|e| SamuraiError::Pattern {
            message: format!("Invalid search pattern '{}': {}", pattern, e),
        })?;

        let text: String = self.chars.iter().collect();
        let mut regions = Vec::new();
        // バイト位置から文字位置への変換を走査しながら行う
        let mut byte_pos = 0;
        let mut char_pos = 0;
        for m in regex.find_iter(&text) {
            char_pos += text[byte_pos..m.start()].chars().count();
            let start = char_pos;
            char_pos += m.as_str().chars().count();
            byte_pos = m.end();
            regions.push(Region::new(start, char_pos));
        }

        Ok(regions)
    }

    fn add_regions(&mut self, key: &str, regions: Vec<Region>, style: HighlightStyle) {
        self.drawn.insert(key.to_string(), DrawnRegions { regions, style });
    }
}
