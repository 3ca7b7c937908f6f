use std::collections::HashMap;
use once_cell::sync::Lazy;
use crate::tables::SAFE_STRING_TABLE;

/// Single-character substitution map, built once from a static table.
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    map: HashMap<char, &'static str>,
}

static SAFE_STRING: Lazy<SubstitutionTable> =
    Lazy::new(|| SubstitutionTable::from_pairs(SAFE_STRING_TABLE));

impl SubstitutionTable {
    /// The platform-dependent → safe character table.
    pub fn safe_string() -> &'static SubstitutionTable {
        Lazy::force(&SAFE_STRING)
    }

    pub fn from_pairs(pairs: &[(char, &'static str)]) -> Self {
        let map = pairs.iter().copied().collect();
        Self { map }
    }

    pub fn get(&self, c: char) -> Option<&'static str> {
        self.map.get(&c).copied()
    }

    pub fn contains_key(&self, c: char) -> bool {
        self.map.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.map.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.map.values().copied()
    }

    /// Replaces every key in `text` with its value in one left-to-right pass.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.get(c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        out
    }
}
