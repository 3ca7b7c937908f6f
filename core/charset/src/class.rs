use std::ops::RangeInclusive;
use once_cell::sync::Lazy;
use samurai_types::CharClassKind;
use crate::table::SubstitutionTable;
use crate::tables::{
    FULL_PITCH_RANGES, HALF_WIDTH_KATAKANA_RANGES, INCOMPATIBLE_CHARS, UNICODE_DEPENDENT_RANGES,
};

/// An immutable set of code points, stored as sorted, non-overlapping ranges.
#[derive(Debug, Clone)]
pub struct CharacterClass {
    kind: CharClassKind,
    ranges: Vec<RangeInclusive<char>>,
}

static FULL_PITCH: Lazy<CharacterClass> =
    Lazy::new(|| CharacterClass::from_ranges(CharClassKind::FullPitch, FULL_PITCH_RANGES.iter().cloned()));

static HALF_WIDTH_KATAKANA: Lazy<CharacterClass> = Lazy::new(|| {
    CharacterClass::from_ranges(
        CharClassKind::HalfWidthKatakana,
        HALF_WIDTH_KATAKANA_RANGES.iter().cloned(),
    )
});

static UNICODE_DEPENDENT: Lazy<CharacterClass> = Lazy::new(|| {
    CharacterClass::from_ranges(
        CharClassKind::UnicodeDependent,
        UNICODE_DEPENDENT_RANGES
            .iter()
            .chain(HALF_WIDTH_KATAKANA_RANGES.iter())
            .cloned(),
    )
});

static PLATFORM_DEPENDENT: Lazy<CharacterClass> = Lazy::new(|| {
    CharacterClass::from_chars(
        CharClassKind::PlatformDependent,
        SubstitutionTable::safe_string().keys(),
    )
});

static INCOMPATIBLE: Lazy<CharacterClass> = Lazy::new(|| {
    CharacterClass::from_chars(CharClassKind::Incompatible, INCOMPATIBLE_CHARS.iter().copied())
});

impl CharacterClass {
    /// Returns the process-wide set for `kind`.
    pub fn of(kind: CharClassKind) -> &'static CharacterClass {
        match kind {
            CharClassKind::FullPitch => Lazy::force(&FULL_PITCH),
            CharClassKind::UnicodeDependent => Lazy::force(&UNICODE_DEPENDENT),
            CharClassKind::PlatformDependent => Lazy::force(&PLATFORM_DEPENDENT),
            CharClassKind::Incompatible => Lazy::force(&INCOMPATIBLE),
            CharClassKind::HalfWidthKatakana => Lazy::force(&HALF_WIDTH_KATAKANA),
        }
    }

    pub fn from_ranges<I>(kind: CharClassKind, ranges: I) -> Self
    where
        I: IntoIterator<Item = RangeInclusive<char>>,
    {
        let mut sorted: Vec<RangeInclusive<char>> = ranges
            .into_iter()
            .filter(|r| r.start() <= r.end())
            .collect();
        sorted.sort_by_key(|r| *r.start());

        // 隣接・重複する範囲を結合する
        let mut merged: Vec<RangeInclusive<char>> = Vec::with_capacity(sorted.len());
        for range in sorted {
            if let Some(last) = merged.last_mut() {
                if (*range.start() as u32) <= (*last.end() as u32).saturating_add(1) {
                    if range.end() > last.end() {
                        *last = *last.start()..=*range.end();
                    }
                    continue;
                }
            }
            merged.push(range);
        }

        Self { kind, ranges: merged }
    }

    pub fn from_chars<I>(kind: CharClassKind, chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self::from_ranges(kind, chars.into_iter().map(|c| c..=c))
    }

    pub fn kind(&self) -> CharClassKind {
        self.kind
    }

    pub fn contains(&self, c: char) -> bool {
        self.ranges
            .binary_search_by(|range| {
                if *range.end() < c {
                    std::cmp::Ordering::Less
                } else if *range.start() > c {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Number of code points in the set.
    pub fn len(&self) -> usize {
        self.ranges
            .iter()
            .map(|r| (*r.end() as usize) - (*r.start() as usize) + 1)
            .sum()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.ranges.iter().flat_map(|r| r.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::SAFE_STRING_TABLE;

    #[test]
    fn test_full_pitch_membership() {
        let class = CharacterClass::of(CharClassKind::FullPitch);
        for c in ['\u{3000}', '０', '９', 'Ａ', 'Ｚ', 'ａ', 'ｚ'] {
            assert!(class.contains(c), "{} should be full pitch", c);
        }
        for c in [' ', '0', 'A', '＠', '［'] {
            assert!(!class.contains(c), "{} should not be full pitch", c);
        }
        assert_eq!(class.len(), 1 + 10 + 26 + 26);
    }

    #[test]
    fn test_half_width_katakana_bounds() {
        let class = CharacterClass::of(CharClassKind::HalfWidthKatakana);
        assert!(class.contains('ｧ'));
        assert!(class.contains('ｱ'));
        assert!(class.contains('ﾝ'));
        assert!(class.contains('ｰ'));
        assert!(class.contains('ﾞ'));
        assert!(class.contains('ﾟ'));
        // ｦ と ･ は対象外
        assert!(!class.contains('ｦ'));
        assert!(!class.contains('･'));
        assert!(!class.contains('ア'));
    }

    #[test]
    fn test_unicode_dependent_includes_kana_and_symbols() {
        let class = CharacterClass::of(CharClassKind::UnicodeDependent);
        for c in ['①', '⓯', '☀', '♯', '㈠', '㏾', '№', '℡', '＇', '＂', 'ｶ', 'ﾞ', '⅓', '↟'] {
            assert!(class.contains(c), "{} should be unicode dependent", c);
        }
        assert!(!class.contains('♰'));
        assert!(!class.contains('あ'));
    }

    #[test]
    fn test_platform_dependent_is_table_domain() {
        let class = CharacterClass::of(CharClassKind::PlatformDependent);
        assert_eq!(class.len(), SAFE_STRING_TABLE.len());
        assert!(class.contains('\u{20B9F}'));
        assert!(class.contains('\u{F91D}'));
        // 互換漢字の統合漢字側は含まない
        assert!(!class.contains('欄'));
    }

    #[test]
    fn test_incompatible_set() {
        let class = CharacterClass::of(CharClassKind::Incompatible);
        assert_eq!(class.len(), INCOMPATIBLE_CHARS.len());
        assert!(class.contains('纊'));
        assert!(class.contains('黑'));
        assert!(class.contains('\u{FA0E}'));
        assert!(!class.contains('黒'));
    }

    #[test]
    fn test_from_ranges_merges_adjacent() {
        let class = CharacterClass::from_ranges(
            CharClassKind::FullPitch,
            vec!['c'..='d', 'a'..='b', 'x'..='x', 'b'..='c'],
        );
        assert_eq!(class.ranges, vec!['a'..='d', 'x'..='x']);
        assert_eq!(class.chars().collect::<String>(), "abcdx");
    }
}
