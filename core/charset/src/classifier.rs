use samurai_types::{CharClassKind, MatchRange};
use crate::class::CharacterClass;

/// Matches of a single class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMatches {
    pub kind: CharClassKind,
    pub ranges: Vec<MatchRange>,
}

/// Classifier output for several classes, in the order they were requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub classes: Vec<ClassMatches>,
}

impl Classification {
    pub fn get(&self, kind: CharClassKind) -> Option<&[MatchRange]> {
        self.classes
            .iter()
            .find(|m| m.kind == kind)
            .map(|m| m.ranges.as_slice())
    }

    pub fn total(&self) -> usize {
        self.classes.iter().map(|m| m.ranges.len()).sum()
    }
}

/// Finds every character of `text` that belongs to `kind`.
///
/// Offsets are code-point indices and each matched character gets its own
/// range; neighbouring matches are not merged.
pub fn classify(text: &str, kind: CharClassKind) -> Vec<MatchRange> {
    let class = CharacterClass::of(kind);
    text.chars()
        .enumerate()
        .filter(|(_, c)| class.contains(*c))
        .map(|(i, ch)| MatchRange { start: i, end: i + 1, ch })
        .collect()
}

pub fn classify_kinds(text: &str, kinds: &[CharClassKind]) -> Classification {
    let classes = kinds
        .iter()
        .map(|kind| {
            let class = CharacterClass::of(*kind);
            ClassMatches {
                kind: class.kind(),
                ranges: classify(text, *kind),
            }
        })
        .collect();
    Classification { classes }
}

/// Classifies `text` against the four highlighted classes.
pub fn classify_all(text: &str) -> Classification {
    classify_kinds(text, &CharClassKind::HIGHLIGHTED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pitch_ranges_are_not_merged() {
        let ranges = classify("aＡＢ　b", CharClassKind::FullPitch);
        let starts: Vec<usize> = ranges.iter().map(|r| r.start).collect();
        assert_eq!(starts, vec![1, 2, 3]);
        assert!(ranges.iter().all(|r| r.end == r.start + 1));
        assert_eq!(ranges[2].ch, '\u{3000}');
    }

    #[test]
    fn test_astral_character_counts_as_one_offset() {
        let text = "a\u{20B9F}b～";
        let ranges = classify(text, CharClassKind::PlatformDependent);
        assert_eq!(ranges.len(), 2);
        assert_eq!((ranges[0].start, ranges[0].end), (1, 2));
        assert_eq!(ranges[0].ch, '\u{20B9F}');
        assert_eq!((ranges[1].start, ranges[1].end), (3, 4));
    }

    #[test]
    fn test_ranges_cover_exactly_the_class_members() {
        let text = "髙橋さんの①番目のﾃｽﾄ、№５は〜～でした。纊";
        for kind in CharClassKind::HIGHLIGHTED {
            let class = CharacterClass::of(kind);
            let ranges = classify(text, kind);
            let chars: Vec<char> = text.chars().collect();

            for range in &ranges {
                assert_eq!(chars[range.start], range.ch);
                assert!(class.contains(range.ch));
            }

            let expected: Vec<usize> = chars
                .iter()
                .enumerate()
                .filter(|(_, c)| class.contains(**c))
                .map(|(i, _)| i)
                .collect();
            let actual: Vec<usize> = ranges.iter().map(|r| r.start).collect();
            assert_eq!(actual, expected, "coverage mismatch for {}", kind);
        }
    }

    #[test]
    fn test_classify_all_is_idempotent() {
        let text = "①ﾃｽﾄ～纊Ａ";
        let first = classify_all(text);
        let second = classify_all(text);
        assert_eq!(first, second);

        assert_eq!(first.get(CharClassKind::FullPitch).unwrap().len(), 1);
        assert_eq!(first.get(CharClassKind::UnicodeDependent).unwrap().len(), 4);
        assert_eq!(first.get(CharClassKind::PlatformDependent).unwrap().len(), 1);
        assert_eq!(first.get(CharClassKind::Incompatible).unwrap().len(), 1);
        assert_eq!(first.total(), 7);
        assert!(first.get(CharClassKind::HalfWidthKatakana).is_none());
    }

    #[test]
    fn test_plain_text_has_no_matches() {
        let result = classify_all("Hello, world! こんにちは");
        assert_eq!(result.total(), 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use crate::strategies::mixed_text;
    use crate::tables::{INCOMPATIBLE_CHARS, SAFE_STRING_TABLE};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn ranges_are_sound_and_complete(text in mixed_text()) {
            let chars: Vec<char> = text.chars().collect();
            for kind in CharClassKind::HIGHLIGHTED {
                let class = CharacterClass::of(kind);
                let ranges = classify(&text, kind);

                for range in &ranges {
                    prop_assert_eq!(range.end, range.start + 1);
                    prop_assert_eq!(chars[range.start], range.ch);
                }

                let expected: Vec<usize> = (0..chars.len())
                    .filter(|&i| class.contains(chars[i]))
                    .collect();
                let actual: Vec<usize> = ranges.iter().map(|r| r.start).collect();
                prop_assert_eq!(actual, expected);
            }
        }

        #[test]
        fn table_classes_match_their_tables(text in mixed_text()) {
            let incompatible = classify(&text, CharClassKind::Incompatible);
            let platform = classify(&text, CharClassKind::PlatformDependent);

            let expected_incompatible = text.chars().filter(|c| INCOMPATIBLE_CHARS.contains(c)).count();
            let expected_platform = text
                .chars()
                .filter(|c| SAFE_STRING_TABLE.iter().any(|(key, _)| key == c))
                .count();

            prop_assert_eq!(incompatible.len(), expected_incompatible);
            prop_assert_eq!(platform.len(), expected_platform);
        }

        #[test]
        fn classification_is_deterministic(text in mixed_text()) {
            prop_assert_eq!(classify_all(&text), classify_all(&text));
        }
    }
}
