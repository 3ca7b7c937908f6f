//! 文字種テーブルの境界付近を多く含むテスト入力の生成器

use proptest::prelude::*;
use crate::tables::{INCOMPATIBLE_CHARS, SAFE_STRING_TABLE};

pub(crate) fn half_width_kana() -> impl Strategy<Value = char> {
    prop::char::range('\u{FF67}', '\u{FF9F}')
}

/// Table keys, incompatible characters, half-width kana, ASCII and
/// arbitrary code points in roughly equal measure.
pub(crate) fn mixed_char() -> impl Strategy<Value = char> {
    let keys: Vec<char> = SAFE_STRING_TABLE.iter().map(|(c, _)| *c).collect();
    prop_oneof![
        prop::sample::select(keys),
        prop::sample::select(INCOMPATIBLE_CHARS),
        half_width_kana(),
        prop::char::range('!', '~'),
        any::<char>(),
    ]
}

pub(crate) fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(mixed_char(), 0..40).prop_map(|chars| chars.into_iter().collect())
}

pub(crate) fn kana_text() -> impl Strategy<Value = String> {
    prop::collection::vec(half_width_kana(), 1..20).prop_map(|chars| chars.into_iter().collect())
}
