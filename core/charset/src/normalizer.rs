use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;
use samurai_types::CharClassKind;
use tracing::trace;
use crate::class::CharacterClass;

/// Uppercase letter, lowercase letter or decimal digit.
pub fn is_alnum_category(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::DecimalNumber
    )
}

fn push_nfkc_char(out: &mut String, c: char) {
    out.extend(std::iter::once(c).nfkc());
}

/// Half-width katakana run accumulator.
///
/// Voicing marks are separate code points that only compose with the kana in
/// front of them, so a run has to be normalized as one unit.
enum KanaRun {
    Idle,
    Accumulating(String),
}

impl KanaRun {
    fn push(&mut self, c: char) {
        match self {
            KanaRun::Idle => *self = KanaRun::Accumulating(c.to_string()),
            KanaRun::Accumulating(run) => run.push(c),
        }
    }

    fn flush(&mut self, out: &mut String) {
        if let KanaRun::Accumulating(run) = std::mem::replace(self, KanaRun::Idle) {
            trace!("Flushing half-width kana run of {} chars", run.chars().count());
            out.extend(run.as_str().nfkc());
        }
    }
}

/// 英数字と半角カナだけを NFKC 正規化する
pub fn normalize_selective(text: &str) -> String {
    let kana = CharacterClass::of(CharClassKind::HalfWidthKatakana);
    let mut out = String::with_capacity(text.len());
    let mut run = KanaRun::Idle;

    for c in text.chars() {
        if kana.contains(c) {
            run.push(c);
            continue;
        }

        run.flush(&mut out);
        if is_alnum_category(c) {
            push_nfkc_char(&mut out, c);
        } else {
            out.push(c);
        }
    }
    run.flush(&mut out);

    out
}

/// 英数字だけを1文字ずつ NFKC 正規化する
pub fn normalize_alnum(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_alnum_category(c) {
            push_nfkc_char(&mut out, c);
        } else {
            out.push(c);
        }
    }
    out
}
