use std::fmt;
use serde::{Deserialize, Serialize};

/// 文字種の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharClassKind {
    /// 全角英数字・全角スペース
    FullPitch,
    /// 丸数字、記号、半角カナなど Unicode 依存の文字
    UnicodeDependent,
    /// 機種依存文字 (安全な文字への置換表を持つもの)
    PlatformDependent,
    /// 他ベンダーと互換性のない機種依存文字
    Incompatible,
    /// 半角カタカナと半角濁点・半濁点
    HalfWidthKatakana,
}

impl CharClassKind {
    /// Classes that get an editor highlight, in drawing order.
    pub const HIGHLIGHTED: [CharClassKind; 4] = [
        CharClassKind::FullPitch,
        CharClassKind::UnicodeDependent,
        CharClassKind::PlatformDependent,
        CharClassKind::Incompatible,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FullPitch => "full-pitch",
            Self::UnicodeDependent => "unicode-dependent",
            Self::PlatformDependent => "platform-dependent",
            Self::Incompatible => "incompatible",
            Self::HalfWidthKatakana => "half-width-katakana",
        }
    }
}

impl fmt::Display for CharClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlighted_excludes_katakana() {
        assert_eq!(CharClassKind::HIGHLIGHTED.len(), 4);
        assert!(!CharClassKind::HIGHLIGHTED.contains(&CharClassKind::HalfWidthKatakana));
    }

    #[test]
    fn test_serde_roundtrip_name() {
        let json = serde_json::to_string(&CharClassKind::Incompatible).unwrap();
        assert_eq!(json, "\"Incompatible\"");
        assert_eq!(CharClassKind::Incompatible.to_string(), "incompatible");
    }
}
