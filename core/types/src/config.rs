use serde::{Deserialize, Serialize};
use crate::class::CharClassKind;

fn enabled() -> bool {
    true
}

/// Which character classes the highlighting driver draws.
///
/// Keys match the plugin settings file; any key left out defaults to enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSettings {
    #[serde(default = "enabled")]
    pub highlight_full_pitch_characters: bool,
    #[serde(default = "enabled")]
    pub highlight_unicode_dependent_characters: bool,
    #[serde(default = "enabled")]
    pub highlight_platform_dependent_characters: bool,
    #[serde(default = "enabled")]
    pub highlight_uncompatible_platform_dependent_characters: bool,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            highlight_full_pitch_characters: true,
            highlight_unicode_dependent_characters: true,
            highlight_platform_dependent_characters: true,
            highlight_uncompatible_platform_dependent_characters: true,
        }
    }
}

impl HighlightSettings {
    pub fn is_enabled(&self, kind: CharClassKind) -> bool {
        match kind {
            CharClassKind::FullPitch => self.highlight_full_pitch_characters,
            CharClassKind::UnicodeDependent => self.highlight_unicode_dependent_characters,
            CharClassKind::PlatformDependent => self.highlight_platform_dependent_characters,
            CharClassKind::Incompatible => self.highlight_uncompatible_platform_dependent_characters,
            // 半角カナは Unicode 依存文字としてハイライトされる
            CharClassKind::HalfWidthKatakana => false,
        }
    }

    pub fn enabled_classes(&self) -> Vec<CharClassKind> {
        CharClassKind::HIGHLIGHTED
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
            .collect()
    }
}
