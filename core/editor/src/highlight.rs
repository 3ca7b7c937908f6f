use tracing::debug;
use samurai_types::{CharClassKind, HighlightSettings, Region};
use samurai_charset::classify;
use crate::host::EditorHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Outlined,
    EmptyAsOverwrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightStyle {
    pub scope: &'static str,
    pub draw: DrawMode,
}

/// Region key and style for each highlighted class.
pub const HIGHLIGHT_SPECS: [(CharClassKind, &str, HighlightStyle); 4] = [
    (
        CharClassKind::FullPitch,
        "FullPitchWhiteSpaceHighlight",
        HighlightStyle { scope: "comment", draw: DrawMode::Outlined },
    ),
    (
        CharClassKind::UnicodeDependent,
        "UnicodeDependentCharactersHighlight",
        HighlightStyle { scope: "string", draw: DrawMode::Outlined },
    ),
    (
        CharClassKind::PlatformDependent,
        "PlatformDependentCharactersHighlight",
        HighlightStyle { scope: "string", draw: DrawMode::EmptyAsOverwrite },
    ),
    (
        CharClassKind::Incompatible,
        "UncompatiblePlatformDependentCharactersHighlight",
        HighlightStyle { scope: "invalid", draw: DrawMode::EmptyAsOverwrite },
    ),
];

/// 有効な文字種ごとにバッファ全体をハイライトする
pub fn highlight<H: EditorHost>(host: &mut H, settings: &HighlightSettings) {
    let text = host.text();

    for (kind, key, style) in HIGHLIGHT_SPECS {
        let regions: Vec<Region> = if settings.is_enabled(kind) {
            classify(&text, kind).iter().map(|m| m.region()).collect()
        } else {
            Vec::new()
        };
        debug!("Highlighting {} {} regions", regions.len(), kind);
        host.add_regions(key, regions, style);
    }
}

/// Re-highlights a view on load, focus and modification.
pub struct HighlightListener {
    settings: HighlightSettings,
}

impl HighlightListener {
    pub fn new(settings: HighlightSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &HighlightSettings {
        &self.settings
    }

    pub fn on_load<H: EditorHost>(&self, host: &mut H) {
        highlight(host, &self.settings);
    }

    pub fn on_activated<H: EditorHost>(&self, host: &mut H) {
        highlight(host, &self.settings);
    }

    pub fn on_modified<H: EditorHost>(&self, host: &mut H) {
        highlight(host, &self.settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::MemoryBuffer;

    #[test]
    fn test_highlight_draws_every_enabled_class() {
        let mut buffer = MemoryBuffer::new("Ａ①～纊");
        highlight(&mut buffer, &HighlightSettings::default());

        let full = buffer.drawn("FullPitchWhiteSpaceHighlight").unwrap();
        assert_eq!(full.regions, vec![Region::new(0, 1)]);
        assert_eq!(full.style.scope, "comment");

        let unicode = buffer.drawn("UnicodeDependentCharactersHighlight").unwrap();
        assert_eq!(unicode.regions, vec![Region::new(1, 2)]);

        let platform = buffer.drawn("PlatformDependentCharactersHighlight").unwrap();
        assert_eq!(platform.regions, vec![Region::new(2, 3)]);
        assert_eq!(platform.style.draw, DrawMode::EmptyAsOverwrite);

        let incompatible = buffer
            .drawn("UncompatiblePlatformDependentCharactersHighlight")
            .unwrap();
        assert_eq!(incompatible.regions, vec![Region::new(3, 4)]);
        assert_eq!(incompatible.style.scope, "invalid");
    }

    #[test]
    fn test_disabled_class_is_cleared() {
        let mut buffer = MemoryBuffer::new("ＡＢ");
        let listener = HighlightListener::new(HighlightSettings::default());
        listener.on_load(&mut buffer);
        assert_eq!(buffer.drawn("FullPitchWhiteSpaceHighlight").unwrap().regions.len(), 2);

        let settings = HighlightSettings {
            highlight_full_pitch_characters: false,
            ..HighlightSettings::default()
        };
        HighlightListener::new(settings).on_modified(&mut buffer);
        assert!(buffer.drawn("FullPitchWhiteSpaceHighlight").unwrap().regions.is_empty());
    }

    #[test]
    fn test_listener_tracks_modifications() {
        let mut buffer = MemoryBuffer::new("abc");
        let listener = HighlightListener::new(HighlightSettings::default());
        listener.on_activated(&mut buffer);
        assert!(buffer.drawn("FullPitchWhiteSpaceHighlight").unwrap().regions.is_empty());

        buffer.insert(3, "１").unwrap();
        listener.on_modified(&mut buffer);
        assert_eq!(
            buffer.drawn("FullPitchWhiteSpaceHighlight").unwrap().regions,
            vec![Region::new(3, 4)]
        );
    }
}
