use ab_glyph::FontVec;
use tracing::debug;

/// Embedded fallback font (DejaVu Sans Bold), used when no preferred
/// system font can be loaded.
static FALLBACK_FONT: &[u8] = include_bytes!("../assets/font.ttf");

/// Preferred system fonts, tried in order. Covers macOS and common Linux
/// installs; .ttc collections are handled by loading face 0.
const PREFERRED_FONTS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/System/Library/Fonts/Arial.ttc",
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
];

/// Resolve the font used for icon text.
///
/// Tries the preferred system fonts first and silently falls back to the
/// embedded font if none of them load. Never fails.
pub fn load() -> FontVec {
    for path in PREFERRED_FONTS {
        if let Ok(data) = std::fs::read(path) {
            match FontVec::try_from_vec_and_index(data, 0) {
                Ok(font) => {
                    debug!("Using system font: {}", path);
                    return font;
                }
                Err(e) => debug!("Failed to parse font {}: {}", path, e),
            }
        }
    }

    debug!("No preferred system font found, using embedded fallback");
    FontVec::try_from_vec(FALLBACK_FONT.to_vec()).expect("embedded font is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_always_resolves() {
        // Must produce a usable font even on a machine with no system fonts
        let _font = load();
    }

    #[test]
    fn test_embedded_fallback_parses() {
        let font = FontVec::try_from_vec(FALLBACK_FONT.to_vec());
        assert!(font.is_ok());
    }
}
