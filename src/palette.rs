use image::Rgba;

/// Project JIN theme colors. These are fixed; icons are not themeable.
pub const BACKGROUND: Rgba<u8> = Rgba([0x11, 0x18, 0x27, 0xFF]); // dark grey
pub const ACCENT: Rgba<u8> = Rgba([0x3B, 0x82, 0xF6, 0xFF]); // blue
pub const TEXT: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]); // white
pub const HIGHLIGHT: Rgba<u8> = Rgba([0x10, 0xB9, 0x81, 0xFF]); // green
pub const WARNING: Rgba<u8> = Rgba([0xF5, 0x9E, 0x0B, 0xFF]); // orange
