use egui::Color32;

/// A named colour shown as a toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: Color32,
}

impl PaletteEntry {
    pub const fn new(name: &'static str, color: Color32) -> Self {
        Self { name, color }
    }
}

/// Toolbar palette, in display order.
pub const PALETTE: [PaletteEntry; 5] = [
    PaletteEntry::new("Black", Color32::from_rgb(0, 0, 0)),
    PaletteEntry::new("Red", Color32::from_rgb(255, 0, 0)),
    PaletteEntry::new("Blue", Color32::from_rgb(0, 0, 255)),
    PaletteEntry::new("Green", Color32::from_rgb(0, 128, 0)),
    PaletteEntry::new("Purple", Color32::from_rgb(128, 0, 128)),
];

/// Looks up a palette colour by its display name (case-insensitive).
pub fn by_name(name: &str) -> Option<PaletteEntry> {
    PALETTE
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order() {
        let names: Vec<&str> = PALETTE.iter().map(|entry| entry.name).collect();
        assert_eq!(names, ["Black", "Red", "Blue", "Green", "Purple"]);
    }

    #[test]
    fn test_palette_colors_are_opaque() {
        for entry in PALETTE {
            assert_eq!(entry.color.a(), 255, "{} is not opaque", entry.name);
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(by_name("green").map(|e| e.color), Some(Color32::from_rgb(0, 128, 0)));
        assert!(by_name("Orange").is_none());
    }
}
