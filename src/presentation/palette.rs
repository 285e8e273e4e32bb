/// Semantic color of a rendered value.
///
/// Formatters map a tone to their own output: hex colors in HTML, ANSI
/// colors in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Gray,
}

impl Tone {
    pub fn hex(&self) -> &'static str {
        match self {
            Tone::Red => "#dc2626",
            Tone::Orange => "#ea580c",
            Tone::Yellow => "#ca8a04",
            Tone::Green => "#16a34a",
            Tone::Blue => "#2563eb",
            Tone::Gray => "#6b7280",
        }
    }

    /// Lighter variant used for badge backgrounds.
    pub fn background_hex(&self) -> &'static str {
        match self {
            Tone::Red => "#fee2e2",
            Tone::Orange => "#ffedd5",
            Tone::Yellow => "#fef9c3",
            Tone::Green => "#dcfce7",
            Tone::Blue => "#dbeafe",
            Tone::Gray => "#f3f4f6",
        }
    }
}

/// Placeholder ring color for charts with no data.
pub const EMPTY_RING_HEX: &str = "#e5e7eb";

/// Score tier: `<50` red, `<75` orange, `<90` yellow, otherwise green.
pub fn score_tone(score: f64) -> Tone {
    if score < 50.0 {
        Tone::Red
    } else if score < 75.0 {
        Tone::Orange
    } else if score < 90.0 {
        Tone::Yellow
    } else {
        Tone::Green
    }
}
