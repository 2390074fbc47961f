//! Ayu color theme and styling functions for ward CLI output.
//!
//! Uses the Ayu Dark color palette for consistent terminal styling.
//! Color source: <https://github.com/ayu-theme/ayu-colors>
//!
//! Design principles:
//! - Only states that need attention get color (occupied, maintenance);
//!   available beds use standard text
//! - Small Unicode symbols for icons, NOT emoji blobs

use owo_colors::OwoColorize;

use ward_core::BedStatus;

use crate::terminal::supports_color;

// ---------------------------------------------------------------------------
// Ayu Dark color palette (RGB values)
// ---------------------------------------------------------------------------

const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c - bright green
const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - bright yellow
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 - bright red
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue

// Status colors
const STATUS_OCCUPIED: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - yellow
const STATUS_READY: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c - green
const STATUS_CLEANING: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - cyan
const STATUS_MAINTENANCE: (u8, u8, u8) = (0xf2, 0x6d, 0x78); // #f26d78 - red

// ---------------------------------------------------------------------------
// Status icons -- consistent semantic indicators
// ---------------------------------------------------------------------------

/// Available status icon (hollow circle -- free for use).
pub const STATUS_ICON_AVAILABLE: &str = "\u{25CB}"; // ○
/// Occupied status icon (filled circle -- patient in the bed).
pub const STATUS_ICON_OCCUPIED: &str = "\u{25CF}"; // ●
/// Ready status icon (checkmark -- vacated and fit for use).
pub const STATUS_ICON_READY: &str = "\u{2713}"; // ✓
/// Cleaning status icon (half-filled circle -- work in progress).
pub const STATUS_ICON_CLEANING: &str = "\u{25D0}"; // ◐
/// Maintenance status icon (warning sign -- out of service).
pub const STATUS_ICON_MAINTENANCE: &str = "\u{26A0}"; // ⚠

// General icons
pub const ICON_WARN: &str = "\u{26A0}"; // ⚠
pub const ICON_FAIL: &str = "\u{2716}"; // ✖

// Separator
pub const SEPARATOR_LIGHT: &str = "\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}";

// ---------------------------------------------------------------------------
// Helper: apply truecolor only when color is supported
// ---------------------------------------------------------------------------

/// Applies truecolor foreground to a string, falling back to plain text
/// when color is not supported.
fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

/// Applies truecolor foreground + bold to a string.
fn color_bold_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        s.to_string()
    }
}

// ---------------------------------------------------------------------------
// Core semantic render helpers
// ---------------------------------------------------------------------------

/// Renders text with pass (green) styling.
pub fn render_pass(s: &str) -> String {
    color_str(s, PASS)
}

/// Renders text with warning (yellow) styling.
pub fn render_warn(s: &str) -> String {
    color_str(s, WARN)
}

/// Renders text with fail (red) styling.
pub fn render_fail(s: &str) -> String {
    color_str(s, FAIL)
}

/// Renders text with muted (gray) styling.
pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

/// Renders text with accent (blue) styling.
pub fn render_accent(s: &str) -> String {
    color_str(s, ACCENT)
}

/// Renders text in bold.
pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

/// Renders a category header in uppercase with accent color and bold.
pub fn render_category(s: &str) -> String {
    let upper = s.to_uppercase();
    color_bold_str(&upper, ACCENT)
}

/// Renders the light separator line in muted color.
pub fn render_separator() -> String {
    render_muted(SEPARATOR_LIGHT)
}

pub fn render_warn_icon() -> String {
    color_str(ICON_WARN, WARN)
}

pub fn render_fail_icon() -> String {
    color_str(ICON_FAIL, FAIL)
}

// ---------------------------------------------------------------------------
// Status rendering
// ---------------------------------------------------------------------------

/// Returns the appropriate icon for a bed status.
/// This is the canonical source for status icon rendering.
pub fn render_status_icon(status: BedStatus) -> &'static str {
    match status {
        BedStatus::Available => STATUS_ICON_AVAILABLE,
        BedStatus::Occupied => STATUS_ICON_OCCUPIED,
        BedStatus::Ready => STATUS_ICON_READY,
        BedStatus::Cleaning => STATUS_ICON_CLEANING,
        BedStatus::Maintenance => STATUS_ICON_MAINTENANCE,
    }
}

/// Returns the colored status icon string.
pub fn render_status_icon_colored(status: BedStatus) -> String {
    let icon = render_status_icon(status);
    match status {
        BedStatus::Available => icon.to_string(), // no color
        BedStatus::Occupied => color_str(icon, STATUS_OCCUPIED),
        BedStatus::Ready => color_str(icon, STATUS_READY),
        BedStatus::Cleaning => color_str(icon, STATUS_CLEANING),
        BedStatus::Maintenance => color_str(icon, STATUS_MAINTENANCE),
    }
}

/// Renders a status string with semantic coloring.
/// occupied/ready/cleaning/maintenance get color; available uses
/// standard text.
pub fn render_status(status: BedStatus) -> String {
    let s = status.as_str();
    match status {
        BedStatus::Occupied => color_str(s, STATUS_OCCUPIED),
        BedStatus::Ready => color_str(s, STATUS_READY),
        BedStatus::Cleaning => color_str(s, STATUS_CLEANING),
        BedStatus::Maintenance => color_str(s, STATUS_MAINTENANCE),
        BedStatus::Available => s.to_string(),
    }
}
