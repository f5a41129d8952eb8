//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to `width` display columns, ignoring ANSI escapes.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = crate::utils::colors::strip_ansi(s);
    let pad = width.saturating_sub(UnicodeWidthStr::width(visible.as_str()));
    format!("{}{}", s, " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = crate::utils::colors::strip_ansi(s);
    let pad = width.saturating_sub(UnicodeWidthStr::width(visible.as_str()));
    format!("{}{}", " ".repeat(pad), s)
}

/// Minutes as `HHh MMm`, e.g. 150 → `02h 30m`.
pub fn mins2readable(mins: i64) -> String {
    let abs_m = mins.abs();
    let sign = if mins < 0 { "-" } else { "" };
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mins2readable() {
        assert_eq!(mins2readable(150), "02h 30m");
        assert_eq!(mins2readable(45), "00h 45m");
        assert_eq!(mins2readable(1440), "24h 00m");
        assert_eq!(mins2readable(-61), "-01h 01m");
    }

    #[test]
    fn test_padding_ignores_ansi() {
        let colored = "\x1b[31mNPT\x1b[0m";
        assert_eq!(crate::utils::colors::strip_ansi(&pad_right(colored, 5)), "NPT  ");
        assert_eq!(pad_left("7", 3), "  7");
    }
}
