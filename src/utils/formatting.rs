//! Formatting utilities used for CLI and export outputs.
//! Rounding to two decimals happens here and nowhere else.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// `7.50`
pub fn fmt_hours(h: f64) -> String {
    format!("{:.2}", h)
}

/// `€ 200.00`
pub fn fmt_money(amount: f64, symbol: &str) -> String {
    if symbol.is_empty() {
        format!("{:.2}", amount)
    } else {
        format!("{} {:.2}", symbol, amount)
    }
}

/// Truncate to `max` characters, appending `...` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Horizontal rule made of `ch`, e.g. the configured separator.
pub fn separator(ch: &str, width: usize) -> String {
    let c = ch.chars().next().unwrap_or('-');
    std::iter::repeat_n(c, width).collect()
}
