//! Number formatting for reason details and summaries.

/// Format a number with comma thousands separators and at most three fraction digits,
/// trailing zeros dropped (`12500` -> `12,500`, `5000.25` -> `5,000.25`).
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Past 1e15 an f64 has no fraction left, and scaling by 1000 could overflow.
    let (scaled, whole, frac) = if value.abs() >= 1e15 {
        let whole = value.abs().trunc();
        (whole, whole, 0)
    } else {
        let scaled = (value.abs() * 1000.0).round();
        let whole = (scaled / 1000.0).trunc();
        (scaled, whole, (scaled - whole * 1000.0).max(0.0) as u32)
    };

    let digits = format!("{whole:.0}");
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    if value < 0.0 && scaled > 0.0 {
        out.push('-');
    }
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if frac > 0 {
        let frac = format!("{frac:03}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// Format a plain number the way it was most likely written (`3` rather than `3.0`).
pub fn format_plain(value: f64) -> String {
    format!("{value}")
}
