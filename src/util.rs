//! Small utility helpers for number formatting, rating display, matching and time.
//!
//! The functions in this module are intentionally lightweight and dependency-free.
//! They are used by the filter logic, the audit log and the UI.

/// Format a download count the way store cards show it.
///
/// Rules:
///
/// - `>= 1_000_000`: millions with one decimal and a `M+` suffix (`9_000_000` => `9.0M+`)
/// - `>= 1_000`: whole thousands with a `K+` suffix (`56_000` => `56K+`)
/// - otherwise: the plain number with thousands separators
///
/// Millions go through [`fixed1`] on the `f64` quotient, so `1_150_000` (stored as
/// `1.1499..`) shows `1.1M+`. Thousands round half-up, so `2_500` becomes `3K+`.
pub fn format_downloads(num: u64) -> String {
    if num >= 1_000_000 {
        return format!("{}M+", fixed1(num as f64 / 1_000_000.0));
    }
    if num >= 1_000 {
        return format!("{}K+", (num + 500) / 1_000);
    }
    format_thousands(num)
}

/// What: Format a non-negative value with one decimal place.
///
/// Details:
/// - Rounds the exact binary value, so `1.15` (just below the tie) gives `1.1`.
/// - Exact ties, which only occur at odd multiples of `0.25`, round up (`4.25` => `4.3`)
///   where plain `{:.1}` would round to even.
pub fn fixed1(x: f64) -> String {
    let quarters = x * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        return format!("{:.1}", (x * 10.0).ceil() / 10.0);
    }
    format!("{x:.1}")
}

/// Insert `,` separators every three digits (`1234567` => `1,234,567`).
pub fn format_thousands(num: u64) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Split a `[0, 5]` rating into `(full, half, empty)` star counts.
///
/// A half star is shown when the fractional part lies in `[0.3, 0.8)`; fractions
/// of `0.8` and above are *not* rounded up to a full star. Out-of-range ratings
/// are clamped first. The three counts always add up to 5.
pub fn star_breakdown(rating: f64) -> (usize, usize, usize) {
    let r = if rating.is_finite() {
        rating.clamp(0.0, 5.0)
    } else {
        0.0
    };
    let full = r.floor() as usize;
    let frac = r - r.floor();
    let half = usize::from((0.3..0.8).contains(&frac));
    let empty = 5usize.saturating_sub(full + half);
    (full, half, empty)
}

/// Case-insensitive substring test; `needle_lower` must already be lowercase.
///
/// An empty needle matches everything.
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

/// Seconds since the Unix epoch, or `None` if the clock is before 1970.
pub fn now_unix_secs() -> Option<i64> {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .ok()
        .map(|d| d.as_secs() as i64)
}

/// Current UTC year, used by the footer; falls back to 1970 on clock errors.
pub fn current_year() -> i32 {
    ts_to_date(now_unix_secs())
        .get(0..4)
        .and_then(|y| y.parse().ok())
        .unwrap_or(1970)
}

/// Convert an optional Unix timestamp (seconds) to a UTC date-time string.
///
/// - Returns an empty string for `None`.
/// - Negative timestamps are returned as their numeric string representation.
/// - Output format: `YYYY-MM-DD HH:MM:SS` (UTC)
///
/// This implementation performs a simple conversion using loops and does not
/// account for leap seconds.
pub fn ts_to_date(ts: Option<i64>) -> String {
    let t = match ts {
        Some(v) => v,
        None => return String::new(),
    };
    if t < 0 {
        return t.to_string();
    }

    let mut days = t / 86_400;
    let mut sod = t % 86_400;

    let hour = (sod / 3600) as u32;
    sod %= 3600;
    let minute = (sod / 60) as u32;
    let second = (sod % 60) as u32;

    let mut year: i32 = 1970;
    loop {
        let diy = if is_leap(year) { 366 } else { 365 };
        if days >= diy {
            days -= diy;
            year += 1;
        } else {
            break;
        }
    }
    let feb = if is_leap(year) { 29 } else { 28 };
    let mdays: [i64; 12] = [31, feb, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let mut month: u32 = 1;
    for &len in mdays.iter() {
        if days >= len {
            days -= len;
            month += 1;
        } else {
            break;
        }
    }
    let day = (days + 1) as u32;

    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")
}

/// Gregorian leap year rule: divisible by 4 and not by 100, unless divisible by 400.
fn is_leap(y: i32) -> bool {
    (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Download counts format with the card suffix rules.
    ///
    /// Inputs:
    /// - Values below, at and above the thousand and million thresholds, plus half-way ties.
    ///
    /// Output:
    /// - `M+`/`K+` suffixes with half-up rounding; small values keep separators.
    fn util_format_downloads_thresholds() {
        assert_eq!(format_downloads(0), "0");
        assert_eq!(format_downloads(980), "980");
        assert_eq!(format_downloads(1_000), "1K+");
        assert_eq!(format_downloads(2_500), "3K+");
        assert_eq!(format_downloads(56_000), "56K+");
        assert_eq!(format_downloads(999_999), "1000K+");
        assert_eq!(format_downloads(1_000_000), "1.0M+");
        assert_eq!(format_downloads(9_000_000), "9.0M+");
        assert_eq!(format_downloads(12_550_000), "12.6M+");
        assert_eq!(format_downloads(1_150_000), "1.1M+");
        assert_eq!(format_downloads(1_450_000), "1.4M+");
        assert_eq!(format_downloads(1_250_000), "1.3M+");
        assert_eq!(format_downloads(1_750_000), "1.8M+");
    }

    #[test]
    /// What: One-decimal formatting rounds the stored binary value and breaks exact ties upward.
    fn util_fixed1_matches_display_rounding() {
        assert_eq!(fixed1(4.5), "4.5");
        assert_eq!(fixed1(4.0), "4.0");
        assert_eq!(fixed1(4.25), "4.3");
        assert_eq!(fixed1(0.75), "0.8");
        assert_eq!(fixed1(1.15), "1.1");
        assert_eq!(fixed1(0.05), "0.1");
    }

    #[test]
    /// What: Thousands separators are placed every three digits from the right.
    fn util_format_thousands() {
        assert_eq!(format_thousands(7), "7");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(185_000), "185,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    /// What: Star breakdown honours the half-star window and always totals five.
    ///
    /// Inputs:
    /// - Ratings at whole numbers, inside and outside the `[0.3, 0.8)` window, and out of range.
    ///
    /// Output:
    /// - Expected `(full, half, empty)` tuples.
    fn util_star_breakdown_half_star_window() {
        assert_eq!(star_breakdown(4.0), (4, 0, 1));
        assert_eq!(star_breakdown(4.5), (4, 1, 0));
        assert_eq!(star_breakdown(3.4), (3, 1, 1));
        assert_eq!(star_breakdown(3.2), (3, 0, 2));
        assert_eq!(star_breakdown(4.9), (4, 0, 1));
        assert_eq!(star_breakdown(5.0), (5, 0, 0));
        assert_eq!(star_breakdown(0.0), (0, 0, 5));
        assert_eq!(star_breakdown(7.0), (5, 0, 0));
        assert_eq!(star_breakdown(f64::NAN), (0, 0, 5));
        for r in [0.1f64, 1.35, 2.79, 3.81, 4.99] {
            let (f, h, e) = star_breakdown(r);
            assert_eq!(f + h + e, 5);
        }
    }

    #[test]
    /// What: Case-insensitive matching with an empty needle matching all.
    fn util_contains_ci() {
        assert!(contains_ci("Notion Notes", "notes"));
        assert!(contains_ci("Anything", ""));
        assert!(!contains_ci("Forest", "tree"));
    }

    #[test]
    /// What: Convert timestamps into UTC date strings, including leap-year handling.
    ///
    /// Inputs:
    /// - `None`, negative, epoch, leap-day and year-boundary timestamps.
    ///
    /// Output:
    /// - Strings reflect empty/default, passthrough, epoch baseline, and leap day formatting.
    fn util_ts_to_date_and_leap() {
        assert_eq!(ts_to_date(None), "");
        assert_eq!(ts_to_date(Some(-1)), "-1");
        assert_eq!(ts_to_date(Some(0)), "1970-01-01 00:00:00");
        assert_eq!(ts_to_date(Some(951_782_400)), "2000-02-29 00:00:00");
        assert_eq!(ts_to_date(Some(946_684_800)), "2000-01-01 00:00:00");
        assert_eq!(ts_to_date(Some(946_684_799)), "1999-12-31 23:59:59");
        assert!(current_year() >= 2024);
    }
}
