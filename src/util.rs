// Display formatting helpers shared by every panel.

/// Abbreviate with B/M/K suffixes, truncating (not rounding) at each step.
/// Anything non-finite or negative renders as 0.
pub fn format_number(num: f64) -> String {
    let n = if num.is_finite() && num > 0.0 { num } else { 0.0 };
    if n >= 1_000_000_000.0 {
        format!("{}B", (n / 1_000_000_000.0).floor() as u64)
    } else if n >= 1_000_000.0 {
        format!("{}M", (n / 1_000_000.0).floor() as u64)
    } else if n >= 1_000.0 {
        format!("{}K", (n / 1_000.0).floor() as u64)
    } else {
        format!("{}", n.floor() as u64)
    }
}

/// Fixed 8-decimal rendering for per-second rates and live payouts.
pub fn format_number_precise(num: f64) -> String {
    let n = if num.is_finite() { num.max(0.0) } else { 0.0 };
    format!("{:.8}", n)
}

/// `HH:MM:SS` once an hour is on the clock, `MM:SS` below that.
pub fn format_time(secs: u64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{:02}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_truncates() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(999.9), "999");
        assert_eq!(format_number(1_500.0), "1K");
        assert_eq!(format_number(2_500_000.0), "2M");
        assert_eq!(format_number(3_999_999_999.0), "3B");
    }

    #[test]
    fn test_format_number_coerces_garbage() {
        assert_eq!(format_number(f64::NAN), "0");
        assert_eq!(format_number(f64::NEG_INFINITY), "0");
        assert_eq!(format_number(-42.0), "0");
    }

    #[test]
    fn test_format_number_precise() {
        assert_eq!(format_number_precise(0.001), "0.00100000");
        assert_eq!(format_number_precise(0.0), "0.00000000");
        assert_eq!(format_number_precise(f64::NAN), "0.00000000");
        assert_eq!(format_number_precise(1.23456789), "1.23456789");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(3661), "01:01:01");
        assert_eq!(format_time(86_400), "24:00:00");
    }
}
