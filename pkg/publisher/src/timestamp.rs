use chrono::{Local, NaiveDateTime};
use pkg_constants::map::LAST_UPDATE_FORMAT;

/// Format a wall-clock time as `MM/DD/YYYY, HH:MM:SS AM|PM`.
///
/// `HH` is the 24-hour clock; the marker is appended as-is, so an evening
/// update reads `18:39:33 PM`.
pub fn format_last_update(time: &NaiveDateTime) -> String {
    time.format(LAST_UPDATE_FORMAT).to_string()
}

/// The current local time in last-update format.
pub fn now_local() -> String {
    format_last_update(&Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    /// `MM/DD/YYYY, HH:MM:SS (AM|PM)` with every field zero-padded.
    fn matches_pattern(s: &str) -> bool {
        let b = s.as_bytes();
        if b.len() != 23 {
            return false;
        }
        let digits = [0, 1, 3, 4, 6, 7, 8, 9, 12, 13, 15, 16, 18, 19];
        digits.iter().all(|&i| b[i].is_ascii_digit())
            && b[2] == b'/'
            && b[5] == b'/'
            && &s[10..12] == ", "
            && b[14] == b':'
            && b[17] == b':'
            && b[20] == b' '
            && (&s[21..] == "AM" || &s[21..] == "PM")
    }

    #[test]
    fn evening_keeps_24_hour_clock() {
        assert_eq!(
            format_last_update(&at(2020, 3, 21, 18, 39, 33)),
            "03/21/2020, 18:39:33 PM"
        );
    }

    #[test]
    fn fields_are_zero_padded() {
        assert_eq!(
            format_last_update(&at(2021, 1, 2, 3, 4, 5)),
            "01/02/2021, 03:04:05 AM"
        );
    }

    #[test]
    fn midnight_and_noon() {
        assert_eq!(
            format_last_update(&at(2020, 12, 31, 0, 0, 0)),
            "12/31/2020, 00:00:00 AM"
        );
        assert_eq!(
            format_last_update(&at(2020, 6, 15, 12, 0, 0)),
            "06/15/2020, 12:00:00 PM"
        );
    }

    #[test]
    fn every_hour_matches_pattern() {
        for h in 0..24 {
            let s = format_last_update(&at(2020, 4, 9, h, 59, 7));
            assert!(matches_pattern(&s), "bad timestamp: {}", s);
        }
        assert!(matches_pattern(&now_local()));
    }
}
