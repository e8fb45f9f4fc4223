//! Date and time strings used in log lines and file names.
//!
//! decorated   -> `HH:MM:SS`  `DD/MM/YY`
//! undecorated -> `HHMMSS`    `DDMMYY`

use chrono::{DateTime, Local, TimeZone};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoration {
    Decorated,
    Undecorated,
}

pub fn time_string<Tz: TimeZone>(at: &DateTime<Tz>, decoration: Decoration) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let time = at.format("%H:%M:%S").to_string();
    match decoration {
        Decoration::Decorated => time,
        Decoration::Undecorated => time.replace(':', ""),
    }
}

pub fn date_string<Tz: TimeZone>(at: &DateTime<Tz>, decoration: Decoration) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let date = at.format("%d/%m/%y").to_string();
    match decoration {
        Decoration::Decorated => date,
        Decoration::Undecorated => date.replace('/', ""),
    }
}

pub fn date_and_time_string<Tz: TimeZone>(at: &DateTime<Tz>, decoration: Decoration) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let date = date_string(at, decoration);
    let time = time_string(at, decoration);
    match decoration {
        Decoration::Decorated => format!("{} {}", date, time),
        Decoration::Undecorated => date + &time,
    }
}

/// Current local time, sampled once so date and time always agree.
pub fn now() -> DateTime<Local> {
    Local::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap()
    }

    #[test]
    fn decorated_forms() {
        let at = instant();
        assert_eq!(time_string(&at, Decoration::Decorated), "09:05:02");
        assert_eq!(date_string(&at, Decoration::Decorated), "07/03/24");
        assert_eq!(
            date_and_time_string(&at, Decoration::Decorated),
            "07/03/24 09:05:02"
        );
    }

    #[test]
    fn undecorated_forms() {
        let at = instant();
        assert_eq!(time_string(&at, Decoration::Undecorated), "090502");
        assert_eq!(date_string(&at, Decoration::Undecorated), "070324");
        assert_eq!(
            date_and_time_string(&at, Decoration::Undecorated),
            "070324090502"
        );
    }

    #[test]
    fn stripping_colons_matches_undecorated() {
        let at = now();
        let decorated = time_string(&at, Decoration::Decorated);
        let undecorated = time_string(&at, Decoration::Undecorated);
        assert_eq!(decorated.matches(':').count(), 2);
        assert!(!undecorated.contains(':'));
        assert_eq!(decorated.replace(':', ""), undecorated);
    }

    #[test]
    fn twenty_four_hour_clock() {
        let at = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(
            date_and_time_string(&at, Decoration::Decorated),
            "31/12/99 23:59:59"
        );
    }
}
