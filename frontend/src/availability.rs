//! "Spots left this month" indicator shown in the limited-spots section.
//!
//! The number is derived from the calendar alone: the further into the month,
//! the fewer spots are advertised.

use chrono::{Datelike, Local, NaiveDate};

/// Number of new projects taken on per month.
pub const MONTHLY_CAPACITY: u8 = 5;

/// Source of "today". Injected so the calculation can be pinned in tests.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the browser's local date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Availability {
    pub spots_left: u8,
    pub month: &'static str,
}

impl Availability {
    pub fn on(date: NaiveDate) -> Self {
        Self {
            spots_left: spots_for_day(date.day()),
            month: month_name_sv(date.month()),
        }
    }

    pub fn now(clock: &impl Clock) -> Self {
        Self::on(clock.today())
    }

    pub fn tone(&self) -> SpotsTone {
        SpotsTone::for_spots(self.spots_left)
    }
}

/// Bands are inclusive on their upper bound: 1-5, 6-10, 11-20, 21-end.
pub fn spots_for_day(day: u32) -> u8 {
    match day {
        0..=5 => 5,
        6..=10 => 4,
        11..=20 => 3,
        _ => 2,
    }
}

pub fn month_name_sv(month: u32) -> &'static str {
    match month {
        1 => "januari",
        2 => "februari",
        3 => "mars",
        4 => "april",
        5 => "maj",
        6 => "juni",
        7 => "juli",
        8 => "augusti",
        9 => "september",
        10 => "oktober",
        11 => "november",
        _ => "december",
    }
}

/// Colour treatment of the spots counter, from relaxed green to urgent orange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpotsTone {
    Plenty,
    Good,
    Few,
    Last,
}

impl SpotsTone {
    pub fn for_spots(spots_left: u8) -> Self {
        match spots_left {
            5 => SpotsTone::Plenty,
            4 => SpotsTone::Good,
            3 => SpotsTone::Few,
            _ => SpotsTone::Last,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            SpotsTone::Plenty => "spots-plenty",
            SpotsTone::Good => "spots-good",
            SpotsTone::Few => "spots-few",
            SpotsTone::Last => "spots-last",
        }
    }

    /// Glow colour used for the neon drop shadow.
    pub fn glow(self) -> &'static str {
        match self {
            SpotsTone::Plenty => "#22c55e",
            SpotsTone::Good => "#84cc16",
            SpotsTone::Few => "#facc15",
            SpotsTone::Last => "#f97316",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bands_map_to_expected_spots() {
        for day in 1..=5 {
            assert_eq!(spots_for_day(day), 5, "day {day}");
        }
        for day in 6..=10 {
            assert_eq!(spots_for_day(day), 4, "day {day}");
        }
        for day in 11..=20 {
            assert_eq!(spots_for_day(day), 3, "day {day}");
        }
        for day in 21..=31 {
            assert_eq!(spots_for_day(day), 2, "day {day}");
        }
    }

    #[test]
    fn spots_never_increase_within_a_month() {
        let spots: Vec<u8> = (1..=31).map(spots_for_day).collect();
        assert!(spots.windows(2).all(|pair| pair[0] >= pair[1]));
        assert!(spots.iter().all(|s| (2..=MONTHLY_CAPACITY).contains(s)));
    }

    #[test]
    fn fixed_clock_drives_availability() {
        let clock = FixedClock(date(2025, 3, 10));
        let availability = Availability::now(&clock);
        assert_eq!(availability.spots_left, 4);
        assert_eq!(availability.month, "mars");

        let last_day = Availability::on(date(2025, 12, 31));
        assert_eq!(last_day.spots_left, 2);
        assert_eq!(last_day.month, "december");
    }

    #[test]
    fn tone_follows_spots() {
        assert_eq!(Availability::on(date(2025, 1, 1)).tone(), SpotsTone::Plenty);
        assert_eq!(Availability::on(date(2025, 1, 15)).tone(), SpotsTone::Few);
        assert_eq!(SpotsTone::for_spots(2).class(), "spots-last");
        assert_eq!(SpotsTone::for_spots(4).glow(), "#84cc16");
    }
}
