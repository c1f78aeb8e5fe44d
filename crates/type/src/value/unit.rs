// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::{date::Date, datetime::DateTime, timezone::Timezone};

/// The calendar units `date_diff` can measure in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateUnit {
	Year,
	Quarter,
	Month,
	Week,
	Day,
	Hour,
	Minute,
	Second,
}

impl DateUnit {
	/// Exact-match alias lookup, case-insensitive. No fuzzy parsing.
	pub fn parse(name: &str) -> Option<Self> {
		match name.to_ascii_lowercase().as_str() {
			"year" | "yy" | "yyyy" => Some(DateUnit::Year),
			"quarter" | "qq" | "q" => Some(DateUnit::Quarter),
			"month" | "mm" | "m" => Some(DateUnit::Month),
			"week" | "wk" | "ww" => Some(DateUnit::Week),
			"day" | "dd" | "d" => Some(DateUnit::Day),
			"hour" | "hh" => Some(DateUnit::Hour),
			"minute" | "mi" | "n" => Some(DateUnit::Minute),
			"second" | "ss" | "s" => Some(DateUnit::Second),
			_ => None,
		}
	}
}

impl Display for DateUnit {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let name = match self {
			DateUnit::Year => "year",
			DateUnit::Quarter => "quarter",
			DateUnit::Month => "month",
			DateUnit::Week => "week",
			DateUnit::Day => "day",
			DateUnit::Hour => "hour",
			DateUnit::Minute => "minute",
			DateUnit::Second => "second",
		};
		write!(f, "{}", name)
	}
}

/// Maps a temporal value to a monotone "relative unit count since epoch" in
/// the given timezone, so that `b - a` in the same unit is the unit distance
/// between the two values.
pub trait RelativeUnit: Copy {
	fn relative(self, unit: DateUnit, timezone: Timezone) -> i64;
}

// Weeks start on Monday; 1970-01-01 was a Thursday, so the Monday of the
// epoch week is day -3.
fn relative_from_local_days(unit: DateUnit, local_days: i64) -> i64 {
	match unit {
		DateUnit::Second => local_days * 86_400,
		DateUnit::Minute => local_days * 1_440,
		DateUnit::Hour => local_days * 24,
		DateUnit::Day => local_days,
		DateUnit::Week => (local_days + 3).div_euclid(7),
		DateUnit::Month | DateUnit::Quarter | DateUnit::Year => {
			let (year, month, _) = Date::civil_from_days(local_days);
			match unit {
				DateUnit::Month => year as i64 * 12 + (month as i64 - 1),
				DateUnit::Quarter => year as i64 * 4 + (month as i64 - 1) / 3,
				_ => year as i64,
			}
		}
	}
}

impl RelativeUnit for Date {
	// A date is a calendar date; the timezone does not shift it.
	fn relative(self, unit: DateUnit, _timezone: Timezone) -> i64 {
		relative_from_local_days(unit, self.to_days() as i64)
	}
}

impl RelativeUnit for DateTime {
	fn relative(self, unit: DateUnit, timezone: Timezone) -> i64 {
		let local = self.to_seconds() + timezone.offset_seconds() as i64;
		match unit {
			DateUnit::Second => local,
			DateUnit::Minute => local.div_euclid(60),
			DateUnit::Hour => local.div_euclid(3_600),
			_ => relative_from_local_days(unit, local.div_euclid(86_400)),
		}
	}
}
