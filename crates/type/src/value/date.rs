// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A date value representing a calendar date (year, month, day) without time
/// information.
///
/// Internally stored as days since Unix epoch (1970-01-01). Negative values
/// represent dates before 1970.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Date {
	days_since_epoch: i32,
}

impl Default for Date {
	fn default() -> Self {
		Self {
			days_since_epoch: 0,
		} // 1970-01-01
	}
}

// Calendar utilities
impl Date {
	/// Check if a year is a leap year
	#[inline]
	pub fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	/// Get the number of days in a month
	#[inline]
	pub fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	/// Convert year/month/day to days since Unix epoch
	fn ymd_to_days_since_epoch(year: i32, month: u32, day: u32) -> Option<i32> {
		if month < 1 || month > 12 || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}

		// Algorithm based on Howard Hinnant's date algorithms
		let (y, m) = if month <= 2 {
			(year - 1, month as i32 + 9)
		} else {
			(year, month as i32 - 3)
		};

		let era = if y >= 0 {
			y
		} else {
			y - 399
		} / 400;
		let yoe = y - era * 400; // [0, 399]
		let doy = (153 * m + 2) / 5 + day as i32 - 1; // [0, 365]
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]

		// 719468 = days from 0000-03-01 to 1970-01-01
		Some(era * 146097 + doe - 719468)
	}

	/// Convert days since Unix epoch to (year, month, day)
	pub fn civil_from_days(days: i64) -> (i32, u32, u32) {
		let z = days + 719_468;
		let era = if z >= 0 {
			z
		} else {
			z - 146_096
		} / 146_097;
		let doe = z - era * 146_097; // [0, 146096]
		let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
		let y = yoe + era * 400;
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
		let mp = (5 * doy + 2) / 153; // [0, 11]
		let d = (doy - (153 * mp + 2) / 5 + 1) as u32; // [1, 31]
		let m = if mp < 10 {
			mp + 3
		} else {
			mp - 9
		} as u32; // [1, 12]
		let year = if m <= 2 {
			y + 1
		} else {
			y
		} as i32;

		(year, m, d)
	}
}

impl Date {
	/// Build a date from a calendar triple; `None` when out of range.
	pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
		Self::ymd_to_days_since_epoch(year, month, day).map(|days_since_epoch| Self {
			days_since_epoch,
		})
	}

	pub fn from_days(days_since_epoch: i32) -> Self {
		Self {
			days_since_epoch,
		}
	}

	pub fn to_days(&self) -> i32 {
		self.days_since_epoch
	}

	pub fn year(&self) -> i32 {
		Self::civil_from_days(self.days_since_epoch as i64).0
	}

	pub fn month(&self) -> u32 {
		Self::civil_from_days(self.days_since_epoch as i64).1
	}

	pub fn day(&self) -> u32 {
		Self::civil_from_days(self.days_since_epoch as i64).2
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let (year, month, day) = Self::civil_from_days(self.days_since_epoch as i64);
		write!(f, "{:04}-{:02}-{:02}", year, month, day)
	}
}
