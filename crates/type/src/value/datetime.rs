// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::date::Date;

/// A point in time with second precision.
///
/// Internally stored as seconds since Unix epoch (1970-01-01 00:00:00 UTC).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateTime {
	seconds_since_epoch: i64,
}

impl Default for DateTime {
	fn default() -> Self {
		Self {
			seconds_since_epoch: 0,
		} // 1970-01-01 00:00:00
	}
}

impl DateTime {
	pub fn from_seconds(seconds_since_epoch: i64) -> Self {
		Self {
			seconds_since_epoch,
		}
	}

	/// Midnight UTC of the given date.
	pub fn from_date(date: Date) -> Self {
		Self {
			seconds_since_epoch: date.to_days() as i64 * 86_400,
		}
	}

	pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
		if hour > 23 || minute > 59 || second > 59 {
			return None;
		}
		let date = Date::from_ymd(year, month, day)?;
		Some(Self {
			seconds_since_epoch: date.to_days() as i64 * 86_400
				+ hour as i64 * 3_600 + minute as i64 * 60
				+ second as i64,
		})
	}

	pub fn to_seconds(&self) -> i64 {
		self.seconds_since_epoch
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let days = self.seconds_since_epoch.div_euclid(86_400);
		let secs = self.seconds_since_epoch.rem_euclid(86_400);
		let (year, month, day) = Date::civil_from_days(days);
		write!(
			f,
			"{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
			year,
			month,
			day,
			secs / 3_600,
			(secs / 60) % 60,
			secs % 60
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_epoch() {
		assert_eq!(DateTime::default().to_string(), "1970-01-01 00:00:00");
	}

	#[test]
	fn test_from_ymd_hms() {
		let dt = DateTime::from_ymd_hms(2024, 6, 15, 13, 37, 42).unwrap();
		assert_eq!(dt.to_string(), "2024-06-15 13:37:42");
	}

	#[test]
	fn test_before_epoch() {
		let dt = DateTime::from_seconds(-1);
		assert_eq!(dt.to_string(), "1969-12-31 23:59:59");
	}

	#[test]
	fn test_from_date() {
		let date = Date::from_ymd(2000, 1, 1).unwrap();
		let dt = DateTime::from_date(date);
		assert_eq!(dt.to_seconds(), date.to_days() as i64 * 86_400);
	}
}
