// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A fixed-offset timezone.
///
/// Only fixed offsets are modeled; named zones with daylight-saving rules are
/// outside the engine and would plug in behind the same relative-unit
/// arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timezone {
	offset_seconds: i32,
}

impl Default for Timezone {
	fn default() -> Self {
		Self::utc()
	}
}

impl Timezone {
	pub const fn utc() -> Self {
		Self {
			offset_seconds: 0,
		}
	}

	pub const fn fixed_offset(offset_seconds: i32) -> Self {
		Self {
			offset_seconds,
		}
	}

	pub fn offset_seconds(&self) -> i32 {
		self.offset_seconds
	}

	/// Parse `"UTC"`, `"Z"` or a fixed offset of the form `"+HH:MM"`,
	/// `"-HH:MM"` or `"+HH"`.
	pub fn parse(name: &str) -> Result<Self, TypeError> {
		if name.eq_ignore_ascii_case("utc") || name == "Z" {
			return Ok(Self::utc());
		}

		let unknown = || TypeError::UnknownTimezone {
			name: name.to_string(),
		};

		let (sign, rest) = match name.as_bytes().first() {
			Some(b'+') => (1i32, &name[1..]),
			Some(b'-') => (-1i32, &name[1..]),
			_ => return Err(unknown()),
		};

		let (hours, minutes) = match rest.split_once(':') {
			Some((h, m)) => {
				(h.parse::<i32>().map_err(|_| unknown())?, m.parse::<i32>().map_err(|_| unknown())?)
			}
			None => (rest.parse::<i32>().map_err(|_| unknown())?, 0),
		};

		if hours > 14 || minutes > 59 {
			return Err(unknown());
		}

		Ok(Self::fixed_offset(sign * (hours * 3_600 + minutes * 60)))
	}
}

impl Display for Timezone {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.offset_seconds == 0 {
			return write!(f, "UTC");
		}
		let sign = if self.offset_seconds < 0 {
			'-'
		} else {
			'+'
		};
		let abs = self.offset_seconds.abs();
		write!(f, "{}{:02}:{:02}", sign, abs / 3_600, (abs / 60) % 60)
	}
}
