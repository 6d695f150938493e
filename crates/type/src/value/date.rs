// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

/// A calendar date without time information.
///
/// Stored as days since the Unix epoch (1970-01-01). Every `i32` is a valid
/// date, so the day count can be read back from a key without validation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
	// negative values are dates before 1970
	days_since_epoch: i32,
}

impl Date {
	#[inline]
	fn is_leap_year(year: i64) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	#[inline]
	fn days_in_month(year: i64, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 if Self::is_leap_year(year) => 29,
			2 => 28,
			_ => 0,
		}
	}

	// Howard Hinnant's days_from_civil, in i64 so the whole i32 day range works
	fn ymd_to_days(year: i64, month: u32, day: u32) -> i64 {
		let (y, m) = if month <= 2 {
			(year - 1, month as i64 + 9)
		} else {
			(year, month as i64 - 3)
		};
		let era = y.div_euclid(400);
		let yoe = y - era * 400;
		let doy = (153 * m + 2) / 5 + day as i64 - 1;
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
		era * 146097 + doe - 719468
	}

	fn days_to_ymd(days: i64) -> (i32, u32, u32) {
		let z = days + 719468;
		let era = z.div_euclid(146097);
		let doe = z - era * 146097;
		let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
		let mp = (5 * doy + 2) / 153;
		let d = doy - (153 * mp + 2) / 5 + 1;
		let m = if mp < 10 {
			mp + 3
		} else {
			mp - 9
		};
		let y = yoe + era * 400 + i64::from(m <= 2);
		(y as i32, m as u32, d as u32)
	}
}

impl Date {
	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		let year = year as i64;
		if !(1..=12).contains(&month) || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}
		let days = Self::ymd_to_days(year, month, day);
		i32::try_from(days).ok().map(Self::from_days_since_epoch)
	}

	pub const fn from_days_since_epoch(days_since_epoch: i32) -> Self {
		Self {
			days_since_epoch,
		}
	}

	pub const fn to_days_since_epoch(&self) -> i32 {
		self.days_since_epoch
	}

	pub fn to_ymd(&self) -> (i32, u32, u32) {
		Self::days_to_ymd(self.days_since_epoch as i64)
	}

	pub fn year(&self) -> i32 {
		self.to_ymd().0
	}

	pub fn month(&self) -> u32 {
		self.to_ymd().1
	}

	pub fn day(&self) -> u32 {
		self.to_ymd().2
	}
}

impl From<i32> for Date {
	fn from(days_since_epoch: i32) -> Self {
		Self::from_days_since_epoch(days_since_epoch)
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (year, month, day) = self.to_ymd();
		if year < 0 {
			write!(f, "-{:04}-{:02}-{:02}", -(year as i64), month, day)
		} else {
			write!(f, "{:04}-{:02}-{:02}", year, month, day)
		}
	}
}

impl Serialize for Date {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_string())
	}
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
	type Value = Date;

	fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
		formatter.write_str("a date in ISO 8601 format (YYYY-MM-DD)")
	}

	fn visit_str<E: de::Error>(self, value: &str) -> Result<Date, E> {
		let (negative, rest) = match value.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, value),
		};

		let mut parts = rest.splitn(3, '-');
		let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
			return Err(E::custom(format!("invalid date format: {value}")));
		};

		let year = year.parse::<i32>().map_err(|_| E::custom(format!("invalid year: {year}")))?;
		let month = month.parse::<u32>().map_err(|_| E::custom(format!("invalid month: {month}")))?;
		let day = day.parse::<u32>().map_err(|_| E::custom(format!("invalid day: {day}")))?;
		let year = if negative {
			-year
		} else {
			year
		};

		Date::new(year, month, day).ok_or_else(|| E::custom(format!("invalid date: {value}")))
	}
}

impl<'de> Deserialize<'de> for Date {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_str(DateVisitor)
	}
}
