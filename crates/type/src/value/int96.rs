// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Error, value::r#type::FieldType};

/// A legacy 12-byte timestamp kept as opaque bytes.
///
/// Ordering is unsigned lexicographic over the raw bytes, which is also the
/// order of its key encoding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Int96([u8; Int96::SIZE]);

impl Int96 {
	pub const SIZE: usize = 12;

	pub const fn new(bytes: [u8; Self::SIZE]) -> Self {
		Self(bytes)
	}

	/// Nanoseconds of the day in the first 8 bytes, day number in the last 4,
	/// both little-endian, as written by columnar file writers.
	pub fn from_parts(nanos_of_day: i64, julian_day: i32) -> Self {
		let mut bytes = [0u8; Self::SIZE];
		bytes[..8].copy_from_slice(&nanos_of_day.to_le_bytes());
		bytes[8..].copy_from_slice(&julian_day.to_le_bytes());
		Self(bytes)
	}

	pub fn as_bytes(&self) -> &[u8; Self::SIZE] {
		&self.0
	}
}

impl From<[u8; Int96::SIZE]> for Int96 {
	fn from(bytes: [u8; Int96::SIZE]) -> Self {
		Self(bytes)
	}
}

impl TryFrom<&[u8]> for Int96 {
	type Error = Error;

	fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
		let bytes: [u8; Self::SIZE] = bytes.try_into().map_err(|_| Error::TypeMismatch {
			expected: FieldType::Int96,
			actual: format!("Binary({} bytes)", bytes.len()),
		})?;
		Ok(Self(bytes))
	}
}

impl Display for Int96 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		for byte in self.0 {
			write!(f, "{byte:02x}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_from_parts() {
		let value = Int96::from_parts(1, 2_440_588);
		assert_eq!(value.to_string(), "01000000000000008c3d2500");
	}

	#[test]
	fn test_try_from_wrong_length() {
		let result = Int96::try_from([1u8, 2, 3].as_slice());
		assert!(matches!(result, Err(Error::TypeMismatch { .. })));
	}

	#[test]
	fn test_ordering_is_bytewise() {
		let low = Int96::new([0x01; 12]);
		let high = Int96::new([0xff, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
		assert!(low < high);
	}
}
