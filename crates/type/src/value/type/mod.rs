// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::value::{TypedValue, Value};

mod coerce;

/// All supported field types
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldType {
	/// A boolean: true or false.
	Boolean,
	/// A 4-byte signed integer
	Int32,
	/// An 8-byte signed integer
	Int64,
	/// A 4-byte floating point
	Float32,
	/// An 8-byte floating point
	Float64,
	/// A calendar date, stored as 4-byte days since the Unix epoch
	Date,
	/// A variable-length byte string
	Binary,
	/// A 12-byte opaque binary
	Int96,
	/// A variable-length UTF-8 string
	String,
}

impl FieldType {
	pub const ALL: [FieldType; 9] = [
		FieldType::Boolean,
		FieldType::Int32,
		FieldType::Int64,
		FieldType::Float32,
		FieldType::Float64,
		FieldType::Date,
		FieldType::Binary,
		FieldType::Int96,
		FieldType::String,
	];

	/// Width in bytes of the key encoding, `None` for variable-length types.
	pub const fn fixed_byte_width(&self) -> Option<u32> {
		match self {
			FieldType::Boolean => Some(1),
			FieldType::Int32 | FieldType::Float32 | FieldType::Date => Some(4),
			FieldType::Int64 | FieldType::Float64 => Some(8),
			FieldType::Int96 => Some(12),
			FieldType::Binary | FieldType::String => None,
		}
	}

	pub const fn is_fixed_width(&self) -> bool {
		self.fixed_byte_width().is_some()
	}

	pub fn is_padded(&self) -> bool {
		matches!(self, FieldType::Binary | FieldType::String)
	}

	/// A null value of this type.
	pub fn allocate(&self) -> TypedValue {
		TypedValue::null(*self)
	}

	/// Total order of two nullable values of this type. Null sorts after
	/// every present value.
	pub fn compare(&self, l: Option<&Value>, r: Option<&Value>) -> Ordering {
		debug_assert!(l.is_none_or(|v| v.field_type() == *self));
		debug_assert!(r.is_none_or(|v| v.field_type() == *self));
		match (l, r) {
			(None, None) => Ordering::Equal,
			(None, Some(_)) => Ordering::Greater,
			(Some(_), None) => Ordering::Less,
			(Some(l), Some(r)) => l.cmp(r),
		}
	}
}

impl Display for FieldType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			FieldType::Boolean => f.write_str("Boolean"),
			FieldType::Int32 => f.write_str("Int32"),
			FieldType::Int64 => f.write_str("Int64"),
			FieldType::Float32 => f.write_str("Float32"),
			FieldType::Float64 => f.write_str("Float64"),
			FieldType::Date => f.write_str("Date"),
			FieldType::Binary => f.write_str("Binary"),
			FieldType::Int96 => f.write_str("Int96"),
			FieldType::String => f.write_str("String"),
		}
	}
}

impl FromStr for FieldType {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_uppercase().as_str() {
			"BOOLEAN" | "BOOL" => Ok(FieldType::Boolean),
			"INT32" | "INTEGER" | "INT" => Ok(FieldType::Int32),
			"INT64" | "LONG" | "BIGINT" => Ok(FieldType::Int64),
			"FLOAT32" | "FLOAT" => Ok(FieldType::Float32),
			"FLOAT64" | "DOUBLE" => Ok(FieldType::Float64),
			"DATE" => Ok(FieldType::Date),
			"BINARY" | "BLOB" => Ok(FieldType::Binary),
			"INT96" => Ok(FieldType::Int96),
			"STRING" | "UTF8" | "TEXT" => Ok(FieldType::String),
			_ => Err(()),
		}
	}
}
