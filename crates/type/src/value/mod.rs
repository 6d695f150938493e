// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::Result;

pub mod blob;
pub mod date;
pub mod int96;
mod ordered_f32;
mod ordered_f64;
pub mod r#type;
mod typed;

pub use blob::Blob;
pub use date::Date;
pub use int96::Int96;
pub use ordered_f32::OrderedF32;
pub use ordered_f64::OrderedF64;
pub use r#type::FieldType;
pub use typed::TypedValue;

/// A present field value, represented as a native Rust type.
///
/// The derived ordering is only meaningful between values of the same variant;
/// across variants it falls back to declaration order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
	Boolean(bool),
	Int32(i32),
	Int64(i64),
	Float32(OrderedF32),
	Float64(OrderedF64),
	Date(Date),
	Binary(Blob),
	Int96(Int96),
	String(String),
}

impl Value {
	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn int32(v: impl Into<i32>) -> Self {
		Value::Int32(v.into())
	}

	pub fn int64(v: impl Into<i64>) -> Self {
		Value::Int64(v.into())
	}

	pub fn float32(v: f32) -> Result<Self> {
		OrderedF32::try_from(v).map(Value::Float32)
	}

	pub fn float64(v: f64) -> Result<Self> {
		OrderedF64::try_from(v).map(Value::Float64)
	}

	pub fn date(v: impl Into<Date>) -> Self {
		Value::Date(v.into())
	}

	pub fn binary(v: impl Into<Vec<u8>>) -> Self {
		Value::Binary(Blob::new(v))
	}

	pub fn int96(v: impl Into<Int96>) -> Self {
		Value::Int96(v.into())
	}

	pub fn string(v: impl Into<String>) -> Self {
		Value::String(v.into())
	}

	pub fn field_type(&self) -> FieldType {
		match self {
			Value::Boolean(_) => FieldType::Boolean,
			Value::Int32(_) => FieldType::Int32,
			Value::Int64(_) => FieldType::Int64,
			Value::Float32(_) => FieldType::Float32,
			Value::Float64(_) => FieldType::Float64,
			Value::Date(_) => FieldType::Date,
			Value::Binary(_) => FieldType::Binary,
			Value::Int96(_) => FieldType::Int96,
			Value::String(_) => FieldType::String,
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int32(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int64(v)
	}
}

impl From<OrderedF32> for Value {
	fn from(v: OrderedF32) -> Self {
		Value::Float32(v)
	}
}

impl From<OrderedF64> for Value {
	fn from(v: OrderedF64) -> Self {
		Value::Float64(v)
	}
}

impl From<Date> for Value {
	fn from(v: Date) -> Self {
		Value::Date(v)
	}
}

impl From<Blob> for Value {
	fn from(v: Blob) -> Self {
		Value::Binary(v)
	}
}

impl From<Int96> for Value {
	fn from(v: Int96) -> Self {
		Value::Int96(v)
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::String(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::String(v.to_string())
	}
}

impl TryFrom<f32> for Value {
	type Error = crate::Error;

	fn try_from(v: f32) -> Result<Self> {
		Value::float32(v)
	}
}

impl TryFrom<f64> for Value {
	type Error = crate::Error;

	fn try_from(v: f64) -> Result<Self> {
		Value::float64(v)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Boolean(v) => Display::fmt(v, f),
			Value::Int32(v) => Display::fmt(v, f),
			Value::Int64(v) => Display::fmt(v, f),
			Value::Float32(v) => Display::fmt(v, f),
			Value::Float64(v) => Display::fmt(v, f),
			Value::Date(v) => Display::fmt(v, f),
			Value::Binary(v) => Display::fmt(v, f),
			Value::Int96(v) => Display::fmt(v, f),
			Value::String(v) => f.write_str(v),
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::Error;

	#[test]
	fn test_field_type_matches_variant() {
		assert_eq!(Value::bool(true).field_type(), FieldType::Boolean);
		assert_eq!(Value::int32(1).field_type(), FieldType::Int32);
		assert_eq!(Value::int64(1i64).field_type(), FieldType::Int64);
		assert_eq!(Value::float32(1.0).unwrap().field_type(), FieldType::Float32);
		assert_eq!(Value::float64(1.0).unwrap().field_type(), FieldType::Float64);
		assert_eq!(Value::date(0).field_type(), FieldType::Date);
		assert_eq!(Value::binary(vec![1u8]).field_type(), FieldType::Binary);
		assert_eq!(Value::int96([0u8; 12]).field_type(), FieldType::Int96);
		assert_eq!(Value::string("a").field_type(), FieldType::String);
	}

	#[test]
	fn test_float_constructors_reject_nan() {
		assert_eq!(Value::float32(f32::NAN), Err(Error::InvalidFloat));
		assert_eq!(Value::try_from(f64::NAN), Err(Error::InvalidFloat));
	}

	#[test]
	fn test_ordering_within_variant() {
		assert!(Value::int32(-5) < Value::int32(0));
		assert!(Value::float64(-0.5).unwrap() < Value::float64(0.0).unwrap());
		assert!(Value::string("ab") < Value::string("abc"));
		assert!(Value::bool(false) < Value::bool(true));
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::int64(-42i64).to_string(), "-42");
		assert_eq!(Value::float64(1.5).unwrap().to_string(), "1.5");
		assert_eq!(Value::string("abc").to_string(), "abc");
		assert_eq!(Value::binary(vec![0x0a, 0xff]).to_string(), "0x0aff");
	}
}
