// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

use crate::{
	Error, Result,
	value::{Blob, Date, FieldType, Int96, Value},
};

/// A nullable value tagged with the type of the field it belongs to.
///
/// The payload, when present, always has the variant of `field_type`.
/// Equality and hashing combine the type tag and the payload. Ordering
/// compares the type tag first and then the payload with nulls last.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTypedValue")]
pub struct TypedValue {
	field_type: FieldType,
	value: Option<Value>,
}

#[derive(Deserialize)]
struct RawTypedValue {
	field_type: FieldType,
	value: Option<Value>,
}

impl TryFrom<RawTypedValue> for TypedValue {
	type Error = Error;

	fn try_from(raw: RawTypedValue) -> Result<Self> {
		TypedValue::new(raw.field_type, raw.value)
	}
}

impl TypedValue {
	pub const fn null(field_type: FieldType) -> Self {
		Self {
			field_type,
			value: None,
		}
	}

	/// Creates a value of `field_type`, converting `value` as
	/// [`FieldType::coerce`] does.
	pub fn new(field_type: FieldType, value: Option<Value>) -> Result<Self> {
		let mut result = Self::null(field_type);
		result.set_value(value)?;
		Ok(result)
	}

	pub fn field_type(&self) -> FieldType {
		self.field_type
	}

	pub fn value(&self) -> Option<&Value> {
		self.value.as_ref()
	}

	pub fn into_value(self) -> Option<Value> {
		self.value
	}

	pub fn is_null(&self) -> bool {
		self.value.is_none()
	}

	/// Stores `value` converted to this field's type, or clears to null.
	/// On error the previous value is kept.
	pub fn set_value(&mut self, value: Option<Value>) -> Result<()> {
		self.value = match value {
			Some(value) => Some(self.field_type.coerce(value)?),
			None => None,
		};
		Ok(())
	}

	pub fn set(&mut self, value: impl Into<Value>) -> Result<()> {
		self.set_value(Some(value.into()))
	}

	pub fn set_null(&mut self) {
		self.value = None;
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self.value {
			Some(Value::Boolean(v)) => Some(v),
			_ => None,
		}
	}

	pub fn as_i32(&self) -> Option<i32> {
		match self.value {
			Some(Value::Int32(v)) => Some(v),
			_ => None,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self.value {
			Some(Value::Int64(v)) => Some(v),
			_ => None,
		}
	}

	pub fn as_f32(&self) -> Option<f32> {
		match self.value {
			Some(Value::Float32(v)) => Some(v.value()),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self.value {
			Some(Value::Float64(v)) => Some(v.value()),
			_ => None,
		}
	}

	pub fn as_date(&self) -> Option<Date> {
		match self.value {
			Some(Value::Date(v)) => Some(v),
			_ => None,
		}
	}

	pub fn as_binary(&self) -> Option<&Blob> {
		match &self.value {
			Some(Value::Binary(v)) => Some(v),
			_ => None,
		}
	}

	pub fn as_int96(&self) -> Option<Int96> {
		match self.value {
			Some(Value::Int96(v)) => Some(v),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match &self.value {
			Some(Value::String(v)) => Some(v),
			_ => None,
		}
	}
}

impl PartialOrd for TypedValue {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for TypedValue {
	fn cmp(&self, other: &Self) -> Ordering {
		self.field_type
			.cmp(&other.field_type)
			.then_with(|| self.field_type.compare(self.value(), other.value()))
	}
}

impl Display for TypedValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.value {
			Some(value) => Display::fmt(value, f),
			None => f.write_str("null"),
		}
	}
}
