// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	Error, Result,
	value::{Blob, Date, Int96, OrderedF32, OrderedF64, Value, r#type::FieldType},
};

impl FieldType {
	/// Converts `value` into a value of this type.
	///
	/// Numeric sources (including dates, which are epoch days) narrow or widen
	/// to the declared width the way a primitive `as` cast does. Anything else
	/// must already be of this type, with two exceptions: a 12-byte binary
	/// becomes an Int96 and a UTF-8 binary becomes a String.
	pub fn coerce(&self, value: Value) -> Result<Value> {
		match (self, value) {
			(FieldType::Boolean, Value::Boolean(v)) => Ok(Value::Boolean(v)),

			(FieldType::Int32, Value::Int32(v)) => Ok(Value::Int32(v)),
			(FieldType::Int32, Value::Int64(v)) => Ok(Value::Int32(v as i32)),
			(FieldType::Int32, Value::Float32(v)) => Ok(Value::Int32(v.value() as i32)),
			(FieldType::Int32, Value::Float64(v)) => Ok(Value::Int32(v.value() as i32)),
			(FieldType::Int32, Value::Date(v)) => Ok(Value::Int32(v.to_days_since_epoch())),

			(FieldType::Int64, Value::Int32(v)) => Ok(Value::Int64(v as i64)),
			(FieldType::Int64, Value::Int64(v)) => Ok(Value::Int64(v)),
			(FieldType::Int64, Value::Float32(v)) => Ok(Value::Int64(v.value() as i64)),
			(FieldType::Int64, Value::Float64(v)) => Ok(Value::Int64(v.value() as i64)),
			(FieldType::Int64, Value::Date(v)) => Ok(Value::Int64(v.to_days_since_epoch() as i64)),

			(FieldType::Float32, Value::Int32(v)) => float32(v as f32),
			(FieldType::Float32, Value::Int64(v)) => float32(v as f32),
			(FieldType::Float32, Value::Float32(v)) => Ok(Value::Float32(v)),
			(FieldType::Float32, Value::Float64(v)) => float32(v.value() as f32),
			(FieldType::Float32, Value::Date(v)) => float32(v.to_days_since_epoch() as f32),

			(FieldType::Float64, Value::Int32(v)) => float64(v as f64),
			(FieldType::Float64, Value::Int64(v)) => float64(v as f64),
			(FieldType::Float64, Value::Float32(v)) => float64(v.value() as f64),
			(FieldType::Float64, Value::Float64(v)) => Ok(Value::Float64(v)),
			(FieldType::Float64, Value::Date(v)) => float64(v.to_days_since_epoch() as f64),

			(FieldType::Date, Value::Int32(v)) => Ok(Value::Date(Date::from(v))),
			(FieldType::Date, Value::Int64(v)) => Ok(Value::Date(Date::from(v as i32))),
			(FieldType::Date, Value::Float32(v)) => Ok(Value::Date(Date::from(v.value() as i32))),
			(FieldType::Date, Value::Float64(v)) => Ok(Value::Date(Date::from(v.value() as i32))),
			(FieldType::Date, Value::Date(v)) => Ok(Value::Date(v)),

			(FieldType::Binary, Value::Binary(v)) => Ok(Value::Binary(v)),

			(FieldType::Int96, Value::Int96(v)) => Ok(Value::Int96(v)),
			(FieldType::Int96, Value::Binary(v)) => Int96::try_from(v.as_bytes()).map(Value::Int96),

			(FieldType::String, Value::String(v)) => Ok(Value::String(v)),
			(FieldType::String, Value::Binary(v)) => binary_to_string(v),

			(expected, actual) => Err(Error::TypeMismatch {
				expected: *expected,
				actual: actual.field_type().to_string(),
			}),
		}
	}
}

fn float32(v: f32) -> Result<Value> {
	OrderedF32::try_from(v).map(Value::Float32)
}

fn float64(v: f64) -> Result<Value> {
	OrderedF64::try_from(v).map(Value::Float64)
}

fn binary_to_string(blob: Blob) -> Result<Value> {
	match String::from_utf8(blob.into()) {
		Ok(s) => Ok(Value::String(s)),
		Err(_) => Err(Error::TypeMismatch {
			expected: FieldType::String,
			actual: "Binary(invalid UTF-8)".to_string(),
		}),
	}
}
