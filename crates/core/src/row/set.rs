// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use memkey_type::{Blob, Date, Int96, Result, Value};

use super::Row;

macro_rules! typed_access {
	($( $set:ident / $try_get:ident: $ty:ty => $as:ident, $into:expr; )*) => {
		impl Row {
		$(
			/// Stores the value at `index`, coercing it to the field's type.
			///
			/// # Panics
			///
			/// Panics if `index` is out of range.
			pub fn $set(&mut self, index: usize, value: impl Into<$ty>) -> Result<()> {
				let value: $ty = value.into();
				let value: Result<Value> = $into(value);
				self.set_value(index, Some(value?))
			}

			/// The value at `index` if it is present and the field has that type.
			pub fn $try_get(&self, index: usize) -> Option<$ty> {
				self.field(index).and_then(|v| v.$as())
			}
		)*
		}
	};
}

typed_access! {
	set_bool / try_get_bool: bool => as_bool, |v| Ok(Value::Boolean(v));
	set_i32 / try_get_i32: i32 => as_i32, |v| Ok(Value::Int32(v));
	set_i64 / try_get_i64: i64 => as_i64, |v| Ok(Value::Int64(v));
	set_f32 / try_get_f32: f32 => as_f32, Value::float32;
	set_f64 / try_get_f64: f64 => as_f64, Value::float64;
	set_date / try_get_date: Date => as_date, |v| Ok(Value::Date(v));
	set_int96 / try_get_int96: Int96 => as_int96, |v| Ok(Value::Int96(v));
}

impl Row {
	/// # Panics
	///
	/// Panics if `index` is out of range.
	pub fn set_binary(&mut self, index: usize, value: impl Into<Blob>) -> Result<()> {
		self.set_value(index, Some(Value::Binary(value.into())))
	}

	pub fn try_get_binary(&self, index: usize) -> Option<&Blob> {
		self.field(index).and_then(|v| v.as_binary())
	}

	/// # Panics
	///
	/// Panics if `index` is out of range.
	pub fn set_str(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
		self.set_value(index, Some(Value::String(value.into())))
	}

	pub fn try_get_str(&self, index: usize) -> Option<&str> {
		self.field(index).and_then(|v| v.as_str())
	}
}
