// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Keycode is a lexicographical order-preserving binary encoding for single
//! field values. Comparing two encodings of the same field type with `memcmp`
//! gives the same result as comparing the typed values.
//!
//! Every encoding has a width known up front, so row keys are a plain
//! concatenation of field encodings with no separators or terminators.
//!
//! * [`FieldType::Boolean`]: `0x01` for `false`, `0x02` for `true`.
//! * [`FieldType::Int32`], [`FieldType::Int64`]: big-endian, sign bit flipped.
//! * [`FieldType::Date`]: days since epoch, encoded like `Int32`.
//! * [`FieldType::Float32`], [`FieldType::Float64`]: big-endian, all bits
//!   flipped if negative, otherwise only the sign bit set.
//! * [`FieldType::Int96`]: the 12 raw bytes.
//! * [`FieldType::String`], [`FieldType::Binary`]: raw bytes right-padded with
//!   `0x00` to a declared width. Values may not end in `0x00`, since the
//!   padding could not be told apart from the value.
//!
//! The encoding is not self-describing: the caller must know the field type
//! and width to decode.

mod deserialize;
mod serialize;

pub use deserialize::{decode_bool, decode_f32, decode_f64, decode_i32, decode_i64, decode_padded};
pub use serialize::{encode_bool, encode_f32, encode_f64, encode_i32, encode_i64, encode_padded};

use memkey_type::{Blob, Date, Error, FieldType, Int96, OrderedF32, OrderedF64, Result, Value};

use memkey_type::malformed;

/// Appends the encoding of `value` to `output`.
///
/// `width` is the declared width of the field. It must equal the fixed width
/// for fixed-width types and is the pad width for `String` and `Binary`.
pub fn encode_into(field_type: FieldType, value: &Value, width: u32, output: &mut Vec<u8>) -> Result<()> {
	match (field_type, value) {
		(FieldType::Boolean, Value::Boolean(v)) => output.extend_from_slice(&encode_bool(*v)),
		(FieldType::Int32, Value::Int32(v)) => output.extend_from_slice(&encode_i32(*v)),
		(FieldType::Int64, Value::Int64(v)) => output.extend_from_slice(&encode_i64(*v)),
		(FieldType::Float32, Value::Float32(v)) => output.extend_from_slice(&encode_f32(v.value())),
		(FieldType::Float64, Value::Float64(v)) => output.extend_from_slice(&encode_f64(v.value())),
		(FieldType::Date, Value::Date(v)) => output.extend_from_slice(&encode_i32(v.to_days_since_epoch())),
		(FieldType::Int96, Value::Int96(v)) => output.extend_from_slice(v.as_bytes()),
		(FieldType::Binary, Value::Binary(v)) => encode_padded(field_type, v.as_bytes(), width, output)?,
		(FieldType::String, Value::String(v)) => encode_padded(field_type, v.as_bytes(), width, output)?,
		(expected, actual) => {
			return Err(Error::TypeMismatch {
				expected,
				actual: actual.field_type().to_string(),
			});
		}
	}
	Ok(())
}

/// Encodes a value of a fixed-width type.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
	let field_type = value.field_type();
	let Some(width) = field_type.fixed_byte_width() else {
		return Err(Error::UnsupportedType {
			field_type,
			reason: "variable-length values need a pad width",
		});
	};
	let mut output = Vec::with_capacity(width as usize);
	encode_into(field_type, value, width, &mut output)?;
	Ok(output)
}

/// Encodes a `String` or `Binary` value right-padded to `width` bytes.
pub fn encode_padded_value(value: &Value, width: u32) -> Result<Vec<u8>> {
	let field_type = value.field_type();
	if !field_type.is_padded() {
		return Err(Error::UnsupportedType {
			field_type,
			reason: "only variable-length values are padded",
		});
	}
	let mut output = Vec::with_capacity(width as usize);
	encode_into(field_type, value, width, &mut output)?;
	Ok(output)
}

/// Decodes one field encoding. `input` must be exactly the field's width.
pub fn decode(field_type: FieldType, input: &[u8]) -> Result<Value> {
	if let Some(width) = field_type.fixed_byte_width() {
		if input.len() != width as usize {
			return malformed!("{field_type} needs {width} bytes, got {}", input.len());
		}
	}

	Ok(match field_type {
		FieldType::Boolean => Value::Boolean(decode_bool(input[0])?),
		FieldType::Int32 => Value::Int32(decode_i32(fixed(input))),
		FieldType::Int64 => Value::Int64(decode_i64(fixed(input))),
		FieldType::Float32 => {
			let v = decode_f32(fixed(input));
			check_float(field_type, v.is_nan(), v == 0.0 && v.is_sign_negative())?;
			Value::Float32(OrderedF32::try_from(v)?)
		}
		FieldType::Float64 => {
			let v = decode_f64(fixed(input));
			check_float(field_type, v.is_nan(), v == 0.0 && v.is_sign_negative())?;
			Value::Float64(OrderedF64::try_from(v)?)
		}
		FieldType::Date => Value::Date(Date::from_days_since_epoch(decode_i32(fixed(input)))),
		FieldType::Int96 => Value::Int96(Int96::new(fixed(input))),
		FieldType::Binary => Value::Binary(Blob::from(decode_padded(input))),
		FieldType::String => match std::str::from_utf8(decode_padded(input)) {
			Ok(s) => Value::String(s.to_string()),
			Err(err) => return malformed!("padded string is not UTF-8: {err}"),
		},
	})
}

// encoding never produces NaN or negative zero, so neither is a valid key
fn check_float(field_type: FieldType, nan: bool, negative_zero: bool) -> Result<()> {
	if nan {
		return malformed!("{field_type} key holds a NaN");
	}
	if negative_zero {
		return malformed!("{field_type} key holds a negative zero");
	}
	Ok(())
}

// lengths are checked against the fixed width before this is reached
fn fixed<const N: usize>(input: &[u8]) -> [u8; N] {
	let mut bytes = [0u8; N];
	bytes.copy_from_slice(input);
	bytes
}
