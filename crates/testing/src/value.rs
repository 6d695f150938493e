// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Boundary value grids per field type.

use memkey_type::{Date, FieldType, Int96, Value};

/// Pad width used by the fixture schemas.
pub const PAD_WIDTH: u32 = 8;

/// Interesting values of `field_type` in strictly ascending typed order.
///
/// Padded values fit in [`PAD_WIDTH`] and never end in a zero byte.
pub fn boundary_values(field_type: FieldType) -> Vec<Value> {
	match field_type {
		FieldType::Boolean => vec![Value::Boolean(false), Value::Boolean(true)],
		FieldType::Int32 => [i32::MIN, i32::MIN + 1, -256, -1, 0, 1, 255, 256, i32::MAX - 1, i32::MAX]
			.into_iter()
			.map(Value::Int32)
			.collect(),
		FieldType::Int64 => [i64::MIN, -(1 << 40), -1, 0, 1, 1 << 31, 1 << 40, i64::MAX].into_iter().map(Value::Int64).collect(),
		FieldType::Float32 => [
			f32::NEG_INFINITY,
			f32::MIN,
			-1.5,
			-f32::MIN_POSITIVE,
			-1e-45,
			0.0,
			1e-45,
			f32::MIN_POSITIVE,
			1.5,
			f32::MAX,
			f32::INFINITY,
		]
		.into_iter()
		.filter_map(|v| Value::float32(v).ok())
		.collect(),
		FieldType::Float64 => [
			f64::NEG_INFINITY,
			f64::MIN,
			-1.5,
			-0.5,
			-f64::MIN_POSITIVE,
			0.0,
			f64::MIN_POSITIVE,
			0.5,
			1.5,
			f64::MAX,
			f64::INFINITY,
		]
		.into_iter()
		.filter_map(|v| Value::float64(v).ok())
		.collect(),
		FieldType::Date => [i32::MIN, -719_528, -1, 0, 1, 19_782, i32::MAX]
			.into_iter()
			.map(|d| Value::Date(Date::from_days_since_epoch(d)))
			.collect(),
		FieldType::Int96 => vec![
			Value::Int96(Int96::new([0x00; 12])),
			Value::Int96(Int96::from_parts(0, 2_440_588)),
			Value::Int96(Int96::new([0x7f; 12])),
			Value::Int96(Int96::new([0x80; 12])),
			Value::Int96(Int96::new([0xff; 12])),
		],
		FieldType::Binary => vec![
			Value::binary(Vec::new()),
			Value::binary(vec![0x00, 0x01]),
			Value::binary(vec![0x01]),
			Value::binary(vec![0x01, 0x00, 0x01]),
			Value::binary(vec![0x01, 0x01]),
			Value::binary(vec![0x7f]),
			Value::binary(vec![0x80]),
			Value::binary(vec![0xff; PAD_WIDTH as usize]),
		],
		FieldType::String => ["", "A", "Z", "a", "ab", "abc", "b", "zzzzzzzz", "é"].into_iter().map(Value::string).collect(),
	}
}
