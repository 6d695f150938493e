// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use memkey_core::{FieldType, KeyEncoder, Value};
use memkey_testing::{cross_rows, nullable_schema_of, schema_of};

#[test]
fn test_round_trip_every_type() {
	let encoder = KeyEncoder::default();
	for ty in FieldType::ALL {
		for schema in [schema_of(&[ty]), nullable_schema_of(&[ty])] {
			let width = encoder.byte_width(&schema).unwrap() as usize;
			for row in cross_rows(&schema) {
				let key = encoder.encode(&schema, &row).unwrap();
				assert_eq!(key.len(), width);
				assert_eq!(encoder.decode(&key, &schema).unwrap(), row, "{ty}: {key}");
			}
		}
	}
}

#[test]
fn test_round_trip_mixed_row() {
	let encoder = KeyEncoder::default();
	let schema = nullable_schema_of(&[FieldType::Int96, FieldType::String, FieldType::Float32, FieldType::Boolean]);
	for row in cross_rows(&schema).into_iter().step_by(7) {
		let key = encoder.encode(&schema, &row).unwrap();
		assert_eq!(encoder.decode(&key, &schema).unwrap(), row);
	}
}

#[test]
fn test_negative_zero_round_trips_as_zero() {
	let encoder = KeyEncoder::default();
	let schema = schema_of(&[FieldType::Float64, FieldType::Float32]);

	let mut negative = schema.allocate();
	negative.set_f64(0, -0.0).unwrap();
	negative.set_f32(1, -0.0).unwrap();

	let mut positive = schema.allocate();
	positive.set_f64(0, 0.0).unwrap();
	positive.set_f32(1, 0.0).unwrap();

	let key = encoder.encode(&schema, &negative).unwrap();
	assert_eq!(key, encoder.encode(&schema, &positive).unwrap());

	let decoded = encoder.decode(&key, &schema).unwrap();
	assert_eq!(decoded, positive);
	assert_eq!(decoded.get(0), Some(&Value::float64(0.0).unwrap()));
	assert!(decoded.try_get_f64(0).is_some_and(|v| v.is_sign_positive()));
}

#[test]
fn test_decode_wrong_length() {
	let encoder = KeyEncoder::default();
	let schema = schema_of(&[FieldType::Int64]);
	assert!(encoder.decode(&[0x80; 7], &schema).is_err());
	assert!(encoder.decode(&[0x80; 9], &schema).is_err());
}
