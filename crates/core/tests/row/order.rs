// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Byte order of encoded keys against typed row order

use memkey_core::{FieldType, KeyEncoder, KeyEncoderConfig};
use memkey_testing::{assert_order_preserved, cross_rows, nullable_schema_of, schema_of};

use crate::init_tracing;

#[test]
fn test_single_field_every_type() {
	init_tracing();
	let encoder = KeyEncoder::default();
	for ty in FieldType::ALL {
		let schema = schema_of(&[ty]);
		assert_order_preserved(&encoder, &schema, &cross_rows(&schema));
	}
}

#[test]
fn test_single_nullable_field_every_type() {
	let encoder = KeyEncoder::default();
	for ty in FieldType::ALL {
		let schema = nullable_schema_of(&[ty]);
		assert_order_preserved(&encoder, &schema, &cross_rows(&schema));
	}
}

#[test]
fn test_field_pairs() {
	let encoder = KeyEncoder::default();
	for first in FieldType::ALL {
		for second in [FieldType::Int32, FieldType::String, FieldType::Float64, FieldType::Boolean] {
			let schema = schema_of(&[first, second]);
			assert_order_preserved(&encoder, &schema, &cross_rows(&schema));
		}
	}
}

#[test]
fn test_three_fields_nullable() {
	let encoder = KeyEncoder::new(KeyEncoderConfig::new().parallel_threshold(64));
	let schema = nullable_schema_of(&[FieldType::Binary, FieldType::Date, FieldType::Int64]);
	assert_order_preserved(&encoder, &schema, &cross_rows(&schema));
}

#[test]
fn test_sort_keys_matches_sort_rows() {
	let encoder = KeyEncoder::new(KeyEncoderConfig::new().parallel_threshold(16));
	let schema = nullable_schema_of(&[FieldType::Float32, FieldType::String]);

	let mut rows = cross_rows(&schema);
	rows.reverse();

	let mut expected = rows.clone();
	expected.sort();

	encoder.sort_rows(&schema, &mut rows).unwrap();
	assert_eq!(rows, expected);

	let mut keys = encoder.encode_all(&schema, &rows).unwrap();
	let sorted = keys.clone();
	keys.reverse();
	encoder.sort_keys(&mut keys);
	assert_eq!(keys, sorted);
}
