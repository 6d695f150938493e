// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Concrete byte layouts of small keys

use memkey_core::{
	EncodedKey, Error, FieldInfo, FieldType, KeyEncoder, Row, RowSchema, Value, compare_bytes, compare_rows,
	encoding::keycode,
};

fn int32_key(encoder: &KeyEncoder, schema: &RowSchema, v: i32) -> EncodedKey {
	let mut row = schema.allocate();
	row.set_i32(0, v).unwrap();
	encoder.encode(schema, &row).unwrap()
}

#[test]
fn test_int32_sign() {
	let encoder = KeyEncoder::default();
	let schema = RowSchema::from_types(&[FieldType::Int32]);
	let keys: Vec<EncodedKey> = [-5, 0, 5].into_iter().map(|v| int32_key(&encoder, &schema, v)).collect();

	assert_eq!(hex::encode(keys[0].as_bytes()), "7ffffffb");
	assert_eq!(hex::encode(keys[1].as_bytes()), "80000000");
	assert_eq!(hex::encode(keys[2].as_bytes()), "80000005");
	assert!(keys[0] < keys[1] && keys[1] < keys[2]);
}

#[test]
fn test_int_extremes() {
	let encoder = KeyEncoder::default();
	let schema = RowSchema::from_types(&[FieldType::Int32, FieldType::Int64]);
	let mut row = schema.allocate();
	row.set_i32(0, i32::MIN).unwrap();
	row.set_i64(1, i64::MAX).unwrap();

	let key = encoder.encode(&schema, &row).unwrap();
	assert_eq!(key.to_string(), "00000000ffffffffffffffff");
	assert_eq!(encoder.decode(&key, &schema).unwrap(), row);
}

#[test]
fn test_float64_order() {
	let values = [-1.5, -0.5, 0.0, 0.5, 1.5];
	let keys: Vec<Vec<u8>> = values.iter().map(|v| keycode::encode(&Value::float64(*v).unwrap()).unwrap()).collect();
	for pair in keys.windows(2) {
		assert!(compare_bytes(&pair[0], &pair[1]).is_lt());
	}
}

#[test]
fn test_boolean_bytes() {
	assert_eq!(keycode::encode(&Value::Boolean(false)).unwrap(), vec![0x01]);
	assert_eq!(keycode::encode(&Value::Boolean(true)).unwrap(), vec![0x02]);
}

#[test]
fn test_padding() {
	let encoder = KeyEncoder::default();
	let schema = RowSchema::new(vec![FieldInfo::new("s", FieldType::String).pad_width(5)]);

	let mut ab = schema.allocate();
	ab.set_str(0, "ab").unwrap();
	let mut abc = schema.allocate();
	abc.set_str(0, "abc").unwrap();

	let ab_key = encoder.encode(&schema, &ab).unwrap();
	let abc_key = encoder.encode(&schema, &abc).unwrap();
	assert_eq!(ab_key.as_bytes(), &[0x61, 0x62, 0x00, 0x00, 0x00]);
	assert!(ab_key < abc_key);

	let mut long = schema.allocate();
	long.set_str(0, "abcdef").unwrap();
	assert_eq!(
		encoder.encode(&schema, &long),
		Err(Error::SizeExceeded {
			field_type: FieldType::String,
			size: 6,
			width: 5,
		})
	);
}

#[test]
fn test_padded_value_ending_in_nul() {
	let encoder = KeyEncoder::default();
	let schema = RowSchema::new(vec![FieldInfo::new("b", FieldType::Binary).pad_width(4)]);
	let mut row = schema.allocate();
	row.set_binary(0, vec![0x01, 0x00]).unwrap();
	assert_eq!(
		encoder.encode(&schema, &row),
		Err(Error::TrailingNul {
			field_type: FieldType::Binary
		})
	);
}

#[test]
fn test_null_sorts_after_value() {
	let encoder = KeyEncoder::default();
	let schema = RowSchema::new(vec![
		FieldInfo::new("id", FieldType::Int32).nullable(),
		FieldInfo::new("flag", FieldType::Boolean),
	]);

	let mut present = schema.allocate();
	present.set_i32(0, i32::MAX).unwrap();
	present.set_bool(1, true).unwrap();

	let mut null = present.clone();
	null.set_null(0);

	assert!(compare_rows(&present, &null).is_lt());
	let present_key = encoder.encode(&schema, &present).unwrap();
	let null_key = encoder.encode(&schema, &null).unwrap();
	assert!(compare_bytes(&present_key, &null_key).is_lt());
	assert_eq!(null_key.as_bytes(), &[0x01, 0x00, 0x00, 0x00, 0x00, 0x02]);
}

#[test]
fn test_null_requires_nullable_field() {
	let encoder = KeyEncoder::default();
	let schema = RowSchema::from_types(&[FieldType::Boolean, FieldType::Int32]);
	let mut row = schema.allocate();
	row.set_bool(0, false).unwrap();
	assert_eq!(
		encoder.encode(&schema, &row),
		Err(Error::UnexpectedNull {
			index: 1
		})
	);
}

#[test]
fn test_two_fields_concatenate() {
	let encoder = KeyEncoder::default();
	let schema = RowSchema::from_types(&[FieldType::Int32, FieldType::Int32]);
	let row = |a: i32, b: i32| Row::from_values(&schema, [Some(Value::Int32(a)), Some(Value::Int32(b))]).unwrap();

	let key = encoder.encode(&schema, &row(3, -3)).unwrap();
	let mut expected = keycode::encode(&Value::Int32(3)).unwrap();
	expected.extend(keycode::encode(&Value::Int32(-3)).unwrap());
	assert_eq!(key.as_bytes(), expected.as_slice());

	let mut rows = vec![row(3, -3), row(-3, 3), row(3, -4)];
	encoder.sort_rows(&schema, &mut rows).unwrap();
	assert_eq!(rows, vec![row(-3, 3), row(3, -4), row(3, -3)]);
}

#[test]
fn test_row_derived_layout() {
	let encoder = KeyEncoder::default();
	let schema = RowSchema::from_types(&[FieldType::Int64, FieldType::Date]);
	let mut row = schema.allocate();
	row.set_i64(0, -1).unwrap();
	row.set_date(1, memkey_core::Date::new(1970, 1, 2).unwrap()).unwrap();

	assert_eq!(encoder.compute_row_byte_width(&row).unwrap(), 12);
	assert_eq!(encoder.encode_row(&row).unwrap().to_string(), "7fffffffffffffff80000001");
}

#[test]
fn test_nan_is_rejected() {
	let mut row = RowSchema::from_types(&[FieldType::Float32]).allocate();
	assert_eq!(row.set_f32(0, f32::NAN), Err(Error::InvalidFloat));
	assert!(row[0].is_null());
}
