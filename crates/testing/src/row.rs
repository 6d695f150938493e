// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use memkey_core::{FieldInfo, KeyEncoder, Row, RowSchema, compare_bytes, compare_rows};
use memkey_type::{FieldType, Value};

use crate::value::{PAD_WIDTH, boundary_values};

/// A schema with one field per type, padded fields at [`PAD_WIDTH`].
pub fn schema_of(types: &[FieldType]) -> RowSchema {
	types.iter().enumerate().map(|(i, ty)| field(i, *ty)).collect()
}

/// Like [`schema_of`] with every field nullable.
pub fn nullable_schema_of(types: &[FieldType]) -> RowSchema {
	types.iter().enumerate().map(|(i, ty)| field(i, *ty).nullable()).collect()
}

fn field(index: usize, field_type: FieldType) -> FieldInfo {
	let field = FieldInfo::new(format!("f{index}"), field_type);
	if field_type.is_padded() {
		field.pad_width(PAD_WIDTH)
	} else {
		field
	}
}

/// Every combination of the boundary values of each field, plus null for
/// nullable fields.
pub fn cross_rows(schema: &RowSchema) -> Vec<Row> {
	let mut rows = vec![Vec::new()];
	for field in schema.fields() {
		let mut choices: Vec<Option<Value>> = boundary_values(field.field_type()).into_iter().map(Some).collect();
		if field.is_nullable() {
			choices.push(None);
		}

		rows = rows
			.into_iter()
			.flat_map(|prefix: Vec<Option<Value>>| {
				choices.iter().map(move |choice| {
					let mut next = prefix.clone();
					next.push(choice.clone());
					next
				})
			})
			.collect();
	}

	rows.into_iter().map(|values| Row::from_values(schema, values).expect("fixture values fit the schema")).collect()
}

/// Asserts that for every pair of `rows` the byte order of their keys is
/// their typed order.
pub fn assert_order_preserved(encoder: &KeyEncoder, schema: &RowSchema, rows: &[Row]) {
	let keys = encoder.encode_all(schema, rows).expect("rows encode");
	for (i, (left_row, left_key)) in rows.iter().zip(&keys).enumerate() {
		for (right_row, right_key) in rows[i..].iter().zip(&keys[i..]) {
			assert_eq!(
				compare_bytes(left_key, right_key),
				compare_rows(left_row, right_row),
				"{left_row} vs {right_row}: {left_key} vs {right_key}"
			);
		}
	}
}
