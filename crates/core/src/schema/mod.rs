// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::ops::Index;

use memkey_type::FieldType;
use serde::{Deserialize, Serialize};

use crate::row::Row;

mod field;

pub use field::FieldInfo;

/// The ordered fields of a row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowSchema {
	fields: Vec<FieldInfo>,
}

impl RowSchema {
	pub fn new(fields: Vec<FieldInfo>) -> Self {
		Self {
			fields,
		}
	}

	/// A schema of unnamed fields, called `f0`, `f1`, ... in order.
	pub fn from_types(types: &[FieldType]) -> Self {
		Self::new(types.iter().enumerate().map(|(i, ty)| FieldInfo::new(format!("f{i}"), *ty)).collect())
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn fields(&self) -> &[FieldInfo] {
		&self.fields
	}

	pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
		self.fields.get(index)
	}

	/// First field whose name or alias matches, ignoring case.
	pub fn field(&self, name: &str) -> Option<&FieldInfo> {
		self.fields.iter().find(|f| f.matches(name))
	}

	pub fn position(&self, name: &str) -> Option<usize> {
		self.fields.iter().position(|f| f.matches(name))
	}

	pub fn field_types(&self) -> Vec<FieldType> {
		self.fields.iter().map(FieldInfo::field_type).collect()
	}

	/// Returns `false` if `index` is out of range.
	pub fn set_field_type(&mut self, index: usize, field_type: FieldType) -> bool {
		match self.fields.get_mut(index) {
			Some(field) => {
				field.set_field_type(field_type);
				true
			}
			None => false,
		}
	}

	/// Returns `false` if `index` is out of range.
	pub fn set_alias(&mut self, index: usize, alias: impl Into<String>) -> bool {
		match self.fields.get_mut(index) {
			Some(field) => {
				field.set_alias(alias);
				true
			}
			None => false,
		}
	}

	/// Joins schemas left to right, skipping absent ones.
	pub fn concat(schemas: &[Option<&RowSchema>]) -> RowSchema {
		let fields = schemas.iter().flatten().flat_map(|s| s.fields.iter().cloned()).collect();
		RowSchema::new(fields)
	}

	/// A row with one null value per field.
	pub fn allocate(&self) -> Row {
		Row::from_schema(self)
	}
}

impl Index<usize> for RowSchema {
	type Output = FieldInfo;

	fn index(&self, index: usize) -> &Self::Output {
		&self.fields[index]
	}
}

impl FromIterator<FieldInfo> for RowSchema {
	fn from_iter<I: IntoIterator<Item = FieldInfo>>(iter: I) -> Self {
		RowSchema::new(iter.into_iter().collect())
	}
}
