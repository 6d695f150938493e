// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::hash::{Hash, Hasher};

use memkey_type::FieldType;
use serde::{Deserialize, Serialize};

/// Describes one field of a [`RowSchema`](super::RowSchema).
///
/// Two fields are equal when their alias and type are equal. The name, the
/// source positions and the key options do not take part in equality.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldInfo {
	name: String,
	alias: String,
	field_type: FieldType,
	table_index: Option<usize>,
	field_index: Option<usize>,
	#[serde(default)]
	pad_width: Option<u32>,
	#[serde(default)]
	nullable: bool,
}

impl FieldInfo {
	pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
		let name = name.into();
		Self {
			alias: name.clone(),
			name,
			field_type,
			table_index: None,
			field_index: None,
			pad_width: None,
			nullable: false,
		}
	}

	pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
		self.alias = alias.into();
		self
	}

	/// Returns a copy that records where the field came from.
	pub fn with_position(&self, table_index: usize, field_index: usize) -> Self {
		Self {
			table_index: Some(table_index),
			field_index: Some(field_index),
			..self.clone()
		}
	}

	/// Declares the key width of a `String` or `Binary` field.
	pub fn pad_width(mut self, width: u32) -> Self {
		self.pad_width = Some(width);
		self
	}

	/// Lets the field hold nulls in encoded keys.
	pub fn nullable(mut self) -> Self {
		self.nullable = true;
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn alias(&self) -> &str {
		&self.alias
	}

	pub fn field_type(&self) -> FieldType {
		self.field_type
	}

	pub fn table_index(&self) -> Option<usize> {
		self.table_index
	}

	pub fn field_index(&self) -> Option<usize> {
		self.field_index
	}

	pub fn declared_pad_width(&self) -> Option<u32> {
		self.pad_width
	}

	pub fn is_nullable(&self) -> bool {
		self.nullable
	}

	pub fn set_field_type(&mut self, field_type: FieldType) {
		self.field_type = field_type;
	}

	pub fn set_alias(&mut self, alias: impl Into<String>) {
		self.alias = alias.into();
	}

	pub fn same_name(&self, other: &FieldInfo) -> bool {
		self.name == other.name
	}

	/// Case-insensitive match against the name or the alias.
	pub fn matches(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name) || self.alias.eq_ignore_ascii_case(name)
	}
}

impl PartialEq for FieldInfo {
	fn eq(&self, other: &Self) -> bool {
		self.alias == other.alias && self.field_type == other.field_type
	}
}

impl Eq for FieldInfo {}

impl Hash for FieldInfo {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.alias.hash(state);
		self.field_type.hash(state);
	}
}
