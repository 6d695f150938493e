// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	ops::Index,
};

use memkey_type::{Error, Result, TypedValue, Value};
use serde::{Deserialize, Serialize};

use crate::schema::RowSchema;

mod set;

/// An ordered sequence of typed values.
///
/// Rows order by field count first, then field by field with the first field
/// most significant. Within a field nulls sort last.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row(Vec<TypedValue>);

impl Row {
	pub fn new(fields: Vec<TypedValue>) -> Self {
		Self(fields)
	}

	/// One null value per field of `schema`.
	pub fn from_schema(schema: &RowSchema) -> Self {
		Self(schema.fields().iter().map(|f| f.field_type().allocate()).collect())
	}

	/// Populates a row of `schema` positionally, coercing each value to its
	/// field's type.
	pub fn from_values(schema: &RowSchema, values: impl IntoIterator<Item = Option<Value>>) -> Result<Self> {
		let mut row = Self::from_schema(schema);
		let mut count = 0;
		for value in values {
			if count < row.len() {
				row.0[count].set_value(value)?;
			}
			count += 1;
		}
		if count != row.len() {
			return Err(Error::FieldCountMismatch {
				expected: row.len(),
				actual: count,
			});
		}
		Ok(row)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn fields(&self) -> &[TypedValue] {
		&self.0
	}

	pub fn into_fields(self) -> Vec<TypedValue> {
		self.0
	}

	pub fn field(&self, index: usize) -> Option<&TypedValue> {
		self.0.get(index)
	}

	/// The value at `index`, `None` if it is null or out of range.
	pub fn get(&self, index: usize) -> Option<&Value> {
		self.0.get(index).and_then(TypedValue::value)
	}

	/// Replaces the field at `index`. The new value must have the field's type.
	///
	/// # Panics
	///
	/// Panics if `index` is out of range.
	pub fn set_field(&mut self, index: usize, value: TypedValue) -> Result<()> {
		let slot = &mut self.0[index];
		if slot.field_type() != value.field_type() {
			return Err(Error::TypeMismatch {
				expected: slot.field_type(),
				actual: value.field_type().to_string(),
			});
		}
		*slot = value;
		Ok(())
	}

	/// Stores `value` at `index` after coercing it to the field's type, or
	/// clears the field when `value` is `None`.
	///
	/// # Panics
	///
	/// Panics if `index` is out of range.
	pub fn set_value(&mut self, index: usize, value: Option<Value>) -> Result<()> {
		self.0[index].set_value(value)
	}

	/// # Panics
	///
	/// Panics if `index` is out of range.
	pub fn set_null(&mut self, index: usize) {
		self.0[index].set_null();
	}

	/// Copies every value of `other` into this row position by position,
	/// coercing to this row's field types. Nothing is changed on error.
	pub fn copy_values_from(&mut self, other: &Row) -> Result<()> {
		if other.len() != self.len() {
			return Err(Error::FieldCountMismatch {
				expected: self.len(),
				actual: other.len(),
			});
		}
		let mut copied = self.0.clone();
		for (slot, source) in copied.iter_mut().zip(&other.0) {
			slot.set_value(source.value().cloned())?;
		}
		self.0 = copied;
		Ok(())
	}

	/// Joins rows left to right, skipping absent ones.
	pub fn concat(rows: &[Option<&Row>]) -> Row {
		Row(rows.iter().flatten().flat_map(|r| r.0.iter().cloned()).collect())
	}
}

impl From<Vec<TypedValue>> for Row {
	fn from(fields: Vec<TypedValue>) -> Self {
		Self(fields)
	}
}

impl FromIterator<TypedValue> for Row {
	fn from_iter<I: IntoIterator<Item = TypedValue>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl Index<usize> for Row {
	type Output = TypedValue;

	fn index(&self, index: usize) -> &Self::Output {
		&self.0[index]
	}
}

impl PartialOrd for Row {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Row {
	fn cmp(&self, other: &Self) -> Ordering {
		self.len().cmp(&other.len()).then_with(|| self.0.iter().cmp(other.0.iter()))
	}
}

/// Typed row order, the order encoded keys of one layout reproduce.
pub fn compare_rows(a: &Row, b: &Row) -> Ordering {
	a.cmp(b)
}

impl Display for Row {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for value in &self.0 {
			write!(f, "|{value}\t")?;
		}
		Ok(())
	}
}
