// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use memkey_type::{Error, FieldType, Result, TypedValue, malformed};
use memkey_type::util::CowVec;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

use crate::{encoding::keycode, key::EncodedKey, row::Row, schema::FieldInfo};

pub const PRESENT: u8 = 0x00;
pub const NULL: u8 = 0x01;

/// What the key layout needs to know about one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeySpec {
	pub field_type: FieldType,
	pub pad_width: Option<u32>,
	pub nullable: bool,
}

impl KeySpec {
	pub fn new(field_type: FieldType) -> Self {
		Self {
			field_type,
			pad_width: None,
			nullable: false,
		}
	}

	pub fn padded(field_type: FieldType, width: u32) -> Self {
		Self {
			field_type,
			pad_width: Some(width),
			nullable: false,
		}
	}

	pub fn nullable(mut self) -> Self {
		self.nullable = true;
		self
	}

	/// `default_pad_width` fills in for `String` and `Binary` fields that
	/// declare no width of their own.
	pub fn for_field(field: &FieldInfo, default_pad_width: Option<u32>) -> Self {
		let field_type = field.field_type();
		Self {
			field_type,
			pad_width: field.declared_pad_width().or(default_pad_width.filter(|_| field_type.is_padded())),
			nullable: field.is_nullable(),
		}
	}

	pub fn for_type(field_type: FieldType, default_pad_width: Option<u32>) -> Self {
		Self {
			field_type,
			pad_width: default_pad_width.filter(|_| field_type.is_padded()),
			nullable: false,
		}
	}

	fn width(&self) -> Result<u32> {
		match (self.field_type.fixed_byte_width(), self.pad_width) {
			(Some(width), None) => Ok(width),
			(None, Some(width)) => Ok(width),
			(Some(_), Some(_)) => Err(Error::UnsupportedType {
				field_type: self.field_type,
				reason: "fixed-width fields take no pad width",
			}),
			(None, None) => Err(Error::UnsupportedType {
				field_type: self.field_type,
				reason: "variable-length fields need a pad width",
			}),
		}
	}
}

/// Content hash of a sequence of [`KeySpec`]s, used to find a cached layout
/// without collecting the specs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutFingerprint(pub u64);

impl LayoutFingerprint {
	pub fn of(specs: impl Iterator<Item = KeySpec>) -> Self {
		let mut hasher = Xxh3::new();
		for spec in specs {
			hasher.update(&[spec.field_type as u8, u8::from(spec.nullable), u8::from(spec.pad_width.is_some())]);
			hasher.update(&spec.pad_width.unwrap_or(0).to_le_bytes());
		}
		Self(hasher.digest())
	}
}

/// Byte positions of each field inside an encoded key.
#[derive(Debug, Clone)]
pub struct KeyLayout(pub(crate) Arc<KeyLayoutInner>);

impl Deref for KeyLayout {
	type Target = KeyLayoutInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

#[derive(Debug)]
pub struct KeyLayoutInner {
	pub fingerprint: LayoutFingerprint,
	pub specs: Vec<KeySpec>,
	pub fields: Vec<KeyField>,
	/// size of the whole key in bytes
	pub total_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyField {
	pub field_type: FieldType,
	pub offset: usize,
	/// payload width, without the null marker
	pub width: u32,
	pub nullable: bool,
}

impl KeyField {
	pub fn size(&self) -> usize {
		self.width as usize + usize::from(self.nullable)
	}
}

impl KeyLayout {
	pub fn new(specs: &[KeySpec]) -> Result<Self> {
		let mut fields = Vec::with_capacity(specs.len());
		let mut total: u32 = 0;

		for spec in specs {
			let width = spec.width()?;
			let size = width.checked_add(u32::from(spec.nullable));
			let Some(next) = size.and_then(|size| total.checked_add(size)) else {
				return Err(Error::UnsupportedType {
					field_type: spec.field_type,
					reason: "key width does not fit in 32 bits",
				});
			};
			fields.push(KeyField {
				field_type: spec.field_type,
				offset: total as usize,
				width,
				nullable: spec.nullable,
			});
			total = next;
		}

		Ok(Self(Arc::new(KeyLayoutInner {
			fingerprint: LayoutFingerprint::of(specs.iter().copied()),
			specs: specs.to_vec(),
			fields,
			total_size: total,
		})))
	}

	pub fn testing(types: &[FieldType]) -> Result<Self> {
		Self::new(&types.iter().map(|ty| KeySpec::new(*ty)).collect::<Vec<_>>())
	}
}

impl KeyLayoutInner {
	/// Whether this layout was built from exactly `specs`.
	pub fn matches(&self, specs: impl Iterator<Item = KeySpec>) -> bool {
		self.specs.iter().copied().eq(specs)
	}

	pub fn byte_width(&self) -> u32 {
		self.total_size
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Appends the key of `row` to `output`. On error `output` is left as it
	/// was.
	pub fn encode_into(&self, row: &Row, output: &mut Vec<u8>) -> Result<()> {
		let start = output.len();
		let result = self.write(row, output);
		if result.is_err() {
			output.truncate(start);
		}
		result
	}

	/// Keys are immutable once built, so they are returned in shared form and
	/// clone without copying.
	pub fn encode(&self, row: &Row) -> Result<EncodedKey> {
		let mut output = Vec::with_capacity(self.total_size as usize);
		self.write(row, &mut output)?;
		let mut key = CowVec::new(output);
		key.share();
		Ok(EncodedKey(key))
	}

	fn write(&self, row: &Row, output: &mut Vec<u8>) -> Result<()> {
		if row.len() != self.fields.len() {
			return Err(Error::FieldCountMismatch {
				expected: self.fields.len(),
				actual: row.len(),
			});
		}
		output.reserve(self.total_size as usize);

		for (index, (field, value)) in self.fields.iter().zip(row.fields()).enumerate() {
			if value.field_type() != field.field_type {
				return Err(Error::TypeMismatch {
					expected: field.field_type,
					actual: value.field_type().to_string(),
				});
			}

			let before = output.len();
			match value.value() {
				Some(value) => {
					if field.nullable {
						output.push(PRESENT);
					}
					keycode::encode_into(field.field_type, value, field.width, output)?;
				}
				None if field.nullable => {
					output.push(NULL);
					output.resize(output.len() + field.width as usize, 0x00);
				}
				None => {
					return Err(Error::UnexpectedNull {
						index,
					});
				}
			}
			assert_eq!(
				output.len() - before,
				field.size(),
				"{} field {index} wrote the wrong number of bytes",
				field.field_type
			);
		}
		Ok(())
	}

	/// Decodes a key produced by [`encode`](Self::encode) with this layout.
	pub fn decode(&self, key: &[u8]) -> Result<Row> {
		if key.len() != self.total_size as usize {
			return malformed!("key has {} bytes, layout needs {}", key.len(), self.total_size);
		}

		let mut values = Vec::with_capacity(self.fields.len());
		for (index, field) in self.fields.iter().enumerate() {
			let bytes = &key[field.offset..field.offset + field.size()];
			let payload = if field.nullable {
				match bytes[0] {
					PRESENT => Some(&bytes[1..]),
					NULL if bytes[1..].iter().all(|b| *b == 0x00) => None,
					NULL => return malformed!("null field {index} has a non-zero payload"),
					other => return malformed!("field {index} has null marker {other:#04x}"),
				}
			} else {
				Some(bytes)
			};

			let value = match payload {
				Some(payload) => TypedValue::new(field.field_type, Some(keycode::decode(field.field_type, payload)?))?,
				None => TypedValue::null(field.field_type),
			};
			values.push(value);
		}
		Ok(Row::new(values))
	}
}

#[cfg(test)]
pub mod tests {
	use memkey_type::Value;

	use super::*;
	use crate::schema::RowSchema;

	#[test]
	fn test_offsets() {
		let layout = KeyLayout::new(&[
			KeySpec::new(FieldType::Boolean),
			KeySpec::new(FieldType::Int64).nullable(),
			KeySpec::padded(FieldType::String, 5),
			KeySpec::new(FieldType::Int96),
		])
		.unwrap();

		let offsets: Vec<usize> = layout.fields.iter().map(|f| f.offset).collect();
		assert_eq!(offsets, vec![0, 1, 10, 15]);
		assert_eq!(layout.byte_width(), 27);
	}

	#[test]
	fn test_width_errors() {
		assert!(matches!(
			KeyLayout::new(&[KeySpec::new(FieldType::Binary)]),
			Err(Error::UnsupportedType {
				field_type: FieldType::Binary,
				..
			})
		));
		assert!(matches!(
			KeyLayout::new(&[KeySpec::padded(FieldType::Int32, 4)]),
			Err(Error::UnsupportedType {
				field_type: FieldType::Int32,
				..
			})
		));
		assert!(matches!(
			KeyLayout::new(&[KeySpec::padded(FieldType::String, u32::MAX), KeySpec::new(FieldType::Boolean)]),
			Err(Error::UnsupportedType { .. })
		));
	}

	#[test]
	fn test_fingerprint_matches_specs() {
		let specs = [KeySpec::new(FieldType::Int32).nullable(), KeySpec::padded(FieldType::String, 4)];
		let layout = KeyLayout::new(&specs).unwrap();
		assert_eq!(layout.fingerprint, LayoutFingerprint::of(specs.iter().copied()));
		assert!(layout.matches(specs.iter().copied()));

		let other = [KeySpec::new(FieldType::Int32), KeySpec::padded(FieldType::String, 4)];
		assert_ne!(layout.fingerprint, LayoutFingerprint::of(other.iter().copied()));
		assert!(!layout.matches(other.iter().copied()));
		assert!(!layout.matches(specs[..1].iter().copied()));
	}

	#[test]
	fn test_encoded_keys_are_shared() {
		let layout = KeyLayout::testing(&[FieldType::Int32]).unwrap();
		let mut row = Row::from_schema(&RowSchema::from_types(&[FieldType::Int32]));
		row.set_i32(0, 7).unwrap();

		let key = layout.encode(&row).unwrap();
		assert!(matches!(key.0, CowVec::Shared(_)));
		let copy = key.clone();
		assert_eq!(copy, key);
		assert_eq!(copy.as_bytes(), &[0x80, 0x00, 0x00, 0x07]);
	}

	#[test]
	fn test_empty_layout() {
		let layout = KeyLayout::new(&[]).unwrap();
		assert_eq!(layout.byte_width(), 0);
		assert!(layout.encode(&Row::default()).unwrap().is_empty());
	}

	#[test]
	fn test_spec_for_field() {
		let name = FieldInfo::new("name", FieldType::String);
		assert_eq!(KeySpec::for_field(&name, Some(8)).pad_width, Some(8));
		assert_eq!(KeySpec::for_field(&name.clone().pad_width(3), Some(8)).pad_width, Some(3));

		let id = FieldInfo::new("id", FieldType::Int32).nullable();
		let spec = KeySpec::for_field(&id, Some(8));
		assert_eq!(spec.pad_width, None);
		assert!(spec.nullable);
	}

	#[test]
	fn test_null_marker() {
		let layout = KeyLayout::new(&[KeySpec::new(FieldType::Int32).nullable()]).unwrap();
		let schema = RowSchema::from_types(&[FieldType::Int32]);

		let present = Row::from_values(&schema, [Some(Value::Int32(-1))]).unwrap();
		let null = Row::from_schema(&schema);

		assert_eq!(layout.encode(&present).unwrap().as_bytes(), &[0x00, 0x7f, 0xff, 0xff, 0xff]);
		assert_eq!(layout.encode(&null).unwrap().as_bytes(), &[0x01, 0x00, 0x00, 0x00, 0x00]);
		assert_eq!(layout.decode(&[0x01, 0, 0, 0, 0]).unwrap(), null);
	}

	#[test]
	fn test_null_in_required_field() {
		let layout = KeyLayout::testing(&[FieldType::Int32, FieldType::Int32]).unwrap();
		let mut row = Row::from_schema(&RowSchema::from_types(&[FieldType::Int32, FieldType::Int32]));
		row.set_i32(0, 1).unwrap();

		let mut output = vec![0xaa];
		assert_eq!(
			layout.encode_into(&row, &mut output),
			Err(Error::UnexpectedNull {
				index: 1
			})
		);
		assert_eq!(output, vec![0xaa]);
	}

	#[test]
	fn test_row_shape_checked() {
		let layout = KeyLayout::testing(&[FieldType::Int32]).unwrap();
		let wide = Row::from_schema(&RowSchema::from_types(&[FieldType::Int32, FieldType::Int32]));
		assert!(matches!(
			layout.encode(&wide),
			Err(Error::FieldCountMismatch {
				expected: 1,
				actual: 2
			})
		));

		let mut other = Row::from_schema(&RowSchema::from_types(&[FieldType::Int64]));
		other.set_i64(0, 1).unwrap();
		assert!(matches!(layout.encode(&other), Err(Error::TypeMismatch { .. })));
	}

	#[test]
	fn test_decode_rejects_bad_input() {
		let layout = KeyLayout::new(&[KeySpec::new(FieldType::Boolean).nullable()]).unwrap();
		assert!(matches!(layout.decode(&[0x00]), Err(Error::MalformedBuffer { .. })));
		assert!(matches!(layout.decode(&[0x02, 0x01]), Err(Error::MalformedBuffer { .. })));
		assert!(matches!(layout.decode(&[0x01, 0x02]), Err(Error::MalformedBuffer { .. })));
		assert!(matches!(layout.decode(&[0x00, 0x00]), Err(Error::MalformedBuffer { .. })));
		assert_eq!(layout.decode(&[0x00, 0x02]).unwrap().try_get_bool(0), Some(true));
	}

	#[test]
	fn test_decode_rejects_non_canonical_floats() {
		let layout = KeyLayout::testing(&[FieldType::Float32]).unwrap();
		assert!(matches!(layout.decode(&[0x7f, 0xff, 0xff, 0xff]), Err(Error::MalformedBuffer { .. })));
		assert!(matches!(layout.decode(&[0xff, 0xc0, 0x00, 0x00]), Err(Error::MalformedBuffer { .. })));
		assert_eq!(layout.decode(&[0x80, 0x00, 0x00, 0x00]).unwrap().try_get_f32(0), Some(0.0));
	}
}
