// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Typed rows and memcomparable row keys.
//!
//! ```
//! use memkey::{FieldInfo, FieldType, KeyEncoder, RowSchema, compare_bytes, compare_rows};
//!
//! let schema = RowSchema::new(vec![
//! 	FieldInfo::new("id", FieldType::Int32),
//! 	FieldInfo::new("name", FieldType::String).pad_width(8),
//! ]);
//! let encoder = KeyEncoder::default();
//!
//! let mut a = schema.allocate();
//! a.set_i32(0, -5)?;
//! a.set_str(1, "ab")?;
//!
//! let mut b = schema.allocate();
//! b.set_i32(0, 5)?;
//! b.set_str(1, "a")?;
//!
//! let ka = encoder.encode(&schema, &a)?;
//! let kb = encoder.encode(&schema, &b)?;
//! assert_eq!(ka.len(), 12);
//! assert_eq!(compare_bytes(&ka, &kb), compare_rows(&a, &b));
//! assert_eq!(encoder.decode(&ka, &schema)?, a);
//! # Ok::<(), memkey::Error>(())
//! ```

pub use memkey_core as core;
pub use memkey_core::{
	EncodedKey, FieldInfo, KeyEncoder, KeyEncoderConfig, KeyLayout, KeySpec, Row, RowSchema, compare_bytes,
	compare_rows, encoding::keycode,
};
pub use memkey_type as r#type;
pub use memkey_type::{Blob, Date, Error, FieldType, Int96, OrderedF32, OrderedF64, Result, TypedValue, Value};
