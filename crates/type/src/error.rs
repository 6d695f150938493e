// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::r#type::FieldType;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while building, populating, encoding or decoding rows.
///
/// None of these are transient: there is no I/O underneath, so the caller has
/// to fix the input before trying again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("type mismatch: expected {expected}, got {actual}")]
	TypeMismatch {
		expected: FieldType,
		actual: String,
	},

	#[error("{field_type} value of {size} bytes exceeds declared width of {width} bytes")]
	SizeExceeded {
		field_type: FieldType,
		size: usize,
		width: u32,
	},

	#[error("malformed key buffer: {reason}")]
	MalformedBuffer {
		reason: String,
	},

	#[error("unsupported {field_type}: {reason}")]
	UnsupportedType {
		field_type: FieldType,
		reason: &'static str,
	},

	#[error("NaN cannot be stored in a float field")]
	InvalidFloat,

	#[error("field {index} is null but not declared nullable")]
	UnexpectedNull {
		index: usize,
	},

	#[error("{field_type} value ends in a 0x00 byte and cannot be padded")]
	TrailingNul {
		field_type: FieldType,
	},

	#[error("expected {expected} fields, got {actual}")]
	FieldCountMismatch {
		expected: usize,
		actual: usize,
	},
}

#[macro_export]
macro_rules! malformed {
	($($arg:tt)*) => {
		Err($crate::Error::MalformedBuffer { reason: format!($($arg)*) })
	};
}
