// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Rows, schemas and their memcomparable keys.
//!
//! A [`KeyEncoder`] turns each [`Row`] of a [`RowSchema`] into a fixed-width
//! [`EncodedKey`]. Comparing two keys with [`compare_bytes`] gives the same
//! result as comparing the rows with [`compare_rows`].

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod config;
pub mod encoding;
mod key;
pub mod row;
pub mod schema;

pub use config::KeyEncoderConfig;
pub use encoding::{KeyEncoder, KeyLayout, KeySpec};
pub use key::{EncodedKey, compare_bytes};
pub use memkey_type::{
	Blob, Date, Error, FieldType, Int96, OrderedF32, OrderedF64, Result, TypedValue, Value, malformed,
	util::CowVec,
};
pub use row::{Row, compare_rows};
pub use schema::{FieldInfo, RowSchema};
