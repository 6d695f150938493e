// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, mem};

use memkey_type::Result;
use parking_lot::RwLock;
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::{
	config::KeyEncoderConfig,
	encoding::layout::{KeyLayout, KeySpec, LayoutFingerprint},
	key::EncodedKey,
	row::Row,
	schema::RowSchema,
};

/// Turns rows into keys whose byte order is the row order.
///
/// Layouts are computed once per row shape and shared between threads. The
/// cache keeps every shape it has seen until [`clear_layouts`] is called.
///
/// [`clear_layouts`]: KeyEncoder::clear_layouts
#[derive(Debug, Default)]
pub struct KeyEncoder {
	config: KeyEncoderConfig,
	// layouts whose fingerprints collide share a bucket
	layouts: RwLock<HashMap<LayoutFingerprint, Vec<KeyLayout>>>,
}

impl KeyEncoder {
	pub fn new(config: KeyEncoderConfig) -> Self {
		Self {
			config,
			layouts: RwLock::new(HashMap::new()),
		}
	}

	pub fn config(&self) -> &KeyEncoderConfig {
		&self.config
	}

	/// The layout for rows of `schema`, honouring declared pad widths and
	/// nullability.
	pub fn layout(&self, schema: &RowSchema) -> Result<KeyLayout> {
		let pad_width = self.config.default_pad_width;
		self.layout_for(schema.fields().iter().map(move |f| KeySpec::for_field(f, pad_width)))
	}

	/// The layout derived from the field types of `row` alone. No field is
	/// nullable and padded fields use the configured default width.
	pub fn row_layout(&self, row: &Row) -> Result<KeyLayout> {
		let pad_width = self.config.default_pad_width;
		self.layout_for(row.fields().iter().map(move |v| KeySpec::for_type(v.field_type(), pad_width)))
	}

	fn layout_for<I>(&self, specs: I) -> Result<KeyLayout>
	where
		I: Iterator<Item = KeySpec> + Clone,
	{
		let fingerprint = LayoutFingerprint::of(specs.clone());
		if let Some(layout) = self.cached(fingerprint, specs.clone()) {
			return Ok(layout);
		}

		let specs: Vec<KeySpec> = specs.collect();
		let layout = KeyLayout::new(&specs)?;
		debug!(fields = specs.len(), width = layout.byte_width(), "computed key layout");

		let mut layouts = self.layouts.write();
		let bucket = layouts.entry(fingerprint).or_default();
		match bucket.iter().find(|l| l.matches(specs.iter().copied())) {
			Some(existing) => Ok(existing.clone()),
			None => {
				bucket.push(layout.clone());
				Ok(layout)
			}
		}
	}

	fn cached(&self, fingerprint: LayoutFingerprint, specs: impl Iterator<Item = KeySpec> + Clone) -> Option<KeyLayout> {
		let layouts = self.layouts.read();
		layouts.get(&fingerprint)?.iter().find(|l| l.matches(specs.clone())).cloned()
	}

	pub fn byte_width(&self, schema: &RowSchema) -> Result<u32> {
		Ok(self.layout(schema)?.byte_width())
	}

	pub fn compute_row_byte_width(&self, row: &Row) -> Result<u32> {
		Ok(self.row_layout(row)?.byte_width())
	}

	#[instrument(name = "encoder::encode", level = "trace", skip_all)]
	pub fn encode(&self, schema: &RowSchema, row: &Row) -> Result<EncodedKey> {
		self.layout(schema)?.encode(row)
	}

	#[instrument(name = "encoder::encode_row", level = "trace", skip_all)]
	pub fn encode_row(&self, row: &Row) -> Result<EncodedKey> {
		self.row_layout(row)?.encode(row)
	}

	#[instrument(name = "encoder::decode", level = "trace", skip_all)]
	pub fn decode(&self, key: &[u8], schema: &RowSchema) -> Result<Row> {
		let row = self.layout(schema)?.decode(key)?;
		trace!(fields = row.len(), "decoded row");
		Ok(row)
	}

	/// Encodes every row against one layout. The first failing row aborts the
	/// batch.
	#[instrument(name = "encoder::encode_all", level = "trace", skip_all, fields(rows = rows.len()))]
	pub fn encode_all(&self, schema: &RowSchema, rows: &[Row]) -> Result<Vec<EncodedKey>> {
		let layout = self.layout(schema)?;
		if rows.len() >= self.config.parallel_threshold {
			rows.par_iter().map(|row| layout.encode(row)).collect()
		} else {
			rows.iter().map(|row| layout.encode(row)).collect()
		}
	}

	#[instrument(name = "encoder::sort_keys", level = "trace", skip_all, fields(keys = keys.len()))]
	pub fn sort_keys(&self, keys: &mut [EncodedKey]) {
		if keys.len() >= self.config.parallel_threshold {
			keys.par_sort_unstable();
		} else {
			keys.sort_unstable();
		}
	}

	/// Sorts rows of `schema` by their encoded keys. Rows are left untouched
	/// if any of them fails to encode.
	#[instrument(name = "encoder::sort_rows", level = "trace", skip_all, fields(rows = rows.len()))]
	pub fn sort_rows(&self, schema: &RowSchema, rows: &mut Vec<Row>) -> Result<()> {
		let keys = self.encode_all(schema, rows)?;
		let mut keyed: Vec<(EncodedKey, Row)> = keys.into_iter().zip(mem::take(rows)).collect();
		if keyed.len() >= self.config.parallel_threshold {
			keyed.par_sort_unstable_by(|a, b| a.0.cmp(&b.0));
		} else {
			keyed.sort_unstable_by(|a, b| a.0.cmp(&b.0));
		}
		rows.extend(keyed.into_iter().map(|(_, row)| row));
		Ok(())
	}

	/// Number of cached layouts.
	pub fn cached_layouts(&self) -> usize {
		self.layouts.read().values().map(Vec::len).sum()
	}

	/// Drops every cached layout. Layouts already handed out stay valid.
	pub fn clear_layouts(&self) {
		self.layouts.write().clear();
	}
}
