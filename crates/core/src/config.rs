// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Configuration for the [`KeyEncoder`](crate::encoding::KeyEncoder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyEncoderConfig {
	/// Pad width for `String` and `Binary` fields that do not declare one.
	/// Without it such fields cannot be encoded.
	pub default_pad_width: Option<u32>,
	/// Minimum batch size before encoding and sorting go parallel.
	pub parallel_threshold: usize,
}

impl Default for KeyEncoderConfig {
	fn default() -> Self {
		Self {
			default_pad_width: None,
			parallel_threshold: 4096,
		}
	}
}

impl KeyEncoderConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn default_pad_width(mut self, width: u32) -> Self {
		self.default_pad_width = Some(width);
		self
	}

	pub fn parallel_threshold(mut self, threshold: usize) -> Self {
		self.parallel_threshold = threshold;
		self
	}
}
