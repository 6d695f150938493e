// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	ops::Deref,
};

use memkey_type::util::CowVec;

/// An encoded row key. Keys of one layout compare like the rows they encode.
#[derive(Debug, Clone, PartialOrd, Ord, Hash, PartialEq, Eq)]
pub struct EncodedKey(pub CowVec<u8>);

impl Deref for EncodedKey {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		self.0.as_slice()
	}
}

impl EncodedKey {
	pub fn new(key: impl Into<Vec<u8>>) -> Self {
		Self(CowVec::new(key.into()))
	}

	pub fn as_bytes(&self) -> &[u8] {
		self.0.as_slice()
	}

	pub fn into_vec(self) -> Vec<u8> {
		self.0.into_vec()
	}
}

impl AsRef<[u8]> for EncodedKey {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl From<Vec<u8>> for EncodedKey {
	fn from(key: Vec<u8>) -> Self {
		Self::new(key)
	}
}

impl Display for EncodedKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for byte in self.as_bytes() {
			write!(f, "{byte:02x}")?;
		}
		Ok(())
	}
}

/// Unsigned lexicographic comparison. The first differing byte decides; a
/// strict prefix sorts first.
#[inline]
pub fn compare_bytes(a: &[u8], b: &[u8]) -> Ordering {
	a.cmp(b)
}
