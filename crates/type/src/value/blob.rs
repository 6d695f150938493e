// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	ops::Deref,
	sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::util::CowVec;

/// A variable-length byte string, ordered unsigned lexicographically.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<u8>", into = "Vec<u8>")]
pub struct Blob(CowVec<u8>);

impl Blob {
	/// Blobs never change after construction, so the bytes are shared
	/// between clones.
	pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
		Self(CowVec::from_shared(Arc::new(bytes.into())))
	}

	pub fn empty() -> Self {
		Self::default()
	}

	pub fn as_bytes(&self) -> &[u8] {
		self.0.as_slice()
	}

	pub fn to_utf8(&self) -> Option<&str> {
		std::str::from_utf8(self.as_bytes()).ok()
	}
}

impl Deref for Blob {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		self.as_bytes()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(bytes: Vec<u8>) -> Self {
		Self::new(bytes)
	}
}

impl From<&[u8]> for Blob {
	fn from(bytes: &[u8]) -> Self {
		Self::new(bytes.to_vec())
	}
}

impl From<Blob> for Vec<u8> {
	fn from(blob: Blob) -> Self {
		blob.0.into_vec()
	}
}

impl Display for Blob {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("0x")?;
		for byte in self.as_bytes() {
			write!(f, "{byte:02x}")?;
		}
		Ok(())
	}
}
