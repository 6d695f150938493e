// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	hash::{Hash, Hasher},
	ops::Deref,
	sync::Arc,
};

/// A vector that is either owned or shared behind an `Arc`. Shared vectors
/// clone without copying.
///
/// Equality, ordering and hashing look at the elements only, never at whether
/// the storage is owned or shared.
#[derive(Clone, Debug)]
pub enum CowVec<T>
where
	T: Clone,
{
	Owned(Vec<T>),
	Shared(Arc<Vec<T>>),
}

impl<T> CowVec<T>
where
	T: Clone,
{
	pub fn new(vec: Vec<T>) -> Self {
		CowVec::Owned(vec)
	}

	pub fn from_shared(shared: Arc<Vec<T>>) -> Self {
		CowVec::Shared(shared)
	}

	pub fn as_slice(&self) -> &[T] {
		match self {
			CowVec::Owned(vec) => vec,
			CowVec::Shared(shared) => shared,
		}
	}

	/// Converts an owned vector into a shared one so further clones are free.
	pub fn share(&mut self) {
		if let CowVec::Owned(vec) = self {
			*self = CowVec::Shared(Arc::new(std::mem::take(vec)));
		}
	}

	pub fn into_vec(self) -> Vec<T> {
		match self {
			CowVec::Owned(vec) => vec,
			CowVec::Shared(shared) => Arc::unwrap_or_clone(shared),
		}
	}
}

impl<T> Deref for CowVec<T>
where
	T: Clone,
{
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.as_slice()
	}
}

impl<T: Clone + PartialEq> PartialEq for CowVec<T> {
	fn eq(&self, other: &Self) -> bool {
		self.as_slice() == other.as_slice()
	}
}

impl<T: Clone + Eq> Eq for CowVec<T> {}

impl<T: Clone + PartialOrd> PartialOrd for CowVec<T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.as_slice().partial_cmp(other.as_slice())
	}
}

impl<T: Clone + Ord> Ord for CowVec<T> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.as_slice().cmp(other.as_slice())
	}
}

impl<T: Clone + Hash> Hash for CowVec<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_slice().hash(state);
	}
}

impl<T: Clone> Default for CowVec<T> {
	fn default() -> Self {
		CowVec::Owned(Vec::new())
	}
}

impl<T> From<Vec<T>> for CowVec<T>
where
	T: Clone,
{
	fn from(vec: Vec<T>) -> Self {
		CowVec::Owned(vec)
	}
}
