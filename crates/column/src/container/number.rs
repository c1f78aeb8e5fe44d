// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tephra_type::IsNumber;

/// Flat storage for one fixed-width numeric type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberContainer<T>
where
	T: IsNumber,
{
	data: Vec<T>,
}

impl<T: IsNumber> Default for NumberContainer<T> {
	fn default() -> Self {
		Self {
			data: Vec::new(),
		}
	}
}

impl<T: IsNumber> Deref for NumberContainer<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.data.as_slice()
	}
}

impl<T: IsNumber> NumberContainer<T> {
	pub fn new(data: Vec<T>) -> Self {
		Self {
			data,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: T) {
		self.data.push(value);
	}

	pub fn push_default(&mut self) {
		self.data.push(T::default());
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		self.data.get(index)
	}

	pub fn reserve(&mut self, additional: usize) {
		self.data.reserve(additional);
	}

	pub fn extend_range(&mut self, other: &Self, start: usize, end: usize) {
		self.data.extend_from_slice(&other.data[start..end]);
	}

	pub fn as_slice(&self) -> &[T] {
		self.data.as_slice()
	}
}
