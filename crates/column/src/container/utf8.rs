// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// String storage, one owned string per row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Utf8Container {
	data: Vec<String>,
}

impl Deref for Utf8Container {
	type Target = [String];

	fn deref(&self) -> &Self::Target {
		self.data.as_slice()
	}
}

impl Utf8Container {
	pub fn new(data: Vec<String>) -> Self {
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

	pub fn push(&mut self, value: String) {
		self.data.push(value);
	}

	pub fn get(&self, index: usize) -> Option<&String> {
		self.data.get(index)
	}

	pub fn reserve(&mut self, additional: usize) {
		self.data.reserve(additional);
	}

	pub fn extend_range(&mut self, other: &Self, start: usize, end: usize) {
		self.data.extend_from_slice(&other.data[start..end]);
	}
}
