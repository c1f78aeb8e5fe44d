// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use serde::{Deserialize, Serialize};

/// Storage for the "only null" type: nothing but a row count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UndefinedContainer {
	len: usize,
}

impl UndefinedContainer {
	pub fn new(len: usize) -> Self {
		Self {
			len,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn push_undefined(&mut self) {
		self.len += 1;
	}

	pub fn extend(&mut self, count: usize) {
		self.len += count;
	}
}
