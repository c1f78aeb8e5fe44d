// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use serde::{Deserialize, Serialize};
use tephra_type::BitVec;

/// Boolean storage packed into a bit vector.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoolContainer {
	data: BitVec,
}

impl BoolContainer {
	pub fn new(data: Vec<bool>) -> Self {
		Self {
			data: BitVec::from_slice(&data),
		}
	}

	pub fn from_bitvec(data: BitVec) -> Self {
		Self {
			data,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: BitVec::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: bool) {
		self.data.push(value);
	}

	pub fn get(&self, index: usize) -> Option<bool> {
		if index < self.data.len() {
			Some(self.data.get(index))
		} else {
			None
		}
	}

	pub fn reserve(&mut self, additional: usize) {
		self.data.reserve(additional);
	}

	pub fn extend_range(&mut self, other: &Self, start: usize, end: usize) {
		for index in start..end {
			self.data.push(other.data.get(index));
		}
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.data
	}

	pub fn to_vec(&self) -> Vec<bool> {
		self.data.to_vec()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_get() {
		let mut container = BoolContainer::with_capacity(2);
		container.push(true);
		container.push(false);

		assert_eq!(container.get(0), Some(true));
		assert_eq!(container.get(1), Some(false));
		assert_eq!(container.get(2), None);
	}

	#[test]
	fn test_extend_range() {
		let mut container = BoolContainer::new(vec![true]);
		let other = BoolContainer::new(vec![false, true, false]);
		container.extend_range(&other, 1, 3);

		assert_eq!(container.to_vec(), vec![true, true, false]);
	}
}
