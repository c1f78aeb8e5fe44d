// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use std::fmt::{self, Debug, Formatter};

use serde::{Deserialize, Serialize};

/// A growable bit vector packed into bytes.
///
/// Bits past `len` are always zero, so equality can compare the raw bytes.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct BitVec {
	bits: Vec<u8>,
	len: usize,
}

impl BitVec {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			bits: Vec::with_capacity(capacity.div_ceil(8)),
			len: 0,
		}
	}

	pub fn from_slice(values: &[bool]) -> Self {
		let mut bitvec = Self::with_capacity(values.len());
		for &value in values {
			bitvec.push(value);
		}
		bitvec
	}

	pub fn repeat(value: bool, count: usize) -> Self {
		let mut bitvec = Self::with_capacity(count);
		for _ in 0..count {
			bitvec.push(value);
		}
		bitvec
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn reserve(&mut self, additional: usize) {
		self.bits.reserve(additional.div_ceil(8));
	}

	pub fn push(&mut self, value: bool) {
		let byte = self.len / 8;
		if byte == self.bits.len() {
			self.bits.push(0);
		}
		if value {
			self.bits[byte] |= 1 << (self.len % 8);
		}
		self.len += 1;
	}

	pub fn get(&self, index: usize) -> bool {
		debug_assert!(index < self.len);
		self.bits[index / 8] & (1 << (index % 8)) != 0
	}

	pub fn set(&mut self, index: usize, value: bool) {
		debug_assert!(index < self.len);
		if value {
			self.bits[index / 8] |= 1 << (index % 8);
		} else {
			self.bits[index / 8] &= !(1 << (index % 8));
		}
	}

	pub fn count_ones(&self) -> usize {
		self.bits.iter().map(|byte| byte.count_ones() as usize).sum()
	}

	pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
		(0..self.len).map(move |index| self.get(index))
	}

	/// Bitwise OR with another bit vector of the same length.
	pub fn union(&mut self, other: &BitVec) {
		debug_assert_eq!(self.len, other.len);
		for (byte, other_byte) in self.bits.iter_mut().zip(other.bits.iter()) {
			*byte |= other_byte;
		}
	}

	pub fn to_vec(&self) -> Vec<bool> {
		self.iter().collect()
	}
}

impl PartialEq for BitVec {
	fn eq(&self, other: &Self) -> bool {
		self.len == other.len && self.bits == other.bits
	}
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl FromIterator<bool> for BitVec {
	fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
		let mut bitvec = BitVec::new();
		for value in iter {
			bitvec.push(value);
		}
		bitvec
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_get() {
		let mut bitvec = BitVec::new();
		for i in 0..20 {
			bitvec.push(i % 3 == 0);
		}
		assert_eq!(bitvec.len(), 20);
		for i in 0..20 {
			assert_eq!(bitvec.get(i), i % 3 == 0);
		}
	}

	#[test]
	fn test_set_clears_and_sets() {
		let mut bitvec = BitVec::repeat(false, 10);
		bitvec.set(9, true);
		assert!(bitvec.get(9));
		bitvec.set(9, false);
		assert!(!bitvec.get(9));
	}

	#[test]
	fn test_count_ones() {
		let bitvec = BitVec::from_slice(&[true, false, true, true, false]);
		assert_eq!(bitvec.count_ones(), 3);
	}

	#[test]
	fn test_union() {
		let mut a = BitVec::from_slice(&[true, false, false, true]);
		let b = BitVec::from_slice(&[false, true, false, true]);
		a.union(&b);
		assert_eq!(a.to_vec(), vec![true, true, false, true]);
	}

	#[test]
	fn test_equality_across_block_boundary() {
		let a = BitVec::from_slice(&[true; 9]);
		let b = BitVec::from_slice(&[true; 9]);
		assert_eq!(a, b);
	}
}
