// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use crate::{data::ColumnData, error::ColumnError};

impl ColumnData {
	/// Append rows `start..end` of `other` to this buffer.
	///
	/// Both sides must already have the same concrete type; unifying types
	/// is the coercion layer's job and a mismatch here is a caller
	/// contract breach surfaced as [`ColumnError::TypeMismatch`].
	pub fn extend_range(&mut self, other: &ColumnData, start: usize, end: usize) -> Result<(), ColumnError> {
		debug_assert!(start <= end && end <= other.len());
		match (&mut *self, other) {
			(ColumnData::Bool(l), ColumnData::Bool(r)) => l.extend_range(r, start, end),
			(ColumnData::Float4(l), ColumnData::Float4(r)) => l.extend_range(r, start, end),
			(ColumnData::Float8(l), ColumnData::Float8(r)) => l.extend_range(r, start, end),
			(ColumnData::Int1(l), ColumnData::Int1(r)) => l.extend_range(r, start, end),
			(ColumnData::Int2(l), ColumnData::Int2(r)) => l.extend_range(r, start, end),
			(ColumnData::Int4(l), ColumnData::Int4(r)) => l.extend_range(r, start, end),
			(ColumnData::Int8(l), ColumnData::Int8(r)) => l.extend_range(r, start, end),
			(ColumnData::Uint1(l), ColumnData::Uint1(r)) => l.extend_range(r, start, end),
			(ColumnData::Uint2(l), ColumnData::Uint2(r)) => l.extend_range(r, start, end),
			(ColumnData::Uint4(l), ColumnData::Uint4(r)) => l.extend_range(r, start, end),
			(ColumnData::Uint8(l), ColumnData::Uint8(r)) => l.extend_range(r, start, end),
			(ColumnData::Utf8(l), ColumnData::Utf8(r)) => l.extend_range(r, start, end),
			(ColumnData::Date(l), ColumnData::Date(r)) => l.extend_range(r, start, end),
			(ColumnData::DateTime(l), ColumnData::DateTime(r)) => l.extend_range(r, start, end),
			(ColumnData::Array(l), ColumnData::Array(r)) => {
				return l.extend_range(r, start, end);
			}
			(ColumnData::Undefined(l), ColumnData::Undefined(_)) => l.extend(end - start),
			(l, r) => {
				return Err(ColumnError::TypeMismatch {
					expected: l.get_type(),
					actual: r.get_type(),
				});
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_same_type() {
		let mut left = ColumnData::int4([1, 2]);
		let right = ColumnData::int4([3, 4, 5]);
		left.extend_range(&right, 0, 3).unwrap();
		assert_eq!(left, ColumnData::int4([1, 2, 3, 4, 5]));
	}

	#[test]
	fn test_sub_range() {
		let mut left = ColumnData::utf8(["a"]);
		let right = ColumnData::utf8(["b", "c", "d"]);
		left.extend_range(&right, 1, 2).unwrap();
		assert_eq!(left, ColumnData::utf8(["a", "c"]));
	}

	#[test]
	fn test_type_mismatch() {
		let mut left = ColumnData::int4([1]);
		let right = ColumnData::int8([2]);
		let err = left.extend_range(&right, 0, 1).unwrap_err();
		assert!(matches!(err, ColumnError::TypeMismatch { .. }));
	}

	#[test]
	fn test_nested_arrays() {
		use crate::container::ArrayContainer;
		use tephra_type::Type;

		// one row: [[1], [2, 3]]
		let inner = ArrayContainer::new(vec![1, 3], ColumnData::int4([1, 2, 3]));
		let outer = ColumnData::Array(ArrayContainer::new(vec![2], ColumnData::Array(inner)));

		let mut sink = ColumnData::with_capacity(&Type::Array(Box::new(Type::Array(Box::new(Type::Int4)))), 0);
		sink.extend_range(&outer, 0, 1).unwrap();
		assert_eq!(sink.len(), 1);
		assert_eq!(sink, outer);
	}
}
