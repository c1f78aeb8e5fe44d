// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use tephra_column::ColumnData;
use tephra_column::container::ArrayContainer;
use tephra_type::Type;

use crate::{FunctionError, Result};

/// Builds one segmented array column row by row.
///
/// Callers append zero or more element ranges, then close the row
/// exactly once. Appending elements of a type other than the one the
/// sink was created with is a caller bug and surfaces as
/// [`FunctionError::Logical`].
pub struct ArraySink {
	offsets: Vec<usize>,
	data: ColumnData,
}

impl ArraySink {
	pub fn new(element_type: &Type, rows: usize) -> Self {
		Self {
			offsets: Vec::with_capacity(rows),
			data: ColumnData::with_capacity(element_type, 0),
		}
	}

	/// Pre-sizes the element buffer for `total_elements` elements.
	pub fn reserve(&mut self, total_elements: usize) {
		self.data.reserve(total_elements);
	}

	/// Copies elements `start..end` of `source` into the open row.
	pub fn append_slice(&mut self, source: &ColumnData, start: usize, end: usize) -> Result<()> {
		self.data.extend_range(source, start, end).map_err(|error| FunctionError::Logical {
			message: format!("array sink element type mismatch: {error}"),
		})
	}

	pub fn close_row(&mut self) {
		self.offsets.push(self.data.len());
	}

	pub fn finish(self) -> ArrayContainer {
		ArrayContainer::new(self.offsets, self.data)
	}
}
