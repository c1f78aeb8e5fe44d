// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use serde::{Deserialize, Serialize};
use tephra_type::{Type, Value};

use crate::{data::ColumnData, error::ColumnError};

/// Segmented storage for one array per row: a flat element buffer plus one
/// end offset per row.
///
/// Row `i` occupies `[offsets[i-1], offsets[i])` of the element buffer
/// (`offsets[-1]` reads as 0), so offsets are monotone and the last offset
/// equals the buffer length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayContainer {
	offsets: Vec<usize>,
	data: Box<ColumnData>,
}

impl ArrayContainer {
	pub fn new(offsets: Vec<usize>, data: ColumnData) -> Self {
		debug_assert!(offsets.windows(2).all(|pair| pair[0] <= pair[1]));
		debug_assert_eq!(offsets.last().copied().unwrap_or(0), data.len());
		Self {
			offsets,
			data: Box::new(data),
		}
	}

	pub fn with_capacity(element_type: &Type, rows: usize) -> Self {
		Self {
			offsets: Vec::with_capacity(rows),
			data: Box::new(ColumnData::with_capacity(element_type, 0)),
		}
	}

	/// Build from per-row element columns; rows may be empty.
	pub fn from_rows(element_type: &Type, rows: Vec<ColumnData>) -> Result<Self, ColumnError> {
		let mut container = Self::with_capacity(element_type, rows.len());
		for row in rows {
			container.data.extend_range(&row, 0, row.len())?;
			container.offsets.push(container.data.len());
		}
		Ok(container)
	}

	pub fn row_count(&self) -> usize {
		self.offsets.len()
	}

	pub fn element_type(&self) -> Type {
		self.data.get_type()
	}

	pub fn offsets(&self) -> &[usize] {
		&self.offsets
	}

	pub fn data(&self) -> &ColumnData {
		&self.data
	}

	/// Half-open element range of row `index`.
	pub fn row_range(&self, index: usize) -> (usize, usize) {
		let start = if index == 0 {
			0
		} else {
			self.offsets[index - 1]
		};
		(start, self.offsets[index])
	}

	pub fn row_len(&self, index: usize) -> usize {
		let (start, end) = self.row_range(index);
		end - start
	}

	pub fn row_values(&self, index: usize) -> Vec<Value> {
		let (start, end) = self.row_range(index);
		(start..end).map(|element| self.data.get_value(element)).collect()
	}

	/// Append rows `start..end` of `other`, elements and boundaries.
	pub fn extend_range(&mut self, other: &Self, start: usize, end: usize) -> Result<(), ColumnError> {
		for row in start..end {
			let (row_start, row_end) = other.row_range(row);
			self.data.extend_range(&other.data, row_start, row_end)?;
			self.offsets.push(self.data.len());
		}
		Ok(())
	}
}
