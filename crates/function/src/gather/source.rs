// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use tephra_column::{Column, ColumnData};
use tephra_column::container::ArrayContainer;
use tephra_type::Type;

use crate::dispatch::unsupported_argument;
use crate::Result;

/// A forward cursor over the rows of one array argument.
///
/// A constant source reports the column's logical row count but always
/// reads physical row zero, so callers iterate constants and vectors
/// with the same loop.
#[derive(Debug)]
pub struct ArraySource<'a> {
	array: &'a ArrayContainer,
	is_const: bool,
	row_count: usize,
	row: usize,
}

impl<'a> ArraySource<'a> {
	pub fn from_column(column: &'a Column, function: &'static str, argument: usize) -> Result<Self> {
		match column {
			Column::Vector(ColumnData::Array(array)) => Ok(Self {
				array,
				is_const: false,
				row_count: array.row_count(),
				row: 0,
			}),
			Column::Constant(constant) => match constant.data() {
				ColumnData::Array(array) => Ok(Self {
					array,
					is_const: true,
					row_count: constant.rows(),
					row: 0,
				}),
				_ => Err(unsupported_argument(function, argument, column)),
			},
			_ => Err(unsupported_argument(function, argument, column)),
		}
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}

	pub fn is_const(&self) -> bool {
		self.is_const
	}

	fn physical_row(&self) -> usize {
		if self.is_const {
			0
		} else {
			self.row
		}
	}

	/// Element range of the current row within [`Self::data`].
	pub fn row_range(&self) -> (usize, usize) {
		self.array.row_range(self.physical_row())
	}

	pub fn row_len(&self) -> usize {
		self.array.row_len(self.physical_row())
	}

	/// The shared element buffer all rows slice into.
	pub fn data(&self) -> &ColumnData {
		self.array.data()
	}

	pub fn element_type(&self) -> Type {
		self.array.element_type()
	}

	/// Elements this source will contribute if every row is copied
	/// whole. Used for sink pre-reservation.
	pub fn total_elements(&self) -> usize {
		if self.is_const {
			self.array.row_len(0) * self.row_count
		} else {
			self.array.data().len()
		}
	}

	pub fn advance(&mut self) {
		self.row += 1;
	}
}
