// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use std::ops::{Deref, Index};

use serde::{Deserialize, Serialize};

use crate::column::Column;

/// One batch of argument columns sharing a row count.
///
/// Constants report their virtual length, so the invariant holds across
/// shapes: every member answers the same `row_count`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Columns {
	columns: Vec<Column>,
}

impl Deref for Columns {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		self.columns.as_slice()
	}
}

impl Index<usize> for Columns {
	type Output = Column;

	fn index(&self, index: usize) -> &Self::Output {
		self.columns.index(index)
	}
}

impl Columns {
	pub fn new(columns: Vec<Column>) -> Self {
		let n = columns.first().map_or(0, |c| c.row_count());
		assert!(columns.iter().all(|c| c.row_count() == n), "all columns in a batch must share a row count");

		Self {
			columns,
		}
	}

	pub fn empty() -> Self {
		Self {
			columns: Vec::new(),
		}
	}

	pub fn row_count(&self) -> usize {
		self.columns.first().map_or(0, |c| c.row_count())
	}

	pub fn types(&self) -> Vec<tephra_type::Type> {
		self.columns.iter().map(Column::get_type).collect()
	}

	pub fn into_vec(self) -> Vec<Column> {
		self.columns
	}
}

impl IntoIterator for Columns {
	type Item = Column;
	type IntoIter = std::vec::IntoIter<Column>;

	fn into_iter(self) -> Self::IntoIter {
		self.columns.into_iter()
	}
}
