// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use serde::{Deserialize, Serialize};
use tephra_type::{BitVec, Type, Value};

use crate::data::ColumnData;

/// One argument or result column, in one of three shapes.
///
/// A constant is one physical row logically repeated; it is never expanded
/// into a vector except at the single point a caller explicitly asks for
/// materialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Column {
	Vector(ColumnData),
	Constant(ConstantColumn),
	Nullable(NullableColumn),
}

/// One value virtually repeated `rows` times.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstantColumn {
	data: ColumnData,
	rows: usize,
}

impl ConstantColumn {
	/// `data` must hold exactly one row.
	pub fn new(data: ColumnData, rows: usize) -> Self {
		assert_eq!(data.len(), 1, "constant column must wrap exactly one row");
		Self {
			data,
			rows,
		}
	}

	pub fn data(&self) -> &ColumnData {
		&self.data
	}

	pub fn rows(&self) -> usize {
		self.rows
	}

	pub fn value(&self) -> Value {
		self.data.get_value(0)
	}

	/// The single row as a one-row vector, keeping the virtual length
	/// aside. Used by the constant fast path to run a function once.
	pub fn unpack(&self) -> Column {
		Column::Vector(self.data.clone())
	}

	/// Expand into a materialized vector of `rows` physical rows.
	/// Only for callers that explicitly need materialization.
	pub fn materialize(&self) -> Result<ColumnData, crate::error::ColumnError> {
		let mut data = ColumnData::with_capacity(&self.data.get_type(), self.rows);
		for _ in 0..self.rows {
			data.extend_range(&self.data, 0, 1)?;
		}
		Ok(data)
	}
}

/// A vector column paired with a per-row null indicator; a set bit means the
/// row is null.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NullableColumn {
	data: ColumnData,
	nulls: BitVec,
}

impl NullableColumn {
	pub fn new(data: ColumnData, nulls: BitVec) -> Self {
		assert_eq!(data.len(), nulls.len(), "null indicator length must match column length");
		Self {
			data,
			nulls,
		}
	}

	pub fn data(&self) -> &ColumnData {
		&self.data
	}

	pub fn nulls(&self) -> &BitVec {
		&self.nulls
	}

	pub fn is_null(&self, index: usize) -> bool {
		self.nulls.get(index)
	}

	pub fn into_parts(self) -> (ColumnData, BitVec) {
		(self.data, self.nulls)
	}
}

impl Column {
	pub fn row_count(&self) -> usize {
		match self {
			Column::Vector(data) => data.len(),
			Column::Constant(constant) => constant.rows(),
			Column::Nullable(nullable) => nullable.data().len(),
		}
	}

	pub fn get_type(&self) -> Type {
		match self {
			Column::Vector(data) => data.get_type(),
			Column::Constant(constant) => constant.data().get_type(),
			Column::Nullable(nullable) => nullable.data().get_type(),
		}
	}

	pub fn is_constant(&self) -> bool {
		matches!(self, Column::Constant(_))
	}

	pub fn is_nullable(&self) -> bool {
		matches!(self, Column::Nullable(_))
	}

	/// Constant column of the given type's default value.
	pub fn constant_default(ty: &Type, rows: usize) -> Self {
		Column::Constant(ConstantColumn::new(ColumnData::default_of(ty), rows))
	}

	/// Constant column where every row is null.
	pub fn constant_undefined(rows: usize) -> Self {
		Column::Constant(ConstantColumn::new(ColumnData::undefined(1), rows))
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self {
			Column::Vector(data) => data.get_value(index),
			Column::Constant(constant) => {
				if index < constant.rows() {
					constant.value()
				} else {
					Value::Undefined
				}
			}
			Column::Nullable(nullable) => {
				if index < nullable.data().len() && !nullable.is_null(index) {
					nullable.data().get_value(index)
				} else {
					Value::Undefined
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_constant_reports_virtual_length() {
		let column = Column::Constant(ConstantColumn::new(ColumnData::int4([7]), 1000));
		assert_eq!(column.row_count(), 1000);
		assert_eq!(column.get_value(999), Value::Int4(7));
		assert_eq!(column.get_value(1000), Value::Undefined);
	}

	#[test]
	fn test_materialize_matches_virtual_rows() {
		let constant = ConstantColumn::new(ColumnData::utf8(["x"]), 3);
		assert_eq!(constant.materialize().unwrap(), ColumnData::utf8(["x", "x", "x"]));
	}

	#[test]
	fn test_nullable_values() {
		let nullable = NullableColumn::new(ColumnData::int4([1, 2, 3]), BitVec::from_slice(&[false, true, false]));
		let column = Column::Nullable(nullable);
		assert_eq!(column.get_value(0), Value::Int4(1));
		assert_eq!(column.get_value(1), Value::Undefined);
		assert_eq!(column.get_value(2), Value::Int4(3));
	}
}
