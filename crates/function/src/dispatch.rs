// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

//! Argument resolution for the inner per-function dispatch.
//!
//! A function body asks for each argument as a [`ResolvedArg`] of a
//! concrete scalar type. Vector columns resolve to a borrowed slice,
//! constant columns to a single value read once, so the per-row loop
//! stays branch-free over the shape.

use tephra_column::{Column, ColumnData};
use tephra_type::{Date, DateTime, Type};

use crate::{FunctionError, Result};

/// A typed view of one argument column: either one value per row or a
/// single value standing for every row.
#[derive(Debug, Clone, Copy)]
pub enum ResolvedArg<'a, T: Copy> {
	Vector(&'a [T]),
	Constant(T),
}

impl<'a, T: Copy> ResolvedArg<'a, T> {
	#[inline]
	pub fn get(&self, row: usize) -> T {
		match self {
			ResolvedArg::Vector(values) => values[row],
			ResolvedArg::Constant(value) => *value,
		}
	}

	pub fn is_constant(&self) -> bool {
		matches!(self, ResolvedArg::Constant(_))
	}
}

/// Scalar types that live in a plain slice inside some [`ColumnData`]
/// variant.
pub trait ScalarRepr: Copy {
	fn repr_type() -> Type;
	fn from_data(data: &ColumnData) -> Option<&[Self]>;
}

macro_rules! impl_scalar_repr {
	($($ty:ty => $variant:ident),+ $(,)?) => {
		$(
			impl ScalarRepr for $ty {
				fn repr_type() -> Type {
					Type::$variant
				}

				fn from_data(data: &ColumnData) -> Option<&[Self]> {
					match data {
						ColumnData::$variant(container) => Some(container.as_slice()),
						_ => None,
					}
				}
			}
		)+
	};
}

impl_scalar_repr! {
	f32 => Float4,
	f64 => Float8,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	Date => Date,
	DateTime => DateTime,
}

/// Resolves `column` as `T`, or `None` when the column holds a
/// different type. Function bodies cascade over the types they accept
/// in a fixed order and fail with [`unsupported_argument`] when no
/// candidate matches.
pub fn resolve<'a, T: ScalarRepr>(column: &'a Column) -> Option<ResolvedArg<'a, T>> {
	match column {
		Column::Vector(data) => T::from_data(data).map(ResolvedArg::Vector),
		Column::Constant(constant) => {
			T::from_data(constant.data()).map(|values| ResolvedArg::Constant(values[0]))
		}
		Column::Nullable(_) => None,
	}
}

pub fn unsupported_argument(function: &'static str, argument: usize, column: &Column) -> FunctionError {
	FunctionError::UnsupportedColumnType {
		function,
		argument,
		actual: column.get_type(),
	}
}

pub fn check_arity(function: &'static str, expected: &'static str, actual: usize, accept: impl Fn(usize) -> bool) -> Result<()> {
	if accept(actual) {
		Ok(())
	} else {
		Err(FunctionError::ArityMismatch {
			function,
			expected,
			actual,
		})
	}
}
