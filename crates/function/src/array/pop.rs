// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use tephra_column::{Column, ColumnData};
use tephra_type::Type;

use crate::dispatch::check_arity;
use crate::gather::{
	ArraySink, ArraySource, slice_from_left_constant_offset_bounded, slice_from_left_constant_offset_unbounded,
};
use crate::{FunctionError, FunctionOptions, Result, ScalarFunction, ScalarFunctionContext};

/// Drops the first (`array_pop_front`) or last (`array_pop_back`)
/// element of every row. Empty rows stay empty.
pub struct ArrayPop {
	name: &'static str,
	signature: &'static str,
	pop_front: bool,
}

impl ArrayPop {
	pub fn front() -> Self {
		Self {
			name: "array_pop_front",
			signature: "array_pop_front(array) -> array",
			pop_front: true,
		}
	}

	pub fn back() -> Self {
		Self {
			name: "array_pop_back",
			signature: "array_pop_back(array) -> array",
			pop_front: false,
		}
	}
}

impl ScalarFunction for ArrayPop {
	fn name(&self) -> &'static str {
		self.name
	}

	fn signature(&self) -> &'static str {
		self.signature
	}

	fn options(&self) -> FunctionOptions {
		FunctionOptions {
			null_fast_path: false,
			..FunctionOptions::default()
		}
	}

	fn return_type(&self, argument_types: &[Type]) -> Result<Type> {
		check_arity(self.name, "1", argument_types.len(), |n| n == 1)?;
		match &argument_types[0] {
			Type::Array(_) => Ok(argument_types[0].clone()),
			Type::Undefined => Ok(Type::Undefined),
			other => Err(FunctionError::UnsupportedColumnType {
				function: self.name,
				argument: 0,
				actual: other.clone(),
			}),
		}
	}

	fn execute(&self, ctx: ScalarFunctionContext) -> Result<Column> {
		check_arity(self.name, "1", ctx.columns.len(), |n| n == 1)?;
		let mut source = ArraySource::from_column(&ctx.columns[0], self.name, 0)?;
		let mut sink = ArraySink::new(&source.element_type(), ctx.row_count);
		sink.reserve(source.total_elements());
		if self.pop_front {
			slice_from_left_constant_offset_unbounded(&mut source, &mut sink, 1)?;
		} else {
			slice_from_left_constant_offset_bounded(&mut source, &mut sink, 0, -1)?;
		}
		Ok(Column::Vector(ColumnData::array(sink.finish())))
	}
}
