// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use tephra_column::{Column, ColumnData, ConstantColumn};
use tephra_column::container::BoolContainer;
use tephra_type::{BitVec, Type};

use crate::dispatch::check_arity;
use crate::{FunctionOptions, Result, ScalarFunction, ScalarFunctionContext};

const NAME: &str = "is_not_null";

/// True wherever the argument is not null. Handles nullable columns
/// itself rather than through the executor's null fast path, since the
/// null map IS the answer.
pub struct IsNotNull;

impl ScalarFunction for IsNotNull {
	fn name(&self) -> &'static str {
		NAME
	}

	fn signature(&self) -> &'static str {
		"is_not_null(value) -> bool"
	}

	fn options(&self) -> FunctionOptions {
		FunctionOptions {
			null_fast_path: false,
			..FunctionOptions::default()
		}
	}

	fn return_type(&self, argument_types: &[Type]) -> Result<Type> {
		check_arity(NAME, "1", argument_types.len(), |n| n == 1)?;
		Ok(Type::Bool)
	}

	fn execute(&self, ctx: ScalarFunctionContext) -> Result<Column> {
		check_arity(NAME, "1", ctx.columns.len(), |n| n == 1)?;
		match &ctx.columns[0] {
			Column::Nullable(nullable) => {
				let mut bits = BitVec::with_capacity(nullable.nulls().len());
				for is_null in nullable.nulls().iter() {
					bits.push(!is_null);
				}
				Ok(Column::Vector(ColumnData::Bool(BoolContainer::from_bitvec(bits))))
			}
			column if column.get_type().is_undefined() => {
				Ok(Column::Constant(ConstantColumn::new(ColumnData::bool([false]), ctx.row_count)))
			}
			_ => Ok(Column::Constant(ConstantColumn::new(ColumnData::bool([true]), ctx.row_count))),
		}
	}
}

#[cfg(test)]
mod tests {
	use tephra_column::{Columns, NullableColumn};

	use super::*;

	fn run(column: Column, row_count: usize) -> Column {
		let columns = Columns::new(vec![column]);
		IsNotNull
			.execute(ScalarFunctionContext {
				columns: &columns,
				row_count,
			})
			.unwrap()
	}

	#[test]
	fn test_nullable_negates_null_map() {
		let column = Column::Nullable(NullableColumn::new(
			ColumnData::int4([1, 0, 3]),
			BitVec::from_slice(&[false, true, false]),
		));
		let result = run(column, 3);
		let Column::Vector(ColumnData::Bool(values)) = result else {
			panic!("expected bool vector");
		};
		assert_eq!(values.to_vec(), vec![true, false, true]);
	}

	#[test]
	fn test_plain_column_is_constant_true() {
		let result = run(Column::Vector(ColumnData::int4([1, 2, 3])), 3);
		let Column::Constant(constant) = result else {
			panic!("expected constant");
		};
		assert_eq!(constant.rows(), 3);
		assert_eq!(constant.value(), true.into());
	}

	#[test]
	fn test_undefined_column_is_constant_false() {
		let result = run(Column::Vector(ColumnData::undefined(2)), 2);
		let Column::Constant(constant) = result else {
			panic!("expected constant");
		};
		assert_eq!(constant.value(), false.into());
	}
}
