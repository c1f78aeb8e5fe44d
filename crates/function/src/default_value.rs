// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use tephra_column::Column;
use tephra_type::Type;

use crate::dispatch::check_arity;
use crate::{FunctionOptions, Result, ScalarFunction, ScalarFunctionContext};

const NAME: &str = "default_value_of_argument_type";

/// The default value of the argument's type, as a constant: zero for
/// numbers, empty string for text, the epoch for temporals, an empty
/// array for arrays. A nullable argument defaults to null.
pub struct DefaultValueOfArgumentType;

impl ScalarFunction for DefaultValueOfArgumentType {
	fn name(&self) -> &'static str {
		NAME
	}

	fn signature(&self) -> &'static str {
		"default_value_of_argument_type(value) -> value's type"
	}

	fn options(&self) -> FunctionOptions {
		FunctionOptions {
			null_fast_path: false,
			..FunctionOptions::default()
		}
	}

	fn return_type(&self, argument_types: &[Type]) -> Result<Type> {
		check_arity(NAME, "1", argument_types.len(), |n| n == 1)?;
		Ok(argument_types[0].clone())
	}

	fn execute(&self, ctx: ScalarFunctionContext) -> Result<Column> {
		check_arity(NAME, "1", ctx.columns.len(), |n| n == 1)?;
		match &ctx.columns[0] {
			Column::Nullable(_) => Ok(Column::constant_undefined(ctx.row_count)),
			column => Ok(Column::constant_default(&column.get_type(), ctx.row_count)),
		}
	}
}

#[cfg(test)]
mod tests {
	use tephra_column::container::ArrayContainer;
	use tephra_column::{ColumnData, Columns, NullableColumn};
	use tephra_type::{BitVec, Value};

	use super::*;

	fn run(column: Column, row_count: usize) -> Column {
		let columns = Columns::new(vec![column]);
		DefaultValueOfArgumentType
			.execute(ScalarFunctionContext {
				columns: &columns,
				row_count,
			})
			.unwrap()
	}

	#[test]
	fn test_number_defaults_to_zero() {
		let result = run(Column::Vector(ColumnData::int4([5, 6])), 2);
		assert!(result.is_constant());
		assert_eq!(result.row_count(), 2);
		assert_eq!(result.get_value(0), Value::Int4(0));
	}

	#[test]
	fn test_text_defaults_to_empty_string() {
		let result = run(Column::Vector(ColumnData::utf8(["a"])), 1);
		assert_eq!(result.get_value(0), Value::Utf8(String::new()));
	}

	#[test]
	fn test_array_defaults_to_empty_array() {
		let input = ColumnData::array(ArrayContainer::new(vec![2], ColumnData::int4([1, 2])));
		let result = run(Column::Vector(input), 1);
		assert_eq!(result.get_type(), Type::Array(Box::new(Type::Int4)));
		assert_eq!(result.get_value(0), Value::Array(vec![]));
	}

	#[test]
	fn test_nullable_defaults_to_null() {
		let column = Column::Nullable(NullableColumn::new(ColumnData::int4([1]), BitVec::from_slice(&[true])));
		let result = run(column, 1);
		assert_eq!(result.get_value(0), Value::Undefined);
	}
}
