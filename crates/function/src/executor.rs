// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

//! The outer driver around [`ScalarFunction::execute`].
//!
//! Fast paths run in a fixed order before a function sees its
//! arguments:
//!   1. any argument of type undefined short-circuits to a constant
//!      undefined result (when the function allows the null path),
//!   2. nullable arguments are stripped, the function runs over the
//!      payloads, and the union of the null maps is re-applied,
//!   3. an undefined return type short-circuits to constant undefined,
//!   4. an all-constant batch is folded over a single row and the
//!      result wrapped back as a constant.

use tracing::debug;

use tephra_column::{Column, ColumnData, Columns, ConstantColumn, NullableColumn};
use tephra_type::BitVec;

use crate::registry::Functions;
use crate::{FunctionError, Result, ScalarFunction, ScalarFunctionContext};

/// Looks `name` up in `functions` and executes it over `columns`.
pub fn call(functions: &Functions, name: &str, columns: &Columns, row_count: usize) -> Result<Column> {
	let function = functions.get(name).ok_or_else(|| FunctionError::UnknownFunction {
		name: name.to_string(),
	})?;
	execute_function(function.as_ref(), columns, row_count)
}

/// Runs `function` over `columns`, applying the fast paths its
/// [`FunctionOptions`](crate::FunctionOptions) allow.
pub fn execute_function(function: &dyn ScalarFunction, columns: &Columns, row_count: usize) -> Result<Column> {
	let options = function.options();

	if options.null_fast_path {
		if columns.iter().any(|column| column.get_type().is_undefined()) {
			debug!(function = function.name(), "undefined argument, returning constant undefined");
			return Ok(Column::constant_undefined(row_count));
		}
		if columns.iter().any(Column::is_nullable) {
			return execute_stripping_nulls(function, columns, row_count);
		}
	}

	let return_type = function.return_type(&columns.types())?;
	if return_type.is_undefined() {
		debug!(function = function.name(), "undefined return type, returning constant undefined");
		return Ok(Column::constant_undefined(row_count));
	}

	if options.constant_fast_path && !columns.is_empty() && columns.iter().all(Column::is_constant) {
		return execute_folding_constants(function, columns, row_count);
	}

	debug!(function = function.name(), rows = row_count, "executing");
	function.execute(ScalarFunctionContext {
		columns,
		row_count,
	})
}

/// Runs the function over one row of unpacked constants and replicates
/// the single result row as a constant of `row_count` rows.
///
/// Arguments the function declares always-constant stay wrapped, with
/// their virtual length shrunk to the one folded row.
fn execute_folding_constants(function: &dyn ScalarFunction, columns: &Columns, row_count: usize) -> Result<Column> {
	debug!(function = function.name(), rows = row_count, "folding all-constant batch");
	let constant_arguments = function.options().constant_arguments;
	let unpacked = Columns::new(
		columns
			.iter()
			.enumerate()
			.map(|(argument, column)| match column {
				Column::Constant(constant) if constant_arguments.contains(&argument) => {
					Column::Constant(ConstantColumn::new(constant.data().clone(), 1))
				}
				Column::Constant(constant) => constant.unpack(),
				_ => unreachable!("constant fold requires an all-constant batch"),
			})
			.collect(),
	);
	let result = execute_function(function, &unpacked, 1)?;
	let data = match result {
		Column::Vector(data) => data,
		Column::Constant(constant) => constant.data().clone(),
		Column::Nullable(_) => {
			return Err(FunctionError::Logical {
				message: format!("`{}` produced a nullable column from non-nullable constants", function.name()),
			});
		}
	};
	if data.len() != 1 {
		return Err(FunctionError::Logical {
			message: format!("`{}` produced {} rows from a single-row fold", function.name(), data.len()),
		});
	}
	Ok(Column::Constant(ConstantColumn::new(data, row_count)))
}

/// Strips nullable wrappers, runs the function over the payloads, and
/// wraps the result with the union of the argument null maps.
fn execute_stripping_nulls(function: &dyn ScalarFunction, columns: &Columns, row_count: usize) -> Result<Column> {
	debug!(function = function.name(), rows = row_count, "stripping nullable arguments");
	let mut nulls = BitVec::repeat(false, row_count);
	let stripped = Columns::new(
		columns
			.iter()
			.map(|column| match column {
				Column::Nullable(nullable) => {
					nulls.union(nullable.nulls());
					Column::Vector(nullable.data().clone())
				}
				other => other.clone(),
			})
			.collect(),
	);

	let result = execute_function(function, &stripped, row_count)?;
	let data = materialize(result)?;
	Ok(Column::Nullable(NullableColumn::new(data, nulls)))
}

fn materialize(column: Column) -> Result<ColumnData> {
	match column {
		Column::Vector(data) => Ok(data),
		Column::Constant(constant) => constant.materialize().map_err(FunctionError::from),
		Column::Nullable(nullable) => {
			let (data, _) = nullable.into_parts();
			Ok(data)
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use tephra_type::{Type, Value};

	use super::*;
	use crate::FunctionOptions;
	use crate::registry::Functions;

	/// Adds its two int4 arguments. Exists to observe the fast paths.
	struct PlusInt4;

	impl ScalarFunction for PlusInt4 {
		fn name(&self) -> &'static str {
			"plus_int4"
		}

		fn signature(&self) -> &'static str {
			"plus_int4(int4, int4) -> int4"
		}

		fn return_type(&self, _argument_types: &[Type]) -> Result<Type> {
			Ok(Type::Int4)
		}

		fn execute(&self, ctx: ScalarFunctionContext) -> Result<Column> {
			let left = crate::dispatch::resolve::<i32>(&ctx.columns[0])
				.ok_or_else(|| crate::dispatch::unsupported_argument("plus_int4", 0, &ctx.columns[0]))?;
			let right = crate::dispatch::resolve::<i32>(&ctx.columns[1])
				.ok_or_else(|| crate::dispatch::unsupported_argument("plus_int4", 1, &ctx.columns[1]))?;
			let out: Vec<i32> = (0..ctx.row_count).map(|row| left.get(row) + right.get(row)).collect();
			Ok(Column::Vector(ColumnData::int4(out)))
		}
	}

	fn int4_vector(values: impl IntoIterator<Item = i32>) -> Column {
		Column::Vector(ColumnData::int4(values))
	}

	fn int4_constant(value: i32, rows: usize) -> Column {
		Column::Constant(ConstantColumn::new(ColumnData::int4([value]), rows))
	}

	#[test]
	fn test_plain_execution() {
		let columns = Columns::new(vec![int4_vector([1, 2]), int4_vector([10, 20])]);
		let result = execute_function(&PlusInt4, &columns, 2).unwrap();
		assert_eq!(result, Column::Vector(ColumnData::int4([11, 22])));
	}

	#[test]
	fn test_all_constant_batch_folds_to_constant() {
		let columns = Columns::new(vec![int4_constant(2, 5), int4_constant(3, 5)]);
		let result = execute_function(&PlusInt4, &columns, 5).unwrap();
		let Column::Constant(constant) = result else {
			panic!("expected constant result");
		};
		assert_eq!(constant.rows(), 5);
		assert_eq!(constant.value(), Value::Int4(5));
	}

	#[test]
	fn test_constant_fold_matches_materialized_execution() {
		let folded = execute_function(&PlusInt4, &Columns::new(vec![int4_constant(2, 3), int4_constant(3, 3)]), 3).unwrap();
		let materialized = execute_function(&PlusInt4, &Columns::new(vec![int4_vector([2, 2, 2]), int4_vector([3, 3, 3])]), 3).unwrap();
		let Column::Constant(constant) = folded else {
			panic!("expected constant result");
		};
		assert_eq!(Column::Vector(constant.materialize().unwrap()), materialized);
	}

	#[test]
	fn test_undefined_argument_short_circuits() {
		let columns = Columns::new(vec![int4_vector([1, 2]), Column::Vector(ColumnData::undefined(2))]);
		let result = execute_function(&PlusInt4, &columns, 2).unwrap();
		assert!(result.is_constant());
		assert_eq!(result.get_type(), Type::Undefined);
		assert_eq!(result.row_count(), 2);
	}

	#[test]
	fn test_nullable_arguments_are_stripped_and_rewrapped() {
		let left = Column::Nullable(NullableColumn::new(
			ColumnData::int4([1, 2, 3]),
			BitVec::from_slice(&[true, false, false]),
		));
		let right = Column::Nullable(NullableColumn::new(
			ColumnData::int4([10, 20, 30]),
			BitVec::from_slice(&[false, false, true]),
		));
		let result = execute_function(&PlusInt4, &Columns::new(vec![left, right]), 3).unwrap();
		let Column::Nullable(nullable) = result else {
			panic!("expected nullable result");
		};
		assert_eq!(nullable.nulls().to_vec(), vec![true, false, true]);
		assert_eq!(nullable.data(), &ColumnData::int4([11, 22, 33]));
	}

	#[test]
	fn test_nullable_mixed_with_constant() {
		let left = Column::Nullable(NullableColumn::new(
			ColumnData::int4([1, 2]),
			BitVec::from_slice(&[false, true]),
		));
		let result = execute_function(&PlusInt4, &Columns::new(vec![left, int4_constant(100, 2)]), 2).unwrap();
		let Column::Nullable(nullable) = result else {
			panic!("expected nullable result");
		};
		assert_eq!(nullable.nulls().to_vec(), vec![false, true]);
		assert_eq!(nullable.data().get_value(0), Value::Int4(101));
	}

	#[test]
	fn test_unknown_function_name() {
		let functions = Functions::new();
		let err = call(&functions, "nope", &Columns::empty(), 0).unwrap_err();
		assert_eq!(
			err,
			FunctionError::UnknownFunction {
				name: "nope".to_string(),
			}
		);
	}

	#[test]
	fn test_call_resolves_and_executes() {
		let mut functions = Functions::new();
		functions.register(Arc::new(PlusInt4));
		let columns = Columns::new(vec![int4_vector([1]), int4_vector([2])]);
		let result = call(&functions, "plus_int4", &columns, 1).unwrap();
		assert_eq!(result, Column::Vector(ColumnData::int4([3])));
	}

	/// A function that opts out of both fast paths and reports what it
	/// actually received.
	struct ShapeProbe;

	impl ScalarFunction for ShapeProbe {
		fn name(&self) -> &'static str {
			"shape_probe"
		}

		fn signature(&self) -> &'static str {
			"shape_probe(value) -> bool"
		}

		fn options(&self) -> FunctionOptions {
			FunctionOptions {
				constant_fast_path: false,
				null_fast_path: false,
				..FunctionOptions::default()
			}
		}

		fn return_type(&self, _argument_types: &[Type]) -> Result<Type> {
			Ok(Type::Bool)
		}

		fn execute(&self, ctx: ScalarFunctionContext) -> Result<Column> {
			Ok(Column::Vector(ColumnData::bool([ctx.columns[0].is_nullable()])))
		}
	}

	/// Requires a constant tag argument, the way a date difference
	/// requires its unit to be constant.
	struct TaggedIdentity;

	impl ScalarFunction for TaggedIdentity {
		fn name(&self) -> &'static str {
			"tagged_identity"
		}

		fn signature(&self) -> &'static str {
			"tagged_identity(tag, value) -> int4"
		}

		fn options(&self) -> FunctionOptions {
			FunctionOptions {
				constant_arguments: &[0],
				..FunctionOptions::default()
			}
		}

		fn return_type(&self, _argument_types: &[Type]) -> Result<Type> {
			Ok(Type::Int4)
		}

		fn execute(&self, ctx: ScalarFunctionContext) -> Result<Column> {
			if !ctx.columns[0].is_constant() {
				return Err(FunctionError::NonConstantArgument {
					function: "tagged_identity",
					argument: 0,
				});
			}
			let values = crate::dispatch::resolve::<i32>(&ctx.columns[1])
				.ok_or_else(|| crate::dispatch::unsupported_argument("tagged_identity", 1, &ctx.columns[1]))?;
			let out: Vec<i32> = (0..ctx.row_count).map(|row| values.get(row)).collect();
			Ok(Column::Vector(ColumnData::int4(out)))
		}
	}

	#[test]
	fn test_constant_fold_keeps_declared_constant_arguments_wrapped() {
		let columns = Columns::new(vec![
			Column::Constant(ConstantColumn::new(ColumnData::utf8(["tag"]), 4)),
			int4_constant(9, 4),
		]);
		let result = execute_function(&TaggedIdentity, &columns, 4).unwrap();
		let Column::Constant(constant) = result else {
			panic!("expected constant result");
		};
		assert_eq!(constant.rows(), 4);
		assert_eq!(constant.value(), Value::Int4(9));
	}

	#[test]
	fn test_opted_out_function_sees_nullable_columns() {
		let column = Column::Nullable(NullableColumn::new(ColumnData::int4([1]), BitVec::from_slice(&[false])));
		let result = execute_function(&ShapeProbe, &Columns::new(vec![column]), 1).unwrap();
		assert_eq!(result, Column::Vector(ColumnData::bool([true])));
	}
}
