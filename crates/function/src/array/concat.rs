// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use tephra_column::{Column, ColumnData, cast_column};
use tephra_type::{Type, least_supertype};

use crate::dispatch::check_arity;
use crate::gather::{ArraySink, ArraySource, concat};
use crate::{FunctionError, Result, ScalarFunction, ScalarFunctionContext};

const NAME: &str = "array_concat";

/// Concatenates N arrays row-wise. Element types are unified to their
/// least common supertype before gathering.
pub struct ArrayConcat;

impl ScalarFunction for ArrayConcat {
	fn name(&self) -> &'static str {
		NAME
	}

	fn signature(&self) -> &'static str {
		"array_concat(array, ...) -> array"
	}

	fn return_type(&self, argument_types: &[Type]) -> Result<Type> {
		check_arity(NAME, "at least 1", argument_types.len(), |n| n >= 1)?;
		let mut element_types = Vec::with_capacity(argument_types.len());
		for (argument, ty) in argument_types.iter().enumerate() {
			match ty {
				Type::Array(element) => element_types.push((**element).clone()),
				Type::Undefined => element_types.push(Type::Undefined),
				other => {
					return Err(FunctionError::UnsupportedColumnType {
						function: NAME,
						argument,
						actual: other.clone(),
					});
				}
			}
		}
		let element = least_supertype(&element_types)?;
		if element.is_undefined() {
			Ok(Type::Undefined)
		} else {
			Ok(Type::Array(Box::new(element)))
		}
	}

	fn execute(&self, ctx: ScalarFunctionContext) -> Result<Column> {
		let columns = ctx.columns;
		let return_type = self.return_type(&columns.types())?;

		// Unify element types up front so every source feeds the sink
		// the exact element type. Arguments already at the target type
		// are read in place.
		let coerced: Vec<Option<Column>> = columns
			.iter()
			.map(|column| {
				if column.get_type() == return_type {
					Ok(None)
				} else {
					cast_column(column.clone(), &return_type).map(Some).map_err(FunctionError::from)
				}
			})
			.collect::<Result<_>>()?;

		let mut sources = Vec::with_capacity(columns.len());
		for (argument, column) in columns.iter().enumerate() {
			let source_column = coerced[argument].as_ref().unwrap_or(column);
			sources.push(ArraySource::from_column(source_column, NAME, argument)?);
		}

		let element_type = match return_type.unwrap_array() {
			Some(element) => element.clone(),
			None => {
				return Err(FunctionError::Logical {
					message: format!("`{NAME}` resolved a non-array return type {return_type}"),
				});
			}
		};
		let mut sink = ArraySink::new(&element_type, ctx.row_count);
		sink.reserve(sources.iter().map(ArraySource::total_elements).sum());
		concat(&mut sources, &mut sink)?;
		Ok(Column::Vector(ColumnData::array(sink.finish())))
	}
}
