// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

//! The coercion layer: element-wise conversion of a column to a target type
//! the caller has already resolved (least-supertype resolution happens
//! elsewhere and is not recomputed here).

use tephra_type::{DateTime, IsNumber, SafeConvert, Type, Value};

use crate::{
	column::{Column, ConstantColumn, NullableColumn},
	container::{ArrayContainer, NumberContainer, TemporalContainer},
	data::ColumnData,
	error::ColumnError,
};

/// Convert `column` to `target`, preserving its shape.
///
/// When the types already match the input is returned unchanged, without
/// copying.
pub fn cast_column(column: Column, target: &Type) -> Result<Column, ColumnError> {
	if column.get_type() == *target {
		return Ok(column);
	}

	match column {
		Column::Vector(data) => Ok(Column::Vector(cast_data(&data, target)?)),
		Column::Constant(constant) => {
			let data = cast_data(constant.data(), target)?;
			Ok(Column::Constant(ConstantColumn::new(data, constant.rows())))
		}
		Column::Nullable(nullable) => {
			let (data, nulls) = nullable.into_parts();
			Ok(Column::Nullable(NullableColumn::new(cast_data(&data, target)?, nulls)))
		}
	}
}

/// Convert a flat buffer to `target`, producing a new buffer.
pub fn cast_data(data: &ColumnData, target: &Type) -> Result<ColumnData, ColumnError> {
	if data.get_type() == *target {
		return Ok(data.clone());
	}

	match (data, target) {
		(ColumnData::Int1(c), _) => cast_number_data(c, &Type::Int1, target),
		(ColumnData::Int2(c), _) => cast_number_data(c, &Type::Int2, target),
		(ColumnData::Int4(c), _) => cast_number_data(c, &Type::Int4, target),
		(ColumnData::Int8(c), _) => cast_number_data(c, &Type::Int8, target),
		(ColumnData::Uint1(c), _) => cast_number_data(c, &Type::Uint1, target),
		(ColumnData::Uint2(c), _) => cast_number_data(c, &Type::Uint2, target),
		(ColumnData::Uint4(c), _) => cast_number_data(c, &Type::Uint4, target),
		(ColumnData::Uint8(c), _) => cast_number_data(c, &Type::Uint8, target),
		(ColumnData::Float4(c), _) => cast_number_data(c, &Type::Float4, target),
		(ColumnData::Float8(c), _) => cast_number_data(c, &Type::Float8, target),

		(ColumnData::Date(c), Type::DateTime) => {
			let mut out = TemporalContainer::with_capacity(c.len());
			for &date in c.as_slice() {
				out.push(DateTime::from_date(date));
			}
			Ok(ColumnData::DateTime(out))
		}

		// Offsets describe row boundaries, not values; only the flat
		// element buffer is converted.
		(ColumnData::Array(c), Type::Array(inner)) => Ok(ColumnData::Array(ArrayContainer::new(
			c.offsets().to_vec(),
			cast_data(c.data(), inner)?,
		))),

		_ => Err(ColumnError::UnsupportedCast {
			from: data.get_type(),
			to: target.clone(),
		}),
	}
}

fn cast_number_data<S>(container: &NumberContainer<S>, from: &Type, target: &Type) -> Result<ColumnData, ColumnError>
where
	S: IsNumber
		+ Into<Value>
		+ SafeConvert<f32>
		+ SafeConvert<f64>
		+ SafeConvert<i8>
		+ SafeConvert<i16>
		+ SafeConvert<i32>
		+ SafeConvert<i64>
		+ SafeConvert<u8>
		+ SafeConvert<u16>
		+ SafeConvert<u32>
		+ SafeConvert<u64>,
{
	Ok(match target {
		Type::Float4 => ColumnData::Float4(convert(container, from, target)?),
		Type::Float8 => ColumnData::Float8(convert(container, from, target)?),
		Type::Int1 => ColumnData::Int1(convert(container, from, target)?),
		Type::Int2 => ColumnData::Int2(convert(container, from, target)?),
		Type::Int4 => ColumnData::Int4(convert(container, from, target)?),
		Type::Int8 => ColumnData::Int8(convert(container, from, target)?),
		Type::Uint1 => ColumnData::Uint1(convert(container, from, target)?),
		Type::Uint2 => ColumnData::Uint2(convert(container, from, target)?),
		Type::Uint4 => ColumnData::Uint4(convert(container, from, target)?),
		Type::Uint8 => ColumnData::Uint8(convert(container, from, target)?),
		_ => {
			return Err(ColumnError::UnsupportedCast {
				from: from.clone(),
				to: target.clone(),
			});
		}
	})
}

fn convert<S, T>(container: &NumberContainer<S>, from: &Type, to: &Type) -> Result<NumberContainer<T>, ColumnError>
where
	S: IsNumber + SafeConvert<T> + Into<Value>,
	T: IsNumber,
{
	let mut out = NumberContainer::with_capacity(container.len());
	for &value in container.as_slice() {
		match value.checked_convert() {
			Some(converted) => out.push(converted),
			None => {
				return Err(ColumnError::OutOfRange {
					value: value.into(),
					from: from.clone(),
					to: to.clone(),
				});
			}
		}
	}
	Ok(out)
}
