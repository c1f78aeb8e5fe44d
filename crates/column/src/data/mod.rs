// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

mod extend;
mod factory;

use serde::{Deserialize, Serialize};
use tephra_type::{Date, DateTime, Type, Value};

use crate::container::{
	ArrayContainer, BoolContainer, NumberContainer, TemporalContainer, UndefinedContainer, Utf8Container,
};

/// The flat value buffer of one column, tagged by concrete type.
///
/// This is the materialized (vector) representation; the constant shape lives
/// one level up in [`crate::column::Column`] and wraps a one-row buffer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(BoolContainer),
	Float4(NumberContainer<f32>),
	Float8(NumberContainer<f64>),
	Int1(NumberContainer<i8>),
	Int2(NumberContainer<i16>),
	Int4(NumberContainer<i32>),
	Int8(NumberContainer<i64>),
	Uint1(NumberContainer<u8>),
	Uint2(NumberContainer<u16>),
	Uint4(NumberContainer<u32>),
	Uint8(NumberContainer<u64>),
	Utf8(Utf8Container),
	Date(TemporalContainer<Date>),
	DateTime(TemporalContainer<DateTime>),
	Array(ArrayContainer),
	// special case: all undefined
	Undefined(UndefinedContainer),
}

impl ColumnData {
	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Bool,
			ColumnData::Float4(_) => Type::Float4,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Int1(_) => Type::Int1,
			ColumnData::Int2(_) => Type::Int2,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Uint1(_) => Type::Uint1,
			ColumnData::Uint2(_) => Type::Uint2,
			ColumnData::Uint4(_) => Type::Uint4,
			ColumnData::Uint8(_) => Type::Uint8,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Date(_) => Type::Date,
			ColumnData::DateTime(_) => Type::DateTime,
			ColumnData::Array(container) => Type::Array(Box::new(container.element_type())),
			ColumnData::Undefined(_) => Type::Undefined,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(container) => container.len(),
			ColumnData::Float4(container) => container.len(),
			ColumnData::Float8(container) => container.len(),
			ColumnData::Int1(container) => container.len(),
			ColumnData::Int2(container) => container.len(),
			ColumnData::Int4(container) => container.len(),
			ColumnData::Int8(container) => container.len(),
			ColumnData::Uint1(container) => container.len(),
			ColumnData::Uint2(container) => container.len(),
			ColumnData::Uint4(container) => container.len(),
			ColumnData::Uint8(container) => container.len(),
			ColumnData::Utf8(container) => container.len(),
			ColumnData::Date(container) => container.len(),
			ColumnData::DateTime(container) => container.len(),
			ColumnData::Array(container) => container.row_count(),
			ColumnData::Undefined(container) => container.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// An empty buffer of the given type with room for `capacity` rows.
	pub fn with_capacity(ty: &Type, capacity: usize) -> Self {
		match ty {
			Type::Bool => ColumnData::Bool(BoolContainer::with_capacity(capacity)),
			Type::Float4 => ColumnData::Float4(NumberContainer::with_capacity(capacity)),
			Type::Float8 => ColumnData::Float8(NumberContainer::with_capacity(capacity)),
			Type::Int1 => ColumnData::Int1(NumberContainer::with_capacity(capacity)),
			Type::Int2 => ColumnData::Int2(NumberContainer::with_capacity(capacity)),
			Type::Int4 => ColumnData::Int4(NumberContainer::with_capacity(capacity)),
			Type::Int8 => ColumnData::Int8(NumberContainer::with_capacity(capacity)),
			Type::Uint1 => ColumnData::Uint1(NumberContainer::with_capacity(capacity)),
			Type::Uint2 => ColumnData::Uint2(NumberContainer::with_capacity(capacity)),
			Type::Uint4 => ColumnData::Uint4(NumberContainer::with_capacity(capacity)),
			Type::Uint8 => ColumnData::Uint8(NumberContainer::with_capacity(capacity)),
			Type::Utf8 => ColumnData::Utf8(Utf8Container::with_capacity(capacity)),
			Type::Date => ColumnData::Date(TemporalContainer::with_capacity(capacity)),
			Type::DateTime => ColumnData::DateTime(TemporalContainer::with_capacity(capacity)),
			Type::Array(inner) => ColumnData::Array(ArrayContainer::with_capacity(inner, capacity)),
			Type::Undefined => ColumnData::Undefined(UndefinedContainer::new(0)),
		}
	}

	/// One row holding the global default value of the given type:
	/// `false`, `0`, the empty string, the epoch, the empty array.
	pub fn default_of(ty: &Type) -> Self {
		match ty {
			Type::Bool => ColumnData::bool([false]),
			Type::Float4 => ColumnData::float4([0.0]),
			Type::Float8 => ColumnData::float8([0.0]),
			Type::Int1 => ColumnData::int1([0]),
			Type::Int2 => ColumnData::int2([0]),
			Type::Int4 => ColumnData::int4([0]),
			Type::Int8 => ColumnData::int8([0]),
			Type::Uint1 => ColumnData::uint1([0]),
			Type::Uint2 => ColumnData::uint2([0]),
			Type::Uint4 => ColumnData::uint4([0]),
			Type::Uint8 => ColumnData::uint8([0]),
			Type::Utf8 => ColumnData::utf8([""]),
			Type::Date => ColumnData::date([Date::default()]),
			Type::DateTime => ColumnData::datetime([DateTime::default()]),
			Type::Array(inner) => ColumnData::Array(ArrayContainer::new(
				vec![0],
				ColumnData::with_capacity(inner, 0),
			)),
			Type::Undefined => ColumnData::undefined(1),
		}
	}

	pub fn reserve(&mut self, additional: usize) {
		match self {
			ColumnData::Bool(container) => container.reserve(additional),
			ColumnData::Float4(container) => container.reserve(additional),
			ColumnData::Float8(container) => container.reserve(additional),
			ColumnData::Int1(container) => container.reserve(additional),
			ColumnData::Int2(container) => container.reserve(additional),
			ColumnData::Int4(container) => container.reserve(additional),
			ColumnData::Int8(container) => container.reserve(additional),
			ColumnData::Uint1(container) => container.reserve(additional),
			ColumnData::Uint2(container) => container.reserve(additional),
			ColumnData::Uint4(container) => container.reserve(additional),
			ColumnData::Uint8(container) => container.reserve(additional),
			ColumnData::Utf8(container) => container.reserve(additional),
			ColumnData::Date(container) => container.reserve(additional),
			ColumnData::DateTime(container) => container.reserve(additional),
			ColumnData::Array(_) | ColumnData::Undefined(_) => {}
		}
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self {
			ColumnData::Bool(container) => {
				container.get(index).map(Value::Bool).unwrap_or(Value::Undefined)
			}
			ColumnData::Float4(container) => {
				container.get(index).map(|&v| Value::Float4(v)).unwrap_or(Value::Undefined)
			}
			ColumnData::Float8(container) => {
				container.get(index).map(|&v| Value::Float8(v)).unwrap_or(Value::Undefined)
			}
			ColumnData::Int1(container) => {
				container.get(index).map(|&v| Value::Int1(v)).unwrap_or(Value::Undefined)
			}
			ColumnData::Int2(container) => {
				container.get(index).map(|&v| Value::Int2(v)).unwrap_or(Value::Undefined)
			}
			ColumnData::Int4(container) => {
				container.get(index).map(|&v| Value::Int4(v)).unwrap_or(Value::Undefined)
			}
			ColumnData::Int8(container) => {
				container.get(index).map(|&v| Value::Int8(v)).unwrap_or(Value::Undefined)
			}
			ColumnData::Uint1(container) => {
				container.get(index).map(|&v| Value::Uint1(v)).unwrap_or(Value::Undefined)
			}
			ColumnData::Uint2(container) => {
				container.get(index).map(|&v| Value::Uint2(v)).unwrap_or(Value::Undefined)
			}
			ColumnData::Uint4(container) => {
				container.get(index).map(|&v| Value::Uint4(v)).unwrap_or(Value::Undefined)
			}
			ColumnData::Uint8(container) => {
				container.get(index).map(|&v| Value::Uint8(v)).unwrap_or(Value::Undefined)
			}
			ColumnData::Utf8(container) => {
				container.get(index).map(|v| Value::Utf8(v.clone())).unwrap_or(Value::Undefined)
			}
			ColumnData::Date(container) => {
				container.get(index).map(|&v| Value::Date(v)).unwrap_or(Value::Undefined)
			}
			ColumnData::DateTime(container) => {
				container.get(index).map(|&v| Value::DateTime(v)).unwrap_or(Value::Undefined)
			}
			ColumnData::Array(container) => {
				if index < container.row_count() {
					Value::Array(container.row_values(index))
				} else {
					Value::Undefined
				}
			}
			ColumnData::Undefined(_) => Value::Undefined,
		}
	}

	pub fn as_array(&self) -> Option<&ArrayContainer> {
		match self {
			ColumnData::Array(container) => Some(container),
			_ => None,
		}
	}
}
