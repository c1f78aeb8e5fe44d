// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

pub mod convert;
pub mod date;
pub mod datetime;
pub mod is;
pub mod timezone;
pub mod r#type;
pub mod unit;

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::{date::Date, datetime::DateTime, r#type::Type};

/// A single scalar value of any supported type.
///
/// `Undefined` doubles as the value of the "only null" type: a column whose
/// every row is null has type [`Type::Undefined`] and carries this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
	Undefined,
	Bool(bool),
	Float4(f32),
	Float8(f64),
	Int1(i8),
	Int2(i16),
	Int4(i32),
	Int8(i64),
	Uint1(u8),
	Uint2(u16),
	Uint4(u32),
	Uint8(u64),
	Utf8(String),
	Date(Date),
	DateTime(DateTime),
	Array(Vec<Value>),
}

impl Value {
	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Bool(_) => Type::Bool,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Uint1(_) => Type::Uint1,
			Value::Uint2(_) => Type::Uint2,
			Value::Uint4(_) => Type::Uint4,
			Value::Uint8(_) => Type::Uint8,
			Value::Utf8(_) => Type::Utf8,
			Value::Date(_) => Type::Date,
			Value::DateTime(_) => Type::DateTime,
			Value::Array(values) => {
				let inner = values.first().map(Value::get_type).unwrap_or(Type::Undefined);
				Type::Array(Box::new(inner))
			}
		}
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}
}

macro_rules! impl_value_from {
	($($ty:ty => $variant:ident),+ $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Value::$variant(value)
				}
			}
		)+
	};
}

impl_value_from!(
	bool => Bool,
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
	String => Utf8,
	Date => Date,
	DateTime => DateTime,
);

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Utf8(value.to_string())
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Undefined => write!(f, "undefined"),
			Value::Bool(v) => write!(f, "{}", v),
			Value::Float4(v) => write!(f, "{}", v),
			Value::Float8(v) => write!(f, "{}", v),
			Value::Int1(v) => write!(f, "{}", v),
			Value::Int2(v) => write!(f, "{}", v),
			Value::Int4(v) => write!(f, "{}", v),
			Value::Int8(v) => write!(f, "{}", v),
			Value::Uint1(v) => write!(f, "{}", v),
			Value::Uint2(v) => write!(f, "{}", v),
			Value::Uint4(v) => write!(f, "{}", v),
			Value::Uint8(v) => write!(f, "{}", v),
			Value::Utf8(v) => write!(f, "{}", v),
			Value::Date(v) => write!(f, "{}", v),
			Value::DateTime(v) => write!(f, "{}", v),
			Value::Array(values) => {
				write!(f, "[")?;
				for (idx, value) in values.iter().enumerate() {
					if idx > 0 {
						write!(f, ", ")?;
					}
					write!(f, "{}", value)?;
				}
				write!(f, "]")
			}
		}
	}
}
