// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The closed set of concrete column types.
///
/// `Undefined` is the "only null" type: a column of this type can never hold
/// anything but null, and functions short-circuit on it before dispatching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	Bool,
	Float4,
	Float8,
	Int1,
	Int2,
	Int4,
	Int8,
	Uint1,
	Uint2,
	Uint4,
	Uint8,
	Utf8,
	Date,
	DateTime,
	Array(Box<Type>),
	Undefined,
}

impl Type {
	pub fn is_number(&self) -> bool {
		self.is_integer() || self.is_float()
	}

	pub fn is_float(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_integer(&self) -> bool {
		self.is_signed_integer() || self.is_unsigned_integer()
	}

	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, Type::Date | Type::DateTime)
	}

	pub fn is_array(&self) -> bool {
		matches!(self, Type::Array(_))
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Type::Undefined)
	}

	/// Byte width of integer types, `None` for everything else.
	pub fn integer_width(&self) -> Option<u8> {
		match self {
			Type::Int1 | Type::Uint1 => Some(1),
			Type::Int2 | Type::Uint2 => Some(2),
			Type::Int4 | Type::Uint4 => Some(4),
			Type::Int8 | Type::Uint8 => Some(8),
			_ => None,
		}
	}

	/// The signed integer type of the given byte width, if one exists.
	pub fn signed_of_width(width: u8) -> Option<Type> {
		match width {
			1 => Some(Type::Int1),
			2 => Some(Type::Int2),
			4 => Some(Type::Int4),
			8 => Some(Type::Int8),
			_ => None,
		}
	}

	/// Element type of an array type.
	pub fn unwrap_array(&self) -> Option<&Type> {
		match self {
			Type::Array(inner) => Some(inner),
			_ => None,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Type::Bool => write!(f, "Bool"),
			Type::Float4 => write!(f, "Float4"),
			Type::Float8 => write!(f, "Float8"),
			Type::Int1 => write!(f, "Int1"),
			Type::Int2 => write!(f, "Int2"),
			Type::Int4 => write!(f, "Int4"),
			Type::Int8 => write!(f, "Int8"),
			Type::Uint1 => write!(f, "Uint1"),
			Type::Uint2 => write!(f, "Uint2"),
			Type::Uint4 => write!(f, "Uint4"),
			Type::Uint8 => write!(f, "Uint8"),
			Type::Utf8 => write!(f, "Utf8"),
			Type::Date => write!(f, "Date"),
			Type::DateTime => write!(f, "DateTime"),
			Type::Array(inner) => write!(f, "Array({})", inner),
			Type::Undefined => write!(f, "Undefined"),
		}
	}
}
