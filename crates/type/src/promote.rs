// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

//! Least-supertype resolution over the closed type set.
//!
//! The lattice is deliberately small: integers widen within a signedness,
//! a signed type absorbs any strictly narrower unsigned type, integers mixed
//! with floats resolve to a float wide enough to hold them, `Date` widens to
//! `DateTime`, and arrays recurse over their element type. `Undefined` is
//! neutral. Anything else has no common supertype.

use crate::{error::TypeError, value::r#type::Type};

/// The minimal type that can losslessly represent every one of `types`.
pub fn least_supertype(types: &[Type]) -> Result<Type, TypeError> {
	let mut result = Type::Undefined;
	for ty in types {
		result = match promote(&result, ty) {
			Some(promoted) => promoted,
			None => {
				return Err(TypeError::NoCommonType {
					types: types.to_vec(),
				});
			}
		};
	}
	Ok(result)
}

fn promote(a: &Type, b: &Type) -> Option<Type> {
	if a == b {
		return Some(a.clone());
	}

	match (a, b) {
		(Type::Undefined, other) | (other, Type::Undefined) => Some(other.clone()),

		(Type::Array(left), Type::Array(right)) => Some(Type::Array(Box::new(promote(left, right)?))),

		(Type::Date, Type::DateTime) | (Type::DateTime, Type::Date) => Some(Type::DateTime),

		(left, right) if left.is_number() && right.is_number() => promote_number(left, right),

		_ => None,
	}
}

fn promote_number(a: &Type, b: &Type) -> Option<Type> {
	match (a.is_float(), b.is_float()) {
		(true, true) => Some(Type::Float8),
		(true, false) => promote_float_integer(a, b),
		(false, true) => promote_float_integer(b, a),
		(false, false) => promote_integers(a, b),
	}
}

// Float4 holds every 1- and 2-byte integer exactly; anything wider needs
// Float8.
fn promote_float_integer(float: &Type, integer: &Type) -> Option<Type> {
	let width = integer.integer_width()?;
	if *float == Type::Float4 && width <= 2 {
		Some(Type::Float4)
	} else {
		Some(Type::Float8)
	}
}

fn promote_integers(a: &Type, b: &Type) -> Option<Type> {
	let width_a = a.integer_width()?;
	let width_b = b.integer_width()?;

	if a.is_signed_integer() == b.is_signed_integer() {
		return Some(if width_a >= width_b {
			a.clone()
		} else {
			b.clone()
		});
	}

	// Mixed signedness: a signed type one step wider than the unsigned
	// side is needed; beyond Int8 there is nothing to widen into.
	let (signed, unsigned_width) = if a.is_signed_integer() {
		(a, width_b)
	} else {
		(b, width_a)
	};

	let required = unsigned_width.checked_mul(2)?;
	if signed.integer_width()? >= required {
		Some(signed.clone())
	} else {
		Type::signed_of_width(required)
	}
}
