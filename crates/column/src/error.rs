// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use tephra_type::{Type, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColumnError {
	#[error("unsupported cast from {from} to {to}")]
	UnsupportedCast { from: Type, to: Type },

	#[error("value {value} of type {from} does not fit into {to}")]
	OutOfRange { value: Value, from: Type, to: Type },

	#[error("column type mismatch: expected {expected}, got {actual}")]
	TypeMismatch { expected: Type, actual: Type },

	#[error("column length mismatch: expected {expected}, got {actual}")]
	LengthMismatch { expected: usize, actual: usize },
}
