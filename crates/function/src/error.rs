// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use tephra_column::ColumnError;
use tephra_type::{Type, TypeError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FunctionError {
	#[error("unknown function `{name}`")]
	UnknownFunction { name: String },

	#[error("function `{function}` expects {expected} argument(s), got {actual}")]
	ArityMismatch {
		function: &'static str,
		expected: &'static str,
		actual: usize,
	},

	#[error("function `{function}` does not support type {actual} for argument {argument}")]
	UnsupportedColumnType {
		function: &'static str,
		argument: usize,
		actual: Type,
	},

	#[error("argument {argument} of function `{function}` must be a constant")]
	NonConstantArgument {
		function: &'static str,
		argument: usize,
	},

	#[error("function `{function}` does not recognize unit `{unit}`")]
	UnsupportedUnit {
		function: &'static str,
		unit: String,
	},

	/// Internal invariant violated, a bug rather than bad input.
	#[error("logical error: {message}")]
	Logical { message: String },

	#[error(transparent)]
	Type(#[from] TypeError),

	#[error(transparent)]
	Column(#[from] ColumnError),
}
