// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

//! Vectorized scalar functions over [`tephra_column`] batches.
//!
//! A [`ScalarFunction`] maps a batch of argument columns to one result
//! column of the same row count. Functions never see the wrappers the
//! executor peels off for them: per [`FunctionOptions`], all-constant
//! batches are folded row-by-row and nullable arguments are stripped to
//! their payloads before `execute` runs.

pub mod array;
pub mod datetime;
pub mod default_value;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod gather;
pub mod is;
pub mod registry;

use tephra_column::{Column, Columns};
use tephra_type::Type;

pub use error::FunctionError;
pub use executor::{call, execute_function};
pub use registry::Functions;

pub type Result<T> = std::result::Result<T, FunctionError>;

/// Fast paths the executor is allowed to take on behalf of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionOptions {
	/// Fold all-constant batches by executing over one row and
	/// wrapping the result as a constant.
	pub constant_fast_path: bool,
	/// Strip nullable arguments before `execute` and re-apply the
	/// union of their null maps to the result.
	pub null_fast_path: bool,
	/// Argument positions the function requires to be constant (unit
	/// strings, timezone names). The constant fold keeps these wrapped
	/// instead of unpacking them to one-row vectors.
	pub constant_arguments: &'static [usize],
}

impl Default for FunctionOptions {
	fn default() -> Self {
		Self {
			constant_fast_path: true,
			null_fast_path: true,
			constant_arguments: &[],
		}
	}
}

pub struct ScalarFunctionContext<'a> {
	pub columns: &'a Columns,
	pub row_count: usize,
}

pub trait ScalarFunction: Send + Sync {
	fn name(&self) -> &'static str;

	/// Human-readable signature, for error messages and catalogs.
	fn signature(&self) -> &'static str;

	fn options(&self) -> FunctionOptions {
		FunctionOptions::default()
	}

	/// Result type for the given argument types. Rejects unsupported
	/// argument types and arities; [`Type::Undefined`] argument or
	/// result types are resolved by the executor before `execute`.
	fn return_type(&self, argument_types: &[Type]) -> Result<Type>;

	fn execute(&self, ctx: ScalarFunctionContext) -> Result<Column>;
}
