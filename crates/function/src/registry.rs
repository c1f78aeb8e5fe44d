// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use std::collections::HashMap;
use std::sync::Arc;

use crate::ScalarFunction;
use crate::array::{ArrayConcat, ArrayPop};
use crate::datetime::DateDiff;
use crate::default_value::DefaultValueOfArgumentType;
use crate::is::IsNotNull;

/// Name-keyed registry of scalar functions.
///
/// Lookup tries the exact name first, then the case-insensitive
/// entries, so functions registered case-insensitively resolve under
/// any spelling of their name.
#[derive(Default)]
pub struct Functions {
	exact: HashMap<String, Arc<dyn ScalarFunction>>,
	case_insensitive: HashMap<String, Arc<dyn ScalarFunction>>,
}

impl Functions {
	pub fn new() -> Self {
		Self::default()
	}

	/// All built-in functions.
	pub fn standard() -> Self {
		let mut functions = Self::new();
		functions.register(Arc::new(ArrayConcat));
		functions.register(Arc::new(ArrayPop::front()));
		functions.register(Arc::new(ArrayPop::back()));
		functions.register_case_insensitive(Arc::new(DateDiff));
		functions.register(Arc::new(IsNotNull));
		functions.register(Arc::new(DefaultValueOfArgumentType));
		functions
	}

	pub fn register(&mut self, function: Arc<dyn ScalarFunction>) {
		self.exact.insert(function.name().to_string(), function);
	}

	pub fn register_case_insensitive(&mut self, function: Arc<dyn ScalarFunction>) {
		self.case_insensitive.insert(function.name().to_ascii_lowercase(), function);
	}

	pub fn get(&self, name: &str) -> Option<Arc<dyn ScalarFunction>> {
		if let Some(function) = self.exact.get(name) {
			return Some(Arc::clone(function));
		}
		self.case_insensitive.get(&name.to_ascii_lowercase()).map(Arc::clone)
	}
}
