// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use thiserror::Error;

use crate::value::r#type::Type;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeError {
	#[error("there is no common supertype for [{}]", join_types(.types))]
	NoCommonType { types: Vec<Type> },

	#[error("unknown timezone: {name}")]
	UnknownTimezone { name: String },
}

fn join_types(types: &[Type]) -> String {
	types.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ")
}
