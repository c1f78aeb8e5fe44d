// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

pub mod cast;
pub mod column;
pub mod columns;
pub mod container;
pub mod data;
pub mod error;

pub use cast::{cast_column, cast_data};
pub use column::{Column, ConstantColumn, NullableColumn};
pub use columns::Columns;
pub use data::ColumnData;
pub use error::ColumnError;
