// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

pub mod array;
pub mod bool;
pub mod number;
pub mod temporal;
pub mod undefined;
pub mod utf8;

pub use array::ArrayContainer;
pub use bool::BoolContainer;
pub use number::NumberContainer;
pub use temporal::TemporalContainer;
pub use undefined::UndefinedContainer;
pub use utf8::Utf8Container;
