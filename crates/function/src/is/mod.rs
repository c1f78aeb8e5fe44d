// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

mod not_null;

pub use not_null::IsNotNull;
