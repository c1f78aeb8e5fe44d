// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

mod date_diff;

pub use date_diff::DateDiff;
