// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

pub mod bitvec;
