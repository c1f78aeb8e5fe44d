// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

mod concat;
mod pop;

pub use concat::ArrayConcat;
pub use pop::ArrayPop;
