// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

//! Segmented-array gather engine.
//!
//! Array functions are phrased as loops over [`ArraySource`] cursors
//! writing into an [`ArraySink`]. Sources hide the vector/constant
//! shape of the input column, the sink owns the growing offsets and
//! element buffer, and the algorithms below copy element ranges without
//! ever materializing per-row arrays.

mod algorithms;
mod sink;
mod source;

pub use algorithms::{concat, slice_from_left_constant_offset_bounded, slice_from_left_constant_offset_unbounded};
pub use sink::ArraySink;
pub use source::ArraySource;
