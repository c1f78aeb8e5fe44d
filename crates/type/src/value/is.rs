// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use std::fmt::Debug;

use crate::value::{date::Date, datetime::DateTime};

/// Marker for the primitive numeric element types a number container can hold.
pub trait IsNumber: Clone + Copy + Debug + Default + PartialEq + PartialOrd {}

impl IsNumber for f32 {}
impl IsNumber for f64 {}
impl IsNumber for i8 {}
impl IsNumber for i16 {}
impl IsNumber for i32 {}
impl IsNumber for i64 {}
impl IsNumber for u8 {}
impl IsNumber for u16 {}
impl IsNumber for u32 {}
impl IsNumber for u64 {}

/// Marker for the temporal element types a temporal container can hold.
pub trait IsTemporal: Clone + Copy + Debug + Default + PartialEq + Ord {}

impl IsTemporal for Date {}
impl IsTemporal for DateTime {}
