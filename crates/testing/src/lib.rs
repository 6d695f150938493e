// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Fixtures shared by the memkey test suites.

pub mod row;
pub mod value;

pub use row::{assert_order_preserved, cross_rows, nullable_schema_of, schema_of};
pub use value::{PAD_WIDTH, boundary_values};
