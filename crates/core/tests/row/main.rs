// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod edge_cases;
mod order;
mod round_trip;

pub(crate) fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}
