// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashculate
// File: main.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use hashculate::hcl::app;
use std::process::ExitCode;

fn main() -> ExitCode {
	app::run()
}
