// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashculate
// File: progress.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const BAR_TEMPLATE: &str = "Progress: [{bar:50}] {percent}%";
const BAR_LENGTH: u64 = 100;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProgressMode {
	Enabled,
	Disabled,
}

#[derive(Clone, Copy, Debug)]
pub struct ProgressConfig {
	pub mode: ProgressMode,
}

impl ProgressConfig {
	pub fn from_flag(enabled: bool) -> Self {
		let mode = if enabled {
			ProgressMode::Enabled
		} else {
			ProgressMode::Disabled
		};
		Self { mode }
	}

	pub fn should_emit(&self) -> bool {
		self.mode == ProgressMode::Enabled
	}
}

impl Default for ProgressConfig {
	fn default() -> Self {
		Self {
			mode: ProgressMode::Enabled,
		}
	}
}

/// In-place textual progress bar on stderr. Hidden automatically when
/// stderr is not a terminal.
pub struct ProgressRenderer {
	bar: ProgressBar,
}

impl ProgressRenderer {
	pub fn new() -> Self {
		Self::with_target(ProgressDrawTarget::stderr())
	}

	#[cfg(test)]
	pub(crate) fn hidden() -> Self {
		Self::with_target(ProgressDrawTarget::hidden())
	}

	fn with_target(target: ProgressDrawTarget) -> Self {
		let bar = ProgressBar::with_draw_target(Some(BAR_LENGTH), target);
		let style = ProgressStyle::with_template(BAR_TEMPLATE)
			.unwrap_or_else(|_| ProgressStyle::default_bar())
			.progress_chars("==-");
		bar.set_style(style);
		Self { bar }
	}

	/// Moves the bar to `fraction` of its length.
	pub fn update(&self, fraction: f64) {
		let position = (fraction.clamp(0.0, 1.0) * BAR_LENGTH as f64)
			.floor() as u64;
		self.bar.set_position(position);
	}

	pub fn position(&self) -> u64 {
		self.bar.position()
	}

	/// Observer closure suitable for the engine.
	pub fn observer(&self) -> impl FnMut(f64) + '_ {
		move |fraction| self.update(fraction)
	}

	pub fn is_finished(&self) -> bool {
		self.bar.is_finished()
	}

	/// Settles the bar once hashing stops. Only a completed run fills the
	/// bar; a failed run keeps the position actually reached, and a run
	/// that failed before reading anything leaves no bar behind.
	pub fn conclude(&self, succeeded: bool) {
		if self.bar.is_finished() {
			return;
		}
		if succeeded {
			self.bar.finish();
		} else if self.bar.position() == 0 {
			self.bar.finish_and_clear();
		} else {
			self.bar.abandon();
		}
	}
}

impl Default for ProgressRenderer {
	fn default() -> Self {
		Self::new()
	}
}
