// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashculate
// File: format.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Human readable rendering of hash results.

use crate::hcl::algorithm::AlgorithmKind;
use crate::hcl::engine::HashResult;
use std::fmt;

const RULE_WIDTH: usize = 51;

/// Renders a byte count. Counts below 1024 are shown as bytes, anything
/// larger as 1024-based kilobytes with one decimal.
pub fn format_bytes(bytes: u64) -> String {
	if bytes < 1024 {
		return format!("{} bytes", bytes);
	}
	format!("{:.1} kb (kilobytes)", bytes as f64 / 1024.0)
}

pub(crate) fn sentence(
	filename: &str,
	size: u64,
	algorithm: AlgorithmKind,
	digest: &str,
) -> String {
	format!(
		"\"{}\", with size of {}, and file hash using the hashing algorithm {} has the value : {}.",
		filename,
		format_bytes(size),
		algorithm.display_name(),
		digest
	)
}

/// Description sentence for a finished computation.
pub fn describe(result: &HashResult) -> String {
	sentence(
		result.filename(),
		result.file_size(),
		result.algorithm(),
		result.digest(),
	)
}

/// Horizontal rule framing the summary block.
pub fn rule() -> String {
	"=".repeat(RULE_WIDTH)
}

/// Multi-line summary printed by the CLI once hashing completes.
pub fn summary(result: &HashResult) -> String {
	format!(
		"{rule}\n{result}{rule}\n\nDescription:\n{}",
		result.description(),
		rule = rule(),
	)
}

impl fmt::Display for HashResult {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "File: {}", self.filename())?;
		writeln!(f, "Size: {}", format_bytes(self.file_size()))?;
		writeln!(f, "Algorithm: {}", self.algorithm().display_name())?;
		writeln!(f, "Hash: {}", self.digest())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn byte_counts_below_a_kilobyte() {
		assert_eq!(format_bytes(0), "0 bytes");
		assert_eq!(format_bytes(1), "1 bytes");
		assert_eq!(format_bytes(1023), "1023 bytes");
	}

	#[test]
	fn kilobyte_rendering() {
		assert_eq!(format_bytes(1024), "1.0 kb (kilobytes)");
		assert_eq!(format_bytes(1536), "1.5 kb (kilobytes)");
		assert_eq!(format_bytes(2048), "2.0 kb (kilobytes)");
		assert_eq!(format_bytes(1024 * 1024), "1024.0 kb (kilobytes)");
	}

	#[test]
	fn sentence_matches_template() {
		let text = sentence(
			"notes.txt",
			57,
			AlgorithmKind::Sha256,
			"abcdef",
		);
		assert_eq!(
			text,
			"\"notes.txt\", with size of 57 bytes, and file hash using the hashing algorithm SHA-256 has the value : abcdef."
		);
	}

	#[test]
	fn rule_width() {
		assert_eq!(rule().len(), 51);
		assert!(rule().chars().all(|c| c == '='));
	}
}
