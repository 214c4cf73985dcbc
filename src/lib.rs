// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashculate
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

pub mod hcl {
	pub mod accumulator;
	pub mod algorithm;
	pub mod app;
	pub mod engine;
	pub mod error;
	pub mod format;
	pub mod progress;
}

pub use hcl::algorithm::{resolve, AlgorithmKind};
pub use hcl::engine::{
	compute_file_digest, ChunkSize, FileHasher, HashResult,
};
pub use hcl::error::{FileAccessKind, HashError, HashErrorKind};
pub use hcl::format::{describe, format_bytes};

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	const PHRASE: &str =
		"Hello, World!\nThis is a test file for hash calculation.";

	#[test]
	fn test_hash_calculator_md5_and_sha256() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("test_hash_calc.txt");
		std::fs::File::create(&path)
			.unwrap()
			.write_all(PHRASE.as_bytes())
			.unwrap();

		let hasher = FileHasher::default();
		let md5 = hasher.hash_file(&path, AlgorithmKind::Md5, None).unwrap();
		assert_eq!(md5.algorithm(), AlgorithmKind::Md5);
		assert_eq!(md5.digest().len(), 32);

		let sha = hasher
			.hash_file(&path, AlgorithmKind::Sha256, None)
			.unwrap();
		assert_eq!(sha.digest().len(), 64);
		assert_eq!(sha.filename(), "test_hash_calc.txt");
		assert_eq!(sha.file_size(), PHRASE.len() as u64);
		assert_eq!(describe(&sha), sha.description());
	}

	#[test]
	fn test_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let err = compute_file_digest(
			dir.path().join("nonexistent_file.txt"),
			AlgorithmKind::Md5,
			ChunkSize::DEFAULT,
			None,
		)
		.unwrap_err();
		assert_eq!(err.kind(), HashErrorKind::FileAccess);
		assert_eq!(err.file_access_kind(), Some(FileAccessKind::NotFound));
	}
}
