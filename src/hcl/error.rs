// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashculate
// File: error.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Error type shared by the registry, the engine and the CLI.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`HashError`], used by the CLI to pick
/// messages and by tests to match without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashErrorKind {
	UnsupportedAlgorithm,
	FileAccess,
	Read,
	Config,
}

/// Why a file could not be opened or inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAccessKind {
	NotFound,
	PermissionDenied,
	NotAFile,
	Other,
}

impl FileAccessKind {
	pub fn from_io(error: &io::Error) -> Self {
		match error.kind() {
			io::ErrorKind::NotFound => Self::NotFound,
			io::ErrorKind::PermissionDenied => Self::PermissionDenied,
			_ => Self::Other,
		}
	}

	fn label(self) -> &'static str {
		match self {
			Self::NotFound => "file not found",
			Self::PermissionDenied => "permission denied",
			Self::NotAFile => "not a regular file",
			Self::Other => "cannot access file",
		}
	}
}

impl std::fmt::Display for FileAccessKind {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.label())
	}
}

#[derive(Debug, Error)]
pub enum HashError {
	#[error(
		"unsupported algorithm: {name}. Supported: {}",
		.supported.join(", ")
	)]
	UnsupportedAlgorithm {
		name: String,
		supported: Vec<&'static str>,
	},

	#[error("{kind}: {}", .path.display())]
	FileAccess {
		path: PathBuf,
		kind: FileAccessKind,
		#[source]
		source: Option<io::Error>,
	},

	#[error("failed to read {} after {offset} bytes", .path.display())]
	Read {
		path: PathBuf,
		offset: u64,
		#[source]
		source: io::Error,
	},

	#[error("invalid chunk size: {0}")]
	Config(String),
}

impl HashError {
	pub fn kind(&self) -> HashErrorKind {
		match self {
			Self::UnsupportedAlgorithm { .. } => {
				HashErrorKind::UnsupportedAlgorithm
			}
			Self::FileAccess { .. } => HashErrorKind::FileAccess,
			Self::Read { .. } => HashErrorKind::Read,
			Self::Config(_) => HashErrorKind::Config,
		}
	}

	pub(crate) fn file_access(
		path: impl Into<PathBuf>,
		source: io::Error,
	) -> Self {
		Self::FileAccess {
			path: path.into(),
			kind: FileAccessKind::from_io(&source),
			source: Some(source),
		}
	}

	pub(crate) fn not_a_file(path: impl Into<PathBuf>) -> Self {
		Self::FileAccess {
			path: path.into(),
			kind: FileAccessKind::NotAFile,
			source: None,
		}
	}

	/// Returns the access classification for `FileAccess` errors.
	pub fn file_access_kind(&self) -> Option<FileAccessKind> {
		match self {
			Self::FileAccess { kind, .. } => Some(*kind),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn io_kinds_map_to_access_kinds() {
		let missing = io::Error::from(io::ErrorKind::NotFound);
		let denied =
			io::Error::from(io::ErrorKind::PermissionDenied);
		let other = io::Error::from(io::ErrorKind::InvalidData);
		assert_eq!(
			FileAccessKind::from_io(&missing),
			FileAccessKind::NotFound
		);
		assert_eq!(
			FileAccessKind::from_io(&denied),
			FileAccessKind::PermissionDenied
		);
		assert_eq!(
			FileAccessKind::from_io(&other),
			FileAccessKind::Other
		);
	}

	#[test]
	fn unsupported_message_lists_supported_names() {
		let err = HashError::UnsupportedAlgorithm {
			name: "crc32".into(),
			supported: vec!["md5", "sha1"],
		};
		assert_eq!(err.kind(), HashErrorKind::UnsupportedAlgorithm);
		assert_eq!(
			err.to_string(),
			"unsupported algorithm: crc32. Supported: md5, sha1"
		);
	}

	#[test]
	fn file_access_kind_only_set_for_access_errors() {
		let err = HashError::file_access(
			"missing.bin",
			io::Error::from(io::ErrorKind::NotFound),
		);
		assert_eq!(
			err.file_access_kind(),
			Some(FileAccessKind::NotFound)
		);
		assert!(err.to_string().contains("missing.bin"));
		assert_eq!(
			HashError::Config("zero".into()).file_access_kind(),
			None
		);
	}
}
