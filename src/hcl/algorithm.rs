// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashculate
// File: algorithm.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Algorithm registry: the supported digest kinds, their metadata, and the
//! name resolution used by the CLI.

use crate::hcl::error::HashError;
use strum::{EnumIter, IntoEnumIterator};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumIter)]
pub enum AlgorithmKind {
	Md5,
	Sha1,
	Sha256,
	Sha512,
}

/// Static description of one algorithm entry.
#[derive(Clone, Copy, Debug)]
pub struct AlgorithmMetadata {
	/// Canonical lowercase identifier (e.g., "sha256").
	pub identifier: &'static str,
	/// Hyphenated display name (e.g., "SHA-256").
	pub display_name: &'static str,
	/// Raw digest length in bytes.
	pub digest_len: usize,
}

const MD5_METADATA: AlgorithmMetadata = AlgorithmMetadata {
	identifier: "md5",
	display_name: "MD5",
	digest_len: 16,
};
const SHA1_METADATA: AlgorithmMetadata = AlgorithmMetadata {
	identifier: "sha1",
	display_name: "SHA-1",
	digest_len: 20,
};
const SHA256_METADATA: AlgorithmMetadata = AlgorithmMetadata {
	identifier: "sha256",
	display_name: "SHA-256",
	digest_len: 32,
};
const SHA512_METADATA: AlgorithmMetadata = AlgorithmMetadata {
	identifier: "sha512",
	display_name: "SHA-512",
	digest_len: 64,
};

impl AlgorithmKind {
	pub const fn metadata(self) -> AlgorithmMetadata {
		match self {
			Self::Md5 => MD5_METADATA,
			Self::Sha1 => SHA1_METADATA,
			Self::Sha256 => SHA256_METADATA,
			Self::Sha512 => SHA512_METADATA,
		}
	}

	pub const fn identifier(self) -> &'static str {
		self.metadata().identifier
	}

	pub const fn display_name(self) -> &'static str {
		self.metadata().display_name
	}

	pub const fn digest_len(self) -> usize {
		self.metadata().digest_len
	}

	/// Length of the lowercase hex rendering of a digest.
	pub const fn hex_len(self) -> usize {
		self.digest_len() * 2
	}
}

impl std::fmt::Display for AlgorithmKind {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.display_name())
	}
}

impl std::str::FromStr for AlgorithmKind {
	type Err = HashError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		resolve(s)
	}
}

/// Canonical identifiers in declaration order.
pub fn supported_names() -> Vec<&'static str> {
	AlgorithmKind::iter().map(AlgorithmKind::identifier).collect()
}

/// Resolves a user supplied algorithm name. Matching ignores ASCII case and
/// surrounding whitespace; the display form with a hyphen ("SHA-256") is a
/// synonym for the bare identifier.
pub fn resolve(name: &str) -> Result<AlgorithmKind, HashError> {
	let needle = name.trim();
	AlgorithmKind::iter()
		.find(|kind| {
			kind.identifier().eq_ignore_ascii_case(needle)
				|| kind.display_name().eq_ignore_ascii_case(needle)
		})
		.ok_or_else(|| HashError::UnsupportedAlgorithm {
			name: name.to_string(),
			supported: supported_names(),
		})
}
