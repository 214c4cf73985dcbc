// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashculate
// File: engine.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Streaming file digest engine.
//!
//! A file is read in chunks of at most [`ChunkSize`] bytes into a single
//! reusable buffer, so memory use does not grow with the file. After each
//! chunk the optional progress observer receives the fraction of bytes read
//! so far.

use crate::hcl::accumulator;
use crate::hcl::algorithm::AlgorithmKind;
use crate::hcl::error::HashError;
use crate::hcl::format;
use log::{debug, trace};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const MIB: u64 = 1024 * 1024;

/// Number of bytes read per iteration. Always positive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChunkSize(u64);

impl ChunkSize {
	pub const DEFAULT: ChunkSize = ChunkSize(4 * MIB);

	pub fn new(bytes: u64) -> Result<Self, HashError> {
		if bytes == 0 {
			return Err(HashError::Config(
				"chunk size must be greater than zero".into(),
			));
		}
		usize::try_from(bytes).map_err(|_| {
			HashError::Config(format!(
				"{} bytes exceeds the addressable buffer size",
				bytes
			))
		})?;
		Ok(Self(bytes))
	}

	/// Builds a chunk size from a signed MiB count as entered on the
	/// command line.
	pub fn from_mebibytes(mib: i64) -> Result<Self, HashError> {
		if mib <= 0 {
			return Err(HashError::Config(format!(
				"{} MB, must be a positive number of megabytes",
				mib
			)));
		}
		let bytes = (mib as u64).checked_mul(MIB).ok_or_else(|| {
			HashError::Config(format!("{} MB is too large", mib))
		})?;
		Self::new(bytes)
	}

	pub fn bytes(self) -> u64 {
		self.0
	}
}

impl Default for ChunkSize {
	fn default() -> Self {
		Self::DEFAULT
	}
}

/// Outcome of one successful computation.
#[derive(Clone, Debug, PartialEq)]
pub struct HashResult {
	algorithm: AlgorithmKind,
	digest: String,
	filename: String,
	file_size: u64,
	chunk_size: ChunkSize,
	description: String,
}

impl HashResult {
	fn new(
		algorithm: AlgorithmKind,
		digest: String,
		filename: String,
		file_size: u64,
		chunk_size: ChunkSize,
	) -> Self {
		let description = format::sentence(
			&filename, file_size, algorithm, &digest,
		);
		Self {
			algorithm,
			digest,
			filename,
			file_size,
			chunk_size,
			description,
		}
	}

	pub fn algorithm(&self) -> AlgorithmKind {
		self.algorithm
	}

	/// Lowercase hex digest.
	pub fn digest(&self) -> &str {
		&self.digest
	}

	/// Final path component of the hashed file.
	pub fn filename(&self) -> &str {
		&self.filename
	}

	/// Bytes actually read from the file.
	pub fn file_size(&self) -> u64 {
		self.file_size
	}

	pub fn chunk_size(&self) -> ChunkSize {
		self.chunk_size
	}

	pub fn description(&self) -> &str {
		&self.description
	}
}

/// Carries the chunk size used for every file it hashes.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileHasher {
	chunk_size: ChunkSize,
}

impl FileHasher {
	pub fn new(chunk_size: ChunkSize) -> Self {
		Self { chunk_size }
	}

	pub fn chunk_size(&self) -> ChunkSize {
		self.chunk_size
	}

	pub fn hash_file(
		&self,
		path: impl AsRef<Path>,
		kind: AlgorithmKind,
		observer: Option<&mut dyn FnMut(f64)>,
	) -> Result<HashResult, HashError> {
		compute_file_digest(path, kind, self.chunk_size, observer)
	}
}

/// Hashes the file at `path` with `kind`, reading `chunk_size` bytes at a
/// time. The observer, if any, is called after every chunk with a value in
/// `[0.0, 1.0]`; it is never called for an empty file.
pub fn compute_file_digest(
	path: impl AsRef<Path>,
	kind: AlgorithmKind,
	chunk_size: ChunkSize,
	observer: Option<&mut dyn FnMut(f64)>,
) -> Result<HashResult, HashError> {
	let path = path.as_ref();
	debug!(
		"hashing {} with {} ({} byte chunks)",
		path.display(),
		kind,
		chunk_size.bytes()
	);

	let mut file = File::open(path)
		.map_err(|e| HashError::file_access(path, e))?;
	let metadata = file
		.metadata()
		.map_err(|e| HashError::file_access(path, e))?;
	if metadata.is_dir() {
		return Err(HashError::not_a_file(path));
	}
	let expected = metadata.len();
	debug!("{} reports {} bytes", path.display(), expected);

	let capacity =
		buffer_capacity(chunk_size, metadata.is_file(), expected);
	let (digest, total) = digest_stream(
		&mut file,
		path,
		kind,
		capacity,
		expected,
		observer,
	)?;
	if total != expected {
		debug!(
			"{} changed size while reading: stat {} bytes, read {}",
			path.display(),
			expected,
			total
		);
	}
	debug!("{} digest {}", kind, digest);

	Ok(HashResult::new(
		kind,
		digest,
		base_name(path),
		total,
		chunk_size,
	))
}

/// A regular file never needs a buffer larger than itself. Anything else
/// (pipes, character devices, procfs entries) reports a length that says
/// nothing about how much will be read, so it gets the full chunk.
fn buffer_capacity(
	chunk_size: ChunkSize,
	is_file: bool,
	expected: u64,
) -> usize {
	if is_file && expected > 0 {
		chunk_size.bytes().min(expected) as usize
	} else {
		chunk_size.bytes() as usize
	}
}

/// Drives `reader` to end-of-stream through a fresh accumulator. Returns
/// the hex digest and the number of bytes read; on a read error nothing
/// is finalized.
fn digest_stream(
	reader: &mut impl Read,
	path: &Path,
	kind: AlgorithmKind,
	capacity: usize,
	expected: u64,
	mut observer: Option<&mut dyn FnMut(f64)>,
) -> Result<(String, u64), HashError> {
	let mut acc = accumulator::create(kind);
	let mut buffer = vec![0u8; capacity];
	let mut total: u64 = 0;

	loop {
		let count = match reader.read(&mut buffer) {
			Ok(0) => break,
			Ok(count) => count,
			Err(e) if e.kind() == io::ErrorKind::Interrupted => {
				continue
			}
			Err(e) => {
				return Err(HashError::Read {
					path: path.to_path_buf(),
					offset: total,
					source: e,
				})
			}
		};
		acc.absorb(&buffer[..count]);
		total += count as u64;
		trace!("absorbed {} bytes ({} total)", count, total);

		if let Some(notify) = observer.as_mut() {
			if expected > 0 {
				notify(progress_fraction(total, expected));
			}
		}
	}

	Ok((hex::encode(acc.finalize()), total))
}

fn progress_fraction(done: u64, total: u64) -> f64 {
	(done as f64 / total as f64).min(1.0)
}

fn base_name(path: &Path) -> String {
	path.file_name()
		.map(|name| name.to_string_lossy().into_owned())
		.unwrap_or_else(|| path.to_string_lossy().into_owned())
}
