// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashculate
// File: accumulator.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Streaming digest state and the kind-to-constructor table used by the
//! engine.

use crate::hcl::algorithm::AlgorithmKind;
use digest::Digest;

/// Incremental digest state. Bytes must be absorbed in file order;
/// `finalize` consumes the accumulator so it cannot be reused.
pub trait Accumulator: Send + 'static {
	fn absorb(&mut self, data: &[u8]);
	fn finalize(self: Box<Self>) -> Vec<u8>;
}

struct DigestAccumulator<D> {
	inner: D,
}

impl<D> Accumulator for DigestAccumulator<D>
where
	D: Digest + Send + 'static,
{
	fn absorb(&mut self, data: &[u8]) {
		Digest::update(&mut self.inner, data);
	}

	fn finalize(self: Box<Self>) -> Vec<u8> {
		Digest::finalize(self.inner).to_vec()
	}
}

pub(crate) type AccumulatorFactory = fn() -> Box<dyn Accumulator>;

fn boxed<D>() -> Box<dyn Accumulator>
where
	D: Digest + Send + 'static,
{
	Box::new(DigestAccumulator { inner: D::new() })
}

/// Constructor for `kind`. Exhaustive, so a new kind without an
/// accumulator fails to compile.
pub(crate) fn factory(kind: AlgorithmKind) -> AccumulatorFactory {
	match kind {
		AlgorithmKind::Md5 => boxed::<md5::Md5>,
		AlgorithmKind::Sha1 => boxed::<sha1::Sha1>,
		AlgorithmKind::Sha256 => boxed::<sha2::Sha256>,
		AlgorithmKind::Sha512 => boxed::<sha2::Sha512>,
	}
}

/// Creates a fresh accumulator for `kind`.
pub(crate) fn create(kind: AlgorithmKind) -> Box<dyn Accumulator> {
	factory(kind)()
}

#[cfg(test)]
mod tests {
	use super::*;
	use strum::IntoEnumIterator;

	#[test]
	fn every_kind_has_a_constructor() {
		for kind in AlgorithmKind::iter() {
			let digest = create(kind).finalize();
			assert_eq!(digest.len(), kind.digest_len(), "{kind}");
		}
	}

	#[test]
	fn split_absorb_matches_single_absorb() {
		let data = b"The quick brown fox jumps over the lazy dog";
		for kind in AlgorithmKind::iter() {
			let mut whole = create(kind);
			whole.absorb(data);
			let mut split = create(kind);
			for piece in data.chunks(7) {
				split.absorb(piece);
			}
			assert_eq!(whole.finalize(), split.finalize(), "{kind}");
		}
	}

	#[test]
	fn factories_are_distinct_per_kind() {
		let lengths: Vec<usize> = AlgorithmKind::iter()
			.map(|kind| factory(kind)().finalize().len())
			.collect();
		assert_eq!(lengths, vec![16, 20, 32, 64]);
	}

	#[test]
	fn md5_known_vector() {
		let mut acc = create(AlgorithmKind::Md5);
		acc.absorb(b"abc");
		assert_eq!(
			hex::encode(acc.finalize()),
			"900150983cd24fb0d6963f7d28e17f72"
		);
	}
}
