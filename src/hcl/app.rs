// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashculate
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::hcl::algorithm::{self, AlgorithmKind};
use crate::hcl::engine::{ChunkSize, FileHasher, HashResult};
use crate::hcl::error::{FileAccessKind, HashError};
use crate::hcl::format;
use crate::hcl::progress::{ProgressConfig, ProgressRenderer};
use clap::{crate_name, Arg, ArgAction, ArgMatches};
use colored::*;
use log::debug;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const AFTER_HELP: &str = "Examples:
  hashculate myfile.txt
  hashculate --algorithm sha256 myfile.txt
  hashculate -a sha512 -c 8 largefile.bin
  hashculate --progress=false -a SHA-1 notes.txt";

const DEFAULT_ALGORITHM: &str = "md5";
const DEFAULT_CHUNK_MIB: i64 = 4;

/// Settings for one invocation, resolved once from the command line.
#[derive(Clone, Debug)]
pub struct HashConfig {
	pub path: PathBuf,
	pub algorithm: AlgorithmKind,
	pub chunk_mib: i64,
	pub chunk_size: ChunkSize,
	pub progress: ProgressConfig,
	pub verbose: bool,
}

impl Default for HashConfig {
	fn default() -> Self {
		HashConfig {
			path: PathBuf::new(),
			algorithm: AlgorithmKind::Md5,
			chunk_mib: DEFAULT_CHUNK_MIB,
			chunk_size: ChunkSize::DEFAULT,
			progress: ProgressConfig::default(),
			verbose: false,
		}
	}
}

impl HashConfig {
	pub fn from_matches(m: &ArgMatches) -> Result<Self, HashError> {
		let defaults = HashConfig::default();
		let algorithm = match m.get_one::<String>("algorithm") {
			Some(name) => algorithm::resolve(name)?,
			None => defaults.algorithm,
		};
		let chunk_mib = m
			.get_one::<i64>("chunk-size")
			.copied()
			.unwrap_or(defaults.chunk_mib);
		let chunk_size = ChunkSize::from_mebibytes(chunk_mib)?;
		let progress = m
			.get_one::<bool>("progress")
			.map(|enabled| ProgressConfig::from_flag(*enabled))
			.unwrap_or(defaults.progress);
		let path = m
			.get_one::<PathBuf>("file")
			.cloned()
			.unwrap_or(defaults.path);
		Ok(HashConfig {
			path,
			algorithm,
			chunk_mib,
			chunk_size,
			progress,
			verbose: m.get_flag("verbose"),
		})
	}
}

pub fn build_cli() -> clap::Command {
	let supported = algorithm::supported_names().join(", ");
	clap::Command::new(crate_name!())
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name(crate_name!())
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about("File Hash Calculator")
		.after_help(AFTER_HELP)
		.arg(
			Arg::new("algorithm")
				.short('a')
				.long("algorithm")
				.value_name("ALGORITHM")
				.help(format!("Hash algorithm ({})", supported))
				.default_value(DEFAULT_ALGORITHM),
		)
		.arg(
			Arg::new("chunk-size")
				.short('c')
				.long("chunk-size")
				.value_name("MB")
				.value_parser(clap::value_parser!(i64))
				.allow_negative_numbers(true)
				.help("Chunk size in MB for processing large files")
				.default_value("4"),
		)
		.arg(
			Arg::new("progress")
				.short('p')
				.long("progress")
				.value_name("BOOL")
				.value_parser(clap::builder::BoolishValueParser::new())
				.num_args(0..=1)
				.require_equals(true)
				.default_value("true")
				.default_missing_value("true")
				.help("Show progress during calculation (use --progress=false to disable)"),
		)
		.arg(
			Arg::new("verbose")
				.short('v')
				.long("verbose")
				.help("Enable debug logging on stderr")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("file")
				.value_name("FILE")
				.value_parser(clap::value_parser!(PathBuf))
				.help("File to hash")
				.required(true),
		)
}

fn init_logging(verbose: bool) {
	let mut builder = env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("warn"),
	);
	if verbose {
		builder
			.filter_module("hashculate", log::LevelFilter::Debug)
			.format_timestamp_millis();
	}
	// A logger may already be installed when running in-process.
	let _ = builder.try_init();
}

fn report_error(config: &HashConfig, err: &HashError) {
	let message = match err.file_access_kind() {
		Some(FileAccessKind::NotFound) => format!(
			"File '{}' does not exist",
			config.path.display()
		),
		_ => err.to_string(),
	};
	eprintln!("{} {}", "Error:".red().bold(), message);
}

fn print_header(config: &HashConfig) {
	println!(
		"Calculating {} hash for: {}",
		config.algorithm.display_name(),
		config.path.display()
	);
	println!("Chunk size: {} MB", config.chunk_mib);
	println!();
}

fn print_result(result: &HashResult) {
	println!();
	println!("{}", "Hash calculation complete!".green().bold());
	println!("{}", format::summary(result));
}

/// Hashes the configured file, drawing a progress bar when enabled.
pub fn execute(config: &HashConfig) -> Result<HashResult, HashError> {
	let hasher = FileHasher::new(config.chunk_size);
	debug!(
		"reading {} in {} byte chunks",
		config.path.display(),
		hasher.chunk_size().bytes()
	);
	if !config.progress.should_emit() {
		return hasher.hash_file(&config.path, config.algorithm, None);
	}
	let renderer = ProgressRenderer::new();
	let mut observer = renderer.observer();
	let result = hasher.hash_file(
		&config.path,
		config.algorithm,
		Some(&mut observer),
	);
	renderer.conclude(result.is_ok());
	result
}

/// Rejects a missing or inaccessible path before any output is written.
fn preflight(config: &HashConfig) -> Result<(), HashError> {
	std::fs::metadata(&config.path)
		.map(|_| ())
		.map_err(|e| HashError::file_access(&config.path, e))
}

pub fn run() -> ExitCode {
	run_from(std::env::args_os())
}

pub fn run_from<I, T>(args: I) -> ExitCode
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	let matches = match build_cli().try_get_matches_from(args) {
		Ok(matches) => matches,
		Err(e) => {
			let _ = e.print();
			return if e.use_stderr() {
				ExitCode::FAILURE
			} else {
				ExitCode::SUCCESS
			};
		}
	};
	init_logging(matches.get_flag("verbose"));

	let config = match HashConfig::from_matches(&matches) {
		Ok(config) => config,
		Err(e) => {
			eprintln!("{} {}", "Error:".red().bold(), e);
			return ExitCode::FAILURE;
		}
	};
	debug!("resolved configuration: {:?}", config);

	if let Err(e) = preflight(&config) {
		report_error(&config, &e);
		return ExitCode::FAILURE;
	}

	print_header(&config);
	match execute(&config) {
		Ok(result) => {
			print_result(&result);
			ExitCode::SUCCESS
		}
		Err(e) => {
			report_error(&config, &e);
			ExitCode::FAILURE
		}
	}
}
