//! lzss-cli - Command-line interface for the LZSS compressor
//!
//! A command-line tool for compressing and decompressing files in the LZSS
//! block format.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use lzss::{compress_with_stats, expand, Token, TokenDecoder};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Inputs above this size get a progress bar
const PROGRESS_THRESHOLD: usize = 1024 * 1024;

#[derive(Parser)]
#[command(name = "lzss-cli")]
#[command(about = "A CLI tool for LZSS compression and decompression")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    Compress {
        /// Input file to compress
        input: PathBuf,

        /// Output compressed file
        output: PathBuf,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Decompress an LZSS-compressed file
    Decompress {
        /// Input compressed file
        input: PathBuf,

        /// Output decompressed file
        output: PathBuf,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Get information about a compressed file
    Info {
        /// Compressed file to analyze
        input: PathBuf,
    },
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            force,
        } => compress_file(&input, &output, force, cli.verbose, cli.quiet),
        Commands::Decompress {
            input,
            output,
            force,
        } => decompress_file(&input, &output, force, cli.verbose, cli.quiet),
        Commands::Info { input } => show_file_info(&input, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn check_paths(input: &Path, output: &Path, force: bool) -> CliResult<()> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    if output.exists() && !force {
        return Err(format!(
            "Output file '{}' already exists. Use --force to overwrite",
            output.display()
        )
        .into());
    }

    Ok(())
}

fn progress_bar(size: usize, quiet: bool, message: &'static str) -> CliResult<Option<ProgressBar>> {
    if quiet || size <= PROGRESS_THRESHOLD {
        return Ok(None);
    }

    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message(message);
    pb.inc(1);
    Ok(Some(pb))
}

fn compress_file(
    input: &Path,
    output: &Path,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> CliResult<()> {
    check_paths(input, output, force)?;

    if verbose {
        println!(
            "Compressing '{}' to '{}'",
            input.display(),
            output.display()
        );
    }

    let start_time = Instant::now();

    let input_data = fs::read(input)?;
    let input_size = input_data.len();

    if verbose {
        println!("Input size: {} bytes", input_size);
    }

    let progress = progress_bar(input_size, quiet, "Compressing...")?;

    let (compressed_data, stats) = compress_with_stats(&input_data);

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Compression complete");
    }

    fs::write(output, &compressed_data)?;

    let compression_time = start_time.elapsed();

    if !quiet {
        println!("✓ Compression successful!");
        println!("  Input:  {} bytes", stats.input_bytes);
        println!("  Output: {} bytes", stats.output_bytes);
        println!("  Ratio:  {:.1}%", stats.ratio() * 100.0);
        println!("  Time:   {:.2?}", compression_time);

        if verbose {
            println!(
                "  Tokens: {} literals, {} references (longest {}) in {} blocks",
                stats.literal_count, stats.reference_count, stats.longest_match, stats.block_count
            );
        }

        if stats.output_bytes > stats.input_bytes {
            println!("  Note: File expanded during compression (common for small/random data)");
        }
    }

    Ok(())
}

fn decompress_file(
    input: &Path,
    output: &Path,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> CliResult<()> {
    check_paths(input, output, force)?;

    if verbose {
        println!(
            "Decompressing '{}' to '{}'",
            input.display(),
            output.display()
        );
    }

    let start_time = Instant::now();

    let compressed_data = fs::read(input)?;
    let input_size = compressed_data.len();

    if verbose {
        println!("Compressed size: {} bytes", input_size);
    }

    let progress = progress_bar(input_size, quiet, "Decompressing...")?;

    let decompressed_data =
        expand(&compressed_data).map_err(|e| format!("Decompression failed: {}", e))?;

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Decompression complete");
    }

    fs::write(output, &decompressed_data)?;

    let decompression_time = start_time.elapsed();
    let output_size = decompressed_data.len();

    if !quiet {
        println!("✓ Decompression successful!");
        println!("  Input:  {} bytes", input_size);
        println!("  Output: {} bytes", output_size);
        if output_size > 0 {
            println!(
                "  Ratio:  {:.1}%",
                (input_size as f64 / output_size as f64) * 100.0
            );
        }
        println!("  Time:   {:.2?}", decompression_time);
    }

    Ok(())
}

/// Token counts gathered by walking a compressed stream
#[derive(Debug, Default)]
struct StreamSummary {
    blocks: usize,
    literals: usize,
    references: usize,
    longest_match: usize,
    decoded_size: usize,
}

fn summarize(data: &[u8]) -> lzss::Result<StreamSummary> {
    let mut summary = StreamSummary::default();
    let mut decoder = TokenDecoder::new(data);

    for token in decoder.by_ref() {
        let token = token?;
        summary.decoded_size += token.decoded_len();
        match token {
            Token::Literal(_) => summary.literals += 1,
            Token::Reference { length, .. } => {
                summary.references += 1;
                summary.longest_match = summary.longest_match.max(length);
            }
        }
    }
    summary.blocks = decoder.blocks();

    Ok(summary)
}

fn show_file_info(input: &Path, verbose: bool) -> CliResult<()> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    let data = fs::read(input)?;
    let file_size = data.len();

    println!("LZSS File Information:");
    println!("  File: {}", input.display());
    println!("  Size: {} bytes", file_size);

    if verbose && !data.is_empty() {
        println!("  First flag byte: {:08b}", data[0]);
    }

    // distances are only checked by a full decode
    match summarize(&data).and_then(|summary| expand(&data).map(|_| summary)) {
        Ok(summary) => {
            println!("  Blocks: {}", summary.blocks);
            println!(
                "  Tokens: {} literals, {} references",
                summary.literals, summary.references
            );
            if verbose {
                println!("  Longest Match: {} bytes", summary.longest_match);
            }
            println!("  Decompressed Size: {} bytes", summary.decoded_size);
            if summary.decoded_size > 0 {
                let compression_ratio = (file_size as f64 / summary.decoded_size as f64) * 100.0;
                println!("  Compression Ratio: {:.1}%", compression_ratio);
            }
            println!("  Status: ✓ Valid LZSS stream");
        }
        Err(e) => {
            println!("  Status: ✗ Invalid or corrupted LZSS stream");
            if verbose {
                println!("  Error: {}", e);
            }
        }
    }

    Ok(())
}
