//! # kakaolog CLI
//!
//! Command-line interface for the kakaolog library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use kakaolog::cli::Args;
use kakaolog::core::{Stats, apply_filters, get_stats};
use kakaolog::format::write_to_format;
use kakaolog::parser::ExportParser;
use kakaolog::{ChatLog, KakaologError};

fn main() {
    let args = <Args as ClapParser>::parse();

    setup_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

/// Routes `tracing` output to stderr. `RUST_LOG` overrides `-v`.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .init();
}

fn run(args: &Args) -> Result<(), KakaologError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let format = args.output_format();
    let filter_config = args.filter_config()?;

    println!("📦 kakaolog v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    if !args.stats_only {
        println!("💾 Output:  {output_path}");
        println!("📄 Format:  {format}");
    }
    if let Some(ref after) = args.after {
        println!("📅 After:   {after}");
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {before}");
    }
    if let Some(ref from) = args.from {
        println!("👤 From:    {from}");
    }
    if let Some(kind) = filter_config.kind {
        println!("🏷️  Kind:    {kind}");
    }
    println!();

    // Step 1: Parse and validate
    println!("⏳ Parsing...");
    let parse_start = Instant::now();
    let parser = ExportParser::with_config(args.parser_config());
    let log = parser.parse_file(Path::new(&args.input))?;
    log.validate()?;
    println!(
        "   Found {} messages over {} days ({:.2}s)",
        log.message_count(),
        log.date_markers().count(),
        parse_start.elapsed().as_secs_f64()
    );

    println!();
    print_summary(&log, &get_stats(&log));

    if args.stats_only {
        return Ok(());
    }

    // Step 2: Filter
    let log = if filter_config.is_active() {
        println!();
        println!("🔍 Filtering messages...");
        let filtered = apply_filters(&log, &filter_config);
        println!("   {} messages after filtering", filtered.message_count());
        filtered
    } else {
        log
    };

    // Step 3: Write
    println!();
    println!("💾 Writing {format}...");
    let write_start = Instant::now();
    write_to_format(&log, &output_path, format, &args.output_config())?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Output saved to {output_path}");
    println!(
        "⚡ Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn print_summary(log: &ChatLog, stats: &Stats) {
    println!("📊 Summary:");
    println!("   Room:      {}", log.title());
    if !log.save_date().is_empty() {
        println!("   Saved:     {}", log.save_date());
    }
    println!("   Messages:  {}", stats.total_messages);
    println!("   Days:      {}", stats.total_days);
    println!("   Senders:   {}", stats.unique_senders);

    println!();
    println!("👥 Senders:");
    for entry in &stats.senders {
        println!("   {:<16} {:>6}  {:>3}%", entry.sender, entry.count, entry.percentage);
    }

    println!();
    println!("🏷️  Kinds:");
    for (kind, count) in &stats.by_kind {
        println!("   {:<16} {:>6}", kind.as_str(), count);
    }
}
