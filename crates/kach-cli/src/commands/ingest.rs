//! Ingest command - run raw SMS messages through the relay pipeline.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use console::style;
use rust_decimal::Decimal;
use tracing::debug;

use kach_core::{Dispatcher, EndpointConfig, Pipeline, RawMessage, TransactionRecord};

/// Arguments for the ingest command.
#[derive(Args)]
pub struct IngestArgs {
    /// File with one JSON message per line ({"sender": ..., "message": ...}), "-" for stdin
    #[arg(short, long, conflicts_with_all = ["sender", "body"])]
    file: Option<PathBuf>,

    /// Sender address of a single message
    #[arg(short, long, requires = "body")]
    sender: Option<String>,

    /// Body of a single message
    #[arg(short, long, requires = "sender")]
    body: Option<String>,

    /// Override the configured backend URL for this run
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Classify and print only, never forward
    #[arg(long)]
    no_forward: bool,

    /// Print accepted records as JSON lines instead of cards
    #[arg(long)]
    json: bool,
}

pub async fn run(args: IngestArgs, config_override: Option<&str>) -> anyhow::Result<()> {
    let config = super::config::load(config_override)?;

    let endpoint = if args.no_forward {
        EndpointConfig::disabled()
    } else if let Some(url) = &args.endpoint {
        EndpointConfig::new(url.clone())
    } else {
        config.forward.endpoint()
    };

    let messages = read_messages(&args)?;
    if messages.is_empty() {
        println!("{} No messages to process.", style("ℹ").blue());
        return Ok(());
    }
    debug!(count = messages.len(), "read inbound messages");

    let dispatcher = Dispatcher::with_timeout(Duration::from_secs(config.forward.timeout_secs));
    let pipeline = Pipeline::with_dispatcher(dispatcher);

    let json = args.json;
    let outcome = pipeline.process_batch(&messages, &endpoint, |record| {
        if !json {
            print_card(record);
        }
    });

    if json {
        for record in &outcome.records {
            println!("{}", serde_json::to_string(record)?);
        }
    } else {
        println!();
        println!(
            "{} {} accepted, {} dropped ({} unknown sender, {} unmatched)",
            style("✓").green(),
            outcome.records.len(),
            outcome.dropped(),
            outcome.unknown_senders,
            outcome.pattern_misses
        );
    }

    // Forwards never block the pipeline, but a short-lived process still has
    // to outlive its own requests.
    for handle in outcome.forwards {
        let _ = handle.await;
    }

    Ok(())
}

fn read_messages(args: &IngestArgs) -> anyhow::Result<Vec<RawMessage>> {
    if let (Some(sender), Some(body)) = (&args.sender, &args.body) {
        return Ok(vec![RawMessage::new(sender.clone(), body.clone())]);
    }

    let Some(path) = &args.file else {
        anyhow::bail!("Provide --file, or --sender together with --body.");
    };

    let content = if path.as_os_str() == "-" {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?
    };

    let mut messages = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let message: RawMessage = serde_json::from_str(line)
            .with_context(|| format!("invalid message on line {}", index + 1))?;
        messages.push(message);
    }

    Ok(messages)
}

fn print_card(record: &TransactionRecord) {
    println!();
    println!("{}", style(&record.service_provider).cyan());
    println!("  Amount: {}", style(format_amount(&record.amount)).bold());
    println!("  From:   {}", record.sender_number);
    println!("  TXN:    {}", record.transaction_id);
}

/// Format an amount for display, grouping thousands and forcing two
/// decimals. A value that does not parse as a decimal stays as-is.
fn format_amount(raw: &str) -> String {
    match Decimal::from_str(raw) {
        Ok(value) => group_thousands(value),
        Err(_) => raw.to_string(),
    }
}

fn group_thousands(value: Decimal) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let s = format!("{:.2}", value.abs());

    let Some((int_part, dec_part)) = s.split_once('.') else {
        return s;
    };

    let chars: Vec<char> = int_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    format!("{sign}{formatted}.{dec_part}")
}
