use anyhow::{Context, Result};
use disentangle_analysis::{AnalysisFilter, MessageStatus, RoomAnalysis};
use disentangle_types::RoomSnapshot;
use std::fs;

/// Analyze a chat room snapshot exported as JSON.
///
/// Usage: analyze-room <snapshot.json> [--discordant-only]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().context("usage: analyze-room <snapshot.json> [--discordant-only]")?;
    let discordant_only = args.any(|a| a == "--discordant-only");

    let raw = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let snapshot: RoomSnapshot =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;

    let analysis = RoomAnalysis::new(snapshot);
    let stats = analysis.stats();

    println!("Disentangle - Room Analysis");
    println!("===========================\n");

    println!("Total messages:      {}", stats.total_messages);
    println!("Annotated messages:  {}", stats.annotated_messages);
    println!("Annotators:          {}", stats.total_annotators);
    println!("Discordant messages: {}", stats.discordant_count);
    println!("Concordance rate:    {}%\n", stats.concordance_rate);

    let groups = analysis.equivalence_map().groups();
    if !groups.is_empty() {
        println!("Detected thread equivalences:");
        for (canonical, members) in &groups {
            println!("  {} <- {}", canonical, members.join(" = "));
        }
        println!();
    }

    let filter = AnalysisFilter {
        annotator: None,
        discordant_only,
    };
    for message in analysis.filtered_messages(&filter) {
        let status = match analysis.status_of(message) {
            MessageStatus::Unannotated => "unannotated",
            MessageStatus::Single => "single",
            MessageStatus::Concordant => "concordant",
            MessageStatus::Discordant => "DISCORDANT",
        };
        let labels: Vec<String> = message
            .annotations
            .iter()
            .map(|a| format!("{}:{}", a.annotator_email, a.thread_id))
            .collect();
        println!("[{status}] {} | {} ({})", message.message_id, message.message_text, labels.join(", "));
    }

    Ok(())
}
