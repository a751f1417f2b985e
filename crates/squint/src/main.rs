//! squint - paste Slurm command output, get a cluster snapshot.

use chrono::{DateTime, Utc};
use clap::Parser;
use miette::{bail, IntoDiagnostic, Result};
use squint_cli::Args;
use squint_parsers::{relative_time, TimezoneMode};
use squint_state::{
    build_snapshot, cpu_utilization, effective_req_mem, gres_utilization, memory_utilization,
    ClusterSnapshot, QueueItem,
};
use std::io::Read;

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = match &args.input {
        Some(path) => std::fs::read_to_string(path).into_diagnostic()?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .into_diagnostic()?;
            buf
        }
    };
    if raw.trim().is_empty() {
        bail!("no input provided; paste the output of scontrol/squeue/sacct");
    }

    let mode = match args.timezone.as_str() {
        "auto" => TimezoneMode::Auto,
        "utc" => TimezoneMode::Utc,
        "local" => TimezoneMode::Local,
        other => bail!("unknown timezone mode '{other}' (expected auto, utc, or local)"),
    };

    let snapshot = build_snapshot(&raw);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).into_diagnostic()?
        );
    } else {
        render_report(&snapshot, mode, Utc::now());
    }

    Ok(())
}

/// Relative start/end times for a queue item come from its detail
/// mapping when present; the squeue table itself has no timestamps.
fn queue_times(item: &QueueItem) -> (String, String) {
    match &item.detail {
        Some(detail) => {
            let get = |key: &str| detail.get(key).cloned().unwrap_or_default();
            (get("StartTime"), get("EndTime"))
        }
        None => (String::new(), String::new()),
    }
}

fn render_report(snapshot: &ClusterSnapshot, mode: TimezoneMode, now: DateTime<Utc>) {
    let offset = snapshot.utc_offset.as_deref();

    match &snapshot.collected_at {
        Some(collected) => {
            let rel = relative_time(collected, mode, offset, now);
            if rel.is_empty() {
                println!("Collected: {collected}");
            } else {
                println!("Collected: {collected} ({rel})");
            }
        }
        None => println!("Collected: no timestamp found in input"),
    }

    // Maps are unordered in the snapshot; sort only here.
    println!("\nPartitions ({})", snapshot.partitions.len());
    let mut partitions: Vec<_> = snapshot.partitions.values().collect();
    partitions.sort_by(|a, b| a.name.cmp(&b.name));
    for partition in partitions {
        let attr = |key: &str| partition.attrs.get(key).map(String::as_str).unwrap_or("-");
        let mut nodes: Vec<_> = partition.nodes.iter().cloned().collect();
        nodes.sort();
        println!(
            "  {:<12} state={:<6} nodes={:<3} cpus={:<5} max_time={}",
            partition.name,
            attr("State"),
            attr("TotalNodes"),
            attr("TotalCPUs"),
            attr("MaxTime"),
        );
        println!("    hosts: {}", nodes.join(" "));
    }

    println!("\nNodes ({})", snapshot.nodes.len());
    let mut nodes: Vec<_> = snapshot.nodes.values().collect();
    nodes.sort_by(|a, b| a.name.cmp(&b.name));
    for node in nodes {
        let state = node.attrs.get("State").map(String::as_str).unwrap_or("-");
        let cpu = cpu_utilization(node);
        let mem = memory_utilization(node);
        println!(
            "  {:<10} {:<10} cpu {:>3}/{:<3} ({:>5.1}%)  mem {:>7.0}/{:<7.0} MB ({:>5.1}%)",
            node.name,
            state,
            cpu.alloc,
            cpu.total,
            cpu.percent(),
            mem.alloc,
            mem.total,
            mem.percent(),
        );
        for (name, gres) in gres_utilization(node) {
            println!(
                "    gres/{:<12} {:>3}/{:<3} ({:>5.1}%)",
                name,
                gres.alloc,
                gres.total,
                gres.percent(),
            );
        }
    }

    println!("\nQueue ({})", snapshot.queue.len());
    for item in &snapshot.queue {
        let (start, end) = queue_times(item);
        let rel_start = relative_time(&start, mode, offset, now);
        print!(
            "  {:<10} {:<10} {:<10} {:<9} {:<20} elapsed={}",
            item.job_id, item.user, item.partition, item.state, item.name, item.elapsed,
        );
        if !rel_start.is_empty() {
            print!("  started {rel_start}");
        } else if !end.is_empty() {
            print!("  end={end}");
        }
        println!("  [{}]", item.node_list);
    }

    println!("\nHistory ({})", snapshot.history.len());
    for item in &snapshot.history {
        let rel_end = relative_time(&item.end, mode, offset, now);
        print!(
            "  {:<10} {:<10} {:<10} {:<18} {:<14} elapsed={} cpus={} mem={}",
            item.job_id,
            item.user,
            item.partition,
            item.state,
            item.name,
            item.elapsed,
            item.req_cpus,
            effective_req_mem(item),
        );
        if !rel_end.is_empty() {
            print!("  ended {rel_end}");
        }
        println!();
        for step in &item.steps {
            println!(
                "    step {:<16} {:<14} {:<18} elapsed={}",
                step.job_id, step.name, step.state, step.elapsed,
            );
        }
    }
}
