//! Priority scheduling with MinHeap and MinMaxHeap.
//!
//! Run with: cargo run --example task_queue

use heapbloom::filters::CountingBloomFilter;
use heapbloom::heap::{MinHeap, MinMaxHeap};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Job {
    deadline: u32,
    name: &'static str,
}

fn by_deadline(a: &Job, b: &Job) -> Ordering {
    a.deadline.cmp(&b.deadline)
}

fn main() -> heapbloom::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let jobs = [
        Job { deadline: 40, name: "rotate logs" },
        Job { deadline: 5, name: "page on-call" },
        Job { deadline: 25, name: "rebuild index" },
        Job { deadline: 10, name: "renew certificate" },
        Job { deadline: 60, name: "archive backups" },
    ];

    // Earliest deadline first, with duplicate suppression
    let mut queue = MinHeap::with_comparator(by_deadline);
    let mut seen = CountingBloomFilter::<str>::new(100, 0.01)?;
    for job in jobs.iter().chain(jobs.iter().take(2)) {
        if seen.contains(job.name) {
            println!("skip duplicate: {}", job.name);
            continue;
        }
        seen.add(job.name)?;
        queue.add(job.clone());
    }

    // A job got escalated
    if let Some(index) = queue.position(|j| j.name == "archive backups") {
        queue.update_at(index, |j| j.deadline = 1)?;
    }

    println!("\nRun order");
    while let Ok(job) = queue.remove_min() {
        println!("  t={:>2} {}", job.deadline, job.name);
        seen.remove(job.name)?;
    }
    println!("filter empty after drain: {}", seen.is_empty());

    // Shed both the most and least urgent work under load
    let mut window: MinMaxHeap<Job, _> = MinMaxHeap::with_comparator(by_deadline);
    window.add_many(jobs.iter().cloned());
    println!("\n{window}");
    println!("most urgent:  {}", window.minimum()?.name);
    println!("least urgent: {}", window.maximum()?.name);

    let dropped = window.remove_max_many(2)?;
    for job in dropped {
        println!("dropped: {}", job.name);
    }
    println!("{window} remaining");

    Ok(())
}
