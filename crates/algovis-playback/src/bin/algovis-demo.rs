//! Algovis Demo Player
//!
//! Generate a step sequence and play it to stdout.

use std::env;
use std::time::Duration;

use algovis_playback::Session;
use algovis_trace::{AlgorithmId, Family};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let algorithm: AlgorithmId = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(AlgorithmId::BubbleSort);

    let speed: f64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(4.0);

    println!("Algovis Step Player");
    println!("===================");
    println!();
    println!("Catalog:");
    for family in Family::ALL {
        let names: Vec<&str> = AlgorithmId::in_family(family)
            .map(|id| id.name())
            .collect();
        println!("  {}: {}", family, names.join(", "));
    }
    println!();
    println!("Playing {} at {speed}x", algorithm.name());
    println!();

    let mut session = Session::new(algorithm);
    session.set_speed(speed).await;
    let total = session.status().await.total_steps;
    session.play().await;

    let mut printed = None;
    loop {
        let status = session.status().await;
        if printed != Some(status.step_index) {
            if let Some(step) = session.current_step().await {
                println!("[{:>3}/{total}] {}", status.step_index + 1, step.description);
            }
            printed = Some(status.step_index);
        }
        if !status.playing && status.step_index + 1 >= total {
            break;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }

    println!();
    println!("Finished after {total} steps.");

    Ok(())
}
