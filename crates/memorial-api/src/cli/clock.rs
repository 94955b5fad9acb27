//! `memorial clock` -- print the analog clock hand angles once per second.

use anyhow::Result;
use console::style;

use memorial_core::clock::ClockHandle;
use memorial_types::clock::HandAngles;

/// Run the clock until `ticks` updates have been printed or Ctrl+C.
pub async fn clock(ticks: Option<u32>, json: bool) -> Result<()> {
    let handle = ClockHandle::start();
    let mut rx = handle.subscribe();
    let mut printed = 0u32;

    if !json {
        println!();
        println!("  {}", style("Press Ctrl+C to stop").dim());
    }

    loop {
        if ticks.is_some_and(|limit| printed >= limit) {
            break;
        }
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let angles = *rx.borrow_and_update();
                print_angles(angles, json)?;
                printed += 1;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!("clock interrupted");
                break;
            }
        }
    }

    handle.stop().await;
    if !json {
        println!();
    }
    Ok(())
}

fn print_angles(angles: HandAngles, json: bool) -> Result<()> {
    let now = chrono::Local::now().format("%H:%M:%S");
    let dial = angles.normalized();
    if json {
        let line = serde_json::json!({
            "time": now.to_string(),
            "hour": dial.hour,
            "minute": dial.minute,
            "second": dial.second,
        });
        println!("{}", serde_json::to_string(&line)?);
    } else {
        println!(
            "  {}  hour {:>6.1}°  minute {:>6.1}°  second {:>6.1}°",
            style(now).bold(),
            dial.hour,
            dial.minute,
            dial.second
        );
    }
    Ok(())
}
