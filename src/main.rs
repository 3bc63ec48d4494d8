use std::sync::Arc;

use anyhow::Context;
use readalong::config::HighlighterConfig;
use readalong::kernel::cancel::PendingFrames;
use readalong::kernel::controller::PlaybackController;
use readalong::kernel::driver::PlaybackDriver;
use readalong::kernel::event::Command;
use readalong::kernel::scheduler::ScriptScheduler;
use readalong::kernel::time::SystemClock;
use readalong::outputs::text::{format_clock, ConsoleRenderer};
use readalong::script;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    // 2. Config + Script
    let config = HighlighterConfig::from_env().context("invalid highlighter config")?;
    let turns = match std::env::args().nth(1) {
        Some(path) => script::load_script(&path)
            .with_context(|| format!("failed to load script {}", path))?,
        None => script::demo_script(),
    };

    let timeline = Arc::new(ScriptScheduler::build_timeline(&turns, config.rate()?));
    tracing::info!(
        "Timeline ready: {} segments, {} words, {}",
        timeline.segments().len(),
        timeline.word_count(),
        format_clock(timeline.total_duration())
    );

    // 3. Controller + Driver
    let renderer = ConsoleRenderer::new(timeline.clone(), std::io::stdout(), true);
    let controller = PlaybackController::new(
        timeline,
        config.windows()?,
        SystemClock::new(),
        PendingFrames::new(),
        renderer,
    );
    let (tx, rx) = mpsc::channel(32);

    // 4. Spawn Input Reader (Stdin)
    tokio::spawn(async move {
        let reader = BufReader::new(tokio::io::stdin());
        let mut lines = reader.lines();

        println!(
            "Commands: play, pause, <enter> toggles, seek <secs>, word <seg> <word>, reset, quit"
        );

        while let Ok(Some(line)) = lines.next_line().await {
            let Some(command) = Command::parse(&line) else {
                tracing::warn!("Unknown command: '{}'", line.trim());
                continue;
            };

            if tx.send(command).await.is_err() || command == Command::Shutdown {
                break;
            }
        }
    });

    // 5. Run
    let controller = PlaybackDriver::new(controller, rx)
        .with_frame_interval(config.frame_interval())
        .run()
        .await;

    let snapshot = controller.telemetry.snapshot();
    tracing::info!(
        "Session: {} ({} older events evicted)",
        serde_json::to_string(&snapshot).unwrap_or_default(),
        controller.telemetry.evicted()
    );
    Ok(())
}
