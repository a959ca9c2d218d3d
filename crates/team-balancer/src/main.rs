// Team balancer entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file; stdout carries the report)
// 2. Load config
// 3. Load the roster CSV in full
// 4. Normalize, score and assign
// 5. Print assignments and team summaries

use std::io::Write;

use anyhow::Context;
use balancer_core::{config, pipeline, players, report};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing
    init_tracing()?;
    info!("Team balancer starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let players_path = config.players_path(&cwd);
    info!(
        "Config loaded: players={}, tie_break={:?}, show_average={}",
        players_path.display(),
        config.balance.tie_break,
        config.report.show_average
    );

    // 3. Load roster
    let records = players::loader::load_players(&players_path)
        .await
        .with_context(|| format!("failed to load players from {}", players_path.display()))?;

    // 4. Balance
    let outcome = pipeline::run(records, &config.pipeline_options())
        .context("failed to balance teams")?;

    // 5. Report
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_report(
        &mut out,
        &outcome.assignments,
        &outcome.board,
        config.report_options(),
    )
    .context("failed to write report")?;
    out.flush().context("failed to flush report")?;

    info!(
        "Team balancer finished: {} players across {} teams",
        outcome.board.player_count(),
        outcome.board.len()
    );
    Ok(())
}

/// Initialize tracing to log to a file (stdout is reserved for the report).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("team-balancer.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("balancer_core=info,team_balancer=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
