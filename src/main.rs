use clap::Parser;
use jedi_quiz::console;
use jedi_quiz::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "jedi-quiz", about = "Jedi Code knowledge testing system")]
struct Args {
    /// Seconds allowed for the whole quiz (e.g. 30 or 12.5)
    #[arg(short, long, value_parser = config::parse_time_limit)]
    time_limit: Option<Duration>,

    /// Delay between Jedi Code lines, in milliseconds
    #[arg(long)]
    pacing_ms: Option<u64>,

    /// Log level written to the log file (error, warn, info, debug, trace, off)
    #[arg(long, value_parser = config::parse_log_level)]
    log_level: Option<LevelFilter>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::QuizConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        time_limit: args.time_limit,
        pacing_ms: args.pacing_ms,
        log_level: args.log_level,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - stdout belongs to the quiz
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Using default config: {}", e);
    }
    log::info!("Jedi quiz starting up: {:?}", resolved);

    let code = match console::run(&resolved).await {
        Ok(end) => {
            log::info!("Session ended: {:?}", end);
            end.exit_code()
        }
        Err(e) => {
            log::error!("Session aborted: {}", e);
            eprintln!("Error: {e}");
            1
        }
    };

    // A timed-out quiz can leave a stdin read parked on the blocking pool,
    // which would keep the runtime from shutting down.
    std::process::exit(code);
}
