use anyhow::Result;
use clap::Parser;
use dispatch_bench::cli::{execute_run, execute_show_config, Cli, Commands, RunOptions};
use dispatch_bench::BenchError;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if let Err(error) = run(cli) {
        eprintln!("❌ エラー: {error:#}");
        let code = error
            .downcast_ref::<BenchError>()
            .map(BenchError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            policy,
            objects,
            measurements,
            repetitions,
            threads,
            seed,
            config,
            output,
            quiet,
        } => {
            let options = RunOptions {
                objects,
                measurements,
                repetitions,
                threads,
                seed,
                config,
                output,
                quiet,
            };
            execute_run(policy, options)?;
        }
        Commands::ShowConfig { config } => {
            execute_show_config(config)?;
        }
    }
    Ok(())
}

/// 診断ログの初期化。RUST_LOGが設定されていればそちらを優先する
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
