pub mod fetch;
pub mod help;
pub mod random;
pub mod serve;

use tracing::error;
use crate::config::Config;

/// Run the command named by the first argument
///
/// Returns `false` when the command failed so `main` can set the exit code.
pub async fn handle_args(config: &Config, args: &[&str]) -> bool {
    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (*command, rest),
        None => ("help", &[][..]),
    };

    let result = match command {
        "fetch" | "f" => fetch::execute(config, rest).await,
        "random" | "demo" => random::execute(config).await,
        "serve" => serve::execute(config).await,
        "help" | "-h" | "--help" => help::execute(),
        other => {
            help::execute().ok();
            Err(format!("❌ Unknown command: '{}'", other))
        }
    };

    if let Err(e) = result {
        error!("Error executing command {}: {}", command, e);
        return false;
    }

    true
}
