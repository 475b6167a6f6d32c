mod cli;

use esa_client::http::{self, ErrorInfo};
use esa_client::{Config, RateLimitInfo};
use log::info;
use serde::Serialize;

#[derive(Serialize)]
struct GetOutput {
    value: Option<serde_json::Value>,
    rate_limit: Option<RateLimitInfo>,
    error: Option<ErrorInfo>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches();
    let log_level = matches.get_one::<String>("log-level").cloned();

    cli::init_logging(log_level.as_deref());

    if matches.get_flag("version") {
        println!("esa {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(get_matches) = matches.subcommand_matches("get") else {
        cli::build_cli().print_help()?;
        return Ok(());
    };
    let args = cli::get_args(get_matches);

    let cfg = Config::from_env()?;
    let client = http::build_client(&cfg)?;
    let path = match &args.team {
        Some(team) => http::team_path(team, &args.path),
        None => args.path.clone(),
    };
    let resp =
        http::rest_get_json::<serde_json::Value>(&client, &cfg, &path, &args.pagination).await;
    if let Some(rate) = &resp.rate_limit_info {
        info!("rate limit: {}/{} remaining", rate.remaining, rate.limit);
    }

    let failed = resp.error.is_some();
    let out = GetOutput {
        value: resp.value,
        rate_limit: resp.rate_limit_info,
        error: resp.error,
    };
    println!("{}", serde_json::to_string(&out)?);
    if failed {
        std::process::exit(1);
    }
    Ok(())
}
