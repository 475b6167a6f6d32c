use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use esa_client::types::PaginationParameters;

pub struct GetArgs {
    pub path: String,
    pub team: Option<String>,
    pub pagination: PaginationParameters,
}

pub fn build_cli() -> Command {
    Command::new("esa")
        .about("esa.io REST API client")
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .num_args(1)
                .global(true)
                .help("Override RUST_LOG level (e.g., info, debug)"),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help("Print version and exit")
                .action(ArgAction::SetTrue),
        )
        .disable_version_flag(true)
        .subcommand(
            Command::new("get")
                .about("GET an API path and print the JSON body with rate limit info")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .help("API path, e.g. /v1/teams/docs/comments"),
                )
                .arg(
                    Arg::new("team")
                        .long("team")
                        .num_args(1)
                        .help("Resolve PATH relative to /v1/teams/<TEAM>"),
                )
                .arg(
                    Arg::new("page")
                        .long("page")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("per-page")
                        .long("per-page")
                        .value_parser(value_parser!(u32)),
                ),
        )
}

pub fn get_args(matches: &ArgMatches) -> GetArgs {
    GetArgs {
        path: matches
            .get_one::<String>("path")
            .cloned()
            .unwrap_or_default(),
        team: matches.get_one::<String>("team").cloned(),
        pagination: PaginationParameters {
            page: matches.get_one::<u32>("page").copied(),
            per_page: matches.get_one::<u32>("per-page").copied(),
        },
    }
}

pub fn init_logging(level: Option<&str>) {
    // Explicit level wins over RUST_LOG; default to info.
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(lvl) = level {
        builder.parse_filters(lvl);
    }
    builder.init();
}
