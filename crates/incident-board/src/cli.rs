//! Argument parsing and dispatch

use crate::commands::{self, IncidentPatch, ListOptions};
use crate::config::BoardConfig;
use crate::logging;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use incident_model::{IncidentDraft, IncidentId, Severity};
use incident_view::{SeverityFilter, SortOrder};
use std::io::Write;
use std::path::PathBuf;

/// Build the `incident-board` command
#[must_use]
pub fn command() -> Command {
    Command::new("incident-board")
        .version(crate::VERSION)
        .about("Report, review and summarise AI safety incidents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding saved incidents (overrides config)"),
        )
        .subcommand(
            Command::new("list")
                .about("List incidents")
                .arg(filter_arg())
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .value_parser(value_parser!(SortOrder))
                        .help("Newest First, Oldest First, Severity (High to Low), Severity (Low to High)"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("report")
                .about("Report a new incident")
                .arg(
                    Arg::new("title")
                        .long("title")
                        .required(true)
                        .help("Short headline"),
                )
                .arg(
                    Arg::new("description")
                        .long("description")
                        .required(true)
                        .help("What happened"),
                )
                .arg(
                    Arg::new("severity")
                        .long("severity")
                        .default_value("Medium")
                        .value_parser(value_parser!(Severity))
                        .help("Low, Medium or High"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("update")
                .about("Change an existing incident")
                .arg(id_arg())
                .arg(Arg::new("title").long("title").help("New headline"))
                .arg(Arg::new("description").long("description").help("New details"))
                .arg(
                    Arg::new("severity")
                        .long("severity")
                        .value_parser(value_parser!(Severity))
                        .help("New severity"),
                ),
        )
        .subcommand(Command::new("delete").about("Remove an incident").arg(id_arg()))
        .subcommand(
            Command::new("summary")
                .about("Severity distribution, daily counts and recent incidents")
                .arg(filter_arg())
                .arg(json_arg()),
        )
}

fn filter_arg() -> Arg {
    Arg::new("severity")
        .long("severity")
        .value_parser(value_parser!(SeverityFilter))
        .help("All, Low, Medium or High")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_parser(value_parser!(u64))
        .help("Incident id")
}

/// Resolve configuration from parsed arguments
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded.
pub fn resolve_config(matches: &ArgMatches) -> anyhow::Result<BoardConfig> {
    let path = matches.get_one::<PathBuf>("config");
    let mut config = BoardConfig::load(path.map(PathBuf::as_path))?;
    if let Some(dir) = matches.get_one::<PathBuf>("data-dir") {
        config = config.with_data_dir(dir);
    }
    Ok(config)
}

/// Run the parsed command, writing results to `out`
///
/// # Errors
/// Returns an error if configuration, storage, validation or output fails.
pub fn run<W: Write>(matches: &ArgMatches, out: &mut W) -> anyhow::Result<()> {
    let config = resolve_config(matches)?;
    logging::init_tracing(&config);
    tracing::debug!("Using data directory {}", config.data_dir.display());

    let mut dashboard = commands::open_dashboard(&config)?;

    match matches.subcommand() {
        Some(("list", args)) => {
            let options = ListOptions {
                filter: args.get_one::<SeverityFilter>("severity").copied(),
                sort: args.get_one::<SortOrder>("sort").copied(),
                json: args.get_flag("json"),
            };
            commands::list(&mut dashboard, options, out)
        }
        Some(("report", args)) => {
            let draft = IncidentDraft::new(
                string_arg(args, "title").unwrap_or_default(),
                string_arg(args, "description").unwrap_or_default(),
                args.get_one::<Severity>("severity").copied().unwrap_or_default(),
            );
            commands::report(&mut dashboard, draft, args.get_flag("json"), out).map(|_| ())
        }
        Some(("update", args)) => {
            let patch = IncidentPatch {
                title: string_arg(args, "title"),
                description: string_arg(args, "description"),
                severity: args.get_one::<Severity>("severity").copied(),
            };
            commands::update(&mut dashboard, id(args), patch, out).map(|_| ())
        }
        Some(("delete", args)) => commands::delete(&mut dashboard, id(args), out),
        Some(("summary", args)) => commands::summary(
            &mut dashboard,
            args.get_one::<SeverityFilter>("severity").copied(),
            args.get_flag("json"),
            out,
        ),
        Some((other, _)) => anyhow::bail!("unknown command '{other}'"),
        None => anyhow::bail!("no command given"),
    }
}

fn string_arg(args: &ArgMatches, name: &str) -> Option<String> {
    args.get_one::<String>(name).cloned()
}

fn id(args: &ArgMatches) -> IncidentId {
    IncidentId(args.get_one::<u64>("id").copied().unwrap_or_default())
}
