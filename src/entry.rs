use std::ffi::OsString;
use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::debug;

use snipe::app::{self, RunPlan};
use snipe::args::SnipeArgs;
use snipe::config::{DEFAULT_CONFIG_FILES, apply_config, load_config};
use snipe::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let Some((mut args, matches)) = parse_args()? else {
        return Ok(());
    };

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config);
    }

    crate::logger::init_logging(args.verbose, args.no_color);

    let plan = RunPlan::from_args(&args)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let stdout = std::io::stdout();
    let summary = runtime.block_on(app::run(&plan, &mut stdout.lock()))?;
    debug!("Run summary: {:?}", summary);
    Ok(())
}

fn parse_args() -> AppResult<Option<(SnipeArgs, ArgMatches)>> {
    let mut cmd = SnipeArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = SnipeArgs::from_arg_matches(&matches)?;
    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}
