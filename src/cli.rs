// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::{infra::t, resolve_locale};

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return Some(lang.clone());
        }
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang="))
        .map(str::to_string)
}

/// Sets the UI locale from `--lang`, falling back to the system language.
/// Returns the locale in effect and whether it was given explicitly.
fn init_language() -> (String, bool) {
    match pre_parse_language() {
        Some(lang) => {
            let locale = resolve_locale(&lang).to_string();
            rust_i18n::set_locale(&locale);
            (locale, true)
        }
        None => {
            crate::init();
            (String::from(&*rust_i18n::locale()), false)
        }
    }
}

fn lang_arg(locale: &str) -> Arg {
    Arg::new("lang")
        .long("lang")
        .help(t!("cli.lang", locale = locale).to_string())
        .value_name("LANGUAGE")
        .global(true)
        .action(ArgAction::Set)
}

pub fn build_check_cli(locale: &str) -> Command {
    Command::new("check-output")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.check_about", locale = locale).to_string())
        .arg(lang_arg(locale))
        .arg(
            Arg::new("executable")
                .help(t!("cli.arg_executable", locale = locale).to_string())
                .value_name("EXECUTABLE")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("tests-dir")
                .long("tests-dir")
                .help(t!("cli.arg_tests_dir", locale = locale).to_string())
                .value_name("TESTS_DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("cli.arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

pub fn build_mtime_cli(locale: &str) -> Command {
    Command::new("sync-mtime")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.mtime_about", locale = locale).to_string())
        .arg(lang_arg(locale))
        .arg(
            Arg::new("root")
                .long("root")
                .help(t!("cli.arg_root", locale = locale).to_string())
                .value_name("ROOT")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

/// Parses the command line. Help and version requests exit with code 0;
/// usage errors are printed by clap and exit with code 1 like every other
/// failure.
fn parse_or_exit(cli: Command) -> ArgMatches {
    cli.try_get_matches().unwrap_or_else(|err| {
        if err.use_stderr() {
            let _ = err.print();
            std::process::exit(1);
        }
        err.exit()
    })
}

/// Entry point of the `check-output` binary.
pub async fn run_check_output() -> Result<()> {
    let (language, explicit_lang) = init_language();
    let matches = parse_or_exit(build_check_cli(&language));

    let executable = matches
        .get_one::<PathBuf>("executable")
        .unwrap() // Required
        .clone();
    let tests_dir = matches.get_one::<PathBuf>("tests-dir").cloned();
    let config = matches.get_one::<PathBuf>("config").cloned();

    commands::check::execute(executable, tests_dir, config, explicit_lang).await
}

/// Entry point of the `sync-mtime` binary.
pub async fn run_sync_mtime() -> Result<()> {
    let (language, _) = init_language();
    let matches = parse_or_exit(build_mtime_cli(&language));

    let root = matches.get_one::<PathBuf>("root").cloned();

    commands::mtime::execute(root).await
}
