// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result};
use config::Config;
use runtime::{MemoryRuntime, ServiceRuntime};
use std::env;
use std::path::PathBuf;
use tenants_app::AppState;

const DEMO_SEED: u64 = 42;
const DEMO_TENANTS: usize = 12;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1))?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    let config_path = resolve_config_path(&options, Config::default_path)?;
    if options.print_config_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&config_path));
        return Ok(());
    }

    let config = Config::load(&config_path).with_context(|| {
        format!(
            "load config {}; run `tenants --print-example-config` to generate a template",
            config_path.display()
        )
    })?;

    let log_file = config.log_file()?;
    if !options.check_only {
        logging::init(config.log_level(), &log_file)?;
    }

    let mut state = AppState {
        filter: config.default_filter(),
        sort: config.default_sort(),
        ..AppState::default()
    };

    if options.demo {
        tracing::info!(seed = DEMO_SEED, "starting in demo mode");
        let mut runtime = MemoryRuntime::seeded(DEMO_SEED, DEMO_TENANTS);
        if options.check_only {
            let count = tenants_tui::AppRuntime::load_tenants(&mut runtime)?.len();
            println!("ok: demo runtime seeded with {count} tenants");
            return Ok(());
        }
        return tenants_tui::run_app(&mut state, &mut runtime);
    }

    let base_url = config.service_base_url();
    let client = tenants_client::Client::new(&base_url, config.service_timeout()?)
        .with_context(|| {
            format!(
                "invalid [service] config in {}; fix base_url/timeout values",
                config_path.display()
            )
        })?;

    if options.check_only {
        let count = client.ping()?;
        println!("ok: {base_url} answered with {count} tenants");
        return Ok(());
    }

    tracing::info!(%base_url, log_file = %log_file.display(), "starting");
    let mut runtime = ServiceRuntime::new(client);
    tenants_tui::run_app(&mut state, &mut runtime)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    /// Set by `--config`; otherwise the default path is resolved on demand.
    config_path: Option<PathBuf>,
    print_config_path: bool,
    demo: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: None,
        print_config_path: false,
        demo: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = Some(PathBuf::from(value.as_ref()));
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn resolve_config_path<F>(options: &CliOptions, default_path: F) -> Result<PathBuf>
where
    F: FnOnce() -> Result<PathBuf>,
{
    match &options.config_path {
        Some(path) => Ok(path.clone()),
        None => default_path(),
    }
}

fn print_help() {
    println!("tenants");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --demo                   Launch with seeded demo tenants (in-memory)");
    println!("  --check                  Validate config and reach the tenant service");
    println!("  --help                   Show this help");
}

#[cfg(test)]
mod tests {
    use super::{CliOptions, parse_cli_args, resolve_config_path};
    use anyhow::{Result, bail};
    use std::path::PathBuf;

    fn default_options_path() -> Result<PathBuf> {
        Ok(PathBuf::from("/tmp/tenants-config.toml"))
    }

    fn no_config_dir() -> Result<PathBuf> {
        bail!("cannot resolve config directory")
    }

    #[test]
    fn parse_cli_args_defaults_leave_config_path_unset() -> Result<()> {
        let options = parse_cli_args(Vec::<String>::new())?;
        assert_eq!(
            options,
            CliOptions {
                config_path: None,
                print_config_path: false,
                demo: false,
                print_example: false,
                check_only: false,
                show_help: false,
            }
        );
        assert_eq!(
            resolve_config_path(&options, default_options_path)?,
            PathBuf::from("/tmp/tenants-config.toml")
        );
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_config_path_override() -> Result<()> {
        let options = parse_cli_args(vec!["--config", "/custom/config.toml"])?;
        assert_eq!(
            options.config_path,
            Some(PathBuf::from("/custom/config.toml"))
        );
        Ok(())
    }

    #[test]
    fn config_override_skips_default_path_resolution() -> Result<()> {
        let options = parse_cli_args(vec!["--config", "/custom/config.toml"])?;
        assert_eq!(
            resolve_config_path(&options, no_config_dir)?,
            PathBuf::from("/custom/config.toml")
        );

        let options = parse_cli_args(Vec::<String>::new())?;
        let error =
            resolve_config_path(&options, no_config_dir).expect_err("default path should fail");
        assert!(error.to_string().contains("config directory"));
        Ok(())
    }

    #[test]
    fn parse_cli_args_errors_for_missing_config_value() {
        let error = parse_cli_args(vec!["--config"]).expect_err("missing config value should fail");
        assert!(error.to_string().contains("--config requires a file path"));
    }

    #[test]
    fn parse_cli_args_errors_for_unknown_argument() {
        let error = parse_cli_args(vec!["--print-path"]).expect_err("unknown arg should fail");
        let message = error.to_string();
        assert!(message.contains("unknown argument"));
        assert!(message.contains("--help"));
    }

    #[test]
    fn parse_cli_args_sets_print_and_check_flags() -> Result<()> {
        let options = parse_cli_args(vec![
            "--print-config-path",
            "--print-example-config",
            "--check",
        ])?;
        assert!(options.print_config_path);
        assert!(!options.demo);
        assert!(options.print_example);
        assert!(options.check_only);
        assert!(!options.show_help);
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_demo_flag() -> Result<()> {
        let options = parse_cli_args(vec!["--demo"])?;
        assert!(options.demo);
        assert!(!options.check_only);
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_help_flag_for_long_and_short_variants() -> Result<()> {
        let long = parse_cli_args(vec!["--help"])?;
        assert!(long.show_help);
        assert_eq!(long.config_path, None);

        let short = parse_cli_args(vec!["-h"])?;
        assert!(short.show_help);
        Ok(())
    }
}
