//! # CLI Layer
//!
//! One possible UI client for tally. This is the only code that knows about
//! stdout, stderr and exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments → [`Cli`] via clap
//! 2. **Context Setup**: data directory, config, logging, `TallyApi<FsBackend>`
//! 3. **API Dispatch**: one `handle_*` per subcommand
//! 4. **Output**: `CmdResult` → colored text via `render`
//!
//! The increment presets live here, not in the store: the CLI only offers the
//! configured steps, the store independently rejects anything non-positive.

use super::render::{print_messages, render_counters, render_total};
use super::setup::{Cli, Commands};
use super::shell;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tally::api::{CmdResult, TallyApi};
use tally::config::{resolve_data_dir, TallyConfig, HOME_ENV};
use tally::error::{Result, TallyError};
use tally::logging;
use tally::store::fs::FsBackend;
use tally::store::StorageBackend;

struct AppContext {
    api: TallyApi<FsBackend>,
    config: TallyConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { by, name }) => handle_add(&mut ctx, name.join(" "), by),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Total) => handle_total(&ctx),
        Some(Commands::Up { selectors }) => {
            let result = ctx.api.increment(&selectors)?;
            report(&result)
        }
        Some(Commands::Down { selectors }) => {
            let result = ctx.api.decrement(&selectors)?;
            report(&result)
        }
        Some(Commands::Reset { selectors }) => {
            let result = ctx.api.reset(&selectors)?;
            report(&result)
        }
        Some(Commands::Delete { selectors }) => {
            let result = ctx.api.delete(&selectors)?;
            report(&result)
        }
        Some(Commands::Shell) => handle_shell(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let env_home = std::env::var_os(HOME_ENV).map(PathBuf::from);
    let data_dir = resolve_data_dir(cli.data_dir.clone(), env_home)?;
    let config = TallyConfig::load(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), "context initialized");

    Ok(AppContext {
        api: TallyApi::new(FsBackend::new(data_dir)),
        config,
    })
}

/// Creates a counter after checking the step against the configured presets.
pub(super) fn add_counter<B: StorageBackend>(
    api: &mut TallyApi<B>,
    config: &TallyConfig,
    name: &str,
    by: Option<i64>,
) -> Result<CmdResult> {
    let increment = by.unwrap_or(config.default_increment);
    if !config.allows_increment(increment) {
        return Err(TallyError::Api(format!(
            "increment must be one of {}",
            config.presets_label()
        )));
    }
    api.add(name, increment)
}

fn handle_add(ctx: &mut AppContext, name: String, by: Option<i64>) -> Result<()> {
    let result = add_counter(&mut ctx.api, &ctx.config, &name, by)?;
    report(&result)
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print!(
        "{}",
        render_counters(
            &result.listed,
            result.total.unwrap_or_default(),
            ctx.config.show_ids
        )
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_total(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.state().total);
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell::run(&mut ctx.api, &ctx.config, stdin.lock(), &mut stdout)
}

fn report(result: &CmdResult) -> Result<()> {
    print_messages(&result.messages);
    if let Some(total) = result.total {
        print!("{}", render_total(total));
    }
    Ok(())
}
