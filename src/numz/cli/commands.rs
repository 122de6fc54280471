//! # CLI Layer
//!
//! The only place that knows about terminal I/O. It parses the flags, builds
//! the [`NumzApi`] from the configuration, dispatches one action and prints
//! the resulting [`CmdResult`](numz::api::CmdResult). Errors bubble up to
//! `main`, which prints them and exits with status 1.

use super::logger;
use super::render::{print_entries, print_messages};
use super::setup::{Action, Cli};
use clap::Parser;
use numz::api::NumzApi;
use numz::config::NumzConfig;
use numz::error::Result;
use numz::store::fs::FileStore;

struct AppContext {
    api: NumzApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.action() {
        Action::Generate => handle_generate(&mut ctx),
        Action::Add(number) => handle_add(&mut ctx, &number),
        Action::Blacklist(number) => handle_blacklist(&mut ctx, &number),
        Action::Show => handle_show(&ctx),
        Action::Last => handle_last(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let mut config = match &cli.config {
        Some(path) => NumzConfig::load_required(path)?,
        None => NumzConfig::default(),
    };
    if let Some(file) = &cli.file {
        config = config.with_storage_file(file);
    }
    log::debug!(
        "storage file {}, max attempts {}",
        config.storage_file.display(),
        config.max_attempts
    );

    let store = FileStore::new(&config.storage_file);
    Ok(AppContext {
        api: NumzApi::new(store, config),
    })
}

fn handle_generate(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.generate_number()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, number: &str) -> Result<()> {
    let result = ctx.api.add_number(number)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_blacklist(ctx: &mut AppContext, number: &str) -> Result<()> {
    let result = ctx.api.blacklist_number(number)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.show_numbers()?;
    print_entries(&result.listed_entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_last(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.last_number()?;
    print_messages(&result.messages);
    Ok(())
}
