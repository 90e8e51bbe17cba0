use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use quotz::api::{CmdMessage, ConfigAction, MessageLevel, QuotzApi};
use quotz::config::QuotzConfig;
use quotz::error::Result;
use quotz::model::Quote;
use quotz::remote::http::HttpRemote;
use quotz::store::fs::FileStore;
use quotz::sync::SyncScheduler;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: QuotzApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { text, category }) => handle_add(&mut ctx, &text, &category),
        Some(Commands::List { all }) => handle_list(&ctx, all),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Filter { category }) => handle_filter(&mut ctx, category),
        Some(Commands::Show) => handle_show(&mut ctx),
        Some(Commands::Import { path, replace }) => handle_import(&mut ctx, &path, replace),
        Some(Commands::Export { path }) => handle_export(&ctx, path),
        Some(Commands::Sync { watch }) => handle_sync(&mut ctx, watch),
        Some(Commands::Push) => handle_push(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_show(&mut ctx),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("QUOTZ_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "quotz", "quotz")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let config = QuotzConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());
    let api = QuotzApi::new(store, config, data_dir);

    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, text: &str, category: &str) -> Result<()> {
    let result = ctx.api.add_quote(text, category)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, all: bool) -> Result<()> {
    let result = ctx.api.list_quotes(all)?;
    for (i, quote) in result.listed_quotes.iter().enumerate() {
        println!("{:>3}. {}", i + 1, quote.display_line());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    for category in &result.categories {
        println!("{}", category);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_filter(ctx: &mut AppContext, category: Option<String>) -> Result<()> {
    let result = ctx.api.filter(category.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.show_random()?;
    if let Some(quote) = &result.picked {
        print_quote(quote);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: &std::path::Path, replace: bool) -> Result<()> {
    let result = ctx.api.import_quotes(path, replace)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_quotes(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_sync(ctx: &mut AppContext, watch: bool) -> Result<()> {
    let remote = HttpRemote::new(&ctx.api.settings().remote_url)?;

    let result = ctx.api.sync(&remote)?;
    print_messages(&result.messages);

    if !watch {
        return Ok(());
    }

    let interval = Duration::from_secs(ctx.api.settings().sync_interval_secs.max(1));
    let (tick_tx, tick_rx) = mpsc::channel();
    let _scheduler = SyncScheduler::start(interval, tick_tx);

    println!(
        "{}",
        format!("Watching remote every {}s (Ctrl-C to stop)", interval.as_secs()).dimmed()
    );
    for _tick in tick_rx {
        let result = ctx.api.sync(&remote)?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_push(ctx: &AppContext) -> Result<()> {
    let remote = HttpRemote::new(&ctx.api.settings().remote_url)?;
    let result = ctx.api.push(&remote)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("remote-url = {}", config.remote_url);
        println!("sync-interval = {}", config.sync_interval_secs);
        println!("default-category = {}", config.default_category);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_quote(quote: &Quote) {
    // One source of truth for the display format: the model's line.
    println!("{}", quote.display_line().bold());
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
