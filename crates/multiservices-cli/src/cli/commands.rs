//! # CLI Layer
//!
//! The only place that knows about stdout/stderr and process exit.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments → [`Cli`] via clap
//! 2. **Context Setup**: [`initialize`] resolves the data dir, loads config and
//!    seeds sample providers
//! 3. **API Dispatch**: one `handle_*` per subcommand calling `DirectoryApi`
//! 4. **Output**: `CmdResult` → text through `render.rs`, or JSON with `--json`
//!
//! Errors bubble up as `anyhow::Error`; `main.rs` prints them and exits 1.

use super::logging;
use super::render::{
    render_client_list, render_config, render_json, render_messages, render_provider_detail,
    render_provider_list, render_validation_errors,
};
use super::setup::{Cli, Commands, ListArgs, RegisterCommands};
use anyhow::{anyhow, Result};
use clap::Parser;
use multiservices::config::DirectoryConfig;
use multiservices::error::DirectoryError;
use multiservices::init::{initialize, DirectoryContext};
use multiservices::search::ProviderFilter;
use multiservices::validation::{ClientForm, ProviderForm, ReviewForm};
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Printing the template needs no data directory.
    if let Some(Commands::Config { template: true }) = &cli.command {
        print!("{}", DirectoryConfig::template());
        return Ok(());
    }

    let mut ctx = initialize(cli.data)?;
    debug!(data_dir = %ctx.data_dir.display(), "directory ready");

    match cli.command {
        None => handle_list(&ctx, ListArgs::default()),
        Some(Commands::List(args)) => handle_list(&ctx, args),
        Some(Commands::Register(cmd)) => handle_register(&mut ctx, cmd),
        Some(Commands::Show { id, json }) => handle_show(&ctx, &id, json),
        Some(Commands::Review {
            provider_id,
            rating,
            comment,
        }) => handle_review(&mut ctx, provider_id, rating, comment),
        Some(Commands::Clients { json }) => handle_clients(&ctx, json),
        Some(Commands::Seed) => handle_seed(&mut ctx),
        Some(Commands::Config { .. }) => handle_config(&ctx),
    }
}

fn handle_list(ctx: &DirectoryContext, args: ListArgs) -> Result<()> {
    let mut filter = ProviderFilter::new();
    if let Some(term) = args.search {
        filter = filter.term(term);
    }
    if let Some(service) = args.service {
        filter = filter.service(service);
    }

    let result = ctx.api.list_providers(&filter, args.sort)?;
    if args.json {
        print!("{}", render_json(&result.providers)?);
    } else {
        print!("{}", render_provider_list(&result.providers));
    }
    Ok(())
}

fn handle_register(ctx: &mut DirectoryContext, cmd: RegisterCommands) -> Result<()> {
    let result = match cmd {
        RegisterCommands::Provider {
            name,
            email,
            phone,
            service,
            experience,
            description,
            location,
            hourly_rate,
        } => ctx.api.register_provider(&ProviderForm {
            name,
            email,
            phone,
            service,
            experience,
            description,
            location,
            hourly_rate,
        }),
        RegisterCommands::Client {
            name,
            email,
            phone,
            location,
        } => ctx.api.register_client(&ClientForm {
            name,
            email,
            phone,
            location,
        }),
    }
    .map_err(report_invalid_input)?;
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_show(ctx: &DirectoryContext, id: &str, json: bool) -> Result<()> {
    let result = ctx.api.show_provider(id)?;
    if json {
        print!("{}", render_json(&result)?);
        return Ok(());
    }
    if let Some(rated) = result.providers.first() {
        print!("{}", render_provider_detail(rated, &result.reviews));
    }
    Ok(())
}

fn handle_review(
    ctx: &mut DirectoryContext,
    provider_id: String,
    rating: i64,
    comment: Option<String>,
) -> Result<()> {
    let result = ctx
        .api
        .add_review(&ReviewForm {
            provider_id,
            rating,
            comment: comment.unwrap_or_default(),
        })
        .map_err(report_invalid_input)?;
    print!("{}", render_messages(&result.messages));
    if let Some(rated) = result.providers.first() {
        print!("{}", render_provider_list(std::slice::from_ref(rated)));
    }
    Ok(())
}

fn handle_clients(ctx: &DirectoryContext, json: bool) -> Result<()> {
    let result = ctx.api.list_clients()?;
    if json {
        print!("{}", render_json(&result.clients)?);
    } else {
        print!("{}", render_client_list(&result.clients));
    }
    Ok(())
}

fn handle_seed(ctx: &mut DirectoryContext) -> Result<()> {
    let result = ctx.api.seed_sample_data()?;
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_config(ctx: &DirectoryContext) -> Result<()> {
    print!("{}", render_config(&ctx.data_dir, &ctx.config));
    Ok(())
}

/// Lists each rejected field on stderr; other errors pass through unchanged.
fn report_invalid_input(err: DirectoryError) -> anyhow::Error {
    match err {
        DirectoryError::Validation(errors) => {
            eprint!("{}", render_validation_errors(&errors));
            anyhow!("{} invalid field(s)", errors.len())
        }
        other => other.into(),
    }
}
