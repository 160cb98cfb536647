//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin for `browse`)
//! - Handles argument parsing and logging setup
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print rendered output

use super::browse::Session;
use super::render::{print_messages, render_categories, render_detail, render_listing, Listing};
use super::setup::{
    init_logging, print_grouped_help, print_help_for_command, print_subcommand_help,
    CatalogCommands, Cli, Commands, MiscCommands, ProductCommands,
};
use clap::Parser;
use vitrina::api::{ConfigAction, VitrinaApi, VitrinaPaths};
use vitrina::commands;
use vitrina::config::{ConfigKey, VitrinaConfig};
use vitrina::error::{Result, VitrinaError};
use vitrina::init::{config_dir, initialize, CatalogOrigin};
use vitrina::model::{LayoutMode, ALL_CATEGORIES};

struct AppContext {
    api: VitrinaApi<CatalogOrigin>,
    config: VitrinaConfig,
    use_color: Option<bool>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle help flag - at top level use grouped help, for subcommands use clap's default
    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    let use_color = color_choice(&cli);

    // Neither needs the catalog; config must stay usable when the catalog is broken.
    match &cli.command {
        Some(Commands::Misc(MiscCommands::Config { key, value })) => {
            return handle_config(key.clone(), value.clone(), use_color);
        }
        Some(Commands::Misc(MiscCommands::Help { command })) => {
            return handle_help(command.clone());
        }
        _ => {}
    }

    let ctx = init_context(&cli, use_color)?;

    match cli.command {
        Some(Commands::Catalog(cmd)) => match cmd {
            CatalogCommands::List {
                search,
                category,
                cards,
                table,
                json,
            } => {
                let layout = match (cards, table) {
                    (true, _) => Some(LayoutMode::Cards),
                    (_, true) => Some(LayoutMode::Table),
                    _ => None,
                };
                handle_list(&ctx, search, category, layout, json)
            }
            CatalogCommands::Categories => handle_categories(&ctx),
            CatalogCommands::Browse => handle_browse(&ctx),
        },
        Some(Commands::Product(cmd)) => match cmd {
            ProductCommands::View { code } => handle_view(&ctx, &code),
            ProductCommands::Link { code } => handle_link(&ctx, &code),
        },
        Some(Commands::Misc(_)) => Ok(()),
        None => handle_list(&ctx, None, None, None, false),
    }
}

fn color_choice(cli: &Cli) -> Option<bool> {
    if cli.no_color || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        Some(false)
    } else {
        None
    }
}

fn init_context(cli: &Cli, use_color: Option<bool>) -> Result<AppContext> {
    let ctx = initialize(cli.catalog.as_deref())?;
    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
        use_color,
    })
}

fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    category: Option<String>,
    layout: Option<LayoutMode>,
    json: bool,
) -> Result<()> {
    let query = search.unwrap_or_default();
    let category = category.unwrap_or_else(|| ALL_CATEGORIES.to_string());
    let result = ctx.api.list_products(&query, &category);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let listing = Listing {
        company: &ctx.config.company_name,
        products: &result.listed_products,
        total: result.total,
        query: &query,
        category: &category,
        layout: layout.unwrap_or(ctx.config.layout),
        selected: None,
        public_dir: ctx.config.public_dir.as_deref(),
    };
    print!("{}", render_listing(&listing, ctx.use_color));
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories();
    print!(
        "{}",
        render_categories(&result.categories, None, ctx.use_color)
    );
    Ok(())
}

fn handle_browse(ctx: &AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut session = Session::new(&ctx.api, ctx.config.public_dir.as_deref(), ctx.use_color);
    session.run(stdin.lock(), &mut stdout)
}

fn handle_view(ctx: &AppContext, code: &str) -> Result<()> {
    let result = ctx.api.view_product(code)?;
    let product = result
        .listed_products
        .first()
        .ok_or_else(|| VitrinaError::ProductNotFound(code.to_string()))?;
    print!(
        "{}",
        render_detail(
            product,
            ctx.config.public_dir.as_deref(),
            false,
            ctx.use_color
        )
    );
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_link(ctx: &AppContext, code: &str) -> Result<()> {
    let result = ctx.api.contact_link(code)?;
    if let Some(link) = result.contact_link {
        println!("{}", link);
    }
    Ok(())
}

fn handle_config(
    key: Option<String>,
    value: Option<String>,
    use_color: Option<bool>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k.parse::<ConfigKey>()?),
        (Some(k), Some(v)) => ConfigAction::Set(k.parse::<ConfigKey>()?, v),
    };

    let paths = VitrinaPaths {
        config_dir: config_dir()?,
    };
    let result = commands::config::run(&paths, action)?;
    print_messages(&result.messages, use_color);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(&cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
