use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Overrides the log filter (`VITRINA_LOG=debug`, `VITRINA_LOG=vitrina=trace`, ...).
pub const LOG_ENV: &str = "VITRINA_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "vitrina",
    bin_name = "vitrina",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Catálogo y lista de precios en la terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog JSON file (defaults to the configured or bundled catalog)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Catalog,
    Product,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Catalog => "Catalog Commands:",
            CommandGroup::Product => "Per-Product Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "categories" | "browse" => Some(CommandGroup::Catalog),
            "view" | "link" => Some(CommandGroup::Product),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Catalog,
            CommandGroup::Product,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("vitrina {version}\n"));
    output.push_str("Catálogo y lista de precios en la terminal\n");
    output.push('\n');
    output.push_str("Usage: vitrina [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --catalog <FILE>  Catalog JSON file\n");
    output.push_str("  -v, --verbose         Verbose output\n");
    output.push_str("      --no-color        Disable colored output\n");
    output.push_str("  -h, --help            Print help\n");
    output.push_str("  -V, --version         Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a specific subcommand using clap's built-in rendering
pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Catalog(c)) => match c {
            CatalogCommands::List { .. } => "list",
            CatalogCommands::Categories => "categories",
            CatalogCommands::Browse => "browse",
        },
        Some(Commands::Product(c)) => match c {
            ProductCommands::View { .. } => "view",
            ProductCommands::Link { .. } => "link",
        },
        Some(Commands::Misc(c)) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Help { .. } => "help",
        },
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(name);
}

pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

/// Installs the stderr log subscriber. `--verbose` forces debug, otherwise
/// `VITRINA_LOG` or `warn`.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Catalog(CatalogCommands),

    #[command(flatten)]
    Product(ProductCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List products, optionally filtered
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Search text, matched against code, product and category
        #[arg(short, long)]
        search: Option<String>,

        /// Category to show ("Todas" shows every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Card layout (defaults to the configured layout)
        #[arg(long, conflicts_with = "table")]
        cards: bool,

        /// Table layout (defaults to the configured layout)
        #[arg(long)]
        table: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the categories offered by the selector
    #[command(alias = "cats", display_order = 2)]
    Categories,

    /// Browse the catalog interactively
    #[command(alias = "b", display_order = 3)]
    Browse,
}

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// Show a product's detail and contact link
    #[command(alias = "v", display_order = 10)]
    View {
        /// Product code
        code: String,
    },

    /// Print the WhatsApp contact link for a product
    #[command(display_order = 11)]
    Link {
        /// Product code
        code: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (company-name, whatsapp-number, layout, catalog, public-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for vitrina or a subcommand
    #[command(display_order = 31)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_with_search_and_category() {
        let cli =
            Cli::try_parse_from(["vitrina", "list", "-s", "soga nylon", "-c", "Sogas"]).unwrap();
        match cli.command {
            Some(Commands::Catalog(CatalogCommands::List {
                search, category, ..
            })) => {
                assert_eq!(search.as_deref(), Some("soga nylon"));
                assert_eq!(category.as_deref(), Some("Sogas"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn layout_flags_conflict() {
        let cli = Cli::try_parse_from(["vitrina", "ls", "--cards"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Catalog(CatalogCommands::List {
                cards: true,
                table: false,
                ..
            }))
        ));
        assert!(Cli::try_parse_from(["vitrina", "ls", "--cards", "--table"]).is_err());
    }

    #[test]
    fn global_catalog_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["vitrina", "view", "A1", "--catalog", "x.json"]).unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("x.json")));
    }

    #[test]
    fn no_command_is_allowed() {
        let cli = Cli::try_parse_from(["vitrina"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn grouped_help_lists_every_visible_command() {
        let help = get_grouped_help();
        for name in ["list", "categories", "browse", "view", "link", "config"] {
            assert!(help.contains(name), "missing {} in help", name);
        }
        assert!(help.contains("Per-Product Commands:"));
    }
}
