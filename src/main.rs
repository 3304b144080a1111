//! laravel-helper: CLI for Laravel docs, Artisan commands, snippets and project scaffolding

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;
mod laravel;
mod platform;

use laravel::scaffold::{Database, StarterKit};

#[derive(Parser)]
#[command(name = "laravel-helper")]
#[command(about = "CLI helper for Laravel development", long_about = None)]
#[command(version)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the Artisan command reference
    Artisan {
        /// Filter by name, description or category
        query: Option<String>,

        /// Copy the usage example of a command (e.g. make:model)
        #[arg(long, value_name = "NAME")]
        copy: Option<String>,

        /// With --copy, copy the bare command name instead
        #[arg(long, requires = "copy")]
        copy_name: bool,

        /// Open the Artisan documentation in the browser
        #[arg(long, conflicts_with = "copy")]
        open_docs: bool,
    },

    /// Browse Laravel documentation
    #[command(subcommand)]
    Docs(DocsCommand),

    /// Browse and copy code snippets
    Snippets {
        #[command(subcommand)]
        action: Option<SnippetsCommand>,

        /// Filter by title, description or category
        #[arg(long, short)]
        query: Option<String>,
    },

    /// Run an Artisan command in the project directory (lists quick commands if omitted)
    Run {
        /// Artisan arguments (e.g. "migrate:fresh --seed") or quick command name
        command: Option<String>,

        /// Laravel project directory (overrides settings)
        #[arg(long, short = 'd')]
        project_dir: Option<PathBuf>,

        /// Filter the quick command list
        #[arg(long, short, conflicts_with = "command")]
        query: Option<String>,

        /// Copy the command line instead of running it
        #[arg(long, short, requires = "command")]
        copy: bool,

        /// Open the project directory with the default application
        #[arg(long)]
        open_project: bool,
    },

    /// Create a new Laravel project with the installer
    New {
        /// Project name (becomes the folder name)
        name: String,

        /// Parent directory (default: project directory setting, else ~/Projects)
        #[arg(long, short = 'd')]
        directory: Option<String>,

        /// Starter kit: none, breeze, jetstream
        #[arg(long, short, default_value = "none")]
        starter_kit: StarterKit,

        /// Database: sqlite, mysql, pgsql, sqlsrv
        #[arg(long, default_value = "sqlite")]
        database: Database,

        /// Do not initialize a Git repository
        #[arg(long)]
        no_git: bool,

        /// Do not open the project after creating it
        #[arg(long)]
        no_open: bool,
    },

    /// Show resolved paths and effective settings
    Settings,
}

#[derive(Subcommand)]
enum DocsCommand {
    /// List favorites, recent pages and all documentation pages
    List {
        /// Filter by title, path or keyword
        query: Option<String>,

        /// Documentation version for the URLs
        #[arg(long)]
        version: Option<String>,
    },

    /// Open a page (or copy its URL) and add it to recent pages
    Open {
        /// Page path (e.g. routing, eloquent-relationships)
        path: String,

        /// Documentation version (default: selected version)
        #[arg(long)]
        version: Option<String>,

        /// Copy the URL instead of opening it
        #[arg(long, short, conflicts_with = "browser")]
        copy: bool,

        /// Open in the browser even if copying is the default
        #[arg(long, short)]
        browser: bool,
    },

    /// Add a page to favorites, or remove it
    Favorite {
        /// Page path
        path: String,
    },

    /// List favorite pages
    Favorites,

    /// List recently opened pages
    Recent,

    /// Show documentation versions, or select one
    Version {
        /// Version to select (e.g. 11.x)
        value: Option<String>,
    },

    /// Search Laracasts for a page's topic
    Laracasts {
        /// Page path
        path: String,
    },
}

#[derive(Subcommand)]
enum SnippetsCommand {
    /// Print a snippet's code
    Show {
        /// Snippet title (case-insensitive)
        title: String,

        /// Copy the code to the clipboard instead of printing it
        #[arg(long, short)]
        copy: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Failed:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Artisan {
            query,
            copy,
            copy_name,
            open_docs,
        } => {
            let options = commands::artisan::ArtisanOptions {
                query,
                copy,
                copy_name,
                open_docs,
            };
            commands::artisan::execute(options)?;
        }

        Commands::Docs(docs) => match docs {
            DocsCommand::List { query, version } => {
                commands::docs::list(
                    commands::docs::Listing::All,
                    query.as_deref(),
                    version.as_deref(),
                )?;
            }
            DocsCommand::Open {
                path,
                version,
                copy,
                browser,
            } => {
                commands::docs::open(&path, version.as_deref(), copy, browser)?;
            }
            DocsCommand::Favorite { path } => {
                commands::docs::favorite(&path)?;
            }
            DocsCommand::Favorites => {
                commands::docs::list(commands::docs::Listing::Favorites, None, None)?;
            }
            DocsCommand::Recent => {
                commands::docs::list(commands::docs::Listing::Recent, None, None)?;
            }
            DocsCommand::Version { value } => {
                commands::docs::version(value.as_deref())?;
            }
            DocsCommand::Laracasts { path } => {
                commands::docs::laracasts(&path)?;
            }
        },

        Commands::Snippets { action, query } => match action {
            Some(SnippetsCommand::Show { title, copy }) => {
                commands::snippets::show(&title, copy)?;
            }
            None => {
                commands::snippets::list(query.as_deref())?;
            }
        },

        Commands::Run {
            command,
            project_dir,
            query,
            copy,
            open_project,
        } => {
            let options = commands::run::RunOptions {
                command,
                project_dir,
                query,
                copy,
                open_project,
            };
            commands::run::execute(options)?;
        }

        Commands::New {
            name,
            directory,
            starter_kit,
            database,
            no_git,
            no_open,
        } => {
            let options = commands::new::NewOptions {
                name,
                directory,
                starter_kit,
                database,
                no_git,
                no_open,
            };
            commands::new::execute(options)?;
        }

        Commands::Settings => {
            commands::settings::execute()?;
        }
    }

    Ok(())
}
