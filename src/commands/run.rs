//! Run command - Run Artisan commands in the configured project

use anyhow::{Context, Result};
use comfy_table::Cell;
use owo_colors::OwoColorize;
use std::path::PathBuf;

use super::utils;
use crate::config::{self, Settings, SettingsProvider};
use crate::laravel::artisan::{self, QuickCommand, ARTISAN, QUICK_COMMANDS};
use crate::laravel::catalog::grouped_matches;
use crate::laravel::runner::{self, Invocation};
use crate::platform;

/// Options for the run command
pub struct RunOptions {
    /// Artisan arguments or quick command name; lists quick commands when absent
    pub command: Option<String>,
    /// Project directory, overriding the settings
    pub project_dir: Option<PathBuf>,
    /// Filter for the quick command list
    pub query: Option<String>,
    /// Copy the command line instead of running it
    pub copy: bool,
    /// Open the project directory
    pub open_project: bool,
}

/// Execute the run command
pub fn execute(options: RunOptions) -> Result<()> {
    let settings = Settings::load()?;
    let project_dir = options
        .project_dir
        .map(|p| config::expand_home(&p.to_string_lossy()))
        .or_else(|| settings.project_directory());

    if options.open_project {
        let dir = require_project_dir(project_dir.as_ref())?;
        platform::open_path(dir)
            .with_context(|| format!("Failed to open {}", dir.display()))?;
        println!("{} {}", "Opened:".green(), dir.display());
        return Ok(());
    }

    let Some(command) = options.command else {
        if project_dir.is_none() {
            println!(
                "{} No project directory set. Set projectDirectory in {} or pass --project-dir.\n",
                "Warning:".yellow(),
                config::settings_path()?.display()
            );
        }
        println!("{}", render(QUICK_COMMANDS, options.query.as_deref()));
        return Ok(());
    };

    let args = resolve_command(&command);

    if options.copy {
        let line = format!("{} {}", ARTISAN, args);
        return utils::copy(&line, &line);
    }

    let dir = require_project_dir(project_dir.as_ref())?;
    let invocation = Invocation::artisan(dir, args.as_str());

    match artisan::find_quick_command(&args) {
        Some(quick) => println!("{} {} ({})", "Running:".blue(), quick.command_line(), quick.name),
        None => println!("{} {} {}", "Running:".blue(), ARTISAN, args),
    }
    let outcome = runner::run(&invocation)?;
    println!("{} {}", "Command completed:".green(), outcome.message());

    Ok(())
}

/// Map a quick command name (e.g. "Migrate Fresh") to its arguments;
/// anything else is passed to Artisan as typed
pub fn resolve_command(input: &str) -> String {
    let input = input.trim();
    QUICK_COMMANDS
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(input))
        .map(|c| c.command.to_string())
        .unwrap_or_else(|| input.to_string())
}

fn require_project_dir(dir: Option<&PathBuf>) -> Result<&PathBuf> {
    dir.context(
        "No project directory set. Set projectDirectory in settings.json, \
         LARAVEL_HELPER_PROJECT_DIR, or pass --project-dir",
    )
}

/// Render the quick commands grouped by category
pub fn render(commands: &[QuickCommand], query: Option<&str>) -> String {
    let mut table = utils::new_table();
    table.set_header(vec!["Category", "Name", "Command", "Description"]);

    let mut shown = 0;
    for (category, members) in grouped_matches(commands, query) {
        for command in members {
            table.add_row(vec![
                Cell::new(category),
                Cell::new(command.name),
                Cell::new(command.command_line()),
                Cell::new(command.description),
            ]);
            shown += 1;
        }
    }

    utils::with_footer(table, shown, "commands", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_command_by_name() {
        assert_eq!(resolve_command("Migrate Fresh + Seed"), "migrate:fresh --seed");
        assert_eq!(resolve_command("clear all cache"), "optimize:clear");
    }

    #[test]
    fn test_resolve_command_passthrough() {
        assert_eq!(resolve_command(" make:model Post -m "), "make:model Post -m");
        assert_eq!(resolve_command("migrate"), "migrate");
    }

    #[test]
    fn test_require_project_dir() {
        let err = require_project_dir(None).unwrap_err();
        assert!(err.to_string().starts_with("No project directory set"));

        let dir = PathBuf::from("/srv/app");
        assert_eq!(require_project_dir(Some(&dir)).unwrap(), &dir);
    }

    #[test]
    fn test_render_quick_commands() {
        let output = render(QUICK_COMMANDS, Some("queue"));
        assert!(output.contains("php artisan queue:work"));
        assert!(output.contains("php artisan queue:restart"));
        assert!(!output.contains("php artisan serve"));
        assert!(output.ends_with("3 commands matching \"queue\""));
    }
}
