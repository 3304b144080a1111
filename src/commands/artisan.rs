//! Artisan command - Browse the Artisan command reference

use anyhow::{bail, Result};
use comfy_table::Cell;

use super::utils;
use crate::laravel::artisan::{self, ArtisanCommand, ARTISAN_COMMANDS, ARTISAN_DOCS_URL};
use crate::laravel::catalog::grouped_matches;

/// Options for the artisan command
pub struct ArtisanOptions {
    /// Search query
    pub query: Option<String>,
    /// Command whose usage should be copied
    pub copy: Option<String>,
    /// Copy the bare command name instead of the usage example
    pub copy_name: bool,
    /// Open the Artisan documentation page
    pub open_docs: bool,
}

/// Execute the artisan command
pub fn execute(options: ArtisanOptions) -> Result<()> {
    if let Some(name) = options.copy.as_deref() {
        let Some(command) = artisan::find_command(name.trim()) else {
            bail!("Unknown Artisan command: {}", name);
        };
        return if options.copy_name {
            utils::copy(command.name, command.name)
        } else {
            let usage = command.usage();
            utils::copy(&usage, &usage)
        };
    }

    if options.open_docs {
        return utils::open_url(ARTISAN_DOCS_URL);
    }

    println!("{}", render(ARTISAN_COMMANDS, options.query.as_deref()));
    Ok(())
}

/// Render the reference as a table grouped by category
pub fn render(commands: &[ArtisanCommand], query: Option<&str>) -> String {
    let mut table = utils::new_table();
    table.set_header(vec!["Category", "Command", "Description", "Usage"]);

    let mut shown = 0;
    for (category, members) in grouped_matches(commands, query) {
        for command in members {
            table.add_row(vec![
                Cell::new(category),
                Cell::new(command.name),
                Cell::new(command.description),
                Cell::new(command.usage()),
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
    fn test_render_all() {
        let output = render(ARTISAN_COMMANDS, None);
        assert!(output.contains("make:controller"));
        assert!(output.contains("package:discover"));
        assert!(output.ends_with(&format!("{} commands", ARTISAN_COMMANDS.len())));
    }

    #[test]
    fn test_render_filtered() {
        let output = render(ARTISAN_COMMANDS, Some("queue:re"));
        assert!(output.contains("queue:restart"));
        assert!(output.contains("queue:retry"));
        assert!(!output.contains("make:job"));
        assert!(output.ends_with("2 commands matching \"queue:re\""));
    }

    #[test]
    fn test_copy_unknown_command() {
        let options = ArtisanOptions {
            query: None,
            copy: Some("make:unicorn".to_string()),
            copy_name: false,
            open_docs: false,
        };
        let err = execute(options).unwrap_err();
        assert_eq!(err.to_string(), "Unknown Artisan command: make:unicorn");
    }
}
