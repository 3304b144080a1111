//! New command - Create a Laravel project with the installer

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::{self, Settings, SettingsProvider};
use crate::laravel::scaffold::{self, Database, NewProject, ScaffoldError, StarterKit};

/// Options for the new command
pub struct NewOptions {
    pub name: String,
    /// Parent directory; defaults to the configured project directory
    pub directory: Option<String>,
    pub starter_kit: StarterKit,
    pub database: Database,
    pub no_git: bool,
    /// Skip opening the project afterwards
    pub no_open: bool,
}

/// Build the project options, filling the parent directory from settings
pub fn project(options: &NewOptions, settings: &dyn SettingsProvider) -> NewProject {
    let directory = options
        .directory
        .clone()
        .filter(|d| !d.trim().is_empty())
        .or_else(|| {
            settings
                .project_directory()
                .map(|p| p.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| config::DEFAULT_PARENT_DIR.to_string());

    NewProject {
        name: options.name.clone(),
        directory,
        starter_kit: options.starter_kit,
        database: options.database,
        git: !options.no_git,
    }
}

/// Describe the selected starter kit and database
pub fn format_choices(project: &NewProject) -> String {
    format!(
        "  Starter kit: {} ({})\n  Database:    {} ({})",
        project.starter_kit,
        project.starter_kit.description(),
        project.database,
        project.database.description()
    )
}

/// Execute the new command
pub fn execute(options: NewOptions) -> Result<()> {
    let settings = Settings::load()?;
    let project = project(&options, &settings);
    project.validate()?;

    println!(
        "{} {} in {}",
        "Creating Laravel project...".blue(),
        project.name.trim(),
        project.parent_dir().display()
    );
    println!("{}", format_choices(&project));
    println!("  {}", project.invocation().command_line().dimmed());

    let path = scaffold::create(&project)?;
    println!(
        "{} {} is ready at {}",
        "Project created successfully!".green(),
        project.name.trim(),
        path.display()
    );

    if options.no_open {
        return Ok(());
    }

    match scaffold::open_project(path) {
        Ok(()) => {}
        Err(e @ ScaffoldError::Open { .. }) => {
            eprintln!("{} {}", "Warning:".yellow(), e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn options(directory: Option<&str>) -> NewOptions {
        NewOptions {
            name: "blog".to_string(),
            directory: directory.map(str::to_string),
            starter_kit: StarterKit::None,
            database: Database::Mysql,
            no_git: true,
            no_open: true,
        }
    }

    #[test]
    fn test_explicit_directory_wins() {
        let settings = Settings {
            project_directory: Some(PathBuf::from("/srv/projects")),
            ..Settings::default()
        };
        let project = project(&options(Some("/tmp/sites")), &settings);
        assert_eq!(project.directory, "/tmp/sites");
        assert_eq!(project.installer_args(), "blog --database=mysql --no-git");
    }

    #[test]
    fn test_directory_from_settings() {
        let settings = Settings {
            project_directory: Some(PathBuf::from("/srv/projects")),
            ..Settings::default()
        };
        let project = project(&options(None), &settings);
        assert_eq!(project.directory, "/srv/projects");
    }

    #[test]
    fn test_format_choices() {
        let mut project = project(&options(None), &Settings::default());
        project.starter_kit = StarterKit::Breeze;

        let choices = format_choices(&project);
        assert_eq!(
            choices,
            "  Starter kit: breeze (Minimal auth scaffolding with Blade, Vue, or React)\n  \
             Database:    mysql (Popular relational database)"
        );
    }

    #[test]
    fn test_directory_default() {
        let project = project(&options(Some("  ")), &Settings::default());
        assert_eq!(project.directory, config::DEFAULT_PARENT_DIR);
        assert!(!project.git);
    }
}
