//! New project scaffolding via the Laravel installer

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use super::runner::{self, Invocation, RunError};
use crate::config::expand_home;
use crate::platform::{self, PlatformError};

/// Installer command run in the parent directory
pub const INSTALLER: &str = "laravel new";

/// Authentication starter kit installed with the project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StarterKit {
    #[default]
    None,
    Breeze,
    Jetstream,
}

impl StarterKit {
    pub const ALL: [StarterKit; 3] = [Self::None, Self::Breeze, Self::Jetstream];

    pub fn value(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Breeze => "breeze",
            Self::Jetstream => "jetstream",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::None => "Fresh Laravel installation without any starter kit",
            Self::Breeze => "Minimal auth scaffolding with Blade, Vue, or React",
            Self::Jetstream => "Full-featured auth with teams, 2FA, and more",
        }
    }

    fn flag(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Breeze => Some("--breeze"),
            Self::Jetstream => Some("--jet"),
        }
    }
}

/// Database driver configured for the project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Database {
    #[default]
    Sqlite,
    Mysql,
    Pgsql,
    Sqlsrv,
}

impl Database {
    pub const ALL: [Database; 4] = [Self::Sqlite, Self::Mysql, Self::Pgsql, Self::Sqlsrv];

    pub fn value(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Mysql => "mysql",
            Self::Pgsql => "pgsql",
            Self::Sqlsrv => "sqlsrv",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Sqlite => "Simple file-based database",
            Self::Mysql => "Popular relational database",
            Self::Pgsql => "Advanced open-source database",
            Self::Sqlsrv => "Microsoft SQL Server",
        }
    }
}

macro_rules! value_enum_impls {
    ($ty:ident, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.value())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim().to_ascii_lowercase();
                $ty::ALL
                    .into_iter()
                    .find(|v| v.value() == s)
                    .ok_or_else(|| {
                        let valid: Vec<&str> = $ty::ALL.iter().map(|v| v.value()).collect();
                        format!("unknown {} '{}' (expected one of: {})", $what, s, valid.join(", "))
                    })
            }
        }
    };
}

value_enum_impls!(StarterKit, "starter kit");
value_enum_impls!(Database, "database");

/// Options for a new project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    /// Parent directory; a leading `~` is expanded
    pub directory: String,
    pub starter_kit: StarterKit,
    pub database: Database,
    pub git: bool,
}

impl NewProject {
    pub fn new(name: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            starter_kit: StarterKit::default(),
            database: Database::default(),
            git: true,
        }
    }

    /// Check the required fields before anything is executed
    pub fn validate(&self) -> Result<(), ScaffoldError> {
        if self.name.trim().is_empty() {
            return Err(ScaffoldError::MissingName);
        }
        Ok(())
    }

    /// Parent directory with `~` expanded
    pub fn parent_dir(&self) -> PathBuf {
        expand_home(self.directory.trim())
    }

    /// Directory the installer creates
    pub fn project_dir(&self) -> PathBuf {
        self.parent_dir().join(self.name.trim())
    }

    /// Installer arguments; flags are added only for non-default choices
    pub fn installer_args(&self) -> String {
        let mut args = self.name.trim().to_string();

        if self.database != Database::default() {
            args.push_str(&format!(" --database={}", self.database.value()));
        }
        if !self.git {
            args.push_str(" --no-git");
        }
        if let Some(flag) = self.starter_kit.flag() {
            args.push(' ');
            args.push_str(flag);
        }

        args
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::new(self.parent_dir(), INSTALLER, self.installer_args())
    }
}

/// Errors from creating a project
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Project name is required")]
    MissingName,

    #[error("Failed to create project: {0}")]
    Create(#[from] RunError),

    #[error("Project created, but {} could not be opened: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: PlatformError,
    },
}

/// Validate, run the installer and return the created directory
pub fn create(project: &NewProject) -> Result<PathBuf, ScaffoldError> {
    project.validate()?;
    runner::execute(&project.invocation())?;
    Ok(project.project_dir())
}

/// Open a created project with the system opener
pub fn open_project(path: PathBuf) -> Result<(), ScaffoldError> {
    platform::open_path(&path).map_err(|source| ScaffoldError::Open { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> NewProject {
        NewProject::new("blog", "/home/me/Projects")
    }

    #[cfg(unix)]
    #[test]
    fn test_default_command() {
        assert_eq!(
            project().invocation().command_line(),
            "cd \"/home/me/Projects\" && laravel new blog"
        );
    }

    #[test]
    fn test_all_flags() {
        let project = NewProject {
            database: Database::Pgsql,
            git: false,
            starter_kit: StarterKit::Jetstream,
            ..project()
        };
        assert_eq!(
            project.installer_args(),
            "blog --database=pgsql --no-git --jet"
        );
    }

    #[test]
    fn test_breeze_flag() {
        let project = NewProject {
            starter_kit: StarterKit::Breeze,
            ..project()
        };
        assert_eq!(project.installer_args(), "blog --breeze");
    }

    #[test]
    fn test_sqlite_adds_no_flag() {
        let project = NewProject {
            database: Database::Sqlite,
            ..project()
        };
        assert!(!project.installer_args().contains("--database"));
    }

    #[test]
    fn test_missing_name() {
        let blank = NewProject::new("   ", "/tmp");
        assert!(matches!(blank.validate(), Err(ScaffoldError::MissingName)));
        assert!(matches!(create(&blank), Err(ScaffoldError::MissingName)));
        assert_eq!(
            ScaffoldError::MissingName.to_string(),
            "Project name is required"
        );
    }

    #[test]
    fn test_project_dir() {
        assert_eq!(
            project().project_dir(),
            PathBuf::from("/home/me/Projects/blog")
        );
    }

    #[test]
    fn test_home_expansion() {
        if let Some(home) = dirs::home_dir() {
            let project = NewProject::new("shop", "~/Projects");
            assert_eq!(project.project_dir(), home.join("Projects").join("shop"));
        }
    }

    #[test]
    fn test_parse_options() {
        assert_eq!("Breeze".parse::<StarterKit>(), Ok(StarterKit::Breeze));
        assert_eq!("none".parse::<StarterKit>(), Ok(StarterKit::None));
        assert_eq!("sqlsrv".parse::<Database>(), Ok(Database::Sqlsrv));

        let err = "oracle".parse::<Database>().unwrap_err();
        assert!(err.contains("sqlite, mysql, pgsql, sqlsrv"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Database::Mysql.to_string(), "mysql");
        assert_eq!(StarterKit::Jetstream.to_string(), "jetstream");
    }

    #[cfg(unix)]
    #[test]
    fn test_create_failure_is_create_error() {
        let project = NewProject::new("blog", "/nonexistent/path/that/does/not/exist");
        assert!(matches!(create(&project), Err(ScaffoldError::Create(_))));
    }
}
