//! Artisan command catalogs
//!
//! `ARTISAN_COMMANDS` is the reference list shown by `artisan`;
//! `QUICK_COMMANDS` are the commands offered by `run`.

use super::catalog::{Categorized, Searchable};

/// Prefix of every Artisan invocation
pub const ARTISAN: &str = "php artisan";

/// Documentation page linked from every reference entry
pub const ARTISAN_DOCS_URL: &str = "https://laravel.com/docs/artisan";

/// A reference entry describing one Artisan command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtisanCommand {
    pub name: &'static str,
    pub description: &'static str,
    /// Example invocation; `php artisan <name>` when absent
    pub usage: Option<&'static str>,
    pub category: &'static str,
}

impl ArtisanCommand {
    /// Text copied by the primary action
    pub fn usage(&self) -> String {
        match self.usage {
            Some(usage) => usage.to_string(),
            None => format!("{} {}", ARTISAN, self.name),
        }
    }
}

impl Categorized for ArtisanCommand {
    fn category(&self) -> &str {
        self.category
    }
}

impl Searchable for ArtisanCommand {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.description, self.category]
    }
}

/// A command that can be executed in the configured project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickCommand {
    pub name: &'static str,
    /// Arguments passed to `php artisan`
    pub command: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

impl QuickCommand {
    /// Full command line as typed in a terminal
    pub fn command_line(&self) -> String {
        format!("{} {}", ARTISAN, self.command)
    }
}

impl Categorized for QuickCommand {
    fn category(&self) -> &str {
        self.category
    }
}

impl Searchable for QuickCommand {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.command, self.description, self.category]
    }
}

/// Look up a reference entry by its exact name (e.g. `make:model`)
pub fn find_command(name: &str) -> Option<&'static ArtisanCommand> {
    ARTISAN_COMMANDS.iter().find(|c| c.name == name)
}

/// Look up a quick command by its arguments (e.g. `migrate:fresh --seed`)
pub fn find_quick_command(command: &str) -> Option<&'static QuickCommand> {
    QUICK_COMMANDS.iter().find(|c| c.command == command)
}

pub static ARTISAN_COMMANDS: &[ArtisanCommand] = &[
    ArtisanCommand {
        name: "make:controller",
        description: "Create a new controller class",
        usage: Some("php artisan make:controller UserController"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:model",
        description: "Create a new Eloquent model class",
        usage: Some("php artisan make:model User -mfc"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:migration",
        description: "Create a new migration file",
        usage: Some("php artisan make:migration create_users_table"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:seeder",
        description: "Create a new seeder class",
        usage: Some("php artisan make:seeder UserSeeder"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:factory",
        description: "Create a new model factory",
        usage: Some("php artisan make:factory UserFactory"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:middleware",
        description: "Create a new middleware class",
        usage: Some("php artisan make:middleware CheckAge"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:request",
        description: "Create a new form request class",
        usage: Some("php artisan make:request StoreUserRequest"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:resource",
        description: "Create a new resource class",
        usage: Some("php artisan make:resource UserResource"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:command",
        description: "Create a new Artisan command",
        usage: Some("php artisan make:command SendEmails"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:event",
        description: "Create a new event class",
        usage: Some("php artisan make:event OrderShipped"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:listener",
        description: "Create a new event listener class",
        usage: Some("php artisan make:listener SendShipmentNotification"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:job",
        description: "Create a new job class",
        usage: Some("php artisan make:job ProcessPodcast"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:mail",
        description: "Create a new email class",
        usage: Some("php artisan make:mail OrderShipped"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:notification",
        description: "Create a new notification class",
        usage: Some("php artisan make:notification InvoicePaid"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:policy",
        description: "Create a new policy class",
        usage: Some("php artisan make:policy PostPolicy --model=Post"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:provider",
        description: "Create a new service provider class",
        usage: Some("php artisan make:provider RiakServiceProvider"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:test",
        description: "Create a new test class",
        usage: Some("php artisan make:test UserTest"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:component",
        description: "Create a new Blade component",
        usage: Some("php artisan make:component Alert"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:livewire",
        description: "Create a new Livewire component",
        usage: Some("php artisan make:livewire Counter"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:cast",
        description: "Create a new custom Eloquent cast class",
        usage: Some("php artisan make:cast Json"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:channel",
        description: "Create a new channel class",
        usage: Some("php artisan make:channel OrderChannel"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:exception",
        description: "Create a new custom exception class",
        usage: Some("php artisan make:exception InvalidOrderException"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:observer",
        description: "Create a new observer class",
        usage: Some("php artisan make:observer UserObserver --model=User"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:rule",
        description: "Create a new validation rule",
        usage: Some("php artisan make:rule Uppercase"),
        category: "Make",
    },
    ArtisanCommand {
        name: "make:scope",
        description: "Create a new Eloquent scope",
        usage: Some("php artisan make:scope AncientScope"),
        category: "Make",
    },
    ArtisanCommand {
        name: "migrate",
        description: "Run the database migrations",
        usage: Some("php artisan migrate"),
        category: "Database",
    },
    ArtisanCommand {
        name: "migrate:fresh",
        description: "Drop all tables and re-run all migrations",
        usage: Some("php artisan migrate:fresh --seed"),
        category: "Database",
    },
    ArtisanCommand {
        name: "migrate:rollback",
        description: "Rollback the last database migration",
        usage: Some("php artisan migrate:rollback"),
        category: "Database",
    },
    ArtisanCommand {
        name: "migrate:reset",
        description: "Rollback all database migrations",
        usage: Some("php artisan migrate:reset"),
        category: "Database",
    },
    ArtisanCommand {
        name: "migrate:status",
        description: "Show the status of each migration",
        usage: Some("php artisan migrate:status"),
        category: "Database",
    },
    ArtisanCommand {
        name: "db:seed",
        description: "Seed the database with records",
        usage: Some("php artisan db:seed"),
        category: "Database",
    },
    ArtisanCommand {
        name: "db:wipe",
        description: "Drop all tables, views, and types",
        usage: Some("php artisan db:wipe"),
        category: "Database",
    },
    ArtisanCommand {
        name: "cache:clear",
        description: "Flush the application cache",
        usage: Some("php artisan cache:clear"),
        category: "Cache",
    },
    ArtisanCommand {
        name: "config:cache",
        description: "Create a cache file for faster configuration loading",
        usage: Some("php artisan config:cache"),
        category: "Cache",
    },
    ArtisanCommand {
        name: "config:clear",
        description: "Remove the configuration cache file",
        usage: Some("php artisan config:clear"),
        category: "Cache",
    },
    ArtisanCommand {
        name: "route:cache",
        description: "Create a route cache file for faster route registration",
        usage: Some("php artisan route:cache"),
        category: "Cache",
    },
    ArtisanCommand {
        name: "route:clear",
        description: "Remove the route cache file",
        usage: Some("php artisan route:clear"),
        category: "Cache",
    },
    ArtisanCommand {
        name: "view:cache",
        description: "Compile all of the application's Blade templates",
        usage: Some("php artisan view:cache"),
        category: "Cache",
    },
    ArtisanCommand {
        name: "view:clear",
        description: "Clear all compiled view files",
        usage: Some("php artisan view:clear"),
        category: "Cache",
    },
    ArtisanCommand {
        name: "event:cache",
        description: "Discover and cache the application's events and listeners",
        usage: Some("php artisan event:cache"),
        category: "Cache",
    },
    ArtisanCommand {
        name: "optimize",
        description: "Cache the framework bootstrap files",
        usage: Some("php artisan optimize"),
        category: "Cache",
    },
    ArtisanCommand {
        name: "optimize:clear",
        description: "Remove the cached bootstrap files",
        usage: Some("php artisan optimize:clear"),
        category: "Cache",
    },
    ArtisanCommand {
        name: "serve",
        description: "Serve the application on the PHP development server",
        usage: Some("php artisan serve"),
        category: "Development",
    },
    ArtisanCommand {
        name: "tinker",
        description: "Interact with your application (REPL)",
        usage: Some("php artisan tinker"),
        category: "Development",
    },
    ArtisanCommand {
        name: "route:list",
        description: "List all registered routes",
        usage: Some("php artisan route:list"),
        category: "Development",
    },
    ArtisanCommand {
        name: "env",
        description: "Display the current framework environment",
        usage: Some("php artisan env"),
        category: "Development",
    },
    ArtisanCommand {
        name: "about",
        description: "Display basic information about your application",
        usage: Some("php artisan about"),
        category: "Development",
    },
    ArtisanCommand {
        name: "queue:work",
        description: "Start processing jobs on the queue",
        usage: Some("php artisan queue:work"),
        category: "Queue",
    },
    ArtisanCommand {
        name: "queue:listen",
        description: "Listen to a given queue",
        usage: Some("php artisan queue:listen"),
        category: "Queue",
    },
    ArtisanCommand {
        name: "queue:restart",
        description: "Restart queue worker daemons after their current job",
        usage: Some("php artisan queue:restart"),
        category: "Queue",
    },
    ArtisanCommand {
        name: "queue:failed",
        description: "List all of the failed queue jobs",
        usage: Some("php artisan queue:failed"),
        category: "Queue",
    },
    ArtisanCommand {
        name: "queue:retry",
        description: "Retry a failed queue job",
        usage: Some("php artisan queue:retry all"),
        category: "Queue",
    },
    ArtisanCommand {
        name: "queue:flush",
        description: "Flush all of the failed queue jobs",
        usage: Some("php artisan queue:flush"),
        category: "Queue",
    },
    ArtisanCommand {
        name: "schedule:run",
        description: "Run the scheduled commands",
        usage: Some("php artisan schedule:run"),
        category: "Schedule",
    },
    ArtisanCommand {
        name: "schedule:list",
        description: "List all scheduled tasks",
        usage: Some("php artisan schedule:list"),
        category: "Schedule",
    },
    ArtisanCommand {
        name: "schedule:work",
        description: "Start the schedule worker",
        usage: Some("php artisan schedule:work"),
        category: "Schedule",
    },
    ArtisanCommand {
        name: "key:generate",
        description: "Set the application key",
        usage: Some("php artisan key:generate"),
        category: "Auth",
    },
    ArtisanCommand {
        name: "storage:link",
        description: "Create the symbolic links configured for the application",
        usage: Some("php artisan storage:link"),
        category: "Auth",
    },
    ArtisanCommand {
        name: "vendor:publish",
        description: "Publish any publishable assets from vendor packages",
        usage: Some("php artisan vendor:publish --provider=..."),
        category: "Packages",
    },
    ArtisanCommand {
        name: "package:discover",
        description: "Rebuild the cached package manifest",
        usage: Some("php artisan package:discover"),
        category: "Packages",
    },
];

pub static QUICK_COMMANDS: &[QuickCommand] = &[
    QuickCommand {
        name: "Serve",
        command: "serve",
        description: "Start development server",
        category: "Common",
    },
    QuickCommand {
        name: "Tinker",
        command: "tinker",
        description: "Start REPL session",
        category: "Common",
    },
    QuickCommand {
        name: "Route List",
        command: "route:list",
        description: "List all routes",
        category: "Common",
    },
    QuickCommand {
        name: "Migrate",
        command: "migrate",
        description: "Run migrations",
        category: "Database",
    },
    QuickCommand {
        name: "Migrate Fresh",
        command: "migrate:fresh",
        description: "Drop all tables and migrate",
        category: "Database",
    },
    QuickCommand {
        name: "Migrate Fresh + Seed",
        command: "migrate:fresh --seed",
        description: "Fresh migrate with seeding",
        category: "Database",
    },
    QuickCommand {
        name: "Seed",
        command: "db:seed",
        description: "Run seeders",
        category: "Database",
    },
    QuickCommand {
        name: "Rollback",
        command: "migrate:rollback",
        description: "Rollback last migration",
        category: "Database",
    },
    QuickCommand {
        name: "Clear All Cache",
        command: "optimize:clear",
        description: "Clear all cached data",
        category: "Cache",
    },
    QuickCommand {
        name: "Cache Config",
        command: "config:cache",
        description: "Cache configuration",
        category: "Cache",
    },
    QuickCommand {
        name: "Cache Routes",
        command: "route:cache",
        description: "Cache routes",
        category: "Cache",
    },
    QuickCommand {
        name: "Cache Views",
        command: "view:cache",
        description: "Cache Blade views",
        category: "Cache",
    },
    QuickCommand {
        name: "Clear Cache",
        command: "cache:clear",
        description: "Clear application cache",
        category: "Cache",
    },
    QuickCommand {
        name: "Queue Work",
        command: "queue:work",
        description: "Start queue worker",
        category: "Queue",
    },
    QuickCommand {
        name: "Queue Listen",
        command: "queue:listen",
        description: "Listen to queue",
        category: "Queue",
    },
    QuickCommand {
        name: "Queue Restart",
        command: "queue:restart",
        description: "Restart queue workers",
        category: "Queue",
    },
    QuickCommand {
        name: "Run Tests",
        command: "test",
        description: "Run PHPUnit/Pest tests",
        category: "Testing",
    },
    QuickCommand {
        name: "Run Tests (Parallel)",
        command: "test --parallel",
        description: "Run tests in parallel",
        category: "Testing",
    },
];
