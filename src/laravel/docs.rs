//! Laravel documentation catalog and link builders

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use super::catalog::Searchable;

/// Base of every documentation URL (version and page are appended)
pub const DOCS_BASE_URL: &str = "https://laravel.com/docs/";

/// Laracasts search endpoint
pub const LARACASTS_SEARCH_URL: &str = "https://laracasts.com/search";

/// Characters escaped in a search term: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A selectable documentation version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocVersion {
    pub title: &'static str,
    pub value: &'static str,
}

/// One documentation page; `path` is its stable identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocPage {
    pub title: &'static str,
    pub path: &'static str,
    pub keywords: &'static [&'static str],
}

/// A titled group of pages, as in the documentation sidebar
#[derive(Debug, Clone, Copy)]
pub struct DocSection {
    pub title: &'static str,
    pub pages: &'static [DocPage],
}

/// A page together with the title of the section it was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPage {
    pub page: &'static DocPage,
    pub section: &'static str,
}

const fn page(
    title: &'static str,
    path: &'static str,
    keywords: &'static [&'static str],
) -> DocPage {
    DocPage {
        title,
        path,
        keywords,
    }
}

impl Searchable for DocPage {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title, self.path];
        fields.extend_from_slice(self.keywords);
        fields
    }
}

impl Searchable for ResolvedPage {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = self.page.search_fields();
        fields.push(self.section);
        fields
    }
}

/// Build the documentation URL of `path` for `version`
pub fn doc_url(path: &str, version: &str) -> Result<Url, url::ParseError> {
    Url::parse(DOCS_BASE_URL)?.join(&format!("{}/{}", version, path))
}

/// Build a Laracasts search URL for `topic`
pub fn laracasts_url(topic: &str) -> String {
    format!(
        "{}?q={}",
        LARACASTS_SEARCH_URL,
        utf8_percent_encode(topic, QUERY_COMPONENT)
    )
}

/// Resolve a page identifier against the catalog
///
/// Returns the first section containing the page; `None` for identifiers
/// that no longer exist.
pub fn find_page(path: &str) -> Option<ResolvedPage> {
    LARAVEL_DOCS.iter().find_map(|section| {
        section
            .pages
            .iter()
            .find(|p| p.path == path)
            .map(|page| ResolvedPage {
                page,
                section: section.title,
            })
    })
}

/// Look up a version by its value (e.g. `11.x`)
pub fn find_version(value: &str) -> Option<&'static DocVersion> {
    VERSIONS.iter().find(|v| v.value == value)
}

pub static VERSIONS: &[DocVersion] = &[
    DocVersion {
        title: "Laravel Master (Beta)",
        value: "master",
    },
    DocVersion {
        title: "Laravel 12.x (Latest)",
        value: "12.x",
    },
    DocVersion {
        title: "Laravel 11.x (LTS)",
        value: "11.x",
    },
    DocVersion {
        title: "Laravel 10.x",
        value: "10.x",
    },
    DocVersion {
        title: "Laravel 9.x",
        value: "9.x",
    },
    DocVersion {
        title: "Laravel 8.x",
        value: "8.x",
    },
    DocVersion {
        title: "Laravel 7.x",
        value: "7.x",
    },
    DocVersion {
        title: "Laravel 6.x",
        value: "6.x",
    },
    DocVersion {
        title: "Laravel 5.8",
        value: "5.8",
    },
    DocVersion {
        title: "Laravel 5.7",
        value: "5.7",
    },
    DocVersion {
        title: "Laravel 5.6",
        value: "5.6",
    },
    DocVersion {
        title: "Laravel 5.5",
        value: "5.5",
    },
    DocVersion {
        title: "Laravel 5.4",
        value: "5.4",
    },
    DocVersion {
        title: "Laravel 5.3",
        value: "5.3",
    },
    DocVersion {
        title: "Laravel 5.2",
        value: "5.2",
    },
    DocVersion {
        title: "Laravel 5.1",
        value: "5.1",
    },
    DocVersion {
        title: "Laravel 5.0",
        value: "5.0",
    },
];

pub static LARAVEL_DOCS: &[DocSection] = &[
    DocSection {
        title: "Prologue",
        pages: &[
            page("Release Notes", "releases", &[]),
            page("Upgrade Guide", "upgrade", &[]),
            page("Contribution Guide", "contributions", &[]),
        ],
    },
    DocSection {
        title: "Getting Started",
        pages: &[
            page("Installation", "installation", &["setup", "install"]),
            page("Configuration", "configuration", &["env", "environment"]),
            page("Directory Structure", "structure", &["folders", "files"]),
            page("Frontend", "frontend", &["js", "css", "assets"]),
            page("Starter Kits", "starter-kits", &["breeze", "jetstream"]),
            page("Deployment", "deployment", &["production", "server"]),
        ],
    },
    DocSection {
        title: "Architecture Concepts",
        pages: &[
            page("Request Lifecycle", "lifecycle", &["request", "boot"]),
            page("Service Container", "container", &["ioc", "dependency injection", "di"]),
            page("Service Providers", "providers", &["boot", "register"]),
            page("Facades", "facades", &["static", "proxy"]),
        ],
    },
    DocSection {
        title: "The Basics",
        pages: &[
            page("Routing", "routing", &["routes", "url", "web", "api"]),
            page("Middleware", "middleware", &["filter", "request"]),
            page("CSRF Protection", "csrf", &["token", "security"]),
            page("Controllers", "controllers", &["handler", "action"]),
            page("Requests", "requests", &["input", "form"]),
            page("Responses", "responses", &["output", "json", "view"]),
            page("Views", "views", &["template", "html"]),
            page("Blade Templates", "blade", &["template", "components", "slots"]),
            page("Asset Bundling", "vite", &["vite", "css", "js", "build"]),
            page("URL Generation", "urls", &["links", "route"]),
            page("Session", "session", &["storage", "flash"]),
            page("Validation", "validation", &["rules", "form", "input"]),
            page("Error Handling", "errors", &["exceptions", "debug"]),
            page("Logging", "logging", &["log", "debug", "monolog"]),
        ],
    },
    DocSection {
        title: "Digging Deeper",
        pages: &[
            page("Artisan Console", "artisan", &["cli", "commands"]),
            page("Broadcasting", "broadcasting", &["websocket", "pusher", "realtime"]),
            page("Cache", "cache", &["redis", "memcached", "storage"]),
            page("Collections", "collections", &["array", "map", "filter"]),
            page("Concurrency", "concurrency", &["parallel", "async"]),
            page("Context", "context", &["request context"]),
            page("Contracts", "contracts", &["interfaces"]),
            page("Events", "events", &["listeners", "dispatch"]),
            page("File Storage", "filesystem", &["files", "s3", "disk"]),
            page("Helpers", "helpers", &["functions", "utilities"]),
            page("HTTP Client", "http-client", &["guzzle", "api", "fetch"]),
            page("Localization", "localization", &["translation", "lang", "i18n"]),
            page("Mail", "mail", &["email", "smtp", "mailables"]),
            page("Notifications", "notifications", &["email", "sms", "slack"]),
            page("Package Development", "packages", &["library", "composer"]),
            page("Processes", "processes", &["shell", "exec", "command"]),
            page("Queues", "queues", &["jobs", "workers", "async"]),
            page("Rate Limiting", "rate-limiting", &["throttle", "limit"]),
            page("Strings", "strings", &["str", "text", "fluent"]),
            page("Task Scheduling", "scheduling", &["cron", "schedule", "jobs"]),
        ],
    },
    DocSection {
        title: "Security",
        pages: &[
            page("Authentication", "authentication", &["login", "auth", "user"]),
            page("Authorization", "authorization", &["gates", "policies", "permissions"]),
            page("Email Verification", "verification", &["verify", "email"]),
            page("Encryption", "encryption", &["encrypt", "decrypt", "secure"]),
            page("Hashing", "hashing", &["bcrypt", "password", "hash"]),
            page("Password Reset", "passwords", &["forgot", "reset", "email"]),
        ],
    },
    DocSection {
        title: "Database",
        pages: &[
            page("Getting Started", "database", &["db", "mysql", "postgres"]),
            page("Query Builder", "queries", &["sql", "select", "where", "join"]),
            page("Pagination", "pagination", &["pages", "limit", "offset"]),
            page("Migrations", "migrations", &["schema", "table", "columns"]),
            page("Seeding", "seeding", &["seed", "data", "factory"]),
            page("Redis", "redis", &["cache", "pubsub"]),
            page("MongoDB", "mongodb", &["nosql", "document"]),
        ],
    },
    DocSection {
        title: "Eloquent ORM",
        pages: &[
            page("Getting Started", "eloquent", &["model", "orm", "active record"]),
            page("Relationships", "eloquent-relationships", &["hasMany", "belongsTo", "pivot"]),
            page("Collections", "eloquent-collections", &["array", "model collection"]),
            page("Mutators / Casts", "eloquent-mutators", &["accessors", "mutators", "cast"]),
            page("API Resources", "eloquent-resources", &["json", "transform", "api"]),
            page("Serialization", "eloquent-serialization", &["json", "toArray"]),
            page("Factories", "eloquent-factories", &["testing", "fake", "seed"]),
        ],
    },
    DocSection {
        title: "Testing",
        pages: &[
            page("Getting Started", "testing", &["phpunit", "pest", "test"]),
            page("HTTP Tests", "http-tests", &["feature", "integration", "request"]),
            page("Console Tests", "console-tests", &["artisan", "command"]),
            page("Browser Tests", "dusk", &["dusk", "selenium", "e2e"]),
            page("Database Testing", "database-testing", &["refresh", "factory"]),
            page("Mocking", "mocking", &["mock", "fake", "spy"]),
        ],
    },
    DocSection {
        title: "Packages",
        pages: &[
            page("Breeze", "starter-kits#laravel-breeze", &["auth", "starter"]),
            page("Cashier (Stripe)", "billing", &["payments", "subscriptions", "stripe"]),
            page("Cashier (Paddle)", "cashier-paddle", &["payments", "subscriptions"]),
            page("Dusk", "dusk", &["browser", "testing", "selenium"]),
            page("Envoy", "envoy", &["deploy", "ssh", "tasks"]),
            page("Fortify", "fortify", &["auth", "backend"]),
            page("Folio", "folio", &["pages", "file-based routing"]),
            page("Homestead", "homestead", &["vagrant", "vm", "development"]),
            page("Horizon", "horizon", &["queue", "dashboard", "redis"]),
            page("MCP", "mcp", &["model context protocol", "ai"]),
            page("Mix", "mix", &["webpack", "assets", "legacy"]),
            page("Octane", "octane", &["swoole", "roadrunner", "performance"]),
            page("Passport", "passport", &["oauth", "api", "tokens"]),
            page("Pennant", "pennant", &["feature flags", "toggles"]),
            page("Pint", "pint", &["code style", "formatter", "php-cs-fixer"]),
            page("Precognition", "precognition", &["validation", "live", "frontend"]),
            page("Prompts", "prompts", &["cli", "interactive", "console"]),
            page("Pulse", "pulse", &["monitoring", "dashboard", "performance"]),
            page("Reverb", "reverb", &["websocket", "realtime", "server"]),
            page("Sail", "sail", &["docker", "development", "container"]),
            page("Sanctum", "sanctum", &["api", "tokens", "spa", "auth"]),
            page("Scout", "scout", &["search", "algolia", "meilisearch"]),
            page("Socialite", "socialite", &["oauth", "social login", "google", "github"]),
            page("Telescope", "telescope", &["debug", "dashboard", "monitoring"]),
            page("Valet", "valet", &["macos", "development", "nginx"]),
        ],
    },
];
