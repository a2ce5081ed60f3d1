use chrono::Duration;
use clap::{Args as ClapArgs, Parser, ValueEnum};
use hunger_rescue_core::domain::common::{AuthConfig, DatabaseConfig, RescueConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "hunger-rescue", version, about = "Hunger Rescue API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub log: LogArgs,

    /// Deployment mode; production switches the session cookie to cross-site + secure.
    #[arg(long = "env", env = "NODE_ENV", value_enum, default_value_t = Environment::Development)]
    pub env: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "tls-cert", env = "TLS_CERT")]
    pub tls_cert: Option<String>,

    #[arg(long = "tls-key", env = "TLS_KEY")]
    pub tls_key: Option<String>,

    #[arg(long = "disable-metrics", env = "DISABLE_METRICS", default_value_t = false)]
    pub disable_metrics: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(id = "db_host", long = "db-host", env = "DB_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "db_port", long = "db-port", env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "db-user", env = "DB_USER")]
    pub user: String,

    #[arg(long = "db-pass", env = "DB_PASS")]
    pub password: String,

    #[arg(long = "db-name", env = "DB_NAME", default_value = "food_db")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AuthArgs {
    #[arg(long = "access-token-secret", env = "ACCESS_TOKEN_SECRET")]
    pub access_token_secret: String,

    #[arg(long = "token-ttl-hours", env = "TOKEN_TTL_HOURS", default_value_t = 5)]
    pub token_ttl_hours: i64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl Args {
    pub fn is_production(&self) -> bool {
        self.env == Environment::Production
    }
}

impl From<Args> for RescueConfig {
    fn from(args: Args) -> Self {
        RescueConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            auth: AuthConfig::from(&args.auth),
        }
    }
}

impl From<&AuthArgs> for AuthConfig {
    fn from(auth: &AuthArgs) -> Self {
        AuthConfig {
            access_token_secret: auth.access_token_secret.clone(),
            token_ttl: Duration::hours(auth.token_ttl_hours),
        }
    }
}
