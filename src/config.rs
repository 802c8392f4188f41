use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub smtp: SmtpConfig,

    #[command(flatten)]
    pub mail: MailConfig,

    #[command(flatten)]
    pub rate_limit: RateLimitConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "ATLAS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port for the public API listener
    #[arg(long, env = "ATLAS_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Port for the management listener (health probes)
    #[arg(long, env = "ATLAS_MGMT_PORT", default_value_t = 3001)]
    pub mgmt_port: u16,
}

#[derive(Clone, Debug, Args)]
pub struct SmtpConfig {
    /// SMTP relay hostname
    #[arg(long, env = "ATLAS_SMTP_HOST")]
    pub host: String,

    /// SMTP relay port
    #[arg(long, env = "ATLAS_SMTP_PORT", default_value_t = 587)]
    pub port: u16,

    /// Use implicit TLS (SMTPS) instead of STARTTLS
    #[arg(long, env = "ATLAS_SMTP_SECURE", default_value_t = false)]
    pub implicit_tls: bool,

    /// SMTP username; credentials are only attached when both username and password are set
    #[arg(long, env = "ATLAS_SMTP_USER")]
    pub username: Option<String>,

    /// SMTP password
    #[arg(long, env = "ATLAS_SMTP_PASSWORD")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct MailConfig {
    /// Sender address for all outbound mail
    #[arg(long, env = "ATLAS_MAIL_FROM", default_value = "website@atlastechnosoft.com")]
    pub from_address: String,

    /// Internal inbox that receives every notification and chat log
    #[arg(long, env = "ATLAS_OPERATOR_INBOX", default_value = "info@atlastechnosoft.com")]
    pub operator_inbox: String,

    /// Support phone number shown in the confirmation footer
    #[arg(long, env = "ATLAS_SUPPORT_PHONE", default_value = "+91-22-4123-4567")]
    pub support_phone: String,

    /// Logo image URL used in the confirmation header
    #[arg(long, env = "ATLAS_LOGO_URL", default_value = "https://www.atlastechnosoft.com/images/logo.png")]
    pub logo_url: String,
}

#[derive(Clone, Debug, Args)]
pub struct RateLimitConfig {
    /// Requests per second allowed on the submission endpoint
    #[arg(long, env = "ATLAS_RATE_LIMIT_PER_SECOND", default_value_t = 5)]
    pub per_second: u32,

    /// Burst allowance for the submission endpoint
    #[arg(long, env = "ATLAS_RATE_LIMIT_BURST", default_value_t = 10)]
    pub burst: u32,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// OTLP collector endpoint; traces and metrics are exported when set
    #[arg(long, env = "ATLAS_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Log output format
    #[arg(long, env = "ATLAS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}
