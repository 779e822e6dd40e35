use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;

/// Default Zoom OAuth host used when `ZOOM_OAUTH_BASE_URL` is not set.
pub const DEFAULT_ZOOM_OAUTH_BASE_URL: &str = "https://zoom.us";

/// Default Zoom REST API base URL used when `ZOOM_API_BASE_URL` is not set.
pub const DEFAULT_ZOOM_API_BASE_URL: &str = "https://api.zoom.us/v2";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The Zoom account id used for the server-to-server OAuth exchange.
    #[arg(long, env)]
    zoom_meeting_account_id: Option<String>,

    /// The Zoom host key. Used as the Meeting SDK key when signing session
    /// tokens and as the OAuth client id.
    #[arg(long, env)]
    zoom_meeting_host_key: Option<String>,

    /// The Zoom host secret. Used as the HS256 signing secret for session
    /// tokens and as the OAuth client secret.
    #[arg(long, env)]
    zoom_meeting_host_secret: Option<String>,

    /// The base URL of the Zoom OAuth host.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_ZOOM_OAUTH_BASE_URL)]
    zoom_oauth_base_url: String,

    /// The base URL of the Zoom REST API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_ZOOM_API_BASE_URL)]
    zoom_api_base_url: String,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "0.0.0.0")]
    pub interface: String,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 4000)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn set_zoom_meeting_account_id(mut self, account_id: Option<String>) -> Self {
        self.zoom_meeting_account_id = account_id;
        self
    }

    pub fn set_zoom_meeting_host_key(mut self, host_key: Option<String>) -> Self {
        self.zoom_meeting_host_key = host_key;
        self
    }

    pub fn set_zoom_meeting_host_secret(mut self, host_secret: Option<String>) -> Self {
        self.zoom_meeting_host_secret = host_secret;
        self
    }

    /// Returns the Zoom account id, if configured.
    pub fn zoom_meeting_account_id(&self) -> Option<String> {
        self.zoom_meeting_account_id.clone()
    }

    /// Returns the Zoom host key, if configured.
    pub fn zoom_meeting_host_key(&self) -> Option<String> {
        self.zoom_meeting_host_key.clone()
    }

    /// Returns the Zoom host secret, if configured.
    pub fn zoom_meeting_host_secret(&self) -> Option<String> {
        self.zoom_meeting_host_secret.clone()
    }

    /// Returns the Zoom OAuth host base URL.
    pub fn zoom_oauth_base_url(&self) -> &str {
        &self.zoom_oauth_base_url
    }

    /// Returns the Zoom REST API base URL.
    pub fn zoom_api_base_url(&self) -> &str {
        &self.zoom_api_base_url
    }
}
