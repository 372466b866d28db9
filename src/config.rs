use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// On-demand cover image server.
#[derive(Parser, Debug, Clone)]
#[command(name = "cover-forge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file.
    #[arg(short, long, env = "COVERS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the server (default if no command given).
    Serve {
        /// Address to bind the server to.
        #[arg(short, long)]
        bind: Option<SocketAddr>,

        /// Directory holding source cover files.
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Print the cover URL for a book.
    Url {
        /// Book identifier.
        book_id: String,
        /// Stored cover reference (relative path or `@placeholder`).
        cover_ref: String,
        /// Requested width in pixels.
        #[arg(long, default_value_t = 240)]
        width: u32,
        /// Requested height in pixels.
        #[arg(long, default_value_t = 360)]
        height: u32,
    },

    /// Create a default config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Main configuration from TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Cover source configuration.
    #[serde(default)]
    pub covers: CoversConfig,

    /// Processing limits.
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// In-memory artifact cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Font configuration for placeholder labels.
    #[serde(default)]
    pub fonts: FontsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::new(
        std::net::IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        8080,
    )
}

/// Cover source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoversConfig {
    /// Directory that scopes every real-image lookup.
    #[serde(default = "default_cover_root")]
    pub root: PathBuf,

    /// Quality used when the request carries no usable `q`.
    #[serde(default = "default_quality")]
    pub default_quality: u8,
}

impl Default for CoversConfig {
    fn default() -> Self {
        Self {
            root: default_cover_root(),
            default_quality: default_quality(),
        }
    }
}

fn default_cover_root() -> PathBuf {
    PathBuf::from("public/covers")
}

fn default_quality() -> u8 {
    crate::covers::request::DEFAULT_QUALITY
}

/// Processing limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Maximum number of images processed at once.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// Per-request processing deadline in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Largest accepted source width or height in pixels.
    #[serde(default = "default_max_source_dimension")]
    pub max_source_dimension: u32,

    /// Largest decoder allocation in bytes.
    #[serde(default = "default_max_decode_bytes")]
    pub max_decode_bytes: u64,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            max_concurrent: default_max_concurrent(),
            timeout_ms: default_timeout_ms(),
            max_source_dimension: default_max_source_dimension(),
            max_decode_bytes: default_max_decode_bytes(),
        }
    }
}

fn default_max_concurrent() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_max_source_dimension() -> u32 {
    12_000
}

fn default_max_decode_bytes() -> u64 {
    256 * 1024 * 1024
}

/// In-memory artifact cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether deterministic artifacts are cached and coalesced.
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,

    /// Total size budget in bytes.
    #[serde(default = "default_cache_max_bytes")]
    pub max_bytes: u64,

    /// Entry lifetime in seconds.
    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            max_bytes: default_cache_max_bytes(),
            ttl_seconds: default_cache_ttl(),
        }
    }
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_max_bytes() -> u64 {
    64 * 1024 * 1024
}

fn default_cache_ttl() -> u64 {
    600
}

/// Font configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FontsConfig {
    /// Extra directory scanned for `.ttf`/`.otf` files.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file.
    pub fn load(path: &PathBuf) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::error::AppError::Config(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            crate::error::AppError::Config(format!("Failed to parse config file: {}", e))
        })
    }

    /// Find config file in default locations.
    pub fn find_config_file() -> Option<PathBuf> {
        let candidates = [
            PathBuf::from("config.toml"),
            PathBuf::from("covers.toml"),
            dirs::config_dir()
                .map(|p| p.join("cover-forge").join("config.toml"))
                .unwrap_or_default(),
            PathBuf::from("/etc/cover-forge/config.toml"),
        ];

        candidates.into_iter().find(|p| p.exists())
    }

    /// Generate default config file content.
    pub fn generate_default() -> String {
        r#"# cover-forge configuration

[server]
bind = "0.0.0.0:8080"

[covers]
# Directory holding source cover files
root = "public/covers"
default_quality = 80

[processing]
# max_concurrent = 4
timeout_ms = 10000
max_source_dimension = 12000
# max_decode_bytes = 268435456

[cache]
# Cache and coalesce deterministic artifacts in memory
enabled = true
max_bytes = 67108864
ttl_seconds = 600

[fonts]
# dir = "/usr/share/fonts/truetype/dejavu"
"#
        .to_string()
    }
}
