use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "page-object-miner",
    version,
    about = "Finds UI elements recurring across crawled pages and proposes shared page-object locators"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: page-object-miner.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze page captures and report recurring elements
    Analyze {
        /// Capture JSON file or directory of capture files
        #[arg(long)]
        input: String,

        /// Minimum similarity percentage for a pair to qualify
        #[arg(long)]
        min_similarity: Option<f64>,

        /// Report format: console, markdown, json
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Write a JSONL analysis trace to this path
        #[arg(long)]
        trace: Option<String>,
    },

    /// Analyze captures and emit a TypeScript BasePage class
    Generate {
        /// Capture JSON file or directory of capture files
        #[arg(long)]
        input: String,

        /// Minimum similarity percentage for a pair to qualify
        #[arg(long)]
        min_similarity: Option<f64>,

        /// Path of the generated TypeScript file
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `page-object-miner.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub analyze: AnalyzeConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeConfig {
    /// Similarity threshold in percent. 60 is strict; 40 helps on sites
    /// with sparse matches.
    #[serde(default = "default_threshold")]
    pub min_similarity: f64,

    #[serde(default = "default_console")]
    pub format: String,

    pub output: Option<String>,

    pub trace: Option<String>,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            min_similarity: 60.0,
            format: "console".to_string(),
            output: None,
            trace: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default = "default_base_page")]
    pub output: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output: "BasePage.ts".to_string(),
        }
    }
}

// Serde default helpers
fn default_threshold() -> f64 {
    60.0
}
fn default_console() -> String {
    "console".to_string()
}
fn default_base_page() -> String {
    "BasePage.ts".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("page-object-miner.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
