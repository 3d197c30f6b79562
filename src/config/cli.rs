use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::HeroId;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "hero-tour")]
#[command(about = "Browse and edit the hero roster of a Tour of Heroes backend")]
pub struct CliConfig {
    #[arg(long, help = "Backend base URL (default: http://localhost:3000)")]
    pub base_url: Option<String>,

    #[arg(long, help = "Path of the heroes collection (default: api/heroes)")]
    pub heroes_path: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Use the built-in in-memory backend")]
    pub offline: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List all heroes
    List,
    /// Show one hero
    Get {
        id: HeroId,
        /// Look the hero up with `?id=` so a missing hero is not an error
        #[arg(long)]
        no_404: bool,
    },
    /// Add a hero
    Add { name: String },
    /// Rename an existing hero
    Rename { id: HeroId, name: String },
    /// Delete a hero
    Delete { id: HeroId },
    /// Search heroes by name
    Search { term: String },
    /// Load the roster and select one hero
    Select { id: HeroId },
}

impl CliConfig {
    /// 合併設定：命令列參數 > 設定檔 > 預設值
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate_logging()?;
                file
            }
            None => TomlConfig::default(),
        };

        let mut api = file.api_config();
        if let Some(base_url) = &self.base_url {
            api.base_url = base_url.clone();
        }
        if let Some(heroes_path) = &self.heroes_path {
            api.heroes_path = heroes_path.clone();
        }
        api.validate()?;

        Ok(Settings {
            api,
            verbose: self.verbose || file.verbose(),
            json_logs: self.json_logs || file.json_logs(),
        })
    }
}
