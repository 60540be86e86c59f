//! Engine configuration, loaded from a JSON file. Every field has a default,
//! so `{}` is a complete configuration.
use crate::error::DocketError;
use chrono::Duration as TimeDelta;
use docket_channel::{FilesystemPayloadStore, InMemoryPayloadStore, PayloadStore};
use docket_layout::LayoutRegistry;
use docket_print::{PrintCommand, PrintOptions, SpoolHost};
use docket_render::{ComposeOptions, DEFAULT_UTC_OFFSET_MINUTES};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Directory of `form_*.json` descriptors. Built-in layouts when unset.
    pub layouts_dir: Option<PathBuf>,
    /// Shared payload store directory. In-process store when unset.
    pub store_dir: Option<PathBuf>,
    /// Where print surfaces are spooled. The system temp directory when unset.
    pub spool_dir: Option<PathBuf>,
    /// `[program, args...]`; the spool file path is appended.
    pub print_command: Vec<String>,
    pub print_timeout_ms: u64,
    pub ready_delay_ms: u64,
    pub utc_offset_minutes: i32,
    /// Published payloads older than this are discarded unread.
    pub token_max_age_secs: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layouts_dir: None,
            store_dir: None,
            spool_dir: None,
            print_command: Vec::new(),
            print_timeout_ms: 2000,
            ready_delay_ms: 50,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            token_max_age_secs: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn load(path: &Path) -> Result<Self, DocketError> {
        let source = std::fs::read_to_string(path).map_err(|source| DocketError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&source).map_err(|source| DocketError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded configuration from '{}'", path.display());
        Ok(config)
    }

    pub fn print_options(&self) -> PrintOptions {
        PrintOptions {
            ready_delay: Duration::from_millis(self.ready_delay_ms),
            timeout: Duration::from_millis(self.print_timeout_ms),
        }
    }

    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            utc_offset_minutes: self.utc_offset_minutes,
        }
    }

    pub fn token_max_age(&self) -> Option<TimeDelta> {
        self.token_max_age_secs
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(TimeDelta::try_seconds)
    }

    pub fn layout_registry(&self) -> Result<LayoutRegistry, DocketError> {
        let registry = match &self.layouts_dir {
            Some(dir) => LayoutRegistry::from_dir(dir)?,
            None => LayoutRegistry::builtin()?,
        };
        Ok(registry)
    }

    pub fn payload_store(&self) -> Arc<dyn PayloadStore> {
        match &self.store_dir {
            Some(dir) => Arc::new(FilesystemPayloadStore::new(dir)),
            None => Arc::new(InMemoryPayloadStore::new()),
        }
    }

    pub fn spool_host(&self) -> SpoolHost {
        let dir = self
            .spool_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("docket-spool"));
        SpoolHost::new(dir).with_command(PrintCommand::from_argv(&self.print_command))
    }
}
