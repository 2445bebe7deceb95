use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::domain::entities::page::DEFAULT_PAGE_SIZE;
use crate::domain::validation::{ColumnRules, DEFAULT_NAME_COLUMN, DEFAULT_PHONE_COLUMN};
use crate::usecase::services::editor_service::EditorSettings;
use crate::usecase::services::export_service::DEFAULT_EXPORT_FILE_NAME;

const CONFIG_FILE_NAME: &str = "config.toml";

/// User settings read from `config.toml` in the app's config directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub page_size: usize,
    pub export_file_name: String,
    pub phone_column: String,
    pub name_column: String,
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            phone_column: DEFAULT_PHONE_COLUMN.to_string(),
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl EditorConfig {
    /// Missing file means defaults; an unreadable or invalid file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&default_config_path()?)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page_size must be at least 1");
        }
        if self.export_file_name.trim().is_empty() {
            bail!("export_file_name must not be empty");
        }
        Ok(())
    }

    pub fn editor_settings(&self) -> EditorSettings {
        EditorSettings {
            page_size: self.page_size,
            rules: ColumnRules {
                phone_column: self.phone_column.clone(),
                name_column: self.name_column.clone(),
            },
            export_file_name: self.export_file_name.clone(),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "table-editor")
        .ok_or_else(|| anyhow!("unable to resolve project directories"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
