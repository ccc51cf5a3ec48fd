use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use log::info;
use serde::Deserialize;

use crate::renderer::DEFAULT_ENTRY_TEMPLATE;

pub(crate) const DEFAULT_BASE_URL: &str = "https://blog.jiajunhuang.com";

/// Everything a catalog run needs. Missing fields in the config file fall back to the defaults.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct CatalogConfig {
    pub article_dir: PathBuf,
    pub output: PathBuf,

    pub base_url: String,
    /// directory segment of article links
    pub link_dir: String,
    pub title_prefix: String,

    pub headers: Vec<String>,
    pub footers: Vec<String>,
    pub entry_template: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            article_dir: PathBuf::from("articles"),
            output: PathBuf::from("README.md"),
            base_url: DEFAULT_BASE_URL.to_string(),
            link_dir: "articles".to_string(),
            title_prefix: "".to_string(),
            headers: vec![
                "# Jiajun's Blog".to_string(),
                "Stand on the shoulders of giants".to_string(),
                format!("- [About Me]({DEFAULT_BASE_URL}/aboutme)"),
                "## Table of Contents".to_string(),
            ],
            footers: vec![
                "\n".to_string(),
                "--------------------------------------------".to_string(),
                "License: CC-BY2".to_string(),
            ],
            entry_template: DEFAULT_ENTRY_TEMPLATE.to_string(),
        }
    }
}

pub(crate) const DEFAULT_CONFIG_FILE: &str = "catalog.json";

/// A missing file means defaults, unless `required` is set.
pub(super) fn load_config(
    config_file_path: &Path,
    required: bool,
) -> anyhow::Result<CatalogConfig> {
    if config_file_path.exists() {
        let fd = File::open(config_file_path)
            .with_context(|| format!("while opening {config_file_path:?}"))?;
        let reader = BufReader::new(fd);
        serde_json::from_reader(reader).with_context(|| format!("while parsing {config_file_path:?}"))
    } else if required {
        bail!("Config file({config_file_path:?}) does not exist.");
    } else {
        info!("Config file({config_file_path:?}) does not exist. using defaults...");
        Ok(CatalogConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join(DEFAULT_CONFIG_FILE), false).unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.headers[2], "- [About Me](https://blog.jiajunhuang.com/aboutme)");
        assert_eq!(config.footers.last().unwrap(), "License: CC-BY2");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r##"{"headers": ["# Blog"], "footers": ["License: X"], "link_dir": "posts"}"##,
        )
        .unwrap();

        let config = load_config(&path, true).unwrap();
        assert_eq!(config.headers, vec!["# Blog"]);
        assert_eq!(config.footers, vec!["License: X"]);
        assert_eq!(config.link_dir, "posts");
        assert_eq!(config.article_dir, PathBuf::from("articles"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.entry_template, DEFAULT_ENTRY_TEMPLATE);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{ headers: ").unwrap();
        assert!(load_config(&path, false).is_err());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load_config(&dir.path().join("missing.json"), true).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
