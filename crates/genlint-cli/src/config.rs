//! Configuration file support for genlint
//!
//! Loads `.genlint.toml` from the current directory or parent directories.

use anyhow::{bail, Context, Result};
use genlint_core::RuleOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generics: GenericsConfig,
    pub paths: PathsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenericsConfig {
    /// Names to check: either a list (each requiring one explicit
    /// generic) or a map of names to minimum counts
    pub require: Option<RuleOptions>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Glob patterns to exclude from analysis
    pub exclude: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "text" or "json"
    pub format: Option<String>,
}

impl Config {
    /// Load config from `.genlint.toml` searching from current directory upward
    pub fn load() -> Result<Option<(Config, PathBuf)>> {
        Self::load_from(std::env::current_dir()?)
    }

    /// Load config searching from the given directory upward
    pub fn load_from(start_dir: PathBuf) -> Result<Option<(Config, PathBuf)>> {
        let mut current = Some(start_dir.as_path());

        while let Some(dir) = current {
            let config_path = dir.join(".genlint.toml");
            if config_path.exists() {
                let config = Self::load_path(&config_path)?;
                return Ok(Some((config, config_path)));
            }
            current = dir.parent();
        }

        Ok(None)
    }

    /// Load config from a specific path
    pub fn load_path(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Schema validation applied before the analyzer sees the options.
    /// Expected counts must be at least 1: a zero minimum never reports
    /// and almost certainly means a typo.
    fn validate(&self) -> Result<()> {
        if let Some(RuleOptions::Counts(map)) = &self.generics.require {
            for (name, count) in map {
                if *count == 0 {
                    bail!("expected count for '{}' must be at least 1", name);
                }
            }
        }
        Ok(())
    }

    /// Check if a path should be excluded based on config patterns
    pub fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.paths.exclude {
            // Try glob matching
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
                // Also try matching against just the file/dir name
                if let Some(file_name) = path.file_name() {
                    if glob_pattern.matches(&file_name.to_string_lossy()) {
                        return true;
                    }
                }
            }

            // Also do simple prefix/contains matching for directory patterns
            if pattern.ends_with('/') {
                let dir_pattern = pattern.trim_end_matches('/');
                if path_str.contains(&format!("/{}/", dir_pattern))
                    || path_str.starts_with(&format!("{}/", dir_pattern))
                {
                    return true;
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genlint_core::ExpectedCounts;
    use std::fs;
    use tempfile::TempDir;

    fn create_config(dir: &Path, content: &str) {
        fs::write(dir.join(".genlint.toml"), content).unwrap();
    }

    #[test]
    fn test_load_list_config() {
        let temp = TempDir::new().unwrap();
        create_config(
            temp.path(),
            r#"
[generics]
require = ["useState", "ref"]

[paths]
exclude = ["node_modules/", "*.d.ts"]

[output]
format = "json"
"#,
        );

        let (config, path) = Config::load_from(temp.path().to_path_buf())
            .unwrap()
            .unwrap();

        assert_eq!(path, temp.path().join(".genlint.toml"));
        let counts = ExpectedCounts::from_options(config.generics.require.as_ref().unwrap());
        assert_eq!(counts.get("useState"), Some(1));
        assert_eq!(counts.get("ref"), Some(1));
        assert_eq!(
            config.paths.exclude,
            vec!["node_modules/".to_string(), "*.d.ts".to_string()]
        );
        assert_eq!(config.output.format, Some("json".to_string()));
    }

    #[test]
    fn test_load_map_config() {
        let temp = TempDir::new().unwrap();
        create_config(
            temp.path(),
            r#"
[generics.require]
Map = 2
useState = 1
"*.get" = 1
"#,
        );

        let (config, _) = Config::load_from(temp.path().to_path_buf())
            .unwrap()
            .unwrap();

        let counts = ExpectedCounts::from_options(config.generics.require.as_ref().unwrap());
        assert_eq!(counts.get("Map"), Some(2));
        assert_eq!(counts.get("useState"), Some(1));
        assert_eq!(counts.get("*.get"), Some(1));
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().unwrap();
        create_config(temp.path(), "");

        let (config, _) = Config::load_from(temp.path().to_path_buf())
            .unwrap()
            .unwrap();

        assert!(config.generics.require.is_none());
        assert!(config.paths.exclude.is_empty());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_no_config_found() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from(temp.path().to_path_buf()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_config_found_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        create_config(temp.path(), "[generics]\nrequire = [\"useState\"]\n");
        let nested = temp.path().join("src/components");
        fs::create_dir_all(&nested).unwrap();

        let (_, path) = Config::load_from(nested).unwrap().unwrap();
        assert_eq!(path, temp.path().join(".genlint.toml"));
    }

    #[test]
    fn test_zero_count_rejected() {
        let temp = TempDir::new().unwrap();
        create_config(temp.path(), "[generics.require]\nuseState = 0\n");

        let result = Config::load_from(temp.path().to_path_buf());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("must be at least 1"));
    }

    #[test]
    fn test_should_exclude_glob() {
        let config = Config {
            paths: PathsConfig {
                exclude: vec!["*.d.ts".to_string()],
            },
            ..Default::default()
        };

        assert!(config.should_exclude(Path::new("types.d.ts")));
        assert!(!config.should_exclude(Path::new("types.ts")));
    }

    #[test]
    fn test_should_exclude_directory() {
        let config = Config {
            paths: PathsConfig {
                exclude: vec!["node_modules/".to_string()],
            },
            ..Default::default()
        };

        assert!(config.should_exclude(Path::new("app/node_modules/lib/index.ts")));
        assert!(config.should_exclude(Path::new("node_modules/lib/index.ts")));
        assert!(!config.should_exclude(Path::new("src/node_modules.ts")));
    }
}
