mod circular_detection;
mod merging;

use super::Config;
use crate::{CoursekitError, Result};
use circular_detection::ImportChain;
use merging::merge_toml_configs;
use std::{
    fs,
    path::{Path, PathBuf},
};
use toml::Value;

const DEFAULT_CONFIG_CONTENT: &str = "# coursekit configuration file\n";

impl Config {
    /// Loads a configuration file, merging in any files it imports
    ///
    /// Imports are listed in a top-level `imports` array with `@` prefixed
    /// paths relative to the importing file (`imports = ["@playback"]`).
    /// Imported values sit beneath the importing file's own values. A
    /// missing main file is created empty.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read, contains invalid TOML,
    /// imports itself transitively, or the merged result does not match the
    /// configuration schema.
    pub fn load_with_imports(path: &Path) -> Result<Config> {
        if !path.exists() {
            create_default_config_file(path)?;
        }

        let canonical_path = path.canonicalize().map_err(|e| CoursekitError::IoError {
            path: path.to_path_buf(),
            details: format!("Failed to resolve path: {e}"),
        })?;

        let mut chain = ImportChain::default();
        let merged = Self::load_value(&canonical_path, &mut chain)?;

        merged
            .try_into()
            .map_err(|e| CoursekitError::ConfigValidation {
                component: "config parsing".to_string(),
                details: e.to_string(),
            })
    }

    /// Parses a configuration from a TOML string, without import support.
    ///
    /// # Errors
    /// Returns an error if the string is not valid TOML for the schema
    pub fn from_toml_str(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| CoursekitError::toml_parse(e, None))
    }

    fn load_value(path: &Path, chain: &mut ImportChain) -> Result<Value> {
        chain.enter(path)?;
        let result = Self::read_with_imports(path, chain);
        chain.leave();
        result
    }

    fn read_with_imports(path: &Path, chain: &mut ImportChain) -> Result<Value> {
        let content = fs::read_to_string(path).map_err(|e| CoursekitError::import(e, path))?;
        let own_value: Value =
            toml::from_str(&content).map_err(|e| CoursekitError::toml_parse(e, Some(path)))?;

        let imported = import_paths(&own_value)
            .iter()
            .map(|import| {
                let resolved = resolve_import_path(path, import)?;
                let canonical = resolved
                    .canonicalize()
                    .map_err(|e| CoursekitError::import(e, &resolved))?;
                Self::load_value(&canonical, chain)
            })
            .collect::<Result<Vec<Value>>>()?;

        Ok(merge_toml_configs(imported, own_value))
    }
}

fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CoursekitError::IoError {
            path: parent.to_path_buf(),
            details: format!("Failed to create config directory: {e}"),
        })?;
    }

    fs::write(path, DEFAULT_CONFIG_CONTENT).map_err(|e| CoursekitError::IoError {
        path: path.to_path_buf(),
        details: format!("Failed to create config file: {e}"),
    })
}

fn import_paths(value: &Value) -> Vec<String> {
    let Some(Value::Array(imports)) = value.get("imports") else {
        return Vec::new();
    };

    imports
        .iter()
        .filter_map(Value::as_str)
        .filter_map(|s| s.strip_prefix('@'))
        .map(str::to_owned)
        .collect()
}

fn resolve_import_path(base_path: &Path, import_path: &str) -> Result<PathBuf> {
    let parent_dir = base_path
        .parent()
        .ok_or_else(|| CoursekitError::ImportError {
            path: base_path.to_path_buf(),
            details: "Invalid base path - no parent directory".to_string(),
        })?;

    let mut import_path_buf = PathBuf::from(import_path);
    if import_path_buf.extension().is_none() {
        import_path_buf.set_extension("toml");
    }

    Ok(parent_dir.join(import_path_buf))
}
