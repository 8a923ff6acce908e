use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::ExpansionMode;

pub const CONFIG_FILE_NAME: &str = ".langmergerc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Two-column list of (source locale, target locale) pairs.
    #[serde(default = "default_languages_file")]
    pub languages_file: String,
    #[serde(default = "default_multiple_file")]
    pub multiple_file: String,
    #[serde(default = "default_classic_color_file")]
    pub classic_color_file: String,
    #[serde(default = "default_new_color_file")]
    pub new_color_file: String,
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    #[serde(default = "default_target_dir")]
    pub target_dir: String,
    #[serde(default = "default_target_extension")]
    pub target_extension: String,
    /// Target locale written without the annotation marker.
    #[serde(default = "default_default_locale")]
    pub default_locale: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Token in prefix/suffix arguments replaced by `section_char`.
    #[serde(default = "default_section_token")]
    pub section_token: String,
    #[serde(default = "default_section_char")]
    pub section_char: String,
    #[serde(default = "default_annotation")]
    pub annotation: String,
}

fn default_languages_file() -> String {
    "languages.txt".to_string()
}

fn default_multiple_file() -> String {
    "multiple.txt".to_string()
}

fn default_classic_color_file() -> String {
    "colors_classic.txt".to_string()
}

fn default_new_color_file() -> String {
    "colors_new.txt".to_string()
}

fn default_source_dir() -> String {
    "lang_java".to_string()
}

fn default_source_extension() -> String {
    "json".to_string()
}

fn default_target_dir() -> String {
    "lang_bedrock".to_string()
}

fn default_target_extension() -> String {
    "lang".to_string()
}

fn default_default_locale() -> String {
    "en_US".to_string()
}

fn default_placeholder() -> String {
    "VAR".to_string()
}

fn default_section_token() -> String {
    "SECTION".to_string()
}

fn default_section_char() -> String {
    "\u{a7}".to_string() // §
}

fn default_annotation() -> String {
    "#".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages_file: default_languages_file(),
            multiple_file: default_multiple_file(),
            classic_color_file: default_classic_color_file(),
            new_color_file: default_new_color_file(),
            source_dir: default_source_dir(),
            source_extension: default_source_extension(),
            target_dir: default_target_dir(),
            target_extension: default_target_extension(),
            default_locale: default_default_locale(),
            placeholder: default_placeholder(),
            section_token: default_section_token(),
            section_char: default_section_char(),
            annotation: default_annotation(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Tokens, directories and extensions must not be empty.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("languagesFile", &self.languages_file),
            ("sourceDir", &self.source_dir),
            ("sourceExtension", &self.source_extension),
            ("targetDir", &self.target_dir),
            ("targetExtension", &self.target_extension),
            ("defaultLocale", &self.default_locale),
            ("placeholder", &self.placeholder),
            ("sectionToken", &self.section_token),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", name);
            }
        }

        Ok(())
    }

    /// Word list file for an expanding mode, `None` for single mode.
    pub fn word_list(&self, mode: ExpansionMode) -> Option<&str> {
        match mode {
            ExpansionMode::Single => None,
            ExpansionMode::Multiple => Some(&self.multiple_file),
            ExpansionMode::ClassicColor => Some(&self.classic_color_file),
            ExpansionMode::NewColor => Some(&self.new_color_file),
        }
    }

    pub fn source_path(&self, root: &Path, locale: &str) -> PathBuf {
        root.join(&self.source_dir)
            .join(format!("{}.{}", locale, self.source_extension))
    }

    pub fn target_path(&self, root: &Path, locale: &str) -> PathBuf {
        root.join(&self.target_dir)
            .join(format!("{}.{}", locale, self.target_extension))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory that relative paths in the config resolve against: the
    /// directory holding the config file, or the start directory.
    pub root: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {}", path.display()))?;
            let root = path
                .parent()
                .map_or_else(|| start_dir.to_path_buf(), Path::to_path_buf);
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                root,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            root: start_dir.to_path_buf(),
        }),
    }
}
