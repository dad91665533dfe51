//! Application configuration. Input and output paths, console colour.
//!
//! Grading weights and honors thresholds are fixed and deliberately absent here.

use serde::Deserialize;

/// Environment variable prefix (`GPA_TRANSCRIPT_INPUT_PATH`, ...).
pub const ENV_PREFIX: &str = "GPA_TRANSCRIPT";

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON file with the student array. Built-in sample data when unset. Read from GPA_TRANSCRIPT_INPUT_PATH.
    #[serde(default)]
    pub input_path: Option<String>,

    /// Directory for per-student Markdown reports. Disabled when unset. Read from GPA_TRANSCRIPT_REPORTS_DIR.
    #[serde(default)]
    pub reports_dir: Option<String>,

    /// Path of the JSON transcript export. Read from GPA_TRANSCRIPT_JSON_OUTPUT.
    #[serde(default)]
    pub json_output: Option<String>,

    /// Path of the CSV transcript export. Read from GPA_TRANSCRIPT_CSV_OUTPUT.
    #[serde(default)]
    pub csv_output: Option<String>,

    /// Colour honors tiers on the console (default true). Read from GPA_TRANSCRIPT_COLOR.
    #[serde(default)]
    pub color: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let file = std::env::var(format!("{}_CONFIG", ENV_PREFIX)).ok();
        Self::load_from(file.as_deref())
    }

    /// Optional config file, then `GPA_TRANSCRIPT_*` environment variables on top.
    pub fn load_from(file: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(path));
        }
        c = c.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // NO_COLOR convention wins over everything else.
        if std::env::var_os("NO_COLOR").is_some() {
            cfg.color = Some(false);
        }
        Ok(cfg)
    }

    /// Returns whether console output is coloured. Defaults to true.
    pub fn color_or_default(&self) -> bool {
        self.color.unwrap_or(true)
    }

    /// Input path with empty strings treated as unset.
    pub fn input_path(&self) -> Option<&str> {
        self.input_path.as_deref().filter(|p| !p.is_empty())
    }

    pub fn reports_dir(&self) -> Option<&str> {
        self.reports_dir.as_deref().filter(|p| !p.is_empty())
    }

    pub fn json_output(&self) -> Option<&str> {
        self.json_output.as_deref().filter(|p| !p.is_empty())
    }

    pub fn csv_output(&self) -> Option<&str> {
        self.csv_output.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert!(cfg.color_or_default());
        assert_eq!(cfg.input_path(), None);
        assert_eq!(cfg.reports_dir(), None);
    }

    #[test]
    fn test_empty_paths_are_unset() {
        let cfg = AppConfig {
            input_path: Some(String::new()),
            csv_output: Some("out.csv".into()),
            ..Default::default()
        };
        assert_eq!(cfg.input_path(), None);
        assert_eq!(cfg.csv_output(), Some("out.csv"));
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.toml");
        std::fs::write(
            &path,
            "input_path = \"students.json\"\nreports_dir = \"reports\"\ncolor = false\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(cfg.input_path(), Some("students.json"));
        assert_eq!(cfg.reports_dir(), Some("reports"));
        assert!(!cfg.color_or_default());
        assert_eq!(cfg.json_output(), None);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load_from(Some(path.to_str().unwrap())).is_err());
    }
}
