//! Configuration file loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use biaslab_application::{ConfigIssue, SimulationConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["biaslab.toml", ".biaslab.toml"];

/// Prefix of environment variable overrides (`BIASLAB_ACCURACY__BASELINE=80`)
const ENV_PREFIX: &str = "BIASLAB_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./biaslab.toml` or `./.biaslab.toml`
    /// 3. Environment: `BIASLAB_<SECTION>__<KEY>`
    /// 4. Global config: `<config dir>/biaslab/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();
        Self::layered(global.as_deref(), project.as_deref(), config_path)
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Load, validate and convert to the application configuration.
    ///
    /// Warnings are returned alongside the configuration; any issue of
    /// error severity fails the load.
    pub fn load_validated(
        config_path: Option<&Path>,
    ) -> Result<(SimulationConfig, Vec<ConfigIssue>), ConfigError> {
        Self::validate(&Self::load(config_path)?)
    }

    /// Validate a loaded file configuration and convert it.
    pub fn validate(
        file_config: &FileConfig,
    ) -> Result<(SimulationConfig, Vec<ConfigIssue>), ConfigError> {
        let issues = file_config.validate();
        if issues.iter().any(ConfigIssue::is_error) {
            return Err(ConfigError::Invalid(issues));
        }
        for issue in &issues {
            warn!("{}", issue.message);
        }
        let (config, _) = file_config.to_simulation_config();
        debug!(?config, "Loaded simulation config");
        Ok((config, issues))
    }

    /// Load only default configuration
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Resolves to `$XDG_CONFIG_HOME/biaslab/config.toml` on Linux and the
    /// platform equivalent elsewhere.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("biaslab").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used, in priority order
    pub fn config_sources() -> Vec<String> {
        let mut sources = Vec::new();

        match Self::project_config_path() {
            Some(path) => sources.push(format!("[FOUND] Project: {}", path.display())),
            None => sources.push("[     ] Project: ./biaslab.toml or ./.biaslab.toml".to_string()),
        }

        sources.push(format!("[     ] Env:     {ENV_PREFIX}<SECTION>__<KEY>"));

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            sources.push(format!("[{marker}] Global:  {}", path.display()));
        }

        sources.push("[     ] Default: built-in defaults".to_string());
        sources
    }

    fn layered(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biaslab_application::ConfigIssueCode;
    use biaslab_domain::AverageDivisor;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn extract(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> FileConfig {
        ConfigLoader::layered(global, project, explicit).extract().unwrap()
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.accuracy.baseline, 85.0);
        assert_eq!(config.bias_thresholds.high, 15.0);
        assert_eq!(config.hiring.average_divisor, "matched_count");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("biaslab"));
    }

    #[test]
    fn test_no_sources_yields_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = extract(None, None, None);
            assert_eq!(config.accuracy, FileConfig::default().accuracy);
            Ok(())
        });
    }

    #[test]
    fn test_env_sits_between_global_and_project() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("global.toml", "[accuracy]\nbaseline = 82.0\nceiling = 96.0\n")?;
            jail.create_file("project.toml", "[accuracy]\nbaseline = 83.0\n")?;
            let global = jail.directory().join("global.toml");
            let project = jail.directory().join("project.toml");
            jail.set_env("BIASLAB_ACCURACY__BASELINE", "80");

            let config: FileConfig = ConfigLoader::layered(Some(&global), None, None).extract()?;
            assert_eq!(config.accuracy.baseline, 80.0);
            assert_eq!(config.accuracy.ceiling, 96.0);

            let config: FileConfig =
                ConfigLoader::layered(Some(&global), Some(&project), None).extract()?;
            assert_eq!(config.accuracy.baseline, 83.0);
            assert_eq!(config.accuracy.ceiling, 96.0);
            Ok(())
        });
    }

    #[test]
    fn test_project_overrides_global() {
        let global = toml_file("[accuracy]\nbaseline = 80.0\nceiling = 96.0\n");
        let project = toml_file("[accuracy]\nbaseline = 82.0\n");

        let config = extract(Some(global.path()), Some(project.path()), None);
        assert_eq!(config.accuracy.baseline, 82.0);
        assert_eq!(config.accuracy.ceiling, 96.0);
        assert_eq!(config.accuracy.floor, 45.0);
    }

    #[test]
    fn test_explicit_overrides_project() {
        let project = toml_file("[hiring]\naverage_divisor = \"fixed:3\"\n");
        let explicit = toml_file("[hiring]\naverage_divisor = \"matched_count\"\n\n[logging]\nverbosity = 2\n");

        let config = extract(None, Some(project.path()), Some(explicit.path()));
        assert_eq!(config.hiring.average_divisor, "matched_count");
        assert_eq!(config.logging.verbosity, 2);
    }

    #[test]
    fn test_load_explicit_path() {
        let explicit = toml_file("[bias_thresholds]\nmoderate = 3.0\nhigh = 12.0\n");
        let config = ConfigLoader::load(Some(explicit.path())).unwrap();
        assert_eq!(config.bias_thresholds.moderate, 3.0);
        assert_eq!(config.bias_thresholds.high, 12.0);
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let explicit = toml_file("[accuracy]\nbaseline = \"high\"\n");
        let err = ConfigLoader::load(Some(explicit.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn test_load_validated_returns_warnings() {
        let explicit = toml_file("[hiring]\naverage_divisor = \"fixed:3\"\n");
        let (config, issues) = ConfigLoader::load_validated(Some(explicit.path())).unwrap();
        assert_eq!(config.average_divisor, AverageDivisor::Fixed(3));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::FixedDivisor);
    }

    #[test]
    fn test_load_validated_rejects_errors() {
        let explicit = toml_file("[accuracy]\nceiling = 50.0\n");
        match ConfigLoader::load_validated(Some(explicit.path())) {
            Err(ConfigError::Invalid(issues)) => {
                assert_eq!(issues[0].code, ConfigIssueCode::CeilingBelowBaseline);
            }
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn test_config_sources_lists_all_layers() {
        let sources = ConfigLoader::config_sources();
        assert!(sources.first().unwrap().contains("Project"));
        assert!(sources.iter().any(|s| s.contains(ENV_PREFIX)));
        assert!(sources.last().unwrap().contains("Default"));
    }
}
