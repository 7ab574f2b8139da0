// Configuration file loading and creation

use super::types::Config;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the path to the default configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("pong-bench");
    path.push("config.toml");
    path
}

/// Load the default configuration file, creating it if it doesn't exist.
///
/// A file that fails to parse is reported and replaced by defaults in memory;
/// the file on disk is left alone so the user can fix it.
pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path();

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(path = %config_path.display(), error = %e, "failed to parse config file, using defaults");
                Ok(Config::default())
            }
        }
    } else {
        if let Err(e) = create_default_config(&config_path) {
            // Read-only home directories are fine, defaults still apply
            tracing::warn!(path = %config_path.display(), error = %e, "could not write default config");
        }
        Ok(Config::default())
    }
}

/// Load an explicitly requested configuration file. Any failure is fatal.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let config = Config::default();
    let toml_string = toml::to_string_pretty(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let commented_toml = format!(
        "# pong-bench configuration file\n\
         # Command-line flags override the [benchmark] values below\n\
         #\n\
         # [physics]   court geometry, speeds and the winning score\n\
         # [benchmark] match count, pass rate, frame ceiling and base seed\n\
         # [display]   frame rate of the interactive modes\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    tracing::info!(path = %path.display(), "created default config file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        let parsed: Config = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.physics, config.physics);
        assert_eq!(parsed.benchmark, config.benchmark);
        assert_eq!(parsed.display.target_fps, config.display.target_fps);
    }

    #[test]
    fn test_partial_config_with_defaults() {
        let partial_toml = r#"
            [benchmark]
            matches = 40
            seed = 7
        "#;

        let config: Config = toml::from_str(partial_toml).unwrap();

        assert_eq!(config.benchmark.matches, 40);
        assert_eq!(config.benchmark.seed, 7);

        // Everything else keeps its default
        assert_eq!(config.benchmark.pass_win_rate, 0.60);
        assert_eq!(config.physics.paddle_height, 90);
        assert_eq!(config.physics.winning_score, 7);
    }

    #[test]
    fn test_written_default_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        create_default_config(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# pong-bench configuration file"));

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.physics, Config::default().physics);
    }

    #[test]
    fn test_explicit_file_errors_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(load_config_from(&missing), Err(ConfigError::Io(_))));

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[physics\nwindow_width = ").unwrap();
        assert!(matches!(load_config_from(&broken), Err(ConfigError::Parse(_))));
    }
}
