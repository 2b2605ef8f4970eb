//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Environment variable selecting the backend base address
pub const BACKEND_URL_ENV: &str = "HR_SCOUT_BACKEND_URL";

const PROJECT_CONFIG_FILES: [&str; 2] = ["hr-scout.toml", ".hr-scout.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `HR_SCOUT_BACKEND_URL` (overrides `backend.url` only)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./hr-scout.toml` or `./.hr-scout.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/hr-scout/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Self::env_provider());

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration plus the environment override (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::env_provider())
            .extract()
            .map_err(Box::new)
    }

    fn env_provider() -> Env {
        Env::raw()
            .only(&[BACKEND_URL_ENV])
            .map(|_| "backend.url".into())
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/hr-scout/config.toml if set,
    /// otherwise falls back to the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("hr-scout").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config sources being used (for --show-config)
    pub fn describe_sources(explicit: Option<&Path>) -> String {
        let mut out = String::from("Configuration sources (in priority order):\n");

        if std::env::var_os(BACKEND_URL_ENV).is_some() {
            out.push_str(&format!("  [SET  ] Env:      {}\n", BACKEND_URL_ENV));
        } else {
            out.push_str(&format!("  [     ] Env:      {}\n", BACKEND_URL_ENV));
        }

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            out.push_str(&format!("  [{}] Explicit: {}\n", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => out.push_str(&format!("  [FOUND] Project:  {}\n", path.display())),
            None => out.push_str("  [     ] Project:  ./hr-scout.toml or ./.hr-scout.toml\n"),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            out.push_str(&format!("  [{}] Global:   {}\n", mark, path.display()));
        }

        out.push_str("  [     ] Default:  built-in defaults\n");
        out
    }

    /// Render an effective configuration as TOML
    pub fn render_effective(config: &FileConfig) -> String {
        toml::to_string_pretty(config).unwrap_or_else(|e| format!("# failed to render: {}\n", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load_defaults().map_err(|e| *e)?;
            assert_eq!(config, FileConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("hr-scout"));
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "hr-scout.toml",
                r#"
                [backend]
                top_k = 3

                [repl]
                show_progress = false
                "#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.backend.top_k, 3);
            assert_eq!(config.backend.url, "http://localhost:8000");
            assert!(!config.repl.show_progress);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".hr-scout.toml", "[backend]\ntimeout_seconds = 30\ntop_k = 2\n")?;
            jail.create_file("custom.toml", "[backend]\ntop_k = 9\n")?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.backend.top_k, 9);
            assert_eq!(config.backend.timeout_seconds, 30);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_backend_url() {
        Jail::expect_with(|jail| {
            jail.create_file("hr-scout.toml", "[backend]\nurl = \"http://from-file:9000\"\n")?;
            jail.set_env(BACKEND_URL_ENV, "http://from-env:8080");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.backend.url, "http://from-env:8080");

            let defaults = ConfigLoader::load_defaults().map_err(|e| *e)?;
            assert_eq!(defaults.backend.url, "http://from-env:8080");
            Ok(())
        });
    }

    #[test]
    fn test_render_effective_round_trips() {
        let rendered = ConfigLoader::render_effective(&FileConfig::default());
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, FileConfig::default());
    }
}
