//! Startup configuration.
//!
//! Settings come from, in increasing priority: built-in defaults, a TOML config
//! file, `WORDGAME_*` environment variables, and command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::weights::Decay;

/// Contents of a `wordgame.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordGameConfig {
    /// Lexicon file (one `{"a", "b", "freq"}` record per line).
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
    /// History file (one `{"id", "is_correct"}` record per line).
    #[serde(default)]
    pub history_path: Option<PathBuf>,
    /// Multiplicative update strength, strictly between 0 and 1. Checked when
    /// the file is parsed.
    #[serde(default)]
    pub decay: Decay,
}

impl Default for WordGameConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            history_path: None,
            decay: Decay::DEFAULT,
        }
    }
}

/// Values given on the command line; `None` defers to the config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub lexicon_path: Option<PathBuf>,
    pub history_path: Option<PathBuf>,
    pub decay: Option<f64>,
}

/// Fully validated settings for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub lexicon_path: PathBuf,
    pub history_path: PathBuf,
    pub decay: Decay,
}

impl WordGameConfig {
    /// Merge command-line overrides and check that everything required is set.
    pub fn resolve(&self, overrides: ConfigOverrides) -> Result<ResolvedConfig> {
        let lexicon_path = overrides
            .lexicon_path
            .or_else(|| self.lexicon_path.clone())
            .context("lexicon file was not specified (use --lexicon or set lexicon_path)")?;
        let history_path = overrides
            .history_path
            .or_else(|| self.history_path.clone())
            .context("history file was not specified (use --history or set history_path)")?;
        let decay = match overrides.decay {
            Some(value) => Decay::new(value)?,
            None => self.decay,
        };

        Ok(ResolvedConfig {
            lexicon_path,
            history_path,
            decay,
        })
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result = format!("{}{}{}", &result[..start], value, &result[start + end + 1..]);
    }
    result
}

fn resolve_path_vars(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(resolve_env_vars(s)),
        None => path.to_path_buf(),
    }
}

/// Apply `WORDGAME_LEXICON`, `WORDGAME_HISTORY` and `WORDGAME_DECAY`.
fn apply_env_overrides(
    config: &mut WordGameConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(path) = lookup("WORDGAME_LEXICON") {
        config.lexicon_path = Some(PathBuf::from(path));
    }
    if let Some(path) = lookup("WORDGAME_HISTORY") {
        config.history_path = Some(PathBuf::from(path));
    }
    if let Some(decay) = lookup("WORDGAME_DECAY") {
        let value: f64 = decay
            .trim()
            .parse()
            .with_context(|| format!("WORDGAME_DECAY is not a number: {decay}"))?;
        config.decay = Decay::new(value).context("WORDGAME_DECAY is out of range")?;
    }
    Ok(())
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `wordgame.toml` in the current directory
/// 2. `~/.config/wordgame/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<WordGameConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("wordgame.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("reading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let mut config = toml::from_str::<WordGameConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;

            // Relative paths in a config file are relative to the file itself.
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            let anchor = |p: PathBuf| {
                let p = resolve_path_vars(&p);
                if p.is_relative() {
                    base.join(p)
                } else {
                    p
                }
            };
            config.lexicon_path = config.lexicon_path.map(anchor);
            config.history_path = config.history_path.map(anchor);
            config
        }
        None => WordGameConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("wordgame"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_WORDGAME_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_WORDGAME_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_WORDGAME_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("no vars here"), "no vars here");
        std::env::remove_var("_WORDGAME_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = WordGameConfig::default();
        assert!(config.lexicon_path.is_none());
        assert!(config.history_path.is_none());
        assert_eq!(config.decay, Decay::DEFAULT);
    }

    #[test]
    fn parse_config_file() {
        let toml_str = r#"
lexicon_path = "words/es.jsonl"
history_path = "history.jsonl"
decay = 0.25
"#;
        let config: WordGameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.lexicon_path, Some(PathBuf::from("words/es.jsonl")));
        assert_eq!(config.decay.value(), 0.25);

        let partial: WordGameConfig = toml::from_str("history_path = \"h.jsonl\"").unwrap();
        assert_eq!(partial.decay, Decay::DEFAULT);
        assert!(partial.lexicon_path.is_none());
    }

    #[test]
    fn config_file_decay_is_range_checked() {
        assert!(toml::from_str::<WordGameConfig>("decay = 1.5").is_err());
        assert!(toml::from_str::<WordGameConfig>("decay = 0.0").is_err());
    }

    #[test]
    fn flags_override_config() {
        let config = WordGameConfig {
            lexicon_path: Some(PathBuf::from("from-config.jsonl")),
            history_path: Some(PathBuf::from("history.jsonl")),
            decay: Decay::new(0.2).unwrap(),
        };
        let resolved = config
            .resolve(ConfigOverrides {
                lexicon_path: Some(PathBuf::from("from-flag.jsonl")),
                history_path: None,
                decay: Some(0.3),
            })
            .unwrap();
        assert_eq!(resolved.lexicon_path, PathBuf::from("from-flag.jsonl"));
        assert_eq!(resolved.history_path, PathBuf::from("history.jsonl"));
        assert_eq!(resolved.decay.value(), 0.3);
    }

    #[test]
    fn missing_paths_are_reported() {
        let config = WordGameConfig::default();
        let err = config.resolve(ConfigOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("lexicon file was not specified"));

        let err = config
            .resolve(ConfigOverrides {
                lexicon_path: Some(PathBuf::from("words.jsonl")),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("history file was not specified"));
    }

    #[test]
    fn out_of_range_decay_flag_is_rejected() {
        let config = WordGameConfig {
            lexicon_path: Some(PathBuf::from("w.jsonl")),
            history_path: Some(PathBuf::from("h.jsonl")),
            decay: Decay::DEFAULT,
        };
        let overrides = ConfigOverrides {
            decay: Some(1.0),
            ..Default::default()
        };
        assert!(config.resolve(overrides).is_err());
    }

    #[test]
    fn env_overrides() {
        let env: HashMap<&str, &str> = [
            ("WORDGAME_LEXICON", "env-words.jsonl"),
            ("WORDGAME_DECAY", "0.05"),
        ]
        .into_iter()
        .collect();
        let mut config = WordGameConfig::default();
        apply_env_overrides(&mut config, |k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.lexicon_path, Some(PathBuf::from("env-words.jsonl")));
        assert!(config.history_path.is_none());
        assert_eq!(config.decay.value(), 0.05);

        let mut config = WordGameConfig::default();
        let bad = apply_env_overrides(&mut config, |k| {
            (k == "WORDGAME_DECAY").then(|| "lots".to_string())
        });
        assert!(bad.is_err());

        let mut config = WordGameConfig::default();
        let out_of_range = apply_env_overrides(&mut config, |k| {
            (k == "WORDGAME_DECAY").then(|| "2".to_string())
        });
        assert!(out_of_range.is_err());
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let err = load_config_from(Some(Path::new("/nonexistent/wordgame.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordgame.toml");
        std::fs::write(&path, "history_path = \"h.jsonl\"\ndecay = 0.4\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.history_path, Some(dir.path().join("h.jsonl")));
    }
}
