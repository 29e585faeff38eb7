use crate::error::NanolyseError;
use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Reference shipped alongside the binary: the lambda DNA control strand.
pub const DEFAULT_REFERENCE: &str = "reference/DNA_CS.fasta";
pub const DEFAULT_LOGFILE: &str = "NanoLyse.log";
pub const REFERENCE_ENV: &str = "NANOLYSE_REFERENCE";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reference: Option<PathBuf>,
    #[serde(default = "default_preset")]
    pub preset: String,
    #[serde(default)]
    pub logfile: Option<PathBuf>,
}

fn default_preset() -> String {
    "map-ont".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference: None,
            preset: default_preset(),
            logfile: None,
        }
    }
}

impl Config {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "nanolyse", "nanolyse")
    }

    pub fn load() -> Self {
        if let Some(proj_dirs) = Self::project_dirs() {
            let config_path = proj_dirs.config_dir().join("config.toml");

            if config_path.exists() {
                if let Ok(content) = fs::read_to_string(config_path) {
                    if let Ok(config) = Self::from_toml(&content) {
                        return config;
                    }
                }
            }
        }
        Config::default()
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn logfile(&self, cli_logfile: Option<&Path>) -> PathBuf {
        cli_logfile
            .map(Path::to_path_buf)
            .or_else(|| self.logfile.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOGFILE))
    }

    /// Candidate reference paths, most specific first.
    ///
    /// An explicit path (flag, config, environment) is the only candidate;
    /// the built-in locations are consulted only when none is given.
    pub fn reference_candidates(&self, cli_reference: Option<&Path>) -> Vec<PathBuf> {
        if let Some(path) = cli_reference {
            return vec![path.to_path_buf()];
        }
        if let Some(path) = &self.reference {
            return vec![path.clone()];
        }
        if let Some(path) = std::env::var_os(REFERENCE_ENV) {
            return vec![PathBuf::from(path)];
        }

        let mut candidates = Vec::new();
        if let Ok(exe) = std::env::current_exe() {
            // <prefix>/bin/NanoLyse -> <prefix>/reference/DNA_CS.fasta
            if let Some(prefix) = exe.parent().and_then(Path::parent) {
                candidates.push(prefix.join(DEFAULT_REFERENCE));
            }
        }
        if let Some(proj_dirs) = Self::project_dirs() {
            candidates.push(proj_dirs.data_dir().join(DEFAULT_REFERENCE));
        }
        candidates
    }

    pub fn resolve_reference(&self, cli_reference: Option<&Path>) -> Result<PathBuf> {
        let candidates = self.reference_candidates(cli_reference);
        match candidates.iter().find(|path| path.is_file()) {
            Some(path) => Ok(path.clone()),
            None => Err(NanolyseError::ReferenceNotFound {
                searched: candidates,
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml("reference = \"/data/lambda.fa\"\n").unwrap();
        assert_eq!(config.reference, Some(PathBuf::from("/data/lambda.fa")));
        assert_eq!(config.preset, "map-ont");
        assert_eq!(config.logfile, None);
    }

    #[test]
    fn test_logfile_precedence() {
        let config = Config {
            logfile: Some(PathBuf::from("from_config.log")),
            ..Config::default()
        };
        assert_eq!(
            config.logfile(Some(Path::new("from_cli.log"))),
            PathBuf::from("from_cli.log")
        );
        assert_eq!(config.logfile(None), PathBuf::from("from_config.log"));
        assert_eq!(
            Config::default().logfile(None),
            PathBuf::from(DEFAULT_LOGFILE)
        );
    }

    #[test]
    fn test_explicit_reference_is_used_verbatim() {
        let mut fasta = tempfile::NamedTempFile::new().unwrap();
        writeln!(fasta, ">lambda\nACGT").unwrap();

        let config = Config {
            reference: Some(PathBuf::from("/nonexistent/ignored.fa")),
            ..Config::default()
        };
        let resolved = config.resolve_reference(Some(fasta.path())).unwrap();
        assert_eq!(resolved, fasta.path());
    }

    #[test]
    fn test_missing_reference_is_reported() {
        let config = Config::default();
        let err = config
            .resolve_reference(Some(Path::new("/nonexistent/lambda.fasta")))
            .unwrap_err();
        match err.downcast_ref::<NanolyseError>() {
            Some(NanolyseError::ReferenceNotFound { searched }) => {
                assert_eq!(searched, &vec![PathBuf::from("/nonexistent/lambda.fasta")]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    // Everything that reads or writes NANOLYSE_REFERENCE lives in this one
    // test so parallel tests never see a half-set environment.
    #[test]
    fn test_reference_lookup_order() {
        let from_config = Config {
            reference: Some(PathBuf::from("/data/config.fa")),
            ..Config::default()
        };

        std::env::set_var(REFERENCE_ENV, "/data/env.fa");
        assert_eq!(
            from_config.reference_candidates(None),
            vec![PathBuf::from("/data/config.fa")]
        );
        assert_eq!(
            Config::default().reference_candidates(None),
            vec![PathBuf::from("/data/env.fa")]
        );

        std::env::remove_var(REFERENCE_ENV);
        let builtin = Config::default().reference_candidates(None);
        assert!(!builtin.is_empty());
        assert!(builtin.iter().all(|path| path.ends_with(DEFAULT_REFERENCE)));

        let exe = std::env::current_exe().unwrap();
        let prefix = exe.parent().and_then(Path::parent).unwrap();
        assert_eq!(builtin[0], prefix.join(DEFAULT_REFERENCE));
    }
}
