//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::services::MAX_DECIMALS;
use crate::domain::value_objects::Locale;
use crate::error::{PegadaError, PegadaResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "pegada.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PegadaResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PegadaError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if config.output.decimals > MAX_DECIMALS {
        warn!(
            "{}: output.decimals = {} clamped to {MAX_DECIMALS}",
            path.display(),
            config.output.decimals
        );
        config.output.decimals = MAX_DECIMALS;
    }

    if let (Some(catalog), Some(dir)) = (config.catalog.path.as_mut(), path.parent()) {
        if catalog.is_relative() {
            *catalog = dir.join(&*catalog);
        }
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Config files in priority order: project first, then user
pub fn candidate_paths(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(root) = project_root {
        paths.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(dir) = user_config_dir() {
        paths.push(dir.join("pegada/config.toml"));
    }
    paths
}

/// First config file that exists
pub fn locate(project_root: Option<&Path>) -> Option<PathBuf> {
    candidate_paths(project_root)
        .into_iter()
        .find(|path| path.exists())
}

/// Load from project config, user config, or defaults
///
/// A config file that fails to parse is skipped with a warning.
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    for path in candidate_paths(project_root) {
        if !path.exists() {
            continue;
        }
        match Config::load(&path) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                return with_env_overrides(config);
            }
            Err(e) => warn!("ignoring config {}: {}", path.display(), e),
        }
    }

    // Return defaults with env overrides
    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (PEGADA_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // PEGADA_LOCALE
    if let Some(value) = get_env("PEGADA_LOCALE") {
        match value.parse::<Locale>() {
            Ok(locale) => config.output.locale = locale,
            Err(e) => warn!("PEGADA_LOCALE ignored: {e}"),
        }
    }

    // PEGADA_DECIMALS
    if let Some(value) = get_env("PEGADA_DECIMALS") {
        match value.trim().parse::<usize>() {
            Ok(decimals) if decimals <= MAX_DECIMALS => config.output.decimals = decimals,
            Ok(decimals) => {
                warn!("PEGADA_DECIMALS ignored: {decimals} is above the maximum of {MAX_DECIMALS}")
            }
            Err(_) => warn!("PEGADA_DECIMALS ignored: '{value}' is not a non-negative integer"),
        }
    }

    // PEGADA_COLOR
    if let Some(value) = get_env("PEGADA_COLOR") {
        config.output.color = match value.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    // PEGADA_CATALOG
    if let Some(value) = get_env("PEGADA_CATALOG") {
        if !value.trim().is_empty() {
            config.catalog.path = Some(PathBuf::from(value));
        }
    }

    config
}

/// XDG config directory, falling back to the platform default
fn user_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["output", "locale", "decimals", "color", "unicode", "catalog", "path"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
