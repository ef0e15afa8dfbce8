use std::path::{Path, PathBuf};

use crate::{ClientError, ClientResult};

pub const HOME_ENV: &str = "EXPENSETRACK_HOME";
pub const RECORDS_ENV: &str = "EXPENSETRACK_RECORDS";
pub const LOG_ENV: &str = "EXPENSETRACK_LOG";
pub const DEFAULT_RECORDS_FILE: &str = "transactions.json";

pub fn resolve_home(home_override: Option<&Path>) -> ClientResult<PathBuf> {
    if let Some(path) = home_override {
        return Ok(path.to_path_buf());
    }
    if let Some(override_path) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(override_path));
    }
    home::home_dir()
        .map(|home_path| home_path.join(".expensetrack"))
        .ok_or_else(ClientError::home_unresolved)
}

/// Picks the records file: explicit path, then `EXPENSETRACK_RECORDS`, then
/// `transactions.json` inside the resolved home directory.
pub fn resolve_records_path(
    records_override: Option<&str>,
    home_override: Option<&Path>,
) -> ClientResult<PathBuf> {
    if let Some(path) = records_override {
        return Ok(PathBuf::from(path));
    }
    // An explicit home wins over the environment so callers stay isolated.
    if home_override.is_none()
        && let Some(env_path) = std::env::var_os(RECORDS_ENV)
    {
        return Ok(PathBuf::from(env_path));
    }
    Ok(resolve_home(home_override)?.join(DEFAULT_RECORDS_FILE))
}
