/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads and parses an environment variable, falling back to `default`
///
/// A variable that is present but unparsable is reported with `warn!` and the
/// default is used instead.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|e| {
            warn!("Failed to parse {}={:?} ({:?}), using default", env_var, val, e);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, `None` when absent or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok()?.trim().parse::<T>().ok()
}

/// Reads a base URL from the environment with any trailing `/` removed
///
/// Endpoint paths are always joined with a single `/`, so a configured
/// `https://host/api/` and `https://host/api` behave the same.
pub fn get_env_base_url(env_var: &str, default: &str) -> String {
    let raw = get_env_or_default(env_var, default.to_string());
    raw.trim_end_matches('/').to_string()
}
