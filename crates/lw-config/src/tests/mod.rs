
use crate::Cli;

use std::env;

use clap::Parser;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Clear every `LW_*` variable the config reads.
pub(crate) fn clean_env() -> [EnvGuard; 3] {
    [
        EnvGuard::remove("LW_LOG_LEVEL"),
        EnvGuard::remove("LW_LOG_COLORED"),
        EnvGuard::remove("LW_LOG_FILE"),
    ]
}

/// Parse command-line arguments as the binary would.
pub(crate) fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("lazywatch").chain(args.iter().copied())).unwrap()
}
