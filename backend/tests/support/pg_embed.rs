//! Embedded PostgreSQL bootstrap for integration tests.
//!
//! `pg-embed-setup-unpriv` installs under `/var/tmp` unless told otherwise.
//! When `PG_RUNTIME_DIR` or `PG_DATA_DIR` is unset, both are pointed at a
//! fresh directory under the cargo target directory for the duration of the
//! bootstrap. Bootstraps are serialised because they mutate the environment.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pg_embedded_setup_unpriv::TestCluster;
use uuid::Uuid;

static BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Extra attempts after a transient download failure.
const MAX_RETRIES: u32 = 3;

/// First retry delay; doubles on each attempt.
const RETRY_DELAY: Duration = Duration::from_millis(500);

const TRANSIENT_PATTERNS: [&str; 6] = [
    "connection reset",
    "connection refused",
    "timed out",
    "timeout",
    "temporarily unavailable",
    "dns error",
];

fn scratch_dirs() -> std::io::Result<(PathBuf, PathBuf)> {
    let target = std::env::var_os("CARGO_TARGET_DIR").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("target"),
        PathBuf::from,
    );
    let base = target
        .join("pg-embed")
        .join(format!("directory-{}-{}", std::process::id(), Uuid::new_v4()));
    let runtime_dir = base.join("install");
    let data_dir = base.join("data");
    std::fs::create_dir_all(&runtime_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    Ok((runtime_dir, data_dir))
}

fn is_transient(message: &str) -> bool {
    let lower = message.to_lowercase();
    TRANSIENT_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
}

/// Start a [`TestCluster`], retrying transient download failures.
pub fn test_cluster() -> Result<TestCluster, String> {
    let _bootstrap = BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let _env = if std::env::var_os("PG_RUNTIME_DIR").is_none()
        || std::env::var_os("PG_DATA_DIR").is_none()
    {
        let (runtime_dir, data_dir) = scratch_dirs().map_err(|err| err.to_string())?;
        Some(env_lock::lock_env([
            ("PG_RUNTIME_DIR", Some(runtime_dir.to_string_lossy().into_owned())),
            ("PG_DATA_DIR", Some(data_dir.to_string_lossy().into_owned())),
        ]))
    } else {
        None
    };

    let mut delay = RETRY_DELAY;
    let mut attempt = 0;
    loop {
        match TestCluster::new() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => {
                let message = format!("{err:?}");
                if attempt == MAX_RETRIES || !is_transient(&message) {
                    return Err(message);
                }
                eprintln!("pg-embed: transient failure, retrying in {delay:?}: {message}");
                std::thread::sleep(delay);
                delay *= 2;
                attempt += 1;
            }
        }
    }
}
