//! One-time deprecation warnings.

use std::collections::BTreeSet;
use std::sync::{LazyLock, Mutex};

use tracing::warn;

static WARNED: LazyLock<Mutex<BTreeSet<&'static str>>> =
    LazyLock::new(|| Mutex::new(BTreeSet::new()));

/// Logs a deprecation warning for `name` the first time it is used in this
/// process. Returns whether a warning was logged.
pub(crate) fn warn_once(name: &'static str, replacement: &str) -> bool {
    let first = match WARNED.lock() {
        Ok(mut warned) => warned.insert(name),
        Err(poisoned) => poisoned.into_inner().insert(name),
    };
    if first {
        warn!(deprecated = name, replacement, "deprecated form builder method");
    }
    first
}
