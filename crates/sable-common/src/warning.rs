//! Builder warnings with colored terminal output.
//!
//! Warnings are for input that the builder accepts but that will likely
//! produce a selector a browser rejects (an empty class name, a combinator
//! padded with whitespace). Each unique message is printed once per process
//! so that a builder in a loop does not flood stderr.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Messages already printed, keyed as `[component] message`.
static WARNED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

fn warned() -> MutexGuard<'static, BTreeSet<String>> {
    // A panic while holding the lock cannot leave the set half-updated.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about questionable input (prints once per unique message).
///
/// # Example
/// ```
/// use sable_common::warning::{has_warned, warn_once};
///
/// warn_once("Selector", "empty class name");
/// assert!(has_warned("Selector", "empty class name"));
/// ```
pub fn warn_once(component: &str, message: &str) {
    if warned().insert(key(component, message)) {
        let line = format!("[Sable {component}] ⚠ {message}");
        eprintln!("{}", line.yellow());
    }
}

/// Whether `warn_once` has already printed this message.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned().contains(&key(component, message))
}
