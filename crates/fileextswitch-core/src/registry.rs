//! Command registration with scoped handles.
//!
//! A host registers `fileextswitch` once at startup and keeps the returned
//! [`Registration`] for its lifetime. Dropping the handle, or passing it to
//! [`deactivate`], removes the command again.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{SwitchError, SwitchResult};
use crate::switch::COMMAND_NAME;

/// Set of commands a host currently exposes.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Mutex<BTreeSet<String>>,
}

impl CommandRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register `name`, failing if it is already registered.
    pub fn register(self: &Arc<Self>, name: impl Into<String>) -> SwitchResult<Registration> {
        let name = name.into();
        if !self.lock().insert(name.clone()) {
            return Err(SwitchError::AlreadyRegistered { name });
        }
        tracing::debug!(command = %name, "registered command");
        Ok(Registration {
            registry: Arc::clone(self),
            name,
        })
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.lock().contains(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    fn unregister(&self, name: &str) {
        if self.lock().remove(name) {
            tracing::debug!(command = %name, "unregistered command");
        }
    }

    // A panic while holding the lock cannot leave the set half-updated.
    fn lock(&self) -> MutexGuard<'_, BTreeSet<String>> {
        self.commands.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle keeping one command registered.
#[derive(Debug)]
#[must_use = "dropping a Registration unregisters the command"]
pub struct Registration {
    registry: Arc<CommandRegistry>,
    name: String,
}

impl Registration {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.registry.unregister(&self.name);
    }
}

/// Register the `fileextswitch` command.
pub fn activate(registry: &Arc<CommandRegistry>) -> SwitchResult<Registration> {
    registry.register(COMMAND_NAME)
}

/// Release a registration obtained from [`activate`].
pub fn deactivate(registration: Registration) {
    drop(registration);
}
