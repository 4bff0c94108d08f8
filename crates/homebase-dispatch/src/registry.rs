//! Capability Registry
//!
//! Maps stable names to the operations `callback` and `async_callback`
//! shortcuts invoke. Populated once at startup; looking up a name nobody
//! registered is an error, never a silent no-op.

use futures::future::BoxFuture;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use crate::error::{CapabilityError, RegistryError};

/// A capability that completes before returning.
pub type SyncCapability = Arc<dyn Fn(&[String]) -> Result<(), CapabilityError> + Send + Sync>;

/// A capability that may suspend.
pub type AsyncCapability =
    Arc<dyn Fn(Vec<String>) -> BoxFuture<'static, Result<(), CapabilityError>> + Send + Sync>;

/// A registered capability.
#[derive(Clone)]
pub enum Capability {
    Sync(SyncCapability),
    Async(AsyncCapability),
}

impl Capability {
    pub fn is_async(&self) -> bool {
        matches!(self, Capability::Async(_))
    }

    /// Run the capability with positional `params`, awaiting it if needed.
    pub async fn invoke(&self, params: &[String]) -> Result<(), CapabilityError> {
        match self {
            Capability::Sync(f) => f(params),
            Capability::Async(f) => f(params.to_vec()).await,
        }
    }
}

impl std::fmt::Debug for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Sync(_) => f.write_str("Capability::Sync"),
            Capability::Async(_) => f.write_str("Capability::Async"),
        }
    }
}

/// Registry for storing named capabilities.
pub struct CapabilityRegistry {
    capabilities: RwLock<HashMap<String, Capability>>,
}

impl CapabilityRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            capabilities: RwLock::new(HashMap::new()),
        }
    }

    /// Register a capability under `name`.
    ///
    /// Returns an error if the name is taken.
    pub fn register(&self, name: &str, capability: Capability) -> Result<(), RegistryError> {
        let mut capabilities = self.capabilities.write();
        if capabilities.contains_key(name) {
            return Err(RegistryError::AlreadyRegistered(name.to_string()));
        }
        tracing::debug!("Registered capability: {} ({:?})", name, capability);
        capabilities.insert(name.to_string(), capability);
        Ok(())
    }

    /// Register a synchronous capability.
    pub fn register_sync<F>(&self, name: &str, f: F) -> Result<(), RegistryError>
    where
        F: Fn(&[String]) -> Result<(), CapabilityError> + Send + Sync + 'static,
    {
        self.register(name, Capability::Sync(Arc::new(f)))
    }

    /// Register a capability that may suspend.
    pub fn register_async<F, Fut>(&self, name: &str, f: F) -> Result<(), RegistryError>
    where
        F: Fn(Vec<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), CapabilityError>> + Send + 'static,
    {
        let wrapped: AsyncCapability = Arc::new(
            move |params| -> BoxFuture<'static, Result<(), CapabilityError>> { Box::pin(f(params)) },
        );
        self.register(name, Capability::Async(wrapped))
    }

    /// Look a capability up by name.
    ///
    /// The returned handle is a cheap clone, so no lock is held while it runs.
    pub fn get(&self, name: &str) -> Result<Capability, RegistryError> {
        self.capabilities
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotRegistered(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.capabilities.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.capabilities.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn count(&self) -> usize {
        self.capabilities.read().len()
    }
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
