// Copyright 2025 The Quarry Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Index Provider Registry
//!
//! This module provides the registry that resolves installed index
//! providers by identity. A running instance may have several providers
//! installed at once; one of them is designated the default, used whenever
//! a query or schema operation does not request a provider explicitly.
//!
//! # Architecture
//!
//! The registry is built once at assembly time and read-only afterwards:
//! 1. The assembly step registers each constructed provider with the builder
//! 2. The builder rejects name collisions and unknown defaults
//! 3. The finished registry is shared freely across threads; every
//!    operation is a plain read
//!
//! # Example
//!
//! ```ignore
//! use quarry_lib::IndexProviderRegistry;
//!
//! let registry = IndexProviderRegistry::builder()
//!     .with_provider(Arc::new(BTreeIndexProvider::new(config)?))
//!     .with_provider(Arc::new(FulltextIndexProvider::new(config)?))
//!     .with_default("btree")
//!     .build()?;
//!
//! let provider = registry.lookup_by_name("fulltext")?;
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use quarry_core::interface::IndexProvider;
use quarry_core::models::{IndexDescriptor, ProviderDescriptor};
use quarry_core::no_op::NoOpIndexProvider;

use crate::error::{QuarryError, Result};

/// Registry of installed index providers, keyed by provider identity.
///
/// The provider set and the designated default are fixed at construction,
/// so the registry is safe for unsynchronized concurrent reads. Use
/// [`IndexProviderRegistry::builder`] to construct one, or
/// [`IndexProviderRegistry::empty`] for contexts with no real providers.
pub struct IndexProviderRegistry {
    /// Providers keyed by descriptor name; names are unique, enumeration is
    /// sorted by name.
    providers: BTreeMap<String, Arc<dyn IndexProvider>>,
    /// The provider used when none is requested explicitly.
    default: Arc<dyn IndexProvider>,
}

impl fmt::Debug for IndexProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexProviderRegistry")
            .field("providers", &self.registered_names())
            .field("default", &self.default.descriptor().to_string())
            .finish()
    }
}

impl IndexProviderRegistry {
    /// Start building a registry.
    pub fn builder() -> IndexProviderRegistryBuilder {
        IndexProviderRegistryBuilder::new()
    }

    /// The process-wide registry for contexts with no providers configured.
    ///
    /// Every lookup on it resolves to the no-op sentinel provider rather
    /// than failing.
    pub fn empty() -> &'static IndexProviderRegistry {
        static EMPTY: OnceLock<IndexProviderRegistry> = OnceLock::new();
        EMPTY.get_or_init(|| IndexProviderRegistry {
            providers: BTreeMap::new(),
            default: Arc::new(NoOpIndexProvider::new()),
        })
    }

    /// Look up the provider registered under the given descriptor.
    ///
    /// The full identity must match: a descriptor whose name is registered
    /// under a different version does not resolve.
    ///
    /// # Errors
    ///
    /// Returns [`QuarryError::ProviderNotFound`] when no registered provider
    /// matches the descriptor's identity.
    pub fn lookup(&self, descriptor: &ProviderDescriptor) -> Result<Arc<dyn IndexProvider>> {
        if self.providers.is_empty() {
            return Ok(self.default.clone());
        }
        self.providers
            .get(descriptor.name())
            .filter(|provider| provider.descriptor() == descriptor)
            .cloned()
            .ok_or_else(|| QuarryError::provider_not_found(descriptor.to_string()))
    }

    /// Look up the provider whose descriptor carries the given name.
    ///
    /// Consistent with [`lookup`](Self::lookup): whenever a descriptor's
    /// name equals a registered name, both paths resolve to the same
    /// provider instance.
    ///
    /// # Errors
    ///
    /// Returns [`QuarryError::ProviderNotFound`] when no registered
    /// provider's name matches.
    pub fn lookup_by_name(&self, name: &str) -> Result<Arc<dyn IndexProvider>> {
        if self.providers.is_empty() {
            return Ok(self.default.clone());
        }
        self.providers
            .get(name)
            .cloned()
            .ok_or_else(|| QuarryError::provider_not_found(name))
    }

    /// The provider used when none is requested explicitly.
    ///
    /// Total: there is always a default, including on the empty registry,
    /// where it is the no-op sentinel.
    pub fn default_provider(&self) -> Arc<dyn IndexProvider> {
        self.default.clone()
    }

    /// Iterate over the registered providers, sorted by provider name.
    ///
    /// Yields nothing on the empty registry.
    pub fn providers(&self) -> impl Iterator<Item = &Arc<dyn IndexProvider>> + '_ {
        self.providers.values()
    }

    /// Check if a provider is registered under the given name.
    pub fn has_provider(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Names of all registered providers, sorted.
    pub fn registered_names(&self) -> Vec<&str> {
        self.providers.keys().map(|name| name.as_str()).collect()
    }

    /// Derive a descriptor enriched with its provider's capability.
    ///
    /// Resolves the descriptor's bound provider, asks it for the capability
    /// applicable to this index, and returns a derived descriptor carrying
    /// it. When the provider reports no capability the input comes back
    /// unchanged; a missing capability is not an error.
    ///
    /// Built entirely on the public lookup contract above.
    ///
    /// # Errors
    ///
    /// Propagates [`QuarryError::ProviderNotFound`] when the index is bound
    /// to an unregistered provider.
    pub fn with_capabilities(&self, index: IndexDescriptor) -> Result<IndexDescriptor> {
        let provider = self.lookup(index.provider())?;
        match provider.capability_for(&index) {
            Some(capability) => Ok(index.with_capability(capability)),
            None => Ok(index),
        }
    }
}

/// Builder for [`IndexProviderRegistry`].
///
/// Collects already-constructed providers and the name of the designated
/// default, then validates the whole set in [`build`](Self::build).
pub struct IndexProviderRegistryBuilder {
    providers: Vec<Arc<dyn IndexProvider>>,
    default: Option<String>,
}

impl Default for IndexProviderRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexProviderRegistryBuilder {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            default: None,
        }
    }

    /// Add a provider to the registry under construction.
    pub fn with_provider(mut self, provider: Arc<dyn IndexProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Designate the default provider by name.
    pub fn with_default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Validate and build the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two providers register under the same name
    ///   ([`QuarryError::DuplicateProvider`])
    /// - The designated default names an unregistered provider, or
    ///   providers were registered without designating a default
    ///   ([`QuarryError::InvalidConfig`])
    pub fn build(self) -> Result<IndexProviderRegistry> {
        let mut providers: BTreeMap<String, Arc<dyn IndexProvider>> = BTreeMap::new();
        for provider in self.providers {
            let name = provider.descriptor().name().to_string();
            log::debug!(
                "registering index provider '{}'",
                provider.descriptor()
            );
            if providers.insert(name.clone(), provider).is_some() {
                return Err(QuarryError::DuplicateProvider { name });
            }
        }

        let default = match self.default {
            Some(name) => providers.get(&name).cloned().ok_or_else(|| {
                QuarryError::invalid_config(format!(
                    "default index provider '{name}' is not registered"
                ))
            })?,
            None if providers.is_empty() => {
                Arc::new(NoOpIndexProvider::new()) as Arc<dyn IndexProvider>
            }
            None => {
                return Err(QuarryError::invalid_config(
                    "no default index provider designated",
                ))
            }
        };
        log::debug!(
            "using '{}' as the default index provider",
            default.descriptor()
        );

        Ok(IndexProviderRegistry { providers, default })
    }
}
