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

//! Index Provider Trait
//!
//! This module defines the `IndexProvider` trait that index backends
//! implement to integrate with Quarry's indexing subsystem.
//!
//! # Architecture
//!
//! The provider system follows pure dependency inversion:
//! - **Core** provides the provider traits and the no-op sentinel
//! - **Lib** resolves providers by identity but has no knowledge of
//!   specific implementations
//! - **External providers** implement this trait and are handed to the
//!   registry at assembly time, already constructed
//!
//! The registry never manages provider lifecycle; it only indexes the
//! instances it was built with.

use async_trait::async_trait;
use std::sync::Arc;

use super::IndexError;
use crate::models::{IndexCapability, IndexDescriptor, ProviderDescriptor};

/// Lifecycle state a provider reports for one of its indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    /// The index is built and serving queries.
    Online,
    /// The index is still being populated.
    Populating,
    /// Population failed; the index cannot serve queries until rebuilt.
    Failed,
}

/// Trait implemented by index storage backends.
///
/// Each backend registers under a unique [`ProviderDescriptor`] and is
/// responsible for building and querying one category of index.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Example
///
/// ```ignore
/// use quarry_core::interface::IndexProvider;
///
/// pub struct RangeIndexProvider {
///     descriptor: ProviderDescriptor,
///     // configuration fields
/// }
///
/// #[async_trait]
/// impl IndexProvider for RangeIndexProvider {
///     fn descriptor(&self) -> &ProviderDescriptor {
///         &self.descriptor
///     }
///     // ... other methods
/// }
/// ```
#[async_trait]
pub trait IndexProvider: Send + Sync {
    /// The identity this provider registers under.
    fn descriptor(&self) -> &ProviderDescriptor;

    /// Capability information for an index bound to this provider.
    ///
    /// Returns `None` when no capability information is available for the
    /// given index. Callers treat that as "unknown", not as a failure.
    fn capability_for(&self, index: &IndexDescriptor) -> Option<IndexCapability>;

    /// Report the lifecycle state of an existing index.
    async fn initial_state(&self, index: &IndexDescriptor) -> Result<IndexState, IndexError>;

    /// Open the accessor used to build and query one index.
    ///
    /// Each index gets its own accessor instance; the provider decides how
    /// accessors share underlying storage.
    async fn open_accessor(
        &self,
        index: &IndexDescriptor,
    ) -> Result<Arc<dyn IndexAccessor>, IndexError>;

    /// Returns true if indexes from this provider are lost on restart.
    ///
    /// Volatile providers require their indexes to be repopulated after
    /// restart, while persistent providers retain index data.
    fn is_volatile(&self) -> bool;
}

/// Per-index handle vended by an [`IndexProvider`].
///
/// The build/query surface of an index is backend-specific; this trait only
/// carries the operations the kernel needs from every backend.
#[async_trait]
pub trait IndexAccessor: Send + Sync {
    /// Descriptor of the index this accessor serves.
    fn index(&self) -> &IndexDescriptor;

    /// Flush outstanding writes to the underlying storage.
    async fn flush(&self) -> Result<(), IndexError>;

    /// Delete the index and all of its state.
    async fn drop_index(&self) -> Result<(), IndexError>;
}
