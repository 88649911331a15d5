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

//! No-op sentinel provider.
//!
//! Contexts without real index providers configured (tooling, tests,
//! read-only sessions against foreign stores) still need every provider
//! lookup to resolve. The sentinel fills that role: it reports no
//! capabilities and its accessors accept every operation without effect.

use async_trait::async_trait;
use std::sync::Arc;

use crate::interface::{IndexAccessor, IndexError, IndexProvider, IndexState};
use crate::models::{IndexCapability, IndexDescriptor, ProviderDescriptor};

/// Name the sentinel provider registers under.
pub const NO_OP_PROVIDER_NAME: &str = "no-op";

/// Index provider that stores nothing and serves nothing.
pub struct NoOpIndexProvider {
    descriptor: ProviderDescriptor,
}

impl NoOpIndexProvider {
    pub fn new() -> Self {
        Self {
            descriptor: ProviderDescriptor::new(NO_OP_PROVIDER_NAME, "1.0"),
        }
    }
}

impl Default for NoOpIndexProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IndexProvider for NoOpIndexProvider {
    fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    fn capability_for(&self, _index: &IndexDescriptor) -> Option<IndexCapability> {
        None
    }

    async fn initial_state(&self, _index: &IndexDescriptor) -> Result<IndexState, IndexError> {
        Ok(IndexState::Online)
    }

    async fn open_accessor(
        &self,
        index: &IndexDescriptor,
    ) -> Result<Arc<dyn IndexAccessor>, IndexError> {
        log::debug!("opening no-op accessor for index '{}'", index.name());
        Ok(Arc::new(NoOpIndexAccessor {
            index: index.clone(),
        }))
    }

    fn is_volatile(&self) -> bool {
        true
    }
}

/// Accessor vended by [`NoOpIndexProvider`]; every operation succeeds
/// without touching any storage.
pub struct NoOpIndexAccessor {
    index: IndexDescriptor,
}

#[async_trait]
impl IndexAccessor for NoOpIndexAccessor {
    fn index(&self) -> &IndexDescriptor {
        &self.index
    }

    async fn flush(&self) -> Result<(), IndexError> {
        Ok(())
    }

    async fn drop_index(&self) -> Result<(), IndexError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any_index() -> IndexDescriptor {
        IndexDescriptor::new(
            "orders_total",
            "Order",
            vec!["total".to_string()],
            ProviderDescriptor::new(NO_OP_PROVIDER_NAME, "1.0"),
        )
    }

    #[test]
    fn test_no_op_reports_no_capability() {
        let provider = NoOpIndexProvider::new();
        assert_eq!(provider.descriptor().name(), NO_OP_PROVIDER_NAME);
        assert!(provider.capability_for(&any_index()).is_none());
        assert!(provider.is_volatile());
    }

    #[tokio::test]
    async fn test_no_op_index_is_always_online() {
        let provider = NoOpIndexProvider::new();
        let state = provider.initial_state(&any_index()).await.unwrap();
        assert_eq!(state, IndexState::Online);
    }

    #[tokio::test]
    async fn test_no_op_accessor_accepts_everything() {
        let provider = NoOpIndexProvider::new();
        let accessor = provider.open_accessor(&any_index()).await.unwrap();

        assert_eq!(accessor.index().name(), "orders_total");
        accessor.flush().await.unwrap();
        accessor.drop_index().await.unwrap();
    }
}
