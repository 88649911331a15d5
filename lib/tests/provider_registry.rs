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

//! End-to-end exercise of provider resolution through the public API:
//! assemble a registry the way an application would, then resolve, default,
//! enumerate, and enrich against it.

use std::sync::Arc;

use async_trait::async_trait;
use quarry_core::interface::{IndexAccessor, IndexError, IndexProvider, IndexState};
use quarry_core::models::{IndexCapability, IndexDescriptor, ProviderDescriptor};
use quarry_lib::{IndexProviderRegistry, QuarryError};

struct StubProvider {
    descriptor: ProviderDescriptor,
    capability: Option<IndexCapability>,
}

struct StubAccessor {
    index: IndexDescriptor,
}

#[async_trait]
impl IndexProvider for StubProvider {
    fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    fn capability_for(&self, _index: &IndexDescriptor) -> Option<IndexCapability> {
        self.capability
    }

    async fn initial_state(&self, _index: &IndexDescriptor) -> Result<IndexState, IndexError> {
        Ok(IndexState::Populating)
    }

    async fn open_accessor(
        &self,
        index: &IndexDescriptor,
    ) -> Result<Arc<dyn IndexAccessor>, IndexError> {
        Ok(Arc::new(StubAccessor {
            index: index.clone(),
        }))
    }

    fn is_volatile(&self) -> bool {
        false
    }
}

#[async_trait]
impl IndexAccessor for StubAccessor {
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

fn assemble_registry() -> IndexProviderRegistry {
    IndexProviderRegistry::builder()
        .with_provider(Arc::new(StubProvider {
            descriptor: ProviderDescriptor::new("btree", "1.0"),
            capability: Some(IndexCapability::range_scan()),
        }))
        .with_provider(Arc::new(StubProvider {
            descriptor: ProviderDescriptor::new("fulltext", "0.5"),
            capability: Some(IndexCapability::exact()),
        }))
        .with_default("btree")
        .build()
        .expect("registry assembly should succeed")
}

#[test]
fn resolves_installed_providers_and_rejects_missing_ones() {
    let registry = assemble_registry();

    let btree = registry.lookup_by_name("btree").unwrap();
    assert_eq!(btree.descriptor().version(), "1.0");

    let same = registry
        .lookup(&ProviderDescriptor::new("btree", "1.0"))
        .unwrap();
    assert!(Arc::ptr_eq(&btree, &same));

    assert!(matches!(
        registry.lookup_by_name("spatial"),
        Err(QuarryError::ProviderNotFound { .. })
    ));

    assert_eq!(registry.default_provider().descriptor().name(), "btree");
    assert_eq!(registry.registered_names(), vec!["btree", "fulltext"]);
}

#[test]
fn enriches_index_descriptors_from_the_bound_provider() {
    let registry = assemble_registry();

    let index = IndexDescriptor::new(
        "order_date",
        "Order",
        vec!["placed_at".to_string()],
        ProviderDescriptor::new("fulltext", "0.5"),
    );
    let enriched = registry.with_capabilities(index).unwrap();

    assert_eq!(enriched.capability(), Some(&IndexCapability::exact()));
}

#[tokio::test]
async fn opens_accessors_through_a_resolved_provider() {
    let registry = assemble_registry();

    let index = IndexDescriptor::new(
        "person_name",
        "Person",
        vec!["name".to_string()],
        ProviderDescriptor::new("btree", "1.0"),
    )
    .with_config("page_size", serde_json::json!(8192));

    let provider = registry.lookup(index.provider()).unwrap();
    assert_eq!(
        provider.initial_state(&index).await.unwrap(),
        IndexState::Populating
    );

    let accessor = provider.open_accessor(&index).await.unwrap();
    assert_eq!(accessor.index().name(), "person_name");
    accessor.flush().await.unwrap();
}

#[tokio::test]
async fn empty_registry_serves_no_op_providers() {
    let registry = IndexProviderRegistry::empty();

    let provider = registry.lookup_by_name("btree").unwrap();
    let index = IndexDescriptor::new(
        "person_name",
        "Person",
        vec!["name".to_string()],
        provider.descriptor().clone(),
    );

    assert_eq!(
        provider.initial_state(&index).await.unwrap(),
        IndexState::Online
    );
    let accessor = provider.open_accessor(&index).await.unwrap();
    accessor.drop_index().await.unwrap();
}
