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

mod index_provider;

pub use index_provider::IndexAccessor;
pub use index_provider::IndexProvider;
pub use index_provider::IndexState;

use thiserror::Error;

/// Errors raised by provider-side index operations.
///
/// These surface from `IndexProvider` and `IndexAccessor` calls. Resolution
/// failures (an unknown provider identity) are not represented here; those
/// belong to the registry in `quarry-lib`.
#[derive(Error, Debug)]
pub enum IndexError {
    /// The provider does not support the requested operation.
    #[error("operation not supported by this index provider")]
    NotSupported,

    /// Backend-specific failure.
    #[error("index provider error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl IndexError {
    pub fn other<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
        IndexError::Other(Box::new(e))
    }
}
