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

//! Error types for quarry-lib operations.
//!
//! This module provides structured error types using `thiserror` for
//! idiomatic Rust error handling. Public API functions return
//! `crate::error::Result<T>` with structured `QuarryError` variants that
//! callers can pattern match on.
//!
//! Provider-side failures (from index build or query operations) use
//! `quarry_core::interface::IndexError` instead; the registry never wraps
//! one error kind in the other.

use thiserror::Error;

/// Main error type for quarry-lib operations.
#[derive(Error, Debug)]
pub enum QuarryError {
    /// No registered index provider matches the requested identity.
    ///
    /// This is a configuration error: either the provider was never
    /// installed, or a persisted index references a provider that is no
    /// longer available. It is never recovered internally.
    #[error("index provider '{requested}' not found")]
    ProviderNotFound {
        /// The descriptor or name that failed to resolve
        requested: String,
    },

    /// A provider with the same name was registered twice.
    #[error("index provider '{name}' already registered")]
    DuplicateProvider {
        /// The colliding provider name
        name: String,
    },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error
        message: String,
    },
}

impl QuarryError {
    pub(crate) fn provider_not_found(requested: impl Into<String>) -> Self {
        QuarryError::ProviderNotFound {
            requested: requested.into(),
        }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        QuarryError::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Convenience result type for quarry-lib operations.
pub type Result<T> = std::result::Result<T, QuarryError>;
