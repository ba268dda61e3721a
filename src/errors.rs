// ABOUTME: Unified error handling for the Kuzan server
// ABOUTME: Re-exports the core AppError, ErrorCode and response envelope types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! Error types shared across the server
//!
//! The definitions live in `kuzan_core::errors` so the engine and the server
//! speak the same error language. `AppError` renders itself as an axum
//! response through the `http-response` feature.

pub use kuzan_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails};
