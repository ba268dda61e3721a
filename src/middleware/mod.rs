// ABOUTME: HTTP middleware for CORS and request tracing
// ABOUTME: Layer builders consumed by the server when assembling the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

/// CORS configuration
pub mod cors;
/// Request spans and correlation IDs
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{create_request_span, create_store_span, REQUEST_ID_HEADER};
