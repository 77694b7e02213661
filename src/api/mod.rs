// =============================================================================
// API Module
// =============================================================================
//
// HTTP surface of the signal service (axum).

pub mod rest;
