//! Shared response envelope types for API handlers.
//!
//! Read endpoints answer `{ "data": ... }`; JSON mutation endpoints answer
//! `{ "ok": true }` and leave the caller to re-fetch.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "ok": true }` acknowledgment for JSON mutations.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub const fn ok() -> Self {
        Self { ok: true }
    }
}
