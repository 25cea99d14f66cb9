//! Account DTOs

use serde::Serialize;

/// Response for `DELETE /api/account`
#[derive(Debug, Serialize)]
pub struct DeleteAccountResponse {
    pub ok: bool,
}

impl DeleteAccountResponse {
    pub fn success() -> Self {
        Self { ok: true }
    }
}
