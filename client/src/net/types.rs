//! Wire DTOs shared by the session store and the REST client.
//!
//! DESIGN
//! ======
//! The same shape is persisted at login and returned by the entity endpoint,
//! so one lenient type serves both: every field defaults to absent and
//! unknown fields are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A company or driver account as persisted in the session and served by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedEntity {
    /// Backend document id.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Virtual `id` some backends emit next to `_id`. Read only.
    #[serde(rename = "id", default, skip_serializing)]
    pub plain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Embedded base64 image, when the account uploaded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
}

impl AuthenticatedEntity {
    /// Entity id usable as a URL path segment, preferring `_id` over `id`.
    pub fn entity_id(&self) -> Option<&str> {
        usable_id(self.id.as_deref()).or_else(|| usable_id(self.plain_id.as_deref()))
    }
}

/// Non-empty id made only of URL-unreserved characters.
fn usable_id(raw: Option<&str>) -> Option<&str> {
    let id = raw?.trim();
    let unreserved = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~');
    (!id.is_empty() && id.chars().all(unreserved)).then_some(id)
}

/// Embedded image payload: MIME type plus base64 body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    #[serde(rename = "contentType", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl Logo {
    /// `data:` URI for an `<img src>`, only when both parts are present.
    pub fn data_uri(&self) -> Option<String> {
        let content_type = self.content_type.as_deref().filter(|v| !v.is_empty())?;
        let data = self.data.as_deref().filter(|v| !v.is_empty())?;
        Some(format!("data:{content_type};base64,{data}"))
    }
}
