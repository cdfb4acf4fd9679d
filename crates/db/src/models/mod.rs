//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO shared by create and update (full replace)
//! - A `New*` insert record carrying the server-assigned timestamps
//! - A `*Filter` for search, where `None` means "match any"

use serde::{Deserialize, Deserializer};

pub mod project;
pub mod task;
pub mod user;

/// Decode a text field where `null` means the same as omitting it.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
