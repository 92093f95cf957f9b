//! Random item identifiers

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

/// Opaque 128-bit identifier
///
/// Displayed as 32 lowercase hex digits, zero padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct ItemId(u128);

impl ItemId {
    /// Wrap a raw value
    pub const fn from_u128(raw: u128) -> Self {
        Self(raw)
    }

    /// Get the raw value
    pub const fn as_u128(&self) -> u128 {
        self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // from_str_radix accepts a leading sign, ids never carry one
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidItemId(s.to_string()));
        }
        u128::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| Error::InvalidItemId(s.to_string()))
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ItemId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Generate a fresh random identifier
pub fn make_id() -> ItemId {
    let id = ItemId(rand::random());
    log::trace!("generated item id {id}");
    id
}
