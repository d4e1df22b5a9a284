//! Keyset envelope messages.
//!
//! A [`Keyset`] is an ordered list of [`Key`] entries, each carrying a typed,
//! opaque payload in its [`KeyData`]. At rest a keyset only ever appears as an
//! [`EncryptedKeyset`]: the serialized envelope encrypted under a master key,
//! paired with a secret-free [`KeysetInfo`] mirror.

/// Kind of key material held by a [`KeyData`] payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum KeyMaterialType {
    UnknownKeyMaterial = 0,
    Symmetric = 1,
    AsymmetricPrivate = 2,
    AsymmetricPublic = 3,
}

/// Status of a key within a keyset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum KeyStatus {
    UnknownStatus = 0,
    Enabled = 1,
    Disabled = 2,
    Destroyed = 3,
}

/// A typed key payload: a type URL naming the payload format and the
/// payload's serialized bytes.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyData {
    #[prost(string, tag = "1")]
    pub type_url: String,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
    #[prost(enumeration = "KeyMaterialType", tag = "3")]
    pub key_material_type: i32,
}

/// A single keyset entry.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Key {
    #[prost(message, optional, tag = "1")]
    pub key_data: Option<KeyData>,
    #[prost(enumeration = "KeyStatus", tag = "2")]
    pub status: i32,
    #[prost(uint32, tag = "3")]
    pub key_id: u32,
}

/// The keyset envelope: an ordered list of key entries.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Keyset {
    #[prost(uint32, tag = "1")]
    pub primary_key_id: u32,
    #[prost(message, repeated, tag = "2")]
    pub key: Vec<Key>,
}

/// A keyset encrypted under a master key, with its cleartext metadata.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EncryptedKeyset {
    /// The serialized [`Keyset`], encrypted.
    #[prost(bytes = "vec", tag = "1")]
    pub encrypted_keyset: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub keyset_info: Option<KeysetInfo>,
}

/// Secret-free mirror of a [`Keyset`].
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeysetInfo {
    #[prost(uint32, tag = "1")]
    pub primary_key_id: u32,
    #[prost(message, repeated, tag = "2")]
    pub key_info: Vec<KeyInfo>,
}

/// Secret-free mirror of a [`Key`].
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyInfo {
    #[prost(string, tag = "1")]
    pub type_url: String,
    #[prost(enumeration = "KeyStatus", tag = "2")]
    pub status: i32,
    #[prost(uint32, tag = "3")]
    pub key_id: u32,
}

impl KeysetInfo {
    /// Build the metadata mirror of a keyset, dropping all payload bytes.
    pub fn from_keyset(keyset: &Keyset) -> Self {
        KeysetInfo {
            primary_key_id: keyset.primary_key_id,
            key_info: keyset
                .key
                .iter()
                .map(|k| KeyInfo {
                    type_url: k
                        .key_data
                        .as_ref()
                        .map(|d| d.type_url.clone())
                        .unwrap_or_default(),
                    status: k.status,
                    key_id: k.key_id,
                })
                .collect(),
        }
    }
}
