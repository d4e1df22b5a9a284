use sealbox_proto::{encode_message, EncryptedKeyset, KeyMaterialType, Keyset, KeysetInfo};

use super::writer::KeysetWriter;
use crate::aead::Aead;
use crate::error::{CoreError, CoreResult};

/// Opaque container for a keyset.
///
/// A handle never exposes its key material directly: writing it out always
/// routes through a caller-supplied [`Aead`], and the cleartext path refuses
/// keysets that hold secrets.
pub struct KeysetHandle {
    keyset: Keyset,
}

impl KeysetHandle {
    /// Wrap a keyset. The handle does not validate the keyset's shape;
    /// malformed entries surface when the keyset is used.
    pub fn from_keyset(keyset: Keyset) -> Self {
        Self { keyset }
    }

    /// Secret-free metadata for the contained keyset.
    pub fn keyset_info(&self) -> KeysetInfo {
        KeysetInfo::from_keyset(&self.keyset)
    }

    /// Number of key entries.
    pub fn len(&self) -> usize {
        self.keyset.key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyset.key.is_empty()
    }

    /// Serialize the keyset, encrypt it under `master` (empty associated
    /// data), and hand the result to the writer's encrypted path. The
    /// serialized keyset never reaches a writer in the clear.
    pub fn write(&self, writer: &mut dyn KeysetWriter, master: &dyn Aead) -> CoreResult<()> {
        let serialized = encode_message(&self.keyset)?;
        let encrypted = master.encrypt(&serialized, &[])?;

        tracing::debug!(keys = self.keyset.key.len(), "writing encrypted keyset");
        writer.write_encrypted(&EncryptedKeyset {
            encrypted_keyset: encrypted,
            keyset_info: Some(self.keyset_info()),
        })
    }

    /// Write the keyset through the cleartext path.
    ///
    /// Fails with [`CoreError::ContainsSecrets`] unless every entry holds
    /// public-only key material. Entries with missing or unrecognized
    /// material types are treated as secret.
    pub fn write_with_no_secrets(&self, writer: &mut dyn KeysetWriter) -> CoreResult<()> {
        for key in &self.keyset.key {
            let material = key
                .key_data
                .as_ref()
                .map(|d| d.key_material_type)
                .unwrap_or_default();
            match KeyMaterialType::try_from(material) {
                Ok(KeyMaterialType::AsymmetricPublic) => {}
                _ => return Err(CoreError::ContainsSecrets),
            }
        }
        writer.write(&self.keyset)
    }
}
