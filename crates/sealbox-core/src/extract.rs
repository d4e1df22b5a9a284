//! Private-key extraction from an encryption-capable keyset handle.
//!
//! A [`KeysetHandle`] only ever writes itself encrypted. To recover the raw
//! ECDH-ES private key for hybrid decryption, the extractor drives the
//! handle's ordinary write path with a cipher that is the identity function
//! and a writer that keeps the "encrypted" bytes, then decodes what it
//! captured. No access to the handle's internals is needed; both
//! collaborators conform to the handle's documented contracts.

use std::str::FromStr;

use sealbox_proto::{
    decode_message, EcCurveType, EcdhAeadPrivateKey, EncryptedKeyset, Keyset,
    ECDH_AEAD_PRIVATE_KEY_TYPE_URL,
};

use crate::aead::Aead;
use crate::curve::EcCurve;
use crate::error::{CoreError, CoreResult, CurveError, ExtractError};
use crate::keys::EcPrivateKey;
use crate::keyset::{KeysetHandle, KeysetWriter};

/// AEAD that returns its input unchanged.
///
/// Supplied to the handle's write path so that its encrypt-then-serialize
/// pipeline emits the underlying keyset in the clear.
struct NoopAead;

impl Aead for NoopAead {
    fn encrypt(&self, plaintext: &[u8], _associated_data: &[u8]) -> CoreResult<Vec<u8>> {
        Ok(plaintext.to_vec())
    }

    fn decrypt(&self, ciphertext: &[u8], _associated_data: &[u8]) -> CoreResult<Vec<u8>> {
        Ok(ciphertext.to_vec())
    }
}

/// Writer that records the bytes of an "encrypted" keyset in memory.
#[derive(Default)]
struct PrivateKeyCapture {
    buf: Vec<u8>,
}

impl KeysetWriter for PrivateKeyCapture {
    // The handle always takes the encrypted path when a cipher is supplied.
    fn write(&mut self, _keyset: &Keyset) -> CoreResult<()> {
        Err(CoreError::UnsupportedOperation(
            "cleartext keyset write is not supported".into(),
        ))
    }

    fn write_encrypted(&mut self, keyset: &EncryptedKeyset) -> CoreResult<()> {
        // No decryption here: the no-op cipher already left these in the clear.
        self.buf.extend_from_slice(&keyset.encrypted_keyset);
        Ok(())
    }
}

/// Recover the ECDH-ES private key held by `handle`.
///
/// The primary entry is taken positionally: index 0, with no lookup of the
/// keyset's primary-key id. Callers must only pass handles whose first entry
/// is the active ECDH-ES AEAD private key.
///
/// The returned scalar is the payload's `key_value`, byte for byte; its
/// length is not validated at this layer.
pub fn extract_private_key(handle: Option<&KeysetHandle>) -> Result<EcPrivateKey, ExtractError> {
    let handle = handle.ok_or(ExtractError::InvalidArgument)?;

    let mut capture = PrivateKeyCapture::default();
    handle
        .write(&mut capture, &NoopAead)
        .map_err(ExtractError::ExtractionFailed)?;

    decode_private_key(&capture.buf)
}

/// Decode a captured cleartext keyset down to its primary private key.
fn decode_private_key(bytes: &[u8]) -> Result<EcPrivateKey, ExtractError> {
    let keyset: Keyset = decode_message(bytes).map_err(|_| ExtractError::InvalidPrivateKey)?;

    let primary = keyset.key.first().ok_or(ExtractError::InvalidPrivateKey)?;
    let key_data = primary
        .key_data
        .as_ref()
        .ok_or(ExtractError::InvalidPrivateKey)?;

    if key_data.type_url != ECDH_AEAD_PRIVATE_KEY_TYPE_URL {
        return Err(ExtractError::UnsupportedKeyType(key_data.type_url.clone()));
    }

    let private_key: EcdhAeadPrivateKey =
        decode_message(&key_data.value).map_err(|_| ExtractError::InvalidKeysetEntry)?;

    let kw_params = private_key
        .public_key
        .as_ref()
        .and_then(|public_key| public_key.params.as_ref())
        .and_then(|params| params.kw_params.as_ref())
        .ok_or(ExtractError::InvalidKeysetEntry)?;

    let curve = resolve_curve(kw_params.curve_type)?;
    tracing::debug!(%curve, "extracted private key");

    Ok(EcPrivateKey::new(curve, private_key.key_value))
}

/// Resolve a wire-format curve identifier through the curve registry.
fn resolve_curve(curve_type: i32) -> Result<EcCurve, CurveError> {
    let curve_type = EcCurveType::try_from(curve_type)
        .map_err(|_| CurveError::Unsupported(curve_type.to_string()))?;
    EcCurve::from_str(curve_type.as_str_name())
}
