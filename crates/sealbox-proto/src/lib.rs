//! sealbox-proto: serialization formats for sealbox key material
//!
//! Defines the binary wire format for keysets and for the ECDH-ES AEAD key
//! payloads they carry:
//!
//! - [`keyset`]: the outer envelope, an ordered list of typed key entries,
//!   plus its encrypted form and a secret-free metadata mirror
//! - [`ecdh`]: the ECDH-ES AEAD private/public key payloads and their
//!   curve/point-format enumerations
//!
//! Messages are protobuf, maintained directly as `prost` derives. The format
//! is versioned at the key-payload level (`EcdhAeadPrivateKey.version`), not
//! on the envelope.

pub mod ecdh;
pub mod error;
pub mod keyset;

pub use ecdh::{
    EcCurveType, EcPointFormat, EcdhAeadEncParams, EcdhAeadParams, EcdhAeadPrivateKey,
    EcdhAeadPublicKey, EcdhKwParams, ECDH_AEAD_PRIVATE_KEY_TYPE_URL,
};
pub use error::{ProtoError, ProtoResult};
pub use keyset::{EncryptedKeyset, Key, KeyData, KeyInfo, KeyMaterialType, KeyStatus, Keyset, KeysetInfo};

use prost::Message;

/// Encode a message into a fresh, pre-sized buffer.
pub fn encode_message<M: Message>(msg: &M) -> ProtoResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(msg.encoded_len());
    msg.encode(&mut buf)?;
    Ok(buf)
}

/// Decode a message from raw bytes.
pub fn decode_message<M: Message + Default>(bytes: &[u8]) -> ProtoResult<M> {
    Ok(M::decode(bytes)?)
}
