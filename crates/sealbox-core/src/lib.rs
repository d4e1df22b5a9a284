//! # sealbox-core: keyset handling for hybrid ECDH-ES cryptography
//!
//! This crate provides the boundary where an opaque keyset container is
//! converted into concrete key material usable by a hybrid-encryption
//! primitive:
//!
//! - **Keyset handles**: opaque containers whose write path always encrypts
//!   the serialized keyset under a caller-supplied AEAD
//! - **Private-key extraction**: recovers the raw ECDH-ES private key from a
//!   handle by substituting a transparent cipher into that write path
//! - **Curve registry**: resolves named-curve identifiers carried in key
//!   payloads to [`EcCurve`] values
//!
//! ## Example: extracting the private key from a handle
//!
//! ```rust
//! use sealbox_core::{extract_private_key, EcCurve, KeysetHandle};
//! use sealbox_core::proto::{
//!     encode_message, EcCurveType, EcdhAeadParams, EcdhAeadPrivateKey, EcdhAeadPublicKey,
//!     EcdhKwParams, Key, KeyData, KeyMaterialType, KeyStatus, Keyset,
//!     ECDH_AEAD_PRIVATE_KEY_TYPE_URL,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scalar = vec![0x7F; 32];
//! let payload = EcdhAeadPrivateKey {
//!     version: 0,
//!     public_key: Some(EcdhAeadPublicKey {
//!         version: 0,
//!         params: Some(EcdhAeadParams {
//!             kw_params: Some(EcdhKwParams {
//!                 curve_type: EcCurveType::NistP256 as i32,
//!             }),
//!             enc_params: None,
//!             ec_point_format: 0,
//!         }),
//!         x: vec![0x0A; 32],
//!         y: vec![0x0B; 32],
//!     }),
//!     key_value: scalar.clone(),
//! };
//!
//! let handle = KeysetHandle::from_keyset(Keyset {
//!     primary_key_id: 1,
//!     key: vec![Key {
//!         key_data: Some(KeyData {
//!             type_url: ECDH_AEAD_PRIVATE_KEY_TYPE_URL.to_string(),
//!             value: encode_message(&payload)?,
//!             key_material_type: KeyMaterialType::AsymmetricPrivate as i32,
//!         }),
//!         status: KeyStatus::Enabled as i32,
//!         key_id: 1,
//!     }],
//! });
//!
//! let key = extract_private_key(Some(&handle))?;
//! assert_eq!(key.curve(), EcCurve::P256);
//! assert_eq!(key.as_bytes(), &scalar[..]);
//! # Ok(())
//! # }
//! ```
//!
//! Extraction is synchronous, stateless, and deterministic: every failure is
//! structural (bad input, mismatched type, unknown curve) and reported to the
//! caller; nothing is retried or logged away.

pub mod aead;
pub mod curve;
pub mod error;
pub mod extract;
pub mod keys;
pub mod keyset;

/// Wire-format messages for keysets and key payloads.
pub use sealbox_proto as proto;

// Re-exports for convenience
pub use aead::{Aead, AesGcmAead};
pub use curve::EcCurve;
pub use error::{CoreError, CoreResult, CurveError, ExtractError};
pub use extract::extract_private_key;
pub use keys::EcPrivateKey;
pub use keyset::{BinaryWriter, KeysetHandle, KeysetWriter};
