//! Authenticated encryption for keyset protection.

use aes_gcm::{
    aead::{Aead as _, KeyInit, Payload},
    Aes256Gcm, Nonce,
};
use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{CoreError, CoreResult};

/// Authenticated encryption with associated data.
///
/// The encryption-primitive contract the keyset handle's write path demands:
/// a serialized keyset is always passed through [`Aead::encrypt`] before it
/// reaches a writer.
pub trait Aead {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> CoreResult<Vec<u8>>;

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> CoreResult<Vec<u8>>;
}

/// AES-256-GCM [`Aead`].
///
/// Output layout: 12-byte random nonce, then ciphertext with the GCM tag
/// appended.
pub struct AesGcmAead {
    key: Zeroizing<[u8; Self::KEY_SIZE]>,
}

impl AesGcmAead {
    pub const KEY_SIZE: usize = 32;
    pub const NONCE_SIZE: usize = 12;

    pub fn new(key: &[u8]) -> CoreResult<Self> {
        let key: [u8; Self::KEY_SIZE] = key.try_into().map_err(|_| {
            CoreError::InvalidKey(format!(
                "AES-256-GCM key must be {} bytes, got {}",
                Self::KEY_SIZE,
                key.len()
            ))
        })?;

        Ok(Self {
            key: Zeroizing::new(key),
        })
    }
}

impl Aead for AesGcmAead {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> CoreResult<Vec<u8>> {
        let cipher = Aes256Gcm::new_from_slice(self.key.as_ref())
            .map_err(|e| CoreError::Encryption(e.to_string()))?;

        let mut nonce = [0u8; Self::NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce);

        let ciphertext = cipher
            .encrypt(
                Nonce::from_slice(&nonce),
                Payload {
                    msg: plaintext,
                    aad: associated_data,
                },
            )
            .map_err(|_| CoreError::Encryption("AES-GCM encryption failed".into()))?;

        let mut out = nonce.to_vec();
        out.extend(ciphertext);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> CoreResult<Vec<u8>> {
        if ciphertext.len() < Self::NONCE_SIZE {
            return Err(CoreError::Decryption("Ciphertext too short".into()));
        }
        let (nonce, ciphertext) = ciphertext.split_at(Self::NONCE_SIZE);

        let cipher = Aes256Gcm::new_from_slice(self.key.as_ref())
            .map_err(|e| CoreError::Decryption(e.to_string()))?;

        cipher
            .decrypt(
                Nonce::from_slice(nonce),
                Payload {
                    msg: ciphertext,
                    aad: associated_data,
                },
            )
            .map_err(|_| CoreError::Decryption("AES-GCM authentication failed".into()))
    }
}
