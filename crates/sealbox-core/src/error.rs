use thiserror::Error;

use sealbox_proto::ProtoError;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Decryption failed: {0}")]
    Decryption(String),

    #[error("Keyset encoding failed: {0}")]
    Encoding(#[from] ProtoError),

    #[error("Keyset write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Keyset contains secret key material")]
    ContainsSecrets,
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Errors from the named-curve registry.
#[derive(Error, Debug)]
pub enum CurveError {
    #[error("Unsupported curve: {0}")]
    Unsupported(String),
}

/// Errors from private-key extraction.
///
/// Every failure is terminal: extraction is a pure decode of caller-supplied
/// structure, so nothing here is worth retrying.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("extract private key: keyset handle is required")]
    InvalidArgument,

    #[error("extract private key: retrieving private key failed: {0}")]
    ExtractionFailed(#[source] CoreError),

    #[error("extract private key: invalid private key")]
    InvalidPrivateKey,

    #[error("extract private key: unsupported private key type: {0}")]
    UnsupportedKeyType(String),

    #[error("extract private key: invalid key in keyset")]
    InvalidKeysetEntry,

    #[error("extract private key: invalid key: {0}")]
    UnsupportedCurve(#[from] CurveError),
}
