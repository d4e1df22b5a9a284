use std::io;

use sealbox_proto::{encode_message, EncryptedKeyset, Keyset};

use crate::error::CoreResult;

/// Destination for serialized keysets.
///
/// The handle's write path decides which method is invoked: cleartext
/// keysets go through [`KeysetWriter::write`], master-key-encrypted keysets
/// through [`KeysetWriter::write_encrypted`]. Implementations may refuse
/// either path.
pub trait KeysetWriter {
    /// Write a cleartext keyset.
    fn write(&mut self, keyset: &Keyset) -> CoreResult<()>;

    /// Write an encrypted keyset.
    fn write_encrypted(&mut self, keyset: &EncryptedKeyset) -> CoreResult<()>;
}

/// Writes the binary encoding of a keyset to an underlying [`io::Write`].
pub struct BinaryWriter<W: io::Write> {
    w: W,
}

impl<W: io::Write> BinaryWriter<W> {
    pub fn new(w: W) -> Self {
        Self { w }
    }

    /// Consume the writer, returning the underlying destination.
    pub fn into_inner(self) -> W {
        self.w
    }
}

impl<W: io::Write> KeysetWriter for BinaryWriter<W> {
    fn write(&mut self, keyset: &Keyset) -> CoreResult<()> {
        let bytes = encode_message(keyset)?;
        self.w.write_all(&bytes)?;
        Ok(())
    }

    fn write_encrypted(&mut self, keyset: &EncryptedKeyset) -> CoreResult<()> {
        let bytes = encode_message(keyset)?;
        self.w.write_all(&bytes)?;
        Ok(())
    }
}
