//! Envelope sealing with the partner client secret.
//!
//! The platform exchanges request and response payloads as AES-CBC ciphertext
//! keyed by the base64url-decoded client secret. A sealed payload is the
//! base64url (unpadded) encoding of:
//!
//! ```text
//! C0 || C1 .. Cn
//! ```
//!
//! where `C0` is a throwaway block that serves as the IV for the rest, and
//! `C1 .. Cn` is the PKCS#7-padded plaintext. Unsealing uses the first block
//! as IV and decrypts the remainder.

use aes::{Aes128, Aes192, Aes256};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use serde::Serialize;
use serde_json::Value;

use crate::client::PreparedRequest;
use crate::config::Config;
use crate::error::Error;

/// AES block size in bytes
const BLOCK_SIZE: usize = 16;

/// Body actually posted to the platform.
///
/// # JSON Example
///
/// ```json
/// {
///   "partner_client_id": "8c3a1b2e4f",
///   "data": "q2Vt0mB..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SealedRequest {
    pub partner_client_id: String,

    /// Sealed JSON envelope
    pub data: String,
}

/// AES-CBC cipher keyed by the client secret.
pub struct Cipher {
    key: Vec<u8>,
}

impl std::fmt::Debug for Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cipher")
            .field("key_bits", &(self.key.len() * 8))
            .finish()
    }
}

impl Cipher {
    /// Build a cipher from a base64url client secret.
    ///
    /// The secret must decode to 16, 24 or 32 bytes (AES-128/192/256).
    /// Trailing `=` padding is accepted but not required.
    pub fn new(secret: &str) -> Result<Self, Error> {
        let key = decode(secret)?;
        match key.len() {
            16 | 24 | 32 => Ok(Self { key }),
            n => Err(Error::Crypto(format!(
                "client secret must decode to 16, 24 or 32 bytes, got {n}"
            ))),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(&config.client_secret)
    }

    /// Seal `plaintext` under a fresh random IV.
    pub fn seal(&self, plaintext: &str) -> Result<String, Error> {
        let iv: [u8; BLOCK_SIZE] = rand::random();
        self.seal_with_iv(plaintext, &iv)
    }

    fn seal_with_iv(&self, plaintext: &str, iv: &[u8; BLOCK_SIZE]) -> Result<String, Error> {
        let mut buf = Vec::with_capacity(BLOCK_SIZE + plaintext.len());
        buf.extend_from_slice(&[b'0'; BLOCK_SIZE]);
        buf.extend_from_slice(plaintext.as_bytes());

        let sealed = match self.key.len() {
            16 => cbc::Encryptor::<Aes128>::new_from_slices(&self.key, iv)
                .map_err(|e| Error::Crypto(format!("Failed to create cipher: {e}")))?
                .encrypt_padded_vec_mut::<Pkcs7>(&buf),
            24 => cbc::Encryptor::<Aes192>::new_from_slices(&self.key, iv)
                .map_err(|e| Error::Crypto(format!("Failed to create cipher: {e}")))?
                .encrypt_padded_vec_mut::<Pkcs7>(&buf),
            _ => cbc::Encryptor::<Aes256>::new_from_slices(&self.key, iv)
                .map_err(|e| Error::Crypto(format!("Failed to create cipher: {e}")))?
                .encrypt_padded_vec_mut::<Pkcs7>(&buf),
        };

        Ok(URL_SAFE_NO_PAD.encode(sealed))
    }

    /// Recover the plaintext of a sealed payload.
    pub fn unseal(&self, sealed: &str) -> Result<String, Error> {
        let bytes = decode(sealed)?;
        if bytes.len() < 2 * BLOCK_SIZE || bytes.len() % BLOCK_SIZE != 0 {
            return Err(Error::Crypto(format!(
                "sealed payload has invalid length {}",
                bytes.len()
            )));
        }
        let (iv, body) = bytes.split_at(BLOCK_SIZE);

        let padding_error =
            |_| Error::Crypto("Decryption failed: invalid key or corrupted data".to_string());
        let plaintext = match self.key.len() {
            16 => cbc::Decryptor::<Aes128>::new_from_slices(&self.key, iv)
                .map_err(|e| Error::Crypto(format!("Failed to create cipher: {e}")))?
                .decrypt_padded_vec_mut::<Pkcs7>(body)
                .map_err(padding_error)?,
            24 => cbc::Decryptor::<Aes192>::new_from_slices(&self.key, iv)
                .map_err(|e| Error::Crypto(format!("Failed to create cipher: {e}")))?
                .decrypt_padded_vec_mut::<Pkcs7>(body)
                .map_err(padding_error)?,
            _ => cbc::Decryptor::<Aes256>::new_from_slices(&self.key, iv)
                .map_err(|e| Error::Crypto(format!("Failed to create cipher: {e}")))?
                .decrypt_padded_vec_mut::<Pkcs7>(body)
                .map_err(padding_error)?,
        };

        String::from_utf8(plaintext)
            .map_err(|e| Error::Crypto(format!("Invalid UTF-8 in decrypted data: {e}")))
    }

    /// Unseal the `response_data` field of a platform reply into JSON.
    pub fn unseal_response(&self, body: &Value) -> Result<Value, Error> {
        let sealed = body
            .get("response_data")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Crypto("reply has no response_data string".to_string()))?;

        Ok(serde_json::from_str(&self.unseal(sealed)?)?)
    }
}

impl PreparedRequest {
    /// Seal this call's envelope into the body posted to the platform.
    pub fn seal(&self, cipher: &Cipher) -> Result<SealedRequest, Error> {
        let envelope = serde_json::to_string(&self.envelope())?;

        Ok(SealedRequest {
            partner_client_id: self.partner_client_id.clone(),
            data: cipher.seal(&envelope)?,
        })
    }
}

fn decode(text: &str) -> Result<Vec<u8>, Error> {
    URL_SAFE_NO_PAD
        .decode(text.trim_end_matches('='))
        .map_err(|e| Error::Crypto(format!("Invalid base64url encoding: {e}")))
}
