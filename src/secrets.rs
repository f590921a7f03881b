//! API key encryption at rest.
//!
//! The persisted API key is encrypted with AES-256-CBC under a locally
//! generated key. The key file sits beside the settings file with owner-only
//! permissions; ciphertext is base64(iv || ct).

use aes::Aes256;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use cbc::{Decryptor, Encryptor};
use cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::{rngs::OsRng, RngCore};
use std::path::Path;

use crate::error::{Result, TldwError};

type Aes256CbcEnc = Encryptor<Aes256>;
type Aes256CbcDec = Decryptor<Aes256>;

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;

/// Load the encryption key from `path`, generating and storing one if absent.
pub fn load_or_generate_key(path: &Path) -> Result<[u8; KEY_LEN]> {
    if path.exists() {
        let encoded = std::fs::read_to_string(path)?;
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| TldwError::Crypto(format!("Invalid key file: {}", e)))?;
        return bytes
            .try_into()
            .map_err(|_| TldwError::Crypto("Key file has wrong length".to_string()));
    }

    let mut key = [0u8; KEY_LEN];
    OsRng.fill_bytes(&mut key);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, STANDARD.encode(key))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    Ok(key)
}

/// Encrypt a plaintext string. Empty input passes through unchanged.
pub fn encrypt(plaintext: &str, key: &[u8; KEY_LEN]) -> Result<String> {
    if plaintext.is_empty() {
        return Ok(String::new());
    }

    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new(key.into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    let mut combined = Vec::with_capacity(IV_LEN + ciphertext.len());
    combined.extend_from_slice(&iv);
    combined.extend_from_slice(&ciphertext);

    Ok(STANDARD.encode(combined))
}

/// Decrypt a string produced by [`encrypt`]. Empty input passes through.
pub fn decrypt(encoded: &str, key: &[u8; KEY_LEN]) -> Result<String> {
    if encoded.is_empty() {
        return Ok(String::new());
    }

    let combined = STANDARD
        .decode(encoded)
        .map_err(|e| TldwError::Crypto(format!("Invalid ciphertext encoding: {}", e)))?;

    if combined.len() <= IV_LEN {
        return Err(TldwError::Crypto("Ciphertext too short".to_string()));
    }

    let (iv, ciphertext) = combined.split_at(IV_LEN);
    let iv: [u8; IV_LEN] = iv.try_into().expect("split_at guarantees length");

    let plaintext = Aes256CbcDec::new(key.into(), &iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|e| TldwError::Crypto(format!("Decryption failed: {}", e)))?;

    String::from_utf8(plaintext)
        .map_err(|e| TldwError::Crypto(format!("Decrypted key is not UTF-8: {}", e)))
}
