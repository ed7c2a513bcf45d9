// ## 📂 File: `src/crypto/modes.rs`

//! crypto/modes.rs
//! Modes of operation over the RustCrypto block ciphers, plus the two native
//! stream ciphers.
//!
//! Design notes:
//! - Every helper encrypts `buf` in place; the caller fills it with the plaintext.
//! - The block cipher is always keyed on its own (`new_from_slice`) and then handed
//!   to the mode, so variable-length keys (Blowfish) reach the primitive unchanged.
//! - ECB and CBC run without padding: a partial trailing block is an error.

use cipher::{
    block_padding::NoPadding,
    typenum::{IsLess, Le, NonZero, U256},
    AsyncStreamCipher, Block, BlockCipher, BlockEncrypt, BlockEncryptMut,
    InnerIvInit, KeyInit, KeyIvInit, StreamCipher, StreamCipherCore, StreamCipherCoreWrapper,
    StreamCipherSeek,
};

use crate::crypto::registry::CipherInfo;
use crate::crypto::types::{CryptoError, CHACHA20_IV_LEN, NONCE_LEN_12};

/// Key a primitive from a slice.
#[inline]
pub fn keyed<C: KeyInit>(info: &CipherInfo, key: &[u8]) -> Result<C, CryptoError> {
    C::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLen {
        cipher: info.name,
        expected: info.key_len(),
        actual: key.len(),
    })
}

/// Key the inner block cipher, then bind it to a mode with `iv`.
#[inline]
fn init_mode<M>(info: &CipherInfo, key: &[u8], iv: &[u8]) -> Result<M, CryptoError>
where
    M: InnerIvInit,
    M::Inner: KeyInit,
{
    let inner = keyed::<M::Inner>(info, key)?;
    M::inner_iv_slice_init(inner, iv).map_err(|_| CryptoError::InvalidIvLen {
        cipher: info.name,
        expected: info.iv_len(),
        actual: iv.len(),
    })
}

#[inline]
fn require_full_blocks(info: &CipherInfo, len: usize, block_size: usize) -> Result<(), CryptoError> {
    if len % block_size != 0 {
        return Err(CryptoError::NotBlockAligned {
            cipher: info.name,
            len,
            block_size,
        });
    }
    Ok(())
}

fn exhausted(info: &CipherInfo) -> CryptoError {
    CryptoError::Failure(format!("{}: keystream exhausted", info.name))
}

/// Electronic codebook, no padding.
pub fn ecb<C>(info: &CipherInfo, key: &[u8], buf: &mut [u8]) -> Result<(), CryptoError>
where
    C: BlockEncrypt + KeyInit,
{
    let block_size = C::block_size();
    require_full_blocks(info, buf.len(), block_size)?;

    let cipher = keyed::<C>(info, key)?;
    for chunk in buf.chunks_exact_mut(block_size) {
        cipher.encrypt_block(Block::<C>::from_mut_slice(chunk));
    }
    Ok(())
}

/// Cipher block chaining, no padding.
pub fn cbc<C>(info: &CipherInfo, key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<(), CryptoError>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    let block_size = C::block_size();
    require_full_blocks(info, buf.len(), block_size)?;

    let mode = init_mode::<cbc::Encryptor<C>>(info, key, iv)?;
    let msg_len = buf.len();
    mode.encrypt_padded_mut::<NoPadding>(buf, msg_len)
        .map_err(|_| CryptoError::NotBlockAligned { cipher: info.name, len: msg_len, block_size })?;
    Ok(())
}

/// Self-synchronising feedback modes (CFB, CFB8). Any length.
pub fn feedback<M>(info: &CipherInfo, key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<(), CryptoError>
where
    M: InnerIvInit + AsyncStreamCipher + BlockEncryptMut,
    M::Inner: KeyInit,
{
    let mode = init_mode::<M>(info, key, iv)?;
    mode.encrypt(buf);
    Ok(())
}

/// Synchronous stream modes built from a block cipher core (CTR, OFB). Any length.
pub fn stream_core<K>(info: &CipherInfo, key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<(), CryptoError>
where
    K: InnerIvInit + StreamCipherCore,
    K::Inner: KeyInit,
    K::BlockSize: IsLess<U256>,
    Le<K::BlockSize, U256>: NonZero,
{
    let core = init_mode::<K>(info, key, iv)?;
    let mut cipher = StreamCipherCoreWrapper::from_core(core);
    cipher.try_apply_keystream(buf).map_err(|_| exhausted(info))
}

/// Keyed stream cipher without an IV (RC4).
pub fn keyed_stream<S>(info: &CipherInfo, key: &[u8], buf: &mut [u8]) -> Result<(), CryptoError>
where
    S: KeyInit + StreamCipher,
{
    let mut cipher = keyed::<S>(info, key)?;
    cipher.try_apply_keystream(buf).map_err(|_| exhausted(info))
}

/// ChaCha20 with the OpenSSL IV layout: `counter (u32 LE) || nonce (12 bytes)`.
pub fn chacha20(info: &CipherInfo, key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<(), CryptoError> {
    if iv.len() != CHACHA20_IV_LEN {
        return Err(CryptoError::InvalidIvLen {
            cipher: info.name,
            expected: CHACHA20_IV_LEN,
            actual: iv.len(),
        });
    }

    let (counter, nonce) = iv.split_at(CHACHA20_IV_LEN - NONCE_LEN_12);
    let counter = u32::from_le_bytes([counter[0], counter[1], counter[2], counter[3]]);

    let mut cipher = chacha20::ChaCha20::new_from_slices(key, nonce).map_err(|_| CryptoError::InvalidKeyLen {
        cipher: info.name,
        expected: info.key_len(),
        actual: key.len(),
    })?;
    // 64-byte ChaCha blocks
    cipher.try_seek(u64::from(counter) * 64).map_err(|_| exhausted(info))?;
    cipher.try_apply_keystream(buf).map_err(|_| exhausted(info))
}
