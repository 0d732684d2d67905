//! Memoizing wrapper around any [`Transcoder`].
//!
//! Legacy archives repeat the same headings and labels over and over; the
//! cache keeps the converted form of every distinct input. Failed encodes are
//! not stored. Two threads missing on the same input may both convert it;
//! the later insert wins with an identical value.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use log::trace;

use crate::iransystem::converter::Transcoder;
use crate::iransystem::types::error::{IranSystemError, Result};

pub struct CachedTranscoder<T: Transcoder> {
    inner: T,
    encoded: Mutex<HashMap<String, Vec<u8>>>,
    decoded: Mutex<HashMap<Vec<u8>, String>>,
}

impl<T: Transcoder> CachedTranscoder<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            encoded: Mutex::new(HashMap::new()),
            decoded: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        if let Some(hit) = lock(&self.encoded)?.get(text) {
            trace!("Encode cache hit for {:?}", text);
            return Ok(hit.clone());
        }
        let data = self.inner.encode(text)?;
        lock(&self.encoded)?.insert(text.to_string(), data.clone());
        Ok(data)
    }

    pub fn decode(&self, data: &[u8]) -> Result<String> {
        if let Some(hit) = lock(&self.decoded)?.get(data) {
            trace!("Decode cache hit for {} bytes", data.len());
            return Ok(hit.clone());
        }
        let text = self.inner.decode(data);
        lock(&self.decoded)?.insert(data.to_vec(), text.clone());
        Ok(text)
    }

    /// Number of cached (encode, decode) entries.
    pub fn entries(&self) -> Result<(usize, usize)> {
        let encoded = lock(&self.encoded)?.len();
        let decoded = lock(&self.decoded)?.len();
        Ok((encoded, decoded))
    }

    pub fn clear(&self) -> Result<()> {
        lock(&self.encoded)?.clear();
        lock(&self.decoded)?.clear();
        Ok(())
    }
}

/// The guard is only ever held for a map lookup or insert, never across a
/// call into the wrapped transcoder.
fn lock<K, V>(map: &Mutex<HashMap<K, V>>) -> Result<MutexGuard<'_, HashMap<K, V>>> {
    map.lock().map_err(|_| IranSystemError::LockPoisoned)
}
