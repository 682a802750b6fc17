//! Ordered, persisted catalog of rephrasing tones.

use log::warn;
use rephrase_core::Tone;

use crate::store::{FileToneStore, ToneStore};

/// Ordered, duplicate-free catalog of tones backed by a [`ToneStore`].
///
/// Every mutation loads the full list, computes the new list, and writes it
/// back whole. There is no locking: concurrent writers racing on the same
/// store end up last-write-wins.
pub struct ToneRegistry {
    store: Box<dyn ToneStore>,
}

impl ToneRegistry {
    pub fn new(store: impl ToneStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Current tones in display order, seeding the built-in defaults when
    /// nothing usable is stored yet.
    pub fn list(&self) -> Vec<Tone> {
        if let Some(tones) = self.load() {
            return tones;
        }
        let defaults = Tone::defaults();
        self.save(&defaults);
        defaults
    }

    /// Position of the tone with the same name, if present.
    pub fn index_of(&self, tone: &Tone) -> Option<usize> {
        self.list().iter().position(|entry| entry == tone)
    }

    /// Remove the tone with the same name. Absent tones are a no-op.
    pub fn remove(&self, tone: &Tone) {
        let mut tones = self.list();
        if let Some(index) = tones.iter().position(|entry| entry == tone) {
            tones.remove(index);
            self.save(&tones);
        }
    }

    /// Add `tone` at the end. A tone with the same name moves to the end,
    /// carrying the new field values.
    pub fn append(&self, tone: Tone) {
        let mut tones = self.list();
        tones.retain(|entry| entry != &tone);
        tones.push(tone);
        self.save(&tones);
    }

    /// Insert `tone` at `index`, moving it there when a tone with the same
    /// name is already present.
    ///
    /// When the tone moves from `old` to a target at or past `old`, the
    /// target is decremented to compensate for the vacated slot, except at
    /// index 0 which always lands first. Targets past the end append.
    pub fn insert(&self, tone: Tone, index: usize) {
        let mut tones = self.list();
        let mut index = index;
        if let Some(old) = tones.iter().position(|entry| entry == &tone) {
            tones.remove(old);
            if index >= old && index != 0 {
                index -= 1;
            }
        }
        if index > tones.len() {
            index = tones.len();
        }
        tones.insert(index, tone);
        self.save(&tones);
    }

    /// Drop the persisted list; the next [`list`](Self::list) re-seeds the
    /// defaults.
    pub fn reset(&self) {
        if let Err(err) = self.store.delete() {
            warn!("Failed to clear persisted tones: {}", err);
        }
    }

    fn load(&self) -> Option<Vec<Tone>> {
        let bytes = match self.store.read() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(err) => {
                warn!("Failed to read persisted tones: {}", err);
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(tones) => Some(tones),
            Err(err) => {
                // Undecodable data is treated like an empty slot.
                warn!("Failed to decode persisted tones: {}", err);
                None
            }
        }
    }

    fn save(&self, tones: &[Tone]) {
        let bytes = match serde_json::to_vec(tones) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("Failed to encode tones: {}", err);
                return;
            }
        };
        // Persistence is best-effort; the caller still gets the new list.
        if let Err(err) = self.store.write(&bytes) {
            warn!("Failed to persist tones: {}", err);
        }
    }
}

impl Default for ToneRegistry {
    fn default() -> Self {
        Self::new(FileToneStore::in_data_dir())
    }
}
