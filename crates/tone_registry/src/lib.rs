//! tone_registry - Ordered, persisted catalog of rephrasing tones
//!
//! The registry keeps an ordered, duplicate-free list of [`rephrase_core::Tone`]
//! entries in a durable byte slot, seeding ten built-in defaults on first
//! access. Mutations are whole-value read-modify-write and never fail:
//! unknown tones are no-ops, out-of-range indices degrade to append, and
//! store failures are logged and swallowed.

mod registry;
mod store;

pub use registry::ToneRegistry;
pub use store::{FileToneStore, MemoryToneStore, ToneStore};
