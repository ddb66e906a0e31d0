//! # todo-core
//!
//! Task list model, storage format, and error types for `todo`.
//!
//! This crate holds everything with real invariants:
//! - [`Item`]: one task and its pending/completed lifecycle
//! - [`TodoList`]: the ordered collection and its position-based operations
//! - JSON persistence of a whole list ([`TodoList::save`], [`TodoList::load`])
//! - The error taxonomy shared with drivers ([`TodoError`])
//! - Serializable response values that drivers print
//!
//! Positions are ephemeral: an item's position is only valid until the next
//! mutating call. Callers must re-derive positions after `delete` or `clear`.
//!
//! The crate performs no terminal I/O. Rendering returns `String` values and
//! the only file access happens in [`TodoList::save`] and [`TodoList::load`].

pub mod errors;
pub mod item;
pub mod list;
pub mod responses;
pub mod store;

pub use errors::TodoError;
pub use item::Item;
pub use list::TodoList;
