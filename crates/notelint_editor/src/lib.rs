//! # notelint_editor
//!
//! Edit-surviving decorations and navigation for NoteLint.
//!
//! This crate turns parsed alerts into live range markers that track
//! the document as the user types, and keeps markers and result-list
//! entries navigable in both directions:
//!
//! - The `DecorationStore` owns the live marker set and remaps it
//!   under edit deltas
//! - The binder converts byte-based alert spans to editor coordinates
//! - The `NavigationLink` cross-references markers and list entries by
//!   alert id
//! - The `Frontend` wires triggers, the check coordinator, and the
//!   event bus together

mod binder;
mod debounce;
mod decoration;
mod events;
mod frontend;
mod navigation;
mod store;

pub use binder::bind_alerts;
pub use debounce::{DEFAULT_DEBOUNCE_MS, spawn_debounced_check, spawn_debounced_check_after};
pub use decoration::{Decoration, EditDelta, StyleClass};
pub use events::{Event, EventBus, Subscription};
pub use frontend::Frontend;
pub use navigation::NavigationLink;
pub use store::DecorationStore;
