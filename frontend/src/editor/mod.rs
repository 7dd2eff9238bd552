//! Generic section-editor model.
//!
//! Every content entity — the thirteen scalar sections, the four child-item
//! kinds, properties and social links — shares one edit lifecycle: open a
//! draft (existing values or a default template), mutate fields by shallow
//! merge, submit the whole draft to the kind's endpoint, and close on
//! success. Instead of a hand-written state/handler pair per kind, the
//! dashboard instantiates [`draft::Draft`] per kind and routes saves and
//! deletes through the [`config::EditorId`] table.

pub mod config;
pub mod draft;
pub mod inputs;

pub use config::EditorId;
pub use draft::{Draft, DraftAction, Mode};
