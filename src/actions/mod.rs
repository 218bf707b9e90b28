//! Fix actions for findings.
//!
//! Rules attach a [`FixAction`] to findings they know how to correct. The
//! `fix` command applies them in discovery order.
//!
//! ## Architecture
//!
//! ```text
//! Finding (problem detected)
//!     ↓
//! FixAction (what to change, re-checked before acting)
//!     ↓
//! FixOutcome (applied / already fixed / conflict)
//! ```
//!
//! ## Actions
//!
//! - [`ScaffoldFile`]: write a template file if it does not exist
//! - [`JsonPatch`]: set a nested JSON key if it is absent
//! - [`InsertDirective`]: insert the route segment directive after the imports
//! - [`RenameExtension`]: rename `.ts`/`.js` to `.tsx`/`.jsx`

mod insert_directive;
pub mod insert_lines;
mod json_editor;
mod json_patch;
mod rename_extension;
mod scaffold_file;
mod traits;

pub use insert_directive::InsertDirective;
pub use json_editor::JsonEditor;
pub use json_patch::JsonPatch;
pub use rename_extension::RenameExtension;
pub use scaffold_file::ScaffoldFile;
pub use traits::{Apply, FixAction, FixOutcome, FixSummary, apply_fixes};
