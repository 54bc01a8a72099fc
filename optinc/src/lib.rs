//! Compile YAML option schemas into C++ option-registration code.
//!
//! `optinc` reads a declarative description of a configuration set and
//! emits two artifacts to one output stream: a value-holder struct
//! derived from the runtime's common configuration type, and the static
//! wiring statements (descriptor arrays, handles, group manager,
//! registration and update functions) that plug the struct into the
//! option manager.
//!
//! The pipeline is a single linear pass: [`schema::load`] parses the
//! document into raw records, [`model::Schema::from_raw`] validates the
//! whole tree and builds the typed model, and
//! [`emit::generate_to_string`] renders the artifact text. Validation
//! failures abort the run before any text is produced.

pub mod emit;
pub mod error;
pub mod model;
pub mod schema;
pub mod validate;
