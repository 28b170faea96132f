//! Domain models for tabgen

mod command;
mod naming;
mod program;
mod record;
mod settings;

pub use command::{CommandNode, OptionalArgument, PositionalSpec};
pub use naming::{child_identifier, sanitize};
pub use program::Program;
pub use record::{DefinitionRecord, OptionValues};
pub use settings::Settings;
