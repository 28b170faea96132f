//! Per-node output of the tree walk

use serde::{Deserialize, Serialize};
use tabgen_types::CompletionStrategy;

/// Everything the script needs to know about one command tree node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionRecord {
    /// Shell identifier derived from the path from the root
    pub identifier: String,

    /// Completable words at this node. `None` for the root, whose options are
    /// emitted from the settings instead.
    pub visible_options: Option<Vec<String>>,

    /// How plain positionals of this node complete
    pub strategy: CompletionStrategy,

    /// Subcommand names under this node, sorted
    pub child_names: Vec<String>,

    /// Value completions of this node's options, one entry per option string
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_values: Vec<OptionValues>,
}

/// How the argument following one option string completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValues {
    pub option: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,

    pub strategy: CompletionStrategy,
}

impl DefinitionRecord {
    /// Returns true if this is the record of the root node
    pub fn is_root(&self) -> bool {
        self.visible_options.is_none()
    }

    /// Space-joined option list, as emitted into the script
    pub fn options_line(&self) -> Option<String> {
        self.visible_options.as_ref().map(|opts| opts.join(" "))
    }
}
