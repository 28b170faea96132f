//! Command tree traversal
//!
//! Visits every visible node of a command tree and produces one
//! [`DefinitionRecord`] per node: the node's own record first, followed by the
//! records of its children in name order.

use std::collections::{BTreeSet, HashSet};

use tabgen_core::{
    child_identifier, CommandNode, DefinitionRecord, OptionValues, Settings, TabgenError,
};
use tabgen_types::{CompletionStrategy, PathHint};
use tracing::debug;

use crate::classifier::ClassifierRules;

/// Walks a command tree and produces definition records
pub struct TreeWalker<'a> {
    settings: &'a Settings,
    rules: ClassifierRules,
}

impl<'a> TreeWalker<'a> {
    /// Create a walker using the given settings for option filtering and classification
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            rules: ClassifierRules::from_settings(settings),
        }
    }

    /// Walk the tree below `root`, whose identifier is `root_prefix`
    pub fn walk(
        &self,
        root: &CommandNode,
        root_prefix: &str,
    ) -> Result<Vec<DefinitionRecord>, TabgenError> {
        let mut records = Vec::with_capacity(root.node_count());
        let mut identifiers = HashSet::new();
        self.visit(root, root_prefix, true, &mut records, &mut identifiers)?;
        Ok(records)
    }

    fn visit(
        &self,
        node: &CommandNode,
        prefix: &str,
        is_root: bool,
        records: &mut Vec<DefinitionRecord>,
        identifiers: &mut HashSet<String>,
    ) -> Result<(), TabgenError> {
        if !identifiers.insert(prefix.to_string()) {
            return Err(TabgenError::MalformedTree(format!(
                "identifier '{}' is produced by more than one command",
                prefix
            )));
        }
        check_unique_siblings(node)?;

        let children = self.children(node)?;
        let child_names: Vec<String> = children.iter().map(|c| c.name.clone()).collect();

        let visible_options = if is_root {
            None
        } else {
            Some(self.visible_options(node)?)
        };

        let plain: Vec<&str> = node.plain_positionals().map(|p| p.dest.as_str()).collect();
        let hints: Vec<PathHint> = node.plain_positionals().filter_map(|p| p.complete).collect();
        let strategy = self.rules.resolve(plain.iter().copied(), &hints);

        debug!(
            "command: {} (children: {:?}, positionals: {:?}, strategy: {})",
            prefix, child_names, plain, strategy
        );

        records.push(DefinitionRecord {
            identifier: prefix.to_string(),
            visible_options,
            strategy,
            child_names,
            option_values: option_values(node),
        });

        for child in children {
            let child_prefix = child_identifier(prefix, &child.name);
            self.visit(child, &child_prefix, false, records, identifiers)?;
        }

        Ok(())
    }

    /// Completable words at a non-root node.
    ///
    /// Choice strings come first in declaration order (repeats kept), then
    /// undispatched subcommand names, then option strings. Global options are
    /// removed from the whole list.
    fn visible_options(&self, node: &CommandNode) -> Result<Vec<String>, TabgenError> {
        let mut words: Vec<&str> = Vec::new();

        for positional in node.dispatch_positionals() {
            for choice in &positional.choices {
                if !resolve_choice(node, choice)?.hidden {
                    words.push(choice.as_str());
                }
            }
        }
        words.extend(node.undispatched_subcommands());
        words.extend(node.option_strings());

        Ok(words
            .into_iter()
            .filter(|w| !self.settings.is_global(w))
            .map(str::to_string)
            .collect())
    }

    /// Visible child commands of a node, deduplicated and sorted by name
    fn children<'n>(&self, node: &'n CommandNode) -> Result<Vec<&'n CommandNode>, TabgenError> {
        let mut names: BTreeSet<&str> = BTreeSet::new();
        for positional in node.dispatch_positionals() {
            for choice in &positional.choices {
                let child = resolve_choice(node, choice)?;
                if child.hidden {
                    debug!("skip hidden subcommand: {}", choice);
                    continue;
                }
                names.insert(choice.as_str());
            }
        }
        names.extend(node.undispatched_subcommands());

        names
            .into_iter()
            .map(|name| resolve_choice(node, name))
            .collect()
    }
}

/// Value completions of the visible options that have any, in declaration order
fn option_values(node: &CommandNode) -> Vec<OptionValues> {
    node.options
        .iter()
        .filter(|o| !o.hidden && o.completes_value())
        .flat_map(|o| {
            o.option_strings.iter().map(move |option| OptionValues {
                option: option.clone(),
                choices: o.choices.clone(),
                strategy: o.complete.map(CompletionStrategy::from).unwrap_or_default(),
            })
        })
        .collect()
}

fn resolve_choice<'n>(node: &'n CommandNode, choice: &str) -> Result<&'n CommandNode, TabgenError> {
    node.subcommand(choice).ok_or_else(|| {
        TabgenError::MalformedTree(format!(
            "choice '{}' of command '{}' has no matching subcommand",
            choice, node.name
        ))
    })
}

fn check_unique_siblings(node: &CommandNode) -> Result<(), TabgenError> {
    let mut names = HashSet::new();
    for child in &node.subcommands {
        if !names.insert(child.name.as_str()) {
            return Err(TabgenError::MalformedTree(format!(
                "command '{}' has duplicate subcommand '{}'",
                node.name, child.name
            )));
        }
    }
    Ok(())
}
