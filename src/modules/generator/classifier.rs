//! Positional argument classification
//!
//! Deciding whether a positional completes as a path is a name-based heuristic:
//! most positionals are paths or project-tracked files, and a short explicit
//! denylist catches the ones that are not.

use tabgen_core::Settings;
use tabgen_types::{CompletionStrategy, PathHint};

/// Name-based rules for classifying plain positionals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierRules {
    denylist: Vec<String>,
    project_markers: Vec<String>,
}

impl ClassifierRules {
    pub fn new<I, J, S, T>(denylist: I, project_markers: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            denylist: denylist.into_iter().map(Into::into).collect(),
            project_markers: project_markers.into_iter().map(Into::into).collect(),
        }
    }

    /// Rules taken from generator settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.denylist.iter().cloned(),
            settings.project_markers.iter().cloned(),
        )
    }

    /// Returns true if `name` contains any denylisted fragment (case-sensitive)
    pub fn is_denied(&self, name: &str) -> bool {
        self.denylist.iter().any(|d| name.contains(d.as_str()))
    }

    /// Returns true if `name` is one of the project marker names
    pub fn is_project_marker(&self, name: &str) -> bool {
        self.project_markers.iter().any(|m| m == name)
    }

    /// Classify a node by the destination names of its plain positionals
    pub fn classify<'a, I>(&self, names: I) -> CompletionStrategy
    where
        I: IntoIterator<Item = &'a str>,
    {
        let names: Vec<&str> = names.into_iter().collect();

        if names.is_empty() || names.iter().all(|n| self.is_denied(n)) {
            return CompletionStrategy::None;
        }

        if names.iter().any(|n| self.is_project_marker(n)) {
            CompletionStrategy::ProjectFile
        } else {
            CompletionStrategy::GenericPath
        }
    }

    /// Classify, taking explicit path hints into account.
    ///
    /// The first required hint wins outright. Optional hints only fill in when
    /// the name heuristic yields [`CompletionStrategy::None`].
    pub fn resolve<'a, I>(&self, names: I, hints: &[PathHint]) -> CompletionStrategy
    where
        I: IntoIterator<Item = &'a str>,
    {
        if let Some(hint) = hints.iter().find(|h| h.is_required()) {
            return CompletionStrategy::from(*hint);
        }

        match self.classify(names) {
            CompletionStrategy::None => hints
                .first()
                .map(|hint| CompletionStrategy::from(*hint))
                .unwrap_or(CompletionStrategy::None),
            strategy => strategy,
        }
    }
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabgen_types::PathKind;

    #[test]
    fn test_no_names_is_none() {
        let rules = ClassifierRules::default();
        assert_eq!(rules.classify(Vec::<&str>::new()), CompletionStrategy::None);
    }

    #[test]
    fn test_denied_names_are_none() {
        let rules = ClassifierRules::default();
        assert_eq!(rules.classify(["url"]), CompletionStrategy::None);
        assert_eq!(rules.classify(["rev", "name"]), CompletionStrategy::None);
        assert_eq!(rules.classify(["remote_url"]), CompletionStrategy::None);
    }

    #[test]
    fn test_denylist_is_case_sensitive() {
        let rules = ClassifierRules::default();
        assert_eq!(rules.classify(["URL"]), CompletionStrategy::GenericPath);
    }

    #[test]
    fn test_project_markers() {
        let rules = ClassifierRules::default();
        assert_eq!(rules.classify(["target"]), CompletionStrategy::ProjectFile);
        assert_eq!(
            rules.classify(["url", "targets", "path"]),
            CompletionStrategy::ProjectFile
        );
    }

    #[test]
    fn test_mixed_names_fall_back_to_paths() {
        let rules = ClassifierRules::default();
        assert_eq!(rules.classify(["path"]), CompletionStrategy::GenericPath);
        assert_eq!(rules.classify(["url", "out"]), CompletionStrategy::GenericPath);
    }

    #[test]
    fn test_targets_always_project_file() {
        let rules = ClassifierRules::default();
        let others = ["url", "rev", "args", "path", "name", "value", "out", "command"];
        for other in others {
            assert_eq!(
                rules.classify(["targets", other]),
                CompletionStrategy::ProjectFile
            );
            assert_eq!(
                rules.classify([other, "targets"]),
                CompletionStrategy::ProjectFile
            );
        }
    }

    #[test]
    fn test_custom_rules() {
        let rules = ClassifierRules::new(["id"], ["manifest"]);
        assert_eq!(rules.classify(["task_id"]), CompletionStrategy::None);
        assert_eq!(rules.classify(["manifest"]), CompletionStrategy::ProjectFile);
        assert_eq!(rules.classify(["url"]), CompletionStrategy::GenericPath);
    }

    #[test]
    fn test_required_hint_overrides_heuristic() {
        let rules = ClassifierRules::default();
        let hints = [PathHint::required(PathKind::Directory)];
        assert_eq!(rules.resolve(["targets"], &hints), CompletionStrategy::Directory);
    }

    #[test]
    fn test_optional_hint_only_fills_in() {
        let rules = ClassifierRules::default();
        let hints = [PathHint::optional(PathKind::Directory)];
        assert_eq!(rules.resolve(["url"], &hints), CompletionStrategy::Directory);
        assert_eq!(rules.resolve(["path"], &hints), CompletionStrategy::GenericPath);
        assert_eq!(rules.resolve(["url"], &[]), CompletionStrategy::None);
    }
}
