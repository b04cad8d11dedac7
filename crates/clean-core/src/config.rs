//! Project configuration collected before a creation run

/// Feature tag that enables the two-branch git history (`main`/`develop`).
/// The only tag the workflow itself consults; everything else is inert data
/// for template functions.
pub const FEATURE_GITFLOW: &str = "gitflow";

/// Configuration for one project-creation run.
///
/// Built once by the prompt layer (or from CLI flags) and immutable
/// afterwards. `name` is validated at the prompt boundary against
/// `^[a-z0-9-]+$`; this type does not re-validate.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Project name, also the directory created under the current directory
    pub name: String,

    /// Free-form description, may be empty
    pub description: String,

    /// Selected feature tags (e.g. "gitflow", "docker", "ci")
    pub features: Vec<String>,
}

impl ProjectConfig {
    /// Membership test for a feature tag
    pub fn has_feature(&self, tag: &str) -> bool {
        self.features.iter().any(|f| f == tag)
    }
}
