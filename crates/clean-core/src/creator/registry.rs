//! Registry of available creators, keyed by (kind, stack)

use super::{go_api, go_mcp, nestjs_api, nestjs_mcp, Creator};

/// Closed, enumerable set of scaffolding archetypes.
///
/// Populated once in `new()` with a fixed, hard-coded list and read-only
/// afterwards; enumeration order is registration order. Constructed as an
/// explicit value handed to the CLI rather than process-wide state, so it
/// stays independently testable.
#[derive(Debug)]
pub struct CreatorRegistry {
    creators: Vec<Creator>,
}

impl CreatorRegistry {
    /// Build the registry with every built-in archetype, in fixed order.
    pub fn new() -> Self {
        let mut registry = Self {
            creators: Vec::new(),
        };

        registry.register(go_mcp::creator());
        registry.register(nestjs_mcp::creator());
        registry.register(go_api::creator());
        registry.register(nestjs_api::creator());

        registry
    }

    /// Insert a creator, replacing any prior entry with the same composite
    /// key in place (last registration wins, position of the first kept).
    fn register(&mut self, creator: Creator) {
        match self.creators.iter_mut().find(|c| c.key() == creator.key()) {
            Some(existing) => *existing = creator,
            None => self.creators.push(creator),
        }
    }

    /// Exact-match lookup on the composite key. A miss is an expected,
    /// recoverable condition, not an error.
    pub fn get(&self, kind: &str, stack: &str) -> Option<&Creator> {
        self.creators
            .iter()
            .find(|c| c.kind == kind && c.stack == stack)
    }

    /// Every creator of the given kind, in registration order. Drives the
    /// secondary "choose a stack" prompt.
    pub fn get_by_kind(&self, kind: &str) -> Vec<&Creator> {
        self.creators.iter().filter(|c| c.kind == kind).collect()
    }

    /// Every registered creator, in registration order.
    pub fn get_all(&self) -> &[Creator] {
        &self.creators
    }

    /// Distinct kinds, in first-registration order. Drives the primary
    /// "what do you want to create" prompt.
    pub fn kinds(&self) -> Vec<&'static str> {
        let mut kinds = Vec::new();
        for creator in &self.creators {
            if !kinds.contains(&creator.kind) {
                kinds.push(creator.kind);
            }
        }
        kinds
    }
}

impl Default for CreatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creator::TemplateSet;

    #[test]
    fn test_registers_all_archetypes_with_unique_keys() {
        let registry = CreatorRegistry::new();
        let all = registry.get_all();

        assert_eq!(all.len(), 4);

        let mut keys: Vec<String> = all.iter().map(|c| c.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn test_get_returns_matching_creator() {
        let registry = CreatorRegistry::new();

        let creator = registry.get("mcp", "go").expect("go mcp registered");
        assert_eq!(creator.kind, "mcp");
        assert_eq!(creator.stack, "go");
        assert_eq!(creator.install_command, "go mod tidy");

        let creator = registry
            .get("microservice", "nestjs")
            .expect("nestjs microservice registered");
        assert_eq!(creator.next_steps, "npm run start:dev");
    }

    #[test]
    fn test_get_miss_is_none() {
        let registry = CreatorRegistry::new();
        assert!(registry.get("unknown", "unknown").is_none());
        assert!(registry.get("mcp", "unknown").is_none());
    }

    #[test]
    fn test_get_by_kind_filters_in_registration_order() {
        let registry = CreatorRegistry::new();

        let microservices = registry.get_by_kind("microservice");
        assert_eq!(microservices.len(), 2);
        assert_eq!(microservices[0].stack, "go");
        assert_eq!(microservices[1].stack, "nestjs");

        let mcps = registry.get_by_kind("mcp");
        assert_eq!(mcps.len(), 2);
        assert_eq!(mcps[0].stack, "go");
        assert_eq!(mcps[1].stack, "nestjs");

        assert!(registry.get_by_kind("unknown").is_empty());
    }

    #[test]
    fn test_kinds_in_first_registration_order() {
        let registry = CreatorRegistry::new();
        assert_eq!(registry.kinds(), vec!["mcp", "microservice"]);
    }

    #[test]
    fn test_duplicate_registration_last_wins_in_place() {
        fn empty_templates(_: &crate::ProjectConfig) -> TemplateSet {
            TemplateSet::new()
        }

        let mut registry = CreatorRegistry::new();
        let position = registry
            .get_all()
            .iter()
            .position(|c| c.key() == "mcp:go")
            .unwrap();

        registry.register(Creator {
            kind: "mcp",
            stack: "go",
            install_command: "go mod download",
            next_steps: "make run",
            templates: empty_templates,
        });

        assert_eq!(registry.get_all().len(), 4);
        let replaced = &registry.get_all()[position];
        assert_eq!(replaced.install_command, "go mod download");
        assert_eq!(replaced.next_steps, "make run");
    }
}
