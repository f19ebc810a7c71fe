//! Tool registry: an unordered collection of discovered tools keyed by name,
//! with insert-or-replace (override) semantics.

use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ToolEntry {
    pub name: String,
    pub path: String,
    pub schema: Value,
}

/// Registry of discovered tools. Linear lookup is fine at the scale of a
/// handful to a few dozen tools; later scans override earlier ones by name.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { entries: Vec::with_capacity(16) }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, name: &str) -> Option<&ToolEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Insert a tool, replacing any existing entry with the same name.
    pub fn add(&mut self, name: String, path: String, schema: Value) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == name) {
            existing.path = path;
            existing.schema = schema;
        } else {
            self.entries.push(ToolEntry { name, path, schema });
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_then_lookup() {
        let mut reg = ToolRegistry::new();
        reg.add("bash".into(), "/tools/bash-tool".into(), json!({}));
        assert_eq!(reg.lookup("bash").unwrap().path, "/tools/bash-tool");
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn add_overrides_existing_by_name() {
        let mut reg = ToolRegistry::new();
        reg.add("a".into(), "/sys/a-tool".into(), json!({"v": 1}));
        reg.add("a".into(), "/user/a-tool".into(), json!({"v": 2}));
        assert_eq!(reg.len(), 1);
        let entry = reg.lookup("a").unwrap();
        assert_eq!(entry.path, "/user/a-tool");
        assert_eq!(entry.schema, json!({"v": 2}));
    }

    #[test]
    fn clear_empties_but_keeps_usable() {
        let mut reg = ToolRegistry::new();
        reg.add("a".into(), "/a-tool".into(), json!({}));
        reg.clear();
        assert!(reg.is_empty());
        assert!(reg.lookup("a").is_none());
    }
}
