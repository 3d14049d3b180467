use super::Module;

/// ModuleGraph aggregate: the ordered module list with dependency edges wired
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    modules: Vec<Module>,
}

impl ModuleGraph {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn root(&self) -> Option<&Module> {
        self.modules.iter().find(|m| m.root)
    }

    /// Last module with the given name, matching how lookups resolve collisions
    pub fn find(&self, name: &str) -> Option<&Module> {
        self.modules.iter().rev().find(|m| m.name == name)
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn edge_count(&self) -> usize {
        self.modules.iter().map(|m| m.dependencies.len()).sum()
    }

    pub fn into_modules(self) -> Vec<Module> {
        self.modules
    }
}
