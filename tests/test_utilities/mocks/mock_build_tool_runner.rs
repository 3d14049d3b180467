use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};
use mvn_sbom::prelude::*;

/// Mock BuildToolRunner returning canned report text
#[derive(Clone)]
pub struct MockBuildToolRunner {
    pub list: String,
    pub tree: String,
    pub fail_tree: bool,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockBuildToolRunner {
    pub fn new(list: &str, tree: &str) -> Self {
        Self {
            list: list.to_string(),
            tree: tree.to_string(),
            fail_tree: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_tree_failure(mut self) -> Self {
        self.fail_tree = true;
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BuildToolRunner for MockBuildToolRunner {
    async fn dependency_list(&self, _project_path: &Path) -> Result<String> {
        self.calls.lock().unwrap().push("dependency:list".to_string());
        Ok(self.list.clone())
    }

    async fn dependency_tree(&self, _project_path: &Path) -> Result<String> {
        self.calls.lock().unwrap().push("dependency:tree".to_string());
        if self.fail_tree {
            anyhow::bail!("Mock dependency:tree failure");
        }
        Ok(self.tree.clone())
    }

    fn tool_name(&self) -> &str {
        "mock-mvn"
    }
}
