#![allow(dead_code)]

use awj_db::Store;
use awj_seed::SeedConfig;
use tempfile::TempDir;

/// A config pointing at a fresh SQLite file in a temp directory.
pub struct TestCatalog {
    pub dir: TempDir,
    pub config: SeedConfig,
}

impl TestCatalog {
    pub async fn store(&self) -> Store {
        Store::open(&self.config.database_url)
            .await
            .expect("open test store")
    }
}

pub fn test_catalog() -> TestCatalog {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("projects.db");
    let config = SeedConfig::new(path.to_str().expect("utf-8 temp path"));
    TestCatalog { dir, config }
}
