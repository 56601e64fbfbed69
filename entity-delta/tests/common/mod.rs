#![allow(dead_code)]

use std::fs;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};
use tempfile::TempDir;

use entity_delta::ProjectContext;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Throwaway project with a `.yo-rc.json` holding `generator` as its
/// generator section.
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new(generator: Value) -> Self {
        init_logging();
        let dir = TempDir::new().expect("temp dir");
        let document = json!({ "generator-jhipster": generator });
        fs::write(
            dir.path().join(".yo-rc.json"),
            serde_json::to_string_pretty(&document).expect("serialize config"),
        )
        .expect("write .yo-rc.json");
        Self { dir }
    }

    /// A SQL monolith on PostgreSQL with default naming.
    pub fn sql_monolith() -> Self {
        Self::new(json!({
            "baseName": "shop",
            "applicationType": "monolith",
            "packageName": "com.example.shop",
            "databaseType": "sql",
            "prodDatabaseType": "postgresql",
            "devDatabaseType": "h2Disk"
        }))
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_descriptor(&self, file_stem: &str, descriptor: &Value) {
        let dir = self.root().join(".jhipster");
        fs::create_dir_all(&dir).expect("create .jhipster");
        fs::write(
            dir.join(format!("{file_stem}.json")),
            serde_json::to_string_pretty(descriptor).expect("serialize descriptor"),
        )
        .expect("write descriptor");
    }

    pub fn write_raw_descriptor(&self, file_stem: &str, content: &str) {
        let dir = self.root().join(".jhipster");
        fs::create_dir_all(&dir).expect("create .jhipster");
        fs::write(dir.join(format!("{file_stem}.json")), content).expect("write descriptor");
    }

    pub fn context(&self) -> ProjectContext {
        ProjectContext::from_root(self.root().to_path_buf()).expect("project context")
    }
}

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap()
}

pub fn string_field(name: &str) -> Value {
    json!({ "fieldName": name, "fieldType": "String" })
}
