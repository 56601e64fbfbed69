//! Project-wide settings resolved from the configuration store.
//!
//! This is the configuration phase of a run: every key gets its documented
//! default, invocation options are folded in, and the project is checked for
//! conditions that make entity generation impossible.

use serde::Serialize;
use serde_json::Value;

use crate::config::ConfigStore;
use crate::errors::{GenerationError, GenerationResult};
use crate::naming::{case, DatabaseType};

/// Options given to the generator invocation, next to the stored configuration.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// `--db`: database used when the configuration does not name one.
    pub db: Option<String>,
    pub skip_server: bool,
    pub skip_client: bool,
    pub skip_db_changelog: bool,
    pub use_yarn: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    pub base_name: String,
    pub capitalized_base_name: String,
    pub package_name: Option<String>,
    pub application_type: String,
    pub authentication_type: Option<String>,
    pub database_type: Option<DatabaseType>,
    pub prod_database_type: Option<DatabaseType>,
    pub dev_database_type: Option<DatabaseType>,
    pub search_engine: Option<Value>,
    pub cache_provider: String,
    pub enable_hibernate_cache: bool,
    pub websocket: Option<String>,
    pub message_broker: Option<String>,
    pub enable_translation: bool,
    pub native_language: Option<String>,
    pub languages: Vec<String>,
    pub build_tool: Option<String>,
    pub jhi_prefix: String,
    pub jhi_prefix_dashed: String,
    pub jhi_table_prefix: String,
    pub skip_check_length_of_identifier: bool,
    pub entity_suffix: String,
    pub dto_suffix: String,
    pub client_framework: String,
    pub client_package_manager: String,
    pub test_frameworks: Vec<String>,
    pub protractor_tests: bool,
    pub gatling_tests: bool,
    pub cucumber_tests: bool,
    pub reactive: bool,
    pub skip_client: bool,
    pub skip_server: bool,
    pub skip_db_changelog: bool,
    /// Set for microservice applications, where it equals `base_name`.
    pub microservice_name: Option<String>,
}

impl ProjectSettings {
    /// Resolve settings and validate that entities can be generated at all.
    pub fn resolve(store: &ConfigStore, options: &GeneratorOptions) -> GenerationResult<Self> {
        let settings = Self::from_store(store, options);
        settings.validate()?;
        Ok(settings)
    }

    fn from_store(store: &ConfigStore, options: &GeneratorOptions) -> Self {
        let base_name = store.get_str("baseName").unwrap_or_default().to_string();
        let application_type = store
            .get_str("applicationType")
            .unwrap_or("monolith")
            .to_string();

        let option_db = options.db.as_deref().and_then(parse_database);
        let database_type = store
            .get_str("databaseType")
            .and_then(parse_database)
            .or_else(|| option_db.map(|db| db.family()));
        let prod_database_type = store
            .get_str("prodDatabaseType")
            .and_then(parse_database)
            .or(option_db);
        let dev_database_type = store
            .get_str("devDatabaseType")
            .and_then(parse_database)
            .or(option_db);

        let cache_provider = store
            .get_str("cacheProvider")
            .or_else(|| store.get_str("hibernateCache"))
            .unwrap_or("no")
            .to_string();
        let enable_hibernate_cache = store.get_bool("enableHibernateCache").unwrap_or(false)
            && !matches!(cache_provider.as_str(), "no" | "memcached");

        let jhi_prefix = store.get_str("jhiPrefix").unwrap_or("jhi").to_string();

        let test_frameworks = store
            .get_str_list("testFrameworks")
            .unwrap_or_else(|| vec!["gatling".to_string()]);
        let has_framework = |name: &str| test_frameworks.iter().any(|f| f == name);

        let client_package_manager = store
            .get_str("clientPackageManager")
            .map(str::to_string)
            .unwrap_or_else(|| (if options.use_yarn { "yarn" } else { "npm" }).to_string());

        let is_microservice = application_type == "microservice";

        Self {
            capitalized_base_name: case::upper_first(&base_name),
            package_name: store.get_str("packageName").map(str::to_string),
            authentication_type: store.get_str("authenticationType").map(str::to_string),
            database_type,
            prod_database_type,
            dev_database_type,
            search_engine: store.get("searchEngine").cloned(),
            cache_provider,
            enable_hibernate_cache,
            websocket: store.get_feature("websocket"),
            message_broker: store.get_feature("messageBroker"),
            enable_translation: store.get_bool("enableTranslation").unwrap_or(false),
            native_language: store.get_str("nativeLanguage").map(str::to_string),
            languages: store.get_str_list("languages").unwrap_or_default(),
            build_tool: store.get_str("buildTool").map(str::to_string),
            jhi_prefix_dashed: case::kebab_case(&jhi_prefix),
            jhi_table_prefix: case::table_name(&jhi_prefix),
            jhi_prefix,
            skip_check_length_of_identifier: store
                .get_bool("skipCheckLengthOfIdentifier")
                .unwrap_or(false),
            entity_suffix: store.get_str("entitySuffix").unwrap_or("").to_string(),
            dto_suffix: store.get_str("dtoSuffix").unwrap_or("DTO").to_string(),
            client_framework: store
                .get_str("clientFramework")
                .unwrap_or("angularX")
                .to_string(),
            client_package_manager,
            protractor_tests: has_framework("protractor"),
            gatling_tests: has_framework("gatling"),
            cucumber_tests: has_framework("cucumber"),
            test_frameworks,
            reactive: store.get_bool("reactive").unwrap_or(false),
            skip_client: is_microservice
                || options.skip_client
                || store.get_bool("skipClient").unwrap_or(false),
            skip_server: options.skip_server || store.get_bool("skipServer").unwrap_or(false),
            skip_db_changelog: options.skip_db_changelog
                || store.get_bool("skipDbChangelog").unwrap_or(false),
            microservice_name: is_microservice.then(|| base_name.clone()),
            base_name,
            application_type,
        }
    }

    fn validate(&self) -> GenerationResult<()> {
        if self.entity_suffix == self.dto_suffix {
            return Err(GenerationError::SuffixCollision {
                suffix: self.entity_suffix.clone(),
            });
        }

        if self.reactive {
            return Err(GenerationError::ReactiveNotSupported);
        }

        if !self.has_usable_database() {
            let message = if self.skip_server {
                "The entity cannot be generated as the database type is not known! Pass the --db <type> & --prod-db <db> flag in command line"
            } else {
                "The entity cannot be generated as the application does not have a database configured!"
            };
            return Err(GenerationError::MissingDatabaseConfiguration {
                message: message.to_string(),
            });
        }

        Ok(())
    }

    /// A gateway with token based auth may run without a database of its own.
    fn has_usable_database(&self) -> bool {
        match self.database_type {
            None => false,
            Some(DatabaseType::No) => {
                self.application_type == "gateway"
                    && matches!(self.authentication_type.as_deref(), Some("uaa" | "oauth2"))
            }
            Some(_) => true,
        }
    }

    pub fn is_gateway(&self) -> bool {
        self.application_type == "gateway"
    }
}

fn parse_database(value: &str) -> Option<DatabaseType> {
    match value.parse() {
        Ok(db) => Some(db),
        Err(err) => {
            log::warn!("ignoring database setting: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store(value: Value) -> ConfigStore {
        match value {
            Value::Object(map) => ConfigStore::new(map),
            _ => panic!("expected an object"),
        }
    }

    fn sql_store() -> ConfigStore {
        store(json!({
            "baseName": "shop",
            "applicationType": "monolith",
            "databaseType": "sql",
            "prodDatabaseType": "postgresql",
            "devDatabaseType": "h2Disk"
        }))
    }

    #[test]
    fn test_defaults() {
        let settings = ProjectSettings::resolve(&sql_store(), &GeneratorOptions::default()).unwrap();

        assert_eq!(settings.capitalized_base_name, "Shop");
        assert_eq!(settings.prod_database_type, Some(DatabaseType::Postgresql));
        assert_eq!(settings.jhi_prefix, "jhi");
        assert_eq!(settings.jhi_table_prefix, "jhi");
        assert_eq!(settings.entity_suffix, "");
        assert_eq!(settings.dto_suffix, "DTO");
        assert_eq!(settings.client_framework, "angularX");
        assert_eq!(settings.client_package_manager, "npm");
        assert_eq!(settings.test_frameworks, vec!["gatling".to_string()]);
        assert!(settings.gatling_tests);
        assert!(!settings.protractor_tests);
        assert_eq!(settings.cache_provider, "no");
        assert!(!settings.enable_hibernate_cache);
    }

    #[test]
    fn test_prefix_variants() {
        let store = store(json!({"databaseType": "sql", "jhiPrefix": "myApp"}));
        let settings = ProjectSettings::resolve(&store, &GeneratorOptions::default()).unwrap();

        assert_eq!(settings.jhi_prefix_dashed, "my-app");
        assert_eq!(settings.jhi_table_prefix, "my_app");
    }

    #[test]
    fn test_db_option_fills_missing_database() {
        let options = GeneratorOptions {
            db: Some("mysql".to_string()),
            ..Default::default()
        };
        let settings = ProjectSettings::resolve(&ConfigStore::default(), &options).unwrap();

        assert_eq!(settings.database_type, Some(DatabaseType::Sql));
        assert_eq!(settings.prod_database_type, Some(DatabaseType::Mysql));
        assert_eq!(settings.dev_database_type, Some(DatabaseType::Mysql));
    }

    #[test]
    fn test_microservice_skips_client() {
        let store = store(json!({
            "baseName": "billing",
            "applicationType": "microservice",
            "databaseType": "mongodb"
        }));
        let settings = ProjectSettings::resolve(&store, &GeneratorOptions::default()).unwrap();

        assert!(settings.skip_client);
        assert_eq!(settings.microservice_name.as_deref(), Some("billing"));
    }

    #[test]
    fn test_suffix_collision() {
        let store = store(json!({"databaseType": "sql", "entitySuffix": "DTO"}));
        let err = ProjectSettings::resolve(&store, &GeneratorOptions::default()).unwrap_err();
        assert!(matches!(err, GenerationError::SuffixCollision { .. }));
    }

    #[test]
    fn test_reactive_rejected() {
        let store = store(json!({"databaseType": "sql", "reactive": true}));
        let err = ProjectSettings::resolve(&store, &GeneratorOptions::default()).unwrap_err();
        assert!(matches!(err, GenerationError::ReactiveNotSupported));
    }

    #[test]
    fn test_missing_database() {
        let err = ProjectSettings::resolve(&ConfigStore::default(), &GeneratorOptions::default()).unwrap_err();
        assert!(err.to_string().contains("does not have a database configured"));

        let options = GeneratorOptions {
            skip_server: true,
            ..Default::default()
        };
        let err = ProjectSettings::resolve(&ConfigStore::default(), &options).unwrap_err();
        assert!(err.to_string().contains("--db <type>"));
    }

    #[test]
    fn test_no_database_allowed_for_oauth_gateway() {
        let gateway = store(json!({
            "applicationType": "gateway",
            "authenticationType": "oauth2",
            "databaseType": "no"
        }));
        assert!(ProjectSettings::resolve(&gateway, &GeneratorOptions::default()).is_ok());

        let monolith = store(json!({"applicationType": "monolith", "databaseType": "no"}));
        let err = ProjectSettings::resolve(&monolith, &GeneratorOptions::default()).unwrap_err();
        assert!(matches!(err, GenerationError::MissingDatabaseConfiguration { .. }));
    }

    #[test]
    fn test_feature_flags() {
        let store = store(json!({
            "databaseType": "sql",
            "websocket": "no",
            "messageBroker": "kafka",
            "cacheProvider": "ehcache",
            "enableHibernateCache": true
        }));
        let settings = ProjectSettings::resolve(&store, &GeneratorOptions::default()).unwrap();

        assert_eq!(settings.websocket, None);
        assert_eq!(settings.message_broker.as_deref(), Some("kafka"));
        assert!(settings.enable_hibernate_cache);
    }
}
