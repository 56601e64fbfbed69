//! Per-database naming rules.
//!
//! Reserved words and identifier length limits are data: supporting a new
//! backend means adding a row to [`RULES`], not another branch in the checks.

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use super::reserved;

/// Database backends the generator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseType {
    /// Generic SQL, reserved words of every SQL backend apply.
    Sql,
    Mysql,
    Mariadb,
    Postgresql,
    Oracle,
    Mssql,
    H2Disk,
    H2Memory,
    Mongodb,
    Cassandra,
    Couchbase,
    Neo4j,
    No,
}

impl DatabaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::Sql => "sql",
            DatabaseType::Mysql => "mysql",
            DatabaseType::Mariadb => "mariadb",
            DatabaseType::Postgresql => "postgresql",
            DatabaseType::Oracle => "oracle",
            DatabaseType::Mssql => "mssql",
            DatabaseType::H2Disk => "h2Disk",
            DatabaseType::H2Memory => "h2Memory",
            DatabaseType::Mongodb => "mongodb",
            DatabaseType::Cassandra => "cassandra",
            DatabaseType::Couchbase => "couchbase",
            DatabaseType::Neo4j => "neo4j",
            DatabaseType::No => "no",
        }
    }

    /// The `databaseType` family a concrete production database belongs to.
    pub fn family(&self) -> DatabaseType {
        match self {
            DatabaseType::Mysql
            | DatabaseType::Mariadb
            | DatabaseType::Postgresql
            | DatabaseType::Oracle
            | DatabaseType::Mssql
            | DatabaseType::H2Disk
            | DatabaseType::H2Memory => DatabaseType::Sql,
            other => *other,
        }
    }

    pub fn is_sql(&self) -> bool {
        self.family() == DatabaseType::Sql
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DatabaseType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for DatabaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sql" => Ok(DatabaseType::Sql),
            "mysql" => Ok(DatabaseType::Mysql),
            "mariadb" => Ok(DatabaseType::Mariadb),
            "postgresql" => Ok(DatabaseType::Postgresql),
            "oracle" => Ok(DatabaseType::Oracle),
            "mssql" => Ok(DatabaseType::Mssql),
            "h2disk" => Ok(DatabaseType::H2Disk),
            "h2memory" => Ok(DatabaseType::H2Memory),
            "mongodb" => Ok(DatabaseType::Mongodb),
            "cassandra" => Ok(DatabaseType::Cassandra),
            "couchbase" => Ok(DatabaseType::Couchbase),
            "neo4j" => Ok(DatabaseType::Neo4j),
            "no" => Ok(DatabaseType::No),
            other => Err(format!("unknown database type '{other}'")),
        }
    }
}

/// Identifier length thresholds for one backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierLimit {
    /// Longer names are rejected.
    pub max: usize,
    /// Longer names are accepted with a warning.
    pub advisory: usize,
}

/// Reserved words and identifier limits for one backend.
#[derive(Debug, Default)]
pub struct DatabaseRules {
    pub reserved_words: HashSet<&'static str>,
    pub identifier_limit: Option<IdentifierLimit>,
}

impl DatabaseRules {
    fn new(lists: &[&[&'static str]], identifier_limit: Option<IdentifierLimit>) -> Self {
        Self {
            reserved_words: lists.iter().flat_map(|list| list.iter().copied()).collect(),
            identifier_limit,
        }
    }

    /// Case-insensitive reserved word lookup.
    pub fn is_reserved(&self, name: &str) -> bool {
        !name.is_empty() && self.reserved_words.contains(name.to_ascii_uppercase().as_str())
    }
}

static RULES: Lazy<HashMap<DatabaseType, DatabaseRules>> = Lazy::new(|| {
    use reserved::{CASSANDRA, MSSQL, MYSQL, ORACLE, POSTGRESQL};

    let mut rules = HashMap::new();
    rules.insert(
        DatabaseType::Sql,
        DatabaseRules::new(&[MYSQL, POSTGRESQL, CASSANDRA, ORACLE, MSSQL], None),
    );
    rules.insert(DatabaseType::Mysql, DatabaseRules::new(&[MYSQL], None));
    rules.insert(DatabaseType::Mariadb, DatabaseRules::new(&[MYSQL], None));
    rules.insert(DatabaseType::Postgresql, DatabaseRules::new(&[POSTGRESQL], None));
    rules.insert(
        DatabaseType::Oracle,
        DatabaseRules::new(&[ORACLE], Some(IdentifierLimit { max: 26, advisory: 14 })),
    );
    rules.insert(DatabaseType::Mssql, DatabaseRules::new(&[MSSQL], None));
    rules.insert(DatabaseType::Cassandra, DatabaseRules::new(&[CASSANDRA], None));
    rules
});

static NO_RULES: Lazy<DatabaseRules> = Lazy::new(DatabaseRules::default);

/// Rules for a database; backends without a row have no restrictions.
pub fn rules_for(database: Option<DatabaseType>) -> &'static DatabaseRules {
    database
        .and_then(|db| RULES.get(&db))
        .unwrap_or(&*NO_RULES)
}

/// Whether `name` is a reserved table name for the given database.
pub fn is_reserved_table_name(name: &str, database: Option<DatabaseType>) -> bool {
    rules_for(database).is_reserved(name)
}

static RESERVED_CLASS_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    reserved::JHIPSTER
        .iter()
        .chain(reserved::JAVA.iter())
        .copied()
        .collect()
});

/// Whether `name` clashes with a Java keyword or a generator built-in class.
pub fn is_reserved_class_name(name: &str) -> bool {
    RESERVED_CLASS_NAMES.contains(name.to_ascii_uppercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_database_type() {
        assert_eq!("postgresql".parse::<DatabaseType>(), Ok(DatabaseType::Postgresql));
        assert_eq!("h2Disk".parse::<DatabaseType>(), Ok(DatabaseType::H2Disk));
        assert_eq!("ORACLE".parse::<DatabaseType>(), Ok(DatabaseType::Oracle));
        assert!("sqlite".parse::<DatabaseType>().is_err());
    }

    #[test]
    fn test_family() {
        assert_eq!(DatabaseType::Oracle.family(), DatabaseType::Sql);
        assert_eq!(DatabaseType::Mongodb.family(), DatabaseType::Mongodb);
        assert!(DatabaseType::H2Memory.is_sql());
        assert!(!DatabaseType::Cassandra.is_sql());
    }

    #[test]
    fn test_reserved_table_names_per_database() {
        assert!(is_reserved_table_name("USER", Some(DatabaseType::Postgresql)));
        assert!(is_reserved_table_name("user", Some(DatabaseType::Oracle)));
        assert!(!is_reserved_table_name("USER", Some(DatabaseType::Mysql)));
        assert!(is_reserved_table_name("keyspace", Some(DatabaseType::Sql)));
        assert!(!is_reserved_table_name("USER", Some(DatabaseType::Mongodb)));
        assert!(!is_reserved_table_name("USER", None));
        assert!(!is_reserved_table_name("", Some(DatabaseType::Sql)));
    }

    #[test]
    fn test_only_oracle_has_identifier_limit() {
        assert_eq!(
            rules_for(Some(DatabaseType::Oracle)).identifier_limit,
            Some(IdentifierLimit { max: 26, advisory: 14 })
        );
        assert!(rules_for(Some(DatabaseType::Postgresql)).identifier_limit.is_none());
        assert!(rules_for(Some(DatabaseType::Sql)).identifier_limit.is_none());
    }

    #[test]
    fn test_reserved_class_names() {
        assert!(is_reserved_class_name("User"));
        assert!(is_reserved_class_name("class"));
        assert!(is_reserved_class_name("Authority"));
        assert!(!is_reserved_class_name("Foo"));
    }
}
