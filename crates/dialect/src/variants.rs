//! Per-database dialect variants.
//!
//! Each variant builds its configuration over [`DialectConfig::ansi`] at
//! construction and overrides a compile entry point only where its SQL
//! differs from the base compiler.

use crate::config::{DialectConfig, QuoteStyle};
use crate::dialect::{Dialect, select_into_as_create_table};
use crate::error::RenderError;
use model::expr::Operator;
use model::ops::Select;
use model::table::Table;

/// The plain ANSI baseline.
#[derive(Debug, Clone)]
pub struct Ansi {
    config: DialectConfig,
}

impl Default for Ansi {
    fn default() -> Self {
        Ansi {
            config: DialectConfig::ansi(),
        }
    }
}

impl Dialect for Ansi {
    fn config(&self) -> &DialectConfig {
        &self.config
    }
}

#[derive(Debug, Clone)]
pub struct Postgres {
    config: DialectConfig,
}

impl Default for Postgres {
    fn default() -> Self {
        let mut config = DialectConfig::ansi();
        config.name = "PostgreSQL";
        config.reserved_words = vec!["user", "order", "group", "limit", "offset", "where"];
        Postgres { config }
    }
}

impl Dialect for Postgres {
    fn config(&self) -> &DialectConfig {
        &self.config
    }
}

#[derive(Debug, Clone)]
pub struct MySql {
    config: DialectConfig,
}

impl Default for MySql {
    fn default() -> Self {
        let mut config = DialectConfig::ansi().with_operator(Operator::NotEqual, "!=");
        config.name = "MySQL";
        config.identifier_quotes = QuoteStyle::Same('`');
        config.reserved_words = vec!["order", "group", "key", "index", "rank"];
        MySql { config }
    }
}

impl Dialect for MySql {
    fn config(&self) -> &DialectConfig {
        &self.config
    }
}

#[derive(Debug, Clone)]
pub struct SqlServer {
    config: DialectConfig,
}

impl Default for SqlServer {
    fn default() -> Self {
        let mut config = DialectConfig::ansi();
        config.name = "SQL Server";
        config.identifier_quotes = QuoteStyle::Pair('[', ']');
        config.reserved_words = vec!["user", "order", "group", "top", "identity"];
        SqlServer { config }
    }
}

impl Dialect for SqlServer {
    fn config(&self) -> &DialectConfig {
        &self.config
    }
}

#[derive(Debug, Clone)]
pub struct Sqlite {
    config: DialectConfig,
}

impl Default for Sqlite {
    fn default() -> Self {
        let mut config = DialectConfig::ansi();
        config.name = "SQLite";
        Sqlite { config }
    }
}

impl Dialect for Sqlite {
    fn config(&self) -> &DialectConfig {
        &self.config
    }

    // SQLite has no SELECT INTO; synthesize CREATE TABLE ... AS SELECT.
    fn select_into(&self, op: &Select, into: &Table) -> Result<String, RenderError> {
        select_into_as_create_table(self, op, into)
    }
}

#[derive(Debug, Clone)]
pub struct Oracle {
    config: DialectConfig,
}

impl Default for Oracle {
    fn default() -> Self {
        let mut config = DialectConfig::ansi();
        config.name = "Oracle";
        config.reserved_words = vec!["user", "level", "rownum", "date", "number"];
        // Session setup so string date literals are interpreted the same way
        // the value formatter writes them.
        config.pre_statements = vec![
            "ALTER SESSION SET NLS_DATE_FORMAT = 'YYYY-MM-DD HH24:MI:SS'".to_string(),
            "ALTER SESSION SET NLS_TIMESTAMP_FORMAT = 'YYYY-MM-DD HH24:MI:SS.FF3'".to_string(),
        ];
        Oracle { config }
    }
}

impl Dialect for Oracle {
    fn config(&self) -> &DialectConfig {
        &self.config
    }

    // Oracle also lacks SELECT INTO outside PL/SQL blocks.
    fn select_into(&self, op: &Select, into: &Table) -> Result<String, RenderError> {
        select_into_as_create_table(self, op, into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::table;

    #[test]
    fn test_mysql_quotes_with_backticks() {
        let dialect = MySql::default();
        let op = Select {
            tables: vec![table!("users")],
            fields: vec![model::field("id")],
            ..Default::default()
        };
        assert_eq!(dialect.select(&op).unwrap(), "SELECT `id`\nFROM `users`");
    }

    #[test]
    fn test_sql_server_quotes_with_brackets() {
        let dialect = SqlServer::default();
        let op = Select {
            tables: vec![table!("users")],
            ..Default::default()
        };
        assert_eq!(dialect.select(&op).unwrap(), "SELECT *\nFROM [users]");
    }

    #[test]
    fn test_sqlite_select_into_becomes_create_table_as() {
        let dialect = Sqlite::default();
        let op = Select {
            tables: vec![table!("users")],
            ..Default::default()
        };
        let sql = dialect.select_into(&op, &table!("users_backup")).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE \"users_backup\" AS\nSELECT *\nFROM \"users\""
        );
    }

    #[test]
    fn test_oracle_wrap_prepends_session_setup() {
        let dialect = Oracle::default();
        let wrapped = dialect.wrap_statement("SELECT *\nFROM \"users\"");
        assert_eq!(
            wrapped,
            "ALTER SESSION SET NLS_DATE_FORMAT = 'YYYY-MM-DD HH24:MI:SS';\n\
             ALTER SESSION SET NLS_TIMESTAMP_FORMAT = 'YYYY-MM-DD HH24:MI:SS.FF3';\n\
             SELECT *\nFROM \"users\";"
        );
    }

    #[test]
    fn test_reserved_words_are_advisory_only() {
        let dialect = Postgres::default();
        assert!(dialect.config().reserved_words.contains(&"order"));
        // Rendering a reserved word as an identifier still succeeds.
        let op = Select {
            tables: vec![table!("order")],
            ..Default::default()
        };
        assert_eq!(dialect.select(&op).unwrap(), "SELECT *\nFROM \"order\"");
    }
}
