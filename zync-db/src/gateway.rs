//! Per-query read-only connections to the Zotero database.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, Params, Row};

use crate::error::LoadError;

/// Executes read-only queries against a single SQLite file.
///
/// No connection is held between calls. Zotero keeps its database open
/// while running, so each query opens, reads, and closes on its own.
#[derive(Debug, Clone)]
pub struct Gateway {
    path: PathBuf,
}

impl Gateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, LoadError> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(conn)
    }

    /// Run `sql` and map every row with `map_row`.
    ///
    /// The statement's result columns must equal `columns` in order, so
    /// `map_row` can read them positionally.
    pub fn execute<T, P, F>(
        &self,
        sql: &str,
        params: P,
        columns: &[&str],
        map_row: F,
    ) -> Result<Vec<T>, LoadError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.connect()?;
        let rows = {
            let mut stmt = conn.prepare(sql)?;
            let found: Vec<String> = stmt
                .column_names()
                .into_iter()
                .map(String::from)
                .collect();
            if found != columns {
                return Err(LoadError::ColumnMismatch {
                    expected: columns.iter().map(|c| c.to_string()).collect(),
                    found,
                });
            }
            let rows = stmt.query_map(params, map_row)?;
            rows.collect::<Result<Vec<_>, _>>()?
        };
        conn.close().map_err(|(_, e)| e)?;

        log::trace!("{} row(s) from {}", rows.len(), self.path.display());
        Ok(rows)
    }

    /// Like [`execute`](Self::execute), keeping only the first row.
    pub fn execute_first<T, P, F>(
        &self,
        sql: &str,
        params: P,
        columns: &[&str],
        map_row: F,
    ) -> Result<Option<T>, LoadError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        Ok(self.execute(sql, params, columns, map_row)?.into_iter().next())
    }
}
