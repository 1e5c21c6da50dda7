use std::path::Path;

use log::info;
use rusqlite::{Connection, Params, Row};

pub struct Storage {
    connection: Connection,
}

const SCHEMA: &str = "
create table if not exists ThingKind (
    id integer primary key,
    name text not null unique,
    category text not null,
    plant text,
    blocks_planting integer not null default 0,
    haulable integer not null default 0
);
create table if not exists Settings (
    id integer primary key,
    value text not null
);
create table if not exists Region (
    id integer primary key,
    width integer not null,
    height integer not null,
    flora text not null,
    fingerprint integer not null,
    assignments blob not null
);
create table if not exists Zone (
    id integer not null,
    region integer not null,
    label text not null,
    kind text not null,
    cells text not null,
    filter text,
    allow_sow integer not null,
    allow_cut integer not null,
    plant text,
    primary key (region, id)
);
";

impl Storage {
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        let storage = Connection::open(path.as_ref()).map(|connection| Storage { connection })?;
        storage.ensure_schema()?;
        Ok(storage)
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        let storage = Connection::open_in_memory().map(|connection| Storage { connection })?;
        storage.ensure_schema()?;
        Ok(storage)
    }

    #[inline]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn ensure_schema(&self) -> rusqlite::Result<()> {
        info!("Ensure gardens schema");
        self.connection.execute_batch(SCHEMA)
    }

    /// Maps every row of the table, stops on the first failed row.
    pub fn find_all<T, E, M>(&self, table: &str, map: M) -> Result<Vec<T>, E>
    where
        M: FnMut(&Row) -> Result<T, E>,
        E: From<rusqlite::Error>,
    {
        self.query_map(table, [], "order by id", map)
    }

    pub fn find_many<T, E, M>(
        &self,
        table: &str,
        column: &str,
        value: usize,
        map: M,
    ) -> Result<Vec<T>, E>
    where
        M: FnMut(&Row) -> Result<T, E>,
        E: From<rusqlite::Error>,
    {
        let where_clause = format!("where {} = ? order by id", column);
        self.query_map(table, [value as i64], &where_clause, map)
    }

    fn query_map<T, E, P: Params, M>(
        &self,
        table: &str,
        params: P,
        where_clause: &str,
        mut map: M,
    ) -> Result<Vec<T>, E>
    where
        M: FnMut(&Row) -> Result<T, E>,
        E: From<rusqlite::Error>,
    {
        let mut statement = self
            .connection
            .prepare(&format!("select * from {} {}", table, where_clause))?;
        let mut rows = statement.query(params)?;
        let mut values = vec![];
        while let Some(row) = rows.next()? {
            values.push(map(row)?);
        }
        Ok(values)
    }
}
