use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "taskdo.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the application database and brings the schema up to date.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        // Cascade deletes from users to tasks rely on this pragma
        conn.pragma_update(None, "foreign_keys", true)?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
