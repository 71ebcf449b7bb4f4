use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

const INSERT_USER: &str = "INSERT INTO users (name, email) VALUES (?1, ?2)";
const SELECT_USER_BY_ID: &str = "SELECT id, name, email, created_at FROM users WHERE id = ?1";
const SELECT_USER_BY_EMAIL: &str = "SELECT id, name, email, created_at FROM users WHERE email = ?1";
const SELECT_ALL_USERS: &str = "SELECT id, name, email, created_at FROM users ORDER BY email";

/// A registered user owning tasks and receiving reminder emails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub created_at: Option<NaiveDateTime>,
}

impl User {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            created_at: None,
        }
    }
}

pub struct Users {
    conn: Connection,
}

impl Users {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Registers a new user. Email is globally unique.
    pub fn register(&mut self, user: &User) -> Result<User> {
        if self.find_by_email(&user.email)?.is_some() {
            return Err(msg_error_anyhow!(Message::UserEmailExists(user.email.clone())));
        }
        self.conn.execute(INSERT_USER, params![user.name, user.email])?;
        let id = self.conn.last_insert_rowid();
        self.find_by_id(id)?
            .ok_or_else(|| msg_error_anyhow!(Message::UserNotFound(user.email.clone())))
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = self.conn.query_row(SELECT_USER_BY_ID, params![id], Self::map_row).optional()?;
        Ok(user)
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = self.conn.query_row(SELECT_USER_BY_EMAIL, params![email], Self::map_row).optional()?;
        Ok(user)
    }

    pub fn fetch_all(&self) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_USERS)?;
        let user_iter = stmt.query_map([], Self::map_row)?;
        let mut users = Vec::new();
        for user in user_iter {
            users.push(user?);
        }
        Ok(users)
    }

    fn map_row(row: &Row) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}
