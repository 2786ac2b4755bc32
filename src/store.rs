//! CharacterStore: schema bootstrap and CRUD against a SQLite file.
//!
//! Lookups return `Ok(None)` for a missing id; absence is a normal
//! outcome, not an error. The lookup-then-mutate sequence in update
//! and delete is not serialized against concurrent writers: SQLite's
//! row-level commit (last committer wins) is the only consistency
//! guarantee. This service targets single-user, low-concurrency use.

use crate::character::{Character, CharacterInput};
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

const RETURNED_COLUMNS: &str = "id, name, character_class, race, strength, dexterity, \
     constitution, intelligence, wisdom, charisma";

#[derive(Clone)]
pub struct CharacterStore {
    pool: SqlitePool,
}

impl CharacterStore {
    /// Open (or create) the SQLite file at `path` and build the pool.
    pub async fn connect(path: &str) -> Result<Self, AppError> {
        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the characters table and the unique index on name if
    /// absent. Call once at startup, before serving requests.
    pub async fn init(&self) -> Result<(), AppError> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS characters (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                character_class TEXT NOT NULL,
                race TEXT NOT NULL,
                strength INTEGER NOT NULL,
                dexterity INTEGER NOT NULL,
                constitution INTEGER NOT NULL,
                intelligence INTEGER NOT NULL,
                wisdom INTEGER NOT NULL,
                charisma INTEGER NOT NULL
            )
            "#;
        sqlx::query(ddl).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert one row; the store assigns the id. Returns the created
    /// row. A duplicate name maps to `AppError::Conflict`.
    pub async fn create(&self, input: &CharacterInput) -> Result<Character, AppError> {
        let sql = format!(
            "INSERT INTO characters (name, character_class, race, strength, dexterity, \
             constitution, intelligence, wisdom, charisma) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9) \
             RETURNING {RETURNED_COLUMNS}"
        );
        tracing::debug!(name = %input.name, "insert character");
        let row = Self::bind_input(sqlx::query_as::<_, Character>(&sql), input)
            .fetch_one(&self.pool)
            .await
            .map_err(map_constraint)?;
        Ok(row)
    }

    /// Every row, ordered by id. Ids are assigned monotonically, so
    /// this is insertion order.
    pub async fn list_all(&self) -> Result<Vec<Character>, AppError> {
        let sql = format!("SELECT {RETURNED_COLUMNS} FROM characters ORDER BY id");
        let rows = sqlx::query_as::<_, Character>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Fetch one row by primary key. Returns None when no row matches.
    pub async fn get(&self, id: i64) -> Result<Option<Character>, AppError> {
        let sql = format!("SELECT {RETURNED_COLUMNS} FROM characters WHERE id = ?1");
        let row = sqlx::query_as::<_, Character>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Overwrite all nine fields of the row at `id`. Returns None when
    /// no row matches; a duplicate name maps to `AppError::Conflict`.
    pub async fn update(
        &self,
        id: i64,
        input: &CharacterInput,
    ) -> Result<Option<Character>, AppError> {
        let sql = format!(
            "UPDATE characters SET name = ?1, character_class = ?2, race = ?3, \
             strength = ?4, dexterity = ?5, constitution = ?6, intelligence = ?7, \
             wisdom = ?8, charisma = ?9 \
             WHERE id = ?10 \
             RETURNING {RETURNED_COLUMNS}"
        );
        tracing::debug!(id, name = %input.name, "update character");
        let row = Self::bind_input(sqlx::query_as::<_, Character>(&sql), input)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_constraint)?;
        Ok(row)
    }

    /// Remove the row at `id`. Returns the deleted row's last values,
    /// or None when no row matches.
    pub async fn delete(&self, id: i64) -> Result<Option<Character>, AppError> {
        let sql = format!("DELETE FROM characters WHERE id = ?1 RETURNING {RETURNED_COLUMNS}");
        tracing::debug!(id, "delete character");
        let row = sqlx::query_as::<_, Character>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Explicit teardown; waits for in-flight connections to close.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    fn bind_input<'q>(
        query: sqlx::query::QueryAs<'q, sqlx::Sqlite, Character, sqlx::sqlite::SqliteArguments<'q>>,
        input: &'q CharacterInput,
    ) -> sqlx::query::QueryAs<'q, sqlx::Sqlite, Character, sqlx::sqlite::SqliteArguments<'q>> {
        query
            .bind(&input.name)
            .bind(&input.character_class)
            .bind(&input.race)
            .bind(input.strength)
            .bind(input.dexterity)
            .bind(input.constitution)
            .bind(input.intelligence)
            .bind(input.wisdom)
            .bind(input.charisma)
    }
}

/// Unique-index violations on name surface as Conflict; everything
/// else stays a storage failure.
fn map_constraint(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict("a character with this name already exists".into())
        }
        _ => AppError::Db(e),
    }
}
