//! SQLite-backed player storage.

use async_trait::async_trait;
use roster_domain::{
    Birthday, Experience, Player, PlayerId, PlayerName, PlayerProfile, PlayerTitle, Profession,
    Race,
};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use crate::infrastructure::ports::{PlayerRepo, RepoError};

const SELECT_COLUMNS: &str =
    "SELECT id, name, title, race, profession, birthday, banned, experience FROM players";

/// SQLite implementation of the player store.
///
/// Level and untilNextLevel are written alongside experience so the table
/// can be queried directly, but loads always re-derive them from experience.
pub struct SqlitePlayerRepo {
    pool: SqlitePool,
}

impl SqlitePlayerRepo {
    /// Open (creating if needed) the database file at `db_path`.
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("players.connect", e))?;
        Self::with_pool(pool).await
    }

    /// Private in-memory database, used by tests.
    ///
    /// A single connection is kept so every query sees the same database.
    pub async fn in_memory() -> Result<Self, RepoError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| RepoError::database("players.connect", e))?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, RepoError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                title TEXT NOT NULL,
                race TEXT NOT NULL,
                profession TEXT NOT NULL,
                birthday INTEGER NOT NULL,
                banned INTEGER NOT NULL,
                experience INTEGER NOT NULL,
                level INTEGER NOT NULL,
                until_next_level INTEGER NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("players.migrate", e))?;

        Ok(Self { pool })
    }
}

fn row_to_player(row: &SqliteRow) -> Result<Player, RepoError> {
    let column = |e: sqlx::Error| RepoError::serialization(e);

    let id: i64 = row.try_get("id").map_err(column)?;
    let name: String = row.try_get("name").map_err(column)?;
    let title: String = row.try_get("title").map_err(column)?;
    let race: String = row.try_get("race").map_err(column)?;
    let profession: String = row.try_get("profession").map_err(column)?;
    let birthday: i64 = row.try_get("birthday").map_err(column)?;
    let banned: bool = row.try_get("banned").map_err(column)?;
    let experience: i64 = row.try_get("experience").map_err(column)?;

    let profile = PlayerProfile::new(
        PlayerName::new(name).map_err(RepoError::serialization)?,
        PlayerTitle::new(title).map_err(RepoError::serialization)?,
        race.parse::<Race>().map_err(RepoError::serialization)?,
        profession
            .parse::<Profession>()
            .map_err(RepoError::serialization)?,
        Birthday::from_millis(birthday).map_err(RepoError::serialization)?,
        Experience::new(experience).map_err(RepoError::serialization)?,
    )
    .with_banned(banned);

    let id = PlayerId::new(id).map_err(RepoError::serialization)?;
    Ok(Player::new(id, profile))
}

#[async_trait]
impl PlayerRepo for SqlitePlayerRepo {
    async fn list_all(&self) -> Result<Vec<Player>, RepoError> {
        let rows = sqlx::query(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.list_all", e))?;

        rows.iter().map(row_to_player).collect()
    }

    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.get", e))?;

        row.as_ref().map(row_to_player).transpose()
    }

    async fn insert(&self, profile: &PlayerProfile) -> Result<Player, RepoError> {
        let result = sqlx::query(
            r#"
            INSERT INTO players
                (name, title, race, profession, birthday, banned, experience,
                 level, until_next_level)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(profile.name().as_str())
        .bind(profile.title().as_str())
        .bind(profile.race().as_str())
        .bind(profile.profession().as_str())
        .bind(profile.birthday().timestamp_millis())
        .bind(profile.is_banned())
        .bind(i64::from(profile.experience().points()))
        .bind(i64::from(profile.leveling().level))
        .bind(i64::from(profile.leveling().until_next_level))
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("players.insert", e))?;

        let id = PlayerId::new(result.last_insert_rowid())
            .map_err(|e| RepoError::database("players.insert", e))?;
        Ok(Player::new(id, profile.clone()))
    }

    async fn save(&self, player: &Player) -> Result<(), RepoError> {
        let result = sqlx::query(
            r#"
            UPDATE players
            SET name = ?, title = ?, race = ?, profession = ?,
                birthday = ?, banned = ?, experience = ?,
                level = ?, until_next_level = ?
            WHERE id = ?
            "#,
        )
        .bind(player.name().as_str())
        .bind(player.title().as_str())
        .bind(player.race().as_str())
        .bind(player.profession().as_str())
        .bind(player.birthday().timestamp_millis())
        .bind(player.is_banned())
        .bind(i64::from(player.experience().points()))
        .bind(i64::from(player.level()))
        .bind(i64::from(player.until_next_level()))
        .bind(player.id().get())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("players.save", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Player", player.id()));
        }
        Ok(())
    }

    async fn delete(&self, id: PlayerId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.delete", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Player", id));
        }
        Ok(())
    }
}
