use crate::model::kind::EntityKind;
use sqlx::SqliteConnection;

/// Column of an entity table that must stay unique.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UniqueColumn {
    Email,
    Username,
}

impl UniqueColumn {
    fn name(self) -> &'static str {
        match self {
            UniqueColumn::Email => "email",
            UniqueColumn::Username => "username",
        }
    }
}

/// true => a row of `kind` already holds `value` in `column`
pub async fn value_taken(
    conn: &mut SqliteConnection,
    kind: EntityKind,
    column: UniqueColumn,
    value: &str,
) -> Result<bool, sqlx::Error> {
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ? LIMIT 1)",
        kind.table(),
        column.name()
    );

    sqlx::query_scalar::<_, bool>(&sql)
        .bind(value)
        .fetch_one(conn)
        .await
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}
