use crate::{
    error::{ApiError, ApiResult},
    model::{employee::Employee, kind::EntityKind, user::User},
    models::{NewEmployee, NewUser},
    utils::db_utils::{UniqueColumn, is_foreign_key_violation, is_unique_violation, value_taken},
};
use sqlx::{SqliteConnection, SqlitePool};
use std::future::Future;
use tracing::{debug, info, instrument, warn};

/// A candidate row for a table with unique `username` and `email` columns.
pub trait Registrable {
    type Record;

    const KIND: EntityKind;

    fn username(&self) -> &str;

    fn email(&self) -> &str;

    /// Lowercases the email and tidies optional fields before the checks run.
    fn normalize(&mut self);

    fn insert(
        &self,
        conn: &mut SqliteConnection,
    ) -> impl Future<Output = Result<Self::Record, sqlx::Error>>;
}

impl Registrable for NewUser {
    type Record = User;

    const KIND: EntityKind = EntityKind::User;

    fn username(&self) -> &str {
        &self.username
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn normalize(&mut self) {
        self.email = self.email.to_lowercase();
    }

    async fn insert(&self, conn: &mut SqliteConnection) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, cell_num, hobby)
            VALUES (?, ?, ?, ?)
            RETURNING id, username, email, cell_num, hobby
            "#,
        )
        .bind(&self.username)
        .bind(&self.email)
        .bind(&self.cell_num)
        .bind(&self.hobby)
        .fetch_one(conn)
        .await
    }
}

impl Registrable for NewEmployee {
    type Record = Employee;

    const KIND: EntityKind = EntityKind::Employee;

    fn username(&self) -> &str {
        &self.username
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn normalize(&mut self) {
        self.email = self.email.to_lowercase();
        if self.user_username.as_deref().is_some_and(|u| u.trim().is_empty()) {
            self.user_username = None;
        }
    }

    async fn insert(&self, conn: &mut SqliteConnection) -> Result<Employee, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (username, email, cell_num, job, user_username)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, username, email, cell_num, job, user_username
            "#,
        )
        .bind(&self.username)
        .bind(&self.email)
        .bind(&self.cell_num)
        .bind(&self.job)
        .bind(&self.user_username)
        .fetch_one(conn)
        .await
    }
}

/// Admits `candidate` into its table or rejects it.
///
/// Email is checked before username, so a candidate colliding on both is
/// reported as a duplicate email. The pre-checks only give better messages:
/// the table's UNIQUE constraints decide, and a violation raised by the
/// insert itself (two requests racing past the checks) is reported the same
/// way as one caught up front. Nothing is written on any rejection path.
#[instrument(
    name = "register",
    skip(pool, candidate),
    fields(kind = %T::KIND, username = %candidate.username())
)]
pub async fn register<T: Registrable>(pool: &SqlitePool, mut candidate: T) -> ApiResult<T::Record> {
    validate(&candidate)?;
    candidate.normalize();

    // held until return, success or not
    let mut conn = pool.acquire().await?;

    debug!("Checking email uniqueness");
    if value_taken(&mut conn, T::KIND, UniqueColumn::Email, candidate.email()).await? {
        warn!("Rejected: email already registered");
        return Err(ApiError::DuplicateEmail(T::KIND));
    }

    debug!("Checking username uniqueness");
    if value_taken(&mut conn, T::KIND, UniqueColumn::Username, candidate.username()).await? {
        // the email may have been claimed since it was checked
        let rejection = resolve_conflict(&mut conn, &candidate).await?;
        warn!(%rejection, "Rejected: conflicting row exists");
        return Err(rejection);
    }

    let record = insert_or_conflict(&mut conn, &candidate).await?;
    info!("Created");

    Ok(record)
}

/// Inserts a normalized candidate, translating constraint failures into
/// caller-facing rejections.
pub async fn insert_or_conflict<T: Registrable>(
    conn: &mut SqliteConnection,
    candidate: &T,
) -> ApiResult<T::Record> {
    match candidate.insert(conn).await {
        Ok(record) => Ok(record),
        Err(e) if is_unique_violation(&e) => {
            warn!(error = %e, "Insert lost a uniqueness race");
            Err(resolve_conflict(conn, candidate).await?)
        }
        Err(e) if is_foreign_key_violation(&e) => {
            warn!(error = %e, "Insert references a missing row");
            Err(ApiError::Validation("Referenced user does not exist".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Works out which unique column a candidate collides on, email first.
async fn resolve_conflict<T: Registrable>(
    conn: &mut SqliteConnection,
    candidate: &T,
) -> Result<ApiError, sqlx::Error> {
    if value_taken(conn, T::KIND, UniqueColumn::Email, candidate.email()).await? {
        return Ok(ApiError::DuplicateEmail(T::KIND));
    }
    Ok(ApiError::DuplicateUsername)
}

fn validate<T: Registrable>(candidate: &T) -> ApiResult<()> {
    if candidate.username().trim().is_empty() {
        return Err(ApiError::Validation("username must not be empty".to_string()));
    }
    if candidate.email().trim().is_empty() {
        return Err(ApiError::Validation("email must not be empty".to_string()));
    }
    Ok(())
}
