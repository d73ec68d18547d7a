use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row of the `all` junction table. Both sides are optional; nothing ties an
/// entry to a user/employee pair beyond the foreign keys themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AllEntry {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = 1, nullable = true)]
    pub user_id: Option<i64>,

    #[schema(example = 1, nullable = true)]
    pub employee_id: Option<i64>,
}
