use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NewUser {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "Alice@Example.com", format = "email")]
    pub email: String,
    #[schema(example = "0112345674")]
    pub cell_num: String,
    #[schema(example = "Reading")]
    pub hobby: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NewEmployee {
    #[schema(example = "bob")]
    pub username: String,
    #[schema(example = "bob@company.com", format = "email")]
    pub email: String,
    #[schema(example = "0129345678")]
    pub cell_num: String,
    #[schema(example = "Admin")]
    pub job: String,
    #[serde(default)]
    #[schema(example = "alice", nullable = true)]
    pub user_username: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct NewAllEntry {
    #[serde(default)]
    #[schema(example = 1, nullable = true)]
    pub user_id: Option<i64>,
    #[serde(default)]
    #[schema(example = 1, nullable = true)]
    pub employee_id: Option<i64>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserSummary {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "Reading")]
    pub hobby: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EmployeeSummary {
    #[schema(example = "bob")]
    pub username: String,
    #[schema(example = "Admin")]
    pub job: String,
}

#[derive(Debug, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UsernameEntry {
    #[schema(example = "alice")]
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Hello, World!")]
    pub message: String,
}
