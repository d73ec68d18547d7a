use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "username": "bob",
        "email": "bob@company.com",
        "cell_num": "0129345678",
        "job": "Admin",
        "user_username": null
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "bob")]
    pub username: String,

    #[schema(example = "bob@company.com")]
    pub email: String,

    #[schema(example = "0129345678")]
    pub cell_num: String,

    #[schema(example = "Admin")]
    pub job: String,

    /// Optional pointer to `users.username`.
    #[schema(example = "alice", nullable = true)]
    pub user_username: Option<String>,
}
