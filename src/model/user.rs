use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "username": "alice",
        "email": "alice@example.com",
        "cell_num": "0112345674",
        "hobby": "Reading"
    })
)]
pub struct User {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "alice")]
    pub username: String,

    /// Always stored lowercased.
    #[schema(example = "alice@example.com")]
    pub email: String,

    #[schema(example = "0112345674")]
    pub cell_num: String,

    #[schema(example = "Reading")]
    pub hobby: String,
}
