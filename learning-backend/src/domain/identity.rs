// src/domain/identity.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// アクセストークンに埋め込まれる利用者情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
}
