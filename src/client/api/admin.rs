use crate::client::api::{decode, get_text, post_json, ApiError};
use crate::client::config::ApiConfig;
use crate::model::api::{Ack, UsersResponse};
use crate::model::user::AdminUser;

pub async fn get_users(config: &ApiConfig) -> Result<Vec<AdminUser>, ApiError> {
    let url = config.endpoint("routes/admin/get_users.php");
    let body = get_text(&url).await?;
    Ok(decode::<UsersResponse>(&body)?.users)
}

pub async fn change_role(config: &ApiConfig, uuid: &str, role: &str) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct ChangeRole {
        uuid: String,
        role: String,
    }

    let url = config.endpoint("routes/admin/change_role.php");
    let body = post_json(
        &url,
        &ChangeRole {
            uuid: uuid.to_lowercase(),
            role: role.to_string(),
        },
    )
    .await?;
    decode::<Ack>(&body).map(|_| ())
}

pub async fn delete_user(config: &ApiConfig, uuid: &str) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct DeleteUser {
        uuid: String,
    }

    let url = config.endpoint("routes/admin/delete_user.php");
    let body = post_json(
        &url,
        &DeleteUser {
            uuid: uuid.to_lowercase(),
        },
    )
    .await?;
    decode::<Ack>(&body).map(|_| ())
}
