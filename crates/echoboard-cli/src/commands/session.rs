use anyhow::{Context, Result};
use echoboard_application::Store;
use echoboard_core::user::UserProfile;
use tracing::info;

pub fn login(store: &Store, token: String, raw_user: &str) -> Result<()> {
    let user: UserProfile =
        serde_json::from_str(raw_user).context("User must be a JSON profile object")?;
    info!(user_id = user.id, "Storing session");
    store.login(token, user);
    super::state::print(store)
}

pub fn logout(store: &Store) -> Result<()> {
    store.logout();
    info!("Session cleared");
    super::state::print(store)
}
