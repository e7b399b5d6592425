use anyhow::{Context, Result, bail};
use echoboard_application::Store;
use echoboard_core::notification::NotificationKind;

/// Prints the current state as pretty JSON.
pub fn print(store: &Store) -> Result<()> {
    let json =
        serde_json::to_string_pretty(&store.state()).context("Failed to serialize state")?;
    println!("{}", json);
    Ok(())
}

pub fn dispatch(store: &Store, raw: &str) -> Result<()> {
    let applied = store
        .dispatch_json(raw)
        .context("Action must be a JSON object with a \"type\" field")?;
    if !applied {
        bail!("Action was not recognized; state left unchanged");
    }
    print(store)
}

pub fn invalidate(store: &Store) -> Result<()> {
    store.invalidate_projects();
    print(store)
}

// Banners are not persisted, so these only show the transition.
pub fn notify(store: &Store, kind: NotificationKind, text: String) -> Result<()> {
    match kind {
        NotificationKind::Error => store.report_error(text),
        NotificationKind::Success => store.report_success(text),
    }
    print(store)
}

pub fn dismiss(store: &Store, kind: NotificationKind) -> Result<()> {
    store.dismiss(kind);
    print(store)
}

pub fn color(store: &Store) {
    println!("{}", store.state().profile_color());
}
