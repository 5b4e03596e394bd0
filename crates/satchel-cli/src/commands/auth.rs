//! Login, logout and status commands.

use anyhow::Result;
use satchel_core::session::SessionStatus;

use super::{load_config, open_session};

pub async fn login(email: &str, password: &str) -> Result<()> {
    let config = load_config()?;
    let session = open_session(&config).await?;

    let snapshot = session.login(email, password).await?;
    let user = snapshot.user.expect("authenticated snapshot carries a user");
    println!("Logged in as {}", user.display_name());
    if !user.child_data.is_empty() {
        println!(
            "Linked children: {}",
            user.child_data
                .iter()
                .map(|child| format!("{} {}", child.child_firstname, child.child_lastname))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(())
}

pub async fn logout() -> Result<()> {
    let config = load_config()?;
    let session = open_session(&config).await?;
    session.logout().await;
    println!("Logged out.");
    Ok(())
}

pub async fn status() -> Result<()> {
    let config = load_config()?;
    let session = open_session(&config).await?;

    let snapshot = session.snapshot().await;
    match snapshot.status {
        SessionStatus::Authenticated => {
            let user = snapshot.user.expect("authenticated snapshot carries a user");
            println!("Logged in as {}", user.display_name());
            for role in &user.user_type {
                println!("Role: {}", role.name);
            }
        }
        SessionStatus::Unauthenticated => println!("Not logged in."),
        // restore() has already run, so this is unreachable in practice.
        SessionStatus::Unknown => println!("Session not restored yet."),
    }
    Ok(())
}
