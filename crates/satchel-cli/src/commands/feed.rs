//! Notification and news listing commands.

use anyhow::{Result, bail};
use satchel_api::{FeedClient, FeedQuery, NotificationItem};

use super::{load_config, open_session};

async fn fetch_page(category: Option<&str>) -> Result<Vec<NotificationItem>> {
    let config = load_config()?;
    let session = open_session(&config).await?;

    let Some(token) = session.token().await else {
        bail!("not logged in; run `satchel login <email> <password>` first");
    };

    let mut query = FeedQuery::now();
    if let Some(category) = category {
        query = query.with_category(category);
    }

    let page = FeedClient::new(config.api.clone())
        .fetch_notifications(&token, &query)
        .await?;

    if !page.categories.is_empty() {
        println!(
            "Categories: {}",
            page.categories
                .iter()
                .map(|c| c.title.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(page.notifications)
}

pub async fn notifications(category: Option<&str>) -> Result<()> {
    let items = fetch_page(category).await?;
    if items.is_empty() {
        println!("No notifications.");
        return Ok(());
    }
    for item in items {
        println!("[{}] {}", item.id, item.title);
        if !item.description.is_empty() {
            println!("    {}", item.description);
        }
    }
    Ok(())
}

pub async fn news() -> Result<()> {
    let items = fetch_page(None).await?;
    if items.is_empty() {
        println!("No news.");
        return Ok(());
    }
    for item in items {
        if item.date.is_empty() {
            println!("[{}] {}", item.id, item.title);
        } else {
            println!("[{}] {} ({})", item.id, item.title, item.date);
        }
        if !item.description.is_empty() {
            println!("    {}", item.description);
        }
    }
    Ok(())
}
