use std::time::Duration;

use reqwest::Client;
use scraper::{ElementRef, Html};

use super::{CARD, CONTAINER};
use crate::types::{Error, Result};

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(4);

pub fn build_client() -> Result<Client> {
    let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
    Ok(client)
}

/// GET the job board page and parse it.
pub async fn fetch_document(client: &Client, url: &str) -> Result<Html> {
    log::info!("GET {}", url);
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        log::debug!("request to {} not successful, status code: {}", url, status);
        return Err(Error::RequestNotOk {
            url: url.to_owned(),
            status,
        });
    }
    let body = resp.text().await?;
    log::debug!("received {} bytes from {}", body.len(), url);
    Ok(Html::parse_document(&body))
}

/// Collect the listing cards, in document order, from the results container.
pub fn locate_cards(doc: &Html) -> Result<Vec<ElementRef<'_>>> {
    let container = doc
        .select(&CONTAINER)
        .next()
        .ok_or(Error::ContentNotFound("results container"))?;
    let cards = container.select(&CARD).collect::<Vec<_>>();
    if cards.is_empty() {
        return Err(Error::ContentNotFound("job cards"));
    }
    log::debug!("located {} job cards", cards.len());
    Ok(cards)
}
