use scraper::ElementRef;

use super::{ANCHOR, COMPANY, LOCATION, TITLE};
use crate::types::JobRecord;

/// Zero-based position of the anchor holding the listing link. The first
/// anchor of a card is a decorative one, so a card needs at least two.
pub const LINK_ANCHOR_INDEX: usize = 1;

fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_owned()
}

/// `true` when `keywords` is empty or one of them occurs in `title`,
/// ignoring case.
pub fn title_matches(title: &str, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return true;
    }
    let title = title.to_lowercase();
    keywords
        .iter()
        .any(|keyword| title.contains(&keyword.to_lowercase()))
}

fn link_url(card: ElementRef<'_>) -> Option<String> {
    card.select(&ANCHOR)
        .nth(LINK_ANCHOR_INDEX)
        .and_then(|anchor| anchor.value().attr("href"))
        .map(String::from)
}

/// Turn cards into records, keeping those whose title passes the keyword
/// filter.
///
/// Cards missing a title, company or location are skipped, as are cards
/// without a link anchor. Once `limit` records are collected the remaining
/// cards are not looked at; a `limit <= 0` keeps everything.
pub fn extract<'a>(
    cards: impl IntoIterator<Item = ElementRef<'a>>,
    keywords: &[String],
    limit: i64,
) -> Vec<JobRecord> {
    let limit = usize::try_from(limit).ok().filter(|&limit| limit > 0);
    let mut jobs = Vec::new();
    for card in cards {
        let (Some(title), Some(company), Some(location)) = (
            card.select(&TITLE).next(),
            card.select(&COMPANY).next(),
            card.select(&LOCATION).next(),
        ) else {
            continue;
        };

        let title = trimmed_text(title);
        if !title_matches(&title, keywords) {
            continue;
        }
        let Some(link) = link_url(card) else {
            log::warn!("skipping job '{}', no link found in its card", title);
            continue;
        };

        jobs.push(JobRecord {
            title,
            company: trimmed_text(company),
            location: trimmed_text(location),
            link,
        });
        if limit.map_or(false, |limit| jobs.len() >= limit) {
            break;
        }
    }
    log::debug!("extracted {} jobs", jobs.len());
    jobs
}
