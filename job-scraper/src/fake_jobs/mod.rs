//! Scraper for the static "Fake Python" job board.
pub mod extract;
pub mod scraper;

use lazy_static::lazy_static;
use ::scraper::Selector;

pub const JOB_BOARD_URL: &str = "https://realpython.github.io/fake-jobs/";

/// Id of the element holding every listing on the page.
pub const CONTAINER_MARKER: &str = "ResultsContainer";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("hard-coded selector must be valid css")
}

lazy_static! {
    static ref CONTAINER: Selector = selector(&format!("#{}", CONTAINER_MARKER));
    static ref CARD: Selector = selector("div.card-content");
    static ref TITLE: Selector = selector("h2.title");
    static ref COMPANY: Selector = selector("h3.company");
    static ref LOCATION: Selector = selector("p.location");
    static ref ANCHOR: Selector = selector("a");
}
