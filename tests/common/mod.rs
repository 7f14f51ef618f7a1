#![allow(dead_code)]

use async_trait::async_trait;
use finn_scout::models::ListingRecord;
use finn_scout::scrapers::{FetchResponse, Fetcher, ListingObserver, SearchParams};
use finn_scout::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Serves canned responses and remembers every URL it was asked for.
/// Unknown URLs get a 404.
#[derive(Clone, Default)]
pub struct ScriptedFetcher {
    pages: Arc<Mutex<HashMap<String, FetchResponse>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, status: u16, body: impl Into<String>) {
        self.pages.lock().unwrap().insert(
            url.to_string(),
            FetchResponse {
                status,
                body: body.into(),
            },
        );
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn listing_requests(&self) -> usize {
        self.requests()
            .iter()
            .filter(|url| url.contains("/ad.html"))
            .count()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse> {
        self.requests.lock().unwrap().push(url.to_string());
        Ok(self
            .pages
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or(FetchResponse {
                status: 404,
                body: String::new(),
            }))
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    pub good: Mutex<Vec<(String, ListingRecord)>>,
    pub bad: Mutex<Vec<(String, Vec<String>)>>,
    pub inconclusive: Mutex<Vec<String>>,
}

impl ListingObserver for RecordingObserver {
    fn good_listing(&self, url: &str, record: &ListingRecord) {
        self.good.lock().unwrap().push((url.to_string(), record.clone()));
    }

    fn bad_listing(&self, url: &str, matched: &[String]) {
        self.bad.lock().unwrap().push((url.to_string(), matched.to_vec()));
    }

    fn inconclusive(&self, url: &str, _reason: &str) {
        self.inconclusive.lock().unwrap().push(url.to_string());
    }
}

pub fn listing_url(code: usize) -> String {
    format!("https://www.finn.no/realestate/lettings/ad.html?finnkode={}", code)
}

/// Result page linking to the given listing codes with relative hrefs
pub fn results_page(codes: impl IntoIterator<Item = usize>) -> String {
    let units: String = codes
        .into_iter()
        .map(|code| {
            format!(
                r#"<div class="ads__unit__content"><h2><a href="/realestate/lettings/ad.html?finnkode={}">Annonse {}</a></h2></div>"#,
                code, code
            )
        })
        .collect();
    format!("<html><body><div class=\"ads__grid\">{}</div></body></html>", units)
}

pub fn listing_page(title: &str, property_type: &str, body: &str) -> String {
    format!(
        r#"<html><body>
            <h1 class="u-t2">{}</h1>
            <span class="u-t3">11 000,-</span>
            <dl class="definition-list definition-list--inline">
                <dt>Boligtype</dt><dd>{}</dd>
                <dt>Etasje</dt><dd>2</dd>
            </dl>
            <div class="panel import-decoration"><p>{}</p></div>
        </body></html>"#,
        title, property_type, body
    )
}

pub fn good_listing() -> String {
    listing_page("Lys leilighet", "Leilighet", "Nyoppusset med balkong.")
}

pub fn bad_listing() -> String {
    listing_page("Rom ledig", "Leilighet", "Sokkelleilighet med egen inngang.")
}

/// Page URLs for `params`, as strings
pub fn page_urls(params: &SearchParams) -> Vec<String> {
    params
        .page_urls()
        .unwrap()
        .into_iter()
        .map(|u| u.to_string())
        .collect()
}
