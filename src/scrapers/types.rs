use crate::error::Result;
use serde::{Deserialize, Serialize};
use url::Url;

pub const FINN_LETTINGS_SEARCH: &str = "https://www.finn.no/realestate/lettings/search.html";

/// Search parameters for the lettings query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchParams {
    /// Search page the query parameters are appended to
    pub base_url: String,
    /// Radius around the center, in meters
    pub radius: u32,
    /// Minimum monthly rent (NOK)
    pub min_price: u32,
    /// Maximum monthly rent (NOK)
    pub max_price: u32,
    /// Minimum living area in square meters
    pub min_area: u32,
    pub latitude: f64,
    pub longitude: f64,
    /// Adverts requested per result page
    pub page_size: usize,
    /// Pages `1..max_pages` are scanned, so at most `max_pages - 1`
    pub max_pages: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            base_url: FINN_LETTINGS_SEARCH.to_string(),
            radius: 3000,
            min_price: 7000,
            max_price: 15500,
            min_area: 34,
            latitude: 59.970230202946425,
            longitude: 10.782417360565233,
            page_size: 50,
            max_pages: 4,
        }
    }
}

impl SearchParams {
    /// The search query without paging parameters
    pub fn seed_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.query_pairs_mut()
            .append_pair("area_from", &self.min_area.to_string())
            .append_pair("lat", &self.latitude.to_string())
            .append_pair("lon", &self.longitude.to_string())
            .append_pair("price_from", &self.min_price.to_string())
            .append_pair("price_to", &self.max_price.to_string())
            .append_pair("radius", &self.radius.to_string());
        Ok(url)
    }

    /// Result page URLs in the order they are crawled.
    ///
    /// The total hit count is unknown up front, so only the first
    /// `max_pages - 1` pages are ever requested.
    pub fn page_urls(&self) -> Result<Vec<Url>> {
        let seed = self.seed_url()?;
        Ok((1..self.max_pages)
            .map(|page| {
                let mut url = seed.clone();
                url.query_pairs_mut()
                    .append_pair("rows", &self.page_size.to_string())
                    .append_pair("sort", "1")
                    .append_pair("page", &page.to_string());
                url
            })
            .collect())
    }
}
