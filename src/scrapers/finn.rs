use crate::classifier::{compose_text, Classification, BANNED_TERMS};
use crate::error::{Result, ScoutError};
use crate::models::{ListingIdentity, ListingRecord};
use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use url::Url;

/// Attribute label holding the property type ("Leilighet", "Hybel", ...)
pub const PROPERTY_TYPE: &str = "Boligtype";

/// A listing page reduced to its fields and filter outcome
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedListing {
    pub record: ListingRecord,
    pub classification: Classification,
}

/// Extracts listing links from result pages and fields from listing pages
pub struct FinnParser {
    advert_unit: Selector,
    advert_link: Selector,
    title: Selector,
    price: Selector,
    info_box: Selector,
    info_label: Selector,
    info_value: Selector,
    body_box: Selector,
    paragraph: Selector,
    banned_terms: Vec<String>,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScoutError::Selector(format!("{}: {}", css, e)))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

impl FinnParser {
    /// Create a parser filtering on the built-in banned terms
    pub fn new() -> Result<Self> {
        Self::with_banned_terms(BANNED_TERMS.iter().map(|t| t.to_string()).collect())
    }

    pub fn with_banned_terms(banned_terms: Vec<String>) -> Result<Self> {
        Ok(Self {
            advert_unit: selector("div.ads__unit__content")?,
            advert_link: selector("a[href]")?,
            title: selector("h1.u-t2")?,
            price: selector("span.u-t3")?,
            info_box: selector("dl.definition-list.definition-list--inline")?,
            info_label: selector("dt")?,
            info_value: selector("dd")?,
            body_box: selector("div.panel.import-decoration")?,
            paragraph: selector("p")?,
            banned_terms,
        })
    }

    /// Listing identities on a result page, in document order.
    /// Relative links are resolved against `page_url`.
    pub fn extract_identities(&self, html: &str, page_url: &Url) -> Vec<ListingIdentity> {
        let document = Html::parse_document(html);

        document
            .select(&self.advert_unit)
            .filter_map(|unit| {
                let href = unit
                    .select(&self.advert_link)
                    .next()
                    .and_then(|a| a.value().attr("href"));
                let Some(href) = href else {
                    warn!("Advert without a link on {}", page_url);
                    return None;
                };
                match page_url.join(href) {
                    Ok(url) => Some(url.to_string()),
                    Err(e) => {
                        warn!("Unusable advert link {:?}: {}", href, e);
                        None
                    }
                }
            })
            .collect()
    }

    /// Extract the listing fields and run the banned-term filter.
    ///
    /// Title and price are required. Anything else missing only makes the
    /// classification inconclusive.
    pub fn parse_listing(&self, url: &str, html: &str) -> Result<ParsedListing> {
        let document = Html::parse_document(html);

        let title = document
            .select(&self.title)
            .next()
            .map(element_text)
            .ok_or_else(|| ScoutError::Extraction {
                url: url.to_string(),
                field: "title",
            })?;

        let price = document
            .select(&self.price)
            .next()
            .map(|el| clean_price(&element_text(el)))
            .ok_or_else(|| ScoutError::Extraction {
                url: url.to_string(),
                field: "price",
            })?;

        let attributes = document
            .select(&self.info_box)
            .next()
            .map(|info_box| self.attribute_table(info_box));

        // Only the first panel counts, even when a later one has text
        let body = document
            .select(&self.body_box)
            .next()
            .and_then(|body_box| body_box.select(&self.paragraph).next())
            .map(element_text);

        let classification = match classification_text(attributes.as_ref(), &title, body.as_deref()) {
            Ok(text) => Classification::of_text(&text, &self.banned_terms),
            Err(reason) => {
                debug!("Classification inconclusive for {}: {}", url, reason);
                Classification::Inconclusive {
                    reason: reason.to_string(),
                }
            }
        };

        Ok(ParsedListing {
            record: ListingRecord {
                title,
                price,
                attributes: attributes.unwrap_or_default(),
                body_text: body.unwrap_or_default(),
            },
            classification,
        })
    }

    // Labels and values are sibling lists; pair them positionally.
    fn attribute_table(&self, info_box: ElementRef<'_>) -> IndexMap<String, String> {
        let labels = info_box.select(&self.info_label).map(element_text);
        let values = info_box.select(&self.info_value).map(element_text);
        labels.zip(values).collect()
    }
}

fn classification_text(
    attributes: Option<&IndexMap<String, String>>,
    title: &str,
    body: Option<&str>,
) -> std::result::Result<String, &'static str> {
    let attributes = attributes.ok_or("no attribute table")?;
    let property_type = attributes
        .get(PROPERTY_TYPE)
        .ok_or("no property type attribute")?;
    let body = body.ok_or("no body paragraph")?;
    if body.is_empty() {
        return Err("empty body paragraph");
    }
    Ok(compose_text(property_type, title, body))
}

/// "12 500,-" → "12500"
pub fn clean_price(raw: &str) -> String {
    raw.replace(",-", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}
