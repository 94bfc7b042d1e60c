pub mod schema;

use crate::client::{self, Error};

use schema::{Category, CategoryPrices, GraphingData, ItemPriceInformation};

fn catalogue_url(function: &str) -> String {
    format!("{}/m=itemdb_rs/api/catalogue/{function}", *crate::WEB_SERVICES_URL)
}

/// Letter breakdown of an item category
#[tracing::instrument(level = "trace")]
pub fn category(category_id: u32) -> Result<Option<Category>, Error> {
    tracing::trace!("Fetching category");

    client::fetch_json(&format!("{}?category={category_id}", catalogue_url("category.json")))
}

/// One page of the priced items of a category whose names start with `alpha`
///
/// Pages are 1-based and hold [`Category::ITEMS_PER_PAGE`] items each;
/// the `"#"` bucket covers the items starting with a digit
#[tracing::instrument(level = "trace", skip(alpha))]
pub fn category_prices(category_id: u32, alpha: impl AsRef<str>, page: u32) -> Result<Option<CategoryPrices>, Error> {
    let alpha = alpha.as_ref();

    if alpha.trim().is_empty() {
        return Err(Error::InvalidArgument(String::from("alpha must not be empty")));
    }

    if page == 0 {
        return Err(Error::InvalidArgument(String::from("pages are numbered from 1")));
    }

    tracing::trace!("Fetching category prices");

    let alpha = alpha.replace('#', "%23").replace(' ', "+");

    client::fetch_json(&format!("{}?category={category_id}&alpha={alpha}&page={page}", catalogue_url("items.json")))
}

/// Current price and trend details of a single item
#[tracing::instrument(level = "trace")]
pub fn item_details(item_id: u32) -> Result<Option<ItemPriceInformation>, Error> {
    tracing::trace!("Fetching item details");

    client::fetch_json(&format!("{}?item={item_id}", catalogue_url("detail.json")))
}

/// Historic price graph of a single item
#[tracing::instrument(level = "trace")]
pub fn graphing_data(item_id: u32) -> Result<Option<GraphingData>, Error> {
    tracing::trace!("Fetching graphing data");

    client::fetch_json(&format!("{}/m=itemdb_rs/api/graph/{item_id}.json", *crate::WEB_SERVICES_URL))
}
