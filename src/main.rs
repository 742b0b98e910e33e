use anyhow::{bail, Context};
use paapi::prelude::*;
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let item_ids: Vec<String> = std::env::args().skip(1).collect();
    if item_ids.is_empty() {
        bail!("usage: paapi <ITEM_ID>...");
    }

    // PAAPI_ASSOCIATE_TAG, PAAPI_ACCESS_KEY, PAAPI_SECRET_KEY, optional PAAPI_MARKETPLACE
    let config = ClientConfig::from_env("PAAPI").context("loading PAAPI_* configuration")?;
    let client = ProductClient::new(config)?;

    let request = ItemLookupRequest::new(item_ids).response_group(ResponseGroup::Large);
    let response = client.item_lookup(&request).await?;
    response.raise_for_item_errors()?;

    for item in response.items::<Large>() {
        let offers: Vec<_> = item
            .offers()
            .iter()
            .map(|offer| {
                let listing = offer.offer_listing();
                json!({
                    "merchant": offer.merchant_name(),
                    "condition": offer.condition(),
                    "price": listing.price(),
                    "percentage_saved": listing.percentage_saved(),
                    "prime": listing.is_eligible_for_prime(),
                })
            })
            .collect();
        let browse_nodes: Vec<_> = item.browse_nodes().filter_map(|node| node.name()).collect();

        let snapshot = json!({
            "asin": item.asin(),
            "parent_asin": item.parent_asin(),
            "title": item.title(),
            "brand": item.brand(),
            "detail_page_url": item.detail_page_url(),
            "features": item.features(),
            "list_price": item.list_price(),
            "sales_rank": item.sales_rank(),
            "lowest_new_price": item.lowest_new_price(),
            "lowest_used_price": item.lowest_used_price(),
            "large_image": item.large_image().snapshot(),
            "links": item.item_links(),
            "offers": offers,
            "browse_nodes": browse_nodes,
        });
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}
