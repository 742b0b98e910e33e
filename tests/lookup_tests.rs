mod common;

use common::fixture;
use paapi::prelude::*;

#[cfg(test)]
mod envelope_tests {
    use super::*;

    #[test]
    fn test_envelope_fault_aborts_parse() {
        let err = ItemLookupResponse::parse(&fixture("envelope_fault.xml")).unwrap_err();
        let PaapiError::EnvelopeFault(fault) = &err else {
            panic!("expected an envelope fault, got {err:?}");
        };
        assert_eq!(fault.code, "AWS.InvalidParameterValue");
        assert_eq!(fault.message, "Foo");
        assert_eq!(
            fault.request_id.as_deref(),
            Some("0f6e8c7d-aaaa-bbbb-cccc-ddddeeeeffff")
        );
        assert_eq!(fault.to_string(), "AWS.InvalidParameterValue - Foo");
    }

    #[test]
    fn test_empty_items_is_not_an_error() {
        let response = ItemLookupResponse::parse(&fixture("empty_items.xml")).unwrap();
        assert!(response.items::<Large>().is_empty());
        assert_eq!(response.item_count(), 0);
        assert!(response.errors().is_empty());
        assert!(response.raise_for_item_errors().is_ok());
        assert_eq!(response.request().item_ids, vec!["B000000000"]);
        assert_eq!(
            response.operation_request().request_processing_time,
            Some(0.0012)
        );
    }

    #[test]
    fn test_malformed_body() {
        for body in [&b"<html><body>Bad Gateway"[..], b"", b"{\"json\": true}"] {
            let err = ItemLookupResponse::parse(body).unwrap_err();
            assert!(matches!(err, PaapiError::MalformedResponse(_)), "{err:?}");
        }
    }

    #[test]
    fn test_item_fault_leaves_valid_items_usable() {
        let response = ItemLookupResponse::parse(&fixture("item_lookup_large.xml")).unwrap();

        let errors = response.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "AWS.InvalidParameterValue");
        assert_eq!(errors[0].item_id.as_deref(), Some("B00INVALID"));

        let err = response.raise_for_item_errors().unwrap_err();
        assert_eq!(err.fault(), Some(&errors[0]));

        let asins: Vec<_> = response
            .items::<Item>()
            .iter()
            .map(|item| item.asin())
            .collect();
        assert_eq!(asins, vec![Some("B00FRIQEDW"), Some("0316769177")]);
    }

    #[test]
    fn test_request_and_operation_echo() {
        let response = ItemLookupResponse::parse(&fixture("item_lookup_large.xml")).unwrap();

        let request = response.request();
        assert_eq!(request.is_valid, Some(true));
        assert_eq!(request.id_type.as_deref(), Some("ASIN"));
        assert_eq!(request.item_ids.len(), 3);
        assert_eq!(request.response_groups, vec!["Large"]);
        assert!(request.has_errors());

        let op = response.operation_request();
        assert_eq!(
            op.request_id.as_deref(),
            Some("5a3b1c2d-1111-2222-3333-444455556666")
        );
        assert_eq!(op.arguments.len(), 8);
        let operation = op
            .arguments
            .iter()
            .find(|arg| arg.name.as_deref() == Some("Operation"))
            .and_then(|arg| arg.value.as_deref());
        assert_eq!(operation, Some("ItemLookup"));
    }
}

#[cfg(test)]
mod large_shape_tests {
    use super::*;

    #[test]
    fn test_identity_links_and_attributes() {
        let response = ItemLookupResponse::parse(&fixture("item_lookup_large.xml")).unwrap();
        let items = response.items::<Large>();
        let knife = &items[0];

        assert_eq!(knife.parent_asin(), Some("B00FRIQEDW"));
        assert_eq!(
            knife.detail_page_url(),
            Some("https://www.amazon.com/dp/B00FRIQEDW")
        );
        assert_eq!(knife.item_links().len(), 2);

        assert_eq!(knife.title(), Some("Acme Chef Knife, 8 Inch"));
        assert_eq!(knife.brand(), Some("Acme & Sons"));
        assert_eq!(knife.model(), Some("AC-100"));
        assert_eq!(knife.mpn(), Some("AC100-BLK"));
        assert_eq!(knife.ean_list(), vec!["0885909950805", "0885909950812"]);
        assert_eq!(knife.upc(), Some("885909950805"));
        assert_eq!(
            knife.features(),
            vec!["Stainless steel blade", "Dishwasher safe"]
        );
        assert_eq!(knife.list_price(), Some(1234.56));
        assert_eq!(knife.is_adult_product(), Some(false));
        assert_eq!(knife.number_of_items(), Some(1));
        assert_eq!(knife.release_date(), Some("2013-10-01"));
        assert_eq!(knife.author(), None);

        let item_dims = knife.item_dimensions();
        assert_eq!(item_dims.height(), Some(1250));
        assert_eq!(item_dims.length(), Some(400));
        assert_eq!(item_dims.width(), Some(300));
        assert_eq!(item_dims.weight(), Some(85));

        let package_dims = knife.package_dimensions();
        assert_eq!(package_dims.height(), Some(500));
        assert_eq!(package_dims.length(), None);
        assert_eq!(package_dims.weight(), Some(120));
    }

    #[test]
    fn test_offer_summary_offers_and_rank() {
        let response = ItemLookupResponse::parse(&fixture("item_lookup_large.xml")).unwrap();
        let items = response.items::<Large>();
        let knife = &items[0];

        assert_eq!(knife.sales_rank(), Some(2811));
        assert_eq!(knife.lowest_new_price(), Some(999.0));
        assert_eq!(knife.lowest_used_price(), Some(850.0));
        assert_eq!(knife.lowest_refurbished_price(), None);
        assert_eq!(knife.total_new(), Some(12));
        assert_eq!(knife.total_collectible(), Some(0));

        assert_eq!(knife.total_offers(), Some(1));
        let offers = knife.offers();
        assert_eq!(offers.len(), 1);
        let listing = offers[0].offer_listing();
        assert_eq!(listing.price(), Some(999.0));
        assert_eq!(listing.formatted_price(), Some("$999.00"));
        assert_eq!(listing.amount_saved(), Some(235.56));
        assert_eq!(listing.percentage_saved(), Some(19));
        assert_eq!(listing.availability(), Some("Usually ships in 24 hours"));
        assert_eq!(listing.availability_minimum_hours(), Some(0));
        assert_eq!(listing.is_eligible_for_prime(), Some(true));
        assert_eq!(listing.is_eligible_for_super_saver_shipping(), Some(true));
    }

    #[test]
    fn test_images_and_image_sets() {
        let response = ItemLookupResponse::parse(&fixture("item_lookup_large.xml")).unwrap();
        let items = response.items::<Large>();
        let knife = &items[0];

        assert_eq!(
            knife.medium_image().url(),
            Some("https://images.example.com/I/41medium.jpg")
        );
        assert_eq!(knife.small_image().width(), Some(56));
        assert!(!knife.swatch_image().is_present());

        let primary = knife.image_set_primary();
        assert_eq!(
            primary.thumbnail_image().url(),
            Some("https://images.example.com/I/p-thumb.jpg")
        );
        assert_eq!(primary.large_image().height(), Some(500));
        assert_eq!(primary.medium_image().url(), None);

        let variant = knife.image_set_variant();
        assert_eq!(
            variant.swatch_image().url(),
            Some("https://images.example.com/I/v-swatch.jpg")
        );
        assert!(!variant.tiny_image().is_present());

        let snapshot = knife.large_image().snapshot().unwrap();
        assert_eq!(snapshot.height, Some(500));
        assert!(knife.tiny_image().snapshot().is_none());
    }

    #[test]
    fn test_browse_node_chain_leaf_to_root() {
        let response = ItemLookupResponse::parse(&fixture("item_lookup_large.xml")).unwrap();
        let items = response.items::<Large>();

        let names: Vec<_> = items[0].browse_nodes().filter_map(|n| n.name()).collect();
        assert_eq!(names, vec!["Chef's Knives", "Kitchen Knives", "Home & Kitchen"]);

        let root = items[0].browse_nodes().last().unwrap();
        assert_eq!(root.browse_node_id(), Some("1055398"));
        assert_eq!(root.is_category_root(), Some(true));
    }

    #[test]
    fn test_browse_node_cycle_terminates() {
        let response = ItemLookupResponse::parse(&fixture("browse_node_cycle.xml")).unwrap();
        let items = response.items::<Large>();
        let ids: Vec<_> = items[0]
            .browse_nodes()
            .filter_map(|n| n.browse_node_id())
            .collect();
        assert_eq!(ids, vec!["10", "20"]);
    }

    #[test]
    fn test_sparse_item_answers_with_absence() {
        let response = ItemLookupResponse::parse(&fixture("item_lookup_large.xml")).unwrap();
        let items = response.items::<Large>();
        let book = &items[1];

        assert_eq!(book.author(), Some("J. D. Salinger"));
        assert_eq!(book.publication_date(), Some("1991-05-01"));
        assert_eq!(book.parent_asin(), None);
        assert_eq!(book.sales_rank(), None);
        assert_eq!(book.lowest_new_price(), None);
        assert_eq!(book.total_new(), Some(0));
        assert_eq!(book.total_offers(), Some(0));
        assert!(book.offers().is_empty());
        assert!(book.item_links().is_empty());
        assert!(book.features().is_empty());
        assert!(book.image_sets().is_empty());
        assert!(!book.image_set_primary().large_image().is_present());
        assert!(!book.item_dimensions().is_present());
        assert_eq!(book.item_dimensions().height(), None);
        assert_eq!(book.browse_nodes().count(), 0);
    }
}

#[cfg(test)]
mod shape_selection_tests {
    use super::*;

    #[test]
    fn test_same_response_under_different_shapes() {
        let response = ItemLookupResponse::parse(&fixture("item_lookup_large.xml")).unwrap();

        let small = response.items::<Small>();
        assert_eq!(small[1].title(), Some("The Catcher in the Rye"));

        let medium = response.items::<Medium>();
        assert_eq!(medium[0].sales_rank(), Some(2811));

        let offer_full = response.items::<OfferFull>();
        assert_eq!(offer_full[0].offers().len(), 1);
        assert_eq!(offer_full[0].lowest_used_price(), Some(850.0));
    }
}
