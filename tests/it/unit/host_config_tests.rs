//! Unit tests for host configuration and product normalization.

use evo_reels::data::{
    AnchorSide, HostConfig, OverlayTemplate, PlayerShape, ProductId, ProductSet, RawProduct,
};
use evo_reels::ConfigError;
use serde_json::json;

#[test]
fn test_full_config() {
    let config = HostConfig::from_json(
        r#"{
            "videoUrl": "https://cdn.test/reel.mp4",
            "shape": "rectangle",
            "position": "left",
            "overlayTemplate": "details-panel",
            "productSet": {
                "1": {"title": "Sneaker", "video": "https://cdn.test/reel.mp4"},
                "2": {"title": "Cap"}
            }
        }"#,
    )
    .unwrap();

    let player = config.player.unwrap();
    assert_eq!(player.shape, PlayerShape::Rectangle);
    assert_eq!(player.anchor_side, AnchorSide::Left);
    assert_eq!(player.overlay_template, OverlayTemplate::DetailsPanel);
    assert_eq!(config.products.len(), 2);
    assert!(config.products.has_usable_primary());
}

#[test]
fn test_array_product_set_numbers_slots() {
    let config = HostConfig::from_value(json!({
        "videoUrl": "v.mp4",
        "products": [
            {"name": "First", "videoUrl": "v.mp4"},
            {"name": "Second"}
        ]
    }))
    .unwrap();

    assert_eq!(config.products.get(&ProductId::new("2")).unwrap().title, "Second");
}

#[test]
fn test_at_most_two_slots() {
    let set = ProductSet::from_value(&json!({
        "1": {"title": "a", "video": "v.mp4"},
        "2": {"title": "b"},
        "3": {"title": "c"}
    }));
    assert_eq!(set.len(), 2);
    assert!(set.get(&ProductId::new("3")).is_none());
}

#[test]
fn test_sale_price_formatting_and_stock_text() {
    let set = ProductSet::from_value(&json!({
        "1": {
            "title": "Sneaker",
            "video": "v.mp4",
            "price": 149,
            "sale_price": "149.00",
            "regular_price": "199.00",
            "stock_status": "instock",
            "stock_quantity": 3
        }
    }));
    let record = set.primary().unwrap();
    assert_eq!(record.display_price(), Some("149.00 199.00"));
    assert_eq!(record.stock_status_text.as_deref(), Some("In stock (3 units)"));
}

#[test]
fn test_explicit_formatted_price_wins() {
    let raw: RawProduct = serde_json::from_value(json!({
        "price": "10",
        "formattedPrice": "R$ 10,00",
        "stock_status": "outofstock"
    }))
    .unwrap();
    let record = raw.normalize(ProductId::new("1"));
    assert_eq!(record.display_price(), Some("R$ 10,00"));
    assert_eq!(record.stock_status_text.as_deref(), Some("Out of stock"));
}

#[test]
fn test_no_video_keeps_products_unusable() {
    let config = HostConfig::from_json(r#"{"productSet": {"1": {"title": "Cap"}}}"#).unwrap();
    assert!(config.player.is_none());
    assert!(!config.products.has_usable_primary());
}

#[test]
fn test_malformed_json_is_error() {
    let err = HostConfig::from_json("{ videoUrl: ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_external_source_video_takes_primary_slot() {
    let mut set = ProductSet::from_value(&json!({"1": {"title": "Cap"}}));
    assert!(!set.has_usable_primary());

    let source = |id: &ProductId| {
        (id.as_str() == "2").then(|| RawProduct {
            title: Some("Sneaker".into()),
            ..Default::default()
        })
    };
    assert_eq!(set.fill_from(&source, &[ProductId::new("1"), ProductId::new("3")]), 0);
    assert_eq!(set.fill_from(&source, &[ProductId::new("2")]), 1);
    assert_eq!(set.len(), 2);
    assert_eq!(set.secondary().unwrap().title, "Sneaker");
}
