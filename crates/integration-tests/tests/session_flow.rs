//! Session context, observers and rendering end to end.

#![allow(clippy::unwrap_used)]

use premium_vape_core::{Price, ProductId, Section};
use premium_vape_integration_tests::{renderer, session_with_log};
use premium_vape_storefront::{SessionEvent, StorefrontError};

#[test]
fn test_browse_add_and_checkout_view() {
    let (mut session, log) = session_with_log();
    let renderer = renderer();

    // Shopper lands on the catalog with a closed, empty cart.
    let landing = renderer.render_page(&session).unwrap();
    assert!(landing.contains("[Каталог]"));
    assert!(landing.contains("ROYAL Diamond"));

    session.add_to_cart(ProductId::new(1)).unwrap();
    session.add_to_cart(ProductId::new(1)).unwrap();
    session.add_to_cart(ProductId::new(2)).unwrap();

    let events = log.drain();
    assert_eq!(
        events.first(),
        Some(&SessionEvent::CartChanged {
            count: 1,
            total: Price::new(12990)
        })
    );
    assert_eq!(
        events.last(),
        Some(&SessionEvent::CartChanged {
            count: 3,
            total: Price::new(41970)
        })
    );
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, SessionEvent::CartVisibilityChanged { open: true }))
            .count(),
        1
    );

    let page = renderer.render_page(&session).unwrap();
    assert!(page.contains("Корзина (3)"));
    assert!(page.contains("Итого: 41 970 ₽"));
}

#[test]
fn test_navigation_between_sections() {
    let (mut session, log) = session_with_log();
    let renderer = renderer();

    for section in Section::ALL.into_iter().skip(1) {
        assert!(session.set_section(section));
        let page = renderer.render_page(&session).unwrap();
        assert!(page.contains(&format!("[{}]", section.label())));
    }

    let sections: Vec<Section> = log
        .drain()
        .into_iter()
        .filter_map(|e| match e {
            SessionEvent::SectionChanged { section } => Some(section),
            _ => None,
        })
        .collect();
    assert_eq!(sections, Section::ALL[1..].to_vec());
}

#[test]
fn test_unknown_product_is_client_error() {
    let (mut session, log) = session_with_log();
    let err = session.add_to_cart(ProductId::new(0)).unwrap_err();
    assert!(err.is_client_error());
    assert!(matches!(err, StorefrontError::ProductNotFound(_)));
    assert!(log.is_empty());
}

#[test]
fn test_snapshot_json() {
    let (mut session, _log) = session_with_log();
    session.add_to_cart(ProductId::new(3)).unwrap();
    session.adjust_quantity(ProductId::new(3), 2);
    session.set_section(Section::Delivery);

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["section"], "delivery");
    assert_eq!(json["cart_open"], true);
    assert_eq!(json["count"], 3);
    assert_eq!(json["total"], 3 * 18990);
    assert_eq!(json["entries"][0]["product"]["id"], 3);
}
