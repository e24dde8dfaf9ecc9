//! End-to-end storefront session: cart, flags and the best-seller
//! carousel driven through the same entry points the shell uses.

use std::sync::Arc;

use serde_json::json;
use storefront_core::catalog::{dummy_products, StaticCatalog};
use storefront_core::{CoreError, ItemsPerPage, Product, ProductId, ViewportWidth};
use storefront_lib::commands::{cart, carousel, session};
use storefront_lib::error::ErrorCode;
use storefront_lib::notify::{ToastCenter, ToastKind};
use storefront_lib::shell::ShellCommand;
use storefront_lib::state::{ConfigState, SessionState, Viewport};
use storefront_lib::widgets::BestSeller;
use storefront_lib::Storefront;

fn storefront(width: u32) -> Storefront {
    let config = ConfigState {
        initial_viewport_width: width,
        ..ConfigState::default()
    };
    Storefront::start(config)
}

fn run(storefront: &mut Storefront, line: &str) -> serde_json::Value {
    let command = line.parse::<ShellCommand>().unwrap();
    storefront.execute(command).unwrap()
}

#[test]
fn add_twice_then_remove_down_to_empty() {
    let toasts = Arc::new(ToastCenter::new());
    let mut state = SessionState::new(ConfigState::default(), &StaticCatalog, toasts.clone());

    cart::add_to_cart(&mut state, "gd46g23h").unwrap();
    let response = cart::add_to_cart(&mut state, "gd46g23h").unwrap();
    assert_eq!(response.items.quantity("gd46g23h"), 2);
    assert_eq!(response.count, 2);
    assert_eq!(response.amount_cents, 4000);

    cart::remove_from_cart(&mut state, "gd46g23h");
    let response = cart::remove_from_cart(&mut state, "gd46g23h");
    assert!(!response.items.contains("gd46g23h"));
    assert_eq!(response.count, 0);
    assert_eq!(response.amount_cents, 0);
    assert_eq!(toasts.emitted(), 4);
}

#[test]
fn count_and_amount_follow_offer_prices() {
    let mut store = storefront(1280);

    run(&mut store, "add gd46g23h");
    run(&mut store, "update ek51j12k 3");
    let cart = run(&mut store, "cart");

    assert_eq!(cart["count"], json!(4));
    assert_eq!(cart["amountCents"], json!(2000 + 3 * 11000));
    assert_eq!(cart["amountDisplay"], json!("$350.00"));
    assert_eq!(cart["items"], json!({"ek51j12k": 3, "gd46g23h": 1}));
}

#[test]
fn update_to_zero_removes_the_key() {
    let mut store = storefront(1280);
    run(&mut store, "add gd47g34h");

    let cart = run(&mut store, "update gd47g34h 0");
    assert_eq!(cart["items"], json!({}));
    assert_eq!(store.session().cart_count(), 0);
}

#[test]
fn rejected_operations_leave_cart_untouched_and_toast_an_error() {
    let mut store = storefront(1280);
    run(&mut store, "add gd46g23h");
    store.take_toast();

    let err = store
        .execute(ShellCommand::Update("gd46g23h".into(), -1))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);
    assert_eq!(store.session().cart_items().quantity("gd46g23h"), 1);
    assert_eq!(store.take_toast().map(|t| t.kind), Some(ToastKind::Error));

    let err = store.execute(ShellCommand::Add("missing".into())).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(store.session().cart_count(), 1);
}

#[test]
fn rejected_updates_keep_the_same_mapping() {
    let mut store = storefront(1280);
    run(&mut store, "add gd46g23h");
    let before = store.session().cart_items().clone();

    let err = store
        .execute("update gd46g23h 1000".parse().unwrap())
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);

    let err = store
        .execute("update missing 2".parse().unwrap())
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);

    assert!(store.session().cart_items().same_as(&before));
    assert_eq!(store.session().cart_items().quantity("gd46g23h"), 1);
    assert_eq!(store.take_toast().map(|t| t.kind), Some(ToastKind::Error));
}

#[test]
fn cart_lines_carry_list_price_and_discount_flag() {
    let mut store = storefront(1280);

    let cart = run(&mut store, "add gd46g23h");
    assert_eq!(cart["lines"][0]["listPriceCents"], json!(2500));
    assert_eq!(cart["lines"][0]["unitPriceCents"], json!(2000));
    assert_eq!(cart["lines"][0]["discounted"], json!(true));
}

#[test]
fn unvalidated_currency_decimals_still_format() {
    let mut store = Storefront::start(ConfigState {
        currency_decimals: 30,
        ..ConfigState::default()
    });

    let cart = run(&mut store, "add gd46g23h");
    assert_eq!(cart["amountDisplay"], json!("$0.2000"));
}

#[test]
fn success_toasts_use_confirmation_messages() {
    let mut store = storefront(1280);

    run(&mut store, "add gd46g23h");
    assert_eq!(store.take_toast().unwrap().message, "Added to cart");

    run(&mut store, "update gd46g23h 5");
    assert_eq!(store.take_toast().unwrap().message, "Cart Updated");

    run(&mut store, "remove gd46g23h");
    assert_eq!(store.take_toast().unwrap().message, "Removed from Cart");

    assert!(store.take_toast().is_none());
}

#[test]
fn removing_absent_id_is_a_no_op() {
    let mut store = storefront(1280);
    run(&mut store, "add gd46g23h");
    let before = store.session().cart_items().clone();

    run(&mut store, "remove never-added");
    assert!(store.session().cart_items().same_as(&before));
}

#[test]
fn flags_round_trip_through_session_commands() {
    let toasts = Arc::new(ToastCenter::new());
    let mut state = SessionState::new(ConfigState::default(), &StaticCatalog, toasts);

    session::set_show_login(&mut state, true);
    let response = session::login(&mut state, "Ada").unwrap();
    assert_eq!(response.user.as_ref().map(|u| u.name.as_str()), Some("Ada"));
    assert!(!response.show_user_login);

    let response = session::set_seller(&mut state, true);
    assert!(response.is_seller);

    let response = session::logout(&mut state);
    assert!(response.user.is_none());
    assert!(!response.is_seller);
    assert_eq!(response.currency, "$");
}

#[test]
fn carousel_pages_best_sellers_by_viewport_tier() {
    let mut store = storefront(1280);

    let response = run(&mut store, "carousel");
    assert_eq!(response["itemsPerPage"], json!("four"));
    assert_eq!(response["view"]["totalSlides"], json!(2));

    let response = run(&mut store, "resize 900");
    assert_eq!(response["itemsPerPage"], json!("three"));
    assert_eq!(response["view"]["totalSlides"], json!(3));

    let response = run(&mut store, "resize 700");
    assert_eq!(response["itemsPerPage"], json!("two"));
    assert_eq!(response["view"]["totalSlides"], json!(4));

    let products = store.best_seller().products();
    assert_eq!(products.len(), 8);
    assert!(products.iter().all(|p| p.in_stock));
    assert!(products.iter().all(|p| p.id != ProductId::new("gd49g56h")));
}

#[test]
fn carousel_navigation_wraps_and_go_to_validates() {
    let mut store = storefront(900);

    assert_eq!(run(&mut store, "prev")["view"]["current"], json!(2));
    assert_eq!(run(&mut store, "next")["view"]["current"], json!(0));
    assert_eq!(run(&mut store, "goto 1")["view"]["offsetPercent"], json!(100));

    let err = store.execute(ShellCommand::GoTo(3)).unwrap_err();
    assert_eq!(err.code, ErrorCode::CarouselError);
    assert_eq!(store.best_seller().state().current(), 1);
}

#[test]
fn tier_change_reclamps_current_slide() {
    let mut store = storefront(600);
    run(&mut store, "goto 3");

    let response = run(&mut store, "resize 1280");
    assert_eq!(response["view"]["current"], json!(1));
    assert_eq!(response["view"]["indicators"], json!([false, true]));
}

#[test]
fn empty_best_sellers_render_nothing() {
    let mut catalog: Vec<Product> = dummy_products();
    catalog.iter_mut().for_each(|p| p.in_stock = false);

    let state = SessionState::new(ConfigState::default(), &catalog, Arc::new(ToastCenter::new()));
    let viewport = Viewport::new(ViewportWidth(1280));
    let mut widget = BestSeller::mount(&state, &viewport);

    widget.next();
    widget.prev();
    assert_eq!(widget.state().current(), 0);
    assert_eq!(
        widget.go_to(0),
        Err(CoreError::SlideOutOfRange { index: 0, total: 0 })
    );

    let response = carousel::get_carousel(&widget, &viewport);
    assert!(response.view.is_none());
    assert_eq!(response.items_per_page, ItemsPerPage::Four);
}

#[test]
fn unmount_releases_viewport_subscription() {
    let state = SessionState::new(ConfigState::default(), &StaticCatalog, Arc::new(ToastCenter::new()));
    let viewport = Viewport::new(ViewportWidth(1280));

    let widget = BestSeller::mount(&state, &viewport);
    assert_eq!(viewport.subscriber_count(), 1);

    widget.unmount();
    assert_eq!(viewport.subscriber_count(), 0);
}

#[test]
fn shutdown_reports_the_final_cart() {
    let mut store = storefront(1280);
    run(&mut store, "add gd46g23h");
    run(&mut store, "add gd47g34h");

    let summary = store.shutdown();
    assert_eq!(summary.cart_count, 2);
    assert_eq!(summary.cart_amount_cents, 2000 + 3500);
}
