//! The success flag: container, title, ASIN and a real price are all required.

use pdp_extract::{extract_product_html, Options};

const URL: &str = "https://www.example.com/dp/B000TEST01";

const CONTAINER_OPEN: &str = r#"<div id="dp-container">"#;
const TITLE: &str = r#"<h1 id="title">Acme Wireless Mouse</h1>"#;
const ASIN: &str = r#"<input type="hidden" id="ASIN" value="B000TEST01">"#;

fn price(amount: &str) -> String {
    format!(
        r#"<div data-feature-name="twisterPlusWWDesktop">{{"displayPrice":"${amount}","priceAmount":{amount},"currencySymbol":"$","integerValue":"0","decimalSeparator":".","fractionalValue":"00"}}</div>"#
    )
}

fn page(container: bool, title: bool, asin: bool, price_html: &str) -> String {
    let mut body = String::new();
    if title {
        body.push_str(TITLE);
    }
    if asin {
        body.push_str(ASIN);
    }
    body.push_str(price_html);

    if container {
        format!("<html><body>{CONTAINER_OPEN}{body}</div></body></html>")
    } else {
        format!("<html><body><div id=\"dp\">{body}</div></body></html>")
    }
}

fn success_of(html: &str) -> bool {
    extract_product_html(URL, html, &Options::default()).success
}

#[test]
fn complete_page_succeeds() {
    assert!(success_of(&page(true, true, true, &price("19.99"))));
}

#[test]
fn missing_container_fails() {
    assert!(!success_of(&page(false, true, true, &price("19.99"))));
}

#[test]
fn missing_title_fails() {
    assert!(!success_of(&page(true, false, true, &price("19.99"))));
}

#[test]
fn missing_asin_fails() {
    assert!(!success_of(&page(true, true, false, &price("19.99"))));
}

#[test]
fn missing_price_fails() {
    assert!(!success_of(&page(true, true, true, "")));
}

#[test]
fn incomplete_price_blob_fails() {
    let partial = r#"<div data-feature-name="twisterPlusWWDesktop">{"displayPrice":"$19.99","priceAmount":19.99}</div>"#;
    let record = extract_product_html(URL, &page(true, true, true, partial), &Options::default());

    assert!(record.price_data.is_empty());
    assert!(!record.success);
}

#[test]
fn zero_price_fails() {
    assert!(!success_of(&page(true, true, true, &price("0.00"))));
    assert!(!success_of(&page(true, true, true, &price("0.009"))));
}

#[test]
fn one_cent_price_succeeds() {
    assert!(success_of(&page(true, true, true, &price("0.01"))));
}

#[test]
fn custom_minimum_price() {
    let options = Options {
        min_price_amount: 5.0,
        ..Options::default()
    };
    let html = page(true, true, true, &price("4.99"));

    assert!(!extract_product_html(URL, &html, &options).success);
    assert!(extract_product_html(URL, &html, &Options::default()).success);
}

#[test]
fn any_missing_piece_fails() {
    for mask in 0u8..8 {
        let (container, title, asin) = (mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
        let html = page(container, title, asin, &price("19.99"));
        assert_eq!(success_of(&html), mask == 7, "container={container} title={title} asin={asin}");
    }
}
