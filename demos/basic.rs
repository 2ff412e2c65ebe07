//! Basic usage example for pdp-extract.
//!
//! Run with: `cargo run --example basic`

use pdp_extract::{dom, extract_product, extract_product_with_options, Options};

fn main() -> Result<(), pdp_extract::Error> {
    let html = r#"
        <!DOCTYPE html>
        <html lang="en">
        <body>
            <div id="dp-container">
                <div data-feature-name="desktop-breadcrumbs">Home › Kitchen › Coffee Grinders</div>
                <h1 id="title"><span id="productTitle">Acme Burr Coffee Grinder</span></h1>
                <div data-feature-name="bylineInfo"><a href="/stores/Acme?ref_=bl">Visit the Acme Store</a></div>
                <div data-feature-name="twisterPlusWWDesktop">
                    {"displayPrice":"$49.00","priceAmount":49.00,"currencySymbol":"$",
                     "integerValue":"49","decimalSeparator":".","fractionalValue":"00"}
                </div>
                <div data-feature-name="shipFromSoldByAbbreviated">Ships from: Amazon.com Sold by: Acme</div>
                <span data-hook="rating-out-of-text">4.7 out of 5</span>
                <span data-hook="total-review-count">1,024 global ratings</span>
                <ul id="histogramTable">
                    <li><div class="a-meter" aria-valuenow="81"></div></li>
                    <li><div class="a-meter" aria-valuenow="11"></div></li>
                    <li><div class="a-meter" aria-valuenow="4"></div></li>
                    <li><div class="a-meter" aria-valuenow="2"></div></li>
                    <li><div class="a-meter" aria-valuenow="2"></div></li>
                </ul>
                <input type="hidden" id="ASIN" value="B000GRIND1">
            </div>
        </body>
        </html>
    "#;

    let doc = dom::parse(html);

    // Extraction with defaults
    println!("=== Default Record ===\n");
    let record = extract_product("https://www.example.com/dp/B000GRIND1?psc=1", &doc);

    println!("Success: {}", record.success);
    println!("Title: {:?}", record.title);
    println!("ASIN: {:?}", record.asin);
    println!("Brand: {:?} ({:?})", record.byline_text, record.byline_link);
    println!("Price: {:?}", record.price_data.amount());
    println!("Breadcrumbs: {:?}", record.breadcrumbs);

    // Extraction with the review histogram enabled
    println!("\n=== Record with Histogram ===\n");
    let options = Options {
        include_review_histogram: true,
        ..Options::default()
    };
    let record = extract_product_with_options("https://www.example.com/dp/B000GRIND1", &doc, &options);
    println!("{}", record.to_json_pretty()?);

    Ok(())
}
