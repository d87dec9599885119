//! Supply a deployment-specific EU membership table.
//!
//! The engine treats EU membership as configuration: a platform whose
//! address data uses its own three-letter codes (say `GER` for Germany)
//! loads that list instead of the ISO default.
//!
//! Run with: `cargo run --example custom_eu_registry`

use kavelbtw::core::*;
use kavelbtw::vat::*;
use rust_decimal_macros::dec;

fn main() {
    // Typically deserialized from configuration; a JSON array of codes.
    let registry: EuRegistry = serde_json::from_str(
        r#"["AUT","BEL","BGR","CYP","CZE","DNK","ESP","EST","FIN","FRA","GER","GRC",
            "HRV","HUN","IRL","ITA","LTU","LUX","LVA","MLT","NLD","POL","PRT","ROU",
            "SVK","SVN","SWE"]"#,
    )
    .unwrap();
    let engine = VatEngine::with_registry(registry);

    let lot = LotBuilder::new("BMW 320d")
        .anonymous_sale(true)
        .margin_sale(true)
        .margin_car(true)
        .release_country("BEL")
        .build()
        .unwrap();
    let auction = AuctionBuilder::new("Fleet clearance").build();
    let bid = BidBuilder::new(dec!(12_500)).build();

    // With the custom table a German business buyer is an EU buyer, so the
    // cross-border margin is reverse-charged rather than exported.
    let buyer = BuyerBuilder::new("Sabine", "Krause")
        .address(AddressBuilder::new().city("Aachen").country("GER").build())
        .company("Krause GmbH", Some("DE123456789".into()))
        .build()
        .unwrap();

    let decision = engine.calculate_vat(&bid, &lot, &auction, &buyer, DocumentSignals::default());
    println!("type of sale:    {}", decision.type_of_sale.code());
    println!("goods rate:      {:?}", decision.goods_vat_percentage);
    println!("margin rate:     {:?}", decision.margin_vat_percentage);
    println!("reverse charge:  {}", decision.vat_reversed_charge);
    println!("export:          {}", decision.vat_export);
}
