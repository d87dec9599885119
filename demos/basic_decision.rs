//! Determine the VAT treatment for a few typical sales.
//!
//! Run with: `cargo run --example basic_decision`

use kavelbtw::core::*;
use kavelbtw::vat::*;
use rust_decimal_macros::dec;

fn main() {
    let engine = VatEngine::new();
    let auction = AuctionBuilder::new("Weekly industrial auction").build();
    let bid = BidBuilder::new(dec!(12_500)).build();

    // A margin-scheme car sold to a French private buyer.
    let car = LotBuilder::new("BMW 320d")
        .anonymous_sale(true)
        .margin_sale(true)
        .margin_car(true)
        .release_country("BEL")
        .build()
        .unwrap();
    let private_buyer = BuyerBuilder::new("Camille", "Laurent")
        .address(AddressBuilder::new().city("Lille").country("FRA").build())
        .build()
        .unwrap();

    let decision = engine.calculate_vat(&bid, &car, &auction, &private_buyer, DocumentSignals::default());
    print_decision("Margin car, EU private buyer", &decision);

    // The same car bought by a Dutch company: the margin is reverse-charged.
    let business_buyer = BuyerBuilder::new("Jan", "de Vries")
        .address(AddressBuilder::new().city("Breda").country("NLD").build())
        .company("De Vries Handel BV", Some("NL123456789B01".into()))
        .build()
        .unwrap();

    let decision = engine.calculate_vat(&bid, &car, &auction, &business_buyer, DocumentSignals::default());
    print_decision("Margin car, EU business buyer", &decision);

    // A disclosed-seller lot: the seller invoices the goods directly.
    let press = LotBuilder::new("Printing press")
        .release_country("NLD")
        .build()
        .unwrap();

    let decision = engine.calculate_vat(&bid, &press, &auction, &private_buyer, DocumentSignals::default());
    print_decision("Public sale, EU private buyer", &decision);
}

fn print_decision(label: &str, d: &VatDecision) {
    println!("=== {label} ===");
    println!("  type of sale:   {}", d.type_of_sale.code());
    match (d.goods_vat_percentage, d.goods_invoiced_by) {
        (Some(rate), Some(by)) => println!("  goods:          {rate} invoiced by {}", by.code()),
        (Some(rate), None) => println!("  goods:          {rate}, invoicer unset"),
        _ => println!("  goods:          unset"),
    }
    match (d.margin_vat_percentage, d.margin_invoiced_by) {
        (Some(rate), Some(by)) => println!("  margin:         {rate} invoiced by {}", by.code()),
        (Some(rate), None) => println!("  margin:         {rate}, invoicer unset"),
        _ => println!("  margin:         unset"),
    }
    println!(
        "  flags:          margin_scheme={} reverse_charge={} export={}",
        d.vat_margin_sale, d.vat_reversed_charge, d.vat_export
    );
    println!();
}
