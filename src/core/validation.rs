use rust_decimal::Decimal;

use super::countries::is_known_country_code;
use super::error::{EngineError, ValidationError};
use super::types::*;

/// Validate the facts for a completed sale before handing them to the VAT
/// engine. Returns all findings (not just the first).
///
/// The engine itself never rejects input — an unknown or missing country
/// code silently matches no jurisdiction branch. This check is for the
/// calling system, which usually wants to surface such gaps before an
/// invoice is created.
pub fn validate_sale_facts(
    bid: &Bid,
    lot: &Lot,
    auction: &Auction,
    buyer: &Buyer,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if bid.amount <= Decimal::ZERO {
        errors.push(ValidationError::new(
            "bid.amount",
            "winning bid amount must be positive",
        ));
    }

    if lot.title.trim().is_empty() {
        errors.push(ValidationError::new("lot.title", "lot title must not be empty"));
    }

    if auction.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "auction.name",
            "auction name must not be empty",
        ));
    }

    match lot.release_country() {
        None => errors.push(ValidationError::new(
            "lot.release_location.country",
            "release country is missing; no jurisdiction rule will match",
        )),
        Some(code) if !is_known_country_code(code) => errors.push(ValidationError::new(
            "lot.release_location.country",
            format!("'{code}' is not a known ISO 3166-1 alpha-3 code"),
        )),
        Some(_) => {}
    }

    match buyer.country() {
        None => errors.push(ValidationError::new(
            "buyer.address.country",
            "buyer country is missing; no jurisdiction rule will match",
        )),
        Some(code) if !is_known_country_code(code) => errors.push(ValidationError::new(
            "buyer.address.country",
            format!("'{code}' is not a known ISO 3166-1 alpha-3 code"),
        )),
        Some(_) => {}
    }

    if let Some(company) = &buyer.company {
        if company.vat_number.as_deref().is_none_or(|v| v.trim().is_empty()) {
            errors.push(ValidationError::new(
                "buyer.company.vat_number",
                "business buyer has no VAT number on file",
            ));
        }
    }

    errors
}

/// Like [`validate_sale_facts`], but folds all findings into a single
/// [`EngineError::Validation`] for callers that just want a hard stop.
pub fn ensure_valid_sale_facts(
    bid: &Bid,
    lot: &Lot,
    auction: &Auction,
    buyer: &Buyer,
) -> Result<(), EngineError> {
    let errors = validate_sale_facts(bid, lot, auction, buyer);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(EngineError::Validation(
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::*;
    use rust_decimal_macros::dec;

    fn facts() -> (Bid, Lot, Auction, Buyer) {
        let bid = BidBuilder::new(dec!(500)).build();
        let lot = LotBuilder::new("Forklift")
            .release_country("BEL")
            .build()
            .unwrap();
        let auction = AuctionBuilder::new("Industrial clearance").build();
        let buyer = BuyerBuilder::new("An", "Peeters")
            .address(AddressBuilder::new().country("BEL").build())
            .build()
            .unwrap();
        (bid, lot, auction, buyer)
    }

    #[test]
    fn clean_facts_pass() {
        let (bid, lot, auction, buyer) = facts();
        assert!(validate_sale_facts(&bid, &lot, &auction, &buyer).is_empty());
    }

    #[test]
    fn missing_countries_reported() {
        let (bid, mut lot, auction, mut buyer) = facts();
        lot.release_location.country = None;
        buyer.address.country = None;
        let errors = validate_sale_facts(&bid, &lot, &auction, &buyer);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "lot.release_location.country"));
        assert!(errors.iter().any(|e| e.field == "buyer.address.country"));
    }

    #[test]
    fn unknown_country_code_reported() {
        let (bid, mut lot, auction, buyer) = facts();
        lot.release_location.country = Some("GER".into());
        let errors = validate_sale_facts(&bid, &lot, &auction, &buyer);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("GER"));
    }

    #[test]
    fn non_positive_bid_reported() {
        let (mut bid, lot, auction, buyer) = facts();
        bid.amount = dec!(0);
        let errors = validate_sale_facts(&bid, &lot, &auction, &buyer);
        assert!(errors.iter().any(|e| e.field == "bid.amount"));
    }

    #[test]
    fn ensure_folds_findings_into_one_error() {
        let (bid, mut lot, auction, buyer) = facts();
        lot.release_location.country = Some("XYZ".into());
        let err = ensure_valid_sale_facts(&bid, &lot, &auction, &buyer).unwrap_err();
        assert!(err.to_string().contains("XYZ"));
        assert!(ensure_valid_sale_facts(&bid, &facts().1, &auction, &buyer).is_ok());
    }

    #[test]
    fn business_buyer_without_vat_number_reported() {
        let (bid, lot, auction, mut buyer) = facts();
        buyer.company = Some(Company {
            name: "Peeters BV".into(),
            vat_number: None,
        });
        let errors = validate_sale_facts(&bid, &lot, &auction, &buyer);
        assert!(errors.iter().any(|e| e.field == "buyer.company.vat_number"));
    }
}
