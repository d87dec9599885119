//! Private sales: the auctioneer still acts as an anonymous principal but
//! outside the margin scheme, so ordinary VAT applies to both the goods
//! and the margin. The two legs are invoiced by the same Vavato entity and
//! usually carry the same rate.

use rust_decimal::Decimal;

use super::decision::*;
use super::sale::SaleContext;

pub(crate) fn calculate(ctx: &SaleContext) -> VatDecision {
    let base = VatDecision::new(SaleType::PrivateSale);

    if ctx.buyer_in_eu() {
        buyer_in_eu(ctx, base)
    } else if ctx.change_of_goods_in_buyer_country() {
        change_of_goods_in_buyer_country(ctx, base)
    } else {
        buyer_outside_eu(ctx, base)
    }
}

/// Luxury lots carry the higher default rate on both legs.
fn domestic_rate(ctx: &SaleContext) -> Decimal {
    if ctx.lot.is_luxury() {
        LUXURY_RATE
    } else {
        NON_LUXURY_RATE
    }
}

/// Both legs at the same rate, invoiced by the given Vavato entity.
fn both_legs(
    base: VatDecision,
    rate: Decimal,
    goods: InvoicingParty,
    margin: MarginParty,
) -> VatDecision {
    VatDecision {
        goods_vat_percentage: Some(rate),
        goods_invoiced_by: Some(goods),
        margin_vat_percentage: Some(rate),
        margin_invoiced_by: Some(margin),
        ..base
    }
}

fn buyer_in_eu(ctx: &SaleContext, base: VatDecision) -> VatDecision {
    if ctx.buyer_is_private() {
        if ctx.lot_in("BEL") {
            both_legs(
                base,
                domestic_rate(ctx),
                InvoicingParty::VavatoBe,
                MarginParty::VavatoBe,
            )
        } else if ctx.lot_in("NLD") {
            // No luxury distinction for Dutch lots.
            both_legs(
                base,
                LUXURY_RATE,
                InvoicingParty::VavatoNl,
                MarginParty::VavatoNl,
            )
        } else {
            base
        }
    } else if ctx.change_of_goods_in_buyer_country() {
        change_of_goods_in_buyer_country(ctx, base)
    } else if ctx.lot_in("BEL") {
        if ctx.signals.export_declaration_received {
            VatDecision {
                goods_vat_percentage: Some(ZERO_RATE),
                goods_invoiced_by: Some(InvoicingParty::VavatoBe),
                margin_vat_percentage: Some(ZERO_RATE),
                margin_invoiced_by: Some(MarginParty::VavatoBe),
                vat_reversed_charge: true,
                ..base
            }
        } else {
            // The margin leg is billed at the luxury rate even for
            // non-luxury goods. Flagged with the tax owner; do not align
            // it with the goods leg.
            VatDecision {
                goods_vat_percentage: Some(domestic_rate(ctx)),
                goods_invoiced_by: Some(InvoicingParty::VavatoBe),
                margin_vat_percentage: Some(LUXURY_RATE),
                margin_invoiced_by: Some(MarginParty::VavatoBe),
                ..base
            }
        }
    } else if ctx.lot_in("NLD") {
        if ctx.signals.export_declaration_received {
            VatDecision {
                vat_reversed_charge: true,
                ..both_legs(
                    base,
                    ZERO_RATE,
                    InvoicingParty::VavatoNl,
                    MarginParty::VavatoNl,
                )
            }
        } else {
            both_legs(
                base,
                LUXURY_RATE,
                InvoicingParty::VavatoNl,
                MarginParty::VavatoNl,
            )
        }
    } else {
        base
    }
}

/// Goods released in the buyer's own country. Business buyers only; for
/// countries without a Vavato registration the sale is zero-rated with the
/// VAT shifted to the buyer.
fn change_of_goods_in_buyer_country(ctx: &SaleContext, base: VatDecision) -> VatDecision {
    if ctx.buyer_is_private() {
        return base;
    }
    if ctx.lot_in("BEL") {
        both_legs(
            base,
            domestic_rate(ctx),
            InvoicingParty::VavatoBe,
            MarginParty::VavatoBe,
        )
    } else if ctx.lot_in("NLD") {
        both_legs(
            base,
            LUXURY_RATE,
            InvoicingParty::VavatoNl,
            MarginParty::VavatoNl,
        )
    } else {
        VatDecision {
            goods_vat_percentage: Some(ZERO_RATE),
            margin_vat_percentage: Some(ZERO_RATE),
            vat_reversed_charge: true,
            ..base
        }
    }
}

fn buyer_outside_eu(ctx: &SaleContext, base: VatDecision) -> VatDecision {
    if ctx.lot_in("BEL") {
        if ctx.signals.export_documents_received {
            VatDecision {
                vat_export: true,
                ..both_legs(
                    base,
                    ZERO_RATE,
                    InvoicingParty::VavatoBe,
                    MarginParty::VavatoBe,
                )
            }
        } else {
            both_legs(
                base,
                domestic_rate(ctx),
                InvoicingParty::VavatoBe,
                MarginParty::VavatoBe,
            )
        }
    } else if ctx.lot_in("NLD") {
        if ctx.signals.export_documents_received {
            VatDecision {
                vat_export: true,
                ..both_legs(
                    base,
                    ZERO_RATE,
                    InvoicingParty::VavatoNl,
                    MarginParty::VavatoNl,
                )
            }
        } else {
            both_legs(
                base,
                LUXURY_RATE,
                InvoicingParty::VavatoNl,
                MarginParty::VavatoNl,
            )
        }
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AddressBuilder, Buyer, BuyerBuilder, GoodType, Lot, LotBuilder};
    use crate::vat::{DocumentSignals, EuRegistry};

    fn private_lot(country: &str, good_type: GoodType) -> Lot {
        LotBuilder::new("Pallet of laptops")
            .anonymous_sale(true)
            .release_country(country)
            .good_type(good_type)
            .build()
            .unwrap()
    }

    fn buyer(country: &str, business: bool) -> Buyer {
        let b = BuyerBuilder::new("Jan", "de Vries")
            .address(AddressBuilder::new().country(country).build());
        let b = if business {
            b.company("De Vries Handel BV", Some("NL123456789B01".into()))
        } else {
            b
        };
        b.build().unwrap()
    }

    fn decide(lot: &Lot, buyer: &Buyer, signals: DocumentSignals) -> VatDecision {
        let eu = EuRegistry::default();
        let ctx = SaleContext {
            lot,
            buyer,
            eu: &eu,
            signals,
        };
        calculate(&ctx)
    }

    #[test]
    fn never_margin_scheme() {
        let lot = private_lot("BEL", GoodType::Luxury);
        let d = decide(&lot, &buyer("FRA", false), Default::default());
        assert!(!d.vat_margin_sale);
        assert_eq!(d.type_of_sale, SaleType::PrivateSale);
    }

    #[test]
    fn eu_private_bel_non_luxury_uses_reduced_rate_on_both_legs() {
        let lot = private_lot("BEL", GoodType::NonLuxury);
        let d = decide(&lot, &buyer("FRA", false), Default::default());
        assert_eq!(d.goods_vat_percentage, Some(NON_LUXURY_RATE));
        assert_eq!(d.margin_vat_percentage, Some(NON_LUXURY_RATE));
        assert_eq!(d.goods_invoiced_by, Some(InvoicingParty::VavatoBe));
        assert_eq!(d.margin_invoiced_by, Some(MarginParty::VavatoBe));
    }

    #[test]
    fn eu_business_bel_non_luxury_keeps_luxury_rate_on_margin_leg() {
        let lot = private_lot("BEL", GoodType::NonLuxury);
        let d = decide(&lot, &buyer("FRA", true), Default::default());
        assert_eq!(d.goods_vat_percentage, Some(NON_LUXURY_RATE));
        assert_eq!(d.margin_vat_percentage, Some(LUXURY_RATE));
    }

    #[test]
    fn eu_business_bel_with_declaration_reverse_charges_both_legs() {
        let lot = private_lot("BEL", GoodType::NonLuxury);
        let signals = DocumentSignals {
            export_declaration_received: true,
            ..Default::default()
        };
        let d = decide(&lot, &buyer("FRA", true), signals);
        assert_eq!(d.goods_vat_percentage, Some(ZERO_RATE));
        assert_eq!(d.margin_vat_percentage, Some(ZERO_RATE));
        assert!(d.vat_reversed_charge);
        assert!(!d.vat_export);
    }

    #[test]
    fn business_change_of_goods_in_unhandled_country_shifts_vat() {
        let lot = private_lot("GER", GoodType::NonLuxury);
        let d = decide(&lot, &buyer("GER", true), Default::default());
        assert_eq!(d.goods_vat_percentage, Some(ZERO_RATE));
        assert_eq!(d.margin_vat_percentage, Some(ZERO_RATE));
        assert_eq!(d.goods_invoiced_by, None);
        assert_eq!(d.margin_invoiced_by, None);
        assert!(d.vat_reversed_charge);
    }

    #[test]
    fn non_eu_private_with_documents_is_export() {
        let lot = private_lot("NLD", GoodType::Luxury);
        let signals = DocumentSignals {
            export_documents_received: true,
            ..Default::default()
        };
        let d = decide(&lot, &buyer("PAK", false), signals);
        assert_eq!(d.goods_vat_percentage, Some(ZERO_RATE));
        assert_eq!(d.margin_vat_percentage, Some(ZERO_RATE));
        assert!(d.vat_export);
        assert!(!d.vat_reversed_charge);
    }

    #[test]
    fn non_eu_business_bel_non_luxury_uses_reduced_rate_on_both_legs() {
        // Unlike the EU branch, the non-EU business rate table has no
        // margin-leg asymmetry.
        let lot = private_lot("BEL", GoodType::NonLuxury);
        let d = decide(&lot, &buyer("USA", true), Default::default());
        assert_eq!(d.goods_vat_percentage, Some(NON_LUXURY_RATE));
        assert_eq!(d.margin_vat_percentage, Some(NON_LUXURY_RATE));
    }

    #[test]
    fn unknown_jurisdictions_fall_through_unset() {
        let lot = private_lot("GER", GoodType::Luxury);
        let d = decide(&lot, &buyer("PAK", false), Default::default());
        assert_eq!(d, VatDecision::new(SaleType::PrivateSale));
    }
}
