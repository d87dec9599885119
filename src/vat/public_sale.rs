//! Public sales: the seller is disclosed and invoices the goods leg
//! directly at the zero rate; the auctioneer only ever bills its own
//! margin. A margin-flagged lot skips the seller leg entirely and gets
//! margin-scheme treatment on the margin alone.

use super::decision::*;
use super::sale::SaleContext;

pub(crate) fn calculate(ctx: &SaleContext) -> VatDecision {
    let base = VatDecision::new(SaleType::PublicSale);

    if ctx.lot.margin_sale {
        margin_scheme(ctx, base)
    } else {
        let base = seller_leg(base);
        buyer_leg(ctx, base)
    }
}

/// Margin-flagged public lot: goods leg untouched, margin zero-rated under
/// the margin scheme.
fn margin_scheme(ctx: &SaleContext, base: VatDecision) -> VatDecision {
    let margin = if ctx.lot_in("BEL") {
        Some(MarginParty::VavatoBe)
    } else if ctx.lot_in("NLD") {
        Some(MarginParty::VavatoNl)
    } else {
        None
    };
    VatDecision {
        margin_vat_percentage: Some(ZERO_RATE),
        margin_invoiced_by: margin,
        vat_margin_sale: true,
        ..base
    }
}

/// The disclosed seller always invoices the goods at the zero rate.
fn seller_leg(base: VatDecision) -> VatDecision {
    VatDecision {
        goods_vat_percentage: Some(ZERO_RATE),
        goods_invoiced_by: Some(InvoicingParty::Seller),
        ..base
    }
}

fn buyer_leg(ctx: &SaleContext, base: VatDecision) -> VatDecision {
    if ctx.buyer_in_eu() {
        buyer_in_eu(ctx, base)
    } else if ctx.change_of_goods_in_buyer_country() {
        change_of_goods_in_buyer_country(ctx, base)
    } else {
        buyer_outside_eu(ctx, base)
    }
}

fn buyer_in_eu(ctx: &SaleContext, base: VatDecision) -> VatDecision {
    if ctx.buyer_is_private() {
        let margin = if ctx.lot_in("BEL") {
            Some(MarginParty::VavatoBe)
        } else if ctx.lot_in("NLD") {
            Some(MarginParty::VavatoNl)
        } else {
            None
        };
        VatDecision {
            margin_vat_percentage: Some(LUXURY_RATE),
            margin_invoiced_by: margin,
            ..base
        }
    } else if ctx.change_of_goods_in_buyer_country() {
        change_of_goods_in_buyer_country(ctx, base)
    } else {
        VatDecision {
            margin_vat_percentage: Some(ZERO_RATE),
            margin_invoiced_by: Some(MarginParty::VavatoBe),
            vat_reversed_charge: true,
            ..base
        }
    }
}

/// Goods released in the buyer's own country; business buyers only.
fn change_of_goods_in_buyer_country(ctx: &SaleContext, base: VatDecision) -> VatDecision {
    if ctx.buyer_is_private() {
        return base;
    }
    if ctx.lot_in("BEL") {
        VatDecision {
            margin_vat_percentage: Some(LUXURY_RATE),
            margin_invoiced_by: Some(MarginParty::VavatoBe),
            ..base
        }
    } else if ctx.lot_in("NLD") {
        // Invoiced from the Belgian VAT registration even though the goods
        // are in NL.
        VatDecision {
            margin_vat_percentage: Some(ZERO_RATE),
            margin_invoiced_by: Some(MarginParty::VavatoBe),
            vat_reversed_charge: true,
            ..base
        }
    } else {
        base
    }
}

fn buyer_outside_eu(ctx: &SaleContext, base: VatDecision) -> VatDecision {
    if ctx.buyer_is_private() {
        let margin = if ctx.lot_in("BEL") {
            Some(MarginParty::VavatoBe)
        } else if ctx.lot_in("NLD") {
            Some(MarginParty::VavatoNl)
        } else {
            None
        };
        VatDecision {
            margin_vat_percentage: Some(LUXURY_RATE),
            margin_invoiced_by: margin,
            ..base
        }
    } else {
        VatDecision {
            margin_vat_percentage: Some(ZERO_RATE),
            margin_invoiced_by: Some(MarginParty::VavatoBe),
            vat_export: true,
            ..base
        }
    }
}
