//! Margin-scheme sales: the auctioneer sells as an anonymous principal and
//! VAT is due on its margin only, never on the goods' full value.
//!
//! The goods leg is therefore always zero-rated and invoiced by a Fokepi
//! entity; the margin leg depends on the buyer's jurisdiction and status.

use super::decision::*;
use super::sale::SaleContext;

pub(crate) fn calculate(ctx: &SaleContext) -> VatDecision {
    let base = VatDecision {
        goods_vat_percentage: Some(ZERO_RATE),
        vat_margin_sale: true,
        ..VatDecision::new(SaleType::MarginSale)
    };

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
        let (goods, margin) = if ctx.lot_in("BEL") {
            (Some(InvoicingParty::FokepiBe), Some(MarginParty::VavatoBe))
        } else if ctx.lot_in("NLD") {
            (Some(InvoicingParty::FokepiNl), Some(MarginParty::VavatoNl))
        } else {
            (None, None)
        };
        VatDecision {
            margin_vat_percentage: Some(LUXURY_RATE),
            goods_invoiced_by: goods,
            margin_invoiced_by: margin,
            ..base
        }
    } else if ctx.change_of_goods_in_buyer_country() {
        change_of_goods_in_buyer_country(ctx, base)
    } else {
        // Intra-community supply to a business buyer: the buyer
        // self-assesses the margin VAT.
        VatDecision {
            margin_vat_percentage: Some(ZERO_RATE),
            goods_invoiced_by: Some(InvoicingParty::FokepiBe),
            margin_invoiced_by: Some(MarginParty::VavatoBe),
            vat_reversed_charge: true,
            ..base
        }
    }
}

/// Goods released in the buyer's own country. Only business buyers get
/// dedicated treatment here; a private buyer never reaches this branch
/// with any effect.
fn change_of_goods_in_buyer_country(ctx: &SaleContext, base: VatDecision) -> VatDecision {
    if ctx.buyer_is_private() {
        return base;
    }
    if ctx.lot_in("BEL") {
        VatDecision {
            margin_vat_percentage: Some(LUXURY_RATE),
            goods_invoiced_by: Some(InvoicingParty::FokepiBe),
            margin_invoiced_by: Some(MarginParty::VavatoBe),
            ..base
        }
    } else if ctx.lot_in("NLD") {
        // Invoiced from the Belgian VAT registration even though the goods
        // are in NL.
        VatDecision {
            margin_vat_percentage: Some(ZERO_RATE),
            goods_invoiced_by: Some(InvoicingParty::FokepiBe),
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
        let (goods, margin) = if ctx.lot_in("BEL") {
            (Some(InvoicingParty::FokepiBe), Some(MarginParty::VavatoBe))
        } else if ctx.lot_in("NLD") {
            (Some(InvoicingParty::FokepiNl), Some(MarginParty::VavatoNl))
        } else {
            (None, None)
        };
        VatDecision {
            margin_vat_percentage: Some(LUXURY_RATE),
            goods_invoiced_by: goods,
            margin_invoiced_by: margin,
            ..base
        }
    } else {
        VatDecision {
            margin_vat_percentage: Some(ZERO_RATE),
            goods_invoiced_by: Some(InvoicingParty::FokepiBe),
            margin_invoiced_by: Some(MarginParty::VavatoBe),
            vat_export: true,
            ..base
        }
    }
}
