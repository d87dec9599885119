//! The VAT determination engine.
//!
//! Classifies a completed auction sale (a winning bid on a lot) into a tax
//! treatment: which VAT rate applies to the goods and to the auctioneer's
//! margin, who legally invoices each leg, and whether margin-scheme,
//! reverse-charge, or export treatment applies.
//!
//! The engine is a pure function of its facts. It holds no state between
//! calls, performs no I/O, and never fails: facts that match no
//! jurisdiction rule (an unknown country code, a missing address) simply
//! leave the corresponding decision fields unset.
//!
//! # Example
//!
//! ```
//! use kavelbtw::core::*;
//! use kavelbtw::vat::*;
//! use rust_decimal_macros::dec;
//!
//! let lot = LotBuilder::new("BMW 320d")
//!     .anonymous_sale(true)
//!     .margin_sale(true)
//!     .margin_car(true)
//!     .release_country("BEL")
//!     .build()
//!     .unwrap();
//! let buyer = BuyerBuilder::new("An", "Peeters")
//!     .address(AddressBuilder::new().country("FRA").build())
//!     .build()
//!     .unwrap();
//! let auction = AuctionBuilder::new("Fleet clearance").build();
//! let bid = BidBuilder::new(dec!(12_500)).build();
//!
//! let engine = VatEngine::new();
//! let decision = engine.calculate_vat(&bid, &lot, &auction, &buyer, DocumentSignals::default());
//!
//! assert_eq!(decision.type_of_sale, SaleType::MarginSale);
//! assert_eq!(decision.margin_vat_percentage, Some(LUXURY_RATE));
//! assert_eq!(decision.margin_invoiced_by, Some(MarginParty::VavatoBe));
//! assert!(decision.vat_margin_sale);
//! ```

mod decision;
mod eu;
mod margin_sale;
mod private_sale;
mod public_sale;
mod sale;

pub use decision::{
    InvoicingParty, LUXURY_RATE, MarginParty, NON_LUXURY_RATE, SaleType, VatDecision, ZERO_RATE,
};
pub use eu::{EU_MEMBER_COUNTRIES, EuRegistry};
pub use sale::DocumentSignals;

use crate::core::{Auction, Bid, Buyer, Lot};
use sale::SaleContext;

/// Entry point of the VAT determination engine.
///
/// Carries the EU-membership table as injected configuration; everything
/// else arrives per call. Cheap to construct and safe to share across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct VatEngine {
    eu: EuRegistry,
}

impl VatEngine {
    /// Engine with the default EU-27 membership table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a caller-supplied membership table.
    pub fn with_registry(eu: EuRegistry) -> Self {
        Self { eu }
    }

    /// The membership table this engine dispatches on.
    pub fn eu_registry(&self) -> &EuRegistry {
        &self.eu
    }

    /// Determine the tax treatment for a completed sale.
    ///
    /// Exactly one sale-type rule runs, selected by
    /// [`SaleType::classify`]; the returned record's `type_of_sale` names
    /// it. `signals` carries the external document flags from the
    /// invoicing subsystem ([`DocumentSignals::default()`] while that
    /// integration is pending).
    pub fn calculate_vat(
        &self,
        bid: &Bid,
        lot: &Lot,
        auction: &Auction,
        buyer: &Buyer,
        signals: DocumentSignals,
    ) -> VatDecision {
        let ctx = SaleContext {
            lot,
            buyer,
            eu: &self.eu,
            signals,
        };
        let decision = match SaleType::classify(lot) {
            SaleType::MarginSale => margin_sale::calculate(&ctx),
            SaleType::PrivateSale => private_sale::calculate(&ctx),
            SaleType::PublicSale => public_sale::calculate(&ctx),
        };
        tracing::debug!(
            auction = %auction.name,
            lot = %lot.title,
            bid_amount = %bid.amount,
            type_of_sale = decision.type_of_sale.code(),
            margin_scheme = decision.vat_margin_sale,
            reverse_charge = decision.vat_reversed_charge,
            export = decision.vat_export,
            "vat decision"
        );
        decision
    }
}
