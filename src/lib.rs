//! # kavelbtw
//!
//! VAT determination engine for Belgian/Dutch auction sales: classifies a
//! completed sale (a winning bid on a lot) into a tax treatment — the VAT
//! rate on the goods and on the auctioneer's margin, the legal invoicer of
//! each leg, and whether margin-scheme, reverse-charge, or export
//! treatment applies.
//!
//! All rates use [`rust_decimal::Decimal`] — never floating point. The
//! engine is pure and synchronous: no I/O, no shared state, safe to call
//! concurrently. Facts that match no jurisdiction rule leave the
//! corresponding decision fields unset instead of failing.
//!
//! ## Quick Start
//!
//! ```rust
//! use kavelbtw::core::*;
//! use kavelbtw::vat::*;
//! use rust_decimal_macros::dec;
//!
//! let lot = LotBuilder::new("Pallet of office chairs")
//!     .anonymous_sale(true)
//!     .release_country("BEL")
//!     .good_type(GoodType::NonLuxury)
//!     .build()
//!     .unwrap();
//! let buyer = BuyerBuilder::new("An", "Peeters")
//!     .address(AddressBuilder::new().city("Gent").country("BEL").build())
//!     .build()
//!     .unwrap();
//! let auction = AuctionBuilder::new("Office clearance").build();
//! let bid = BidBuilder::new(dec!(840)).build();
//!
//! let decision = VatEngine::new().calculate_vat(&bid, &lot, &auction, &buyer, DocumentSignals::default());
//!
//! assert_eq!(decision.type_of_sale, SaleType::PrivateSale);
//! assert_eq!(decision.goods_vat_percentage, Some(dec!(0.06)));
//! assert_eq!(decision.goods_invoiced_by, Some(InvoicingParty::VavatoBe));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`core`] | Sale facts (buyer, lot, auction, bid), builders, caller-side validation |
//! | [`vat`]  | The decision engine: sale-type classification and the three rule trees |

pub mod core;
pub mod vat;

// Re-export core types at crate root for convenience
pub use crate::core::*;
