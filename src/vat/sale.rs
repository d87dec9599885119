use serde::{Deserialize, Serialize};

use super::eu::EuRegistry;
use crate::core::{Buyer, Lot};

/// External document signals sourced from the invoicing subsystem.
///
/// The rules consult these when deciding between export / reverse-charge
/// treatment and ordinary rates. They are inputs, not engine state: the
/// caller reports what it knows at decision time. Until the invoicing
/// integration lands, callers pass [`DocumentSignals::default()`] (both
/// false).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSignals {
    /// Export documents for a non-EU buyer have been received.
    pub export_documents_received: bool,
    /// An export declaration for an EU business buyer has been received.
    pub export_declaration_received: bool,
}

/// Everything a sale-type rule may branch on, borrowed from the caller's
/// facts for the duration of one decision.
pub(crate) struct SaleContext<'a> {
    pub lot: &'a Lot,
    pub buyer: &'a Buyer,
    pub eu: &'a EuRegistry,
    pub signals: DocumentSignals,
}

impl SaleContext<'_> {
    pub fn buyer_in_eu(&self) -> bool {
        self.eu.is_member(self.buyer.country())
    }

    pub fn buyer_is_private(&self) -> bool {
        self.buyer.is_private()
    }

    /// The goods are released in the buyer's own country, so this sale
    /// causes no cross-border movement. Two unknown countries compare
    /// equal, matching the tolerant record lookups upstream.
    pub fn change_of_goods_in_buyer_country(&self) -> bool {
        self.buyer.country() == self.lot.release_country()
    }

    pub fn lot_in(&self, code: &str) -> bool {
        self.lot.in_country(code)
    }
}
