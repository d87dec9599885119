use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::Lot;

/// Default VAT rate for luxury goods and for the auctioneer's margin.
pub const LUXURY_RATE: Decimal = dec!(0.21);

/// Default VAT rate for non-luxury goods.
pub const NON_LUXURY_RATE: Decimal = dec!(0.06);

/// Zero rate, used for margin-scheme goods legs, reverse-charge and export.
pub const ZERO_RATE: Decimal = dec!(0.00);

/// Which sale regime governed the transaction — and therefore which
/// decision tree produced the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleType {
    /// Anonymous-principal sale under the margin scheme.
    MarginSale,
    /// Anonymous-principal sale outside the margin scheme.
    PrivateSale,
    /// Disclosed-seller sale; the seller is liable for goods-side VAT.
    PublicSale,
}

impl SaleType {
    /// Select the sale regime from the lot's flags.
    ///
    /// The three outcomes are exhaustive and mutually exclusive: an
    /// anonymous sale is a margin sale or a private sale depending on the
    /// margin flag; a disclosed-seller sale is always a public sale (its
    /// margin flag is handled inside the public-sale rule instead).
    pub fn classify(lot: &Lot) -> SaleType {
        if lot.anonymous_sale {
            if lot.margin_sale {
                SaleType::MarginSale
            } else {
                SaleType::PrivateSale
            }
        } else {
            SaleType::PublicSale
        }
    }

    /// Wire code, as stored on invoices.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MarginSale => "margin_sale",
            Self::PrivateSale => "private_sale",
            Self::PublicSale => "public_sale",
        }
    }

    /// Parse from the wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "margin_sale" => Some(Self::MarginSale),
            "private_sale" => Some(Self::PrivateSale),
            "public_sale" => Some(Self::PublicSale),
            _ => None,
        }
    }
}

/// Legal invoicer of the goods leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoicingParty {
    /// The disclosed seller invoices the goods directly.
    Seller,
    VavatoBe,
    VavatoNl,
    FokepiBe,
    FokepiNl,
}

impl InvoicingParty {
    /// Wire code, as stored on invoices.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Seller => "seller",
            Self::VavatoBe => "vavato_be",
            Self::VavatoNl => "vavato_nl",
            Self::FokepiBe => "fokepi_be",
            Self::FokepiNl => "fokepi_nl",
        }
    }

    /// Parse from the wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "seller" => Some(Self::Seller),
            "vavato_be" => Some(Self::VavatoBe),
            "vavato_nl" => Some(Self::VavatoNl),
            "fokepi_be" => Some(Self::FokepiBe),
            "fokepi_nl" => Some(Self::FokepiNl),
            _ => None,
        }
    }
}

/// Legal invoicer of the auctioneer's margin. Always a Vavato entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginParty {
    VavatoBe,
    VavatoNl,
}

impl MarginParty {
    /// Wire code, as stored on invoices.
    pub fn code(&self) -> &'static str {
        match self {
            Self::VavatoBe => "vavato_be",
            Self::VavatoNl => "vavato_nl",
        }
    }

    /// Parse from the wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "vavato_be" => Some(Self::VavatoBe),
            "vavato_nl" => Some(Self::VavatoNl),
            _ => None,
        }
    }
}

/// The flat tax-treatment record attached to an invoice.
///
/// Percentage and invoicer fields start out unset and are populated only
/// along the branch the rules actually take; a sale in an unhandled
/// jurisdiction legitimately leaves them `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatDecision {
    /// VAT rate applied to the goods value.
    pub goods_vat_percentage: Option<Decimal>,
    /// Legal invoicer of the goods.
    pub goods_invoiced_by: Option<InvoicingParty>,
    /// VAT rate applied to the auctioneer's margin.
    pub margin_vat_percentage: Option<Decimal>,
    /// Legal invoicer of the margin.
    pub margin_invoiced_by: Option<MarginParty>,
    /// Margin-scheme treatment applies.
    pub vat_margin_sale: bool,
    /// Reverse-charge treatment applies; the buyer self-assesses.
    pub vat_reversed_charge: bool,
    /// Export (zero-rate) treatment applies.
    pub vat_export: bool,
    /// Which decision tree produced this record.
    pub type_of_sale: SaleType,
}

impl VatDecision {
    /// A fresh record with every field at its default.
    pub fn new(type_of_sale: SaleType) -> Self {
        Self {
            goods_vat_percentage: None,
            goods_invoiced_by: None,
            margin_vat_percentage: None,
            margin_invoiced_by: None,
            vat_margin_sale: false,
            vat_reversed_charge: false,
            vat_export: false,
            type_of_sale,
        }
    }
}
