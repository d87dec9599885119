use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Postal address. Country uses the platform's three-letter codes
/// (e.g. "BEL", "NLD"); an absent country is legal and simply means no
/// jurisdiction rule will match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street + house number.
    pub street: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Three-letter country code.
    pub country: Option<String>,
}

/// Company attached to a buyer account. A buyer with a company is a
/// business buyer for VAT purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Registered name.
    pub name: String,
    /// VAT identification number, if registered.
    pub vat_number: Option<String>,
}

/// The winning bidder, as seen by the VAT engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buyer {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    /// Invoicing address.
    pub address: Address,
    /// Present iff the buyer acts through a company.
    pub company: Option<Company>,
}

impl Buyer {
    /// Full display name.
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// A buyer without an attached company is a private buyer.
    pub fn is_private(&self) -> bool {
        self.company.is_none()
    }

    /// Country code of the invoicing address, if known.
    pub fn country(&self) -> Option<&str> {
        self.address.country.as_deref()
    }
}

/// Classification of the goods on a lot. Luxury goods carry the higher
/// default VAT rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoodType {
    Luxury,
    #[default]
    NonLuxury,
}

/// Where the goods are released to the buyer after the sale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseLocation {
    pub city: Option<String>,
    /// Three-letter country code.
    pub country: Option<String>,
}

/// An auction lot with the sale-type flags the VAT rules branch on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub title: String,
    /// ISO 4217 currency of the bid prices.
    pub currency: String,
    pub opening_bid_price: Option<Decimal>,
    /// Where the goods are handed over.
    pub release_location: ReleaseLocation,
    /// Seller identity is not disclosed; the auctioneer sells as principal.
    pub anonymous_sale: bool,
    /// Sold under the margin scheme.
    pub margin_sale: bool,
    /// Margin-scheme vehicle. Recorded with every margin lot; no VAT rule
    /// currently branches on it.
    pub margin_car: bool,
    /// Luxury / non-luxury classification of the goods.
    pub good_type: GoodType,
}

impl Lot {
    /// Country code of the release location, if known.
    pub fn release_country(&self) -> Option<&str> {
        self.release_location.country.as_deref()
    }

    /// Whether the goods are released in the given country.
    pub fn in_country(&self, code: &str) -> bool {
        self.release_country() == Some(code)
    }

    pub fn is_luxury(&self) -> bool {
        self.good_type == GoodType::Luxury
    }
}

/// The auction a lot was sold in. Context only; no VAT rule branches on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    pub name: String,
    pub closing_date: Option<NaiveDate>,
}

/// The winning bid. Context only; no VAT rule branches on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub amount: Decimal,
    pub placed_at: Option<NaiveDateTime>,
}
