use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::error::EngineError;
use super::types::*;

/// Builder for [`Address`].
///
/// ```
/// use kavelbtw::core::AddressBuilder;
///
/// let address = AddressBuilder::new()
///     .street("Kleine Kraaiwijk 3")
///     .city("Antwerpen")
///     .postal_code("2000")
///     .country("BEL")
///     .build();
/// assert_eq!(address.country.as_deref(), Some("BEL"));
/// ```
#[derive(Default)]
pub struct AddressBuilder {
    street: Option<String>,
    city: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

impl AddressBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn country(mut self, code: impl Into<String>) -> Self {
        self.country = Some(code.into());
        self
    }

    pub fn build(self) -> Address {
        Address {
            street: self.street,
            city: self.city,
            postal_code: self.postal_code,
            country: self.country,
        }
    }
}

/// Builder for [`Buyer`]. Requires a non-empty name.
pub struct BuyerBuilder {
    first_name: String,
    last_name: String,
    email: Option<String>,
    address: Address,
    company: Option<Company>,
}

impl BuyerBuilder {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            address: Address::default(),
            company: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Attach a company, making this a business buyer.
    pub fn company(mut self, name: impl Into<String>, vat_number: Option<String>) -> Self {
        self.company = Some(Company {
            name: name.into(),
            vat_number,
        });
        self
    }

    pub fn build(self) -> Result<Buyer, EngineError> {
        if self.first_name.trim().is_empty() && self.last_name.trim().is_empty() {
            return Err(EngineError::Builder("buyer name is required".into()));
        }
        Ok(Buyer {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            address: self.address,
            company: self.company,
        })
    }
}

/// Builder for [`Lot`]. Requires a non-empty title.
pub struct LotBuilder {
    title: String,
    currency: String,
    opening_bid_price: Option<Decimal>,
    release_location: ReleaseLocation,
    anonymous_sale: bool,
    margin_sale: bool,
    margin_car: bool,
    good_type: GoodType,
}

impl LotBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            currency: "EUR".to_string(),
            opening_bid_price: None,
            release_location: ReleaseLocation::default(),
            anonymous_sale: false,
            margin_sale: false,
            margin_car: false,
            good_type: GoodType::NonLuxury,
        }
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn opening_bid_price(mut self, price: Decimal) -> Self {
        self.opening_bid_price = Some(price);
        self
    }

    pub fn release_country(mut self, code: impl Into<String>) -> Self {
        self.release_location.country = Some(code.into());
        self
    }

    pub fn release_city(mut self, city: impl Into<String>) -> Self {
        self.release_location.city = Some(city.into());
        self
    }

    pub fn anonymous_sale(mut self, flag: bool) -> Self {
        self.anonymous_sale = flag;
        self
    }

    pub fn margin_sale(mut self, flag: bool) -> Self {
        self.margin_sale = flag;
        self
    }

    pub fn margin_car(mut self, flag: bool) -> Self {
        self.margin_car = flag;
        self
    }

    pub fn good_type(mut self, good_type: GoodType) -> Self {
        self.good_type = good_type;
        self
    }

    pub fn build(self) -> Result<Lot, EngineError> {
        if self.title.trim().is_empty() {
            return Err(EngineError::Builder("lot title is required".into()));
        }
        Ok(Lot {
            title: self.title,
            currency: self.currency,
            opening_bid_price: self.opening_bid_price,
            release_location: self.release_location,
            anonymous_sale: self.anonymous_sale,
            margin_sale: self.margin_sale,
            margin_car: self.margin_car,
            good_type: self.good_type,
        })
    }
}

/// Builder for [`Auction`].
pub struct AuctionBuilder {
    name: String,
    closing_date: Option<NaiveDate>,
}

impl AuctionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            closing_date: None,
        }
    }

    pub fn closing_date(mut self, date: NaiveDate) -> Self {
        self.closing_date = Some(date);
        self
    }

    pub fn build(self) -> Auction {
        Auction {
            name: self.name,
            closing_date: self.closing_date,
        }
    }
}

/// Builder for [`Bid`].
pub struct BidBuilder {
    amount: Decimal,
    placed_at: Option<NaiveDateTime>,
}

impl BidBuilder {
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            placed_at: None,
        }
    }

    pub fn placed_at(mut self, at: NaiveDateTime) -> Self {
        self.placed_at = Some(at);
        self
    }

    pub fn build(self) -> Bid {
        Bid {
            amount: self.amount,
            placed_at: self.placed_at,
        }
    }
}
