//! Package pricing per car type.
//!
//! The landing page embeds the whole table so the car-type selector can swap
//! prices in the browser without a server round trip.

use std::fmt;

use serde::Serialize;

/// Whole-rupee amount rendered with Indian digit grouping (`₹1,00,000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rupees(u32);

impl Rupees {
    #[must_use]
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    #[must_use]
    pub const fn amount(self) -> u32 {
        self.0
    }

    /// Percentage saved against `list`, rounded down. Zero when not cheaper.
    #[must_use]
    pub fn discount_percent_from(self, list: Self) -> u32 {
        if list.0 == 0 || self.0 >= list.0 {
            return 0;
        }
        let saved = u64::from(list.0 - self.0) * 100;
        u32::try_from(saved / u64::from(list.0)).unwrap_or(0)
    }
}

/// Group digits as lakh/crore: the last three digits, then pairs.
fn group_indian(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped: Vec<char> = Vec::with_capacity(digits.len() + digits.len() / 2);
    for (position, digit) in digits.chars().rev().enumerate() {
        if position == 3 || (position > 3 && position % 2 == 1) {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.into_iter().rev().collect()
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", group_indian(self.0))
    }
}

/// Car body styles with distinct pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CarType {
    Hatchback,
    Sedan,
    Suv,
}

impl CarType {
    /// Selector order.
    pub const ALL: [Self; 3] = [Self::Hatchback, Self::Sedan, Self::Suv];

    /// Stable key used in markup and the embedded price table.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Hatchback => "hatchback",
            Self::Sedan => "sedan",
            Self::Suv => "suv",
        }
    }

    /// Label shown in the selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hatchback => "Hatchback",
            Self::Sedan => "Sedan",
            Self::Suv => "SUV",
        }
    }
}

/// Offer and list price for one car type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackagePrice {
    pub offer: Rupees,
    pub list: Rupees,
}

impl PackagePrice {
    #[must_use]
    pub const fn new(offer: u32, list: u32) -> Self {
        Self {
            offer: Rupees::new(offer),
            list: Rupees::new(list),
        }
    }

    #[must_use]
    pub fn discount_percent(&self) -> u32 {
        self.offer.discount_percent_from(self.list)
    }
}

/// Client-facing rendering of one table row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRow {
    pub car_type: CarType,
    pub label: &'static str,
    pub offer: String,
    pub list: String,
    pub discount_percent: u32,
}

/// Lookup table from car type to price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTable {
    hatchback: PackagePrice,
    sedan: PackagePrice,
    suv: PackagePrice,
}

impl PriceTable {
    #[must_use]
    pub const fn new(hatchback: PackagePrice, sedan: PackagePrice, suv: PackagePrice) -> Self {
        Self {
            hatchback,
            sedan,
            suv,
        }
    }

    /// Introductory prices for the premium doorstep package.
    #[must_use]
    pub const fn introductory() -> Self {
        Self::new(
            PackagePrice::new(1_299, 2_099),
            PackagePrice::new(1_599, 2_599),
            PackagePrice::new(1_899, 2_999),
        )
    }

    #[must_use]
    pub const fn price_for(&self, car_type: CarType) -> PackagePrice {
        match car_type {
            CarType::Hatchback => self.hatchback,
            CarType::Sedan => self.sedan,
            CarType::Suv => self.suv,
        }
    }

    /// Rows in selector order, with display strings precomputed.
    #[must_use]
    pub fn rows(&self) -> Vec<PriceRow> {
        CarType::ALL
            .into_iter()
            .map(|car_type| {
                let price = self.price_for(car_type);
                PriceRow {
                    car_type,
                    label: car_type.label(),
                    offer: price.offer.to_string(),
                    list: price.list.to_string(),
                    discount_percent: price.discount_percent(),
                }
            })
            .collect()
    }
}
