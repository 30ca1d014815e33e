use std::fmt;

use serde_json::{Map, Value as JsonValue};

// ---------------------------------------------------------------------------
// NumericField – the five filterable columns
// ---------------------------------------------------------------------------

/// Numeric columns of a [`Record`]. These are the only fields that get
/// coerced at load time and the only ones that can carry a range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericField {
    BuyPrice,
    SellPrice,
    Profit,
    ProfitPercent,
    SoldPerDay,
}

impl NumericField {
    pub const ALL: [NumericField; 5] = [
        NumericField::BuyPrice,
        NumericField::SellPrice,
        NumericField::Profit,
        NumericField::ProfitPercent,
        NumericField::SoldPerDay,
    ];

    /// Key used in the exported JSON.
    pub fn key(self) -> &'static str {
        match self {
            NumericField::BuyPrice => "buyPrice",
            NumericField::SellPrice => "sellPrice",
            NumericField::Profit => "profit",
            NumericField::ProfitPercent => "profitPercent",
            NumericField::SoldPerDay => "soldPerDay",
        }
    }

    /// Human readable label for filter widgets and messages.
    pub fn label(self) -> &'static str {
        match self {
            NumericField::BuyPrice => "Buy price",
            NumericField::SellPrice => "Sell price",
            NumericField::Profit => "Profit",
            NumericField::ProfitPercent => "Profit %",
            NumericField::SoldPerDay => "Sold/day",
        }
    }

    pub fn read(self, record: &Record) -> f64 {
        match self {
            NumericField::BuyPrice => record.buy_price,
            NumericField::SellPrice => record.sell_price,
            NumericField::Profit => record.profit,
            NumericField::ProfitPercent => record.profit_percent,
            NumericField::SoldPerDay => record.sold_per_day,
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Record – one trade opportunity
// ---------------------------------------------------------------------------

/// A single buy-low / sell-high opportunity (one element of the export).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub title: String,
    /// Icon path or URL; only its basename is displayed.
    pub image: String,
    pub buy_price: f64,
    pub buy_time_ago: String,
    pub sell_price: f64,
    pub sell_time_ago: String,
    pub from_location: String,
    pub to_location: String,
    pub profit: f64,
    pub profit_percent: f64,
    pub sold_per_day: f64,
}

impl Record {
    /// Build a record from one loosely-typed JSON object.
    ///
    /// Numeric fields never fail: booleans read as 1/0, and anything else that
    /// is not a finite number (or a string holding one) becomes `0.0`.
    /// Missing text fields become `""`.
    pub fn from_json(obj: &Map<String, JsonValue>) -> Self {
        let text = |key: &str| json_to_text(obj.get(key));
        let number = |field: NumericField| coerce_f64(obj.get(field.key()), field);

        Record {
            title: text("title"),
            image: text("image"),
            buy_price: number(NumericField::BuyPrice),
            buy_time_ago: text("buyTimeAgo"),
            sell_price: number(NumericField::SellPrice),
            sell_time_ago: text("sellTimeAgo"),
            from_location: text("fromLocation"),
            to_location: text("toLocation"),
            profit: number(NumericField::Profit),
            profit_percent: number(NumericField::ProfitPercent),
            sold_per_day: number(NumericField::SoldPerDay),
        }
    }

    /// Last path segment of `image`, accepting both `/` and `\` separators.
    pub fn image_basename(&self) -> &str {
        self.image
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.image)
    }

    pub fn is_profitable(&self) -> bool {
        self.profit > 0.0
    }

    /// Profit after market fees and sales tax, as charged in game.
    pub fn net_profit(&self, rates: TaxRates) -> f64 {
        let sell_fee = (self.sell_price * rates.market_fee).ceil();
        let buy_fee = (self.buy_price * rates.market_fee).ceil();
        let tax = (self.sell_price * rates.sales_tax).ceil();
        self.sell_price - sell_fee - tax - self.buy_price - buy_fee
    }

    pub fn net_profit_percent(&self, rates: TaxRates) -> f64 {
        if self.buy_price > 0.0 {
            self.net_profit(rates) / self.buy_price * 100.0
        } else {
            0.0
        }
    }

    /// Display strings in table column order.
    pub fn display_cells(&self) -> [String; 11] {
        [
            self.title.clone(),
            self.image_basename().to_string(),
            format_amount(self.buy_price),
            self.buy_time_ago.clone(),
            format_amount(self.sell_price),
            self.sell_time_ago.clone(),
            self.from_location.clone(),
            self.to_location.clone(),
            format_amount(self.profit),
            format!("{:.1}%", self.profit_percent),
            format_amount(self.sold_per_day),
        ]
    }
}

fn json_to_text(val: Option<&JsonValue>) -> String {
    match val {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Numeric coercion with zero fallback.
pub fn coerce_f64(val: Option<&JsonValue>, field: NumericField) -> f64 {
    let parsed = match val {
        Some(JsonValue::Number(n)) => n.as_f64(),
        Some(JsonValue::String(s)) => s.trim().parse::<f64>().ok(),
        Some(JsonValue::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => v,
        _ => {
            log::debug!("Coercing {} value {val:?} to 0.0", field.key());
            0.0
        }
    }
}

/// Whole amounts print without decimals, fractional ones with two.
pub fn format_amount(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

// ---------------------------------------------------------------------------
// TaxRates – market fee model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxRates {
    /// Order placement fee, charged on both the buy and the sell order.
    pub market_fee: f64,
    /// Tax on the sale proceeds.
    pub sales_tax: f64,
}

impl TaxRates {
    pub const MARKET_FEE: f64 = 0.025;
    pub const NORMAL_SALES_TAX: f64 = 0.08;
    pub const PREMIUM_SALES_TAX: f64 = 0.04;

    pub fn new(premium: bool) -> Self {
        TaxRates {
            market_fee: Self::MARKET_FEE,
            sales_tax: if premium {
                Self::PREMIUM_SALES_TAX
            } else {
                Self::NORMAL_SALES_TAX
            },
        }
    }
}

impl Default for TaxRates {
    fn default() -> Self {
        TaxRates::new(false)
    }
}
