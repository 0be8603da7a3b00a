//! Order, trade and enum types shared across the book.

use super::error::OrderBookError;
use std::fmt;
use std::str::FromStr;

/// Side of the book an order belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Buy order (bid side)
    Buy,
    /// Sell order (ask side)
    Sell,
}

impl Side {
    /// The side an aggressor on this side matches against.
    pub fn opposite(&self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for Side {
    type Err = OrderBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            _ => Err(OrderBookError::UnknownToken {
                field: "side",
                token: s.to_string(),
            }),
        }
    }
}

/// Kind of order: priced or unpriced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderKind {
    /// Rests at `price` unless it crosses on arrival.
    Limit,
    /// Consumes opposing liquidity at any price; never rests.
    Market,
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderKind::Limit => write!(f, "LIMIT"),
            OrderKind::Market => write!(f, "MARKET"),
        }
    }
}

impl FromStr for OrderKind {
    type Err = OrderBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LIMIT" => Ok(OrderKind::Limit),
            "MARKET" => Ok(OrderKind::Market),
            _ => Err(OrderBookError::UnknownToken {
                field: "order kind",
                token: s.to_string(),
            }),
        }
    }
}

/// Time-in-force policy applied when an order arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeInForce {
    /// Good till canceled: rests indefinitely.
    #[default]
    Gtc,
    /// Immediate or cancel: fills what it can, remainder is discarded.
    Ioc,
    /// Fill or kill: fills completely or not at all, never partially.
    Fok,
    /// Day order: the engine treats it as GTC; session-end expiry is an
    /// external collaborator's job.
    Day,
}

impl TimeInForce {
    /// IOC and FOK orders never rest in the book.
    pub fn is_immediate(&self) -> bool {
        matches!(self, TimeInForce::Ioc | TimeInForce::Fok)
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeInForce::Gtc => write!(f, "GTC"),
            TimeInForce::Ioc => write!(f, "IOC"),
            TimeInForce::Fok => write!(f, "FOK"),
            TimeInForce::Day => write!(f, "DAY"),
        }
    }
}

impl FromStr for TimeInForce {
    type Err = OrderBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GTC" => Ok(TimeInForce::Gtc),
            "IOC" => Ok(TimeInForce::Ioc),
            "FOK" => Ok(TimeInForce::Fok),
            "DAY" => Ok(TimeInForce::Day),
            _ => Err(OrderBookError::UnknownToken {
                field: "time in force",
                token: s.to_string(),
            }),
        }
    }
}

/// Order identifier, unique across one run of the engine.
///
/// Id 0 is the "unassigned" sentinel: the book replaces it with the next
/// monotonic id before any other processing. Duplicate caller-supplied ids
/// are undefined behavior of the input and are not defended against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(pub u64);

impl OrderId {
    /// Sentinel asking the book to assign the next monotonic id.
    pub const UNASSIGNED: OrderId = OrderId(0);

    pub fn is_unassigned(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        OrderId(id)
    }
}

/// A single order. Identity is `id`; `quantity` is the residual and is the
/// only field the matcher mutates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    /// Opaque feed timestamp, propagated into trade and quote records.
    pub timestamp: String,
    pub side: Side,
    pub kind: OrderKind,
    pub tif: TimeInForce,
    /// Limit price in integer ticks. Unused for market orders.
    pub price: u64,
    /// Residual quantity. Positive while the order rests.
    pub quantity: u64,
}

impl Order {
    /// Build a limit order.
    pub fn limit(
        id: OrderId,
        timestamp: impl Into<String>,
        side: Side,
        price: u64,
        quantity: u64,
        tif: TimeInForce,
    ) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
            side,
            kind: OrderKind::Limit,
            tif,
            price,
            quantity,
        }
    }

    /// Build a market order. Market orders carry no price and never rest.
    pub fn market(id: OrderId, timestamp: impl Into<String>, side: Side, quantity: u64) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
            side,
            kind: OrderKind::Market,
            tif: TimeInForce::Gtc,
            price: 0,
            quantity,
        }
    }

    /// Whether an opposing level at `opposing_price` is an acceptable match.
    pub fn crosses(&self, opposing_price: u64) -> bool {
        match self.kind {
            OrderKind::Market => true,
            OrderKind::Limit => match self.side {
                Side::Buy => opposing_price <= self.price,
                Side::Sell => opposing_price >= self.price,
            },
        }
    }
}

/// An executed match between one aggressor and one maker.
///
/// `price` is always the maker's resting price, in ticks. Trades are emitted
/// in the order matches occur and are immutable once logged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trade {
    pub timestamp: String,
    pub price: u64,
    pub quantity: u64,
    pub buy_id: OrderId,
    pub sell_id: OrderId,
}
