//! Line parser for the two wire formats.
//!
//! Two grammars are accepted per line, tried human-first:
//!
//! ```text
//! <ts> LIMIT  BUY|SELL <price> <qty> [id=<n>] [tif=GTC|IOC|FOK|DAY]
//! <ts> MARKET BUY|SELL <qty> [id=<n>] [tif=...]
//! <ts> CANCEL id=<n>
//! <ts> MODIFY id=<n> price=<px> qty=<q>
//!
//! A,<ts>,<id>,BUY|SELL,<price>,<qty>[,<tif>]
//! X,<ts>,<id>
//! M,<ts>,<id>,<price>,<qty>
//! ```
//!
//! Blank lines, `#` comments and anything unparseable yield `None`; the feed
//! loop drops such lines without emitting a record. Prices are decimal in the
//! wire formats and converted to ticks here, at ingress.

use super::event::Event;
use crate::orderbook::{Order, OrderId, OrderKind, Side, TimeInForce};
use crate::price::PriceScale;

/// Stateless line parser holding the ingress tick conversion.
#[derive(Clone, Copy, Debug)]
pub struct Parser {
    scale: PriceScale,
}

impl Parser {
    pub fn new(scale: PriceScale) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> PriceScale {
        self.scale
    }

    /// Parse one input line into an event, or `None` for blanks, comments and
    /// malformed lines.
    pub fn parse_line(&self, line: &str) -> Option<Event> {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        self.parse_human(line).or_else(|| self.parse_compact(line))
    }

    fn parse_human(&self, line: &str) -> Option<Event> {
        let mut tokens = line.split_whitespace();
        let timestamp = tokens.next()?;
        let word = tokens.next()?;

        match word {
            "CANCEL" => {
                for token in tokens {
                    if let Some(value) = token.strip_prefix("id=") {
                        let id = value.parse::<u64>().ok()?;
                        return Some(Event::Cancel {
                            id: OrderId(id),
                            timestamp: timestamp.to_string(),
                        });
                    }
                }
                None
            }
            "MODIFY" => {
                let mut id = None;
                let mut price = None;
                let mut quantity = None;
                for token in tokens {
                    if let Some(value) = token.strip_prefix("id=") {
                        id = Some(value.parse::<u64>().ok()?);
                    } else if let Some(value) = token.strip_prefix("price=") {
                        let decimal = value.parse::<f64>().ok()?;
                        price = Some(self.scale.to_ticks(decimal)?);
                    } else if let Some(value) = token.strip_prefix("qty=") {
                        let parsed = value.parse::<u64>().ok()?;
                        if parsed == 0 {
                            return None;
                        }
                        quantity = Some(parsed);
                    }
                }
                Some(Event::Modify {
                    id: OrderId(id?),
                    price: price?,
                    quantity: quantity?,
                    timestamp: timestamp.to_string(),
                })
            }
            _ => {
                let kind = word.parse::<OrderKind>().ok()?;
                let side = tokens.next()?.parse::<Side>().ok()?;

                let (price, quantity) = match kind {
                    OrderKind::Limit => {
                        let decimal = tokens.next()?.parse::<f64>().ok()?;
                        let quantity = tokens.next()?.parse::<u64>().ok()?;
                        (self.scale.to_ticks(decimal)?, quantity)
                    }
                    OrderKind::Market => {
                        let quantity = tokens.next()?.parse::<u64>().ok()?;
                        (0, quantity)
                    }
                };

                let mut order = Order {
                    id: OrderId::UNASSIGNED,
                    timestamp: timestamp.to_string(),
                    side,
                    kind,
                    tif: TimeInForce::Gtc,
                    price,
                    quantity,
                };
                // Optional trailing key=value tokens; unusable values keep
                // the defaults, matching the lenient human grammar.
                for token in tokens {
                    if let Some(value) = token.strip_prefix("id=") {
                        if let Ok(id) = value.parse::<u64>() {
                            order.id = OrderId(id);
                        }
                    } else if let Some(value) = token.strip_prefix("tif=") {
                        if let Ok(tif) = value.parse::<TimeInForce>() {
                            order.tif = tif;
                        }
                    }
                }
                Some(Event::Add(order))
            }
        }
    }

    fn parse_compact(&self, line: &str) -> Option<Event> {
        let mut parts = line.split(',');
        let tag = parts.next()?;
        let timestamp = parts.next()?.to_string();

        match tag {
            "X" => {
                let id = parts.next()?.parse::<u64>().ok()?;
                Some(Event::Cancel {
                    id: OrderId(id),
                    timestamp,
                })
            }
            "M" => {
                let id = parts.next()?.parse::<u64>().ok()?;
                let decimal = parts.next()?.parse::<f64>().ok()?;
                let quantity = parts.next()?.parse::<u64>().ok()?;
                if quantity == 0 {
                    return None;
                }
                Some(Event::Modify {
                    id: OrderId(id),
                    price: self.scale.to_ticks(decimal)?,
                    quantity,
                    timestamp,
                })
            }
            "A" => {
                let id = parts.next()?.parse::<u64>().ok()?;
                let side = parts.next()?.parse::<Side>().ok()?;
                let decimal = parts.next()?.parse::<f64>().ok()?;
                let quantity = parts.next()?.parse::<u64>().ok()?;
                let tif = parts
                    .next()
                    .and_then(|token| token.parse::<TimeInForce>().ok())
                    .unwrap_or_default();
                Some(Event::Add(Order {
                    id: OrderId(id),
                    timestamp,
                    side,
                    kind: OrderKind::Limit,
                    tif,
                    price: self.scale.to_ticks(decimal)?,
                    quantity,
                }))
            }
            _ => None,
        }
    }
}
