use super::{Event, Parser};
use crate::orderbook::{OrderId, OrderKind, Side, TimeInForce};
use crate::price::PriceScale;

fn parser() -> Parser {
    Parser::new(PriceScale::DEFAULT)
}

#[test]
fn test_parse_human_limit_defaults() {
    let event = parser().parse_line("t1 LIMIT BUY 100.50 10").unwrap();
    let Event::Add(order) = event else {
        panic!("expected an add event");
    };
    assert_eq!(order.timestamp, "t1");
    assert_eq!(order.side, Side::Buy);
    assert_eq!(order.kind, OrderKind::Limit);
    assert_eq!(order.price, 10050);
    assert_eq!(order.quantity, 10);
    assert_eq!(order.tif, TimeInForce::Gtc, "tif defaults to GTC");
    assert!(order.id.is_unassigned(), "id defaults to the assign sentinel");
}

#[test]
fn test_parse_human_limit_with_options() {
    let event = parser()
        .parse_line("t2 LIMIT SELL 99.95 4 id=42 tif=FOK")
        .unwrap();
    let Event::Add(order) = event else {
        panic!("expected an add event");
    };
    assert_eq!(order.id, OrderId(42));
    assert_eq!(order.side, Side::Sell);
    assert_eq!(order.price, 9995);
    assert_eq!(order.tif, TimeInForce::Fok);
}

#[test]
fn test_parse_human_market_has_no_price() {
    let event = parser().parse_line("t3 MARKET SELL 7 tif=IOC").unwrap();
    let Event::Add(order) = event else {
        panic!("expected an add event");
    };
    assert_eq!(order.kind, OrderKind::Market);
    assert_eq!(order.price, 0);
    assert_eq!(order.quantity, 7);
    assert_eq!(order.tif, TimeInForce::Ioc);
}

#[test]
fn test_parse_human_cancel() {
    let event = parser().parse_line("t4 CANCEL id=9").unwrap();
    assert_eq!(
        event,
        Event::Cancel {
            id: OrderId(9),
            timestamp: "t4".to_string(),
        }
    );
}

#[test]
fn test_parse_human_modify() {
    let event = parser().parse_line("t5 MODIFY id=9 price=101.25 qty=3").unwrap();
    assert_eq!(
        event,
        Event::Modify {
            id: OrderId(9),
            price: 10125,
            quantity: 3,
            timestamp: "t5".to_string(),
        }
    );
}

#[test]
fn test_parse_human_modify_requires_all_fields() {
    let p = parser();
    assert!(p.parse_line("t5 MODIFY id=9 price=101.25").is_none());
    assert!(p.parse_line("t5 MODIFY price=101.25 qty=3").is_none());
    assert!(p.parse_line("t5 MODIFY id=9 qty=3").is_none());
}

#[test]
fn test_parse_human_modify_rejects_zero_quantity() {
    assert!(parser()
        .parse_line("t5 MODIFY id=9 price=101.25 qty=0")
        .is_none());
}

#[test]
fn test_parse_human_ignores_bad_optional_tokens() {
    // A malformed optional token leaves the default in place.
    let event = parser().parse_line("t6 LIMIT BUY 100.00 5 tif=NOPE id=x").unwrap();
    let Event::Add(order) = event else {
        panic!("expected an add event");
    };
    assert_eq!(order.tif, TimeInForce::Gtc);
    assert!(order.id.is_unassigned());
}

#[test]
fn test_parse_compact_add() {
    let event = parser().parse_line("A,t1,5,BUY,100.50,10").unwrap();
    let Event::Add(order) = event else {
        panic!("expected an add event");
    };
    assert_eq!(order.id, OrderId(5));
    assert_eq!(order.timestamp, "t1");
    assert_eq!(order.side, Side::Buy);
    assert_eq!(order.kind, OrderKind::Limit);
    assert_eq!(order.price, 10050);
    assert_eq!(order.quantity, 10);
    assert_eq!(order.tif, TimeInForce::Gtc);
}

#[test]
fn test_parse_compact_add_with_tif() {
    let event = parser().parse_line("A,t1,5,SELL,100.50,10,IOC").unwrap();
    let Event::Add(order) = event else {
        panic!("expected an add event");
    };
    assert_eq!(order.tif, TimeInForce::Ioc);
}

#[test]
fn test_parse_compact_add_unknown_tif_falls_back_to_gtc() {
    let event = parser().parse_line("A,t1,5,SELL,100.50,10,ASAP").unwrap();
    let Event::Add(order) = event else {
        panic!("expected an add event");
    };
    assert_eq!(order.tif, TimeInForce::Gtc);
}

#[test]
fn test_parse_compact_cancel_and_modify() {
    let p = parser();
    assert_eq!(
        p.parse_line("X,t2,7").unwrap(),
        Event::Cancel {
            id: OrderId(7),
            timestamp: "t2".to_string(),
        }
    );
    assert_eq!(
        p.parse_line("M,t3,7,99.00,4").unwrap(),
        Event::Modify {
            id: OrderId(7),
            price: 9900,
            quantity: 4,
            timestamp: "t3".to_string(),
        }
    );
}

#[test]
fn test_blank_and_comment_lines_are_skipped() {
    let p = parser();
    assert!(p.parse_line("").is_none());
    assert!(p.parse_line("   \t").is_none());
    assert!(p.parse_line("# a comment").is_none());
    assert!(p.parse_line("   # indented comment").is_none());
}

#[test]
fn test_malformed_lines_are_dropped() {
    let p = parser();
    assert!(p.parse_line("t1").is_none());
    assert!(p.parse_line("t1 LIMIT").is_none());
    assert!(p.parse_line("t1 LIMIT NORTH 100.0 5").is_none());
    assert!(p.parse_line("t1 LIMIT BUY abc 5").is_none());
    assert!(p.parse_line("t1 LIMIT BUY -100.0 5").is_none());
    assert!(p.parse_line("t1 CANCEL").is_none());
    assert!(p.parse_line("Z,t1,5").is_none());
    assert!(p.parse_line("A,t1,5,BUY,100.50").is_none());
    assert!(p.parse_line("M,t1,5,100.50,0").is_none());
}

#[test]
fn test_price_conversion_rounds_to_nearest_tick() {
    let event = parser().parse_line("t1 LIMIT BUY 1.236 5").unwrap();
    let Event::Add(order) = event else {
        panic!("expected an add event");
    };
    assert_eq!(order.price, 124);
}

#[test]
fn test_scale_one_keeps_integer_prices() {
    let p = Parser::new(PriceScale::new(1).unwrap());
    let Event::Add(order) = p.parse_line("t1 LIMIT BUY 100 5").unwrap() else {
        panic!("expected an add event");
    };
    assert_eq!(order.price, 100);
}

#[test]
fn test_event_timestamp_accessor() {
    let p = parser();
    assert_eq!(p.parse_line("t9 CANCEL id=1").unwrap().timestamp(), "t9");
    assert_eq!(
        p.parse_line("t8 LIMIT BUY 1.00 1").unwrap().timestamp(),
        "t8"
    );
}
