// example/src/main.rs

include!(concat!(env!("OUT_DIR"), "/purchase_order.rs"));

use std::net::{IpAddr, Ipv4Addr};

use chrono::{Duration, Utc};
use uuid::Uuid;

// Bring the generated type into scope:
use orders::PurchaseOrder;

fn main() {
    let order = PurchaseOrder {
        client_ip:       IpAddr::V4(Ipv4Addr::LOCALHOST),
        delivery_window: Duration::hours(2),
        gift:            false,
        id:              Uuid::nil(),
        note:            "leave at the door".to_string(),
        placed_at:       Utc::now(),
        quantity:        3,
        tags:            vec![serde_json::json!("express")],
        unit_price:      9.5,
    };

    let copy = order.clone();
    println!("order {} from {}", copy.id, copy.client_ip);
    println!("total = {:.2}", copy.quantity as f64 * copy.unit_price);
    println!("{:#?}", order);
}
