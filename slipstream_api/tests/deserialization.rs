use chrono::NaiveDate;
use slipstream_api::types::{Arp, DemandSlip, ListResponse, PostCode, TransactionDetail};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_demand_slips_full() {
    let json = load_fixture("demand_slips.json");
    let resp: ListResponse<DemandSlip> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.rows.len(), 1);
    assert_eq!(resp.total_count, Some(42));

    let slip = &resp.rows[0];
    assert_eq!(slip.do_code, "DO-2024-0001");
    assert_eq!(slip.customer_code, "C0001");
    assert_eq!(slip.customer_name.as_deref(), Some("Aster Trading"));
    assert_eq!(slip.slip_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(slip.due_date, Some(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()));
    assert_eq!(slip.status, 1);
    assert_eq!(slip.total_amount, 150000);
    assert_eq!(slip.tax_amount, Some(15000));
    assert!(slip.created_at.is_some());
}

#[test]
fn deserialize_demand_slips_empty() {
    let json = load_fixture("demand_slips_empty.json");
    let resp: ListResponse<DemandSlip> = serde_json::from_str(&json).unwrap();
    assert!(resp.rows.is_empty());
    assert_eq!(resp.total_count, None);
}

#[test]
fn deserialize_arps() {
    let json = load_fixture("arps.json");
    let resp: ListResponse<Arp> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.rows.len(), 1);

    let arp = &resp.rows[0];
    assert_eq!(arp.arp_code, "ARP-777");
    assert_eq!(arp.customer_code, "C0002");
    assert_eq!(arp.deposit_date, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
    assert_eq!(arp.amount, 98000);
    assert_eq!(arp.status, 2);
}

#[test]
fn deserialize_post_codes() {
    let json = load_fixture("post_codes.json");
    let resp: ListResponse<PostCode> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.rows.len(), 2);

    let shibuya = &resp.rows[0];
    assert_eq!(shibuya.post_code, "1500041");
    assert_eq!(shibuya.pref, "Tokyo");
    assert_eq!(shibuya.city, "Shibuya");
    assert_eq!(shibuya.town.as_deref(), Some("Jinnan"));

    let sapporo = &resp.rows[1];
    assert_eq!(sapporo.town, None);
}

#[test]
fn deserialize_transaction_details() {
    let json = load_fixture("transaction_details.json");
    let resp: ListResponse<TransactionDetail> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.rows.len(), 2);

    let line = &resp.rows[0];
    assert_eq!(line.tx_id, 9001);
    assert_eq!(line.line_no, 1);
    assert_eq!(line.item_code, "ITM-100");
    assert_eq!(line.item_name.as_deref(), Some("Widget"));
    assert_eq!(line.qty, 4);
    assert_eq!(line.unit_price, 2500);
    assert_eq!(line.amount, 10000);

    assert_eq!(resp.rows[1].item_name, None);
}
