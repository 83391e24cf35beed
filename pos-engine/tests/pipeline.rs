//! End-to-end pipeline test: register session → bills → daily → monthly

use chrono::{NaiveDate, NaiveDateTime};
use pos_engine::{Catalog, Register, aggregate_daily, aggregate_monthly};
use shared::models::Product;

const EPS: f64 = 1e-6;

fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, day)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn product(catalog: &Catalog, name: &str) -> Product {
    catalog
        .products()
        .iter()
        .find(|p| p.name == name)
        .unwrap()
        .clone()
}

#[test]
fn full_day_rolls_up_into_month() {
    let catalog = Catalog::demo();
    let cappuccino = product(&catalog, "Cappuccino");
    let sandwich = product(&catalog, "Club Sandwich");
    let cake = product(&catalog, "Chocolate Cake");

    let mut register = Register::new();

    // Morning: 2 cappuccinos, cash
    register.cart_mut().add(&cappuccino);
    register.cart_mut().add(&cappuccino);
    let morning = register.checkout(at(14, 9, 10), "Cash", "").unwrap();

    // Lunch: sandwich + cake, card
    register.cart_mut().add(&sandwich);
    register.cart_mut().add(&cake);
    let lunch = register.checkout(at(14, 12, 45), "Card", "").unwrap();

    // Afternoon: one cappuccino, cash
    register.cart_mut().add(&cappuccino);
    let afternoon = register.checkout(at(14, 16, 20), "Cash", "").unwrap();

    let day = NaiveDate::from_ymd_opt(2026, 8, 14).unwrap();
    let daily = aggregate_daily(register.completed_bills(), day);

    // Totals conserve bill totals
    let bill_sum = morning.total + lunch.total + afternoon.total;
    assert!((daily.total_sales - bill_sum).abs() < EPS);
    assert_eq!(daily.total_bills, 3);
    assert_eq!(daily.date, day);

    // Payment split
    let cash = daily.sales_by_payment_method["Cash"];
    let card = daily.sales_by_payment_method["Card"];
    assert!((cash - (morning.total + afternoon.total)).abs() < EPS);
    assert!((card - lunch.total).abs() < EPS);

    // First-token categories: "Cappuccino", "Club", "Chocolate"
    assert!((daily.sales_by_category["Cappuccino"] - (9.98 + 4.99)).abs() < EPS);
    assert!((daily.sales_by_category["Club"] - 12.99).abs() < EPS);
    assert!((daily.sales_by_category["Chocolate"] - 6.99).abs() < EPS);

    // Three distinct hours were active
    assert_eq!(daily.peak_hours.len(), 3);

    let monthly = aggregate_monthly(std::slice::from_ref(&daily), day).unwrap();
    assert_eq!(monthly.month, "August 2026");
    assert_eq!(monthly.total_bills, 3);
    assert_eq!(monthly.total_customers, 3);
    assert!((monthly.total_sales - daily.total_sales).abs() < EPS);
    assert!((monthly.average_daily_sales - daily.total_sales).abs() < EPS);
    assert!(
        (monthly.net_profit - daily.total_sales * (1.0 - 0.30 - 0.25 - 0.05 - 0.05)).abs() < EPS
    );
}

#[test]
fn reports_serialize_to_json() {
    let catalog = Catalog::demo();
    let tea = product(&catalog, "Green Tea");

    let mut register = Register::new();
    register.cart_mut().add(&tea);
    register.checkout(at(20, 10, 0), "Cash", "").unwrap();

    let day = NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();
    let daily = aggregate_daily(register.completed_bills(), day);
    let monthly = aggregate_monthly(std::slice::from_ref(&daily), day).unwrap();

    let daily_json = serde_json::to_value(&daily).unwrap();
    assert_eq!(daily_json["date"], "2026-08-20");
    assert_eq!(daily_json["total_bills"], 1);

    let monthly_json = serde_json::to_value(&monthly).unwrap();
    assert_eq!(monthly_json["month"], "August 2026");
    assert_eq!(monthly_json["total_customers"], 1);
}
