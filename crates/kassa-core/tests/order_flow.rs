//! End-to-end order flows through the public API.

use kassa_core::{process_lines, Catalog, Category, CoreError, Product, Receipt};
use rust_decimal::Decimal;

fn store() -> Catalog {
    let fruit = |code: &str, name: &str, price: i64, qty: i64| {
        Product::new(
            code,
            name,
            Category::Fruits,
            Decimal::new(price, 0),
            Decimal::ONE,
            Decimal::new(qty, 0),
        )
        .unwrap()
    };
    let veg = |code: &str, name: &str, price: i64, qty: i64| Product {
        category: Category::Vegetables,
        ..fruit(code, name, price, qty)
    };

    Catalog::new(vec![
        fruit("001", "Банан", 105, 100),
        fruit("002", "Яблоко", 150, 50),
        veg("003", "Огурец", 200, 30),
        veg("004", "Помидор", 300, 20),
        veg("005", "Картошка", 50, 100),
    ])
    .unwrap()
}

#[test]
fn two_identical_lines_merge_into_one_item() {
    let catalog = Catalog::new(vec![Product::new(
        "001",
        "Банан",
        Category::Fruits,
        Decimal::new(1050, 1),
        Decimal::new(10, 1),
        Decimal::new(100, 0),
    )
    .unwrap()])
    .unwrap();

    let mut receipt = Receipt::new();
    process_lines(["1 Банан", "1 Банан"], &catalog, &mut receipt).unwrap();

    assert_eq!(receipt.len(), 1);
    let item = receipt.get("001").unwrap();
    assert_eq!(item.quantity, Decimal::new(2, 0));
    assert_eq!(item.cost().to_string(), "210.00");

    let rendered = receipt.render();
    assert_eq!(rendered.matches("210.00").count(), 2);
    assert!(rendered.contains("Сумма: 210.00"));
}

#[test]
fn separator_x_leaves_a_leading_space_that_matches_nothing() {
    let mut receipt = Receipt::new();
    process_lines(["1x Банан"], &store(), &mut receipt).unwrap();

    assert!(receipt.is_empty());
    assert_eq!(receipt.unresolved(), [" Банан"]);
}

#[test]
fn all_lines_unresolved_renders_only_the_title() {
    let mut receipt = Receipt::new();
    let summary = process_lines(
        ["2 Ананас", "xyz", "1 Манго."],
        &store(),
        &mut receipt,
    )
    .unwrap();

    assert_eq!(summary.unresolved, 3);
    assert_eq!(receipt.unresolved(), ["Ананас", "unknown", "Манго"]);
    assert_eq!(receipt.render(), "Чек:\n");
}

#[test]
fn mixed_order_renders_in_input_order() {
    let lines = "\
2 Картошка
1 Огурец.
4 Ананас
remove 1 Огурец
3 Помидор
1 Картошка
";
    let mut receipt = Receipt::new();
    process_lines(lines.lines(), &store(), &mut receipt).unwrap();

    let expected = "\
Чек:
Картошка....3.00 150.00*50.00....
Сумма: 1050.00
Не найдено:
Ананас
Помидор....3.00 900.00*300.00....
Сумма: 1050.00
Не найдено:
Ананас
";
    assert_eq!(receipt.render(), expected);
    assert_eq!(receipt.total().to_string(), "1050.00");
}

#[test]
fn remove_then_add_starts_fresh() {
    let mut receipt = Receipt::new();
    process_lines(
        ["5 Банан", "delete 1 Банан", "2 Банан"],
        &store(),
        &mut receipt,
    )
    .unwrap();

    assert_eq!(receipt.get("001").unwrap().quantity, Decimal::new(2, 0));
}

#[test]
fn unknown_query_is_not_found() {
    let err = store().resolve("xyz123", Decimal::ZERO).unwrap_err();
    assert!(matches!(err, CoreError::ProductNotFound(q) if q == "xyz123"));
}

#[test]
fn catalog_is_untouched_by_a_run() {
    let catalog = store();
    let mut receipt = Receipt::new();
    process_lines(["9 Яблоко", "9 Яблоко"], &catalog, &mut receipt).unwrap();

    assert_eq!(receipt.get("002").unwrap().quantity, Decimal::new(18, 0));
    assert_eq!(catalog.get("002").unwrap().quantity, Decimal::new(50, 0));
}
