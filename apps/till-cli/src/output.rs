//! Printing of receipts and the denomination table, as text or JSON.

use serde::Serialize;
use till_core::{ChangeReport, DenominationKind, Locale, Money, Receipt, Supply};

#[derive(Debug, Serialize)]
struct ChangeOutput<'a> {
    receipt: &'a Receipt,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a ChangeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct DenominationRow {
    id: &'static str,
    face_value_cents: u64,
    kind: DenominationKind,
    stock: u64,
}

/// Prints the outcome of `till change`.
///
/// `error` carries the machine-readable reason when no report exists.
pub fn print_change(
    receipt: &Receipt,
    report: Option<&ChangeReport>,
    error: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let output = ChangeOutput {
            receipt,
            report,
            error,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{receipt}");
    }
    Ok(())
}

/// Prints `till denominations`.
pub fn print_denominations(supply: &Supply, locale: &Locale, json: bool) -> anyhow::Result<()> {
    let rows: Vec<DenominationRow> = supply
        .iter()
        .map(|(d, stock)| DenominationRow {
            id: d.id,
            face_value_cents: d.face_value_cents,
            kind: d.kind(),
            stock,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{:<12} {:>11}  {:<5} {:>6}", "ID", "VALUE", "KIND", "STOCK");
    for row in &rows {
        let kind = match row.kind {
            DenominationKind::Bill => &locale.bill_label,
            DenominationKind::Coin => &locale.coin_label,
        };
        println!(
            "{:<12} {:>11}  {:<5} {:>6}",
            row.id,
            locale.format_money(Money::from_minor_units(row.face_value_cents)),
            kind,
            row.stock
        );
    }
    println!(
        "Drawer total: {}",
        locale.format_money(Money::from_minor_units(supply.total_value_cents()))
    );
    Ok(())
}
