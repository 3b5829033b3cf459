//! Statement generation: one pass over an invoice against a play catalog.

use crate::catalog::PlayCatalog;
use crate::error::Result;
use crate::invoice::Invoice;
use crate::money::Cents;
use crate::pricing;
use log::debug;

/// Generates the billing statement text for an invoice.
///
/// Performances are priced in invoice order; each contributes a report line,
/// its charge to the total, and its volume credits to the credit total. The
/// result is a newline-terminated multi-line string:
///
/// ```text
/// Statement for BigCo
///   hamlet: $650.00 (55 seats)
/// Amount owed is $650.00
/// You earned 25 credits
/// ```
///
/// # Errors
///
/// Fails with [`BillingError::PlayNotFound`](crate::BillingError::PlayNotFound)
/// if a performance references a play absent from the catalog. Any failure
/// aborts the whole generation; no partial statement is returned.
pub fn generate(invoice: &Invoice, catalog: &PlayCatalog) -> Result<String> {
    let mut total_charge = Cents::ZERO;
    let mut total_credits: u32 = 0;
    let mut report = format!("Statement for {}\n", invoice.customer);

    for performance in &invoice.performances {
        let play = catalog.resolve(&performance.play_id)?;
        let line = pricing::price(play.genre, performance.audience);

        debug!(
            "{}: {} seats at {} -> {}, {} credits",
            play.id, performance.audience, play.genre, line.charge, line.credits
        );

        report.push_str(&format!(
            "  {}: {} ({} seats)\n",
            play.id, line.charge, performance.audience
        ));
        total_charge += line.charge;
        total_credits += line.credits;
    }

    report.push_str(&format!("Amount owed is {}\n", total_charge));
    report.push_str(&format!("You earned {} credits\n", total_credits));
    Ok(report)
}
