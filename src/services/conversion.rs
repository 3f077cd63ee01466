use super::exchange_rate::RateTable;

/// Convert `amount` between two currencies via the shared USD base.
///
/// Both rates are units of currency per 1 USD, so the base cancels:
/// `amount * rates[to] / rates[from]`. Returns `None` when either code is
/// absent from the table. A zero `from` rate is not guarded; the division
/// follows IEEE semantics.
pub fn convert(amount: f64, rates: &RateTable, from: &str, to: &str) -> Option<f64> {
    let from_rate = rates.get(from)?;
    let to_rate = rates.get(to)?;

    Some(amount * to_rate / from_rate)
}
