use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to cents, ties away from zero (`10.005` becomes `10.01`).
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounded to cents and carrying exactly two decimal places, so the
/// serialized string reads `30.00` rather than `30`.
pub fn to_cents(value: Decimal) -> Decimal {
    let mut rounded = round_to_cents(value);
    rounded.rescale(2);
    rounded
}

/// Pads to at least two decimal places without rounding away precision.
pub fn with_cent_scale(value: Decimal) -> Decimal {
    let mut padded = value;
    if padded.scale() < 2 {
        padded.rescale(2);
    }
    padded
}

/// Plain two-decimal rendering with no currency symbol or grouping.
pub fn format_amount(value: Decimal) -> String {
    to_cents(value).to_string()
}
