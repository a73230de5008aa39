/// Renders an amount in Crores, e.g. `₹43.70 Cr`.
pub fn format_crores(value: f64) -> String {
    format!("₹{:.2} Cr", without_negative_zero(value))
}

/// Renders an amount in Lakhs, e.g. `₹2.00 Lakhs`.
pub fn format_lakhs(value: f64) -> String {
    format!("₹{:.2} Lakhs", without_negative_zero(value))
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.0}", without_negative_zero(hours))
}

fn without_negative_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
