/// Reads the leading figure of a free-text salary such as `R$ 1.800 - R$ 2.500`.
///
/// Only the text before the first `-` is considered. Everything except digits
/// and commas is dropped and the comma is read as the decimal separator, so
/// `1.800` becomes `1800` and `1.800,50` becomes `1800.5`. Returns `None` when
/// nothing numeric survives (`A combinar`), which callers treat as "do not
/// filter this posting out".
pub fn parse_leading_salary(salary_range: &str) -> Option<f64> {
    let leading = salary_range.split('-').next().unwrap_or_default();
    let cleaned: String = leading
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok()
}
