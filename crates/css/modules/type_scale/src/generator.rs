//! Scale generation.

use crate::config::{SuffixType, TypeScaleConfig, Unit};
use crate::error::ConfigError;
use crate::mapping::ScaleMapping;
use log::{debug, trace};

/// Index of the step whose power is zero.
///
/// This is `max_step - min_step - 1`, not `min_step`. Generated output depends on
/// this exact offset, so it must not be "corrected".
pub fn base_index(min_step: u32, max_step: u32) -> i64 {
    i64::from(max_step) - i64::from(min_step) - 1
}

/// Fractional digits in the exact decimal expansion of the smallest subnormal `f64`.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Render `value` with exactly `precision` fractional digits.
///
/// The exact binary value is rounded once, with ties going away from zero, so
/// `1.15` (stored as `1.1499999...`) renders as `1.1`. Negative values keep
/// their sign even when they round to zero (`-0.001` renders as `-0.00`).
/// Non-finite values are rendered as-is.
pub fn format_fixed(value: f64, precision: u32) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let digits = precision as usize;
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS.max(digits + 1), value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(digits))
        .collect();
    if fraction
        .as_bytes()
        .get(digits)
        .is_some_and(|next| *next >= b'5')
    {
        round_up_digits(&mut kept);
    }

    let point = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..point].iter().map(|digit| char::from(*digit)));
    if digits > 0 {
        out.push('.');
        out.extend(kept[point..].iter().map(|digit| char::from(*digit)));
    }
    out
}

/// Add one unit in the last place to a run of ASCII decimal digits.
fn round_up_digits(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Screen and font bounds expressed in the output unit.
#[derive(Clone, Copy, Debug)]
struct Bounds {
    min_screen_width: f64,
    max_screen_width: f64,
    min_font_size: f64,
    max_font_size: f64,
}

impl Bounds {
    fn for_config(config: &TypeScaleConfig) -> Self {
        let divisor = match config.unit {
            Unit::Px => 1.0,
            Unit::Rem => config.root_font_size,
        };
        Self {
            min_screen_width: config.min_screen_width / divisor,
            max_screen_width: config.max_screen_width / divisor,
            min_font_size: config.min_font_size / divisor,
            max_font_size: config.max_font_size / divisor,
        }
    }
}

/// Generate the scale for `config`.
///
/// Produces `min_step + max_step + 1` entries in ascending step order. For each step,
/// with `power = step - base_index`, the font size runs from
/// `min_font_size * min_ratio^power` at `min_screen_width` to
/// `max_font_size * max_ratio^power` at `max_screen_width`, clamped outside that range.
///
/// # Errors
/// Returns [`ConfigError::InsufficientSuffixValues`] when `suffix_type` is `Values` and
/// there are not enough suffixes for every step. Nothing is computed in that case.
pub fn generate(config: &TypeScaleConfig) -> Result<ScaleMapping, ConfigError> {
    let last_step = u64::from(config.min_step) + u64::from(config.max_step);
    if config.suffix_type == SuffixType::Values && (config.suffix_values.len() as u64) <= last_step {
        return Err(ConfigError::InsufficientSuffixValues {
            required: last_step + 1,
            configured: config.suffix_values.len(),
            values: config.suffix_values.clone(),
        });
    }

    let base = base_index(config.min_step, config.max_step);
    let bounds = Bounds::for_config(config);
    trace!("type scale bounds in {}: {bounds:?}", config.unit);
    let unit = config.unit.suffix();
    let width_span = bounds.max_screen_width - bounds.min_screen_width;

    let mut mapping = ScaleMapping::with_capacity(usize::try_from(last_step + 1).unwrap_or(0));
    for step in 0..=last_step {
        let power = step as i64 - base;
        let exponent = power as f64;
        let fs_min = bounds.min_font_size * config.min_ratio.powf(exponent);
        let fs_max = bounds.max_font_size * config.max_ratio.powf(exponent);
        let slope = (fs_max - fs_min) / width_span;
        let y_intersect = fs_min - slope * bounds.min_screen_width;

        let value = format!(
            "clamp({}{unit}, {}vw + {}{unit}, {}{unit})",
            format_fixed(fs_min, config.precision),
            format_fixed(slope * 100.0, config.precision),
            format_fixed(y_intersect, config.precision),
            format_fixed(fs_max, config.precision),
        );
        let property = match config.suffix_type {
            SuffixType::Numbered => format!("--{}{power}", config.prefix),
            SuffixType::Values => {
                format!("--{}{}", config.prefix, config.suffix_values[step as usize])
            }
        };
        debug!("type scale step {step} (power {power}): {property}: {value}");
        mapping.push(property, value);
    }
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_index_offset() {
        assert_eq!(base_index(2, 5), 2);
        assert_eq!(base_index(0, 0), -1);
        assert_eq!(base_index(1, 1), -1);
        assert_eq!(base_index(5, 2), -4);
    }

    #[test]
    fn fixed_formatting() {
        assert_eq!(format_fixed(1.0, 2), "1.00");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(-0.125, 2), "-0.13");
        assert_eq!(format_fixed(14.947_368, 2), "14.95");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(1.333_333_3, 4), "1.3333");
        assert_eq!(format_fixed(99.5, 0), "100");
        assert_eq!(format_fixed(0.0, 2), "0.00");
        assert_eq!(format_fixed(-0.0, 2), "0.00");
    }

    #[test]
    fn fixed_formatting_rounds_the_stored_value_once() {
        // 1.15, 6.55 and 9.995 are stored just below the tie.
        assert_eq!(format_fixed(1.15, 1), "1.1");
        assert_eq!(format_fixed(6.55, 1), "6.5");
        assert_eq!(format_fixed(9.995, 2), "9.99");
    }

    #[test]
    fn fixed_formatting_keeps_sign_of_small_negatives() {
        assert_eq!(format_fixed(-0.001, 2), "-0.00");
        assert_eq!(format_fixed(-0.4, 0), "-0");
    }

    #[test]
    fn non_finite_values_are_rendered_as_is() {
        assert_eq!(format_fixed(f64::INFINITY, 2), "inf");
        assert_eq!(format_fixed(f64::NAN, 2), "NaN");
    }

    #[test]
    fn rounding_near_ties_flows_into_the_scale() {
        let config = TypeScaleConfig {
            unit: Unit::Px,
            min_font_size: 1.15,
            precision: 1,
            min_step: 0,
            max_step: 1,
            ..TypeScaleConfig::default()
        };
        let mapping = generate(&config);
        let value = mapping
            .as_ref()
            .ok()
            .and_then(|scale| scale.get("--font-size-0"))
            .map(str::to_owned);
        assert!(
            value.as_deref().is_some_and(|text| text.starts_with("clamp(1.1px, ")),
            "got {value:?}"
        );
    }

    #[test]
    fn degenerate_widths_are_not_rejected() {
        let config = TypeScaleConfig {
            min_screen_width: 800.0,
            max_screen_width: 800.0,
            min_step: 0,
            max_step: 1,
            ..TypeScaleConfig::default()
        };
        let mapping = generate(&config);
        assert_eq!(mapping.map(|scale| scale.len()), Ok(2));
    }

    #[test]
    fn values_error_is_raised_before_generation() {
        let config = TypeScaleConfig {
            suffix_type: SuffixType::Values,
            suffix_values: vec!["a".to_owned(), "b".to_owned()],
            min_step: 1,
            max_step: 1,
            ..TypeScaleConfig::default()
        };
        assert_eq!(
            generate(&config),
            Err(ConfigError::InsufficientSuffixValues {
                required: 3,
                configured: 2,
                values: vec!["a".to_owned(), "b".to_owned()],
            })
        );
    }
}
