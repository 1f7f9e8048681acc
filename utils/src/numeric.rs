/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of pulley-sim.
 *
 * pulley-sim is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * pulley-sim is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with pulley-sim. If not, see <https://www.gnu.org/licenses/>.
 */

/// Format a number with a fixed amount of decimal places and `,` grouping
/// of the integer part, e.g. `1234.5` -> `1,234.50`
pub fn format_number(num: f64, decimal_places: usize) -> String {
    if !num.is_finite() {
        return num.to_string();
    }
    let formatted = format!("{:.*}", decimal_places, num.abs());
    let (integer_part, fraction_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None)
    };

    let mut grouped = String::with_capacity(formatted.len() + integer_part.len() / 3 + 1);
    for (idx, c) in integer_part.chars().enumerate() {
        if idx > 0 && (integer_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(fraction) = fraction_part {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if num.is_sign_negative() && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

pub fn clamp_to_range(val: f64, min: f64, max: f64) -> f64 {
    if val.is_nan() {
        return min;
    }
    val.max(min).min(max)
}
