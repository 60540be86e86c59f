//! Thai "baht text": reads a money amount out in words.
//!
//! The integer part is read in six-digit groups joined by the million word;
//! the fractional part (always rounded to two digits) is read with the same
//! rules and suffixed with the satang word, or replaced by the "whole amount"
//! word when it is zero.
//!
//! ```
//! use docket_bahttext::amount_to_words;
//!
//! assert_eq!(amount_to_words(21.0), "ยี่สิบเอ็ดบาทถ้วน");
//! assert_eq!(amount_to_words(160.5), "หนึ่งร้อยหกสิบบาทห้าสิบสตางค์");
//! ```

const DIGITS: [&str; 10] = [
    "ศูนย์", "หนึ่ง", "สอง", "สาม", "สี่", "ห้า", "หก", "เจ็ด", "แปด", "เก้า",
];

/// Position words for ones .. hundred-thousands.
const UNITS: [&str; 6] = ["", "สิบ", "ร้อย", "พัน", "หมื่น", "แสน"];

const ZERO: &str = "ศูนย์";
const MILLION: &str = "ล้าน";
const BAHT: &str = "บาท";
const WHOLE: &str = "ถ้วน";
const SATANG: &str = "สตางค์";

/// Irregular ones-position "one" in a multi-digit group (the `-one` of twenty-one).
const TRAILING_ONE: &str = "เอ็ด";
/// Irregular tens-position "two".
const TWENTY: &str = "ยี่สิบ";
const TEN: &str = "สิบ";

/// Converts an amount to Thai words.
///
/// Total over all inputs: non-finite and negative amounts read as zero.
pub fn amount_to_words(amount: f64) -> String {
    let amount = if amount.is_finite() && amount >= 0.0 { amount } else { 0.0 };

    let fixed = format!("{:.2}", amount);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let int_digits = int_part.trim_start_matches('0');
    let mut out = if int_digits.is_empty() {
        ZERO.to_string()
    } else {
        read_millions(int_digits)
    };
    out.push_str(BAHT);

    let satang: u32 = frac_part.parse().unwrap_or(0);
    if satang == 0 {
        out.push_str(WHOLE);
    } else {
        out.push_str(&read_group(&satang.to_string()));
        out.push_str(SATANG);
    }
    out
}

/// Reads an arbitrary-length digit string as groups of six, most significant first.
fn read_millions(digits: &str) -> String {
    if digits.len() <= 6 {
        return read_group(digits);
    }
    let (head, tail) = digits.split_at(digits.len() - 6);
    let mut out = read_millions(head);
    out.push_str(MILLION);
    out.push_str(&read_group(tail));
    out
}

/// Reads one group of at most six ASCII digits. Zero digits are silent, so an
/// all-zero group reads as the empty string.
fn read_group(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::new();

    for (k, b) in digits.bytes().enumerate() {
        let num = usize::from(b.wrapping_sub(b'0'));
        if num == 0 || num > 9 {
            continue;
        }
        match len - k - 1 {
            0 if num == 1 && len > 1 => out.push_str(TRAILING_ONE),
            0 => out.push_str(DIGITS[num]),
            1 => match num {
                1 => out.push_str(TEN),
                2 => out.push_str(TWENTY),
                _ => {
                    out.push_str(DIGITS[num]);
                    out.push_str(TEN);
                }
            },
            pos => {
                out.push_str(DIGITS[num]);
                out.push_str(UNITS.get(pos).copied().unwrap_or_default());
            }
        }
    }
    out
}
