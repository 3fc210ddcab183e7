// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// SMS segmentation following 3GPP TS 23.038 / 23.040.
//
// Text that fits the GSM 7-bit default alphabet is packed as septets; anything
// else falls back to UCS-2. A concatenated message loses room in every part to
// the user data header, hence the smaller per-part limits.

/// Septets in a single GSM 7-bit message.
pub const GSM7_SINGLE_LIMIT: usize = 160;
/// Septets per part of a concatenated GSM 7-bit message.
pub const GSM7_PART_LIMIT: usize = 153;
/// UTF-16 code units in a single UCS-2 message.
pub const UCS2_SINGLE_LIMIT: usize = 70;
/// UTF-16 code units per part of a concatenated UCS-2 message.
pub const UCS2_PART_LIMIT: usize = 67;

/// GSM 03.38 default alphabet, excluding the escape code.
const GSM7_BASIC: &str = "@£$¥èéùìòÇ\nØø\rÅåΔ_ΦΓΛΩΠΨΣΘΞÆæßÉ !\"#¤%&'()*+,-./0123456789:;<=>?\
¡ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÑÜ§¿abcdefghijklmnopqrstuvwxyzäöñüà";

/// GSM 03.38 extension table. Each character is sent as ESC + code.
const GSM7_EXTENSION: &str = "\u{0C}^{}\\[~]|€";

/// Character set chosen for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Gsm7,
    Ucs2,
}

impl Encoding {
    /// Pick the narrowest encoding that can represent `text`.
    pub fn detect(text: &str) -> Self {
        if text.chars().all(|c| gsm7_cost(c).is_some()) {
            Self::Gsm7
        } else {
            Self::Ucs2
        }
    }

    fn limits(self) -> (usize, usize) {
        match self {
            Self::Gsm7 => (GSM7_SINGLE_LIMIT, GSM7_PART_LIMIT),
            Self::Ucs2 => (UCS2_SINGLE_LIMIT, UCS2_PART_LIMIT),
        }
    }

    fn cost(self, c: char) -> usize {
        match self {
            Self::Gsm7 => gsm7_cost(c).unwrap_or(1),
            Self::Ucs2 => c.len_utf16(),
        }
    }
}

/// Septets needed for `c`, or `None` if it is outside the GSM alphabet.
fn gsm7_cost(c: char) -> Option<usize> {
    if GSM7_BASIC.contains(c) {
        Some(1)
    } else if GSM7_EXTENSION.contains(c) {
        Some(2)
    } else {
        None
    }
}

/// Split `text` into transmissible parts.
///
/// Returns a single part when the whole text fits one message (an empty text
/// yields one empty part). Escape sequences and surrogate pairs are never
/// divided between parts.
pub fn divide_message(text: &str) -> Vec<String> {
    let encoding = Encoding::detect(text);
    let (single, per_part) = encoding.limits();

    let total: usize = text.chars().map(|c| encoding.cost(c)).sum();
    if total <= single {
        return vec![text.to_owned()];
    }

    let mut parts = Vec::with_capacity(total.div_ceil(per_part));
    let mut current = String::new();
    let mut used = 0;
    for c in text.chars() {
        let cost = encoding.cost(c);
        if used + cost > per_part {
            parts.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(c);
        used += cost;
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_ascii_is_one_part() {
        assert_eq!(divide_message("hi"), vec!["hi".to_string()]);
    }

    #[test]
    fn empty_message_is_one_empty_part() {
        assert_eq!(divide_message(""), vec![String::new()]);
    }

    #[test]
    fn gsm_boundary_is_160_septets() {
        let exact = "a".repeat(GSM7_SINGLE_LIMIT);
        assert_eq!(divide_message(&exact).len(), 1);

        let over = "a".repeat(GSM7_SINGLE_LIMIT + 1);
        let parts = divide_message(&over);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), GSM7_PART_LIMIT);
        assert_eq!(parts[1].len(), GSM7_SINGLE_LIMIT + 1 - GSM7_PART_LIMIT);
        assert_eq!(parts.concat(), over);
    }

    #[test]
    fn extension_characters_cost_two_septets() {
        // 80 euro signs = 160 septets, still a single message.
        let euros = "€".repeat(80);
        assert_eq!(Encoding::detect(&euros), Encoding::Gsm7);
        assert_eq!(divide_message(&euros).len(), 1);

        // 152 septets of 'a' then a '{' (2 septets) must not straddle parts.
        let text = format!("{}{{{}", "a".repeat(152), "b".repeat(10));
        let parts = divide_message(&text);
        assert_eq!(parts[0], "a".repeat(152));
        assert!(parts[1].starts_with('{'));
        assert_eq!(parts.concat(), text);
    }

    #[test]
    fn non_gsm_text_uses_ucs2_limits() {
        let exact = "ж".repeat(UCS2_SINGLE_LIMIT);
        assert_eq!(Encoding::detect(&exact), Encoding::Ucs2);
        assert_eq!(divide_message(&exact).len(), 1);

        let over = "ж".repeat(UCS2_SINGLE_LIMIT + 1);
        let parts = divide_message(&over);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].chars().count(), UCS2_PART_LIMIT);
        assert_eq!(parts.concat(), over);
    }

    #[test]
    fn surrogate_pairs_stay_whole() {
        // 66 BMP units, then an emoji needing 2 units, then more text.
        let text = format!("{}😀{}", "ж".repeat(66), "ж".repeat(10));
        let parts = divide_message(&text);
        assert_eq!(parts[0], "ж".repeat(66));
        assert!(parts[1].starts_with('😀'));
        assert_eq!(parts.concat(), text);
    }

    #[test]
    fn parts_preserve_order() {
        let text: String = (0..400).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let parts = divide_message(&text);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts.concat(), text);
    }
}
