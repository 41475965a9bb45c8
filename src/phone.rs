//! Phone-cell quick actions: call, SMS, and WhatsApp links.
//!
//! WhatsApp wants a bare international number, so local Moroccan numbers
//! (`06...`, `07...`) are rewritten to their `212` form before building the
//! `wa.me` link.

use wasm_bindgen::prelude::*;

/// Country calling code used for WhatsApp number normalization.
const COUNTRY_PREFIX: &str = "212";

/// `tel:` link for the dialer.
#[must_use]
#[wasm_bindgen(js_name = telUrl)]
pub fn tel_url(phone: &str) -> String {
    format!("tel:{}", phone.trim())
}

/// `sms:` link for the messaging app.
#[must_use]
#[wasm_bindgen(js_name = smsUrl)]
pub fn sms_url(phone: &str) -> String {
    format!("sms:{}", phone.trim())
}

/// Strip formatting and rewrite a local number to its international form.
#[must_use]
pub fn normalize_whatsapp_number(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '+' | '(' | ')'))
        .collect();
    if let Some(rest) = digits.strip_prefix('0') {
        return format!("{COUNTRY_PREFIX}{rest}");
    }
    if digits.starts_with(COUNTRY_PREFIX) {
        digits
    } else {
        format!("{COUNTRY_PREFIX}{digits}")
    }
}

/// Prefilled WhatsApp message referencing the order code.
#[must_use]
pub fn whatsapp_message(order_code: &str) -> String {
    format!(
        "Bonjour, je vous appelé à propos de votre commande N° {order_code}, \
         Merci de me répondre."
    )
}

/// `wa.me` deep link with the prefilled message.
#[must_use]
#[wasm_bindgen(js_name = whatsappUrl)]
pub fn whatsapp_url(phone: &str, order_code: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        normalize_whatsapp_number(phone),
        percent_encode(&whatsapp_message(order_code))
    )
}

/// Minimal query-component percent encoding (RFC 3986 unreserved set).
fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("0612345678", "212612345678"; "leading zero replaced")]
    #[test_case("+212 612-345-678", "212612345678"; "formatted international")]
    #[test_case("612345678", "212612345678"; "bare local digits")]
    #[test_case("212612345678", "212612345678"; "already normalized")]
    fn normalizes_numbers(input: &str, expected: &str) {
        assert_eq!(normalize_whatsapp_number(input), expected);
    }

    #[test]
    fn wa_link_carries_encoded_message() {
        let url = whatsapp_url("0612345678", "CMD-42");
        assert!(url.starts_with("https://wa.me/212612345678?text="));
        assert!(url.contains("CMD-42"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn dialer_links_keep_the_raw_number() {
        assert_eq!(tel_url(" 0612345678 "), "tel:0612345678");
        assert_eq!(sms_url("0612345678"), "sms:0612345678");
    }
}
