//! WhatsApp hand-off messages.
//!
//! Orders are not stored anywhere: the cart and the customer's details are
//! rendered into a text message and handed to WhatsApp through a `wa.me`
//! deep link.

use std::fmt::Write as _;

use crate::cart::CartLine;
use crate::forms::CustomerDetails;
use crate::i18n::Translator;

/// Render an order as a WhatsApp message.
///
/// ```
/// use witherstex_core::checkout::compose_order_message;
/// use witherstex_core::forms::CustomerDetails;
/// use witherstex_core::Translator;
///
/// let details = CustomerDetails {
///     first_name: "Amina".into(),
///     last_name: "Benali".into(),
///     ..CustomerDetails::default()
/// };
/// let message = compose_order_message(Translator::default(), &details, &[]);
/// assert!(message.starts_with("🧤 *Nouvelle commande Witherstex*"));
/// assert!(message.contains("\nAmina Benali\n"));
/// ```
#[must_use]
pub fn compose_order_message(
    t: Translator,
    details: &CustomerDetails,
    lines: &[CartLine],
) -> String {
    let mut message = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(message, "{}", t.t("message.order.title"));
    message.push('\n');

    let _ = writeln!(message, "{}", t.t("message.order.customer"));
    let _ = writeln!(message, "{} {}", details.first_name.trim(), details.last_name.trim());
    if let Some(company) = details.company() {
        let _ = writeln!(message, "{}: {company}", t.t("message.order.company"));
    }
    let _ = writeln!(message, "{}: {}", t.t("message.order.email"), details.email.trim());
    let _ = writeln!(message, "{}: {}", t.t("message.order.phone"), details.phone.trim());
    message.push('\n');

    let _ = writeln!(message, "{}", t.t("message.order.address"));
    let _ = writeln!(message, "{}", details.address.trim());
    let _ = writeln!(
        message,
        "{} {}, {}",
        details.postal_code.trim(),
        details.city.trim(),
        details.country.trim()
    );
    message.push('\n');

    let _ = writeln!(message, "{}", t.t("message.order.items"));
    for line in lines {
        let _ = writeln!(
            message,
            "• {} x{} {} ({} {})",
            line.product.name,
            line.quantity,
            t.t("message.order.packages"),
            line.pieces(),
            t.t("message.order.pieces"),
        );
    }
    message.push('\n');

    message.push_str(t.t("message.order.closing"));
    message
}

/// Render a "tell me more about this product" message.
#[must_use]
pub fn compose_product_inquiry(t: Translator, product_name: &str) -> String {
    t.fill("message.inquiry", "product", product_name)
}

/// Build a `wa.me` deep link for `number` carrying `text`.
///
/// Everything but the digits of `number` is dropped; `text` is
/// percent-encoded.
#[must_use]
pub fn whatsapp_link(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}?text={}", urlencoding::encode(text))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::product::tests::sample_product;

    fn details() -> CustomerDetails {
        CustomerDetails {
            first_name: "Amina".to_owned(),
            last_name: "Benali".to_owned(),
            email: "amina@usine.ma".to_owned(),
            phone: "0695323014".to_owned(),
            company: String::new(),
            address: "LOT 28, Zone Industrielle".to_owned(),
            city: "Settat".to_owned(),
            postal_code: "26000".to_owned(),
            country: "Maroc".to_owned(),
        }
    }

    fn lines() -> Vec<CartLine> {
        vec![
            CartLine {
                product: sample_product("1", "ProGrip Industriel", 30),
                quantity: 10,
            },
            CartLine {
                product: sample_product("2", "ChemGuard Pro", 12),
                quantity: 2,
            },
        ]
    }

    #[test]
    fn test_french_order_message_layout() {
        let message = compose_order_message(Translator::new(Language::Fr), &details(), &lines());
        let expected = "🧤 *Nouvelle commande Witherstex*\n\
            \n\
            *Client:*\n\
            Amina Benali\n\
            Email: amina@usine.ma\n\
            Tél: 0695323014\n\
            \n\
            *Adresse de livraison:*\n\
            LOT 28, Zone Industrielle\n\
            26000 Settat, Maroc\n\
            \n\
            *Articles commandés:*\n\
            • ProGrip Industriel x10 colis (300 pièces)\n\
            • ChemGuard Pro x2 colis (24 pièces)\n\
            \n\
            Merci de confirmer la disponibilité, le prix et le délai de livraison.";
        assert_eq!(message, expected);
    }

    #[test]
    fn test_company_line_only_when_present() {
        let mut details = details();
        details.company = "Atlas Gants".to_owned();
        let message = compose_order_message(Translator::new(Language::Fr), &details, &lines());
        assert!(message.contains("Amina Benali\nEntreprise: Atlas Gants\nEmail: amina@usine.ma"));
    }

    #[test]
    fn test_english_order_message_uses_dictionary() {
        let message = compose_order_message(Translator::new(Language::En), &details(), &lines());
        assert!(message.starts_with("🧤 *New Witherstex order*"));
        assert!(message.contains("• ProGrip Industriel x10 packages (300 pieces)"));
        assert!(message.contains("Phone: 0695323014"));
    }

    #[test]
    fn test_product_inquiry() {
        assert_eq!(
            compose_product_inquiry(Translator::new(Language::Fr), "ChemGuard Pro"),
            "Bonjour, je suis intéressé par le produit \"ChemGuard Pro\". Pouvez-vous me donner plus d'informations ?"
        );
    }

    #[test]
    fn test_whatsapp_link_encodes_text() {
        let link = whatsapp_link("+212 720-736224", "Bonjour & merci\n*x2*");
        assert_eq!(
            link,
            "https://wa.me/212720736224?text=Bonjour%20%26%20merci%0A%2Ax2%2A"
        );
    }

    #[test]
    fn test_whatsapp_link_round_trips_message() {
        let message = compose_order_message(Translator::default(), &details(), &lines());
        let link = whatsapp_link("212720736224", &message);
        let encoded = link.split_once("?text=").unwrap().1;
        assert_eq!(urlencoding::decode(encoded).unwrap(), message);
    }
}
