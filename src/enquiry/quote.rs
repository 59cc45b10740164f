// SPDX-License-Identifier: MPL-2.0
//! Price estimates for order enquiries.

use crate::catalog::Category;
use crate::config::DELIVERY_FEE_RAND;
use crate::i18n::fluent::I18n;

/// Purpose selected in the enquiry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnquiryType {
    #[default]
    Order,
    Pricing,
    Volunteer,
    Sponsor,
}

impl EnquiryType {
    pub const ALL: [EnquiryType; 4] = [
        EnquiryType::Order,
        EnquiryType::Pricing,
        EnquiryType::Volunteer,
        EnquiryType::Sponsor,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            EnquiryType::Order => "enquiry-type-order",
            EnquiryType::Pricing => "enquiry-type-pricing",
            EnquiryType::Volunteer => "enquiry-type-volunteer",
            EnquiryType::Sponsor => "enquiry-type-sponsor",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EnquiryType::Order => "order",
            EnquiryType::Pricing => "pricing",
            EnquiryType::Volunteer => "volunteer",
            EnquiryType::Sponsor => "sponsor",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value.trim())
    }
}

/// Product an order enquiry is about. Anything unrecognised is priced as a
/// mixed pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductInterest {
    Cut(Category),
    #[default]
    Mixed,
}

impl ProductInterest {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        value
            .trim()
            .parse::<Category>()
            .map_or(ProductInterest::Mixed, ProductInterest::Cut)
    }

    /// Rand per kilogram.
    #[must_use]
    pub fn price_per_kg(self) -> f64 {
        match self {
            ProductInterest::Cut(Category::Beef) => 180.0,
            ProductInterest::Cut(Category::Chicken) => 120.0,
            ProductInterest::Cut(Category::Lamb) => 220.0,
            ProductInterest::Cut(Category::Pork) => 150.0,
            ProductInterest::Cut(Category::Goat) => 200.0,
            ProductInterest::Mixed => 170.0,
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ProductInterest::Cut(category) => category.i18n_key(),
            ProductInterest::Mixed => "category-mixed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnquiryRequest {
    pub enquiry_type: EnquiryType,
    pub product: ProductInterest,
    pub quantity_kg: f64,
    pub delivery: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub product: ProductInterest,
    pub quantity_kg: f64,
    pub estimated: f64,
    pub delivery_fee: Option<f64>,
    pub total: f64,
}

impl Quote {
    #[must_use]
    pub fn new(product: ProductInterest, quantity_kg: f64, delivery: bool) -> Self {
        let estimated = quantity_kg * product.price_per_kg();
        let delivery_fee = delivery.then_some(DELIVERY_FEE_RAND);
        Self {
            product,
            quantity_kg,
            estimated,
            delivery_fee,
            total: estimated + delivery_fee.unwrap_or(0.0),
        }
    }
}

/// What the shop answers to a submitted enquiry.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Volunteer,
    Sponsor,
    Quote(Quote),
}

impl Response {
    #[must_use]
    pub fn for_request(request: &EnquiryRequest) -> Self {
        match request.enquiry_type {
            EnquiryType::Volunteer => Response::Volunteer,
            EnquiryType::Sponsor => Response::Sponsor,
            EnquiryType::Order | EnquiryType::Pricing => Response::Quote(Quote::new(
                request.product,
                request.quantity_kg,
                request.delivery,
            )),
        }
    }

    /// Localized multi-line text shown in the response dialog.
    #[must_use]
    pub fn render(&self, i18n: &I18n) -> String {
        match self {
            Response::Volunteer => i18n.tr("enquiry-response-volunteer"),
            Response::Sponsor => i18n.tr("enquiry-response-sponsor"),
            Response::Quote(quote) => {
                let product = i18n.tr(quote.product.i18n_key());
                let quantity = format!("{}", quote.quantity_kg);
                let estimated = rand(quote.estimated);
                let total = rand(quote.total);
                let mut lines = vec![
                    i18n.tr("enquiry-response-quote-intro"),
                    String::new(),
                    i18n.tr_with_args("enquiry-response-product", &[("product", &product)]),
                    i18n.tr_with_args("enquiry-response-quantity", &[("quantity", &quantity)]),
                    i18n.tr_with_args("enquiry-response-estimated", &[("amount", &estimated)]),
                ];
                if let Some(fee) = quote.delivery_fee {
                    let fee = rand(fee);
                    lines.push(i18n.tr_with_args("enquiry-response-delivery", &[("amount", &fee)]));
                }
                lines.push(i18n.tr_with_args("enquiry-response-total", &[("amount", &total)]));
                lines.push(String::new());
                lines.push(i18n.tr("enquiry-response-availability"));
                lines.push(String::new());
                lines.push(i18n.tr("enquiry-response-followup"));
                lines.join("\n")
            }
        }
    }
}

fn rand(amount: f64) -> String {
    format!("R{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn request(enquiry_type: EnquiryType, product: &str, quantity_kg: f64, delivery: bool) -> EnquiryRequest {
        EnquiryRequest {
            enquiry_type,
            product: ProductInterest::parse(product),
            quantity_kg,
            delivery,
        }
    }

    #[test]
    fn order_quote_multiplies_price_and_adds_delivery() {
        let response = Response::for_request(&request(EnquiryType::Order, "lamb", 2.0, true));
        let Response::Quote(quote) = response else {
            panic!("expected a quote");
        };
        assert_eq!(quote.estimated, 440.0);
        assert_eq!(quote.delivery_fee, Some(50.0));
        assert_eq!(quote.total, 490.0);
    }

    #[test]
    fn pricing_quote_without_delivery() {
        let Response::Quote(quote) =
            Response::for_request(&request(EnquiryType::Pricing, "chicken", 1.5, false))
        else {
            panic!("expected a quote");
        };
        assert_eq!(quote.estimated, 180.0);
        assert_eq!(quote.delivery_fee, None);
        assert_eq!(quote.total, 180.0);
    }

    #[test]
    fn unknown_product_is_priced_as_mixed() {
        assert_eq!(ProductInterest::parse("venison"), ProductInterest::Mixed);
        assert_eq!(ProductInterest::parse(""), ProductInterest::Mixed);
        assert_eq!(ProductInterest::Mixed.price_per_kg(), 170.0);
    }

    #[test]
    fn volunteer_and_sponsor_get_acknowledgements() {
        assert_eq!(
            Response::for_request(&request(EnquiryType::Volunteer, "beef", 3.0, true)),
            Response::Volunteer
        );
        assert_eq!(
            Response::for_request(&request(EnquiryType::Sponsor, "beef", 3.0, true)),
            Response::Sponsor
        );
    }

    #[test]
    fn enquiry_type_parsing() {
        assert_eq!(EnquiryType::parse("sponsor"), Some(EnquiryType::Sponsor));
        assert_eq!(EnquiryType::parse(" order "), Some(EnquiryType::Order));
        assert_eq!(EnquiryType::parse("complaint"), None);
    }

    #[test]
    fn rendered_quote_lists_amounts() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let text = Response::for_request(&request(EnquiryType::Order, "beef", 2.0, true)).render(&i18n);
        assert!(text.contains("R360.00"), "{text}");
        assert!(text.contains("R50.00"), "{text}");
        assert!(text.contains("R410.00"), "{text}");
        assert!(text.contains("Beef"), "{text}");
    }
}
