//! Success rule for an assembled record.
//!
//! A page counts as a scrapeable product page when every [`SuccessCheck`]
//! passes. The checks are independent and evaluated once.

use std::fmt;

/// One condition a product page must meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessCheck {
    /// `div#dp-container` is present.
    PrimaryContainer,
    /// The title was found.
    Title,
    /// The ASIN was found.
    Asin,
    /// A price at or above the configured minimum was found.
    Price,
}

impl SuccessCheck {
    /// All checks, in evaluation order.
    pub const ALL: [Self; 4] = [Self::PrimaryContainer, Self::Title, Self::Asin, Self::Price];
}

impl fmt::Display for SuccessCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PrimaryContainer => "primary container present",
            Self::Title => "title present",
            Self::Asin => "asin present",
            Self::Price => "price at or above minimum",
        };
        f.write_str(name)
    }
}

/// The extracted values the success rule looks at.
#[derive(Debug, Clone, Copy)]
pub struct Evidence<'a> {
    pub has_primary_container: bool,
    pub title: Option<&'a str>,
    pub asin: Option<&'a str>,
    pub price_amount: Option<f64>,
    pub min_price_amount: f64,
}

impl Evidence<'_> {
    /// Whether `check` holds for this page.
    #[must_use]
    pub fn passes(&self, check: SuccessCheck) -> bool {
        match check {
            SuccessCheck::PrimaryContainer => self.has_primary_container,
            SuccessCheck::Title => self.title.is_some(),
            SuccessCheck::Asin => self.asin.is_some(),
            SuccessCheck::Price => self
                .price_amount
                .is_some_and(|amount| amount >= self.min_price_amount),
        }
    }

    /// Checks that do not hold, in evaluation order.
    #[must_use]
    pub fn failed_checks(&self) -> Vec<SuccessCheck> {
        SuccessCheck::ALL
            .into_iter()
            .filter(|check| !self.passes(*check))
            .collect()
    }

    /// Whether every check holds.
    #[must_use]
    pub fn is_success(&self) -> bool {
        SuccessCheck::ALL.into_iter().all(|check| self.passes(check))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good() -> Evidence<'static> {
        Evidence {
            has_primary_container: true,
            title: Some("Acme Wireless Mouse"),
            asin: Some("B000TEST01"),
            price_amount: Some(19.99),
            min_price_amount: 0.01,
        }
    }

    #[test]
    fn test_all_checks_pass() {
        let evidence = good();
        assert!(evidence.is_success());
        assert!(evidence.failed_checks().is_empty());
    }

    #[test]
    fn test_each_check_fails_independently() {
        let cases = [
            (Evidence { has_primary_container: false, ..good() }, SuccessCheck::PrimaryContainer),
            (Evidence { title: None, ..good() }, SuccessCheck::Title),
            (Evidence { asin: None, ..good() }, SuccessCheck::Asin),
            (Evidence { price_amount: None, ..good() }, SuccessCheck::Price),
            (Evidence { price_amount: Some(0.0), ..good() }, SuccessCheck::Price),
        ];

        for (evidence, expected) in cases {
            assert!(!evidence.is_success(), "{expected} should fail");
            assert_eq!(evidence.failed_checks(), vec![expected]);
        }
    }

    #[test]
    fn test_empty_title_still_counts_as_present() {
        let evidence = Evidence { title: Some(""), ..good() };
        assert!(evidence.is_success());
    }

    #[test]
    fn test_price_at_minimum_passes() {
        let evidence = Evidence { price_amount: Some(0.01), ..good() };
        assert!(evidence.is_success());
    }

    #[test]
    fn test_multiple_failures_reported_in_order() {
        let evidence = Evidence {
            has_primary_container: false,
            price_amount: None,
            ..good()
        };
        assert_eq!(
            evidence.failed_checks(),
            vec![SuccessCheck::PrimaryContainer, SuccessCheck::Price]
        );
    }
}
