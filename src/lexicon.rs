//! Static keyword lexicon for local text scoring.
//!
//! Six weighted categories, each a group of trigger phrases sharing one
//! detection rationale. The set and weights are fixed at compile time;
//! matching is case-insensitive substring containment against normalized
//! input, so a phrase like "account block" matches contiguous substrings
//! only and may overlap shorter phrases in other categories.

/// One weighted group of trigger phrases.
#[derive(Debug)]
pub struct Category {
    pub name: &'static str,
    /// Score contribution per matching phrase, always >= 1.
    pub weight: u32,
    /// Lowercase phrases in declared match order.
    pub phrases: &'static [&'static str],
    /// User-facing reason label appended once per matching phrase.
    pub reason: &'static str,
}

/// Categories in fixed iteration order. Scoring walks this slice front to
/// back, which pins the reason ordering for identical input.
pub static LEXICON: [Category; 6] = [
    Category {
        name: "urgency",
        weight: 1,
        phrases: &[
            "urgent",
            "immediately",
            "right now",
            "jaldi",
            "abhi",
            "turant",
            "warning",
        ],
        reason: "Urgency pressure detected",
    },
    Category {
        name: "fear",
        weight: 2,
        phrases: &[
            "account block",
            "band ho jayega",
            "suspend",
            "freeze",
            "legal action",
            "penalty",
        ],
        reason: "Fear / threat language",
    },
    Category {
        name: "financial",
        weight: 3,
        phrases: &[
            "bank",
            "account",
            "otp",
            "payment",
            "upi",
            "transaction",
            "pin",
            "verify account",
        ],
        reason: "Financial targeting",
    },
    Category {
        name: "authority",
        weight: 2,
        phrases: &[
            "rbi",
            "bank manager",
            "government",
            "income tax",
            "whatsapp team",
            "support team",
        ],
        reason: "Authority impersonation",
    },
    Category {
        name: "reward",
        weight: 2,
        phrases: &[
            "free",
            "reward",
            "gift",
            "win",
            "cashback",
            "offer",
            "prize",
            "jeet gaye",
        ],
        reason: "Reward bait detected",
    },
    Category {
        name: "manipulation",
        weight: 2,
        phrases: &[
            "forward",
            "share",
            "send to",
            "sabko bhejo",
            "10 logon ko",
            "viral",
        ],
        reason: "Social forwarding manipulation",
    },
];

#[cfg(test)]
mod tests {
    use super::LEXICON;

    #[test]
    fn category_order_is_fixed() {
        let names: Vec<&str> = LEXICON.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            [
                "urgency",
                "fear",
                "financial",
                "authority",
                "reward",
                "manipulation"
            ]
        );
    }

    #[test]
    fn weights_match_declared_values() {
        let weights: Vec<u32> = LEXICON.iter().map(|c| c.weight).collect();
        assert_eq!(weights, [1, 2, 3, 2, 2, 2]);
        assert!(weights.iter().all(|&w| w >= 1));
    }

    #[test]
    fn phrases_are_lowercase_and_nonempty() {
        for category in &LEXICON {
            assert!(!category.phrases.is_empty(), "{} has no phrases", category.name);
            for phrase in category.phrases {
                assert!(!phrase.is_empty());
                assert_eq!(*phrase, phrase.to_lowercase().as_str());
            }
        }
    }
}
