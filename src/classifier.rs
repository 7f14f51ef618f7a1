//! Banned-term filter deciding whether a listing is worth a look.
//!
//! Matching is plain substring containment on lower-cased text. There is no
//! tokenization, so a short term such as `u.etg` also hits inside longer
//! words.

/// Terms that disqualify a listing: basement flats, shared housing and
/// short-term lets. Misspelled variants are intentional, they show up in
/// real adverts. "kollektivtilbud"/"kollektivtrafikk" must stay allowed, so
/// no bare "kollektiv" entry.
pub const BANNED_TERMS: &[&str] = &[
    "korttidsleie",
    "korttidsutleie",
    "kortidsleie",
    "kjeller leillehet",
    "kjeller leilighet",
    "kjellerleilighet",
    "kjeleleilihet",
    "kjellerstue",
    "sokkeletasje",
    "søkkel leilighet",
    "sokkel leilighet",
    "sokkell leilighet",
    "sokkelleillighet",
    "sokkelleilighet",
    "sokkel-leilighet",
    "sokkellleil",
    "sokkeletage",
    "sokkelbolig",
    "bofellesskap",
    "bofelleskap",
    "bokollektiv",
    "underetasjen",
    "underetasje",
    "u.etg",
    "fellesskap",
    "rom i bofellesskap",
];

/// Outcome of classifying one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Good,
    /// At least one banned term matched; all matches in term-list order.
    Bad { matched: Vec<String> },
    /// The text needed for classification could not be assembled.
    Inconclusive { reason: String },
}

impl Classification {
    /// Run the filter over already composed text.
    pub fn of_text<S: AsRef<str>>(text: &str, banned_terms: &[S]) -> Self {
        let matched: Vec<String> = matched_terms(text, banned_terms)
            .into_iter()
            .map(str::to_string)
            .collect();
        if matched.is_empty() {
            Classification::Good
        } else {
            Classification::Bad { matched }
        }
    }

    /// Inconclusive listings are let through rather than silently dropped.
    pub fn verdict(&self) -> bool {
        !matches!(self, Classification::Bad { .. })
    }
}

/// Lower-cased `property_type title body`, the text the filter runs over.
pub fn compose_text(property_type: &str, title: &str, body: &str) -> String {
    format!("{} {} {}", property_type, title, body).to_lowercase()
}

/// Every banned term contained in `text`, in list order.
pub fn matched_terms<'a, S: AsRef<str>>(text: &str, banned_terms: &'a [S]) -> Vec<&'a str> {
    banned_terms
        .iter()
        .map(|term| AsRef::<str>::as_ref(term))
        .filter(|term| text.contains(*term))
        .collect()
}

/// `true` when no banned term occurs in `text`.
pub fn classify<S: AsRef<str>>(text: &str, banned_terms: &[S]) -> bool {
    !banned_terms
        .iter()
        .any(|term| text.contains(AsRef::<str>::as_ref(term)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banned_term_rejects() {
        assert!(!classify("sokkelleilighet til leie", &["sokkelleilighet"]));
    }

    #[test]
    fn test_clean_text_passes() {
        assert!(classify("koselig leilighet", &["sokkelleilighet"]));
    }

    #[test]
    fn test_matches_inside_longer_words() {
        assert!(!classify("stor stue i u.etgen", &["u.etg"]));
        assert!(!classify("fint kollektivfellesskap", &["fellesskap"]));
    }

    #[test]
    fn test_public_transport_is_not_banned() {
        let text = compose_text("Leilighet", "Lys 2-roms", "Kort vei til kollektivtilbud.");
        assert!(classify(&text, BANNED_TERMS));
    }

    #[test]
    fn test_same_input_same_verdict() {
        let text = "hybel i underetasje med egen inngang";
        let first = classify(text, BANNED_TERMS);
        for _ in 0..10 {
            assert_eq!(classify(text, BANNED_TERMS), first);
        }
    }

    #[test]
    fn test_term_order_does_not_change_verdict() {
        let texts = [
            "sokkelleilighet med korttidsleie",
            "rom i bofellesskap",
            "nyoppusset leilighet med balkong",
        ];
        let mut reversed: Vec<&str> = BANNED_TERMS.to_vec();
        reversed.reverse();
        let mut rotated: Vec<&str> = BANNED_TERMS.to_vec();
        rotated.rotate_left(7);

        for text in texts {
            let expected = classify(text, BANNED_TERMS);
            assert_eq!(classify(text, &reversed), expected);
            assert_eq!(classify(text, &rotated), expected);
        }
    }

    #[test]
    fn test_matched_terms_keep_list_order() {
        let text = "rom i bofellesskap";
        assert_eq!(
            matched_terms(text, BANNED_TERMS),
            vec!["bofellesskap", "fellesskap", "rom i bofellesskap"]
        );
    }

    #[test]
    fn test_compose_text_lowercases_and_joins() {
        assert_eq!(
            compose_text("Leilighet", "Lys TOPPLEILIGHET", "Utleies nå"),
            "leilighet lys toppleilighet utleies nå"
        );
    }

    #[test]
    fn test_classification_verdicts() {
        assert!(Classification::of_text("fin leilighet", BANNED_TERMS).verdict());
        assert_eq!(
            Classification::of_text("sokkeletasje", BANNED_TERMS),
            Classification::Bad {
                matched: vec!["sokkeletasje".to_string()]
            }
        );
        let inconclusive = Classification::Inconclusive {
            reason: "no body".to_string(),
        };
        assert!(inconclusive.verdict());
    }
}
