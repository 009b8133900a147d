use proptest::prelude::*;
use shortcut_quiz::session::{is_correct, normalize_answer};

// --- STRATEGIES ---

prop_compose! {
    /// Shortcut as stored on disk: lowercase keys joined by '+'.
    fn arb_shortcut()(keys in prop::collection::vec("[a-z0-9]{1,6}", 1..4)) -> String {
        keys.join("+")
    }
}

prop_compose! {
    /// Same shortcut with random case and whitespace sprinkled between characters.
    fn arb_typed()(shortcut in arb_shortcut())(
        pads in prop::collection::vec(prop::sample::select(vec!["", " ", "  ", "\t"]), shortcut.len() + 1),
        upper in prop::collection::vec(any::<bool>(), shortcut.len()),
        shortcut in Just(shortcut),
    ) -> (String, String) {
        let mut typed = String::new();
        for (i, c) in shortcut.chars().enumerate() {
            typed.push_str(pads[i]);
            typed.push(if upper[i] { c.to_ascii_uppercase() } else { c });
        }
        typed.push_str(pads[shortcut.len()]);
        (shortcut, typed)
    }
}

proptest! {
    #[test]
    fn prop_typed_variants_match((shortcut, typed) in arb_typed()) {
        prop_assert!(is_correct(&typed, &shortcut));
    }

    #[test]
    fn prop_normalize_is_idempotent(s in "[ -~\t]*") {
        let once = normalize_answer(&s);
        prop_assert_eq!(normalize_answer(&once), once.clone());
        prop_assert!(!once.chars().any(char::is_whitespace));
    }

    #[test]
    fn prop_different_keys_do_not_match(a in arb_shortcut(), b in arb_shortcut()) {
        prop_assume!(a != b);
        prop_assert!(!is_correct(&a, &b));
    }
}
