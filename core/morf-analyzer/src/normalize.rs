use morf_markup::{build_lemma, decompose, is_markup_only, remove_compound, remove_phonetic};
use morf_protocol::{CanonicalAnalysis, RawAnalysis};

use crate::options::AnalyzeOptions;

/// Converts one raw engine analysis into its canonical form.
///
/// The lemma is always built from fully stripped tokens. The trim options
/// only decide which markers survive in the exposed `root`.
pub fn normalize(raw: &RawAnalysis, options: &AnalyzeOptions) -> CanonicalAnalysis {
    let groups = decompose(&raw.root);
    let lemma = build_lemma(&groups, &raw.partofspeech);

    CanonicalAnalysis {
        root: exposed_root(&raw.root, options),
        root_tokens: groups.flatten(),
        lemma,
        ending: raw.ending.clone(),
        clitic: raw.clitic.clone(),
        partofspeech: raw.partofspeech.clone(),
        form: raw.form.clone(),
    }
}

// Markup-only roots are decided once, on the raw root, so the two trims
// never see each other's partial output.
fn exposed_root(root: &str, options: &AnalyzeOptions) -> String {
    if is_markup_only(root) {
        return root.to_string();
    }
    let mut exposed = root.to_string();
    if options.trim_phonetic {
        exposed = remove_phonetic(&exposed).into_owned();
    }
    if options.trim_compound {
        exposed = remove_compound(&exposed).into_owned();
    }
    exposed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn verb() -> RawAnalysis {
        RawAnalysis::new("l<aul", "b", "", "V", "b")
    }

    fn substantive() -> RawAnalysis {
        RawAnalysis::new("lennuki_k<an]dja", "ile", "", "S", "pl all")
    }

    fn options(trim_phonetic: bool, trim_compound: bool) -> AnalyzeOptions {
        AnalyzeOptions {
            trim_phonetic,
            trim_compound,
            ..AnalyzeOptions::default()
        }
    }

    #[test]
    fn test_compound_noun_trimmed() {
        let raw = RawAnalysis::new("<all_m<aa_r<aud_t<ee_j<aam", "0", "", "S", "sg n");
        let an = normalize(&raw, &AnalyzeOptions::default());
        assert_eq!(an.root_tokens, vec!["all", "maa", "raud", "tee", "jaam"]);
        assert_eq!(an.lemma, "allmaaraudteejaam");
        assert_eq!(an.root, "allmaaraudteejaam");
    }

    #[test]
    fn test_verb_trimmed() {
        let an = normalize(&verb(), &AnalyzeOptions::default());
        assert_eq!(
            an,
            CanonicalAnalysis {
                root: "laul".to_string(),
                root_tokens: vec!["laul".to_string()],
                lemma: "laulma".to_string(),
                ending: "b".to_string(),
                clitic: "".to_string(),
                partofspeech: "V".to_string(),
                form: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_verb_untrimmed_keeps_markup() {
        let an = normalize(&verb(), &options(false, false));
        assert_eq!(an.root, "l<aul");
        assert_eq!(an.lemma, "laulma");
        assert_eq!(an.root_tokens, vec!["laul"]);
    }

    #[test]
    fn test_substantive_trim_combinations() {
        let cases = [
            (true, true, "lennukikandja"),
            (true, false, "lennuki_kandja"),
            (false, true, "lennukik<an]dja"),
            (false, false, "lennuki_k<an]dja"),
        ];
        for (phonetic, compound, root) in cases {
            let an = normalize(&substantive(), &options(phonetic, compound));
            assert_eq!(an.root, root);
            assert_eq!(an.root_tokens, vec!["lennuki", "kandja"]);
            assert_eq!(an.lemma, "lennukikandja");
            assert_eq!(an.ending, "ile");
            assert_eq!(an.form, "pl all");
        }
    }

    #[test]
    fn test_use_heuristics_does_not_affect_normalization() {
        let with = normalize(&substantive(), &AnalyzeOptions::default());
        let without = normalize(
            &substantive(),
            &AnalyzeOptions { use_heuristics: false, ..AnalyzeOptions::default() },
        );
        assert_eq!(with, without);
    }

    fn renormalize(an: &CanonicalAnalysis) -> CanonicalAnalysis {
        let again = RawAnalysis::new(&an.root, &an.ending, &an.clitic, &an.partofspeech, &an.form);
        normalize(&again, &AnalyzeOptions::default())
    }

    #[test]
    fn test_second_pass_is_noop() {
        let first = normalize(&substantive(), &AnalyzeOptions::default());
        let second = renormalize(&first);
        assert_eq!(second.root, first.root);
        assert_eq!(second.lemma, first.lemma);
        assert_eq!(renormalize(&second), second);
    }

    #[test]
    fn test_markup_only_roots_pass_through() {
        for root in ["--", "<+", "_=", "-"] {
            let first = normalize(&RawAnalysis::new(root, "", "", "Z", ""), &AnalyzeOptions::default());
            assert_eq!(first.root, root);
            assert_eq!(first.root_tokens, vec![root]);
            assert_eq!(first.lemma, root);
            assert_eq!(renormalize(&first), first);
        }
    }

    proptest! {
        #[test]
        fn test_normalization_is_idempotent(
            root in "[a-z~?<\\]_+=-]{1,20}",
            pos in prop::sample::select(vec!["S", "V", "A"]),
        ) {
            let first = normalize(&RawAnalysis::new(&root, "0", "", pos, ""), &AnalyzeOptions::default());
            let second = renormalize(&first);

            prop_assert_eq!(&second.root, &first.root);
            prop_assert_eq!(&second.lemma, &first.lemma);
            prop_assert_eq!(second.root_tokens.concat(), first.root_tokens.concat());
            prop_assert_eq!(renormalize(&second), second);
        }
    }

    #[test]
    fn test_lone_marker_root() {
        let an = normalize(&RawAnalysis::new("_", "", "", "Z", ""), &AnalyzeOptions::default());
        assert_eq!(an.root, "_");
        assert_eq!(an.root_tokens, vec!["_"]);
        assert_eq!(an.lemma, "_");
    }

    #[test]
    fn test_hyphenated_root_keeps_hyphen() {
        let an = normalize(&RawAnalysis::new("k<ooli_l<aps-v<anem", "0", "", "S", "sg n"), &AnalyzeOptions::default());
        assert_eq!(an.root, "koolilaps-vanem");
        assert_eq!(an.lemma, "koolilaps-vanem");
        assert_eq!(an.root_tokens, vec!["kooli", "laps", "vanem"]);
    }
}
