use morf_protocol::PartOfSpeech;

use crate::decompose::RootTokenGroups;
use crate::markers::HYPHEN;

/// Appended to verbal lemmas to give the `ma`-infinitive citation form.
pub const INFINITIVE_SUFFIX: &str = "ma";

/// Rebuilds the dictionary form from decomposed root tokens.
///
/// Tokens within a group are concatenated and groups are joined with a
/// hyphen. Verbs get [`INFINITIVE_SUFFIX`] once, after the whole joined lemma.
pub fn build_lemma(groups: &RootTokenGroups, partofspeech: &str) -> String {
    let mut lemma = String::new();
    for (i, group) in groups.groups().iter().enumerate() {
        if i > 0 {
            lemma.push(HYPHEN);
        }
        for token in group {
            lemma.push_str(token);
        }
    }

    if PartOfSpeech::from_tag(partofspeech).is_some_and(PartOfSpeech::is_verb) {
        lemma.push_str(INFINITIVE_SUFFIX);
    }
    lemma
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::decompose;
    use proptest::prelude::*;

    #[test]
    fn test_compound_noun() {
        let groups = decompose("<all_m<aa_r<aud_t<ee_j<aam");
        assert_eq!(build_lemma(&groups, "S"), "allmaaraudteejaam");
    }

    #[test]
    fn test_verb_gets_infinitive() {
        assert_eq!(build_lemma(&decompose("l<aul"), "V"), "laulma");
    }

    #[test]
    fn test_hyphen_groups_rejoined() {
        assert_eq!(build_lemma(&decompose("k<ooli_l<aps-v<anem"), "S"), "koolilaps-vanem");
    }

    #[test]
    fn test_verbal_suffix_applied_once_to_whole_lemma() {
        assert_eq!(build_lemma(&decompose("ise_s<eis-v<al"), "V"), "iseseis-valma");
    }

    #[test]
    fn test_lone_marker_lemma() {
        assert_eq!(build_lemma(&decompose("-"), "Z"), "-");
    }

    proptest! {
        #[test]
        fn test_verbal_lemma_is_nominal_lemma_plus_suffix(root in "[a-z<?\\]_=+]{1,20}") {
            let groups = decompose(&root);
            let nominal = build_lemma(&groups, "S");
            let verbal = build_lemma(&groups, "V");
            prop_assert_eq!(verbal, format!("{}{}", nominal, INFINITIVE_SUFFIX));
            prop_assert_eq!(build_lemma(&groups, "A"), nominal);
        }
    }
}
