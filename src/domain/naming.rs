//! Deterministic file names for generated artifacts.
//!
//! Names derive from company and role only, so re-running the workflow for
//! the same posting overwrites the previous artifact instead of piling up
//! copies.

/// File name for a tailored resume copy.
pub fn resume_file_name(company: &str, role: &str) -> String {
    format!(
        "Resume_{}_{}.md",
        file_component(company),
        file_component(role)
    )
}

/// File name for a generated cover letter.
pub fn cover_letter_file_name(company: &str, role: &str) -> String {
    format!(
        "CoverLetter_{}_{}.txt",
        file_component(company),
        file_component(role)
    )
}

/// Turn a free-form company or role value into a safe file name component:
/// spaces become underscores, anything outside alphanumerics, `_`, `-`, `.`
/// is dropped.
fn file_component(value: &str) -> String {
    value
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn resume_names_replace_spaces_with_underscores() {
        assert_eq!(
            resume_file_name("TechCorp", "Product Manager"),
            "Resume_TechCorp_Product_Manager.md"
        );
        assert_eq!(
            resume_file_name("InnoSoft", "Senior Delivery Manager"),
            "Resume_InnoSoft_Senior_Delivery_Manager.md"
        );
    }

    #[test]
    fn cover_letter_names_follow_the_same_scheme() {
        assert_eq!(
            cover_letter_file_name("TechCorp", "Product Manager"),
            "CoverLetter_TechCorp_Product_Manager.txt"
        );
    }

    #[test]
    fn hostile_characters_are_dropped() {
        assert_eq!(
            resume_file_name("Acme/Corp", "../../etc"),
            "Resume_AcmeCorp_....etc.md"
        );
        assert!(!resume_file_name("a\\b", "c:d").contains('\\'));
    }

    proptest! {
        #[test]
        fn generated_names_are_single_path_components(company in ".*", role in ".*") {
            let name = resume_file_name(&company, &role);
            prop_assert!(!name.contains(' '));
            prop_assert!(!name.contains('/'));
            prop_assert!(!name.contains('\\'));
            prop_assert!(name.starts_with("Resume_"));
            prop_assert!(name.ends_with(".md"));
        }
    }
}
