use super::*;

#[test]
fn test_extract_standard_label() {
    let title =
        extract_title("Mercy_TLR-1-IMMINA_S_QFC-QFC-CCAP_CA_51_4K_MGM_20251001_DLX_SMPTE_OV");
    assert_eq!(title, "Mercy");
}

#[test]
fn test_extract_uppercase_label_is_title_cased() {
    assert_eq!(extract_title("NORVEGE_FTR_F_QFC_51"), "Norvege");
}

#[test]
fn test_extract_uses_first_line_only() {
    let text = "Wicked_FTR-2_S_QFC_51\nImported 02/02/2026\n120 GB";
    assert_eq!(extract_title(text), "Wicked");
}

#[test]
fn test_extract_trims_surrounding_whitespace() {
    assert_eq!(extract_title("   dune_FTR_S_QFC  "), "Dune");
}

#[test]
fn test_extract_digits_start_new_word() {
    assert_eq!(extract_title("2FAST_FTR_S_QFC"), "2Fast");
}

#[test]
fn test_extract_short_run_falls_back_to_segments() {
    // "AB" is too short for the leading-run rule but survives segmenting.
    assert_eq!(extract_title("AB_TLR-1_QFC"), "Ab");
}

#[test]
fn test_extract_skips_leading_separator() {
    assert_eq!(extract_title("_Le_Bal_FTR_S_QFC"), "Le");
}

#[test]
fn test_extract_non_ascii_title() {
    assert_eq!(extract_title("Été_FTR_S_QFC"), "Été");
}

#[test]
fn test_extract_single_letter_uses_first_word() {
    assert_eq!(extract_title("X-2_F_QFC"), "X");
}

#[test]
fn test_extract_empty_returns_fallback() {
    assert_eq!(extract_title(""), FALLBACK_TITLE);
    assert_eq!(extract_title("  \n  "), FALLBACK_TITLE);
    assert_eq!(extract_title("_-_"), FALLBACK_TITLE);
}

#[test]
fn test_strip_code_tails_in_order() {
    assert_eq!(strip_code_tails("Ab_Cd_TLR_x"), "Ab_Cd");
    assert_eq!(strip_code_tails("Ab_Cd-20251001"), "Ab_Cd");
    assert_eq!(strip_code_tails("Ab_Cd_4K_MGM"), "Ab_Cd");
    assert_eq!(strip_code_tails("Ab_Cd_OV"), "Ab_Cd");
    assert_eq!(strip_code_tails("Ab_Cd_s_x"), "Ab_Cd");
}

#[test]
fn test_strip_code_tails_case_insensitive() {
    assert_eq!(strip_code_tails("Ab_qfc_rest"), "Ab");
    assert_eq!(strip_code_tails("Ab-ccap"), "Ab");
}

#[test]
fn test_title_case() {
    assert_eq!(title_case("mercy"), "Mercy");
    assert_eq!(title_case("MERCY"), "Mercy");
    assert_eq!(title_case("mercy2go"), "Mercy2Go");
    assert_eq!(title_case("4K"), "4K");
}
