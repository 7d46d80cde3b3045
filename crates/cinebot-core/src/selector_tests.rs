use super::*;

const TIER1: &str = "Mercy_FTR-1_S_QFC-CCAP_CA_51_4K_MGM_20251001_SMPTE_OV";
const TIER2: &str = "Norvege_FTR_F_FR-CCAP_51_2K_20251010_SMPTE_OV";
const TIER3: &str = "Wicked_FTR_S_QFC-OCAP_71_4K_UNI_20251101_SMPTE_OV";
const TIER4: &str = "Zootopie_FTR_F_FR_51_2K_DIS_20251120_SMPTE_OV";
const TIER5: &str = "Avatar_TLR-3_S_QFC_20_4K_20251201_SMPTE_OV";
const TIER6: &str = "Amelie_FTR_F_FR_20_2K_20251205_SMPTE_OV";
const NONE: &str = "Jaws_FTR_S_EN-XX_51_2K_20251210_SMPTE_OV";

fn listing(texts: &[&str]) -> Vec<ContentDescriptor> {
    texts.iter().map(|t| ContentDescriptor::new(*t)).collect()
}

#[test]
fn test_parse_listing_skips_blank_lines() {
    let items = ContentDescriptor::parse_listing("Mercy_S_QFC_51_\n\n   \n  Norvege_F_FR  \r\n");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].text(), "Mercy_S_QFC_51_");
    assert_eq!(items[1].text(), "Norvege_F_FR");
    assert!(items[1].is_fr());
}

#[test]
fn test_facets() {
    let item = ContentDescriptor::new(TIER1);
    assert!(item.is_qfc());
    assert!(!item.is_fr());
    assert!(item.has_ccap_not_ocap());
    assert!(item.has_volume_marker());

    let item = ContentDescriptor::new(TIER3);
    assert!(!item.has_ccap_not_ocap());
    assert!(item.has_volume_marker());
}

#[test]
fn test_facets_are_case_insensitive() {
    let item = ContentDescriptor::new("mercy_ftr_s_qfc-ccap_51_4k");
    assert!(item.is_qfc());
    assert!(item.has_ccap_not_ocap());
}

#[test]
fn test_volume_marker_needs_separators() {
    assert!(!ContentDescriptor::new("QFC_510_X").has_volume_marker());
    assert!(!ContentDescriptor::new("QFC_5.1_X").has_volume_marker());
    assert!(ContentDescriptor::new("QFC-71_X").has_volume_marker());
}

#[test]
fn test_fr_markers() {
    assert!(ContentDescriptor::new("Film_FR_51").is_fr());
    assert!(ContentDescriptor::new("Film-FR").is_fr());
    assert!(ContentDescriptor::new("FR-Film").is_fr());
    assert!(!ContentDescriptor::new("Frozen_FTR").is_fr());
}

#[test]
fn test_each_sample_lands_in_its_tier() {
    let expected = [
        (TIER1, Some(SelectionTier::QfcCaptionedSurround)),
        (TIER2, Some(SelectionTier::FrCaptionedSurround)),
        (TIER3, Some(SelectionTier::QfcSurround)),
        (TIER4, Some(SelectionTier::FrSurround)),
        (TIER5, Some(SelectionTier::Qfc)),
        (TIER6, Some(SelectionTier::Fr)),
        (NONE, None),
    ];
    for (text, tier) in expected {
        assert_eq!(ContentDescriptor::new(text).tier(), tier, "{}", text);
    }
}

#[test]
fn test_higher_tier_beats_recency() {
    let items = listing(&[TIER5, TIER1]);
    let selection = select_candidate(&items, None).unwrap();
    assert_eq!(selection.index, 1);
    assert_eq!(selection.descriptor.text(), TIER1);
    assert_eq!(
        selection.reason,
        SelectionReason::Tier {
            tier: SelectionTier::QfcCaptionedSurround
        }
    );
}

#[test]
fn test_recency_breaks_ties_within_tier() {
    let newer = "Dune_FTR_S_QFC-CCAP_51_4K";
    let items = listing(&[NONE, newer, TIER1]);
    let selection = select_candidate(&items, None).unwrap();
    assert_eq!(selection.index, 1);
    assert_eq!(selection.descriptor.text(), newer);
}

#[test]
fn test_tiers_fall_through_in_order() {
    let items = listing(&[TIER6, TIER5, TIER4, NONE]);
    let selection = select_candidate(&items, None).unwrap();
    assert_eq!(selection.descriptor.text(), TIER4);

    let items = listing(&[TIER6, NONE]);
    let selection = select_candidate(&items, None).unwrap();
    assert_eq!(
        selection.reason,
        SelectionReason::Tier {
            tier: SelectionTier::Fr
        }
    );
}

#[test]
fn test_selection_carries_detected_format() {
    let items = listing(&[TIER2]);
    let selection = select_candidate(&items, None).unwrap();
    assert_eq!(selection.format, FormatKind::Flat);
}

#[test]
fn test_no_candidate() {
    let items = listing(&[NONE, "Trailer_pack"]);
    let err = select_candidate(&items, None).unwrap_err();
    assert!(matches!(err, CoreError::NoCandidate(_)));
    assert!(err.to_string().contains("2 entries"));
}

#[test]
fn test_empty_listing() {
    assert!(select_candidate(&[], None).is_err());
}

#[test]
fn test_explicit_title_ignores_tiers() {
    let items = listing(&[TIER1, NONE]);
    let selection = select_candidate(&items, Some("Jaws")).unwrap();
    assert_eq!(selection.index, 1);
    assert_eq!(selection.format, FormatKind::Scope);
    assert_eq!(
        selection.reason,
        SelectionReason::ExplicitTitle {
            title: "Jaws".to_string()
        }
    );
}

#[test]
fn test_explicit_title_detects_format_from_item() {
    let items = listing(&[TIER4]);
    let selection = select_candidate(&items, Some("Zootopie")).unwrap();
    assert_eq!(selection.format, FormatKind::Flat);
}

#[test]
fn test_explicit_title_missing() {
    let items = listing(&[TIER1, TIER2]);
    let err = select_candidate(&items, Some("Titanic")).unwrap_err();
    assert!(err.to_string().contains("Titanic"));
}

#[test]
fn test_tier_display() {
    assert_eq!(
        SelectionTier::QfcSurround.to_string(),
        "tier 3 (QFC + 51/71)"
    );
    assert_eq!(SelectionTier::Fr.rank(), 6);
}

#[test]
fn test_descriptor_serde_keeps_facets() {
    let item = ContentDescriptor::new(TIER1);
    let json = serde_json::to_string(&item).unwrap();
    assert_eq!(json, format!("\"{}\"", TIER1));
    let back: ContentDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, item);
    assert!(back.is_qfc());
}
