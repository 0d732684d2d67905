use iran_system::{Config, DigitStyle, IranSystem, IranSystemError, Transcoder};
use std::fs;
use std::path::PathBuf;

fn fixture_path(parts: &[&str]) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    for part in parts {
        p.push(part);
    }
    p
}

fn load_corpus() -> Vec<String> {
    let path = fixture_path(&["tests", "fixtures", "corpus.txt"]);
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn converter() -> IranSystem {
    IranSystem::default()
}

#[test]
fn encodes_salam_in_visual_order() {
    let bytes = converter().encode("سلام").expect("encode");
    assert_eq!(bytes, vec![0xF4, 0x91, 0xF3, 0xA8]);
    assert_eq!(converter().decode(&bytes), "سلام");
}

#[test]
fn salam_stored_in_reading_order_also_decodes() {
    assert_eq!(converter().decode(&[0xA8, 0xF3, 0x91, 0xF4]), "سلام");
}

#[test]
fn latin_prefix_keeps_its_order() {
    let bytes = converter().encode("hi سلام").expect("encode");
    assert_eq!(bytes, vec![0x68, 0x69, 0x20, 0xF4, 0x91, 0xF3, 0xA8]);
}

#[test]
fn encodes_barnameh() {
    let bytes = converter().encode("برنامه").expect("encode");
    assert_eq!(bytes, vec![0xF9, 0xF5, 0x91, 0xF7, 0xA4, 0x93]);
}

#[test]
fn decodes_logically_stored_run_with_zwnj() {
    let text = converter().decode(&[0xA1, 0x91, 0xF7, 0xF9, 0xFB, 0x91]);
    assert_eq!(text, "خانه\u{200C}ها");
}

#[test]
fn zwnj_survives_a_round_trip() {
    let conv = converter();
    let bytes = conv.encode("خانه\u{200C}ها").expect("encode");
    assert_eq!(bytes, vec![0x91, 0xFB, 0xF9, 0xF7, 0x91, 0xA1], "ZWNJ must not reach the bytes");
    assert_eq!(conv.decode(&bytes), "خانه\u{200C}ها");
}

#[test]
fn digits_follow_the_locale_of_the_text() {
    let conv = converter();
    assert_eq!(conv.encode("ا 123").expect("encode"), vec![0x90, 0x20, 0x81, 0x82, 0x83]);
    assert_eq!(conv.encode("123").expect("encode"), vec![0x31, 0x32, 0x33]);
}

#[test]
fn digit_runs_are_never_reversed() {
    let bytes = converter().encode("سلام 123").expect("encode");
    assert_eq!(bytes, vec![0xF4, 0x91, 0xF3, 0xA8, 0x20, 0x81, 0x82, 0x83]);
    assert_eq!(converter().decode(&bytes), "سلام ۱۲۳");
}

#[test]
fn lam_alef_ligature_only_when_lam_starts_a_join() {
    let conv = converter();
    assert_eq!(conv.encode("لا").expect("encode"), vec![0xF2]);
    assert_eq!(conv.encode("\u{FEFB}").expect("encode"), vec![0xF2]);
    let bala = conv.encode("بالا").expect("encode");
    assert_eq!(bala, vec![0xF2, 0x91, 0x93]);
    assert_eq!(conv.decode(&bala), "بالا");
}

#[test]
fn logical_ordering_stores_reading_order() {
    let conv = IranSystem::new(Config::default().with_visual_ordering(false)).expect("config");
    let bytes = conv.encode("سلام").expect("encode");
    assert_eq!(bytes, vec![0xA8, 0xF3, 0x91, 0xF4]);
    assert_eq!(conv.decode(&bytes), "سلام");
}

#[test]
fn unmapped_character_without_fallback_is_an_error() {
    let err = converter().encode("ab€").unwrap_err();
    assert_eq!(err, IranSystemError::UnmappedCharacter { character: '€', index: 2 });
}

#[test]
fn fallback_character_replaces_unmapped_input() {
    let conv = IranSystem::new(Config::default().with_fallback_character(Some('?'))).expect("config");
    assert_eq!(conv.encode("€").expect("encode"), vec![0x3F]);
}

#[test]
fn unencodable_fallback_is_rejected_at_construction() {
    let err = IranSystem::new(Config::default().with_fallback_character(Some('€'))).unwrap_err();
    assert_eq!(err, IranSystemError::UnmappedFallback('€'));
}

#[test]
fn hex_helpers() {
    let conv = converter();
    assert_eq!(conv.decode_hex("F4 91 f3 a8").expect("decode_hex"), "سلام");
    assert_eq!(conv.encode_hex("سلام").expect("encode_hex"), "f491f3a8");
    for bad in ["invalid", "", "   ", "abc"] {
        assert!(
            matches!(conv.decode_hex(bad), Err(IranSystemError::InvalidHexInput(_))),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn decode_is_total_over_every_byte() {
    let conv = converter();
    for byte in 0..=255u8 {
        let text = conv.decode(&[byte]);
        assert!(!text.is_empty(), "byte {:#04x} decoded to nothing", byte);
    }
    assert_eq!(conv.decode(&[0xFF]), "\u{FFFD}");
    assert_eq!(conv.decode(&[0xB0, 0xDB]), "\u{2591}\u{2588}");
}

#[test]
fn decoded_digit_styles() {
    let latin = IranSystem::new(Config::default().with_decoded_digits(DigitStyle::Latin)).expect("config");
    assert_eq!(latin.decode(&[0x81, 0x82]), "12");

    let persian = IranSystem::new(Config::default().with_decoded_digits(DigitStyle::Persian)).expect("config");
    assert_eq!(persian.decode(&[0x31, 0x32]), "۱۲");

    let follow = IranSystem::new(Config::default().with_decoded_digits(DigitStyle::FollowLocale)).expect("config");
    assert_eq!(follow.decode(&[0xF4, 0x91, 0xF3, 0xA8, 0x20, 0x31, 0x32]), "سلام ۱۲");
    assert_eq!(follow.decode(&[0x61, 0x20, 0x81]), "a 1");
}

#[test]
fn input_is_folded_before_encoding() {
    let conv = converter();
    let persian_yeh = conv.encode("ی").expect("encode");
    assert_eq!(conv.encode("\u{064A}").expect("encode"), persian_yeh, "Arabic yeh");
    assert_eq!(conv.encode("\u{0643}").expect("encode"), conv.encode("ک").expect("encode"), "Arabic kaf");
    assert_eq!(conv.encode("بَ").expect("encode"), vec![0x92], "harakat are dropped");
    assert_eq!(conv.encode("\u{0661}").expect("encode"), vec![0x81], "Arabic-Indic digit");
}

#[test]
fn decomposed_input_encodes_like_composed_input() {
    let conv = converter();
    let pairs = [
        ("\u{0627}\u{0653}\u{0628}", "\u{0622}\u{0628}"),
        ("\u{067E}\u{0627}\u{064A}\u{0654}\u{06CC}\u{0632}", "پائیز"),
        ("\u{0627}\u{064E}\u{0653}", "\u{0622}"),
    ];
    for (decomposed, composed) in pairs {
        assert_eq!(
            conv.encode(decomposed).expect("encode decomposed"),
            conv.encode(composed).expect("encode composed"),
            "{:?} vs {:?}",
            decomposed,
            composed
        );
    }
    assert_eq!(conv.encode("\u{0627}\u{0653}\u{0628}").expect("encode"), vec![0x92, 0x8D]);
}

#[test]
fn unmapped_index_is_the_first_in_reading_order() {
    let err = converter().encode("\u{0679}\u{0688}").unwrap_err();
    assert_eq!(err, IranSystemError::UnmappedCharacter { character: '\u{0679}', index: 0 });

    let err = converter().encode("سل\u{0679}").unwrap_err();
    assert_eq!(err, IranSystemError::UnmappedCharacter { character: '\u{0679}', index: 2 });
}

#[test]
fn tatweel_falls_back_to_its_neutral_byte() {
    assert_eq!(converter().encode("بـب").expect("encode"), vec![0x92, 0x8B, 0x93]);
}

#[test]
fn corpus_round_trips() {
    let conv = converter();
    for line in load_corpus() {
        let bytes = conv
            .encode(&line)
            .unwrap_or_else(|e| panic!("failed to encode {:?}: {}", line, e));
        assert_eq!(conv.decode(&bytes), line, "round trip of {:?} via {:02x?}", line, bytes);
    }
}

#[test]
fn any_transcoder_can_stand_in() {
    fn round_trip<T: Transcoder>(backend: &T, text: &str) -> String {
        let bytes = backend.encode(text).expect("encode");
        backend.decode(&bytes)
    }
    assert_eq!(round_trip(&converter(), "کتاب"), "کتاب");
}
