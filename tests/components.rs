use iran_system::iransystem::codec::{bytes, zwnj};
use iran_system::iransystem::layout::{self, orientation};
use iran_system::iransystem::locale::{self, detect_locale};
use iran_system::iransystem::models::{Glyph, JoiningForm, Unit};
use iran_system::{CachedTranscoder, IranSystem, IranSystemError, Locale, Result, Transcoder};
use std::panic::{self, AssertUnwindSafe};
use std::thread;

fn glyphs(data: &[u8]) -> Vec<Glyph> {
    data.iter().map(|&b| bytes::decode_byte(b)).collect()
}

#[test]
fn reordering_is_its_own_inverse() {
    let logical: Vec<char> = "hi سلام ۱۲۳ دنیا!".chars().collect();
    let visual = layout::to_visual(logical.clone());
    assert_ne!(visual, logical);
    assert_eq!(layout::to_logical(visual.clone()), logical);
    assert_eq!(layout::to_visual(layout::to_logical(visual.clone())), visual);
}

#[test]
fn runs_stop_at_digits_and_latin() {
    let chars: Vec<char> = "ab سل ۱۲ م".chars().collect();
    assert_eq!(layout::reversible_runs(&chars), vec![3..5, 9..10]);
}

#[test]
fn orientation_detects_display_order() {
    assert!(orientation::is_stored_visually(&glyphs(&[0xF4, 0x91, 0xF3, 0xA8])));
    assert!(!orientation::is_stored_visually(&glyphs(&[0xA1, 0x91, 0xF7, 0xF9, 0xFB, 0x91])));
}

#[test]
fn fallback_chain_for_missing_forms() {
    assert_eq!(bytes::encode_form(Unit::Char('ع'), JoiningForm::Medial), Some(0xE3));
    assert_eq!(bytes::encode_form(Unit::Char('ب'), JoiningForm::Medial), Some(0x93));
    assert_eq!(bytes::encode_form(Unit::Char('ا'), JoiningForm::Medial), Some(0x90));
    assert_eq!(bytes::encode_form(Unit::LamAlef, JoiningForm::Final), Some(0xF2));
    assert_eq!(bytes::encode_form(Unit::Char('ئ'), JoiningForm::Final), Some(0xFC));
    assert_eq!(bytes::encode_form(Unit::Char('ـ'), JoiningForm::Medial), Some(0x8B));
    assert_eq!(bytes::encode_form(Unit::Char('€'), JoiningForm::Neutral), None);
}

#[test]
fn fallback_byte_prefers_the_neutral_shape() {
    assert_eq!(bytes::fallback_byte('?'), Some(0x3F));
    assert_eq!(bytes::fallback_byte('ع'), Some(0xE1));
    assert_eq!(bytes::fallback_byte('€'), None);
}

#[test]
fn zwnj_only_between_dual_joiners() {
    let heh_final = bytes::decode_byte(0xF9);
    let heh_initial = bytes::decode_byte(0xFB);
    let alef_final = bytes::decode_byte(0x91);
    let tah = bytes::decode_byte(0xAF);
    assert!(zwnj::needs_zwnj(&heh_final, &heh_initial));
    assert!(!zwnj::needs_zwnj(&heh_final, &alef_final), "alef is not dual-joining");
    assert!(!zwnj::needs_zwnj(&alef_final, &heh_initial), "alef never joins forward");
    assert!(!zwnj::needs_zwnj(&tah, &heh_initial), "tah bytes cover every form");
    assert_eq!(zwnj::reinsert(&[heh_final, heh_initial]), "ه\u{200C}ه");
}

#[test]
fn locale_is_a_strict_majority() {
    assert_eq!(detect_locale("سلام"), Locale::Persian);
    assert_eq!(detect_locale("hello سلام"), Locale::Latin);
    assert_eq!(detect_locale("ab سل"), Locale::Latin, "ties are Latin");
    assert_eq!(detect_locale("123"), Locale::Latin);
    assert_eq!(detect_locale(""), Locale::Latin);
}

#[test]
fn localize_digits_only_touches_persian_text() {
    let mut chars = vec![('1', 0), ('x', 1)];
    locale::localize_digits(&mut chars, Locale::Latin);
    assert_eq!(chars, vec![('1', 0), ('x', 1)]);
    locale::localize_digits(&mut chars, Locale::Persian);
    assert_eq!(chars, vec![('۱', 0), ('x', 1)]);
}

#[test]
fn cache_memoizes_successful_calls() {
    let cache = CachedTranscoder::new(IranSystem::default());
    let first = cache.encode("سلام").expect("encode");
    let second = cache.encode("سلام").expect("encode");
    assert_eq!(first, second);
    assert_eq!(cache.entries().expect("entries"), (1, 0));

    assert!(matches!(cache.encode("€"), Err(IranSystemError::UnmappedCharacter { .. })));
    assert_eq!(cache.entries().expect("entries"), (1, 0), "errors must not be cached");

    assert_eq!(cache.decode(&first).expect("decode"), "سلام");
    assert_eq!(cache.entries().expect("entries"), (1, 1));

    cache.clear().expect("clear");
    assert_eq!(cache.entries().expect("entries"), (0, 0));
}

#[test]
fn zwnj_before_lam_alef_ligature_is_dropped_on_decode() {
    let conv = IranSystem::default();
    let bytes = conv.encode("ب\u{200C}لا").expect("encode");
    assert_eq!(bytes, vec![0xF2, 0x92]);
    // The ligature is right-joining, so no join break is reconstructed before it.
    assert_eq!(conv.decode(&bytes), "بلا");
}

/// Panics on one input, delegates everything else.
struct Flaky {
    inner: IranSystem,
}

impl Transcoder for Flaky {
    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        if text == "boom" {
            panic!("backend failure");
        }
        self.inner.encode(text)
    }

    fn decode(&self, bytes: &[u8]) -> String {
        self.inner.decode(bytes)
    }
}

#[test]
fn backend_panic_does_not_poison_the_cache() {
    let cache = CachedTranscoder::new(Flaky { inner: IranSystem::default() });
    let ok = cache.encode("ok").expect("encode");

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| cache.encode("boom")));
    assert!(outcome.is_err(), "the backend should have panicked");

    assert_eq!(cache.encode("ok").expect("cached entry after panic"), ok);
    assert_eq!(cache.encode("سلام").expect("fresh entry after panic"), vec![0xF4, 0x91, 0xF3, 0xA8]);
    assert_eq!(cache.entries().expect("entries"), (2, 0));
}

#[test]
fn cache_serves_concurrent_callers() {
    let cache = CachedTranscoder::new(IranSystem::default());
    let words = ["سلام", "کتاب", "دنیا", "برنامه"];
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for word in words {
                    let bytes = cache.encode(word).expect("encode");
                    assert_eq!(cache.decode(&bytes).expect("decode"), word);
                }
            });
        }
    });
    assert_eq!(cache.entries().expect("entries"), (4, 4));
}
