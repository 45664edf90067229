//! 문자열 전체 단계: 음운 규칙 적용

use unicode_normalization::UnicodeNormalization;

use crate::core::rules::{apply_rules, phonological_rules, Rule};

/// 자모열에 음운 규칙 전체를 적용하고 NFC로 다시 조합
///
/// 받침과 다음 음절 초성이 붙어 있어야 동화·연음 규칙이 일치하므로
/// 반드시 문자열 전체에 대해 한 번에 적용한다.
pub fn apply_phonology(jamo: &str) -> String {
    apply_phonology_with(jamo, phonological_rules())
}

/// 주어진 규칙 목록으로 음운 단계 실행
pub fn apply_phonology_with(jamo: &str, rules: &[Rule]) -> String {
    let rewritten = apply_rules(jamo, rules);
    log::trace!("음운 규칙 적용: {:?} -> {:?}", jamo, rewritten);
    rewritten.nfc().collect()
}
