//! 입력 검증 모듈
//!
//! 변환 엔진은 입력을 거부하지 않는다. 여기 함수들은 호출하는 쪽이
//! 경고를 띄울지 판단할 때 쓰는 참고용 검사다.

use crate::core::unicode::is_hangul_syllable;

/// 호환용 자음 영역 (ㄱ-ㅎ)
const COMPAT_CONSONANTS: std::ops::RangeInclusive<u32> = 0x3131..=0x314E;
/// 호환용 모음 영역 (ㅏ-ㅣ)
const COMPAT_VOWELS: std::ops::RangeInclusive<u32> = 0x314F..=0x3163;

/// 문자가 호환용 낱자모(ㄱ-ㅎ, ㅏ-ㅣ)인지 확인
pub fn is_compatibility_jamo(ch: char) -> bool {
    let cp = ch as u32;
    COMPAT_CONSONANTS.contains(&cp) || COMPAT_VOWELS.contains(&cp)
}

/// 입력이 한글(완성형, 낱자모)과 공백으로만 이루어졌는지 확인
///
/// 빈 문자열은 false.
pub fn is_only_korean(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|ch| is_hangul_syllable(ch) || is_compatibility_jamo(ch) || ch.is_whitespace())
}
