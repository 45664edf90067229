//! 유니코드 한글 음절 분해/조합 유틸리티
//!
//! 음절(U+AC00~U+D7A3)을 첫가끝 자모(U+1100 블록)로 분해합니다.
//! 규칙 적용 후의 재조합은 NFC 정규화(`unicode-normalization`)에 맡깁니다.

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 자모 시작 (ᄀ)
const CHOSEONG_BASE: u32 = 0x1100;
/// 중성 자모 시작 (ᅡ)
const JUNGSEONG_BASE: u32 = 0x1161;
/// 종성 자모 기준점. 인덱스 0(U+11A7)은 "종성 없음" 채움 문자
const JONGSEONG_BASE: u32 = 0x11A7;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;
/// 초성 하나당 음절 수 (21 × 28)
const SYLLABLES_PER_CHOSEONG: u32 = JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// "종성 없음" 채움 문자 (ᆧ)
pub const EMPTY_JONGSEONG: char = '\u{11A7}';

/// 문자가 완성형 한글 음절(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let choseong = offset / SYLLABLES_PER_CHOSEONG;
    let rest = offset % SYLLABLES_PER_CHOSEONG;
    Some((choseong, rest / JONGSEONG_COUNT, rest % JONGSEONG_COUNT))
}

/// 음절 하나를 초성·중성·종성 자모 문자열로 분해
///
/// 종성이 없어도 채움 문자(ᆧ)를 그대로 내보낸다. 채움 문자는 규칙 표의
/// 첫 규칙이 지운다. 한글 음절이 아닌 문자는 그대로 반환.
pub fn decompose(c: char) -> String {
    match decompose_syllable(c) {
        Some((cho, jung, jong)) => [
            CHOSEONG_BASE + cho,
            JUNGSEONG_BASE + jung,
            JONGSEONG_BASE + jong,
        ]
        .into_iter()
        .filter_map(char::from_u32)
        .collect(),
        None => c.to_string(),
    }
}

/// 문자열 전체를 자모열로 분해
pub fn decompose_str(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        result.push_str(&decompose(c));
    }
    result
}

/// 자모 하나의 초성 인덱스 (초성 자모가 아니면 None)
pub fn choseong_index(c: char) -> Option<u32> {
    let index = (c as u32).wrapping_sub(CHOSEONG_BASE);
    (index < CHOSEONG_COUNT).then_some(index)
}

/// 자모 하나의 종성 인덱스 (1~27, 종성 자모가 아니면 None)
pub fn jongseong_index(c: char) -> Option<u32> {
    let index = (c as u32).wrapping_sub(JONGSEONG_BASE);
    (1..JONGSEONG_COUNT).contains(&index).then_some(index)
}
