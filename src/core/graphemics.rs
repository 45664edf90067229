//! 글자 단위 단계: 자모 → 라틴 문자

use crate::core::rules::{apply_rules, graphemic_rules};
use crate::core::unicode::{choseong_index, decompose, jongseong_index};

/// ㄹ 초성 인덱스
const RIEUL_CHOSEONG: u32 = 5;
/// ㄹ 종성 인덱스
const RIEUL_JONGSEONG: u32 = 8;

/// 글자 하나를 라틴 문자 조각으로 변환
///
/// 이웃 글자를 보지 않는다. 자모가 아닌 문자(공백, 숫자, 문장부호)는 그대로 나온다.
pub fn apply_graphemics(c: char) -> String {
    apply_rules(&decompose(c), graphemic_rules())
}

/// 음운 단계 결과를 글자별 조각으로 변환
///
/// 받침 ㄹ 뒤에 초성 ㄹ이 오면 뒤 조각의 `r`을 `l`로 바꾼다 (신라 → sil-la).
pub fn transcribe(text: &str) -> Vec<String> {
    let units: Vec<char> = text.chars().collect();
    let mut fragments: Vec<String> = units.iter().map(|&c| apply_graphemics(c)).collect();

    for i in 1..units.len() {
        if ends_with_rieul(units[i - 1]) && starts_with_rieul(units[i]) {
            lateralize(&mut fragments[i]);
        }
    }

    fragments
}

/// 받침이 ㄹ로 끝나는 글자인지 확인
fn ends_with_rieul(c: char) -> bool {
    decompose(c)
        .chars()
        .last()
        .and_then(jongseong_index)
        == Some(RIEUL_JONGSEONG)
}

/// 초성이 ㄹ로 시작하는 글자인지 확인
fn starts_with_rieul(c: char) -> bool {
    decompose(c).chars().next().and_then(choseong_index) == Some(RIEUL_CHOSEONG)
}

fn lateralize(fragment: &mut String) {
    if fragment.starts_with('r') {
        fragment.replace_range(..1, "l");
    }
}
