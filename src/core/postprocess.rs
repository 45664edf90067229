//! 후처리: 붙임표 연결, 공백 주변 정리, 문장부호 주변 붙임표 제거

/// 붙임표 정리 대상 문장부호
const SPECIAL_CHARS: [char; 2] = ['!', '?'];

const HYPHEN: char = '-';
const SPACE: char = ' ';

/// 조각 목록을 최종 표기로 정리
pub fn finish(fragments: &[String]) -> String {
    let special = last_special_char(fragments);
    let joined = join_with_hyphens(fragments);
    let collapsed = collapse_spaces(&joined);

    match special {
        Some(c) => trim_special_char(&collapsed, c),
        None => collapsed,
    }
}

/// 조각 중 `!` 또는 `?`와 정확히 같은 마지막 조각
pub fn last_special_char(fragments: &[String]) -> Option<char> {
    fragments
        .iter()
        .filter_map(|fragment| {
            let mut chars = fragment.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if SPECIAL_CHARS.contains(&c) => Some(c),
                _ => None,
            }
        })
        .last()
}

/// 모든 조각 사이에 붙임표 삽입
pub fn join_with_hyphens(fragments: &[String]) -> String {
    fragments.join("-")
}

/// 공백 바로 앞뒤의 붙임표 제거
///
/// 위치는 원래 인덱스 기준으로 표시한 뒤 한 번에 걸러낸다.
/// 붙임표만 지우므로 이미 정리된 문자열에 다시 적용해도 바뀌지 않는다.
pub fn collapse_spaces(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut removed = vec![false; chars.len()];

    for (i, &c) in chars.iter().enumerate() {
        if c != SPACE {
            continue;
        }
        if i > 0 && chars[i - 1] == HYPHEN {
            removed[i - 1] = true;
        }
        if i + 1 < chars.len() && chars[i + 1] == HYPHEN {
            removed[i + 1] = true;
        }
    }

    chars
        .into_iter()
        .zip(removed)
        .filter_map(|(c, removed)| (!removed).then_some(c))
        .collect()
}

/// 문장부호의 첫 위치 앞뒤에서 붙임표를 하나씩만 제거
pub fn trim_special_char(text: &str, special: char) -> String {
    let mut chars: Vec<char> = text.chars().collect();

    if let Some(idx) = chars.iter().position(|&c| c == special) {
        if idx > 0 && chars[idx - 1] == HYPHEN {
            chars.remove(idx - 1);
        }
    }

    if let Some(idx) = chars.iter().position(|&c| c == special) {
        if idx + 1 < chars.len() && chars[idx + 1] == HYPHEN {
            chars.remove(idx + 1);
        }
    }

    chars.into_iter().collect()
}
