//! romaja - 한글 로마자 발음 표기 생성기
//!
//! 인자로 받은 문장을 변환하거나, 인자가 없으면 표준 입력을 줄 단위로 변환한다.

use std::io::{self, BufRead, Write};

use romaja::config::{load_config, RomanizerConfig};
use romaja::detection::is_only_korean;
use romaja::Romanizer;

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config();
    let romanizer = config.romanizer();
    log::debug!("출력 형식: {:?}", romanizer.style());

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        println!("{}", convert(&romanizer, &config, &args.join(" ")));
        return;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };
        if let Err(e) = writeln!(stdout, "{}", convert(&romanizer, &config, &line)) {
            log::error!("출력 실패: {}", e);
            break;
        }
    }
}

/// 한 줄 변환 (한글 외 문자가 섞여 있어도 변환은 계속한다)
fn convert(romanizer: &Romanizer, config: &RomanizerConfig, text: &str) -> String {
    if config.warn_non_korean && !text.trim().is_empty() && !is_only_korean(text) {
        log::warn!("한글만 입력해주세요: '{}'", text);
    }
    config.format_output(&romanizer.romanize(text))
}
