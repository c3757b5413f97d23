//! N행시 생성 화면
//!
//! 서버에서 렌더링하는 입력 폼 페이지입니다. 입력 → 검증 → 생성 → 결과 표시를
//! 한 번의 요청으로 처리하며, 요청 간에 공유하는 상태는 없습니다.

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Html,
    Form,
};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, RETRY_HINT};
use crate::AppState;

use super::examples::{curated_word, EXAMPLE_WORDS};
use super::service::PoemResult;
use super::validator::{validate, WordRejection, MAX_INPUT_CHARS};

/// 폼 입력값
///
/// `example`이 있으면 추천 단어 버튼으로 들어온 요청입니다.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PoemForm {
    #[serde(default)]
    #[validate(length(max = 10, message = "10글자 이하로 입력해주세요!"))]
    pub word: String,

    #[serde(default)]
    pub example: Option<String>,
}

/// 생성 성공 시 화면에 필요한 값
#[derive(Debug)]
pub struct PoemView {
    pub result: PoemResult,
    pub from_example: bool,
}

/// 빈 입력 폼
pub async fn index() -> Html<String> {
    Html(render_page("", None))
}

/// 폼 제출 처리
pub async fn submit(
    State(state): State<AppState>,
    form: Result<Form<PoemForm>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let (input, outcome) = match form {
        Ok(Form(form)) => {
            let outcome = run(&state, &form).await;
            (form.word, outcome)
        }
        Err(rejection) => (String::new(), Err(AppError::from(rejection))),
    };

    let status = match &outcome {
        Ok(view) => {
            tracing::info!(word = %view.result.word, from_example = view.from_example, "Poem page rendered");
            StatusCode::OK
        }
        Err(error) if error.is_generation_failure() => {
            tracing::error!(code = error.error_code(), error = %error, "Poem generation failed");
            error.status_code()
        }
        Err(error) => {
            tracing::warn!(code = error.error_code(), error = %error, "Poem request rejected");
            error.status_code()
        }
    };

    (status, Html(render_page(&input, Some(&outcome))))
}

async fn run(state: &AppState, form: &PoemForm) -> Result<PoemView, AppError> {
    let example = form
        .example
        .as_deref()
        .filter(|example| !example.trim().is_empty());

    let (word, from_example) = match example {
        Some(example) => {
            let word = curated_word(example)
                .ok_or_else(|| AppError::BadRequest(format!("추천 단어가 아닙니다: {}", example)))?;
            (word, true)
        }
        None => {
            form.validate()?;
            (validate(&form.word)?, false)
        }
    };

    let result = state.poem_service.generate(&word).await?;

    Ok(PoemView {
        result,
        from_example,
    })
}

/// 전체 페이지 렌더링
pub fn render_page(input: &str, outcome: Option<&Result<PoemView, AppError>>) -> String {
    let outcome_html = match outcome {
        None => String::new(),
        Some(Ok(view)) => render_poem(view),
        Some(Err(error)) => render_error(error),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>한국어 N행시 생성기</title>
<style>{style}</style>
</head>
<body>
<main>
<h1>📝 한국어 N행시 생성기</h1>
<p><strong>단어를 입력하면 AI가 창의적인 N행시를 만들어드립니다!</strong></p>
{guide}
<form method="post" action="/" class="poem-form">
<label for="word">단어를 입력하세요:</label>
<input id="word" name="word" type="text" maxlength="{max_chars}" placeholder="예: 바다, 사랑, 희망" title="한글 단어를 입력해주세요 (2-6글자 권장)" value="{input}">
<button type="submit" class="primary">🎨 N행시 생성하기</button>
</form>
<div id="loading" class="alert info" hidden>⏳ N행시를 생성하고 있습니다...</div>
{outcome}
<hr>
<h3>💡 추천 단어</h3>
<form method="post" action="/" class="examples">
{examples}
</form>
<hr>
<footer>Powered by Gemini AI | 한국어 N행시 생성기</footer>
</main>
<script>
document.querySelectorAll('form').forEach(function (form) {{
  form.addEventListener('submit', function () {{
    document.getElementById('loading').hidden = false;
  }});
}});
</script>
</body>
</html>
"#,
        style = STYLE,
        guide = USAGE_GUIDE,
        max_chars = MAX_INPUT_CHARS,
        input = encode_double_quoted_attribute(input),
        outcome = outcome_html,
        examples = render_example_buttons(),
    )
}

fn render_poem(view: &PoemView) -> String {
    let word = &view.result.word;
    let lines: String = view
        .result
        .lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| format!("<div class=\"poem-line\">{}</div>\n", encode_text(line)))
        .collect();

    // 같은 단어로 다시 생성 (추천 단어는 추천 단어 경로 유지)
    let field = if view.from_example { "example" } else { "word" };

    format!(
        r#"<div class="alert success">✅ '{word}' N행시가 생성되었습니다!</div>
<h3>🎭 생성된 N행시:</h3>
{lines}<form method="post" action="/" class="regenerate">
<input type="hidden" name="{field}" value="{word_attr}">
<button type="submit">🔄 다시 생성하기</button>
</form>"#,
        word = encode_text(word),
        lines = lines,
        field = field,
        word_attr = encode_double_quoted_attribute(word),
    )
}

fn render_error(error: &AppError) -> String {
    let message = encode_text(&error.user_message()).into_owned();

    match error {
        AppError::InvalidWord(WordRejection::Empty) => {
            format!("<div class=\"alert warning\">⚠️ {}</div>", message)
        }
        error if error.is_generation_failure() => format!(
            "<div class=\"alert error\">❌ {}</div>\n<div class=\"alert info\">{}</div>",
            message, RETRY_HINT
        ),
        _ => format!("<div class=\"alert error\">❌ {}</div>", message),
    }
}

fn render_example_buttons() -> String {
    EXAMPLE_WORDS
        .iter()
        .map(|word| {
            format!(
                "<button type=\"submit\" name=\"example\" value=\"{0}\">{0}</button>",
                word
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const USAGE_GUIDE: &str = r#"<details>
<summary>📖 사용 방법</summary>
<ol>
<li>아래 입력창에 한글 단어를 입력하세요 (2-6글자 권장)</li>
<li>'생성하기' 버튼을 클릭하세요</li>
<li>AI가 각 글자로 시작하는 N행시를 만들어드립니다</li>
</ol>
<p><strong>예시:</strong> 입력 "바다"</p>
<ul>
<li>[바]람이 불어오는 해변에서</li>
<li>[다]정한 사람들과 추억을 만들어요</li>
</ul>
</details>"#;

const STYLE: &str = r#"
body { font-family: sans-serif; background: #ffffff; color: #2c3e50; }
main { max-width: 720px; margin: 0 auto; padding: 24px; }
.poem-form input { width: 100%; padding: 10px; font-size: 16px; box-sizing: border-box; margin: 8px 0; }
button { padding: 10px 16px; border-radius: 8px; border: 1px solid #d0d7de; background: #f8f9fa; cursor: pointer; }
button.primary, .regenerate button { width: 100%; }
button.primary { background: #ff4b4b; color: #ffffff; border: none; }
.examples { display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px; }
.poem-line {
    background-color: #f8f9fa;
    color: #2c3e50;
    padding: 15px;
    margin: 8px 0;
    border-left: 4px solid #3498db;
    border-radius: 8px;
    font-size: 18px;
    font-weight: 500;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}
.alert { padding: 12px; border-radius: 8px; margin: 8px 0; }
.alert.success { background: #e8f5e9; }
.alert.warning { background: #fff8e1; }
.alert.error { background: #ffebee; }
.alert.info { background: #e3f2fd; }
footer { text-align: center; color: #666; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn poem_view(lines: &[&str], from_example: bool) -> PoemView {
        PoemView {
            result: PoemResult {
                word: "바다".to_string(),
                lines: lines.iter().map(|l| l.to_string()).collect(),
            },
            from_example,
        }
    }

    #[test]
    fn index_should_render_form_and_examples() {
        let html = render_page("", None);

        assert!(html.contains("maxlength=\"10\""));
        assert!(html.contains("🎨 N행시 생성하기"));
        for word in EXAMPLE_WORDS {
            assert!(html.contains(&format!("name=\"example\" value=\"{}\"", word)));
        }
        assert!(!html.contains("poem-line\">"));
    }

    #[test]
    fn should_render_one_box_per_line() {
        let outcome = Ok(poem_view(&["[바]람이 분다", "  ", "[다]정한 하루"], false));

        let html = render_page("바다", Some(&outcome));

        assert_eq!(html.matches("<div class=\"poem-line\">").count(), 2);
        assert!(html.contains("✅ '바다' N행시가 생성되었습니다!"));
        assert!(html.contains("<input type=\"hidden\" name=\"word\" value=\"바다\">"));
    }

    #[test]
    fn regenerate_should_keep_example_path() {
        let outcome = Ok(poem_view(&["[바]람"], true));

        let html = render_page("", Some(&outcome));

        assert!(html.contains("<input type=\"hidden\" name=\"example\" value=\"바다\">"));
    }

    #[test]
    fn should_escape_model_output_and_input() {
        let outcome = Ok(poem_view(&["<script>alert(1)</script>"], false));

        let html = render_page("\"><b>", Some(&outcome));

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("value=\"\"><b>\""));
    }

    #[test]
    fn should_render_rejection_without_retry_hint() {
        let outcome = Err(AppError::from(WordRejection::TooLong));

        let html = render_page("가나다라마바사", Some(&outcome));

        assert!(html.contains("❌ 6글자 이하로 입력해주세요!"));
        assert!(!html.contains(RETRY_HINT));
    }

    #[test]
    fn should_render_empty_input_as_warning() {
        let outcome = Err(AppError::from(WordRejection::Empty));

        let html = render_page("", Some(&outcome));

        assert!(html.contains("⚠️ 단어를 입력해주세요!"));
    }

    #[test]
    fn should_render_generation_failure_with_retry_hint() {
        let outcome = Err(AppError::GenerationFailed("network down".to_string()));

        let html = render_page("바다", Some(&outcome));

        assert!(html.contains("오류가 발생했습니다: network down"));
        assert!(html.contains(RETRY_HINT));
    }
}
