//! Word count HTTP API (axum).

use axum::extract::Query;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::info;

use crate::error::TallyError;
use crate::tally::{self, WordTally};
use crate::text::{Sentence, Text};

/// Body of POST /count.
#[derive(serde::Deserialize)]
pub struct CountRequest {
    pub text: String,
    #[serde(default)]
    pub words: Vec<String>,
}

/// Query params for GET /sentences?text=...
#[derive(serde::Deserialize)]
pub struct SentencesQuery {
    pub text: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/count", post(count_handler))
        .route("/sentences", get(sentences_handler))
}

/// Bind to 127.0.0.1:`port` and serve until the process is stopped.
pub fn run(port: u16) -> Result<(), TallyError> {
    let rt = tokio::runtime::Runtime::new().map_err(TallyError::Server)?;
    rt.block_on(async {
        let addr = format!("127.0.0.1:{}", port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(TallyError::Server)?;
        info!("listening on http://{}", addr);
        axum::serve(listener, router())
            .await
            .map_err(TallyError::Server)
    })
}

/// POST /count {text, words} -> JSON array of tallies sorted by total descending.
pub async fn count_handler(Json(req): Json<CountRequest>) -> Json<Vec<WordTally>> {
    info!("count request: {} word(s)", req.words.len());
    Json(tally::process(&req.text, &req.words))
}

/// GET /sentences?text=... -> JSON array of { text, words }.
pub async fn sentences_handler(Query(params): Query<SentencesQuery>) -> Json<Vec<Sentence>> {
    let text = Text::new(&params.text);
    Json(text.sentences().to_vec())
}

/// GET / -> static HTML form.
pub async fn index_page() -> axum::response::Html<&'static str> {
    const HTML: &str = r#"
<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="UTF-8">
  <title>Word Tally</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; }
    textarea, input { width: 100%; padding: 0.5rem; font-size: 1rem; box-sizing: border-box; }
    button { margin-top: 0.5rem; padding: 0.5rem 1rem; font-size: 1rem; cursor: pointer; }
    #results div { padding: 0.25rem 0; border-bottom: 1px solid #eee; }
  </style>
</head>
<body>
  <h1>Word Tally</h1>
  <form id="form">
    <textarea id="text" rows="6" placeholder="Текст"></textarea>
    <input id="words" placeholder="python, легко, основы">
    <button type="submit">Посчитать</button>
  </form>
  <div id="results"></div>
  <script>
    document.getElementById('form').addEventListener('submit', async (e) => {
      e.preventDefault();
      const text = document.getElementById('text').value;
      const words = document.getElementById('words').value
        .split(',').map(w => w.trim()).filter(w => w);
      const results = document.getElementById('results');
      try {
        const r = await fetch('/count', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ text, words })
        });
        const rows = await r.json();
        results.replaceChildren(...rows.map(t => {
          const row = document.createElement('div');
          row.textContent = t.word + ': ' + t.total + ' [' + t.per_sentence.join(', ') + ']';
          return row;
        }));
      } catch (err) {
        results.textContent = 'Ошибка: ' + err;
      }
    });
  </script>
</body>
</html>
"#;
    axum::response::Html(HTML)
}
