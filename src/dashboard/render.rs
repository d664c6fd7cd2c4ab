//! Server-side HTML for the board. Everything here is a pure projection of
//! the [`Board`] view-model; no classification happens in this module.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::board::{Board, Filter, PredictionCard, StatsView};
use crate::feed::FEED_ERROR_MESSAGE;

pub const NO_PREDICTIONS_MESSAGE: &str = "No predictions available for today.";

/// What the predictions container should show.
pub enum PageContent<'a> {
    Loaded(&'a Board),
    /// The feed could not be loaded; stats and timestamp keep their
    /// placeholders and the container shows the error message.
    Failed,
}

pub fn render_page(
    content: PageContent<'_>,
    filter: Filter,
    refresh: Option<Duration>,
    rendered_at: DateTime<Utc>,
) -> String {
    let (stats, last_update, predictions) = match content {
        PageContent::Loaded(board) => (
            board.stats.clone(),
            format!("Last Updated: {}", escape_html(&board.timestamp)),
            render_predictions(board),
        ),
        PageContent::Failed => (
            StatsView::placeholder(),
            "Last Updated: --".to_string(),
            loading_message(FEED_ERROR_MESSAGE),
        ),
    };

    let mut html = String::with_capacity(8 * 1024);
    html.push_str(PAGE_HEAD);
    if let Some(interval) = refresh {
        html.push_str(&format!(
            "<meta http-equiv=\"refresh\" content=\"{}\">\n",
            interval.as_secs()
        ));
    }
    html.push_str(PAGE_STYLE);
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!(
        r#"<header>
  <h1>⚾ Strikeout Prediction Board</h1>
  <span class="last-update" id="lastUpdate">{last_update}</span>
</header>
<main>
  <div class="stats-grid">
    <div class="stat-card"><div class="label">Games Today</div><div class="value" id="totalGames">{total}</div></div>
    <div class="stat-card"><div class="label">High Confidence</div><div class="value" id="highConfidence">{high}</div></div>
    <div class="stat-card"><div class="label">Win Rate (7d)</div><div class="value" id="winRate7d">{wr7}</div></div>
    <div class="stat-card"><div class="label">Win Rate (30d)</div><div class="value" id="winRate30d">{wr30}</div></div>
  </div>
  <div class="filters">
{buttons}  </div>
  <div class="predictions" id="predictions">
{predictions}  </div>
</main>
<footer>Rendered {rendered}</footer>
"#,
        last_update = last_update,
        total = escape_html(&stats.total_games),
        high = escape_html(&stats.high_confidence),
        wr7 = escape_html(&stats.win_rate_7d),
        wr30 = escape_html(&stats.win_rate_30d),
        buttons = render_filter_buttons(filter),
        predictions = predictions,
        rendered = rendered_at.format("%Y-%m-%d %H:%M:%S UTC"),
    ));

    html.push_str(PAGE_SCRIPT);
    html.push_str("</body>\n</html>\n");
    html
}

/// Inner markup of the predictions container.
pub fn render_predictions(board: &Board) -> String {
    if board.is_empty() {
        return loading_message(NO_PREDICTIONS_MESSAGE);
    }
    board.cards.iter().map(render_card).collect()
}

pub fn render_card(card: &PredictionCard) -> String {
    let direction = card.direction.as_str();
    let confidence = card.confidence.as_str();
    let display = if card.visible { "block" } else { "none" };

    format!(
        r#"    <div class="prediction-card" data-type="{direction}" data-confidence="{confidence}" style="display: {display}">
      <div class="matchup">
        <span>{pitcher}</span>
        <span class="vs-label">vs</span>
        <span>{opponent}</span>
      </div>
      <div class="prediction-stats">
        <div class="stat-item"><div class="stat-item-label">Betting Line</div><div class="stat-item-value">{line}</div></div>
        <div class="stat-item"><div class="stat-item-label">Expected SO</div><div class="stat-item-value">{expected}</div></div>
        <div class="stat-item"><div class="stat-item-label">Probability</div><div class="stat-item-value">{probability}</div></div>
      </div>
      <div class="recommendation {direction}">{recommendation}</div>
      <span class="confidence-badge confidence-{confidence}">{label}</span>
    </div>
"#,
        pitcher = escape_html(&card.pitcher_name),
        opponent = escape_html(&card.opponent),
        line = escape_html(&card.line),
        expected = escape_html(&card.expected_so),
        probability = escape_html(&card.probability),
        recommendation = escape_html(&card.recommendation),
        label = card.confidence.label(),
    )
}

fn render_filter_buttons(active: Filter) -> String {
    Filter::ALL
        .iter()
        .map(|f| {
            let class = if *f == active {
                "filter-btn active"
            } else {
                "filter-btn"
            };
            format!(
                "    <a class=\"{class}\" data-filter=\"{name}\" href=\"?filter={name}\">{label}</a>\n",
                class = class,
                name = f.as_str(),
                label = f.label(),
            )
        })
        .collect()
}

fn loading_message(message: &str) -> String {
    format!("    <div class=\"loading\">{}</div>\n", escape_html(message))
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Strikeout Prediction Board</title>
"#;

const PAGE_STYLE: &str = r#"<style>
  :root {
    --bg: #0f1117;
    --card: #1a1d27;
    --border: #2a2d3a;
    --accent: #6c63ff;
    --green: #00c896;
    --red: #ff4f6a;
    --amber: #ff9800;
    --text: #e0e0e0;
    --muted: #8888aa;
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }
  header { display: flex; align-items: center; gap: 1rem; padding: 1rem 2rem; border-bottom: 1px solid var(--border); }
  header h1 { font-size: 1.4rem; font-weight: 700; }
  .last-update { margin-left: auto; color: var(--muted); font-size: .8rem; }
  main { padding: 1.5rem 2rem; display: grid; gap: 1.5rem; }
  .stats-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 1rem; }
  .stat-card { background: var(--card); border: 1px solid var(--border); border-radius: 10px; padding: 1.2rem; }
  .stat-card .label { color: var(--muted); font-size: .8rem; text-transform: uppercase; letter-spacing: .06em; margin-bottom: .4rem; }
  .stat-card .value { font-size: 1.7rem; font-weight: 700; }
  .filters { display: flex; gap: .5rem; flex-wrap: wrap; }
  .filter-btn { border: 1px solid var(--border); color: var(--muted); padding: .4rem .9rem; border-radius: 6px; text-decoration: none; font-size: .85rem; }
  .filter-btn:hover { border-color: var(--accent); color: var(--accent); }
  .filter-btn.active { background: var(--accent); border-color: var(--accent); color: #fff; }
  .predictions { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; }
  .prediction-card { background: var(--card); border: 1px solid var(--border); border-radius: 10px; padding: 1.2rem; }
  .matchup { display: flex; gap: .5rem; align-items: baseline; font-weight: 600; margin-bottom: .8rem; }
  .vs-label { color: var(--muted); font-size: .8rem; }
  .prediction-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: .5rem; margin-bottom: .8rem; }
  .stat-item-label { color: var(--muted); font-size: .7rem; text-transform: uppercase; }
  .stat-item-value { font-size: 1.1rem; font-weight: 700; }
  .recommendation { padding: .5rem; border-radius: 6px; font-weight: 700; text-align: center; margin-bottom: .6rem; }
  .recommendation.over { background: rgba(0,200,150,.15); color: var(--green); }
  .recommendation.under { background: rgba(255,79,106,.15); color: var(--red); }
  .confidence-badge { display: inline-block; padding: .15rem .55rem; border-radius: 20px; font-size: .75rem; font-weight: 600; }
  .confidence-high { background: rgba(0,200,150,.2); color: var(--green); }
  .confidence-medium { background: rgba(255,152,0,.2); color: var(--amber); }
  .confidence-low { background: rgba(136,136,170,.2); color: var(--muted); }
  .loading { color: var(--muted); text-align: center; padding: 2rem; font-size: .9rem; grid-column: 1 / -1; }
  footer { color: var(--muted); font-size: .75rem; padding: 1rem 2rem; }
</style>
"#;

// Client-side filtering reads the markers written by `render_card`, so it
// never re-evaluates thresholds. Links still work with scripts disabled.
const PAGE_SCRIPT: &str = r#"<script>
const filterBtns = document.querySelectorAll('.filter-btn');
filterBtns.forEach(btn => {
  btn.addEventListener('click', ev => {
    ev.preventDefault();
    filterBtns.forEach(b => b.classList.remove('active'));
    btn.classList.add('active');
    const filter = btn.dataset.filter;
    document.querySelectorAll('.prediction-card').forEach(card => {
      let show = false;
      switch (filter) {
        case 'all': show = true; break;
        case 'high': show = card.dataset.confidence === 'high'; break;
        case 'over': show = card.dataset.type === 'over'; break;
        case 'under': show = card.dataset.type === 'under'; break;
      }
      card.style.display = show ? 'block' : 'none';
    });
    history.replaceState(null, '', btn.getAttribute('href'));
  });
});
</script>
"#;
