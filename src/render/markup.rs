//! HTML assembly for the portfolio page.
//!
//! Everything here is pure string building: cards, badges and the carousel
//! shell are rendered from [`Project`] values and an initial
//! [`CarouselState`], and the in-page script receives the same layout
//! constants the state machine uses, so both sides agree on the arithmetic.

use crate::core::carousel::{
    CarouselState, CARD_GAP, CONTROLS_RESERVE, THREE_COLUMN_MIN, TWO_COLUMN_MIN,
};
use crate::domain::model::Project;
use crate::domain::services::categorize_tech;

const STYLESHEET: &str = r#"
:root { color-scheme: dark; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, sans-serif; background: #0f172a; color: #e2e8f0; }
main { margin: 0 auto; padding: 48px 24px; }
.section-title { font-size: 1.75rem; margin: 0 0 32px; }
.carousel-container { position: relative; overflow: hidden; padding: 8px 48px; }
.projects-carousel { display: flex; gap: 24px; transition: transform 0.35s ease; }
.project-card { flex: 0 0 auto; display: block; text-decoration: none; color: inherit; background: #1e293b; border-radius: 12px; padding: 24px; }
.project-card:hover { background: #27364d; }
.project-content { display: flex; flex-direction: column; justify-content: space-between; height: 100%; gap: 16px; }
.project-title { margin: 0 0 8px; font-size: 1.15rem; color: #f8fafc; }
.project-description { margin: 0; font-size: 0.9rem; color: #94a3b8; }
.tech-badges { display: flex; flex-wrap: wrap; gap: 8px; }
.tech-badge { font-size: 0.72rem; padding: 3px 10px; border-radius: 999px; background: #334155; }
.tech-badge.frontend { background: #1d4ed8; }
.tech-badge.backend { background: #047857; }
.tech-badge.database { background: #b45309; }
.tech-badge.tool { background: #6d28d9; }
.carousel-arrow { position: absolute; top: 50%; transform: translateY(-50%); z-index: 1; width: 40px; height: 40px; border: none; border-radius: 50%; background: #334155; color: #e2e8f0; cursor: pointer; }
.carousel-arrow:disabled { opacity: 0.35; cursor: default; }
.carousel-arrow.prev { left: 0; }
.carousel-arrow.next { right: 0; }
.text-center { text-align: center; }
.page-footer { margin-top: 48px; font-size: 0.8rem; color: #64748b; text-align: center; }
.page-footer a { color: inherit; }
"#;

/// Navigation script template. The layout constants are substituted in by
/// [`carousel_script`] so the page moves cards by exactly the widths the
/// state machine predicts.
const CAROUSEL_SCRIPT: &str = r#"
(function () {
  var GAP = __CARD_GAP__;
  var CONTROLS = __CONTROLS_RESERVE__;
  var THREE_COL = __THREE_COLUMN_MIN__;
  var TWO_COL = __TWO_COLUMN_MIN__;

  var container = document.querySelector('.carousel-container');
  var track = document.getElementById('projectsCarousel');
  var prevBtn = document.getElementById('prevBtn');
  var nextBtn = document.getElementById('nextBtn');
  if (!container || !track || !prevBtn || !nextBtn) { return; }

  var currentPosition = 0;

  function cardWidth() {
    var w = container.clientWidth;
    if (w >= THREE_COL) { return (w - 2 * GAP) / 3; }
    if (w >= TWO_COL) { return (w - GAP) / 2; }
    return w;
  }

  function update() {
    var cards = track.querySelectorAll('.project-card');
    var w = cardWidth();
    var totalWidth = cards.length * (w + GAP);
    var visibleWidth = container.clientWidth - CONTROLS;
    var maxPosition = -(totalWidth - visibleWidth);

    cards.forEach(function (card) { card.style.width = w + 'px'; });

    if (currentPosition < maxPosition) { currentPosition = maxPosition; }
    if (currentPosition > 0) { currentPosition = 0; }

    track.style.transform = 'translateX(' + currentPosition + 'px)';
    prevBtn.disabled = currentPosition >= 0;
    nextBtn.disabled = currentPosition <= maxPosition;
  }

  prevBtn.addEventListener('click', function () { currentPosition += cardWidth() + GAP; update(); });
  nextBtn.addEventListener('click', function () { currentPosition -= cardWidth() + GAP; update(); });
  window.addEventListener('resize', function () { currentPosition = 0; update(); });

  update();
})();
"#;

const PREV_ARROW_SVG: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M15 18L9 12L15 6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;
const NEXT_ARROW_SVG: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M9 18L15 12L9 6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Minimal escaping for text and attribute positions.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One badge per distinct technology, styled by its category.
pub fn render_tech_badges(project: &Project) -> String {
    project
        .technologies()
        .iter()
        .map(|tech| {
            let category = categorize_tech(tech);
            format!(
                r#"<span class="tech-badge {}">{}</span>"#,
                category.css_class(),
                escape_html(tech)
            )
        })
        .collect()
}

pub fn render_project_card(project: &Project) -> String {
    let description = project
        .repository
        .description
        .as_deref()
        .unwrap_or("Description not found");
    format!(
        r#"<a href="{href}" target="_blank" class="project-card">
  <div class="project-content">
    <div>
      <h3 class="project-title">{title}</h3>
      <p class="project-description">{description}</p>
    </div>
    <div class="tech-badges">{badges}</div>
  </div>
</a>"#,
        href = escape_html(&project.repository.html_url),
        title = escape_html(&project.repository.name),
        description = escape_html(description),
        badges = render_tech_badges(project),
    )
}

fn render_carousel(projects: &[Project], state: &CarouselState) -> String {
    let cards: String = projects.iter().map(render_project_card).collect();
    format!(
        r#"<div class="carousel-container" style="max-width: {width}px">
  <div id="projectsCarousel" class="projects-carousel" style="transform: translateX({offset}px)">
{cards}
  </div>
  <button id="prevBtn" class="carousel-arrow prev" aria-label="Previous"{prev_disabled}>{prev_svg}</button>
  <button id="nextBtn" class="carousel-arrow next" aria-label="Next"{next_disabled}>{next_svg}</button>
</div>"#,
        width = state.container_width(),
        offset = state.offset(),
        cards = cards,
        prev_disabled = if state.prev_disabled() { " disabled" } else { "" },
        next_disabled = if state.next_disabled() { " disabled" } else { "" },
        prev_svg = PREV_ARROW_SVG,
        next_svg = NEXT_ARROW_SVG,
    )
}

fn carousel_script() -> String {
    CAROUSEL_SCRIPT
        .replace("__CARD_GAP__", &CARD_GAP.to_string())
        .replace("__CONTROLS_RESERVE__", &CONTROLS_RESERVE.to_string())
        .replace("__THREE_COLUMN_MIN__", &THREE_COLUMN_MIN.to_string())
        .replace("__TWO_COLUMN_MIN__", &TWO_COLUMN_MIN.to_string())
}

fn page_footer(account: &str) -> String {
    format!(
        r#"<footer class="page-footer">Generated {date} · <a href="https://github.com/{account}">@{account}</a></footer>"#,
        date = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC"),
        account = escape_html(account),
    )
}

fn page_shell(title: &str, body: &str, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<main>
<h2 class="section-title">Projects</h2>
{body}
</main>
{script}
</body>
</html>
"#,
        title = escape_html(title),
        style = STYLESHEET,
        body = body,
        script = script,
    )
}

/// The complete portfolio page for a non-empty project list.
pub fn render_portfolio(
    projects: &[Project],
    state: &CarouselState,
    title: &str,
    account: &str,
) -> String {
    let body = format!(
        "{}\n{}",
        render_carousel(projects, state),
        page_footer(account)
    );
    let script = format!("<script>{}</script>", carousel_script());
    page_shell(title, &body, &script)
}

/// Page shown when the account has no repositories to showcase.
pub fn render_empty(title: &str) -> String {
    page_shell(
        title,
        r#"<p class="text-center">No projects were found.</p>"#,
        "",
    )
}

/// Page shown when building the portfolio failed outright.
pub fn render_load_error(title: &str) -> String {
    page_shell(
        title,
        r#"<p class="text-center">Error while trying to load projects.</p>"#,
        "",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RepoDetails, Repository};

    fn project(name: &str, description: Option<&str>, details: RepoDetails) -> Project {
        Project::new(
            Repository {
                name: name.to_string(),
                html_url: format!("https://github.com/octocat/{}", name),
                description: description.map(String::from),
                fork: false,
                archived: false,
            },
            details,
        )
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"cats" & dogs</b>"#),
            "&lt;b&gt;&quot;cats&quot; &amp; dogs&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_badges_carry_category_classes() {
        let p = project(
            "api",
            None,
            RepoDetails {
                languages: vec!["Python".to_string()],
                dependencies: vec!["React".to_string(), "Redis".to_string()],
            },
        );
        let badges = render_tech_badges(&p);
        assert!(badges.contains(r#"<span class="tech-badge backend">Python</span>"#));
        assert!(badges.contains(r#"<span class="tech-badge frontend">React</span>"#));
        assert!(badges.contains(r#"<span class="tech-badge database">Redis</span>"#));
    }

    #[test]
    fn test_duplicate_technology_renders_once() {
        let p = project(
            "site",
            None,
            RepoDetails {
                languages: vec!["JavaScript".to_string()],
                dependencies: vec!["JavaScript".to_string(), "npm".to_string()],
            },
        );
        let badges = render_tech_badges(&p);
        assert_eq!(badges.matches(">JavaScript<").count(), 1);
    }

    #[test]
    fn test_card_falls_back_to_default_description() {
        let card = render_project_card(&project("thing", None, RepoDetails::default()));
        assert!(card.contains("Description not found"));
        assert!(card.contains(r#"href="https://github.com/octocat/thing""#));
        assert!(card.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_card_escapes_repository_text() {
        let card = render_project_card(&project(
            "weird<name>",
            Some(r#"uses <script> & "quotes""#),
            RepoDetails::default(),
        ));
        assert!(card.contains("weird&lt;name&gt;"));
        assert!(card.contains("uses &lt;script&gt; &amp; &quot;quotes&quot;"));
        assert!(!card.contains("<script>"));
    }

    #[test]
    fn test_portfolio_document_structure() {
        let projects = vec![
            project("one", Some("first"), RepoDetails::default()),
            project("two", Some("second"), RepoDetails::default()),
        ];
        let state = CarouselState::new(projects.len(), 1300.0);
        let html = render_portfolio(&projects, &state, "My Portfolio", "octocat");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>My Portfolio</title>"));
        assert_eq!(html.matches(r#"class="project-card""#).count(), 2);
        assert!(html.contains(r#"aria-label="Previous""#));
        assert!(html.contains(r#"aria-label="Next""#));
        assert!(html.contains("translateX(0px)"));
        assert!(html.contains("max-width: 1300px"));
        assert!(html.contains("@octocat"));
    }

    #[test]
    fn test_initial_button_state_when_content_fits() {
        // Two cards at 1300 px fit the viewport, so both arrows start off.
        let projects = vec![
            project("one", None, RepoDetails::default()),
            project("two", None, RepoDetails::default()),
        ];
        let state = CarouselState::new(projects.len(), 1300.0);
        let html = render_portfolio(&projects, &state, "t", "octocat");

        assert!(html.contains(r#"aria-label="Previous" disabled"#));
        assert!(html.contains(r#"aria-label="Next" disabled"#));
    }

    #[test]
    fn test_initial_next_enabled_with_many_cards() {
        let projects: Vec<Project> = (0..10)
            .map(|i| project(&format!("repo-{}", i), None, RepoDetails::default()))
            .collect();
        let state = CarouselState::new(projects.len(), 1300.0);
        let html = render_portfolio(&projects, &state, "t", "octocat");

        assert!(html.contains(r#"aria-label="Previous" disabled"#));
        assert!(html.contains(r#"aria-label="Next">"#));
    }

    #[test]
    fn test_script_receives_layout_constants() {
        let script = carousel_script();
        assert!(script.contains("var GAP = 24;"));
        assert!(script.contains("var CONTROLS = 96;"));
        assert!(script.contains("var THREE_COL = 1200;"));
        assert!(script.contains("var TWO_COL = 768;"));
        assert!(!script.contains("__CARD_GAP__"));
    }

    #[test]
    fn test_empty_and_error_pages() {
        let empty = render_empty("t");
        assert!(empty.contains(r#"<p class="text-center">No projects were found.</p>"#));
        assert!(!empty.contains(r#"id="projectsCarousel""#));

        let error = render_load_error("t");
        assert!(error.contains(r#"<p class="text-center">Error while trying to load projects.</p>"#));
    }
}
