//! HTML pages for the web UI.
//!
//! Pages are plain strings; every value taken from the store goes through
//! [`escape`] and every name placed in a URL through [`encode_segment`].

use crate::player::{Player, PlayerField};
use crate::store::{Page, PlayerLookup};

const STYLE: &str = r#"<style>
body { font-family: sans-serif; margin: 20px; background: #0f172a; color: #e2e8f0; }
a { color: #38bdf8; }
.cards { display: flex; flex-wrap: wrap; gap: 12px; }
.player-card { background: #1e293b; border-radius: 8px; padding: 12px; width: 200px; }
.player-card img, .detail img { max-width: 100%; border-radius: 6px; }
table { border-collapse: collapse; }
td, th { padding: 4px 10px; border-bottom: 1px solid #334155; text-align: left; }
.nav { margin: 16px 0; display: flex; gap: 16px; }
.compare { display: flex; gap: 32px; }
.empty { color: #94a3b8; }
</style>"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>{title}</title>
{STYLE}</head>
<body>
<header class="nav"><a href="/">Home</a><a href="/players">Players</a><a href="/compare">Compare</a></header>
{body}
</body></html>"#,
        title = escape(title),
    )
}

/// Escape text for use in HTML content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a player name for use as a single path segment.
pub fn encode_segment(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn player_href(player: &Player) -> String {
    format!("/player/{}", encode_segment(&player.name))
}

pub fn home_page(total: Option<usize>) -> String {
    let summary = match total {
        Some(total) => format!("<p>{} players in the database.</p>", total),
        None => "<p class=\"empty\">Player database unavailable.</p>".to_string(),
    };
    layout(
        "Football Stats",
        &format!(
            r#"<h1>Football Stats</h1>
{summary}
<p><a href="/players">Browse players</a> or <a href="/compare">compare two players</a>.</p>"#
        ),
    )
}

const SEARCH_FORM: &str = r#"<form class="search" method="get" action="/players">
<input name="q" placeholder="Search name or team"> <button type="submit">Search</button></form>"#;

fn player_cards(players: &[Player]) -> String {
    let mut cards = String::from("<div class=\"cards\">");
    for player in players {
        cards.push_str(&format!(
            r#"<div class="player-card"><img src="{photo}" alt="{name}"><h3><a href="{href}">{name}</a></h3><p>{team} · {season} · {position}</p></div>"#,
            href = player_href(player),
            photo = escape(&player.photo),
            name = escape(&player.name),
            team = escape(&player.team),
            season = player.season,
            position = escape(&player.position),
        ));
    }
    cards.push_str("</div>");
    cards
}

pub fn players_page(page: &Page) -> String {
    let mut body = format!("<h1>Players</h1>{}", SEARCH_FORM);

    if page.players.is_empty() {
        body.push_str("<p class=\"empty\">No players on this page.</p>");
    } else {
        body.push_str(&player_cards(&page.players));
    }

    body.push_str("<div class=\"nav\">");
    if let Some(prev) = page.prev_page {
        body.push_str(&format!("<a href=\"/players?page={}\">&laquo; Previous</a>", prev));
    }
    body.push_str(&format!(
        "<span>Page {} of {} ({} players)</span>",
        page.page,
        page.total_pages(),
        page.total
    ));
    if let Some(next) = page.next_page {
        body.push_str(&format!("<a href=\"/players?page={}\">Next &raquo;</a>", next));
    }
    body.push_str("</div>");

    layout("Players", &body)
}

/// Listing filtered by a name/team prefix, without pagination.
pub fn search_page(query: &str, players: &[Player]) -> String {
    let mut body = format!(
        "<h1>Players matching '{}'</h1>{}",
        escape(query),
        SEARCH_FORM
    );
    if players.is_empty() {
        body.push_str("<p class=\"empty\">No matching players.</p>");
    } else {
        body.push_str(&player_cards(players));
    }
    body.push_str("<div class=\"nav\"><a href=\"/players\">All players</a></div>");

    layout("Players", &body)
}

fn stats_table(player: &Player) -> String {
    let mut rows = String::new();
    let descriptive = [
        PlayerField::Team,
        PlayerField::Season,
        PlayerField::Position,
        PlayerField::Age,
        PlayerField::Height,
        PlayerField::Weight,
    ];
    let fields = descriptive
        .iter()
        .chain(PlayerField::RATINGS.iter())
        .chain(PlayerField::MATCH_STATS.iter());

    for field in fields {
        let value = player.get(*field);
        let value = if value.is_empty() { "-".to_string() } else { escape(&value) };
        rows.push_str(&format!("<tr><th>{}</th><td>{}</td></tr>", field, value));
    }
    format!("<table>{}</table>", rows)
}

fn neighbour_links(lookup: &PlayerLookup) -> String {
    let mut nav = String::from("<div class=\"nav\">");
    if let Some(prev) = &lookup.prev {
        nav.push_str(&format!(
            "<a href=\"{}\">&laquo; {}</a>",
            player_href(prev),
            escape(&prev.name)
        ));
    }
    if let Some(next) = &lookup.next {
        nav.push_str(&format!(
            "<a href=\"{}\">{} &raquo;</a>",
            player_href(next),
            escape(&next.name)
        ));
    }
    nav.push_str("</div>");
    nav
}

fn player_panel(lookup: &PlayerLookup) -> String {
    let player = &lookup.player;
    format!(
        r#"<div class="detail"><h2>{name}</h2><img src="{photo}" alt="{name}">{table}{nav}</div>"#,
        name = escape(&player.name),
        photo = escape(&player.photo),
        table = stats_table(player),
        nav = neighbour_links(lookup),
    )
}

/// Detail page; `lookup` is `None` when no player matched `name`.
pub fn player_page(name: &str, lookup: Option<&PlayerLookup>) -> String {
    match lookup {
        Some(lookup) => layout(&lookup.player.name, &player_panel(lookup)),
        None => layout(
            "Player not found",
            &format!(
                "<h1>Player not found</h1><p class=\"empty\">No player named '{}'.</p>",
                escape(name)
            ),
        ),
    }
}

/// Side-by-side comparison. `None` renders the empty form.
pub fn compare_page(players: Option<[(&str, Option<&PlayerLookup>); 2]>) -> String {
    let form = r#"<form method="get" action="/compare">
<input name="player1" placeholder="First player"> <input name="player2" placeholder="Second player">
<button type="submit">Compare</button></form>"#;

    let Some(pair) = players else {
        return layout(
            "Compare",
            &format!(
                "<h1>Compare players</h1>{}<p class=\"empty\">Pick two players to compare.</p>",
                form
            ),
        );
    };

    let mut body = format!("<h1>Compare players</h1>{}<div class=\"compare\">", form);
    for (name, lookup) in pair {
        match lookup {
            Some(lookup) => body.push_str(&player_panel(lookup)),
            None => body.push_str(&format!(
                "<div class=\"detail\"><h2>{}</h2><p class=\"empty\">Player not found.</p></div>",
                escape(name)
            )),
        }
    }
    body.push_str("</div>");

    layout("Compare", &body)
}
