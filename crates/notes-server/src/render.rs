//! Server-side HTML assembly for the page routes.
//!
//! The markup is deliberately plain: semantic sections, a small embedded
//! stylesheet, no scripts.  Every catalog field that reaches the page goes
//! through `esc` even though the builtin data is trusted, because the
//! catalog can be swapped for a user-supplied TOML file.

use chrono::{Datelike, Local};
use notes_catalog::query::Podium;
use notes_catalog::{Catalog, Episode};

// ── helpers ───────────────────────────────────────────────────────────────────

pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Percent-encode a query-string component.
fn urlenc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// "42850" -> "42,850" for view counts.
fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn listing_url(query: &str, selected_tags: &[String]) -> String {
    let mut params = Vec::new();
    if !query.is_empty() {
        params.push(format!("q={}", urlenc(query)));
    }
    if !selected_tags.is_empty() {
        params.push(format!("tags={}", urlenc(&selected_tags.join(","))));
    }
    if params.is_empty() {
        "/episodes".to_string()
    } else {
        format!("/episodes?{}", params.join("&"))
    }
}

// ── page chrome ───────────────────────────────────────────────────────────────

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#0a0a0a;color:#e5e5e5}\
a{color:#c084fc;text-decoration:none}a:hover{text-decoration:underline}\
header,main,footer{max-width:72rem;margin:0 auto;padding:0 1.5rem}\
header{display:flex;justify-content:space-between;align-items:center;padding-top:1rem}\
header nav a{margin-left:1rem;color:#a3a3a3}\
h1,h2,h3{color:#fff}\
.card{border:1px solid #262626;border-radius:1rem;padding:1rem;margin:0.75rem 0;background:#171717}\
.card img{width:3rem;height:3rem;border-radius:0.5rem;vertical-align:middle}\
.meta{color:#737373;font-size:0.85rem}\
.tag{display:inline-block;border:1px solid #404040;border-radius:9999px;padding:0.1rem 0.6rem;\
margin:0.1rem;font-size:0.8rem;color:#a3a3a3}\
.tag.active{border-color:#a855f7;color:#d8b4fe}\
.empty{text-align:center;padding:3rem 0;color:#a3a3a3}\
footer{border-top:1px solid #262626;margin-top:4rem;padding:2rem 1.5rem;color:#737373}\
input[type=email],input[type=search]{background:#171717;border:1px solid #404040;\
border-radius:0.75rem;padding:0.6rem 1rem;color:#fff;width:16rem}\
button{background:#7c3aed;color:#fff;border:0;border-radius:0.75rem;padding:0.6rem 1.2rem}";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title} · Podchemy</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
<header>\n<a href=\"/\"><strong>Podchemy</strong></a>\n<nav>\
<a href=\"/\">Home</a><a href=\"/episodes\">Episodes</a>\
<a href=\"/popular\">Popular</a><a href=\"/about\">About</a></nav>\n</header>\n\
<main>\n{body}\n</main>\n\
<footer>© {year} Podchemy. All rights reserved.</footer>\n</body>\n</html>\n",
        title = esc(title),
        body = body,
        year = Local::now().year(),
    )
}

fn episode_card(ep: &Episode) -> String {
    let views = ep
        .views
        .map(|v| format!(" · {} views", fmt_count(v)))
        .unwrap_or_default();
    let tags: String = ep
        .tags
        .iter()
        .map(|t| format!("<span class=\"tag\">{}</span>", esc(t)))
        .collect();
    format!(
        "<article class=\"card\">\
<img src=\"{logo}\" alt=\"{podcast} logo\">\n\
<p class=\"meta\">{podcast} · {date} · {read_time} min read{views}</p>\n\
<h3><a href=\"/episode/{id}\">{title}</a></h3>\n\
<p>{description}</p>\n<p>{tags}</p>\n</article>",
        logo = esc(&ep.podcast_logo),
        podcast = esc(&ep.podcast_name),
        date = esc(&ep.date),
        read_time = ep.read_time,
        views = views,
        id = esc(&ep.id),
        title = esc(&ep.title),
        description = esc(&ep.description),
        tags = tags,
    )
}

fn cards(episodes: &[&Episode]) -> String {
    episodes.iter().map(|ep| episode_card(ep)).collect()
}

// ── pages ─────────────────────────────────────────────────────────────────────

pub fn home_page(catalog: &Catalog) -> String {
    let body = format!(
        "<section>\n<p class=\"meta\">Your Podcast Knowledge Companion</p>\n\
<h1>Insightful notes from podcasts you love</h1>\n\
<p>Skip the filler, get to the wisdom. We transform hours of podcast content \
into beautifully curated notes, key takeaways, and actionable insights.</p>\n\
<p><a href=\"/episodes\">Explore Episodes</a> · <a href=\"/popular\">Most Popular</a></p>\n\
</section>\n\
<section>\n<h2>Featured Episodes</h2>\n{featured}\n</section>\n\
<section>\n<h2>Recent Episodes</h2>\n{recent}\n</section>\n\
<section>\n<h2>Most Popular</h2>\n{popular}\n\
<p><a href=\"/popular\">See all popular episodes</a></p>\n</section>\n\
<section>\n<h2>Stay Curious</h2>\n\
<form method=\"post\" action=\"/newsletter\">\n\
<input type=\"email\" name=\"email\" placeholder=\"Enter your email address\" required>\n\
<button type=\"submit\">Subscribe</button>\n</form>\n\
<p class=\"meta\">Join 12,000+ curious minds. No spam, unsubscribe anytime.</p>\n</section>",
        featured = cards(&catalog.featured()),
        recent = cards(&catalog.recent()),
        popular = cards(&catalog.popular()),
    );
    layout("Home", &body)
}

pub fn episodes_page(
    catalog: &Catalog,
    query: &str,
    selected_tags: &[String],
    results: &[&Episode],
) -> String {
    // Tag chips toggle membership in the current selection.
    let chips: String = catalog
        .all_tags()
        .iter()
        .map(|tag| {
            let active = selected_tags.iter().any(|t| t == tag);
            let mut next: Vec<String> = selected_tags
                .iter()
                .filter(|t| t.as_str() != *tag)
                .cloned()
                .collect();
            if !active {
                next.push((*tag).to_string());
            }
            format!(
                "<a class=\"tag{active}\" href=\"{href}\">{label}</a>",
                active = if active { " active" } else { "" },
                href = esc(&listing_url(query, &next)),
                label = esc(tag),
            )
        })
        .collect();

    let results_html = if results.is_empty() {
        "<div class=\"empty\">\n<h3>No episodes found</h3>\n\
<p>Try adjusting your search or filters</p>\n</div>"
            .to_string()
    } else {
        cards(results)
    };

    let body = format!(
        "<h1>All Episodes</h1>\n\
<p>Explore our complete collection of podcast notes and insights. \
Search, filter, and discover wisdom from the world's best conversations.</p>\n\
<form method=\"get\" action=\"/episodes\">\n\
<input type=\"search\" name=\"q\" value=\"{query}\" \
placeholder=\"Search episodes, podcasts, or topics...\">\n\
<input type=\"hidden\" name=\"tags\" value=\"{tags_value}\">\n\
<button type=\"submit\">Search</button>\n</form>\n\
<p>{chips}</p>\n\
<p class=\"meta\">Showing {shown} of {total} episodes</p>\n\
{results}",
        query = esc(query),
        tags_value = esc(&selected_tags.join(",")),
        chips = chips,
        shown = results.len(),
        total = catalog.len(),
        results = results_html,
    );
    layout("All Episodes", &body)
}

pub fn episode_page(ep: &Episode) -> String {
    let takeaways: String = ep
        .key_takeaways
        .iter()
        .map(|t| format!("<li>{}</li>", esc(t)))
        .collect();
    let tags: String = ep
        .tags
        .iter()
        .map(|t| format!("<span class=\"tag\">{}</span>", esc(t)))
        .collect();
    let views = ep
        .views
        .map(|v| format!(" · {} views", fmt_count(v)))
        .unwrap_or_default();

    let body = format!(
        "<p><a href=\"/episodes\">&larr; Back to episodes</a></p>\n\
<img src=\"{logo}\" alt=\"{podcast} logo\" width=\"64\" height=\"64\">\n\
<p class=\"meta\">{podcast} · {date} · {read_time} min read{views}</p>\n\
<h1>{title}</h1>\n\
<p>{description}</p>\n\
<h2>Key Takeaways</h2>\n<ol>{takeaways}</ol>\n\
<p>{tags}</p>",
        logo = esc(&ep.podcast_logo),
        podcast = esc(&ep.podcast_name),
        date = esc(&ep.date),
        read_time = ep.read_time,
        views = views,
        title = esc(&ep.title),
        description = esc(&ep.description),
        takeaways = takeaways,
        tags = tags,
    );
    layout(&ep.title, &body)
}

pub fn popular_page(podium: &Podium<'_>) -> String {
    let top = podium
        .top
        .map(|ep| {
            format!(
                "<section>\n<h2>#1 Most Popular</h2>\n\
<p class=\"meta\">The crown jewel of our collection</p>\n{}\n</section>",
                episode_card(ep)
            )
        })
        .unwrap_or_default();

    let runner_ups: String = podium
        .runner_ups
        .iter()
        .enumerate()
        .map(|(i, ep)| format!("<p class=\"meta\">#{}</p>\n{}", i + 2, episode_card(ep)))
        .collect();

    let body = format!(
        "<h1>Most Popular</h1>\n\
<p>The episodes our community can't stop reading. These conversations \
have resonated deeply with thousands of curious minds.</p>\n\
{top}\n\
<section>\n<h2>Runner-ups</h2>\n{runner_ups}\n</section>\n\
<section>\n<h2>Trending Episodes</h2>\n{rest}\n</section>",
        top = top,
        runner_ups = runner_ups,
        rest = cards(&podium.rest),
    );
    layout("Most Popular", &body)
}

pub fn about_page() -> String {
    let body = "<h1>About Podchemy</h1>\n\
<p>We transform hours of podcast conversations into beautifully crafted notes \
and actionable insights. Because wisdom should be accessible, not time-consuming.</p>\n\
<h2>Our Mission</h2>\n\
<p>In a world overflowing with content, finding signal in the noise has become \
increasingly difficult. Podcasts are one of the richest sources of wisdom, \
featuring conversations with world-class thinkers, entrepreneurs, and experts.</p>\n\
<p>But who has 3 hours to listen to every episode? That's where Podchemy comes in. \
We believe that everyone deserves access to the best ideas, regardless of how \
much time they have.</p>\n\
<p>Our team meticulously listens, analyzes, and distills each episode into \
comprehensive notes that capture not just the facts, but the nuances, \
the surprising insights, and the actionable takeaways.</p>";
    layout("About", body)
}

pub fn newsletter_confirmed_page(email: &str) -> String {
    let body = format!(
        "<h1>You're in!</h1>\n\
<p>{} is now subscribed to the Podchemy newsletter.</p>\n\
<p><a href=\"/\">Back to home</a></p>",
        esc(email)
    );
    layout("Subscribed", &body)
}

pub fn newsletter_error_page() -> String {
    let body = "<h1>That didn't look like an email address</h1>\n\
<p>Please check the address and try again.</p>\n\
<p><a href=\"/\">Back to home</a></p>";
    layout("Subscription failed", body)
}

pub fn not_found_page(title: &str, message: &str) -> String {
    let body = format!(
        "<div class=\"empty\">\n<h1>{}</h1>\n<p>{}</p>\n\
<p><a href=\"/\">Go Home</a></p>\n</div>",
        esc(title),
        esc(message)
    );
    layout(title, &body)
}

pub fn error_page() -> String {
    let body = "<div class=\"empty\">\n<h1>Something went wrong</h1>\n\
<p>An unexpected error occurred while rendering this page.</p>\n\
<p><a href=\"\">Try again</a> · <a href=\"/\">Go Home</a></p>\n</div>";
    layout("Error", body)
}
