use colored::Colorize;

use super::models::{MenusResponse, WarResponse};

pub fn render_ranking(response: &WarResponse) -> String {
    let mut out = String::new();

    if !response.available {
        out.push_str(&format!("{}\n", "Not enough rating data to compute the ranking.".yellow()));
    }
    if response.items.is_empty() {
        return out;
    }

    out.push_str(&format!(
        "{}\n",
        format!(
            "{:>4}  {:<32} {:>8}  {:<24} {:<24}",
            "Rank", "Player", "Average", "Domestic", "International"
        )
        .bold()
    ));

    for item in &response.items {
        out.push_str(&format!(
            "{:>4}  {:<32} {:>8.1}  {:<24} {:<24}\n",
            item.rank,
            item.name,
            item.average,
            join_ratings(item.domestic.values()),
            join_ratings(item.international.values()),
        ));
    }

    out
}

pub fn render_lists(response: &WarResponse) -> String {
    let mut out = String::new();

    match (response.year, &response.lists) {
        (Some(year), Some(lists)) => {
            out.push_str(&format!("{} {}\n", "Latest common year:".bold(), year));
            for (source, periods) in lists {
                let dates: Vec<String> = periods.iter().map(|p| p.to_string()).collect();
                out.push_str(&format!("  {:<14} {}\n", source.as_str(), dates.join(", ")));
            }
        }
        _ => out.push_str(&format!("{}\n", "No common rating year between sources".yellow())),
    }

    let status = if response.available { "available".green() } else { "unavailable".red() };
    out.push_str(&format!("{} {}\n", "Status:".bold(), status));
    out
}

pub fn render_menus(menus: &MenusResponse) -> String {
    let mut out = format!("{}\n", "Methods".bold());
    for item in &menus.methods {
        out.push_str(&format!("  {:<8} {}\n", item.key, item.label));
    }

    out.push_str(&format!("{}\n", "Genders".bold()));
    for item in &menus.genders {
        let key = if item.key.is_empty() { "(all)" } else { item.key.as_str() };
        out.push_str(&format!("  {:<8} {}\n", key, item.label));
    }
    out
}

fn join_ratings<'a>(ratings: impl Iterator<Item = &'a i32>) -> String {
    ratings.map(|r| r.to_string()).collect::<Vec<_>>().join(" ")
}
