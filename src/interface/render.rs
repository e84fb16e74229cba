use crate::models::{FoodItem, SortKey, SortState, format_amount};
use crate::tracker::NutritionSummary;

/// Width of the full macro proportion bar.
const SHARE_BAR_WIDTH: usize = 30;

/// Width of the longest calorie bar.
const CALORIE_BAR_WIDTH: usize = 40;

/// Shown instead of a table when a search matched nothing.
pub const EMPTY_RESULTS: &str = "No results found.";

/// Round to two decimals for display, hiding float noise in sums.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn cell(item: &FoodItem, key: SortKey) -> String {
    match key {
        SortKey::Name => item.name.clone(),
        SortKey::Calories => format!("{} kcal", format_amount(item.calories)),
        _ => format!(
            "{} g",
            format_amount(key.numeric_value(item).unwrap_or_default())
        ),
    }
}

/// Render the result table, with the active sort column marked ▲ or ▼.
pub fn format_results_table(results: &[FoodItem], sort: SortState) -> String {
    if results.is_empty() {
        return EMPTY_RESULTS.to_string();
    }

    let headers: Vec<String> = SortKey::ALL
        .iter()
        .map(|&k| format!("{}{}", k.label(), sort.indicator(k)))
        .collect();

    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|item| SortKey::ALL.iter().map(|&k| cell(item, k)).collect())
        .collect();

    // Column widths in characters
    let widths: Vec<usize> = (0..SortKey::ALL.len())
        .map(|col| {
            rows.iter()
                .map(|r| r[col].chars().count())
                .chain(std::iter::once(headers[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let index_width = results.len().to_string().len();

    let mut out = String::new();
    out.push_str(&format!("{:>w$}  ", "#", w = index_width));
    out.push_str(&join_padded(&headers, &widths));
    out.push('\n');

    let rule_len = index_width + 2 + widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));

    for (i, row) in rows.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{:>w$}  ", i + 1, w = index_width));
        out.push_str(&join_padded(row, &widths));
    }

    out
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!("{:<w$}", c, w = w))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

/// Render the suggestion list, numbered from 1.
pub fn format_suggestions(suggestions: &[String]) -> String {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| format!("  {}. {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the nutrition summary: macro proportions and per-item calorie bars.
pub fn format_summary(summary: &NutritionSummary) -> String {
    let mut out = String::from("=== Nutritional Summary (Logged) ===\n");

    out.push_str("\nMacros\n");
    let shares = summary.macro_shares();
    let label_width = shares.iter().map(|s| s.label.len()).max().unwrap_or(0);
    for share in &shares {
        let filled = (share.percent / 100.0 * SHARE_BAR_WIDTH as f64).round() as usize;
        out.push_str(&format!(
            "  {:<lw$}  {:>8}  {:>5.1}%  {}\n",
            share.label,
            format_amount(round2(share.grams)),
            share.percent,
            "█".repeat(filled.min(SHARE_BAR_WIDTH)),
            lw = label_width
        ));
    }

    out.push_str("\nCalories (kcal)\n");
    let max = summary.max_item_calories();
    let name_width = summary
        .per_item_calories
        .iter()
        .map(|b| b.name.chars().count())
        .max()
        .unwrap_or(0);
    for bar in &summary.per_item_calories {
        let filled = if max > 0.0 {
            (bar.calories / max * CALORIE_BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "  {:<nw$}  {:>8}  {}\n",
            bar.name,
            format_amount(bar.calories),
            "█".repeat(filled),
            nw = name_width
        ));
    }

    out.push_str(&format!(
        "\nTotal: {} kcal across {} entries",
        format_amount(round2(summary.calorie_total())),
        summary.per_item_calories.len()
    ));

    out
}

/// Print the result table.
pub fn display_results(results: &[FoodItem], sort: SortState) {
    println!();
    println!("{}", format_results_table(results, sort));
    println!();
}

/// Print the current suggestions, if any.
pub fn display_suggestions(suggestions: &[String]) {
    if suggestions.is_empty() {
        return;
    }
    println!("Suggestions:");
    println!("{}", format_suggestions(suggestions));
}

/// Print the nutrition summary.
pub fn display_summary(summary: &NutritionSummary) {
    println!();
    println!("{}", format_summary(summary));
    println!();
}

/// Print the visible error indicator for a failed request.
pub fn display_error_indicator(message: &str) {
    println!("(!) Search failed: {}", message);
}
