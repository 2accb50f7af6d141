use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use loto7_core::models::{Draw, NumberStats, Suggestion, Temperature};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn temperature_color(temperature: Temperature) -> Color {
    match temperature {
        Temperature::Hot => Color::Green,
        Temperature::Cold => Color::Red,
        Temperature::Neutral => Color::White,
    }
}

/// `first_position` : position (1-based) du premier tirage affiché dans l'historique.
pub fn display_draws(draws: &[Draw], first_position: usize) {
    if draws.is_empty() {
        println!("Aucun tirage à afficher.");
        return;
    }

    let mut table = new_table(vec!["#", "Numéros"]);
    for (i, draw) in draws.iter().enumerate() {
        let numbers_str = draw
            .sorted()
            .iter()
            .map(|n| format!("{:2}", n))
            .collect::<Vec<_>>()
            .join(" - ");
        table.add_row(vec![(first_position + i).to_string(), numbers_str]);
    }
    println!("{table}");
}

pub fn display_top_scorers(top: &[&NumberStats], window: usize) {
    println!("\n🔍 Meilleurs scores sur {} tirages (pour référence)\n", window);

    let mut table = new_table(vec!["Numéro", "Score", "Fréquence", "Cycle", "Tag"]);
    for stat in top {
        table.add_row(vec![
            Cell::new(format!("{:2}", stat.number)),
            Cell::new(format!("{:.1}", stat.composite_score)),
            Cell::new(stat.frequency),
            Cell::new(stat.cycle_gap),
            Cell::new(stat.temperature.to_string()).fg(temperature_color(stat.temperature)),
        ]);
    }
    println!("{table}");
}

pub fn display_stats(stats: &[NumberStats], window: usize) {
    println!("\n📊 Statistiques sur {} tirages\n", window);

    let mut table = new_table(vec![
        "Numéro",
        "Fréquence",
        "Dernière sortie",
        "Cycle",
        "Cycle moyen",
        "Écart moyenne",
        "Tag",
        "Score",
    ]);

    let mut sorted: Vec<&NumberStats> = stats.iter().collect();
    sorted.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    for stat in sorted {
        let last_seen = stat
            .last_seen
            .map(|p| p.to_string())
            .unwrap_or_else(|| "—".to_string());
        table.add_row(vec![
            Cell::new(format!("{:2}", stat.number)),
            Cell::new(stat.frequency),
            Cell::new(last_seen),
            Cell::new(stat.cycle_gap),
            Cell::new(format!("{:.2}", stat.mean_cycle_gap)),
            Cell::new(format!("{:+.2}", stat.hot_cold_delta)),
            Cell::new(stat.temperature.to_string()).fg(temperature_color(stat.temperature)),
            Cell::new(format!("{:.1}", stat.composite_score)),
        ]);
    }
    println!("{table}");
}

pub fn display_suggestions(suggestions: &[Suggestion]) {
    println!("\n🎯 Grilles suggérées ({})\n", suggestions.len());

    let mut table = new_table(vec!["#", "Numéros", "Score moyen"]);
    for (i, sug) in suggestions.iter().enumerate() {
        table.add_row(vec![
            format!("{}", i + 1),
            sug.to_string(),
            format!("{:.2}", sug.score),
        ]);
    }
    println!("{table}");
}

pub fn display_copy_block(block: &str) {
    println!("\n📋 À copier\n");
    println!("{block}");
}
