use crate::stats::LanguageSummary;

const HEADERS: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// Renders the summary rows as an ASCII table with the title embedded
/// in the top border. Row order follows the input order.
pub fn render_table(rows: &[(String, LanguageSummary)], title: &str) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|(language, summary)| {
            [
                language.clone(),
                summary.vacancies_found.to_string(),
                summary.vacancies_processed.to_string(),
                summary.average_salary.to_string(),
            ]
        })
        .collect();

    // Labels are Cyrillic, so widths count chars, not bytes.
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 4);
    lines.push(titled_separator(&widths, title));
    lines.push(render_row(&widths, &HEADERS.map(String::from)));
    lines.push(separator(&widths));
    for row in &cells {
        lines.push(render_row(&widths, row));
    }
    lines.push(separator(&widths));
    lines.join("\n")
}

fn separator(widths: &[usize; 4]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

// Overlays the title onto the top border, terminaltables-style:
// "+Title----+------+".
fn titled_separator(widths: &[usize; 4], title: &str) -> String {
    let border = separator(widths);
    let tail: String = border.chars().skip(1 + title.chars().count()).collect();
    format!("+{title}{tail}")
}

fn render_row(widths: &[usize; 4], cells: &[String; 4]) -> String {
    let mut line = String::from("|");
    for (width, cell) in widths.iter().zip(cells) {
        let padding = width.saturating_sub(cell.chars().count());
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding));
        line.push_str(" |");
    }
    line
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::stats::aggregate;

    fn sample_rows() -> Vec<(String, LanguageSummary)> {
        vec![
            ("Python".to_string(), aggregate(10, &[100, 200, 300])),
            ("Go".to_string(), aggregate(4, &[])),
        ]
    }

    #[test]
    fn preserves_row_order_and_columns() {
        let table = render_table(&sample_rows(), "SuperJob Moscow");
        let lines: Vec<&str> = table.lines().collect();
        // top border, header, separator, two data rows, bottom border
        assert_eq!(lines.len(), 6);
        assert!(lines[3].contains("Python"));
        assert!(lines[4].contains("Go"));
        for row in &lines[3..5] {
            let cells: Vec<&str> = row.trim_matches('|').split('|').collect();
            assert_eq!(cells.len(), 4);
        }
    }

    #[test]
    fn title_sits_in_the_top_border() {
        let table = render_table(&sample_rows(), "HeadHunter Moscow");
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("+HeadHunter Moscow-"));
        assert_eq!(lines[0].chars().count(), lines[2].chars().count());
    }

    #[test]
    fn data_cells_match_the_summary() {
        let table = render_table(&sample_rows(), "t");
        let line = table.lines().nth(3).unwrap();
        let cells: Vec<String> = line
            .trim_matches('|')
            .split('|')
            .map(|cell| cell.trim().to_string())
            .collect();
        assert_eq!(cells, ["Python", "10", "3", "200"]);
    }

    #[test]
    fn renders_an_empty_survey() {
        let table = render_table(&[], "Empty");
        assert_eq!(table.lines().count(), 4);
    }
}
