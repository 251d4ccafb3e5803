//! Output formatting for CLI

use crate::{search::SearchResult, tictactoe::BoardState};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render the board as a grid with row and column labels
pub fn render_board(state: &BoardState) -> String {
    let mut out = String::from("    0   1   2\n");
    for (row, cells) in state.cells.iter().enumerate() {
        let marks: Vec<String> = cells.iter().map(|cell| cell.to_char().to_string()).collect();
        out.push_str(&format!("{row}   {}\n", marks.join(" | ")));
        if row < 2 {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}

pub fn print_board(state: &BoardState) {
    print!("{}", render_board(state));
}

/// Print the fields of a search result
pub fn print_search_result(result: &SearchResult) {
    let best = result
        .best_move
        .map_or_else(|| "none (terminal)".to_string(), |mv| mv.to_string());
    print_kv("Best move", &best);
    print_kv("Score", &result.score.to_string());
    print_kv("Depth", &result.depth.to_string());
    print_kv("Nodes", &result.stats.nodes.to_string());
    print_kv("Cutoffs", &result.stats.cutoffs.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board() {
        let state = BoardState::from_string("XO..X....").unwrap();
        let rendered = render_board(&state);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "0   X | O | .");
        assert_eq!(lines[3], "1   . | X | .");
        assert_eq!(lines[5], "2   . | . | .");
    }
}
