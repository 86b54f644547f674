//! Output formatting for the CLI.

use console::style;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!(r#"{{"error": "{}"}}"#, msg.replace('"', "\\\""));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Badges shown next to a product row (sale and best-seller markers).
pub fn product_badges(product: &techstore_core::catalog::Product) -> String {
    let mut badges = Vec::new();
    if product.is_best_seller {
        badges.push(style("BEST SELLER").yellow().to_string());
    }
    if let Some(pct) = product.discount_percent {
        badges.push(style(format!("-{}%", pct)).green().to_string());
    }
    badges.join(" ")
}

/// Render a rating as stars plus the numeric value (e.g., "★★★★☆ 4.4").
pub fn rating_stars(rating: f64) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    let mut stars = String::new();
    for i in 0..5 {
        stars.push(if i < full { '★' } else { '☆' });
    }
    format!("{} {:.1}", stars, rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_stars() {
        assert_eq!(rating_stars(4.4), "★★★★☆ 4.4");
        assert_eq!(rating_stars(5.0), "★★★★★ 5.0");
        assert_eq!(rating_stars(0.0), "☆☆☆☆☆ 0.0");
    }
}
