// Tue Feb 10 2026 - Alex

use colored::*;

pub struct Banner {
    title: String,
    subtitle: Option<String>,
    version: Option<String>,
    width: usize,
}

impl Banner {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: None,
            version: None,
            width: 60,
        }
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn render(&self) {
        let border = "=".repeat(self.width);
        println!("{}", border.cyan());
        println!("{}", self.center(&self.title).cyan().bold());
        if let Some(subtitle) = &self.subtitle {
            println!("{}", self.center(subtitle).white());
        }
        if let Some(version) = &self.version {
            println!("{}", self.center(&format!("v{}", version)).white().dimmed());
        }
        println!("{}", border.cyan());
        println!();
    }

    fn center(&self, text: &str) -> String {
        if text.len() >= self.width {
            return text.to_string();
        }
        let pad = (self.width - text.len()) / 2;
        format!("{}{}", " ".repeat(pad), text)
    }

    pub fn print() {
        Banner::new("Addon Header Generator")
            .with_subtitle("Declaration enrichment and addon script sync")
            .with_version(env!("CARGO_PKG_VERSION"))
            .render();
    }
}
