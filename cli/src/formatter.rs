use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use glossa::{
    EvolutionDiagnostic, EvolutionReport, EvolutionStep, Generation, Language,
    TranscriptionResponse, TranslationResponse,
};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_overview(
        &self,
        file_count: usize,
        overview: &[(String, String, usize, usize, usize)],
    ) -> String {
        if overview.is_empty() {
            return format!(
                "No languages found ({} project file(s) scanned)\n",
                file_count
            );
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Project"),
            Cell::new("Language"),
            Cell::new("Phonemes").set_alignment(CellAlignment::Right),
            Cell::new("Entries").set_alignment(CellAlignment::Right),
            Cell::new("Generations").set_alignment(CellAlignment::Right),
        ]));

        for (project, name, phonemes, entries, generations) in overview {
            table.add_row(Row::from(vec![
                Cell::new(project),
                Cell::new(name),
                Cell::new(phonemes).set_alignment(CellAlignment::Right),
                Cell::new(entries).set_alignment(CellAlignment::Right),
                Cell::new(generations).set_alignment(CellAlignment::Right),
            ]));
        }

        format!(
            "{}\n{} language(s) in {} project file(s)\n",
            table,
            overview.len(),
            file_count
        )
    }

    pub fn format_language(
        &self,
        language: &Language,
        history: &[&Generation],
        staged: &[EvolutionStep],
    ) -> String {
        let mut output = String::new();

        output.push_str(&format!("Language: {}\n", language.name));
        output.push_str(&format!("Word order: {}\n", language.current_word_order()));

        let symbols: Vec<&str> = language.inventory.symbols().collect();
        output.push_str(&format!(
            "Inventory ({}): {}\n",
            symbols.len(),
            symbols.join(" ")
        ));

        if !language.morphology_rules().is_empty() {
            output.push_str("\nMorphology:\n");
            for rule in language.morphology_rules() {
                output.push_str(&format!("  morph {}\n", rule));
            }
        }

        output.push('\n');
        output.push_str(&self.format_dictionary(language));

        output.push_str("\nGenerations:\n");
        for generation in history {
            match &generation.report {
                Some(report) => output.push_str(&format!(
                    "  {} ({} entries changed, {} diagnostic(s))\n",
                    generation.label,
                    report.entries_changed,
                    report.diagnostics.len()
                )),
                None => output.push_str(&format!("  {}\n", generation.label)),
            }
        }

        if !staged.is_empty() {
            output.push_str("\nStaged steps:\n");
            for step in staged {
                output.push_str(&format!(
                    "  {} ({} rule(s))\n",
                    step.label,
                    step.rules.len()
                ));
            }
        }

        output
    }

    fn format_dictionary(&self, language: &Language) -> String {
        if language.dictionary.is_empty() {
            return "Dictionary is empty\n".to_string();
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Gloss"),
            Cell::new("Form"),
            Cell::new("Tags"),
        ]));

        for entry in language.dictionary.iter() {
            table.add_row(Row::from(vec![
                Cell::new(&entry.gloss),
                Cell::new(entry.form.concat()),
                Cell::new(entry.tags.to_string()),
            ]));
        }

        format!("{}\n", table)
    }

    pub fn format_reports(&self, reports: &[EvolutionReport]) -> String {
        let mut output = String::new();

        for report in reports {
            output.push_str(&format!(
                "step {}: {} entries changed\n",
                report.label, report.entries_changed
            ));
            for diagnostic in &report.diagnostics {
                let line = match diagnostic {
                    EvolutionDiagnostic::SkippedEntry { gloss, reason } => {
                        format!("  skipped '{}': {}", gloss, reason)
                    }
                    EvolutionDiagnostic::EmptyForm { gloss } => {
                        format!("  '{}' lost every symbol; review the entry", gloss)
                    }
                    EvolutionDiagnostic::PhonotacticViolation { gloss, sequence } => {
                        format!("  '{}' now contains illegal sequence '{}'", gloss, sequence)
                    }
                };
                output.push_str(&line);
                output.push('\n');
            }
        }

        output
    }

    pub fn format_translation(&self, response: &TranslationResponse) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", response.text));

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Gloss"),
            Cell::new("Form"),
            Cell::new("Tags"),
        ]));
        for token in &response.tokens {
            let form = if token.resolved {
                token.form.concat()
            } else {
                "?".to_string()
            };
            table.add_row(Row::from(vec![
                Cell::new(&token.gloss),
                Cell::new(form),
                Cell::new(token.tags.to_string()),
            ]));
        }
        output.push_str(&format!("\n{}\n", table));

        if !response.unresolved.is_empty() {
            let glosses: Vec<&str> = response
                .unresolved
                .iter()
                .map(|t| t.gloss.as_str())
                .collect();
            output.push_str(&format!("Unresolved: {}\n", glosses.join(", ")));
        }

        output
    }

    pub fn format_transcription(&self, response: &TranscriptionResponse) -> String {
        let mut output = format!("{}\n", response.ipa);
        if !response.unmapped.is_empty() {
            let chars: Vec<String> = response
                .unmapped
                .iter()
                .map(|u| format!("'{}' (pos {})", u.ch, u.position))
                .collect();
            output.push_str(&format!("Unmapped: {}\n", chars.join(", ")));
        }
        output
    }
}
