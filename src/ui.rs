//! Saída de terminal da montagem — relatório por sala com cores.
//!
//! Usa a crate `console` para estilização. Salas acima da capacidade
//! aparecem em amarelo e salas vazias em cinza; os trabalhadores presentes
//! que ficaram sem sala são listados em vermelho no final.

use console::Style;

use crate::model::Worker;
use crate::roster::Roster;
use crate::shaping::{AssemblyReport, RoomOccupancy};

/// Renderizador do relatório de montagem.
pub struct AssemblyView {
    // Título das salas.
    bold: Style,
    // Salas dentro da capacidade.
    green: Style,
    // Salas acima da capacidade.
    yellow: Style,
    // Trabalhadores sem sala.
    red: Style,
    // Salas vazias.
    dim: Style,
}

impl Default for AssemblyView {
    fn default() -> Self {
        Self {
            bold: Style::new().bold(),
            green: Style::new().green(),
            yellow: Style::new().yellow().bold(),
            red: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }
}

fn describe(worker: &Worker) -> String {
    let mut labels: Vec<String> = Vec::new();
    if worker.is_coordinator {
        labels.push("Coordenador".to_string());
    }
    labels.extend(worker.roles.iter().map(ToString::to_string));
    if labels.is_empty() {
        worker.name.clone()
    } else {
        format!("{} ({})", worker.name, labels.join(", "))
    }
}

impl AssemblyView {
    fn room_lines(&self, entry: &RoomOccupancy<'_>) -> Vec<String> {
        let count = format!("{}/{}", entry.occupants.len(), entry.room.capacity);
        let count = if entry.occupants.is_empty() {
            self.dim.apply_to(count)
        } else if entry.over_capacity() {
            self.yellow.apply_to(format!("{count} acima da capacidade"))
        } else {
            self.green.apply_to(count)
        };
        let header = format!(
            "{} [{}] {count}",
            self.bold.apply_to(&entry.room.name),
            entry.room.room_type
        );
        std::iter::once(header)
            .chain(entry.occupants.iter().map(|worker| {
                let marker = if worker.is_coordinator { "★" } else { "•" };
                format!("  {marker} {}", describe(worker))
            }))
            .collect()
    }

    /// Monta o texto do relatório, sala por sala.
    pub fn render(&self, report: &AssemblyReport<'_>) -> String {
        let mut lines: Vec<String> = report
            .rooms
            .iter()
            .flat_map(|entry| self.room_lines(entry))
            .collect();
        if !report.unassigned.is_empty() {
            lines.push(
                self.red
                    .apply_to(format!("Sem sala ({})", report.unassigned.len()))
                    .to_string(),
            );
            lines.extend(
                report
                    .unassigned
                    .iter()
                    .map(|worker| format!("  - {}", describe(worker))),
            );
        }
        lines.into_iter().map(|line| line + "\n").collect()
    }

    pub fn print_report(&self, report: &AssemblyReport<'_>) {
        print!("{}", self.render(report));
    }

    /// Resumo de uma escala válida.
    pub fn print_summary(&self, roster: &Roster) {
        let present = roster.workers.iter().filter(|w| w.present).count();
        println!(
            "  {} {} trabalhadores ({present} presentes), {} salas",
            self.green.apply_to("✓"),
            roster.workers.len(),
            roster.rooms.len()
        );
    }
}
