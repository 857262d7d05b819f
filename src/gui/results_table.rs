use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::core::view::{
    DisplayRecord,
    RecordBody,
};

pub fn results_table(ui: &mut egui::Ui, records: &[DisplayRecord]) {
    let row_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(25.0, |mut header| {
            header.col(|ui| {
                ui.strong("Código");
            });
            header.col(|ui| {
                ui.strong("Puntaje Mínimo");
            });
            header.col(|ui| {
                ui.strong("Puntaje Máximo");
            });
            header.col(|ui| {
                ui.strong("Columna");
            });
        })
        .body(|mut body| {
            for record in records {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.monospace(record.code.as_str());
                    });
                    match &record.body {
                        RecordBody::Scores { min, max, source_column } => {
                            row.col(|ui| {
                                ui.label(
                                    egui::RichText::new(min)
                                        .strong()
                                        .color(egui::Color32::from_rgb(0x9e, 0xce, 0x6a)),
                                );
                            });
                            row.col(|ui| {
                                ui.strong(max.as_str());
                            });
                            row.col(|ui| {
                                ui.weak(source_column.as_deref().unwrap_or(""));
                            });
                        }
                        RecordBody::Message(message) => {
                            row.col(|ui| {
                                ui.colored_label(
                                    egui::Color32::from_rgb(0xf7, 0x76, 0x8e),
                                    message.as_str(),
                                );
                            });
                            row.col(|_| {});
                            row.col(|_| {});
                        }
                    }
                });
            }
        });
}
