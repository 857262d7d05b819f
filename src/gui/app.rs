use eframe::egui;
use tracing::{
    debug,
    warn,
};

use super::{
    results_table::results_table,
    toasts::Toasts,
};
use crate::core::{
    tasks::TaskManager,
    view::display_records,
    Session,
    Year,
};

enum Action {
    Year(Year),
    University(String),
    Career(String),
    Submit,
}

pub struct ConsultaApp {
    session: Session,
    task_manager: TaskManager,
    toasts: Toasts,
    years: Vec<Year>,
}

impl ConsultaApp {
    pub fn new(cc: &eframe::CreationContext<'_>, mut task_manager: TaskManager) -> Self {
        let ctx = cc.egui_ctx.clone();
        task_manager.set_waker(move || ctx.request_repaint());

        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        Self {
            session: Session::new(),
            task_manager,
            toasts: Toasts::new(),
            years: Year::all_descending(),
        }
    }

    fn handle(&mut self, action: Action) {
        match action {
            Action::Year(year) => {
                if let Some(ticket) = self.session.select_year(year) {
                    self.task_manager.fetch_options(ticket);
                }
            }
            Action::University(university) => {
                if let Err(e) = self.session.select_university(&university) {
                    warn!(error = %e, "university selection ignored");
                }
            }
            Action::Career(career) => {
                if let Err(e) = self.session.select_career(&career) {
                    warn!(error = %e, "career selection ignored");
                }
            }
            Action::Submit => match self.session.begin_submit() {
                Ok(ticket) => self.task_manager.submit(ticket),
                Err(e) => debug!(error = %e, "submit not sent"),
            },
        }
    }

    fn selection_form(&self, ui: &mut egui::Ui) -> Option<Action> {
        let mut action = None;
        let selection = self.session.selection();

        ui.label("Año de Admisión");
        let year_text =
            selection.year.map(|y| y.to_string()).unwrap_or_else(|| "Seleccione año...".into());
        egui::ComboBox::from_id_salt("year_combo")
            .width(ui.available_width())
            .selected_text(year_text)
            .show_ui(ui, |ui| {
                for year in &self.years {
                    let selected = selection.year == Some(*year);
                    if ui.selectable_label(selected, year.to_string()).clicked() {
                        action = Some(Action::Year(*year));
                    }
                }
            });

        ui.add_space(8.0);
        ui.label("Universidad");
        let university_text = if self.session.is_loading_options() {
            "Cargando...".to_string()
        } else {
            selection.university.clone().unwrap_or_else(|| "Seleccione universidad...".into())
        };
        ui.add_enabled_ui(self.session.university_enabled(), |ui| {
            egui::ComboBox::from_id_salt("university_combo")
                .width(ui.available_width())
                .selected_text(university_text)
                .show_ui(ui, |ui| {
                    for university in self.session.universities() {
                        let selected =
                            selection.university.as_deref() == Some(university.as_str());
                        if ui.selectable_label(selected, university.as_str()).clicked() {
                            action = Some(Action::University(university.clone()));
                        }
                    }
                });
        });

        ui.add_space(8.0);
        ui.label("Carrera");
        let career_text =
            selection.career.clone().unwrap_or_else(|| "Seleccione carrera...".into());
        ui.add_enabled_ui(self.session.career_enabled(), |ui| {
            egui::ComboBox::from_id_salt("career_combo")
                .width(ui.available_width())
                .selected_text(career_text)
                .show_ui(ui, |ui| {
                    for career in self.session.careers() {
                        let selected = selection.career.as_deref() == Some(career.as_str());
                        if ui.selectable_label(selected, career.as_str()).clicked() {
                            action = Some(Action::Career(career.clone()));
                        }
                    }
                });
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            let label =
                if self.session.is_submitting() { "Buscando..." } else { "Consultar Puntajes" };
            if ui.add_enabled(self.session.can_submit(), egui::Button::new(label)).clicked() {
                action = Some(Action::Submit);
            }
            if self.session.is_submitting() || self.session.is_loading_options() {
                ui.add(egui::Spinner::new());
            }
        });

        action
    }
}

impl eframe::App for ConsultaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            result.apply_to(&mut self.session);
        }
        self.session.flush_notices(&mut self.toasts);

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Consulta Puntajes");
                });
                ui.add_space(12.0);

                let action = self.selection_form(ui);

                if let Some(results) = self.session.results() {
                    ui.add_space(16.0);
                    ui.separator();
                    ui.strong("Resultados");
                    results_table(ui, &display_records(results));
                }

                action
            })
            .inner;

        if let Some(action) = action {
            self.handle(action);
            ctx.request_repaint();
        }

        self.toasts.show(ctx);
    }
}
