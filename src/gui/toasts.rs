use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::core::notice::{
    Notice,
    Notifier,
    Severity,
};

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

pub struct Toasts {
    active: Vec<(Notice, Instant)>,
}

impl Toasts {
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.active.retain(|(_, shown)| now.duration_since(*shown) < TOAST_LIFETIME);

        if self.active.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -12.0))
            .show(ctx, |ui| {
                for (notice, _) in &self.active {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_max_width(320.0);
                        let color = match notice.severity {
                            Severity::Error => egui::Color32::from_rgb(0xf7, 0x76, 0x8e),
                            Severity::Info => egui::Color32::from_rgb(0x7d, 0xcf, 0xff),
                        };
                        ui.label(egui::RichText::new(&notice.title).strong().color(color));
                        ui.label(&notice.description);
                    });
                    ui.add_space(6.0);
                }
            });

        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, notice: Notice) {
        self.active.push((notice, Instant::now()));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
