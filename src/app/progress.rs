use eframe::egui::{self, Color32};

pub const BAR_COLOR: Color32 = Color32::from_rgb(59, 130, 246);

pub fn progress_fraction(percent: u8) -> f32 {
    f32::from(percent.min(100)) / 100.0
}

pub fn progress_label(percent: u8) -> String {
    format!("{}%", percent.min(100))
}

/// Bar filled to `percent` with the number beside it.
pub fn show(ui: &mut egui::Ui, percent: u8) {
    ui.horizontal(|ui| {
        let label_width = 40.0;
        let bar = egui::ProgressBar::new(progress_fraction(percent))
            .desired_width((ui.available_width() - label_width).max(0.0))
            .fill(BAR_COLOR)
            .animate(false);
        ui.add(bar);
        ui.label(progress_label(percent));
    });
}
