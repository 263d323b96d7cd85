use super::progress;
use super::{FeedbackUploader, Screen};
use crate::upload::selection::ACCEPTED_LABEL;
use crate::upload::{EntryStatus, UploadEntry};
use crate::utils::file_size::FileSizeUtils;
use eframe::egui::{self, Align, Color32, RichText};

const ACCENT: Color32 = Color32::from_rgb(219, 39, 119);
const FEATURES: [(&str, &str, &str); 3] = [
    (
        "💬",
        "Theme Extraction",
        "AI identifies recurring themes and patterns in your feedback",
    ),
    ("📈", "Sentiment Analysis", "Understand customer emotions at a glance"),
    (
        "💡",
        "Actionable Insights",
        "Get prioritized recommendations to improve",
    ),
];

impl FeedbackUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let footer_height = 40.0;
            let content_height = total_height - footer_height;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| match self.state.screen {
                    Screen::Home => self.render_home(ui),
                    Screen::Upload => self.render_upload(ui),
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(10.0);
                self.render_footer(ui);
            });
        });
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("✨ AI-Powered Feedback Analysis").color(ACCENT));
            ui.add_space(10.0);
            ui.heading(RichText::new("Transform Customer Feedback").size(32.0));
            ui.heading(RichText::new("Into Actionable Insights").size(32.0).strong());
            ui.add_space(10.0);
            ui.label(
                RichText::new(
                    "Upload your customer feedback and let AI extract themes, analyze sentiment, \
                     and deliver prioritized recommendations in seconds.",
                )
                .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
            ui.add_space(20.0);

            let button = egui::Button::new("Try Now ➡").min_size(egui::vec2(200.0, 40.0));
            if ui.add(button).clicked() {
                self.open_screen(Screen::Upload);
            }
        });

        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.heading("How It Works");
            ui.label("Three simple steps to unlock the value hidden in your customer feedback");
        });
        ui.add_space(10.0);

        ui.columns(FEATURES.len(), |columns| {
            for (column, (icon, title, description)) in columns.iter_mut().zip(FEATURES) {
                column.group(|ui| {
                    ui.label(RichText::new(icon).size(24.0));
                    ui.label(RichText::new(title).strong());
                    ui.label(description);
                });
            }
        });
    }

    fn render_upload(&mut self, ui: &mut egui::Ui) {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.heading("Turn feedback into actionable insights");
            ui.add_space(5.0);
            ui.label(
                RichText::new(
                    "Upload your customer feedback files and let AI extract themes, \
                     analyze sentiment, and prioritize what to fix first.",
                )
                .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
        });

        ui.add_space(20.0);

        ui.group(|ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("☁").size(28.0));
                ui.horizontal(|ui| {
                    if ui.button("📄 Select Files").clicked() {
                        self.pick_files();
                    }
                    if ui.button("📁 Select Folder").clicked() {
                        self.pick_folder();
                    }
                });
                ui.label(
                    RichText::new(format!("{} (or drop files here)", ACCEPTED_LABEL))
                        .small()
                        .color(Color32::GRAY),
                );
            });
        });

        ui.add_space(10.0);

        ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
            if ui.button("🗑 Clear").clicked() {
                self.clear_files();
            }

            let tracker = &self.state.tracker;
            let can_upload = !tracker.entries().is_empty() && !tracker.is_uploading();
            ui.add_enabled_ui(can_upload, |ui| {
                if ui.button("📤 Upload").clicked() {
                    self.start_upload();
                }
            });

            if self.state.tracker.is_uploading() {
                ui.spinner();
            }
        });

        ui.add_space(10.0);

        if !self.state.tracker.entries().is_empty() {
            ui.label(self.state.tracker.status_text());
            ui.add_space(5.0);
            egui::ScrollArea::vertical()
                .id_source("file_list")
                .max_height(360.0)
                .show(ui, |ui| {
                    for entry in self.state.tracker.entries() {
                        render_entry(ui, entry);
                        ui.add_space(4.0);
                    }
                });
        }
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("© 2026 Feedback Theme Extractor. All rights reserved.")
                .small()
                .color(Color32::GRAY),
        );

        if let Some(error) = self.state.tracker.last_error() {
            ui.add_space(5.0);
            ui.colored_label(Color32::from_rgb(220, 50, 50), error);
        }
    }
}

fn render_entry(ui: &mut egui::Ui, entry: &UploadEntry) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("📄").size(28.0));
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(status_marker(&entry.status));
                    ui.label(entry.file.name.as_str());
                });
                ui.label(
                    RichText::new(FileSizeUtils::format_size(entry.file.size))
                        .small()
                        .color(Color32::GRAY),
                );
                progress::show(ui, entry.progress);
                if let EntryStatus::Failed(reason) = &entry.status {
                    ui.colored_label(Color32::from_rgb(220, 50, 50), reason.as_str());
                }
            });
        });
    });
}

fn status_marker(status: &EntryStatus) -> &'static str {
    match status {
        EntryStatus::Queued => "⏳",
        EntryStatus::Uploading => "📤",
        EntryStatus::Uploaded => "✅",
        EntryStatus::Failed(_) => "❌",
    }
}
