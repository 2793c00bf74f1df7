// Native viewer for analysis results.
// Shows one view at a time; closing the window advances to the next view
// until none are left, then the window really closes.

use eframe::egui;

use crate::soil_analysis::{GrayF32Image, SoilAnalysis};

pub(crate) struct View {
    pub title: String,
    pub image: egui::ColorImage,
}

impl View {
    pub fn color(title: String, image: &image::RgbImage) -> Self {
        let size = [image.width() as usize, image.height() as usize];
        Self {
            title,
            image: egui::ColorImage::from_rgb(size, image.as_raw()),
        }
    }

    pub fn gray(title: String, image: &GrayF32Image) -> Self {
        let size = [image.width() as usize, image.height() as usize];
        let levels: Vec<u8> = image
            .as_raw()
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect();
        Self {
            title,
            image: egui::ColorImage::from_gray(size, &levels),
        }
    }
}

pub(crate) fn views_for(analysis: &SoilAnalysis) -> Vec<View> {
    vec![
        View::color(
            format!("Predicted Soil Condition: {}", analysis.label()),
            &analysis.image.color,
        ),
        View::gray("Grayscale Image".to_string(), &analysis.image.gray),
    ]
}

struct SoilViewerApp {
    views: Vec<View>,
    current: usize,
    texture: Option<egui::TextureHandle>,
}

impl SoilViewerApp {
    fn advance(&mut self, ctx: &egui::Context) -> bool {
        if self.current + 1 >= self.views.len() {
            return false;
        }
        self.current += 1;
        self.texture = None;
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(
            self.views[self.current].title.clone(),
        ));
        true
    }
}

impl eframe::App for SoilViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) && self.advance(ctx) {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }

        let view = &self.views[self.current];
        let current = self.current;
        let texture = self.texture.get_or_insert_with(|| {
            ctx.load_texture(
                format!("soil-view-{}", current),
                view.image.clone(),
                egui::TextureOptions::LINEAR,
            )
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&view.title);
                ui.add_space(8.0);
                ui.add(
                    egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                        .shrink_to_fit(),
                );
            });
        });
    }
}

/// Open the viewer and block until every view has been dismissed
pub fn show(analysis: &SoilAnalysis) -> anyhow::Result<()> {
    let views = views_for(analysis);
    let title = views[0].title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([560.0, 600.0])
            .with_min_inner_size([300.0, 320.0]),
        ..Default::default()
    };

    let app = SoilViewerApp {
        views,
        current: 0,
        texture: None,
    };

    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Image viewer failed: {}", e))
}
