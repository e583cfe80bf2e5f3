//! Application shell: render loop, viewport binding, page effects

use backdrop_canvas::{paint_frame, Canvas, FrameStyle};
use backdrop_page::{ParallaxRack, RevealSet, Viewport};
use backdrop_sim::{Field, SimParams};
use egui::{Align2, Color32, CornerRadius, FontId, Rect, Sense, TextureOptions};

/// Section headings shown as parallax layers, each with one reveal card.
const SECTIONS: [(&str, &str); 4] = [
    (
        "Fields",
        "Sixty particles drift across the backdrop, wrapped toroidally at \
         the edges so the field never empties out.",
    ),
    (
        "Bonds",
        "Nearby particles are occasionally linked by a decaying bond that \
         pulls both ends together with a softened inverse-square impulse.",
    ),
    (
        "Trails",
        "Each frame lays a translucent wash over the last one, so motion \
         leaves a fading trail instead of a hard edge.",
    ),
    (
        "Depth",
        "Headings slide at depth-scaled speeds while you scroll, and these \
         cards reveal themselves once a fifth of them is on screen.",
    ),
];

pub struct BackdropApp {
    field: Field,
    canvas: Canvas,
    style: FrameStyle,
    viewport: Viewport,
    parallax: ParallaxRack,
    reveals: RevealSet,
    texture: Option<egui::TextureHandle>,
    /// Scroll offset observed last frame; feeds this frame's parallax.
    scroll_y: f32,
}

impl BackdropApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let (width, height) = (1280u32, 800u32);
        let style = FrameStyle::default();
        Self {
            field: Field::new(width as f32, height as f32, SimParams::default()),
            canvas: Canvas::new(width, height, style.background),
            style,
            viewport: Viewport::new(width, height),
            parallax: ParallaxRack::new(SECTIONS.len()),
            reveals: RevealSet::new(SECTIONS.len()),
            texture: None,
            scroll_y: 0.0,
        }
    }

    /// Upload the painted canvas and stretch it across the whole window.
    fn show_backdrop(&mut self, ctx: &egui::Context, screen: Rect) {
        let size = [self.canvas.width() as usize, self.canvas.height() as usize];
        let image = egui::ColorImage::from_rgba_unmultiplied(size, self.canvas.as_rgba_bytes());
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture("backdrop-canvas", image, TextureOptions::LINEAR))
            }
        }
        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            ctx.layer_painter(egui::LayerId::background())
                .image(texture.id(), screen, uv, Color32::WHITE);
        }
    }

    /// Scrollable content pane: parallax headings and reveal cards.
    fn show_content(&mut self, ui: &mut egui::Ui) {
        let screen = ui.clip_rect();
        let output = egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(screen.height() * 0.6);

                for (i, (title, blurb)) in SECTIONS.iter().enumerate() {
                    self.show_section(ui, screen, i, title, blurb);
                    ui.add_space(screen.height() * 0.5);
                }
            });
        // One frame of latency: the offset read here positions next
        // frame's headings, which is invisible at refresh rate.
        self.scroll_y = output.state.offset.y;
    }

    fn show_section(&mut self, ui: &mut egui::Ui, screen: Rect, index: usize, title: &str, blurb: &str) {
        let width = ui.available_width();

        // Heading, shifted by its depth-scaled parallax offset.
        let (heading_rect, _) =
            ui.allocate_exact_size(egui::vec2(width, 48.0), Sense::hover());
        let dy = self.parallax.offset(index, self.scroll_y);
        ui.painter().text(
            heading_rect.left_center() + egui::vec2(32.0, dy),
            Align2::LEFT_CENTER,
            title,
            FontId::proportional(32.0),
            Color32::from_rgb(0x64, 0xff, 0xda),
        );

        // Card that reveals once a fifth of it is visible, then stays.
        let (card_rect, _) =
            ui.allocate_exact_size(egui::vec2(width.min(560.0), 96.0), Sense::hover());
        let visible = card_rect.intersect(screen).height().max(0.0);
        let ratio = visible / card_rect.height();
        let revealed = self.reveals.observe(index, ratio);

        let t = ui
            .ctx()
            .animate_bool_with_time(ui.id().with(("reveal", index)), revealed, 0.6);
        if t <= 0.0 {
            return;
        }
        let rect = card_rect.translate(egui::vec2(32.0, (1.0 - t) * 24.0));
        ui.painter().rect_filled(
            rect,
            CornerRadius::same(8),
            Color32::from_rgb(0x16, 0x1a, 0x2e).gamma_multiply(0.85 * t),
        );
        ui.painter().text(
            rect.shrink(16.0).left_top(),
            Align2::LEFT_TOP,
            blurb,
            FontId::proportional(15.0),
            Color32::from_gray(0xdd).gamma_multiply(t),
        );
    }
}

impl eframe::App for BackdropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = ctx.screen_rect();
        let (width, height) = (screen.width() as u32, screen.height() as u32);
        if self.viewport.set(width, height) {
            self.canvas.resize(self.viewport.width(), self.viewport.height());
            self.field
                .set_bounds(self.viewport.width() as f32, self.viewport.height() as f32);
        }

        self.field.step();
        let time = ctx.input(|i| i.time) as f32;
        paint_frame(&mut self.canvas, &self.field, time, &self.style);
        self.show_backdrop(ctx, screen);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.show_content(ui));

        // Keep the loop running at display refresh, like a frame callback.
        ctx.request_repaint();
    }
}
