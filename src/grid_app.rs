use crate::appearance::Appearance;
use crate::grid_state::GridState;
use crate::options::Options;
use crate::snapshot;
use eframe::egui::{Color32, Context, Pos2, Rect, Rounding, Sense, Stroke, Vec2};
use eframe::emath::RectTransform;
use eframe::{egui, App, Frame};

const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

const DEFAULT_STATE_PATH: &str = "pixels.json";
const DEFAULT_SNAPSHOT_PATH: &str = "pixgrid.png";

pub struct DisplaySettings {
    pub round_pixels: bool,
}

pub struct GridApp {
    options: Options,
    appearance: Appearance,
    state: GridState,
    state_path: String,
    status_msg: String,
    display_settings: DisplaySettings,
}

impl GridApp {
    pub fn new(
        options: Options,
        appearance: Appearance,
        state: GridState,
        state_path: Option<String>,
    ) -> Self {
        Self {
            options,
            appearance,
            state,
            state_path: state_path.unwrap_or_else(|| DEFAULT_STATE_PATH.to_string()),
            status_msg: format!("Welcome to Pixgrid v{}", VERSION.unwrap_or("unknown")),
            display_settings: DisplaySettings {
                round_pixels: false,
            },
        }
    }
}

impl App for GridApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Render the menu bar
        egui::TopBottomPanel::top("menu bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                // Pixel state functions
                ui.menu_button("File", |ui| {
                    if ui.button("Save pixels").clicked() {
                        match self.state.save(&self.state_path) {
                            Ok(()) => {
                                log::info!("Saved pixel state to {}", self.state_path);
                                self.set_status_msg(format!(
                                    "Saved pixels to {}",
                                    self.state_path
                                ));
                            }
                            Err(e) => {
                                log::error!("Failed to save pixel state: {e}");
                                self.set_status_msg(format!(
                                    "Unable to save pixels to {}",
                                    self.state_path
                                ));
                            }
                        }
                    }
                    if ui.button("Export PNG").clicked() {
                        let image = snapshot::render(&self.appearance, &self.state);
                        match snapshot::write_png(&image, DEFAULT_SNAPSHOT_PATH) {
                            Ok(()) => {
                                log::info!("Exported grid to {DEFAULT_SNAPSHOT_PATH}");
                                self.set_status_msg(format!(
                                    "Exported grid to {DEFAULT_SNAPSHOT_PATH}"
                                ));
                            }
                            Err(e) => {
                                log::error!("Failed to export grid: {e}");
                                self.set_status_msg("Unable to export grid".to_string());
                            }
                        }
                    }
                    if ui.button("Clear pixels").clicked() {
                        self.state.clear();
                        self.set_status_msg("Cleared all pixels".to_string());
                    }
                });

                // Grid dimension settings
                ui.menu_button("Grid", |ui| {
                    ui.add(egui::Slider::new(&mut self.options.columns, 1..=128).text("Columns"));
                    ui.add(egui::Slider::new(&mut self.options.rows, 1..=128).text("Rows"));
                    ui.add(
                        egui::Slider::new(&mut self.options.pixel_size, 2.0..=64.0)
                            .text("Pixel size"),
                    );
                });

                // Display settings
                ui.menu_button("Display", |ui| {
                    ui.checkbox(&mut self.display_settings.round_pixels, "Round pixels");
                });
            });
        });

        // Keep the pixel state and the resolved pixel size in step with the sliders
        if self.state.rows() != self.options.rows || self.state.columns() != self.options.columns {
            self.state.resize(self.options.rows, self.options.columns);
        }
        self.appearance.pixel_size = self.options.pixel_size;

        // Render the pixel grid
        egui::CentralPanel::default().show(ctx, |ui| {
            // Allocate our painter
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());

            // Fill the panel with the background color
            painter.rect_filled(
                response.rect,
                Rounding::none(),
                color32(self.appearance.background),
            );

            // Get the relative position of the painter
            let to_screen = RectTransform::from_to(
                Rect::from_min_size(Pos2::ZERO, response.rect.size()),
                response.rect,
            );

            let sidelength = self.appearance.pixel_size;

            // Toggle the pixel under the cursor
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let local = to_screen.inverse().transform_pos(pos);
                    if local.x >= 0.0 && local.y >= 0.0 {
                        let x = (local.x / sidelength) as usize;
                        let y = (local.y / sidelength) as usize;
                        if x < self.state.columns() && y < self.state.rows() {
                            let on = self.state.toggle(x, y);
                            self.set_status_msg(format!(
                                "Pixel ({x}, {y}) {}",
                                if on { "on" } else { "off" }
                            ));
                        }
                    }
                }
            }

            // Setup the pixel roundness parameter
            let rounding = if self.display_settings.round_pixels {
                Rounding::same(sidelength)
            } else {
                Rounding::none()
            };

            // Setup the cell border
            let stroke = if self.appearance.border_width > 0.0 {
                Stroke::new(self.appearance.border_width, color32(self.appearance.border))
            } else {
                Stroke::NONE
            };

            // Draw the pixels
            for y in 0..self.state.rows() {
                for x in 0..self.state.columns() {
                    let fill = if self.state.is_on(x, y) {
                        self.appearance.pixel_on
                    } else {
                        self.appearance.pixel_off
                    };

                    painter.rect(
                        Rect::from_min_size(
                            to_screen.transform_pos(Pos2::new(
                                x as f32 * sidelength,
                                y as f32 * sidelength,
                            )),
                            Vec2::new(sidelength, sidelength),
                        ),
                        rounding,
                        color32(fill),
                        stroke,
                    );
                }
            }
        });

        // Render the status message at the bottom of the screen
        egui::TopBottomPanel::bottom("status_msg").show(ctx, |ui| {
            ui.label(self.status_msg.clone());
        });
    }
}

impl GridApp {
    fn set_status_msg(&mut self, msg: String) {
        self.status_msg = format!(">> {msg}");
    }
}

fn color32(rgba: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}
