mod app_state;
mod board;
mod button;
mod config;
mod constants;
mod drag;
mod edit_dialog;
mod error;
mod export;
mod flower;
mod fonts;
mod image_loader;
mod layout;
mod modal;
mod paths;

use app_state::{AppState, Notice};
use button::FlowerButton;
use config::BoardConfig;
use constants::*;
use eframe::egui::{
    self, vec2, Align, Align2, Color32, CursorIcon, FontId, Layout, Order, PointerButton, Rect,
    RichText, Sense, Shape, Stroke, Vec2,
};
use image_loader::BackgroundLoad;
use layout::{cover_uv, LayoutAdjuster};
use paths::AppPaths;
use std::path::PathBuf;
use std::time::Duration;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let paths = AppPaths::from_project_dirs();
    if let Some(paths) = &paths {
        if let Err(err) = paths.ensure_dirs_exist() {
            log::warn!("Failed to create application directories: {err}");
        }
    }

    let config = match &paths {
        Some(paths) => {
            let mut config = BoardConfig::load_or_default(&paths.board_file());
            config.resolve_paths(&paths.config);
            config
        }
        None => {
            log::warn!("No home directory; using the built-in board");
            BoardConfig::default()
        }
    };
    let export_dir = paths
        .as_ref()
        .map(AppPaths::export_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT])
            .with_min_inner_size([MIN_WINDOW_SIZE, MIN_WINDOW_SIZE]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            fonts::install_fonts(&cc.egui_ctx, config.font.as_deref());
            Ok(Box::new(FlowerBoardApp::new(&config, export_dir)))
        }),
    )
}

struct FlowerBoardApp {
    state: AppState,
    layout: LayoutAdjuster,
    background_load: Option<BackgroundLoad>,
    background: Option<egui::TextureHandle>,
    export_dir: PathBuf,
}

impl FlowerBoardApp {
    fn new(config: &BoardConfig, export_dir: PathBuf) -> Self {
        let state = AppState::from_config(config);
        log::info!(
            "Board has {} buttons and {} flowers",
            state.board().len(),
            state.registry().len()
        );
        Self {
            state,
            layout: LayoutAdjuster::new(),
            background_load: Some(BackgroundLoad::spawn(config.background.clone())),
            background: None,
            export_dir,
        }
    }

    fn poll_background(&mut self, ctx: &egui::Context) {
        let Some(load) = &self.background_load else {
            return;
        };
        match load.poll() {
            Some(Ok(loaded)) => {
                log::info!(
                    "Background {} is {}x{}",
                    load.path().display(),
                    loaded.original_size.x,
                    loaded.original_size.y
                );
                self.background = Some(ctx.load_texture(
                    "board-background",
                    loaded.image,
                    egui::TextureOptions::LINEAR,
                ));
                self.layout.on_image_loaded(loaded.original_size);
                self.background_load = None;
                ctx.request_repaint();
            }
            Some(Err(err)) => {
                log::warn!("{err}; keeping the current board size");
                self.background_load = None;
            }
            None => ctx.request_repaint_after(Duration::from_millis(50)),
        }
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        let mut toggle_clicked = false;
        let mut export_clicked = false;

        egui::Area::new(egui::Id::new("board-toolbar"))
            .anchor(Align2::RIGHT_TOP, vec2(-16.0, 16.0))
            .order(Order::Foreground)
            .show(ctx, |ui| {
                ui.with_layout(Layout::top_down(Align::Max), |ui| {
                    let mut toggle = egui::Button::new(RichText::new(self.state.toggle_label()).size(16.0))
                        .min_size(vec2(120.0, 32.0));
                    if self.state.edit_mode() {
                        toggle = toggle.fill(COLOR_TOGGLE_ACTIVE);
                    }
                    if ui.add(toggle).clicked() {
                        toggle_clicked = true;
                    }

                    if self.state.export_visible() {
                        let export = egui::Button::new(RichText::new(EXPORT_LABEL).size(16.0))
                            .min_size(vec2(120.0, 32.0));
                        if ui.add(export).clicked() {
                            export_clicked = true;
                        }
                    }
                });
            });

        if toggle_clicked {
            self.state.toggle_edit_mode();
        }
        if export_clicked {
            self.state.export(&self.export_dir);
        }
    }

    fn show_board(&mut self, ui: &mut egui::Ui) {
        let viewport = ui.available_size();
        if self.layout.needs_adjust(viewport) {
            self.layout.adjust(viewport);
        }
        let height = self
            .layout
            .container_size()
            .map(|size| size.effective_height())
            .unwrap_or(viewport.y);

        egui::ScrollArea::vertical()
            .id_salt("board")
            .auto_shrink([false, false])
            .drag_to_scroll(!self.state.edit_mode())
            .show(ui, |ui| {
                let (container, _) = ui.allocate_exact_size(vec2(viewport.x, height), Sense::hover());
                self.paint_background(ui, container);
                self.show_buttons(ui, container);
            });

        if self.state.info().is_visible() || self.state.edit_dialog().is_open() {
            let screen = ui.ctx().screen_rect();
            ui.painter().rect_filled(screen, 0.0, COLOR_BACKDROP);
            let backdrop = ui.interact(screen, egui::Id::new("modal-backdrop"), Sense::click());
            if backdrop.clicked() {
                self.state.hide_info();
                self.state.close_edit();
            }
        }
    }

    fn paint_background(&self, ui: &egui::Ui, container: Rect) {
        let painter = ui.painter_at(container);
        match (&self.background, self.layout.image_size()) {
            (Some(texture), Some(image_size)) => {
                let uv = cover_uv(container.size(), image_size);
                painter.image(texture.id(), container, uv, Color32::WHITE);
            }
            _ => {
                painter.rect_filled(container, 0.0, COLOR_BOARD_FALLBACK);
            }
        }
    }

    fn show_buttons(&mut self, ui: &mut egui::Ui, container: Rect) {
        let edit_mode = self.state.edit_mode();
        let ids: Vec<String> = self.state.board().flower_ids().map(str::to_owned).collect();
        let mut clicked = None;

        for flower_id in ids {
            let Some(button) = self.state.board().get(&flower_id) else {
                continue;
            };
            let rect = button_rect(ui, button, container);
            let response = ui.interact(
                rect,
                ui.id().with(("flower-button", &flower_id)),
                Sense::click_and_drag(),
            );

            if edit_mode && response.drag_started_by(PointerButton::Primary) {
                let grab = ui
                    .input(|i| i.pointer.press_origin())
                    .or(response.interact_pointer_pos());
                if let Some(pointer) = grab {
                    self.state.begin_drag(&flower_id, pointer, rect.min);
                }
            }
            if self.state.drag().dragged_id() == Some(flower_id.as_str())
                && response.dragged_by(PointerButton::Primary)
            {
                if let Some(pointer) = response.interact_pointer_pos() {
                    self.state.drag_to(pointer, container);
                }
            }
            if response.drag_stopped() {
                self.state.end_drag();
            }
            if response.clicked() {
                clicked = Some(flower_id.clone());
            }

            let cursor = if !edit_mode {
                CursorIcon::PointingHand
            } else if self.state.drag().is_dragging() {
                CursorIcon::Grabbing
            } else {
                CursorIcon::Grab
            };
            let hovered = response.on_hover_cursor(cursor).hovered();

            if let Some(button) = self.state.board().get(&flower_id) {
                let rect = button_rect(ui, button, container);
                paint_button(ui, button, rect, hovered, edit_mode);
            }
        }

        if self.state.drag().is_dragging() {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        }
        if let Some(flower_id) = clicked {
            let route = self.state.click_button(&flower_id);
            log::debug!("Click on {flower_id} routed to {route:?}");
        }
    }

    fn show_info_modal(&mut self, ctx: &egui::Context) {
        if !self.state.info().is_visible() {
            return;
        }
        let mut close = false;

        egui::Window::new("flower-info")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .default_width(DIALOG_WIDTH)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.state.info().name()).size(MODAL_TITLE_SIZE).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button(RichText::new("×").size(20.0)).clicked() {
                            close = true;
                        }
                    });
                });
                ui.separator();
                ui.label(self.state.info().description());
            });

        if close {
            self.state.hide_info();
        }
    }

    fn show_edit_dialog(&mut self, ctx: &egui::Context) {
        let Some(flower_id) = self.state.edit_dialog().flower_id().map(str::to_owned) else {
            return;
        };
        let mut save = false;
        let mut close = false;

        egui::Window::new(format!("Edit {flower_id}"))
            .id(egui::Id::new("edit-flower"))
            .collapsible(false)
            .resizable(false)
            .default_width(DIALOG_WIDTH)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                if let Some(form) = self.state.edit_form_mut() {
                    ui.label("Flower name");
                    ui.text_edit_singleline(&mut form.name);
                    ui.add_space(4.0);
                    ui.label("Button label");
                    ui.text_edit_singleline(&mut form.display_name);
                    ui.add_space(4.0);
                    ui.label("Description");
                    ui.add(
                        egui::TextEdit::multiline(&mut form.description)
                            .desired_rows(DESCRIPTION_ROWS)
                            .desired_width(f32::INFINITY),
                    );
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        save = true;
                    }
                    if ui.button("Close").clicked() {
                        close = true;
                    }
                });
            });

        if save {
            self.state.save_edit();
        } else if close {
            self.state.close_edit();
        }
    }

    fn show_notices(&mut self) {
        while let Some(notice) = self.state.take_notice() {
            let (level, text) = match notice {
                Notice::Info(text) => (rfd::MessageLevel::Info, text),
                Notice::Error(text) => (rfd::MessageLevel::Error, text),
            };
            rfd::MessageDialog::new()
                .set_level(level)
                .set_title(WINDOW_TITLE)
                .set_description(text)
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
        }
    }
}

impl eframe::App for FlowerBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_background(ctx);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.state.handle_escape();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.show_board(ui));

        self.show_toolbar(ctx);
        self.show_info_modal(ctx);
        self.show_edit_dialog(ctx);
        self.show_notices();
    }
}

fn button_rect(ui: &egui::Ui, button: &FlowerButton, container: Rect) -> Rect {
    let galley = ui.painter().layout_no_wrap(
        button.label.clone(),
        FontId::proportional(BUTTON_FONT_SIZE),
        COLOR_BUTTON_TEXT,
    );
    let size = galley.size() + vec2(BUTTON_PADDING_X, BUTTON_PADDING_Y) * 2.0;
    Rect::from_min_size(button.position.to_screen(container), size)
}

fn paint_button(ui: &egui::Ui, button: &FlowerButton, rect: Rect, hovered: bool, edit_mode: bool) {
    let painter = ui.painter();
    let fill = if button.is_dragging {
        COLOR_BUTTON_DRAGGING_BG
    } else if hovered {
        COLOR_BUTTON_HOVER_BG
    } else {
        COLOR_BUTTON_BG
    };
    painter.rect_filled(rect, egui::Rounding::same(BUTTON_CORNER_RADIUS), fill);

    if edit_mode {
        let outline = rect.shrink(1.0);
        let points = [
            outline.left_top(),
            outline.right_top(),
            outline.right_bottom(),
            outline.left_bottom(),
            outline.left_top(),
        ];
        painter.extend(Shape::dashed_line(
            &points,
            Stroke::new(1.5, COLOR_EDIT_OUTLINE),
            EDIT_DASH_LENGTH,
            EDIT_DASH_GAP,
        ));
    }

    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        &button.label,
        FontId::proportional(BUTTON_FONT_SIZE),
        COLOR_BUTTON_TEXT,
    );
}
