use crate::age_gender::core::Event;
use crate::device_display::interface::{Controls, DeviceDisplay, Field, Toggle};
use crate::device_gallery::impl_prompt::Selection;
use crate::inference::interface::Delegate;
use crate::photo::Photo;
use eframe::egui;
use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Default)]
struct DisplayBuffer {
    controls: Controls,
    photo: Option<Photo>,
    /// Bumped whenever `photo` changes so the window knows to re-upload it.
    photo_generation: u64,
    fields: HashMap<Field, String>,
    progress: Option<String>,
    toasts: Vec<(String, Instant)>,
}

impl DisplayBuffer {
    fn field(&self, field: Field) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }
}

pub struct DisplayWindow {
    display_buffer: Arc<Mutex<DisplayBuffer>>,
    event_sender: Sender<Event>,
    selection: Selection,
    path_input: String,
    texture: Option<(u64, egui::TextureHandle)>,
}

impl DisplayWindow {
    fn send(&self, event: Event) {
        let _ = self.event_sender.send(event);
    }

    fn accept_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .rev()
                .find_map(|file| file.path.clone())
        });
        if let Some(path) = dropped {
            self.path_input = path.display().to_string();
        }
    }

    fn texture_for(
        &mut self,
        ctx: &egui::Context,
        generation: u64,
        photo: &Photo,
    ) -> egui::TextureHandle {
        if let Some((loaded, texture)) = &self.texture {
            if *loaded == generation {
                return texture.clone();
            }
        }

        let rgba = photo.image.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        let texture = ctx.load_texture("photo", image, egui::TextureOptions::LINEAR);
        self.texture = Some((generation, texture.clone()));
        texture
    }

    fn toggle(&self, ui: &mut egui::Ui, delegate: Delegate, toggle: &Toggle) {
        let mut checked = toggle.checked;
        let response = ui.add_enabled(
            toggle.enabled,
            egui::Checkbox::new(&mut checked, toggle.label.as_str()),
        );
        if response.changed() {
            self.send(Event::AccelerationToggled {
                delegate,
                enabled: checked,
            });
        }
    }
}

impl eframe::App for DisplayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let buffer = match self.display_buffer.lock() {
            Ok(buffer) => buffer.clone(),
            Err(_) => return,
        };

        self.accept_dropped_files(ctx);

        egui::TopBottomPanel::top("models").show(ctx, |ui| {
            ui.add_space(6.0);
            self.toggle(ui, Delegate::NnApi, &buffer.controls.nnapi);
            self.toggle(ui, Delegate::Gpu, &buffer.controls.gpu);
            if ui
                .add_enabled(
                    buffer.controls.init_enabled,
                    egui::Button::new("Initialize models"),
                )
                .clicked()
            {
                self.send(Event::InitModelsClicked);
            }
            let status = buffer.field(Field::Status);
            if !status.is_empty() {
                ui.label(status);
            }
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("results").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(egui::RichText::new(buffer.field(Field::Gender)).size(20.0));
            ui.label(egui::RichText::new(buffer.field(Field::Age)).size(20.0));
            ui.label(egui::RichText::new(buffer.field(Field::InferenceSpeed)).monospace());
            ui.separator();

            let acquire = buffer.controls.acquire_enabled;
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(acquire, egui::Button::new("Take photo"))
                    .clicked()
                {
                    self.send(Event::TakePhotoClicked);
                }
                if ui
                    .add_enabled(acquire, egui::Button::new("Select image"))
                    .clicked()
                {
                    let path = self.path_input.trim();
                    self.selection
                        .set((!path.is_empty()).then(|| PathBuf::from(path)));
                    self.send(Event::SelectImageClicked);
                }
            });
            ui.add(
                egui::TextEdit::singleline(&mut self.path_input)
                    .hint_text("Image path, or drop a file on the window"),
            );
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(photo) = &buffer.photo {
                let texture = self.texture_for(ctx, buffer.photo_generation, photo);
                let available = ui.available_size();
                let size = texture.size_vec2();
                let scale = (available.x / size.x).min(available.y / size.y).min(1.0);
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Image::new(egui::load::SizedTexture::new(
                        texture.id(),
                        size * scale,
                    )));
                });
            }
        });

        if let Some(progress) = &buffer.progress {
            egui::Window::new("progress")
                .title_bar(false)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(progress.as_str());
                    });
                });
        }

        let toasts: Vec<&String> = buffer
            .toasts
            .iter()
            .filter(|(_, at)| at.elapsed() < TOAST_DURATION)
            .map(|(message, _)| message)
            .collect();
        if !toasts.is_empty() {
            egui::Area::new(egui::Id::new("toasts"))
                .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -160.0])
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        for message in toasts {
                            ui.label(message.as_str());
                        }
                    });
                });
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

/// Cloning shares the same buffer, so the window and the render loop can
/// each hold one.
#[derive(Clone)]
pub struct DeviceDisplayGui {
    display_buffer: Arc<Mutex<DisplayBuffer>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            display_buffer: Arc::new(Mutex::new(DisplayBuffer::default())),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn window(&self, event_sender: Sender<Event>, selection: Selection) -> DisplayWindow {
        DisplayWindow {
            display_buffer: self.display_buffer.clone(),
            event_sender,
            selection,
            path_input: String::new(),
            texture: None,
        }
    }

    /// Opens the window and blocks until it is closed. Must run on the main
    /// thread.
    pub fn run(&self, window: DisplayWindow) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([480.0, 760.0])
                .with_title("Gender & Age"),
            ..Default::default()
        };

        let context = self.context.clone();
        eframe::run_native(
            "Gender & Age",
            options,
            Box::new(move |cc| {
                if let Ok(mut slot) = context.lock() {
                    *slot = Some(cc.egui_ctx.clone());
                }
                Box::new(window)
            }),
        )
        .map_err(|e| e.to_string())?;

        Ok(())
    }

    fn buffer(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, DisplayBuffer>, Box<dyn Error + Send + Sync>> {
        Ok(self.display_buffer.lock().map_err(|e| e.to_string())?)
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn set_controls(&mut self, controls: &Controls) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.buffer()?.controls = controls.clone();
        Ok(())
    }

    fn show_photo(&mut self, photo: Option<&Photo>) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut buffer = self.buffer()?;
        let unchanged = match (&buffer.photo, photo) {
            (Some(current), Some(new)) => Arc::ptr_eq(&current.image, &new.image),
            (None, None) => true,
            _ => false,
        };
        if !unchanged {
            buffer.photo = photo.cloned();
            buffer.photo_generation += 1;
        }
        Ok(())
    }

    fn write_field(&mut self, field: Field, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.buffer()?.fields.insert(field, text.to_string());
        Ok(())
    }

    fn set_progress(&mut self, message: Option<&str>) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.buffer()?.progress = message.map(str::to_string);
        Ok(())
    }

    fn toast(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut buffer = self.buffer()?;
        buffer
            .toasts
            .retain(|(_, at)| at.elapsed() < TOAST_DURATION);
        buffer.toasts.push((message.to_string(), Instant::now()));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if let Ok(context) = self.context.lock() {
            if let Some(context) = context.as_ref() {
                context.request_repaint();
            }
        }
        Ok(())
    }
}
