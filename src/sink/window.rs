//! Live preview in a raylib window.
use raylib::core::texture::RaylibTexture2D;
use raylib::prelude::{Color as RayColor, Image, RaylibDraw, RaylibHandle, RaylibThread, Texture2D};

use crate::error::SinkError;
use crate::render::FrameBuffer;
use crate::sink::ImageSink;

pub struct WindowSink {
    rl: RaylibHandle,
    thread: RaylibThread,
    texture: Texture2D,
}

impl WindowSink {
    pub fn new(width: usize, height: usize, title: &str) -> Result<Self, SinkError> {
        let (w, h) = (width as i32, height as i32);
        let (mut rl, thread) = raylib::init().size(w, h).title(title).build();
        rl.set_target_fps(60);
        let blank = Image::gen_image_color(w, h, RayColor::BLACK);
        let texture = rl
            .load_texture_from_image(&thread, &blank)
            .map_err(|e| SinkError::Window(e.to_string()))?;
        Ok(Self { rl, thread, texture })
    }
}

impl ImageSink for WindowSink {
    fn write_frame(&mut self, _frame: usize, fb: &FrameBuffer) -> Result<(), SinkError> {
        if self.rl.window_should_close() {
            return Err(SinkError::Closed);
        }
        self.texture
            .update_texture(&fb.to_rgba_bytes())
            .map_err(|e| SinkError::Window(e.to_string()))?;

        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(RayColor::BLACK);
        d.draw_texture(&self.texture, 0, 0, RayColor::WHITE);
        Ok(())
    }
}
