//! Frontend using the `minifb` crate for window creation and event
//! handling.

use std::{
    ops::ControlFlow::{self, Break},
    time::Instant,
};

use minifb::{Key, WindowOptions};

use rf::render::Context;
use rf::util::buf::Buf2;

use crate::{Frame, dims::VGA_640_480};

/// A lightweight wrapper of a `minifb` window.
pub struct Window {
    /// The wrapped minifb window.
    pub imp: minifb::Window,
    /// The width and height of the window.
    pub dims: (u32, u32),
    /// Rendering context defaults.
    pub ctx: Context,
}

/// Builder for creating `Window`s.
pub struct Builder<'title> {
    pub dims: (u32, u32),
    pub title: &'title str,
    pub target_fps: Option<u32>,
    pub opts: WindowOptions,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            dims: VGA_640_480,
            title: "// rasterfall application //",
            target_fps: Some(60),
            opts: WindowOptions::default(),
        }
    }
}

impl<'t> Builder<'t> {
    /// Sets the width and height of the window.
    pub fn dims(mut self, dims: (u32, u32)) -> Self {
        self.dims = dims;
        self
    }
    /// Sets the title of the window.
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = title;
        self
    }
    /// Sets the frame rate cap of the window. `None` means unlimited
    /// frame rate (the main loop runs as fast as possible).
    pub fn target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }
    /// Sets other `minifb` options.
    pub fn options(mut self, opts: WindowOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Creates the window.
    pub fn build(self) -> minifb::Result<Window> {
        let Self { dims, title, target_fps, opts } = self;
        let mut imp =
            minifb::Window::new(title, dims.0 as usize, dims.1 as usize, opts)?;
        if let Some(fps) = target_fps {
            imp.set_target_fps(fps as usize);
        }
        log::info!("opened window {title:?} ({} x {})", dims.0, dims.1);
        let ctx = Context::default();
        Ok(Window { imp, dims, ctx })
    }
}

impl Window {
    /// Returns a window builder.
    pub fn builder() -> Builder<'static> {
        Builder::default()
    }

    /// Updates the window content with pixel data from `fb`.
    ///
    /// The data is interpreted as colors in `0xAARRGGBB` format.
    /// # Panics
    /// If `fb.len() < self.dims.0 * self.dims.1`.
    pub fn present(&mut self, fb: &[u32]) {
        let (w, h) = self.dims;
        self.imp
            .update_with_buffer(fb, w as usize, h as usize)
            .unwrap();
    }

    /// Runs the main loop of the program, invoking the callback on each
    /// iteration to compute and draw the next frame.
    ///
    /// The framebuffer is cleared with the context's clear color before
    /// each invocation and presented after it.
    ///
    /// The main loop stops and this function returns if:
    /// * the user closes the window via the GUI (e.g. titlebar close
    ///   button);
    /// * the Esc key is pressed; or
    /// * the callback returns `ControlFlow::Break`.
    pub fn run<F>(&mut self, mut frame_fn: F)
    where
        F: FnMut(&mut Frame<Self>) -> ControlFlow<()>,
    {
        let (w, h) = self.dims;
        let mut buf = Buf2::new((w, h));
        let mut ctx = self.ctx.clone();

        let start = Instant::now();
        let mut last = Instant::now();
        loop {
            if self.should_quit() {
                break;
            }
            buf.fill(ctx.color_clear.to_argb_u32());

            let mut frame = Frame {
                t: start.elapsed(),
                dt: last.elapsed(),
                buf: &mut buf,
                win: &mut *self,
                ctx: &mut ctx,
            };

            last = Instant::now();
            if let Break(_) = frame_fn(&mut frame) {
                break;
            }
            self.present(buf.data());

            ctx.stats.borrow_mut().frames += 1;
        }
        log::info!("{}", ctx.stats.borrow());
    }

    fn should_quit(&self) -> bool {
        !self.imp.is_open() || self.imp.is_key_down(Key::Escape)
    }
}
